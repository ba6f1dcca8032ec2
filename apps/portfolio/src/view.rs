use std::sync::Arc;

use crate::actions::{copy_email, Clipboard, CopyOutcome, Notifier};
use crate::models::Profile;
use crate::render::{render_now, DateStyle, Document};

/// Leaf view hosting the portfolio page.
///
/// Takes no props: the profile is the builtin literal unless a host swaps it in with
/// [`PortfolioView::with_profile`]. The profile is shared read-only for the view's lifetime.
#[derive(Clone)]
pub struct PortfolioView {
    profile: Arc<Profile>,
    date_style: DateStyle,
    clipboard: Arc<dyn Clipboard>,
    notifier: Arc<dyn Notifier>,
}

impl PortfolioView {
    pub fn new(clipboard: Arc<dyn Clipboard>, notifier: Arc<dyn Notifier>) -> Self {
        PortfolioView {
            profile: Arc::new(Profile::builtin()),
            date_style: DateStyle::default(),
            clipboard,
            notifier,
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Arc::new(profile);
        self
    }

    pub fn with_date_style(mut self, style: DateStyle) -> Self {
        self.date_style = style;
        self
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Renders against today's date; nothing is cached between calls.
    pub fn render(&self) -> Document {
        render_now(&self.profile, &self.date_style)
    }

    /// Handler for the "Copy Email" control.
    pub async fn on_copy_email(&self) -> CopyOutcome {
        copy_email(&self.profile, self.clipboard.as_ref(), self.notifier.as_ref()).await
    }
}
