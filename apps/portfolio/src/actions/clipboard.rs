//! Copy-email action and the host capabilities it needs.
//!
//! The action never fails from the caller's point of view: every invocation ends in
//! exactly one notification, and the outcome is returned for hosts that want it.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::ClipboardError;
use crate::models::Profile;

pub const COPIED_MESSAGE: &str = "Email copied to clipboard";
pub const FAILED_MESSAGE: &str = "Copy failed";

/// Write-only access to the system clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Alert-style notification surface provided by the host.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(ClipboardError),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied)
    }

    pub fn message(&self) -> &'static str {
        match self {
            CopyOutcome::Copied => COPIED_MESSAGE,
            CopyOutcome::Failed(_) => FAILED_MESSAGE,
        }
    }
}

/// Writes the profile's contact email to the clipboard and notifies the user once.
/// No retry: a rejected or unavailable clipboard yields a single failure notice.
pub async fn copy_email(
    profile: &Profile,
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
) -> CopyOutcome {
    let outcome = match clipboard.write_text(profile.contact.trim()).await {
        Ok(()) => {
            info!("Contact email copied to clipboard");
            CopyOutcome::Copied
        }
        Err(e) => {
            warn!("Copy email failed: {e}");
            CopyOutcome::Failed(e)
        }
    };

    notifier.notify(outcome.message());
    outcome
}
