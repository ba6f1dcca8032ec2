pub mod clipboard;
pub mod host;

pub use clipboard::{copy_email, Clipboard, CopyOutcome, Notifier, COPIED_MESSAGE, FAILED_MESSAGE};
pub use host::{ClipboardCommand, ConsoleNotifier, SystemClipboard, UnavailableClipboard};
