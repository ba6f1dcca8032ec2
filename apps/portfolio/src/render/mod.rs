// Renderer: pure Profile → Document transformation, plus serializers.
// The only ambient input is today's date, read by `render_now` on every call.

pub mod date;
pub mod document;
pub mod layout;

pub use date::DateStyle;
pub use document::{Document, Element, Node};
pub use layout::{render, render_now, COPY_EMAIL_ACTION};
