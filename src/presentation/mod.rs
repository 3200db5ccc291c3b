//! Presentation layer adapter.
//!
//! Renders nothing itself; it produces the image identifier and message a
//! UI (or the `rps` CLI) displays after each tap.

mod view;

pub use view::{outcome_message, Control, GestureImage, Presenter, RoundView};
