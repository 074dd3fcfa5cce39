//! Reusable TUI widgets.

pub mod form;
pub mod modal;
pub mod photo;
pub mod status_bar;

pub use form::{FormScroll, ROW_HEIGHT, draw_form};
pub use modal::{draw_modal, hit_test, modal_area};
pub use photo::draw_photo_preview;
pub use status_bar::{StatusBarContext, draw_status_bar};
