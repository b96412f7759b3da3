//! Reusable UI components

mod platform_carousel;
mod waitlist_form;

pub use platform_carousel::*;
pub use waitlist_form::*;
