//! Presentation of a [`LookupReport`](crate::lookup::LookupReport).
//!
//! All default substitution for missing profile fields happens here.

mod json;
mod phone;
mod text;

pub use json::render_json;
pub use phone::format_public_phone;
pub use text::render_report;

/// Labels are padded to this width before the `: ` separator.
pub const LABEL_WIDTH: usize = 23;
