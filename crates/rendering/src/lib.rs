//! Invoice document rendering.
//!
//! Turns an issued [`Invoice`](yadak_invoicing::Invoice) into a printable
//! text document using fa-IR digit conventions. Presentation only: nothing
//! here feeds back into totals or cart state.

pub mod document;
pub mod format;

pub use document::render_invoice;
pub use format::{format_date, format_toman, to_persian_digits};
