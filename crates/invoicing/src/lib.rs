//! Invoice projection module.
//!
//! Turns a cart snapshot into an immutable, itemized invoice, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). Time
//! and numbering come in through collaborators so checkouts stay testable.

pub mod invoice;
pub mod number;

pub use invoice::{Invoice, InvoiceLine, InvoiceNumber, create_invoice};
pub use number::{InvoiceNumberSource, SequenceNumberSource, TimestampNumberSource};
