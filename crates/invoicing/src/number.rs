//! Invoice number generation.

use std::sync::atomic::{AtomicU64, Ordering};

use yadak_core::Clock;

use crate::invoice::InvoiceNumber;

/// Yields the number for each newly issued invoice.
///
/// Implementations must hand out distinct values across the invoices of one
/// process run; nothing here promises uniqueness across runs.
pub trait InvoiceNumberSource {
    fn next_number(&self) -> InvoiceNumber;
}

/// `INV-` plus milliseconds since the Unix epoch, read from the given clock.
///
/// The storefront's historical numbering. Two invoices issued within the
/// same millisecond collide; hosts that can check out that fast should use
/// [`SequenceNumberSource`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampNumberSource<C> {
    clock: C,
}

impl<C: Clock> TimestampNumberSource<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> InvoiceNumberSource for TimestampNumberSource<C> {
    fn next_number(&self) -> InvoiceNumber {
        InvoiceNumber::new(format!("INV-{}", self.clock.now().timestamp_millis()))
    }
}

/// `INV-` plus a zero-padded in-process sequence: `INV-000001`, `INV-000002`.
///
/// Deterministic and collision-free within a process run.
#[derive(Debug, Default)]
pub struct SequenceNumberSource {
    issued: AtomicU64,
}

impl SequenceNumberSource {
    /// Start counting from `INV-000001`.
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
        }
    }
}

impl InvoiceNumberSource for SequenceNumberSource {
    fn next_number(&self) -> InvoiceNumber {
        let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        InvoiceNumber::new(format!("INV-{n:06}"))
    }
}
