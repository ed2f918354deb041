use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use yadak_cart::Cart;
use yadak_core::{Clock, DomainError, DomainResult};

use crate::number::InvoiceNumberSource;

/// Invoice number, e.g. `INV-1724577600000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One invoice row, copied out of a cart item at projection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// Part number, as shown on the catalog listing.
    pub code: String,
    pub name: String,
    /// Unit price in Toman.
    pub unit_price: u64,
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub line_total: u64,
}

/// Immutable, itemized bill for one checkout.
///
/// A value snapshot: later cart commands never reach into an already issued
/// invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    number: InvoiceNumber,
    issued_at: DateTime<Utc>,
    lines: Vec<InvoiceLine>,
    grand_total: u64,
}

impl Invoice {
    pub fn number(&self) -> &InvoiceNumber {
        &self.number
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Lines in cart order.
    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    /// Sum of all line totals, in Toman.
    pub fn grand_total(&self) -> u64 {
        self.grand_total
    }
}

/// Project a cart snapshot into an invoice.
///
/// Lines follow cart order with `line_total = unit_price * quantity`; the
/// grand total is the checked sum of the line totals and agrees with the
/// cart's own `total_price` whenever projection succeeds. An empty cart is
/// refused with [`DomainError::EmptyCart`]. The number source and the clock
/// are each consulted exactly once.
pub fn create_invoice(
    cart: &Cart,
    numbers: &impl InvoiceNumberSource,
    clock: &impl Clock,
) -> DomainResult<Invoice> {
    if cart.is_empty() {
        return Err(DomainError::empty_cart());
    }

    let mut lines = Vec::with_capacity(cart.len());
    let mut grand_total: u64 = 0;

    for item in cart.items() {
        // u128 holds any u64 * u32 product; the try_from is the range check.
        let amount = u128::from(item.product.price) * u128::from(item.quantity);
        let line_total = u64::try_from(amount)
            .map_err(|_| DomainError::invariant("invoice line amount overflow"))?;
        grand_total = grand_total
            .checked_add(line_total)
            .ok_or_else(|| DomainError::invariant("invoice total overflow"))?;

        lines.push(InvoiceLine {
            code: item.product.code.clone(),
            name: item.product.name.clone(),
            unit_price: item.product.price,
            quantity: item.quantity,
            line_total,
        });
    }

    Ok(Invoice {
        number: numbers.next_number(),
        issued_at: clock.now(),
        lines,
        grand_total,
    })
}
