use serde::{Deserialize, Serialize};

use yadak_catalog::Product;
use yadak_core::ProductId;

/// One cart entry: a product and how many units of it the shopper wants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// `unit price * quantity` for this entry, saturating at `u64::MAX`.
    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Outcome of a cart command.
///
/// Rejections are not errors: the command leaves the cart untouched and
/// callers may ignore the outcome entirely. The discriminant exists so hosts
/// and tests can tell an applied command from a silently refused one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command was applied.
    Accepted,
    /// The requested quantity would exceed the product's stock ceiling.
    RejectedStockExceeded,
    /// No cart item exists for the given product id.
    RejectedNotFound,
    /// Zero units can never be added.
    RejectedZeroQuantity,
}

impl CommandOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, CommandOutcome::Accepted)
    }
}

/// In-memory shopping cart: ordered items, unique by product id.
///
/// Invariants, upheld by every command:
/// - at most one item per product id;
/// - quantities are at least 1 and never admitted above the stock ceiling;
/// - items keep their insertion order (quantity updates do not move them).
///
/// Commands are synchronous and deterministic. Each shopping session owns
/// its own `Cart`; nothing here is process-global.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add `quantity` units of `product`, merging with an existing entry.
    ///
    /// The merged total is capped by the stock of the record passed in; a
    /// request that would end above the ceiling is refused and the cart stays
    /// exactly as it was. A merge keeps the entry's position and the product
    /// record it was first added with.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> CommandOutcome {
        if quantity == 0 {
            return CommandOutcome::RejectedZeroQuantity;
        }

        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => {
                // u64 math so a near-ceiling merge cannot wrap before the check.
                let merged = u64::from(item.quantity) + u64::from(quantity);
                if merged > u64::from(product.stock) {
                    return CommandOutcome::RejectedStockExceeded;
                }
                item.quantity = merged as u32;
            }
            None => {
                if quantity > product.stock {
                    return CommandOutcome::RejectedStockExceeded;
                }
                self.items.push(CartItem {
                    product: product.clone(),
                    quantity,
                });
            }
        }

        CommandOutcome::Accepted
    }

    /// Remove the entry for `product_id`.
    ///
    /// Removing an absent product is a benign no-op, so the command is
    /// idempotent.
    pub fn remove_item(&mut self, product_id: &ProductId) -> CommandOutcome {
        let before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);

        if self.items.len() == before {
            CommandOutcome::RejectedNotFound
        } else {
            CommandOutcome::Accepted
        }
    }

    /// Set the quantity for `product_id`'s entry.
    ///
    /// Zero removes the entry (the cart never stores zero-quantity items); a
    /// value above the stored product's stock is refused and nothing changes.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) -> CommandOutcome {
        let Some(pos) = self.items.iter().position(|i| &i.product.id == product_id) else {
            return CommandOutcome::RejectedNotFound;
        };

        if quantity == 0 {
            self.items.remove(pos);
            return CommandOutcome::Accepted;
        }

        if quantity > self.items[pos].product.stock {
            return CommandOutcome::RejectedStockExceeded;
        }

        self.items[pos].quantity = quantity;
        CommandOutcome::Accepted
    }

    /// Drop every item, returning the cart to its initial empty state.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `price * quantity` over all items, in Toman.
    ///
    /// Saturates at `u64::MAX` instead of wrapping; the invoice projection
    /// recomputes the same sum with checked arithmetic and reports overflow
    /// as an error.
    pub fn total_price(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |total, item| total.saturating_add(item.line_total()))
    }

    /// Total number of units across all items.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Quantity in the cart for `product_id`; `0` when absent.
    pub fn item_quantity(&self, product_id: &ProductId) -> u32 {
        self.items
            .iter()
            .find(|i| &i.product.id == product_id)
            .map_or(0, |i| i.quantity)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
