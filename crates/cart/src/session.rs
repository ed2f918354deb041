//! Session-scoped cart handle for multi-threaded hosts.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use yadak_catalog::Product;
use yadak_core::ProductId;

use crate::cart::{Cart, CommandOutcome};

/// Cloneable cart handle that serializes all access through one mutex.
///
/// Cart commands are check-then-act (find entry, compare against the stock
/// ceiling, then write), so interleaving two of them could admit more units
/// than the ceiling allows. Hosts with more than one thread route every
/// command through this handle; single-threaded callers can own a [`Cart`]
/// directly.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    inner: Arc<Mutex<Cart>>,
}

impl SharedCart {
    /// Create a handle over a fresh, empty cart.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Cart::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        // A poisoned lock means another thread panicked while holding it.
        // Cart commands themselves never panic, so the state is still
        // coherent; recover it instead of propagating the poison.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run a read-only closure against the cart.
    pub fn with<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        f(&self.lock())
    }

    /// Run a mutating closure against the cart.
    ///
    /// The whole closure executes under the lock, so multi-step flows (check
    /// a quantity, then change it) stay atomic.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Cart) -> R) -> R {
        f(&mut self.lock())
    }

    /// Clone the current state for observers and projections.
    pub fn snapshot(&self) -> Cart {
        self.lock().clone()
    }

    pub fn add_item(&self, product: &Product, quantity: u32) -> CommandOutcome {
        let outcome = self.lock().add_item(product, quantity);
        debug!(product_id = %product.id, quantity, ?outcome, "add_item command");
        outcome
    }

    pub fn remove_item(&self, product_id: &ProductId) -> CommandOutcome {
        let outcome = self.lock().remove_item(product_id);
        debug!(product_id = %product_id, ?outcome, "remove_item command");
        outcome
    }

    pub fn update_quantity(&self, product_id: &ProductId, quantity: u32) -> CommandOutcome {
        let outcome = self.lock().update_quantity(product_id, quantity);
        debug!(product_id = %product_id, quantity, ?outcome, "update_quantity command");
        outcome
    }

    pub fn clear(&self) {
        self.lock().clear();
        debug!("clear_cart command");
    }

    pub fn total_price(&self) -> u64 {
        self.lock().total_price()
    }

    pub fn total_items(&self) -> u64 {
        self.lock().total_items()
    }

    pub fn item_quantity(&self, product_id: &ProductId) -> u32 {
        self.lock().item_quantity(product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
