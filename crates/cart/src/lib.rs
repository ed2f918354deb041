//! Shopping cart domain module.
//!
//! The cart state engine: deterministic, synchronous command handling over an
//! in-memory cart, implemented purely as domain logic (no IO, no HTTP, no
//! storage). [`session::SharedCart`] adds a mutex-serialized handle for
//! multi-threaded hosts.

pub mod cart;
pub mod session;

pub use cart::{Cart, CartItem, CommandOutcome};
pub use session::SharedCart;
