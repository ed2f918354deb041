use serde::{Deserialize, Serialize};

use yadak_core::{DomainError, DomainResult, ProductId};

/// A catalog product as supplied by the storefront's data source.
///
/// Immutable from the cart's point of view: commands read `price` and `stock`
/// but never write back. Stock is a catalog attribute, not a reservation
/// count; the cart only uses it as the ceiling for purchasable quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Part number shown on listings and invoices.
    pub code: String,
    pub name: String,
    /// Price in Toman (integer, no subdivision).
    pub price: u64,
    /// Units available; the hard ceiling for cart quantities.
    pub stock: u32,
}

impl Product {
    /// Create a validated product record.
    pub fn new(
        id: impl Into<ProductId>,
        code: impl Into<String>,
        name: impl Into<String>,
        price: u64,
        stock: u32,
    ) -> DomainResult<Self> {
        let code = code.into();
        let name = name.into();

        if code.trim().is_empty() {
            return Err(DomainError::validation("product code cannot be empty"));
        }

        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }

        Ok(Self {
            id: id.into(),
            code,
            name,
            price,
            stock,
        })
    }

    /// Whether the storefront can sell this product at all.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_carries_given_fields() {
        let product = Product::new("P-01", "SKT-101", "سوکت دوخانه پراید", 45_000, 12).unwrap();

        assert_eq!(product.id, ProductId::new("P-01"));
        assert_eq!(product.code, "SKT-101");
        assert_eq!(product.name, "سوکت دوخانه پراید");
        assert_eq!(product.price, 45_000);
        assert_eq!(product.stock, 12);
    }

    #[test]
    fn new_product_rejects_empty_code() {
        let err = Product::new("P-01", "   ", "سوکت دوخانه پراید", 45_000, 12).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty code"),
        }
    }

    #[test]
    fn new_product_rejects_empty_name() {
        let err = Product::new("P-01", "SKT-101", "", 45_000, 12).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn zero_stock_product_is_not_in_stock() {
        let sold_out = Product::new("P-18", "RLE-302", "رله شیشه بالابر پژو 405", 96_000, 0).unwrap();
        let available = Product::new("P-01", "SKT-101", "سوکت دوخانه پراید", 45_000, 1).unwrap();

        assert!(!sold_out.in_stock());
        assert!(available.in_stock());
    }
}
