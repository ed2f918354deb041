use serde::{Deserialize, Serialize};

use yadak_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;
use crate::seed;

/// Number of products shown per catalog page.
pub const PAGE_SIZE: usize = 9;

/// Ordered, read-only collection of products, unique by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    ///
    /// Order is preserved: listings and pages follow insertion order.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
        }

        Ok(Self { products })
    }

    /// The storefront's built-in spare-parts catalog: electrical parts for
    /// the Pride, Peugeot 206 and Peugeot 405, priced in Toman.
    pub fn seeded() -> Self {
        Self {
            products: seed::seed_products(),
        }
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Like [`get`](Self::get), but an absent id is a domain error.
    pub fn require(&self, id: &ProductId) -> DomainResult<&Product> {
        self.get(id).ok_or_else(DomainError::not_found)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products on the given zero-based page.
    ///
    /// Pages past the end are empty rather than an error.
    pub fn page(&self, index: usize) -> &[Product] {
        let start = index.saturating_mul(PAGE_SIZE).min(self.products.len());
        let end = start.saturating_add(PAGE_SIZE).min(self.products.len());
        &self.products[start..end]
    }

    /// Number of pages needed to list the whole catalog.
    pub fn page_count(&self) -> usize {
        self.products.len().div_ceil(PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(id: &str, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            code: format!("CODE-{id}"),
            name: format!("قطعه {id}"),
            price: 10_000,
            stock,
        }
    }

    #[test]
    fn new_catalog_rejects_duplicate_ids() {
        let err = Catalog::new(vec![part("P-01", 5), part("P-02", 5), part("P-01", 9)]).unwrap_err();
        match err {
            DomainError::Conflict(msg) if msg.contains("P-01") => {}
            _ => panic!("Expected Conflict error for duplicate product id"),
        }
    }

    #[test]
    fn catalog_preserves_insertion_order() {
        let catalog = Catalog::new(vec![part("P-03", 1), part("P-01", 1), part("P-02", 1)]).unwrap();

        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P-03", "P-01", "P-02"]);
    }

    #[test]
    fn get_finds_product_by_id() {
        let catalog = Catalog::new(vec![part("P-01", 5), part("P-02", 3)]).unwrap();

        assert_eq!(catalog.get(&ProductId::new("P-02")).map(|p| p.stock), Some(3));
        assert!(catalog.get(&ProductId::new("P-99")).is_none());
    }

    #[test]
    fn require_errors_on_unknown_id() {
        let catalog = Catalog::new(vec![part("P-01", 5)]).unwrap();

        assert!(catalog.require(&ProductId::new("P-01")).is_ok());
        assert_eq!(catalog.require(&ProductId::new("P-99")), Err(DomainError::not_found()));
    }

    #[test]
    fn pages_split_at_page_size() {
        let products: Vec<Product> = (1..=11).map(|i| part(&format!("P-{i:02}"), 1)).collect();
        let catalog = Catalog::new(products).unwrap();

        assert_eq!(catalog.page_count(), 2);
        assert_eq!(catalog.page(0).len(), PAGE_SIZE);
        assert_eq!(catalog.page(1).len(), 2);
        assert_eq!(catalog.page(1)[0].id, ProductId::new("P-10"));
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let catalog = Catalog::new(vec![part("P-01", 1)]).unwrap();

        assert!(catalog.page(1).is_empty());
        assert!(catalog.page(usize::MAX).is_empty());
    }

    #[test]
    fn empty_catalog_has_no_pages() {
        let catalog = Catalog::new(Vec::new()).unwrap();

        assert!(catalog.is_empty());
        assert_eq!(catalog.page_count(), 0);
        assert!(catalog.page(0).is_empty());
    }

    #[test]
    fn seeded_catalog_fills_three_pages() {
        let catalog = Catalog::seeded();

        assert_eq!(catalog.len(), 27);
        assert_eq!(catalog.page_count(), 3);
        assert_eq!(catalog.page(0).len(), PAGE_SIZE);
        assert_eq!(catalog.page(2).len(), PAGE_SIZE);
    }

    #[test]
    fn seeded_catalog_has_unique_ids() {
        let catalog = Catalog::seeded();

        // Re-validating through the constructor exercises the duplicate check.
        assert!(Catalog::new(catalog.products().to_vec()).is_ok());
    }

    #[test]
    fn seeded_catalog_has_valid_records() {
        for product in Catalog::seeded().products() {
            assert!(!product.code.trim().is_empty());
            assert!(!product.name.trim().is_empty());
            assert!(product.price > 0);
        }
    }

    #[test]
    fn seeded_catalog_includes_sold_out_parts() {
        let catalog = Catalog::seeded();

        assert!(catalog.products().iter().any(|p| !p.in_stock()));
        assert!(catalog.products().iter().any(|p| p.in_stock()));
    }
}
