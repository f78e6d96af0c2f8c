//! The product catalog.

use std::collections::HashSet;

use stockroom_core::error::{PersistenceError, StoreError};
use stockroom_core::movement::Direction;
use stockroom_core::product::Product;
use stockroom_core::quantity::{Quantity, QuantityError};

/// Outcome of a successful stock adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    /// The product after the adjustment.
    pub product: Product,
    /// Which way stock moved.
    pub direction: Direction,
    /// How many units moved.
    pub change: Quantity,
}

/// Active products keyed by id, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a catalog from persisted products.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Corrupt` if two products share an id or a
    /// product has a blank id, name or category.
    pub fn restore(products: Vec<Product>) -> Result<Self, PersistenceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.trim().is_empty()
                || product.name.trim().is_empty()
                || product.category.trim().is_empty()
            {
                return Err(PersistenceError::Corrupt(format!(
                    "product {:?} has a blank field",
                    product.id
                )));
            }
            if !seen.insert(product.id.as_str()) {
                return Err(PersistenceError::Corrupt(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// Returns all products in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Returns `true` if a product with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of active products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Appends a new product.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if the id is taken; the existing
    /// product is left as is.
    pub(crate) fn insert(&mut self, product: Product) -> Result<&Product, StoreError> {
        if self.contains(&product.id) {
            return Err(StoreError::DuplicateId(product.id));
        }
        self.products.push(product);
        Ok(&self.products[self.products.len() - 1])
    }

    /// Detaches a product, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has `id`.
    pub(crate) fn remove(&mut self, id: &str) -> Result<Product, StoreError> {
        let index = self
            .products
            .iter()
            .position(|product| product.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        Ok(self.products.remove(index))
    }

    /// Applies a signed delta to a product's quantity.
    ///
    /// Nothing is modified unless the whole adjustment is valid.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` if no product has `id`.
    /// - `StoreError::InvalidQuantity` if `delta` is zero or the result
    ///   overflows.
    /// - `StoreError::NegativeStock` if the result would be below zero.
    pub(crate) fn adjust(&mut self, id: &str, delta: i64) -> Result<Adjustment, StoreError> {
        if !self.contains(id) {
            return Err(StoreError::NotFound(id.to_owned()));
        }
        let direction = Direction::of_delta(delta).ok_or(QuantityError::NotPositive)?;
        let change = Quantity::new(delta.unsigned_abs())?;
        self.shift(id, direction, change)
    }

    /// Moves `change` units in `direction`, over the full `u64` range.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` if no product has `id`.
    /// - `StoreError::InvalidQuantity` if stock in overflows.
    /// - `StoreError::NegativeStock` if stock out exceeds what is on hand.
    pub(crate) fn shift(
        &mut self,
        id: &str,
        direction: Direction,
        change: Quantity,
    ) -> Result<Adjustment, StoreError> {
        let product = self
            .products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;

        let next = match direction {
            Direction::In => product
                .quantity
                .checked_add(change.get())
                .ok_or(QuantityError::TooLarge)?,
            Direction::Out => product.quantity.checked_sub(change.get()).ok_or_else(|| {
                StoreError::NegativeStock {
                    product_id: product.id.clone(),
                    available: product.quantity,
                    requested: change.get(),
                }
            })?,
        };

        product.quantity = next;
        Ok(Adjustment {
            product: product.clone(),
            direction,
            change,
        })
    }
}
