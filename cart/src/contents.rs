//! Cart contents: insertion-ordered lines keyed by product id.
//!
//! DESIGN
//! ======
//! Lines live in a `Vec` rather than a map so display order is the order of
//! first add. Carts hold a handful of lines, so lookups are linear scans.
//! Every mutation keeps two invariants: one line per product id, and
//! `quantity >= 1` (a line that would drop to zero is removed instead).

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// A product in the cart together with how many units were picked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.product.id
    }

    /// Unrounded `price * quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// The visitor's in-progress selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == product_id)
    }

    /// Quantity held for `product_id`, zero when absent.
    #[must_use]
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.get(product_id).map_or(0, |item| item.quantity)
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price * quantity` across all lines, unrounded.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.items.iter().fold(0.0, |acc, item| acc + item.line_total())
    }

    /// Add one unit of `product`, merging with an existing line by id.
    ///
    /// Returns the line's quantity after the add.
    pub fn add(&mut self, product: Product) -> u32 {
        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return item.quantity;
        }
        self.items.push(CartItem { product, quantity: 1 });
        1
    }

    /// Remove the line for `product_id`. Returns `false` when there was none.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != product_id);
        self.items.len() != before
    }

    /// Set the quantity of an existing line.
    ///
    /// `quantity <= 0` removes the line. Unknown ids are ignored and never
    /// create a line. Returns `true` when the cart changed.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|item| item.id() == product_id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "contents_test.rs"]
mod tests;
