use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_catalog::Product;

/// A (product reference, quantity) pair inside a cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Reference into the product collection
    #[serde(rename = "product")]
    pub product_id: Uuid,
    /// Units of the referenced product (positive)
    pub quantity: u32,
}

/// Cart entity - an ordered sequence of line items stored in MongoDB
///
/// A user document may reference a cart; that relationship is neither
/// enforced nor inspected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Line items, in the order they were added
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// A line item after the populate step
#[derive(Debug, Clone, Serialize)]
pub struct PopulatedItem {
    pub product_id: Uuid,
    pub quantity: u32,
    /// The joined product record; `None` when the reference dangles
    pub product: Option<Product>,
}

/// A cart with every line item's product reference resolved
#[derive(Debug, Clone, Serialize)]
pub struct PopulatedCart {
    pub id: Uuid,
    pub items: Vec<PopulatedItem>,
}

/// A valued line item (resolvable references only)
#[derive(Debug, Clone, Serialize)]
pub struct PricedItem {
    pub product: Product,
    pub quantity: u32,
    /// quantity × unit price, in cents
    pub subtotal: i64,
}

/// Cart valuation result
///
/// `total` is exact integer money: the sum in cents of `quantity × price`
/// over every line item whose product still exists. Items whose referenced
/// product is gone contribute nothing and are surfaced in
/// `missing_products` for the caller to warn about.
#[derive(Debug, Clone, Serialize)]
pub struct PricedCart {
    pub id: Uuid,
    pub items: Vec<PricedItem>,
    /// Product ids referenced by the cart that no longer exist
    pub missing_products: Vec<Uuid>,
    /// Σ quantity × price over resolvable items, in cents
    pub total: i64,
}

impl PopulatedCart {
    /// Value the cart: price each resolvable item, set aside dangling
    /// references, sum the total in cents
    pub fn into_priced(self) -> PricedCart {
        let mut items = Vec::with_capacity(self.items.len());
        let mut missing_products = Vec::new();
        let mut total: i64 = 0;

        for item in self.items {
            match item.product {
                Some(product) => {
                    let subtotal = i64::from(item.quantity) * product.price;
                    total += subtotal;
                    items.push(PricedItem {
                        product,
                        quantity: item.quantity,
                        subtotal,
                    });
                }
                None => missing_products.push(item.product_id),
            }
        }

        PricedCart {
            id: self.id,
            items,
            missing_products,
            total,
        }
    }
}

impl PricedCart {
    /// True when at least one line item referenced a deleted product
    pub fn has_missing_products(&self) -> bool {
        !self.missing_products.is_empty()
    }
}
