//! Catalog product record and the locally authored launch product.

use serde::{Deserialize, Serialize};

/// Identifier of the launch product that heads every loaded catalog.
pub const RESERVED_PRODUCT_ID: &str = "dom-canela-61x61";

const IMAGE_SERVICE_URL: &str = "https://loremflickr.com";

/// A product offered in the storefront.
///
/// Field names serialize in camelCase to match the catalog JSON produced by
/// the generative API (`imageKeyword`, `imageUrl`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub unit: String,
    pub image_keyword: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Image to display for this product at the given size.
    ///
    /// An explicit `image_url` wins; otherwise a placeholder keyed by the
    /// image keyword and locked to the product id so it stays stable across
    /// renders.
    #[must_use]
    pub fn image_url(&self, width: u32, height: u32) -> String {
        match &self.image_url {
            Some(url) => url.clone(),
            None => format!("{IMAGE_SERVICE_URL}/{width}/{height}/{}?lock={}", self.image_keyword, self.id),
        }
    }
}

/// The launch product prepended to every successful catalog load.
#[must_use]
pub fn reserved_product() -> Product {
    Product {
        id: RESERVED_PRODUCT_ID.to_owned(),
        name: "Lançamento Porcelanato Dom Canela GR 61x61".to_owned(),
        description: "Elegância e sofisticação em um porcelanato de alta qualidade, perfeito para ambientes modernos e aconchegantes.".to_owned(),
        price: 92.80,
        unit: "por m²".to_owned(),
        image_keyword: "wood-tile".to_owned(),
        image_url: None,
    }
}

#[cfg(test)]
#[path = "product_test.rs"]
mod tests;
