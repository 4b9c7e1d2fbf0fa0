//! Catalog service: generative API prompt to product list.
//!
//! DESIGN
//! ======
//! Asks the LLM for a small fictitious portfolio of construction-finish
//! products in JSON mode, constrained by a response schema, and parses the
//! first candidate's text as `Vec<Product>`. The launch product is NOT added
//! here; the client-side `CartStore` prepends it on every successful load.

use cart::Product;
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::llm::LlmGenerate;
use crate::llm::types::{GenerateRequest, LlmError};
use crate::rate_limit::RateLimitError;
use crate::state::AppState;

const DEFAULT_CATALOG_MAX_TOKENS: u32 = 8192;
const DEFAULT_CATALOG_PRODUCT_COUNT: u32 = 7;

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogGenError {
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("malformed catalog: {0}")]
    MalformedCatalog(String),
    #[error("rate limited: {0}")]
    RateLimited(#[from] RateLimitError),
}

/// Tunables for catalog generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogSettings {
    pub max_tokens: u32,
    pub product_count: u32,
}

impl CatalogSettings {
    /// Read `CATALOG_MAX_TOKENS` and `CATALOG_PRODUCT_COUNT`, falling back to
    /// defaults when unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_tokens: env_parse("CATALOG_MAX_TOKENS", DEFAULT_CATALOG_MAX_TOKENS),
            product_count: env_parse("CATALOG_PRODUCT_COUNT", DEFAULT_CATALOG_PRODUCT_COUNT),
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { max_tokens: DEFAULT_CATALOG_MAX_TOKENS, product_count: DEFAULT_CATALOG_PRODUCT_COUNT }
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Generate a fresh catalog for one `GET /api/catalog` request.
///
/// # Errors
///
/// Fails when no LLM is configured, the rate limit is exhausted, the LLM call
/// fails, or the model output is not a list of products.
pub async fn generate_catalog(state: &AppState) -> Result<Vec<Product>, CatalogGenError> {
    let Some(llm) = state.llm.as_ref() else {
        return Err(CatalogGenError::LlmNotConfigured);
    };
    state.rate_limiter.check_and_record()?;
    generate_products(llm.as_ref(), state.catalog_settings).await
}

/// Prompt `llm` for products and parse the answer.
///
/// # Errors
///
/// Returns [`CatalogGenError::Llm`] when the call fails and
/// [`CatalogGenError::MalformedCatalog`] when the output does not parse.
pub async fn generate_products(
    llm: &dyn LlmGenerate,
    settings: CatalogSettings,
) -> Result<Vec<Product>, CatalogGenError> {
    let request = GenerateRequest {
        prompt: build_prompt(settings.product_count),
        system: None,
        max_tokens: settings.max_tokens,
        response_schema: Some(product_list_schema()),
    };

    let response = llm.generate(&request).await.inspect_err(|e| {
        warn!(error = %e, retryable = e.retryable(), "catalog: generation failed");
    })?;
    info!(
        model = %response.model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "catalog: generation finished"
    );

    let products = parse_products(&response.text).inspect_err(|e| {
        warn!(error = %e, finish_reason = ?response.finish_reason, "catalog: rejecting model output");
    })?;
    info!(count = products.len(), "catalog: products generated");
    Ok(products)
}

// =============================================================================
// PROMPT + SCHEMA
// =============================================================================

fn build_prompt(count: u32) -> String {
    format!(
        "Gere uma lista de {count} produtos fictícios para o portfólio da Chagas Representações. \
         Os produtos devem ser das categorias: pisos, porcelanatos, azulejos, isopor e formas para construção. \
         Para cada produto, forneça um ID único, nome, uma descrição curta e atraente (1-2 frases), \
         um preço realista (entre 30 e 500), uma unidade (como 'por m²', 'por peça', 'por painel'), \
         e uma palavra-chave de imagem em INGLÊS de uma só palavra \
         (ex: 'tile', 'flooring', 'styrofoam', 'concrete-form', 'porcelain'). \
         Garanta que o ID seja uma string única."
    )
}

fn string_field(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

/// Gemini response schema: an array of product objects.
fn product_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": string_field("A unique identifier for the product."),
                "name": string_field("The name of the product."),
                "description": string_field("A short, enticing description of the product."),
                "price": { "type": "NUMBER", "description": "The price of the product." },
                "unit": string_field("The unit of measurement for the price (e.g., \"por m²\", \"por peça\")."),
                "imageKeyword": string_field("A single ENGLISH keyword for generating an image."),
            },
            "required": ["id", "name", "description", "price", "unit", "imageKeyword"],
        },
    })
}

// =============================================================================
// PARSING
// =============================================================================

/// Parse model output into products.
///
/// Accepts a bare JSON array, optionally wrapped in a Markdown code fence.
/// Rejects anything else, and rejects the whole list if any product has an
/// empty id or a negative or non-finite price.
pub fn parse_products(text: &str) -> Result<Vec<Product>, CatalogGenError> {
    let body = strip_code_fence(text);
    let value: Value = serde_json::from_str(body).map_err(|e| CatalogGenError::MalformedCatalog(e.to_string()))?;
    if !value.is_array() {
        return Err(CatalogGenError::MalformedCatalog(
            "API did not return an array of products".into(),
        ));
    }
    let products: Vec<Product> =
        serde_json::from_value(value).map_err(|e| CatalogGenError::MalformedCatalog(e.to_string()))?;

    for product in &products {
        if product.id.trim().is_empty() {
            return Err(CatalogGenError::MalformedCatalog("product with empty id".into()));
        }
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(CatalogGenError::MalformedCatalog(format!(
                "product {} has invalid price {}",
                product.id, product.price
            )));
        }
    }
    Ok(products)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence line.
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
