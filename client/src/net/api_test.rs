use super::*;

#[test]
fn parse_catalog_reads_camel_case_products() {
    let body = r#"[
        {"id": "piso-1", "name": "Piso Cerâmico", "description": "Resistente.", "price": 45.9, "unit": "por m²", "imageKeyword": "flooring"},
        {"id": "forma-2", "name": "Forma Plástica", "description": "Reutilizável.", "price": 120.0, "unit": "por peça", "imageKeyword": "concrete-form"}
    ]"#;

    let products = parse_catalog(body).unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, "piso-1");
    assert_eq!(products[0].image_keyword, "flooring");
    assert_eq!(products[1].price, 120.0);
    assert!(products[1].image_url.is_none());
}

#[test]
fn parse_catalog_accepts_empty_list() {
    assert!(parse_catalog("[]").unwrap().is_empty());
}

#[test]
fn parse_catalog_rejects_error_body() {
    let err = parse_catalog(r#"{"error": "LLM not configured"}"#).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn parse_catalog_rejects_missing_fields() {
    let err = parse_catalog(r#"[{"id": "x", "name": "Sem preço"}]"#).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn parse_catalog_rejects_non_json() {
    assert!(matches!(parse_catalog("<html>"), Err(CatalogError::Parse(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_outside_browser_is_unavailable() {
    let result = futures::executor::block_on(ApiCatalogSource.fetch_products());
    assert_eq!(result, Err(CatalogError::Unavailable));
}
