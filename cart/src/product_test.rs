use super::*;

// =============================================================
// reserved_product
// =============================================================

#[test]
fn reserved_product_has_launch_fields() {
    let p = reserved_product();
    assert_eq!(p.id, RESERVED_PRODUCT_ID);
    assert_eq!(p.id, "dom-canela-61x61");
    assert_eq!(p.name, "Lançamento Porcelanato Dom Canela GR 61x61");
    assert!((p.price - 92.80).abs() < f64::EPSILON);
    assert_eq!(p.unit, "por m²");
    assert_eq!(p.image_keyword, "wood-tile");
    assert!(p.image_url.is_none());
}

// =============================================================
// image_url
// =============================================================

#[test]
fn image_url_falls_back_to_placeholder() {
    let p = reserved_product();
    assert_eq!(p.image_url(400, 300), "https://loremflickr.com/400/300/wood-tile?lock=dom-canela-61x61");
    assert_eq!(p.image_url(100, 100), "https://loremflickr.com/100/100/wood-tile?lock=dom-canela-61x61");
}

#[test]
fn image_url_prefers_explicit_url() {
    let mut p = reserved_product();
    p.image_url = Some("https://cdn.example/canela.jpg".into());
    assert_eq!(p.image_url(400, 300), "https://cdn.example/canela.jpg");
}

// =============================================================
// serde
// =============================================================

#[test]
fn deserializes_camel_case_catalog_record() {
    let json = r#"{
        "id": "azulejo-1",
        "name": "Azulejo Branco",
        "description": "Clássico.",
        "price": 45.5,
        "unit": "por m²",
        "imageKeyword": "tile"
    }"#;
    let p: Product = serde_json::from_str(json).unwrap();
    assert_eq!(p.id, "azulejo-1");
    assert_eq!(p.image_keyword, "tile");
    assert!(p.image_url.is_none());
}

#[test]
fn serializes_without_absent_image_url() {
    let value = serde_json::to_value(reserved_product()).unwrap();
    assert_eq!(value["imageKeyword"], "wood-tile");
    assert!(value.get("imageUrl").is_none());
}
