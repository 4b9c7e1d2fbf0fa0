use super::*;
use crate::product::reserved_product;

#[test]
fn load_state_default_is_loading() {
    assert_eq!(LoadState::default(), LoadState::Loading);
    assert!(LoadState::default().is_loading());
}

#[test]
fn loaded_exposes_products() {
    let state = LoadState::Loaded(vec![reserved_product()]);
    assert!(!state.is_loading());
    assert_eq!(state.products().len(), 1);
    assert!(state.error_message().is_none());
}

#[test]
fn failed_exposes_message_and_no_products() {
    let state = LoadState::Failed(LOAD_FAILED_MESSAGE.to_owned());
    assert_eq!(state.error_message(), Some(LOAD_FAILED_MESSAGE));
    assert!(state.products().is_empty());
}

#[test]
fn catalog_error_messages() {
    assert_eq!(CatalogError::Status { status: 502 }.to_string(), "catalog request returned status 502");
    assert_eq!(CatalogError::Parse("expected array".into()).to_string(), "catalog response parse failed: expected array");
    assert_eq!(CatalogError::Unavailable.to_string(), "catalog source unavailable");
}
