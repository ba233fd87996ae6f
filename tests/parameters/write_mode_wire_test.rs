//! Upload write mode wire shapes.
//!
//! References:
//! - Dropbox API, files/upload `mode` argument (WriteMode union)

use dropbox_params::{Parameter, ParamError, WriteMode};

#[test]
fn scenario_add() {
    let map = WriteMode::add().to_map().expect("add encodes");
    assert_eq!(map.len(), 1);
    assert_eq!(map[".tag"], "add");
    assert!(!map.contains_key("update"));
}

#[test]
fn scenario_overwrite() {
    let map = WriteMode::overwrite().to_map().expect("overwrite encodes");
    assert_eq!(map.len(), 1);
    assert_eq!(map[".tag"], "overwrite");
    assert!(!map.contains_key("update"));
}

#[test]
fn scenario_update() {
    let mode = WriteMode::update("0123456789abcdef").expect("valid revision");
    let map = mode.to_map().expect("update encodes");
    assert_eq!(map.len(), 2);
    assert_eq!(map[".tag"], "update");
    assert_eq!(map["update"], "0123456789abcdef");
}

#[test]
fn scenario_update_empty_revision_is_invalid_argument() {
    let err = WriteMode::update("").unwrap_err();
    assert!(matches!(err, ParamError::InvalidArgument(_)));
    assert!(err.to_string().contains("revision"));
}

#[test]
fn update_never_emits_null_revision_for_other_modes() {
    for mode in [WriteMode::add(), WriteMode::overwrite()] {
        let text = serde_json::to_string(&mode.to_json().unwrap()).unwrap();
        assert!(!text.contains("null"), "unexpected null in {text}");
    }
}
