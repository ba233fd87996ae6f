//! Write mode embedded in an upload request body.

use dropbox_params::{
    JsonEncodeOptions, Parameter, ParamError, WriteMode, decode_parameter,
    encode_parameter_as_json,
};
use serde::Serialize;

#[derive(Serialize)]
struct UploadArg {
    path: String,
    mode: serde_json::Value,
    autorename: bool,
}

#[test]
fn mode_nests_as_sub_object() {
    let mode = WriteMode::update("015f9c8a1b2c").unwrap();
    let arg = UploadArg {
        path: "/Homework/math/Matrices.txt".into(),
        mode: mode.to_json().unwrap(),
        autorename: true,
    };
    let body = serde_json::to_value(&arg).unwrap();
    assert_eq!(body["mode"][".tag"], "update");
    assert_eq!(body["mode"]["update"], "015f9c8a1b2c");
    assert_eq!(body["autorename"], true);
}

#[test]
fn encoded_bytes_decode_back() {
    for mode in [
        WriteMode::add(),
        WriteMode::overwrite(),
        WriteMode::update("a1b2c3").unwrap(),
    ] {
        let bytes = encode_parameter_as_json(&mode, JsonEncodeOptions::default()).unwrap();
        let back: WriteMode = decode_parameter(&bytes).unwrap();
        assert_eq!(back, mode);
        assert_eq!(back.revision(), mode.revision());
    }
}

#[test]
fn decode_ignores_unrelated_keys() {
    let back: WriteMode = decode_parameter(br#"{".tag":"overwrite","extra":1}"#).unwrap();
    assert!(back.is_overwrite());
}

#[test]
fn decode_of_malformed_body_is_json_error() {
    let err = decode_parameter::<WriteMode>(b"{").unwrap_err();
    assert!(matches!(err, ParamError::JsonError(_)));
}
