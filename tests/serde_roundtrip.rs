// tests/serde_roundtrip.rs
use kernel_version::{KernelVersion, ParseMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Requirement {
    min: KernelVersion,
    mode: ParseMode,
}

#[test]
fn json_roundtrip() {
    let original = Requirement { min: KernelVersion::new(5, 10, 100), mode: ParseMode::Strict };
    let json = serde_json::to_string(&original).expect("serializes");
    let decoded: Requirement = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}

#[test]
fn json_shape() {
    let json = serde_json::to_value(KernelVersion::new(4, 9, 0)).expect("serializes");
    assert_eq!(json, serde_json::json!({ "major": 4, "minor": 9, "patch": 0 }));
    assert_eq!(serde_json::to_value(ParseMode::Lenient).expect("serializes"), "lenient");
}
