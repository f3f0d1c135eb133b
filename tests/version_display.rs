// tests/version_display.rs
use kernel_version::KernelVersion;

#[test]
fn zero_patch_is_omitted() {
    assert_eq!(KernelVersion::parse("4.4").unwrap().to_string(), "v4.4");
    assert_eq!(KernelVersion::new(4, 9, 0).to_string(), "v4.9");
}

#[test]
fn nonzero_patch_is_rendered() {
    assert_eq!(KernelVersion::parse("5.10.100").unwrap().to_string(), "v5.10.100");
    assert_eq!(format!("{}", KernelVersion::new(300, 0, 1)), "v300.0.1");
}
