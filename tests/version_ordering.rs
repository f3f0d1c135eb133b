// tests/version_ordering.rs
use kernel_version::KernelVersion;

#[test]
fn compares_major_then_minor_then_patch() {
    let v = KernelVersion::new;
    assert!(v(4, 20, 0).less(v(5, 0, 0)));
    assert!(v(5, 4, 200).less(v(5, 10, 0)));
    assert!(v(5, 10, 1).less(v(5, 10, 2)));
    assert!(!v(5, 10, 2).less(v(5, 10, 1)));
    assert!(!v(5, 10, 1).less(v(5, 10, 1)));
}

#[test]
fn ord_agrees_with_less() {
    let mut versions = vec![
        KernelVersion::new(5, 10, 0),
        KernelVersion::new(4, 9, 255),
        KernelVersion::new(5, 4, 1),
        KernelVersion::UNSPECIFIED,
    ];
    versions.sort();
    assert_eq!(
        versions,
        vec![
            KernelVersion::UNSPECIFIED,
            KernelVersion::new(4, 9, 255),
            KernelVersion::new(5, 4, 1),
            KernelVersion::new(5, 10, 0),
        ]
    );
    assert!(KernelVersion::new(4, 9, 255) < KernelVersion::new(5, 4, 1));
}

#[test]
fn unspecified_is_all_zero() {
    assert!(KernelVersion::UNSPECIFIED.is_unspecified());
    assert!(KernelVersion::default().is_unspecified());
    assert!(KernelVersion::from_code(0).is_unspecified());
    assert!(!KernelVersion::new(0, 0, 1).is_unspecified());
    assert!(!KernelVersion::new(0, 1, 0).is_unspecified());
    assert!(!KernelVersion::new(1, 0, 0).is_unspecified());
}
