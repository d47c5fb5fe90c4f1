use dnsrec_domain::{DomainError, ErrorKind, Ipv4Address};

// ============================================================================
// String construction
// ============================================================================

#[test]
fn test_parse_round_trip() {
    let address = Ipv4Address::parse("192.168.1.1").unwrap();

    assert_eq!(address.as_str(), "192.168.1.1");
    assert_eq!(address.to_string(), "192.168.1.1");
    assert_eq!(address.octets(), [192, 168, 1, 1]);
}

#[test]
fn test_leading_zeros_are_normalized() {
    let address: Ipv4Address = "010.0.0.1".parse().unwrap();

    assert_eq!(address.as_str(), "10.0.0.1");
    assert_eq!(address.octets(), [10, 0, 0, 1]);
}

#[test]
fn test_parse_wrong_component_count() {
    assert_eq!(
        Ipv4Address::parse("10.0.0"),
        Err(DomainError::InvalidOctetCount(3))
    );
    assert_eq!(
        Ipv4Address::parse("10.0.0.1.5"),
        Err(DomainError::InvalidOctetCount(5))
    );
    assert_eq!(Ipv4Address::parse(""), Err(DomainError::InvalidOctetCount(1)));
}

#[test]
fn test_parse_rejects_bad_components() {
    let cases = [
        ("10.0.0.256", "256"),
        ("10.0.-1.1", "-1"),
        ("10.a.0.1", "a"),
        ("10..0.1", ""),
        ("10.0.0.1 ", "1 "),
        ("0x0a.0.0.1", "0x0a"),
    ];

    for (input, component) in cases {
        let err = Ipv4Address::parse(input).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidOctetValue(component.to_string()),
            "input {input}"
        );
        assert!(err.is_validation());
        assert!(err.to_string().contains("invalid octet value"));
    }
}

// ============================================================================
// Component construction
// ============================================================================

#[test]
fn test_from_octets_boundaries() {
    let zero = Ipv4Address::from_octets(&[0, 0, 0, 0]).unwrap();
    assert_eq!(zero.as_str(), "0.0.0.0");

    let broadcast = Ipv4Address::from_octets(&[255, 255, 255, 255]).unwrap();
    assert_eq!(broadcast.as_str(), "255.255.255.255");
}

#[test]
fn test_from_octets_rejections() {
    assert_eq!(
        Ipv4Address::from_octets(&[256, 0, 0, 0]),
        Err(DomainError::InvalidOctetValue("256".to_string()))
    );
    assert_eq!(
        Ipv4Address::from_octets(&[-1, 0, 0, 0]),
        Err(DomainError::InvalidOctetValue("-1".to_string()))
    );

    let short = Ipv4Address::from_octets(&[1, 2, 3]).unwrap_err();
    assert_eq!(short, DomainError::InvalidOctetCount(3));
    assert_eq!(short.kind(), ErrorKind::Validation);

    let long = Ipv4Address::from_octets(&[1, 2, 3, 4, 5]).unwrap_err();
    assert_eq!(long, DomainError::InvalidOctetCount(5));
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_writes_are_atomic() {
    let mut address = Ipv4Address::new();
    address.set_octets(&[198, 51, 100, 7]).unwrap();

    assert!(address.set_value("198.51.100.7.1").is_err());
    assert!(address.set_value("1.2.3.999").is_err());
    assert!(address.set_octets(&[1, 2, 3, 256]).is_err());

    assert_eq!(address.as_str(), "198.51.100.7");
    assert_eq!(address.octets(), [198, 51, 100, 7]);

    address.set_value("203.0.113.9").unwrap();
    assert_eq!(address.as_str(), "203.0.113.9");
    assert_eq!(address.octets(), [203, 0, 113, 9]);
}

// ============================================================================
// Serde
// ============================================================================

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Holder {
    address: Ipv4Address,
}

#[test]
fn test_serde_uses_canonical_string() {
    let holder: Holder = toml::from_str("address = \"192.000.2.1\"").unwrap();
    assert_eq!(holder.address.as_str(), "192.0.2.1");

    let rendered = toml::to_string(&holder).unwrap();
    assert_eq!(rendered.trim(), "address = \"192.0.2.1\"");

    assert!(toml::from_str::<Holder>("address = \"192.0.2\"").is_err());
}
