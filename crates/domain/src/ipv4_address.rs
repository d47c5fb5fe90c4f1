use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

const OCTET_COUNT: usize = 4;

/// IPv4 address value object.
///
/// Always holds four valid octets. The canonical dotted-decimal form is
/// rebuilt on every successful write; a rejected write leaves the previous
/// value untouched.
///
/// Leading zeros in string components are accepted and normalized away, so
/// `"010.0.0.1"` is stored as `"10.0.0.1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ipv4Address {
    octets: [u8; OCTET_COUNT],
    value: String,
}

impl Ipv4Address {
    /// The unspecified address, `0.0.0.0`.
    pub fn new() -> Self {
        Self::from([0; OCTET_COUNT])
    }

    /// Parse a dotted-decimal string.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let mut address = Self::new();
        address.set_value(value)?;
        Ok(address)
    }

    /// Build from an explicit component list. Exactly four components in
    /// `0..=255` are accepted.
    pub fn from_octets(octets: &[i64]) -> Result<Self, DomainError> {
        let mut address = Self::new();
        address.set_octets(octets)?;
        Ok(address)
    }

    pub fn set_value(&mut self, value: &str) -> Result<(), DomainError> {
        let components: SmallVec<[&str; OCTET_COUNT]> = value.split('.').collect();
        if components.len() != OCTET_COUNT {
            return Err(DomainError::InvalidOctetCount(components.len()));
        }

        let mut octets = [0u8; OCTET_COUNT];
        for (slot, component) in octets.iter_mut().zip(components) {
            *slot = parse_octet(component)?;
        }

        self.commit(octets);
        Ok(())
    }

    pub fn set_octets(&mut self, octets: &[i64]) -> Result<(), DomainError> {
        if octets.len() != OCTET_COUNT {
            return Err(DomainError::InvalidOctetCount(octets.len()));
        }

        let mut validated = [0u8; OCTET_COUNT];
        for (slot, &octet) in validated.iter_mut().zip(octets) {
            *slot = u8::try_from(octet)
                .map_err(|_| DomainError::InvalidOctetValue(octet.to_string()))?;
        }

        self.commit(validated);
        Ok(())
    }

    #[inline]
    pub fn octets(&self) -> [u8; OCTET_COUNT] {
        self.octets
    }

    /// Canonical dotted-decimal form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    fn commit(&mut self, octets: [u8; OCTET_COUNT]) {
        self.octets = octets;
        self.value = render(octets);
    }
}

fn render(octets: [u8; OCTET_COUNT]) -> String {
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

fn parse_octet(component: &str) -> Result<u8, DomainError> {
    let invalid = || DomainError::InvalidOctetValue(component.to_string());

    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let digits = component.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }
    if digits.len() > 3 {
        return Err(invalid());
    }

    digits
        .parse::<u16>()
        .ok()
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(invalid)
}

impl Default for Ipv4Address {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Ipv4Address {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Ipv4Address {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Ipv4Address {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ipv4Address> for String {
    fn from(address: Ipv4Address) -> Self {
        address.value
    }
}

impl From<[u8; OCTET_COUNT]> for Ipv4Address {
    fn from(octets: [u8; OCTET_COUNT]) -> Self {
        Self {
            octets,
            value: render(octets),
        }
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self::from(addr.octets())
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(address: Ipv4Address) -> Self {
        Ipv4Addr::from(address.octets)
    }
}
