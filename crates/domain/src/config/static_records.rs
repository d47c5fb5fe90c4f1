use crate::dns_record::ResourceRecord;
use crate::errors::DomainError;
use crate::ipv4_address::Ipv4Address;
use serde::{Deserialize, Serialize};

const DEFAULT_TTL: u32 = 300;

/// A record declared in the config file.
///
/// Each entry becomes an A record whose owner name is the hostname joined
/// with its domain (or the config-wide default domain).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticRecord {
    /// Hostname (e.g., "nas", "printer")
    pub hostname: String,

    /// Optional domain override (e.g., "home.lan")
    /// If None, uses Config.default_domain
    /// If both None, uses hostname as-is
    #[serde(default)]
    pub domain: Option<String>,

    /// Dotted-decimal IPv4 address
    pub ip: String,

    /// Time-to-live in seconds (optional, default 300)
    #[serde(default)]
    pub ttl: Option<u32>,
}

impl StaticRecord {
    /// Build the owner name from hostname and domain
    ///
    /// # Examples
    /// ```
    /// use dnsrec_domain::config::StaticRecord;
    ///
    /// let record = StaticRecord {
    ///     hostname: "nas".into(),
    ///     domain: Some("lab.local".into()),
    ///     ip: "192.168.1.100".into(),
    ///     ttl: None,
    /// };
    /// assert_eq!(record.fqdn(&None), "nas.lab.local");
    ///
    /// let record = StaticRecord {
    ///     hostname: "server".into(),
    ///     domain: None,
    ///     ip: "192.168.1.101".into(),
    ///     ttl: None,
    /// };
    /// assert_eq!(record.fqdn(&Some("home.lan".into())), "server.home.lan");
    /// assert_eq!(record.fqdn(&None), "server");
    /// ```
    pub fn fqdn(&self, default_domain: &Option<String>) -> String {
        match self.domain.as_ref().or(default_domain.as_ref()) {
            Some(domain) => format!("{}.{}", self.hostname, domain),
            None => self.hostname.clone(),
        }
    }

    pub fn ttl_or_default(&self) -> u32 {
        self.ttl.unwrap_or(DEFAULT_TTL)
    }

    /// Validate the address and build the A record.
    pub fn to_record(&self, default_domain: &Option<String>) -> Result<ResourceRecord, DomainError> {
        let address = Ipv4Address::parse(&self.ip)?;
        Ok(ResourceRecord::a(
            self.fqdn(default_domain),
            address,
            self.ttl_or_default(),
        ))
    }
}
