//! dnsrec domain layer: validated field values and indexed record collections
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod ipv4_address;
pub mod record_collection;

pub use config::{Config, ConfigError};
pub use dns_record::{RecordType, ResourceRecord};
pub use errors::{DomainError, ErrorKind};
pub use ipv4_address::Ipv4Address;
pub use record_collection::{Cursor, Record, RecordCollection, RecordRef};
