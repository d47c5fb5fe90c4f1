//! Configuration for dnsrec
//!
//! - `root`: main configuration, file loading and validation
//! - `logging`: logging settings
//! - `collection`: record collection sizing
//! - `static_records`: records declared directly in the config file
//! - `errors`: configuration errors

pub mod collection;
pub mod errors;
pub mod logging;
pub mod root;
pub mod static_records;

pub use collection::CollectionConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::Config;
pub use static_records::StaticRecord;
