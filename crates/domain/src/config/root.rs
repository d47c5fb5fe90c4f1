use super::{CollectionConfig, ConfigError, LoggingConfig, StaticRecord};
use crate::dns_record::ResourceRecord;
use crate::record_collection::RecordCollection;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub collection: CollectionConfig,

    /// Domain appended to static records that do not carry their own
    #[serde(default)]
    pub default_domain: Option<String>,

    #[serde(default)]
    pub records: Vec<StaticRecord>,
}

impl Config {
    /// Load from a TOML file, or return defaults when no path is given.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LoggingConfig::is_valid_level(&self.logging.level) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }

        for record in &self.records {
            self.resolve(record)?;
        }

        Ok(())
    }

    /// Build a collection holding one A record per static record entry.
    pub fn build_collection(&self) -> Result<RecordCollection<ResourceRecord>, ConfigError> {
        let capacity = self.collection.initial_capacity.max(self.records.len());
        let mut collection = RecordCollection::with_capacity(capacity);

        for record in &self.records {
            collection.add(self.resolve(record)?.into_ref());
        }

        Ok(collection)
    }

    fn resolve(&self, record: &StaticRecord) -> Result<ResourceRecord, ConfigError> {
        record.to_record(&self.default_domain).map_err(|e| {
            ConfigError::Invalid(format!("record '{}': {}", record.hostname, e))
        })
    }
}
