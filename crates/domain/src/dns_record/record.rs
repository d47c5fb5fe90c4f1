use super::RecordType;
use crate::ipv4_address::Ipv4Address;
use crate::record_collection::{Record, RecordRef};
use std::cell::RefCell;
use std::rc::Rc;

/// A resource record as held in a message section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Owner name
    pub name: String,
    /// Record type
    pub record_type: RecordType,
    /// Time to live in seconds
    pub ttl: u32,
    /// Address payload, present for A records
    pub address: Option<Ipv4Address>,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, record_type: RecordType, ttl: u32) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            address: None,
        }
    }

    /// Create an A record
    pub fn a(name: impl Into<String>, address: Ipv4Address, ttl: u32) -> Self {
        Self {
            address: Some(address),
            ..Self::new(name, RecordType::A, ttl)
        }
    }

    /// Wrap the record in a shared handle suitable for a [`RecordCollection`].
    ///
    /// [`RecordCollection`]: crate::RecordCollection
    pub fn into_ref(self) -> RecordRef<Self> {
        Rc::new(RefCell::new(self))
    }

    /// Rename the record.
    ///
    /// Collections that already index this record keep the old name until
    /// they are reindexed.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Check if record is expired based on elapsed time
    pub fn is_expired(&self, elapsed_secs: u32) -> bool {
        elapsed_secs >= self.ttl
    }

    /// Get remaining TTL
    pub fn remaining_ttl(&self, elapsed_secs: u32) -> u32 {
        self.ttl.saturating_sub(elapsed_secs)
    }
}

impl Record for ResourceRecord {
    fn name(&self) -> &str {
        &self.name
    }
}
