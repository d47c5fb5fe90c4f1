use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectionConfig {
    /// Slots reserved up front in a new collection (default: 16)
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
        }
    }
}

fn default_initial_capacity() -> usize {
    16
}
