use super::config_name::ConfigName;
use serde_json::{Map, Value};

/// A stored configuration object. Its data is opaque to this service.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    name: ConfigName,
    data: Map<String, Value>,
}

impl ConfigEntry {
    pub fn new(name: ConfigName, data: Map<String, Value>) -> Self {
        Self { name, data }
    }

    pub fn name(&self) -> &ConfigName {
        &self.name
    }

    pub fn into_data(self) -> Map<String, Value> {
        self.data
    }
}
