use autoreact::adapters::SettingsStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory settings store, cloneable so tests can inspect persisted fields
#[derive(Clone, Default)]
pub struct MockSettingsStore {
    fields: Arc<Mutex<HashMap<String, String>>>,
}

impl MockSettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(self, key: &str, value: &str) -> Self {
        self.fields
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.fields.lock().unwrap().get(key).cloned()
    }
}

impl SettingsStore for MockSettingsStore {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.fields.lock().unwrap().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.fields
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
