use super::settings_store::SettingsStore;
use anyhow::Context as _;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Settings storage backed by a single JSON file
///
/// The file holds a flat object of string fields. Every write re-reads the
/// file and rewrites it whole, so concurrent writers outside this process are
/// not supported.
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_fields(&self) -> anyhow::Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("Parsing settings file {}", self.path.display())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err)
                .with_context(|| format!("Reading settings file {}", self.path.display())),
        }
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let mut fields = self.load_fields()?;
        Ok(fields.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut fields = self.load_fields()?;
        fields.insert(key.to_string(), value.to_string());

        let encoded =
            serde_json::to_string_pretty(&fields).context("Encoding settings file")?;
        fs::write(&self.path, encoded)
            .with_context(|| format!("Writing settings file {}", self.path.display()))
    }
}
