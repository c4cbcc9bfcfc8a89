/// String-keyed, string-valued settings storage
///
/// The reactor persists its collections as string-encoded fields and never
/// sees the storage medium; implementations decide where the strings live.
pub trait SettingsStore: Send + Sync {
    /// Read a settings field, `None` if it was never written
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Write a settings field, replacing any previous value
    ///
    /// The write must be durable when this returns: callers rely on every
    /// mutation being persisted before the mutating operation completes.
    fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
