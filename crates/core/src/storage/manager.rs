use crate::errors::CoreError;
use crate::models::settings::Settings;

/// Load and save [`Settings`] as JSON.
///
/// Missing fields fall back to their defaults, so a file holding only
/// `{"indexer_url": "..."}` is valid.
pub struct SettingsStore;

impl SettingsStore {
    /// Serialize settings to pretty-printed JSON bytes.
    pub fn save_to_bytes(settings: &Settings) -> Result<Vec<u8>, CoreError> {
        serde_json::to_vec_pretty(settings)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    /// Parse and validate settings from JSON bytes.
    pub fn load_from_bytes(data: &[u8]) -> Result<Settings, CoreError> {
        let settings: Settings = serde_json::from_slice(data).map_err(|e| {
            CoreError::Deserialization(format!("Failed to deserialize settings: {e}"))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to_file(settings: &Settings, path: &str) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(settings)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> Result<Settings, CoreError> {
        let bytes = std::fs::read(path)?;
        let settings = Self::load_from_bytes(&bytes)?;
        tracing::info!(path, "Loaded settings");
        Ok(settings)
    }
}
