pub mod errors;
pub mod models;
pub mod services;
pub mod sources;
pub mod storage;

use chrono::{DateTime, Utc};
use models::{address::Address, calendar::Calendar, mint::MintEvent, settings::Settings};
use services::{calendar_service::CalendarService, reference_time};
use sources::registry::SourceRegistry;
use storage::manager::SettingsStore;

use errors::CoreError;

/// Main entry point for the COMO calendar library.
/// Holds the settings, the event sources and the calendar builder.
#[must_use]
pub struct ComoCalendar {
    settings: Settings,
    registry: SourceRegistry,
    calendar_service: CalendarService,
}

impl std::fmt::Debug for ComoCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComoCalendar")
            .field("settings", &self.settings)
            .field("sources", &self.registry.source_names())
            .finish()
    }
}

impl ComoCalendar {
    /// Create a calendar with the default sources for `settings`
    /// (the indexer, when `indexer_url` is set).
    pub fn new(settings: Settings) -> Self {
        let registry = SourceRegistry::new_with_defaults(&settings);
        Self::with_registry(settings, registry)
    }

    /// Create a calendar backed by a caller-provided set of sources.
    pub fn with_registry(settings: Settings, registry: SourceRegistry) -> Self {
        let calendar_service = CalendarService::new(settings.day_boundary);
        Self {
            settings,
            registry,
            calendar_service,
        }
    }

    /// Create a calendar from a JSON settings file.
    pub fn from_settings_file(path: &str) -> Result<Self, CoreError> {
        let settings = SettingsStore::load_from_file(path)?;
        Ok(Self::new(settings))
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Calendar ────────────────────────────────────────────────────

    /// Build a calendar from events already in hand. Never fails.
    pub fn build_calendar(&self, reference: DateTime<Utc>, events: &[MintEvent]) -> Calendar {
        self.calendar_service.build(reference, events)
    }

    /// Calendar for `address` in the month of `now`.
    ///
    /// `now` is the raw query value: Unix seconds or milliseconds. When it
    /// is absent or empty the current time is used.
    pub async fn get_calendar(
        &self,
        address: &str,
        now: Option<&str>,
    ) -> Result<Calendar, CoreError> {
        let reference = reference_time::resolve_reference(now, Utc::now())?;
        self.get_calendar_at(address, reference).await
    }

    /// Calendar for `address` in the month of `reference`.
    pub async fn get_calendar_at(
        &self,
        address: &str,
        reference: DateTime<Utc>,
    ) -> Result<Calendar, CoreError> {
        let address = Address::parse(address)?;
        let events = self.registry.get_mint_events(&address).await?;

        tracing::info!(
            %address,
            events = events.len(),
            reference = %reference,
            "Building COMO calendar"
        );

        Ok(self.calendar_service.build(reference, &events))
    }

    /// [`get_calendar`](Self::get_calendar) serialized as JSON, keyed by
    /// day number then artist id.
    pub async fn get_calendar_json(
        &self,
        address: &str,
        now: Option<&str>,
    ) -> Result<String, CoreError> {
        let calendar = self.get_calendar(address, now).await?;
        serde_json::to_string(&calendar)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize calendar: {e}")))
    }
}
