// ═══════════════════════════════════════════════════════════════════
// Storage Tests — SettingsStore JSON bytes and files
// ═══════════════════════════════════════════════════════════════════

use como_calendar_core::errors::CoreError;
use como_calendar_core::models::settings::{DayBoundary, Settings};
use como_calendar_core::storage::manager::SettingsStore;
use como_calendar_core::ComoCalendar;

fn custom_settings() -> Settings {
    Settings {
        day_boundary: DayBoundary::FixedOffset { seconds: 32400 },
        indexer_url: Some("https://indexer.example".into()),
        request_timeout_secs: 5,
    }
}

mod bytes {
    use super::*;

    #[test]
    fn save_then_load() {
        let settings = custom_settings();
        let bytes = SettingsStore::save_to_bytes(&settings).unwrap();
        assert_eq!(SettingsStore::load_from_bytes(&bytes).unwrap(), settings);
    }

    #[test]
    fn empty_object_is_defaults() {
        let settings = SettingsStore::load_from_bytes(b"{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn garbage_is_deserialization_error() {
        let err = SettingsStore::load_from_bytes(b"not json").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(ref m) if m.contains("settings")));
    }

    #[test]
    fn unknown_day_boundary_is_rejected() {
        let err = SettingsStore::load_from_bytes(br#"{"day_boundary": {"kind": "moon"}}"#)
            .unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        for seconds in [86_400, 90_000, -86_400, i32::MAX, i32::MIN] {
            let body = format!(
                r#"{{"day_boundary": {{"kind": "fixed_offset", "seconds": {seconds}}}}}"#
            );
            let err = SettingsStore::load_from_bytes(body.as_bytes()).unwrap_err();
            assert!(
                matches!(err, CoreError::Deserialization(ref m) if m.contains("offset")),
                "{seconds}: {err:?}"
            );
        }
    }

    #[test]
    fn offsets_within_a_day_are_accepted() {
        for seconds in [0, 32_400, -28_800, 86_399, -86_399] {
            let settings = Settings {
                day_boundary: DayBoundary::FixedOffset { seconds },
                ..Settings::default()
            };
            assert!(settings.validate().is_ok(), "{seconds}");
            let bytes = SettingsStore::save_to_bytes(&settings).unwrap();
            assert_eq!(SettingsStore::load_from_bytes(&bytes).unwrap(), settings);
        }
    }
}

mod files {
    use super::*;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let path = path.to_str().unwrap();

        SettingsStore::save_to_file(&custom_settings(), path).unwrap();
        assert_eq!(SettingsStore::load_from_file(path).unwrap(), custom_settings());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = SettingsStore::load_from_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }

    #[test]
    fn calendar_from_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"day_boundary": {"kind": "local"}}"#).unwrap();

        let calendar = ComoCalendar::from_settings_file(path.to_str().unwrap()).unwrap();
        assert_eq!(calendar.settings().day_boundary, DayBoundary::Local);
        assert!(calendar.settings().indexer_url.is_none());
    }

    #[test]
    fn calendar_from_settings_file_with_bad_offset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"day_boundary": {"kind": "fixed_offset", "seconds": 90000}}"#)
            .unwrap();

        let result = ComoCalendar::from_settings_file(path.to_str().unwrap());
        assert!(matches!(result, Err(CoreError::Deserialization(_))));
    }
}
