use anyhow::{Context, Result};
use mzuka_engine::{DrawSchedule, EngineConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Client configuration, read from `config.json` in the data
/// directory when present. Missing file means defaults; a malformed
/// file is an error rather than a silent fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub schedule: DrawSchedule,
}

impl AppConfig {
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join("config.json");
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let mut config: Self =
            serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;

        // The draw cycle divides the wall clock; zero or negative would
        // crash the countdown arithmetic.
        if config.schedule.cycle_minutes <= 0 {
            tracing::warn!(
                "ignoring invalid draw cycle of {} minutes in {}, using {}",
                config.schedule.cycle_minutes,
                path.display(),
                DrawSchedule::default().cycle_minutes
            );
            config.schedule = DrawSchedule::default();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(config.schedule.cycle_minutes, 30);
    }

    #[test]
    fn test_partial_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            r#"{ "engine": { "min_stake": 230, "max_stake": 22924, "stake_step": 100,
                 "multipliers": [0, 0, 10, 300], "max_selection": 3,
                 "pin_length": 4, "min_contact_digits": 8 } }"#,
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.engine.max_stake, Some(22_924));
        assert_eq!(config.schedule.cycle_minutes, 30);
    }

    #[test]
    fn test_bad_draw_cycle_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        for bad in ["0", "-30"] {
            std::fs::write(
                dir.path().join("config.json"),
                format!(r#"{{ "schedule": {{ "cycle_minutes": {} }} }}"#, bad),
            )
            .unwrap();

            let config = AppConfig::load(dir.path()).unwrap();
            assert_eq!(config.schedule.cycle_minutes, 30);
            // The countdown must stay usable after the fallback.
            let remaining = config.schedule.time_to_next(chrono::Utc::now());
            assert!(remaining > chrono::Duration::zero());
        }
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{ nope").unwrap();
        assert!(AppConfig::load(dir.path()).is_err());
    }
}
