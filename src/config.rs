use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

use crate::calendar::MonthGrid;
use crate::error::GridError;

/// Defaults read from `<config dir>/monthgrid/config.toml`.
///
/// ```toml
/// week_start = 1          # Monday
/// pattern    = "%d.%m."
/// ```
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct GridConfig {
    pub week_start: Option<u32>,
    pub pattern:    Option<String>,
}

impl GridConfig {
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            tracing::debug!("loading config from {}", path.display());
            Self::from_toml_str(&std::fs::read_to_string(&path)?)
        } else {
            Ok(GridConfig::default())
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Applies the configured week start, if any, to `grid`.
    pub fn apply<T>(&self, grid: &mut MonthGrid<T>) -> Result<(), GridError> {
        if let Some(day) = self.week_start {
            grid.week_starts_at(day)?;
        }
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("monthgrid")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(GridConfig::from_toml_str("").unwrap(), GridConfig::default());
    }

    #[test]
    fn reads_both_keys() {
        let cfg = GridConfig::from_toml_str("week_start = 1\npattern = \"%d.%m.\"\n").unwrap();
        assert_eq!(cfg.week_start, Some(1));
        assert_eq!(cfg.pattern.as_deref(), Some("%d.%m."));
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(GridConfig::from_toml_str("week_start = \"monday\"").is_err());
    }

    #[test]
    fn apply_sets_week_start() {
        let cfg = GridConfig { week_start: Some(1), pattern: None };
        let mut grid = MonthGrid::new(5, 2018).unwrap();
        cfg.apply(&mut grid).unwrap();
        assert_eq!(grid.week_start(), 1);
        assert_eq!(grid.previous_filler_count(), 1);
    }

    #[test]
    fn apply_rejects_out_of_range_week_start() {
        let cfg = GridConfig { week_start: Some(9), pattern: None };
        let mut grid = MonthGrid::new(5, 2018).unwrap();
        assert_eq!(cfg.apply(&mut grid), Err(GridError::InvalidWeekStart { day: 9 }));
        assert_eq!(grid.week_start(), 0);
    }
}
