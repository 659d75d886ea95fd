use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

pub const BRAND_NAME: &str = "MunchMate";

/// Width in pixels below which the bar collapses into the drawer.
pub const DEFAULT_MEDIUM_BREAKPOINT: u32 = 900;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub log_level: Level,
    pub medium_breakpoint: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("munchmate.db"),
            log_level: Level::INFO,
            medium_breakpoint: DEFAULT_MEDIUM_BREAKPOINT,
        }
    }
}

impl AppConfig {
    /// Reads `MUNCHMATE_STORE`, `MUNCHMATE_LOG` and `MUNCHMATE_BREAKPOINT`.
    ///
    /// Returns the rejected values alongside the config; they are logged once the
    /// logger is up, which needs the level read here.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(path) = lookup("MUNCHMATE_STORE").filter(|p| !p.trim().is_empty()) {
            config.store_path = PathBuf::from(path);
        }

        if let Some(level) = lookup("MUNCHMATE_LOG") {
            match Level::from_str(level.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => warnings.push(format!(
                    "MUNCHMATE_LOG={} is not a log level, using {}",
                    level, config.log_level
                )),
            }
        }

        if let Some(width) = lookup("MUNCHMATE_BREAKPOINT") {
            match width.trim().parse::<u32>() {
                Ok(width) if width > 0 => config.medium_breakpoint = width,
                _ => warnings.push(format!(
                    "MUNCHMATE_BREAKPOINT={} is not a pixel width, using {}",
                    width, config.medium_breakpoint
                )),
            }
        }

        (config, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let (config, warnings) = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.medium_breakpoint, 900);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_overrides() {
        let (config, warnings) = AppConfig::from_lookup(lookup(&[
            ("MUNCHMATE_STORE", "/tmp/mm.db"),
            ("MUNCHMATE_LOG", "debug"),
            ("MUNCHMATE_BREAKPOINT", "768"),
        ]));
        assert_eq!(config.store_path, PathBuf::from("/tmp/mm.db"));
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.medium_breakpoint, 768);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_bad_values_fall_back() {
        let (config, warnings) = AppConfig::from_lookup(lookup(&[
            ("MUNCHMATE_LOG", "loud"),
            ("MUNCHMATE_BREAKPOINT", "wide"),
        ]));
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.medium_breakpoint, DEFAULT_MEDIUM_BREAKPOINT);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("MUNCHMATE_LOG=loud"));
        assert!(warnings[1].starts_with("MUNCHMATE_BREAKPOINT=wide"));

        let (_, warnings) = AppConfig::from_lookup(lookup(&[("MUNCHMATE_BREAKPOINT", "0")]));
        assert_eq!(warnings.len(), 1);
    }
}
