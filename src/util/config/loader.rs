//! Builds the run configuration from process arguments and environment.

use std::ffi::OsString;
use std::path::PathBuf;

use super::types::*;
use crate::error::{Result, VersionError};

pub const DEFAULT_PROGRAM: &str = "mkversion";

/// `EnvFilter` directives for the stderr log.
pub const ENV_LOG: &str = "MKVERSION_LOG";
/// `json` switches the stderr log to JSON lines.
pub const ENV_LOG_FORMAT: &str = "MKVERSION_LOG_FORMAT";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Expects the program name followed by exactly three paths:
    /// `manifest.uuid manifest VERSION`.
    pub fn from_args<I>(args: I) -> Result<GeneratorConfig>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let program = args
            .next()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

        let paths: Vec<PathBuf> = args.map(PathBuf::from).collect();
        let [checkin_path, manifest_path, version_path]: [PathBuf; 3] = paths
            .try_into()
            .map_err(|_| VersionError::Usage {
                program: program.clone(),
            })?;

        Ok(GeneratorConfig {
            program,
            checkin_path,
            manifest_path,
            version_path,
        })
    }

    pub fn logging_from_env() -> LoggingConfig {
        Self::apply_env_overrides(LoggingConfig::default(), |key| std::env::var(key).ok())
    }

    /// Applies `MKVERSION_LOG*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(mut config: LoggingConfig, lookup: F) -> LoggingConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            config.format = match format.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Text,
            };
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn three_paths_in_order() {
        let config =
            ConfigLoader::from_args(args(&["mkversion", "manifest.uuid", "manifest", "VERSION"]))
                .unwrap();
        assert_eq!(config.program, "mkversion");
        assert_eq!(config.checkin_path, PathBuf::from("manifest.uuid"));
        assert_eq!(config.manifest_path, PathBuf::from("manifest"));
        assert_eq!(config.version_path, PathBuf::from("VERSION"));
    }

    #[test]
    fn wrong_arity_is_usage_error() {
        for list in [
            &["./mkversion"][..],
            &["./mkversion", "a", "b"][..],
            &["./mkversion", "a", "b", "c", "d"][..],
        ] {
            let err = ConfigLoader::from_args(args(list)).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Usage: ./mkversion manifest.uuid manifest VERSION"
            );
        }
    }

    #[test]
    fn missing_program_name_uses_default() {
        let err = ConfigLoader::from_args(Vec::<OsString>::new()).unwrap_err();
        assert!(err.to_string().starts_with("Usage: mkversion "));
    }

    #[test]
    fn env_overrides_logging() {
        let env: HashMap<&str, &str> =
            HashMap::from([(ENV_LOG, "mkversion=debug"), (ENV_LOG_FORMAT, "JSON")]);
        let config = ConfigLoader::apply_env_overrides(LoggingConfig::default(), |key| {
            env.get(key).map(|v| v.to_string())
        });
        assert_eq!(config.filter, "mkversion=debug");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn blank_filter_keeps_default() {
        let config =
            ConfigLoader::apply_env_overrides(LoggingConfig::default(), |key| match key {
                ENV_LOG => Some("  ".to_string()),
                _ => None,
            });
        assert_eq!(config, LoggingConfig::default());
    }
}
