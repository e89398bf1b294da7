use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".student-roster";
/// Log files live in this subfolder of the data directory.
const LOG_DIR_NAME: &str = "logs";
/// Reports go in this subfolder of the data directory unless the user types
/// another path.
const REPORT_DIR_NAME: &str = "reports";
/// File name offered when the user saves a report.
const DEFAULT_REPORT_NAME: &str = "students.txt";
/// Environment variable that overrides the log level.
pub const LOG_LEVEL_ENV: &str = "STUDENT_ROSTER_LOG";

/// Runtime settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: &'static str,
    pub default_report: PathBuf,
}

impl AppConfig {
    /// Resolve directories from the user's home and the log level from the
    /// environment.
    pub fn load() -> Result<Self> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        let level = env::var(LOG_LEVEL_ENV).ok();
        Self::with_home(base_dirs.home_dir(), level.as_deref())
    }

    pub fn with_home(home: &Path, log_level: Option<&str>) -> Result<Self> {
        let data_dir = home.join(DATA_DIR_NAME);
        let log_level = match log_level {
            Some(raw) => normalize_level(raw)?,
            None => default_log_level(),
        };
        Ok(Self {
            log_dir: data_dir.join(LOG_DIR_NAME),
            default_report: data_dir.join(REPORT_DIR_NAME).join(DEFAULT_REPORT_NAME),
            data_dir,
            log_level,
        })
    }
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => bail!("unsupported log level `{other}`; expected trace|debug|info|warn|error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_the_home_directory() {
        let config = AppConfig::with_home(Path::new("/home/ana"), None).unwrap();
        assert_eq!(config.data_dir, Path::new("/home/ana/.student-roster"));
        assert_eq!(config.log_dir, Path::new("/home/ana/.student-roster/logs"));
        assert_eq!(
            config.default_report,
            Path::new("/home/ana/.student-roster/reports/students.txt")
        );
        assert!(config.default_report.starts_with(&config.data_dir));
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn log_level_override_is_normalized() {
        let config = AppConfig::with_home(Path::new("/tmp"), Some(" WARNING ")).unwrap();
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = AppConfig::with_home(Path::new("/tmp"), Some("loud")).unwrap_err();
        assert!(err.to_string().contains("unsupported log level"));
    }
}
