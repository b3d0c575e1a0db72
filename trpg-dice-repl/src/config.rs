use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use trpg_dice_lib::Limits;

const CONFIG_ENV: &str = "TRPG_DICE_CONFIG";
const DEFAULT_HISTORY_FILE: &str = "history";

/// Settings read from a RON file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) limits: Limits,
    /// Announce natural maximums and ones
    pub(crate) critical_effects: bool,
    pub(crate) history_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            critical_effects: true,
            history_file: DEFAULT_HISTORY_FILE.to_owned(),
        }
    }
}

#[derive(Debug)]
pub(crate) enum Error {
    Io(PathBuf, std::io::Error),
    Ron(PathBuf, ron::error::SpannedError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "could not read `{}`: {e}", path.display()),
            Self::Ron(path, e) => write!(f, "invalid config `{}`: {e}", path.display()),
        }
    }
}

impl std::error::Error for Error {}

impl Config {
    /// Load from `path`, else from the file named by `TRPG_DICE_CONFIG`
    ///
    /// Without either the defaults apply.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self, Error> {
        if dotenv::dotenv().is_err() {
            tracing::debug!("no `.env` file");
        }
        let path = match path {
            Some(path) => path.to_owned(),
            None => match env::var_os(CONFIG_ENV) {
                Some(path) => PathBuf::from(path),
                None => {
                    tracing::info!("no config given, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        let text = fs::read_to_string(&path).map_err(|e| Error::Io(path.clone(), e))?;
        let config = Self::from_ron(&text).map_err(|e| Error::Ron(path.clone(), e))?;
        tracing::info!(path = %path.display(), limits = ?config.limits, "loaded config");
        Ok(config)
    }

    pub(crate) fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use trpg_dice_lib::Limits;

    #[test]
    fn partial_config_test() {
        let config = Config::from_ron("(limits: (max_dice_sides: 100), critical_effects: false)")
            .unwrap();
        assert!(!config.critical_effects);
        assert_eq!(100, config.limits.max_dice_sides);
        assert_eq!(
            Limits::DEFAULT_MAX_DICE_COUNT,
            config.limits.max_dice_count
        );
        assert_eq!("history", config.history_file);
    }

    #[test]
    fn empty_config_test() {
        assert_eq!(Config::default(), Config::from_ron("()").unwrap());
    }

    #[test]
    fn invalid_config_test() {
        assert!(Config::from_ron("(limits: 3)").is_err());
    }
}
