use crate::profile::Profile;
use crate::util::SaveError;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Whether to ring the terminal bell for game events
    pub(crate) sound: bool,

    /// Settings about data files
    pub(crate) files: FileConfig,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            sound: true,
            files: FileConfig::default(),
        }
    }
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("snakelet").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the filepath at which the profile should be stored: the file
    /// given in the configuration or, if that is not set, the default
    /// profile file path.  Return `None` if no path is present in the
    /// configuration and the default path could not be computed.
    fn profile_file(&self) -> Option<Cow<'_, Path>> {
        self.files
            .profile_file
            .as_deref()
            .map(Cow::from)
            .or_else(|| Profile::default_path().map(Cow::from))
    }

    /// Load the profile from disk, falling back to the defaults whenever
    /// there is nothing usable to read.
    ///
    /// If `self.files.save_profile` is `false`, a default profile is
    /// returned without reading anything from disk.
    pub(crate) fn load_profile(&self) -> Profile {
        if !self.files.save_profile {
            return Profile::default();
        }
        match self.profile_file() {
            Some(p) => Profile::load(&p),
            None => Profile::default(),
        }
    }

    /// Save the given profile to a file.
    ///
    /// If `self.files.save_profile` is `false`, nothing is saved.
    pub(crate) fn save_profile(&self, profile: &Profile) -> Result<(), SaveError> {
        if !self.files.save_profile {
            return Ok(());
        }
        if let Some(p) = self.profile_file() {
            profile.save(&p)
        } else {
            Err(SaveError::no_path("profile"))
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the profile should be stored
    profile_file: Option<PathBuf>,

    /// Whether to load & save the profile in a file
    save_profile: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            profile_file: None,
            save_profile: true,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.sound);
        assert!(config.files.save_profile);
        assert_eq!(config.files.profile_file, None);
    }

    #[test]
    fn parse_full() {
        let config: Config = toml::from_str(concat!(
            "sound = false\n",
            "\n",
            "[files]\n",
            "profile-file = \"/tmp/scores.json\"\n",
            "save-profile = true\n",
        ))
        .unwrap();
        assert!(!config.sound);
        assert_eq!(
            config.files.profile_file,
            Some(PathBuf::from("/tmp/scores.json"))
        );
    }

    #[test]
    fn load_missing_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml"), true).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_missing_required() {
        let dir = tempfile::tempdir().unwrap();
        let r = Config::load(&dir.path().join("config.toml"), false);
        assert!(matches!(r, Err(ConfigError::Read(_))));
    }

    #[test]
    fn load_unparseable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "sound = maybe\n").unwrap();
        let r = Config::load(&path, true);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn save_profile_disabled_is_a_no_op() {
        let config: Config = toml::from_str("[files]\nsave-profile = false\n").unwrap();
        let mut profile = Profile::default();
        profile.update_high_score(999);
        config.save_profile(&profile).unwrap();
        assert_eq!(config.load_profile(), Profile::default());
    }

    #[test]
    fn profile_round_trip_through_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let config = Config {
            sound: true,
            files: FileConfig {
                profile_file: Some(path),
                save_profile: true,
            },
        };
        let mut profile = Profile::default();
        profile.set_username("Noor");
        profile.update_high_score(80);
        config.save_profile(&profile).unwrap();
        assert_eq!(config.load_profile(), profile);
    }
}
