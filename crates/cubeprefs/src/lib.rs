//! User preferences.
//!
//! Preferences are layered: built-in defaults from `default.yaml`, then the
//! user's preferences file, then environment variables such as
//! `SPEEDCUBE_ANIMATION__TWIST_DURATION=0.25`.

use std::path::Path;

use eyre::Result;
use serde::{Deserialize, Serialize};

mod animation;
mod interaction;
pub mod paths;
mod scramble;
mod view;

pub use animation::*;
pub use interaction::*;
pub use scramble::*;
pub use view::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

/// Prefix for environment variables that override preferences.
pub const ENV_PREFIX: &str = "SPEEDCUBE";

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Twist animation settings.
    pub animation: AnimationPreferences,
    /// Scramble settings.
    pub scramble: ScramblePreferences,
    /// Keyboard and mouse settings.
    pub interaction: InteractionPreferences,
    /// Camera and cube appearance settings.
    pub view: ViewPreferences,
}

impl Preferences {
    /// Loads preferences from `path`, or from the default preferences file if
    /// `path` is `None`. If loading fails, a warning is logged and the default
    /// preferences are returned.
    pub fn load(path: Option<&Path>) -> Self {
        Self::load_with_env(path, None)
    }

    fn load_with_env(path: Option<&Path>, env: Option<config::Map<String, String>>) -> Self {
        let user_file = match path {
            Some(p) => Some(p.to_owned()),
            None => match paths::prefs_file() {
                Ok(p) => Some(p.to_owned()),
                Err(e) => {
                    log::warn!("Error locating user preferences: {e}");
                    None
                }
            },
        };

        Self::try_load_with_env(user_file.as_deref(), env).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e}");
            Self::default()
        })
    }

    /// Loads preferences from the built-in defaults, an optional user file,
    /// and the environment.
    ///
    /// A user file that does not exist is skipped.
    pub fn try_load(user_file: Option<&Path>) -> Result<Self> {
        Self::try_load_with_env(user_file, None)
    }

    /// Same as [`Self::try_load()`], but reads overrides from `env` instead of
    /// the process environment if `env` is `Some`.
    fn try_load_with_env(
        user_file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        if let Some(path) = user_file {
            log::debug!("Loading preferences from {}", path.display());
            config = config.add_source(
                config::File::from(path)
                    .format(PREFS_FILE_FORMAT)
                    .required(false),
            );
        }

        config = config.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        Ok(config.build()?.try_deserialize()?)
    }

    /// Saves preferences as YAML, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::info!("Saved preferences to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Loads preferences with an empty environment, so that variables in the
    /// developer's shell don't leak into tests.
    fn try_load_isolated(user_file: Option<&Path>) -> Result<Preferences> {
        Preferences::try_load_with_env(user_file, Some(config::Map::new()))
    }

    #[test]
    fn test_default_yaml_matches_default_impl() {
        let from_yaml: Preferences =
            serde_norway::from_str(DEFAULT_PREFS_STR).expect("error parsing default.yaml");
        assert_eq!(Preferences::default(), from_yaml);
    }

    #[test]
    fn test_missing_user_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = try_load_isolated(Some(&dir.path().join("nonexistent.yaml"))).unwrap();
        assert_eq!(Preferences::default().scramble, prefs.scramble);
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.yaml");
        std::fs::write(
            &path,
            "animation:\n  twist_duration: 0.25\n  twist_interpolation: cosine\nscramble:\n  length: 7\n",
        )
        .unwrap();

        let prefs = try_load_isolated(Some(&path)).unwrap();
        assert_eq!(0.25, prefs.animation.twist_duration);
        assert_eq!(InterpolateFn::Cosine, prefs.animation.twist_interpolation);
        assert_eq!(7, prefs.scramble.length);
        // Unspecified values keep their defaults.
        assert!(prefs.interaction.ignore_key_repeat);
        assert_eq!(ViewPreferences::default(), prefs.view);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.yaml");

        let mut prefs = Preferences::default();
        prefs.animation.dynamic_twist_speed = true;
        prefs.view.auto_rotate = false;
        prefs.save(&path).unwrap();

        assert_eq!(prefs, try_load_isolated(Some(&path)).unwrap());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.yaml");
        std::fs::write(&path, "scramble:\n  length: lots\n").unwrap();

        assert!(try_load_isolated(Some(&path)).is_err());
        assert_eq!(
            Preferences::default(),
            Preferences::load_with_env(Some(&path), Some(config::Map::new())),
        );
    }

    #[test]
    fn test_environment_overrides_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.yaml");
        std::fs::write(&path, "scramble:\n  length: 7\n").unwrap();

        let env = [
            ("SPEEDCUBE_SCRAMBLE__LENGTH", "12"),
            ("SPEEDCUBE_ANIMATION__DYNAMIC_TWIST_SPEED", "true"),
            ("OTHER_SCRAMBLE__LENGTH", "99"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
        let prefs = Preferences::try_load_with_env(Some(&path), Some(env)).unwrap();
        assert_eq!(12, prefs.scramble.length);
        assert!(prefs.animation.dynamic_twist_speed);
        assert_eq!(
            AnimationPreferences::default().twist_duration,
            prefs.animation.twist_duration,
        );
    }
}
