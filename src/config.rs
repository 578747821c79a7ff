use crate::converter::{Converter, Strategy};
use crate::dictionary::SpellingMap;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".us2uk.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSV used instead of the bundled table
    pub dictionary: Option<PathBuf>,

    /// Further CSVs layered on top, later files winning
    pub extra_dictionaries: Vec<PathBuf>,

    /// US words that are never converted
    pub ignore_words: Vec<String>,

    pub strategy: Strategy,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        dictionary: Option<PathBuf>,
        cli_ignore_words: Vec<String>,
        strategy: Option<Strategy>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                log::debug!("Reading global config {}", global_path.display());
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            log::debug!("Reading local config {}", local_path.display());
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(dict) = dictionary {
            config.dictionary = Some(dict);
        }
        if let Some(strategy) = strategy {
            config.strategy = strategy;
        }
        config.ignore_words.extend(cli_ignore_words);

        Ok(config)
    }

    /// Read a TOML config. Relative dictionary paths are taken relative to the file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.dictionary = config.dictionary.map(|p| base.join(p));
            config.extra_dictionaries = config
                .extra_dictionaries
                .into_iter()
                .map(|p| base.join(p))
                .collect();
        }

        Ok(config)
    }

    fn merge(mut self, other: Self) -> Self {
        if other.dictionary.is_some() {
            self.dictionary = other.dictionary;
        }
        self.extra_dictionaries.extend(other.extra_dictionaries);
        self.ignore_words.extend(other.ignore_words);
        if other.strategy != Strategy::default() {
            self.strategy = other.strategy;
        }
        self
    }

    /// The configured dictionary, extras merged in and ignored words removed.
    pub fn build_spelling_map(&self) -> crate::Result<SpellingMap> {
        let mut map = match &self.dictionary {
            Some(path) => SpellingMap::load(path)?,
            None => SpellingMap::embedded()?,
        };

        for path in &self.extra_dictionaries {
            map.merge(SpellingMap::load(path)?);
        }

        for word in &self.ignore_words {
            if map.remove(&word.to_lowercase()).is_some() {
                log::debug!("Ignoring '{}'", word);
            }
        }

        Ok(map)
    }

    pub fn build_converter(&self) -> crate::Result<Converter> {
        Ok(Converter::new(self.build_spelling_map()?, self.strategy))
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "us2uk").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.dictionary.is_none());
        assert!(config.ignore_words.is_empty());
        assert_eq!(config.strategy, Strategy::Global);
    }

    #[test]
    fn test_merge_configs() {
        let base = Config {
            ignore_words: vec!["gray".to_string()],
            ..Default::default()
        };
        let override_config = Config {
            dictionary: Some(PathBuf::from("team.csv")),
            ignore_words: vec!["color".to_string()],
            strategy: Strategy::PerToken,
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.dictionary, Some(PathBuf::from("team.csv")));
        assert_eq!(merged.ignore_words, vec!["gray", "color"]);
        assert_eq!(merged.strategy, Strategy::PerToken);
    }

    #[test]
    fn test_from_file_resolves_relative_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "dictionary = \"words.csv\"\nstrategy = \"per-token\"\nignore_words = [\"gray\"]\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.dictionary, Some(dir.path().join("words.csv")));
        assert_eq!(config.strategy, Strategy::PerToken);
        assert_eq!(config.ignore_words, vec!["gray"]);
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "strategy = \"sideways\"\n").unwrap();

        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_build_spelling_map() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("base.csv");
        let extra = dir.path().join("extra.csv");
        fs::write(&base, "us,uk\ncolor,colour\ngray,grey\nhonor,honour\n").unwrap();
        fs::write(&extra, "us,uk\ntire,tyre\ngray,gray\n").unwrap();

        let config = Config {
            dictionary: Some(base),
            extra_dictionaries: vec![extra],
            ignore_words: vec!["HONOR".to_string()],
            ..Default::default()
        };

        let map = config.build_spelling_map().unwrap();
        assert_eq!(map.get("color"), Some("colour"));
        assert_eq!(map.get("gray"), Some("gray"));
        assert_eq!(map.get("tire"), Some("tyre"));
        assert!(!map.contains("honor"));
    }

    #[test]
    fn test_build_defaults_to_embedded() {
        let converter = Config::default().build_converter().unwrap();
        assert_eq!(converter.convert("my favorite color"), "my favourite colour");
    }

    #[test]
    fn test_build_with_missing_dictionary() {
        let config = Config {
            dictionary: Some(PathBuf::from("/nonexistent/us2uk.csv")),
            ..Default::default()
        };

        assert!(matches!(
            config.build_spelling_map(),
            Err(crate::ConvertError::ResourceNotFound { .. })
        ));
    }
}
