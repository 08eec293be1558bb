use std::fs;
use std::path;

use serde::Serialize as _;
use serde_json::Map;
use serde_json::Value;

use crate::Config;
use crate::Error;
use crate::Reporter;
use crate::Result;
use crate::Warning;
use crate::config::Overlay;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// A [`Config`] bound to the file it is loaded from and saved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: path::PathBuf,
    config: Config,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}

impl ConfigStore {
    /// Bind to `path` with every setting at its default. Nothing is read yet.
    pub fn new<P: Into<path::PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            config: Config::default(),
        }
    }

    /// Bind to `path` and [`load`][Self::load] it.
    pub fn open<P: Into<path::PathBuf>>(path: P, reporter: &mut dyn Reporter) -> Result<Self> {
        let mut store = Self::new(path);
        store.load(reporter)?;
        Ok(store)
    }

    pub fn path(&self) -> &path::Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Overlay the settings from the bound file onto the current ones.
    ///
    /// A missing or unparseable file is reported and leaves the current settings
    /// untouched. A file naming a key the current settings do not have is an error.
    pub fn load(&mut self, reporter: &mut dyn Reporter) -> Result<()> {
        let Some(candidate) = self.read(reporter) else {
            return Ok(());
        };
        self.validate(&candidate, reporter)?;

        match serde_json::from_value::<Overlay>(Value::Object(candidate)) {
            Ok(overlay) => {
                self.config.apply(overlay);
                log::debug!("Loaded config from `{}`", self.path.display());
            }
            Err(e) => reporter.warning(Warning::ConfigUnavailable {
                path: self.path.clone(),
                reason: e.to_string(),
            }),
        }
        Ok(())
    }

    fn read(&self, reporter: &mut dyn Reporter) -> Option<Map<String, Value>> {
        let unavailable = |reason: String| Warning::ConfigUnavailable {
            path: self.path.clone(),
            reason,
        };

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                reporter.warning(unavailable(e.to_string()));
                return None;
            }
        };
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(candidate)) => Some(candidate),
            Ok(_) => {
                reporter.warning(unavailable("expected a JSON object".to_owned()));
                None
            }
            Err(e) => {
                reporter.warning(unavailable(e.to_string()));
                None
            }
        }
    }

    /// Write every current setting to the bound file.
    pub fn save(&self, reporter: &mut dyn Reporter) -> Result<()> {
        let candidate = match serde_json::to_value(&self.config)? {
            Value::Object(candidate) => candidate,
            _ => Map::new(),
        };
        self.validate(&candidate, reporter)?;

        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.config.serialize(&mut serializer)?;
        buffer.push(b'\n');

        fs::write(&self.path, buffer).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("Saved config to `{}`", self.path.display());
        Ok(())
    }

    /// Look up a setting by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.config.get(key)
    }

    /// Look up a setting by name, falling back to `default`.
    pub fn get_or<'s>(&'s self, key: &str, default: &'s str) -> &'s str {
        self.get(key).unwrap_or(default)
    }

    /// Check `candidate` against the current settings.
    ///
    /// The current settings are the allow-list: any key of `candidate` they lack is an
    /// error. Every current key that `candidate` lacks is reported as a warning.
    pub fn validate(
        &self,
        candidate: &Map<String, Value>,
        reporter: &mut dyn Reporter,
    ) -> Result<()> {
        if let Some(key) = candidate.keys().find(|key| self.get(key).is_none()) {
            return Err(Error::UnknownKey { key: key.clone() });
        }
        for key in Config::KEYS {
            if !candidate.contains_key(*key) {
                reporter.warning(Warning::MissingConfigKey {
                    key: (*key).to_owned(),
                });
            }
        }
        Ok(())
    }
}
