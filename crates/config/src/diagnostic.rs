use std::fmt;
use std::path;

/// A recoverable condition noticed while loading the site.
///
/// None of these stop a build; they are handed to a [`Reporter`] so callers decide
/// whether to log, collect, or ignore them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Warning {
    /// The config file could not be read or parsed, defaults are in effect.
    ConfigUnavailable { path: path::PathBuf, reason: String },
    /// A key of the current configuration is absent from an incoming config.
    MissingConfigKey { key: String },
    /// The content file does not exist, the repository is left as it was.
    ContentUnavailable { path: path::PathBuf },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigUnavailable { path, reason } => write!(
                f,
                "Config file `{}` not found or invalid ({reason}), using defaults",
                path.display()
            ),
            Self::MissingConfigKey { key } => {
                write!(f, "Configuration key `{key}` not set, keeping `{key}` as is")
            }
            Self::ContentUnavailable { path } => write!(
                f,
                "Content file `{}` not found, starting with an empty repository",
                path.display()
            ),
        }
    }
}

/// Receives [`Warning`]s as they happen.
pub trait Reporter {
    fn warning(&mut self, warning: Warning);
}

/// Forwards warnings to the `log` facade.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn warning(&mut self, warning: Warning) {
        log::warn!("{warning}");
    }
}

impl Reporter for Vec<Warning> {
    fn warning(&mut self, warning: Warning) {
        self.push(warning);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn warning(&mut self, warning: Warning) {
        (**self).warning(warning);
    }
}
