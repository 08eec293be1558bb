use std::io::Write as _;
use std::path;

use anyhow::Context as _;
use folio_config::ConfigStore;
use folio_config::DEFAULT_CONFIG_FILE;
use folio_config::LogReporter;
use folio_core::DEFAULT_CONTENT_FILE;

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub(crate) config: path::PathBuf,

    /// Content file to build from
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONTENT_FILE)]
    pub(crate) content: path::PathBuf,

    /// Site destination folder [default: `output_dir` from the config]
    #[arg(short, long, value_name = "DIR")]
    pub(crate) destination: Option<String>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<ConfigStore> {
        let mut store = ConfigStore::open(&self.config, &mut LogReporter)
            .with_context(|| format!("Error reading config file `{}`", self.config.display()))?;

        if let Some(destination) = &self.destination {
            log::debug!("Overriding config `output_dir` with `{destination}`");
            store.config_mut().output_dir = destination.clone();
        }

        Ok(store)
    }

    pub(crate) fn content_path(&self) -> &path::Path {
        &self.content
    }
}

pub(crate) fn init_logging(level: Option<log::Level>, colored: bool) {
    let Some(level) = level else {
        return;
    };

    let palette = if colored {
        Palette::colored()
    } else {
        Palette::plain()
    };
    let mut builder = env_logger::Builder::new();
    builder.write_style(if colored {
        env_logger::WriteStyle::Always
    } else {
        env_logger::WriteStyle::Never
    });
    builder.filter(None, level.to_level_filter());
    builder.format(move |f, record| {
        let style = palette.level(record.level());
        let level = record.level().to_string().to_lowercase();
        writeln!(f, "{style}[{level}]{style:#} {}", record.args())
    });
    builder.init();
}

#[derive(Copy, Clone, Default, Debug)]
struct Palette {
    error: anstyle::Style,
    warn: anstyle::Style,
    info: anstyle::Style,
    debug: anstyle::Style,
    trace: anstyle::Style,
}

impl Palette {
    fn colored() -> Self {
        Self {
            error: anstyle::AnsiColor::Red.on_default() | anstyle::Effects::BOLD,
            warn: anstyle::AnsiColor::Yellow.on_default(),
            info: anstyle::AnsiColor::Green.on_default(),
            debug: anstyle::AnsiColor::Blue.on_default(),
            trace: anstyle::AnsiColor::Cyan.on_default(),
        }
    }

    fn plain() -> Self {
        Self::default()
    }

    fn level(self, level: log::Level) -> anstyle::Style {
        match level {
            log::Level::Error => self.error,
            log::Level::Warn => self.warn,
            log::Level::Info => self.info,
            log::Level::Debug => self.debug,
            log::Level::Trace => self.trace,
        }
    }
}
