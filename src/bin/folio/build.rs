use std::env;
use std::fs;
use std::path;

use folio_config::Config;
use folio_config::ConfigStore;
use folio_config::LogReporter;

use crate::args;
use crate::error::Result;

/// Build the site from the config, content, and templates
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct BuildArgs {
    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl BuildArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;

        build(&config, self.config.content_path())?;
        log::info!("Build successful");

        Ok(())
    }
}

pub(crate) fn build(config: &ConfigStore, content: &path::Path) -> Result<()> {
    log::info!(
        "Building from `{}` into `{}`",
        content.display(),
        config.config().output_dir().display()
    );
    let pages = folio::build(config, content, &mut LogReporter)?;
    log::debug!("Wrote {pages} pages");

    Ok(())
}

/// Cleans `output_dir` directory
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CleanArgs {
    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl CleanArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;

        clean(config.config())
    }
}

pub(crate) fn clean(config: &Config) -> Result<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| path::PathBuf::new());
    let cwd = dunce::canonicalize(&cwd).unwrap_or(cwd);
    let destdir = dunce::canonicalize(config.output_dir());
    let destdir = match destdir {
        Ok(destdir) => destdir,
        Err(e) => {
            log::debug!("No `{}` to clean", config.output_dir().display());
            log::debug!("{e}");
            return Ok(());
        }
    };
    if cwd.starts_with(&destdir) {
        anyhow::bail!(
            "Attempting to delete current directory ({}), \
             Cancelling the operation",
            destdir.display()
        );
    }

    fs::remove_dir_all(&destdir)?;

    log::info!("directory `{}` removed", destdir.display());

    Ok(())
}
