use folio::Resolver;
use folio_config::LogReporter;
use folio_core::Content as _;
use folio_core::ContentRepository;

use crate::args;
use crate::error::Result;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints post-processed config
    Config {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Print the slug, output path, and URL of every entry
    Routes {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Print files in the destination directory
    Files {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { config } => {
                let config = config.load_config()?;
                println!("{}", config.config());
            }
            Self::Routes { config: config_args } => {
                let config = config_args.load_config()?;
                let resolver = Resolver::new(config.config().base_url.clone());
                let mut content = ContentRepository::new();
                content.load(config_args.content_path(), &mut LogReporter)?;
                for entry in content.list_all() {
                    let slug = entry.slug();
                    println!(
                        "{slug}\t{}\t{}",
                        resolver.resolve(slug),
                        resolver.generate_url(slug)
                    );
                }
            }
            Self::Files { config } => {
                let config = config.load_config()?;
                let output_dir = config.config().output_dir();
                if !output_dir.is_dir() {
                    log::warn!("`{}` has not been built yet", output_dir.display());
                    return Ok(());
                }
                let storage = folio::FileSystemStorage::new(output_dir)?;
                for path in storage.files()? {
                    println!("{path}");
                }
            }
        }

        Ok(())
    }
}
