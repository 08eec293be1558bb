mod args;
mod build;
mod debug;
mod error;
mod new;

use clap::Parser as _;
use proc_exit::prelude::*;

use crate::error::Result;

/// Static site generator for JSON content and liquid templates
#[derive(Debug, clap::Parser)]
#[command(about, author, version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    color: colorchoice_clap::Color,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    Init(new::InitArgs),
    New(new::NewArgs),
    Build(build::BuildArgs),
    Clean(build::CleanArgs),
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    fn run(&self) -> Result<()> {
        match self {
            Self::Init(cmd) => cmd.run(),
            Self::New(cmd) => cmd.run(),
            Self::Build(cmd) => cmd.run(),
            Self::Clean(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    let colored_stderr = !matches!(
        anstream::AutoStream::choice(&std::io::stderr()),
        anstream::ColorChoice::Never
    );
    args::init_logging(cli.verbose.log_level(), colored_stderr);

    cli.command
        .run()
        .map_err(|err| format!("{err:#}"))
        .with_code(proc_exit::Code::FAILURE)?;

    Ok(())
}

#[test]
fn verify_app() {
    use clap::CommandFactory as _;
    Cli::command().debug_assert();
}
