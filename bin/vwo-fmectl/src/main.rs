//! ---
//! fme_section: "04-cli"
//! fme_subsection: "binary"
//! fme_type: "source"
//! fme_scope: "code"
//! fme_description: "Control CLI for inspecting VWO FME version metadata."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use vwo_fme_logging as logging;
use vwo_fme_version::build_info::clap_long_version;

mod meta;
mod report;

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "VWO FME version metadata utility",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print extended version information and exit"
    )]
    version: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Print the version number, version string, and build info")]
    Show(report::ShowArgs),
    #[command(about = "Fail unless this build is at least the given version")]
    Check(report::CheckArgs),
    #[command(about = "Re-check number/string consistency and the exported C symbols")]
    Verify,
    #[command(about = "Resolve and print the SDK identity")]
    Meta(meta::MetaArgs),
}

/// Output rendering shared by the subcommands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Show(report::ShowArgs::default()));
    // `meta` configures logging from the file it loads.
    if !matches!(command, Commands::Meta(_)) {
        logging::init();
    }
    if cli.version {
        println!("{}", clap_long_version());
        return Ok(());
    }
    match command {
        Commands::Show(args) => report::show(&args)?,
        Commands::Check(args) => report::check(&args)?,
        Commands::Verify => report::verify()?,
        Commands::Meta(args) => meta::run(&args)?,
    }
    Ok(())
}
