use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::render::render;
use crate::run::run;

mod config;
mod log;
mod render;
mod report;
mod run;

/// Render the greeter card and click its counter from the terminal
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print additional progress information
    #[arg(short, long, global = true)]
    verbose: bool,

    /// When to color status output
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the card once, optionally after a number of clicks
    #[command(visible_alias = "r")]
    Render(RenderArgs),

    /// Mount the card and click it interactively from stdin
    #[command(visible_alias = "i")]
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RenderArgs {
    #[command(flatten)]
    props: PropsArgs,

    /// Number of times to click the counter button before printing
    #[arg(short, long, default_value_t = 0)]
    clicks: u64,

    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,
}

#[derive(Debug, Args)]
struct RunArgs {
    #[command(flatten)]
    props: PropsArgs,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

/// Where the props come from. Inline flags override values read from the file.
#[derive(Debug, Default, Args)]
struct PropsArgs {
    /// JSON file with `name`, `age` and `person.{title,nm,nation}`
    #[arg(short, long, value_name = "FILE")]
    props: Option<PathBuf>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    age: Option<u32>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    nm: Option<String>,

    #[arg(long)]
    nation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        log::enable_verbose_output();
    }

    let color = match cli.color {
        ColorChoice::Auto => io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    if color {
        log::enable_color_output();
    }

    let res = match &cli.command {
        Command::Render(args) => render(args),
        Command::Run(args) => run(args),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
