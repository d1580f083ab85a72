use clap::Parser;
use miette::Result;
use pxcanvas::cli::{Cli, Commands};
use pxcanvas::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let printer = Printer::new();

    match cli.command {
        Commands::Composite(args) => pxcanvas::cli::composite::run(args, &printer)?,
        Commands::Resize(args) => pxcanvas::cli::resize::run(args, &printer)?,
        Commands::Draw(args) => pxcanvas::cli::draw::run(args, &printer)?,
        Commands::Completions(args) => pxcanvas::cli::completions::run(args)?,
    }

    Ok(())
}
