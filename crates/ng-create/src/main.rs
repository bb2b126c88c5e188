//! ng-create - Interactive generator for angular-template projects

use anyhow::{Context, Result};
use clap::Parser;
use generator_core::{style, InteractivePrompts, Options, Pipeline};

#[derive(Parser, Debug)]
#[command(name = "ng-create")]
#[command(about = "Scaffold an angular-template project")]
#[command(version)]
pub struct Args {
    /// Project name for the new project
    pub project: Option<String>,

    /// Verbosely log progress
    #[arg(short, long)]
    pub verbose: bool,

    /// Debug logging
    #[arg(short, long, hide = true)]
    pub debug: bool,
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Options {
            project: args.project,
            verbose: args.verbose,
            debug: args.debug,
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let result = run().await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        eprintln!("{}", style::error(&format!("{:#}", err)));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let pipeline = Pipeline::new(args.into(), InteractivePrompts)
        .context("failed to set up the generator")?;
    pipeline.run().await?;

    Ok(())
}
