//! greeting-demo CLI
//!
//! Interactive greeting screen, or a printed snapshot of its render tree.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use greeting_demo::error::AppError;
use greeting_demo::logging::init_tracing;
use greeting_demo::root::RootView;
use greeting_demo::snapshot::{format_tree, root_after};
use greeting_demo::style::Color;
use greeting_demo::tui::run::run;
use greeting_demo::tui::state::App;
use greeting_demo::types::{ButtonId, OutputFormat};

#[derive(Parser)]
#[command(name = "greeting-demo")]
#[command(about = "A greeting screen with one button that changes the message")]
#[command(version)]
struct Cli {
    /// Color override passed to the greeting (named or #rrggbb)
    #[arg(long, global = true, default_value = "blue")]
    greeting_color: Color,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive screen (default)
    Run,

    /// Print the render tree without opening the screen
    Snapshot {
        /// Button to press before rendering; repeatable, applied in order
        #[arg(long, value_enum)]
        press: Vec<ButtonId>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(App::with_greeting_color(cli.greeting_color)),
        Commands::Snapshot { press, format } => {
            cmd_snapshot(cli.greeting_color, &press, format.into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "exiting with failure");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_snapshot(color: Color, presses: &[ButtonId], format: OutputFormat) -> Result<(), AppError> {
    let root = root_after(RootView::with_greeting_color(color), presses);
    print!("{}", format_tree(&root.render(), format)?);
    Ok(())
}
