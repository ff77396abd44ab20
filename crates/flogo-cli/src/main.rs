mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "flogo",
    about = "Manage the activities, models and triggers of a flogo project",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: nearest directory containing flogo.json)
    #[arg(long, global = true, env = "FLOGO_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an activity, model or trigger to the project
    Add {
        /// Item type: activity, model or trigger
        #[arg(value_name = "activity|model|trigger")]
        item_type: String,

        /// Local directory, file:// path, or vendored import path of the item
        path: String,

        /// Copy contents into the project source tree (local items only)
        #[arg(long)]
        src: bool,
    },

    /// List installed items
    List {
        /// Only list items of this type
        #[arg(value_name = "activity|model|trigger")]
        item_type: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "resolved project root");

    let result = match cli.command {
        Commands::Add {
            item_type,
            path,
            src,
        } => cmd::add::run(&root, &item_type, &path, src, cli.json),
        Commands::List { item_type } => cmd::list::run(&root, item_type.as_deref(), cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
