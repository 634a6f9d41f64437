use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hisabi-surfaces")]
#[command(about = "Render home-screen surfaces from the shared snapshot store", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: ~/.config/hisabi-surfaces/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Store file written by the host app (overrides [store] path)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print surface view-models as JSON
    Render {
        #[arg(value_parser = ["summary", "expense_trend", "savings_goal", "all"], default_value = "all")]
        surface: String,
    },

    /// Draw one surface in the terminal
    Preview {
        #[arg(value_parser = ["summary", "expense_trend", "savings_goal"])]
        surface: String,

        #[arg(long, default_value = "40")]
        width: u16,
    },

    /// Resolve a deep-link URI to an application route
    Route {
        uri: String,

        /// Route printed when the link falls through
        #[arg(long, default_value = "/")]
        fallback: String,
    },
}
