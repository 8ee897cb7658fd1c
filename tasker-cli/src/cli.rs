use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tasker")]
#[command(about = "Tasker task-board CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (defaults to api.base_url from config)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Acting user ID, sent as X-User-Id and used as the default reporter
    #[arg(long, global = true)]
    pub(crate) user_id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
