use crate::dashboard_commands::DashboardCommands;
use crate::task_commands::TaskCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Dashboard operations
    Dashboard {
        #[command(subcommand)]
        action: DashboardCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Render the board table for a dashboard
    Board {
        /// Dashboard ID ("all" for the aggregate view; defaults to the first real dashboard)
        #[arg(long)]
        dashboard: Option<String>,

        /// Toggle sort on a column, repeatable: status, deadline, createdAt
        #[arg(long = "sort", value_parser = ["status", "deadline", "createdAt"])]
        sort: Vec<String>,
    },
}
