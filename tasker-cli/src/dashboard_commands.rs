use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum DashboardCommands {
    /// List all dashboards, including the aggregate entry
    List,
}
