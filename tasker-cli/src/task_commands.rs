use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum TaskCommands {
    /// List tasks for a dashboard
    List {
        /// Dashboard ID (defaults to the aggregate view)
        #[arg(long)]
        dashboard: Option<String>,
    },

    /// Get a task by ID
    Get {
        /// Task ID
        id: String,
    },

    /// Create a new task
    Create {
        /// Task title
        #[arg(long)]
        title: String,

        /// Task description
        #[arg(long)]
        description: Option<String>,

        /// Deadline (ISO date or datetime)
        #[arg(long)]
        deadline: String,

        /// Dashboard ID the task belongs to
        #[arg(long)]
        dashboard_id: String,

        /// Request approval before work starts
        #[arg(long)]
        require_approval: bool,

        /// Approver user ID (defaults to the acting user)
        #[arg(long)]
        approver: Option<String>,

        /// Blocking task ID, repeatable
        #[arg(long = "blocked-by")]
        blocked_by: Vec<String>,
    },

    /// Update an existing task
    Update {
        /// Task ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New deadline (ISO date or datetime)
        #[arg(long)]
        deadline: Option<String>,

        /// New status: to-do, in-progress, review, blocked, done, canceled
        #[arg(long)]
        status: Option<String>,

        /// Move the task to another dashboard
        #[arg(long)]
        dashboard_id: Option<String>,

        /// Request approval before work continues
        #[arg(long, conflicts_with = "no_approval")]
        require_approval: bool,

        /// Drop the approval requirement
        #[arg(long, conflicts_with = "require_approval")]
        no_approval: bool,

        /// Approver user ID
        #[arg(long)]
        approver: Option<String>,

        /// Blocking task ID, repeatable; replaces the current list
        #[arg(long = "blocked-by", conflicts_with = "no_blockers")]
        blocked_by: Vec<String>,

        /// Clear the blocking-task list
        #[arg(long, conflicts_with = "blocked_by")]
        no_blockers: bool,
    },
}
