//! tasker - Tasker task-board CLI
//!
//! A command-line interface for the Tasker backend: list dashboards,
//! inspect and mutate tasks, and render the sortable board table.
//!
//! # Examples
//!
//! ```bash
//! # List dashboards (the aggregate entry comes first)
//! tasker dashboard list --pretty
//!
//! # Render the board for one dashboard, sorted by deadline descending
//! tasker board --dashboard d1 --sort deadline --sort deadline
//!
//! # Create a task that needs approval
//! tasker task create --title "Прототип" --deadline 2025-08-01T12:00 \
//!     --dashboard-id d1 --require-approval --approver u2
//! ```

mod board;
mod cli;
mod commands;
mod dashboard_commands;
mod error;
mod logger;
mod task_commands;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::dashboard_commands::DashboardCommands;
use crate::task_commands::TaskCommands;

use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use log::debug;
use serde::Serialize;
use tasker_client::{BoardData, Client, ClientResult};
use tasker_config::Config;
use tasker_core::{BoardView, SortField, TaskForm, TaskStatus};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.clone(),
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());
    let acting_user = cli.user_id.clone().or_else(|| config.api.user_id.clone());
    debug!("using backend {}", server_url);
    let client = Client::new(&server_url, acting_user.as_deref());

    match cli.command {
        // Dashboard commands
        Commands::Dashboard { action } => match action {
            DashboardCommands::List => print_json(client.list_dashboards().await, cli.pretty),
        },

        // Task commands
        Commands::Task { action } => match action {
            TaskCommands::List { dashboard } => print_json(
                client.tasks_for(dashboard.as_deref().unwrap_or("all")).await,
                cli.pretty,
            ),
            TaskCommands::Get { id } => print_json(client.get_task(&id).await, cli.pretty),
            TaskCommands::Create {
                title,
                description,
                deadline,
                dashboard_id,
                require_approval,
                approver,
                blocked_by,
            } => {
                run_create(
                    &client,
                    acting_user.as_deref(),
                    title,
                    description,
                    deadline,
                    dashboard_id,
                    require_approval,
                    approver,
                    blocked_by,
                    cli.pretty,
                )
                .await
            }
            TaskCommands::Update {
                id,
                title,
                description,
                deadline,
                status,
                dashboard_id,
                require_approval,
                no_approval,
                approver,
                blocked_by,
                no_blockers,
            } => {
                run_update(
                    &client,
                    id,
                    title,
                    description,
                    deadline,
                    status,
                    dashboard_id,
                    require_approval,
                    no_approval,
                    approver,
                    blocked_by,
                    no_blockers,
                    cli.pretty,
                )
                .await
            }
        },

        // Board rendering
        Commands::Board { dashboard, sort } => run_board(&client, dashboard, sort).await,
    }
}

/// Build, validate and submit a create payload.
///
/// The reporter (and default approver) is the acting user; validation runs
/// against the fetched user list before anything is sent.
async fn run_create(
    client: &Client,
    acting_user: Option<&str>,
    title: String,
    description: Option<String>,
    deadline: String,
    dashboard_id: String,
    require_approval: bool,
    approver: Option<String>,
    blocked_by: Vec<String>,
    pretty: bool,
) -> ExitCode {
    let Some(user_id) = acting_user else {
        eprintln!("Error: an acting user is required (--user-id or api.user_id in config)");
        return ExitCode::FAILURE;
    };

    let users = match client.list_users().await {
        Ok(users) => users,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut form = TaskForm::for_reporter(user_id);
    form.title = title;
    form.description = description.unwrap_or_default();
    form.deadline = deadline;
    form.dashboard_id = dashboard_id;
    form.set_require_approval(require_approval);
    if let Some(approver) = approver {
        form.approver_id = approver;
    }
    if !blocked_by.is_empty() {
        form.set_has_blockers(true);
        form.blocked_by = blocked_by;
    }

    if let Err(e) = form.validate(&users) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    print_json(client.create_task(&form.create_payload()).await, pretty)
}

/// Re-fetch the task, apply the requested changes on top of it, validate
/// and submit the full update snapshot.
async fn run_update(
    client: &Client,
    id: String,
    title: Option<String>,
    description: Option<String>,
    deadline: Option<String>,
    status: Option<String>,
    dashboard_id: Option<String>,
    require_approval: bool,
    no_approval: bool,
    approver: Option<String>,
    blocked_by: Vec<String>,
    no_blockers: bool,
    pretty: bool,
) -> ExitCode {
    let task = match client.get_task(&id).await {
        Ok(task) => task,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let users = match client.list_users().await {
        Ok(users) => users,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut form = TaskForm::from_task(&task);
    if let Some(title) = title {
        form.title = title;
    }
    if let Some(description) = description {
        form.description = description;
    }
    if let Some(deadline) = deadline {
        form.deadline = deadline;
    }
    if let Some(status) = status {
        form.status = match TaskStatus::from_str(&status) {
            Ok(status) => status,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        };
    }
    if let Some(dashboard_id) = dashboard_id {
        form.dashboard_id = dashboard_id;
    }
    if require_approval {
        form.set_require_approval(true);
    }
    if no_approval {
        form.set_require_approval(false);
    }
    if let Some(approver) = approver {
        form.approver_id = approver;
    }
    if !blocked_by.is_empty() {
        form.set_has_blockers(true);
        form.blocked_by = blocked_by;
    }
    if no_blockers {
        form.set_has_blockers(false);
    }

    if let Err(e) = form.validate(&users) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    print_json(client.update_task(&id, &form.update_payload()).await, pretty)
}

/// Load dashboards, resolve the active one, apply sort toggles and render
/// the table. Fetch failures degrade to an empty board with the error on
/// stderr.
async fn run_board(client: &Client, dashboard: Option<String>, sort: Vec<String>) -> ExitCode {
    let mut data = BoardData::new();
    data.refresh_dashboards(client).await;

    let mut view = BoardView::new(data.dashboards_or_default());
    if let Some(id) = dashboard {
        view.select(&id);
    }

    for field in &sort {
        match SortField::from_str(field) {
            Ok(field) => view.toggle_sort(field),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    data.refresh_tasks(client, &view.active_dashboard_id()).await;
    data.refresh_users(client).await;

    if let Some(error) = data.first_error() {
        eprintln!("Ошибка загрузки: {}", error);
    }

    println!(
        "{}",
        board::render_board(&view, data.tasks_or_empty(), data.users_or_empty())
    );
    ExitCode::SUCCESS
}

/// Print a successful response as JSON, or the error to stderr
fn print_json<T: Serialize>(result: ClientResult<T>, pretty: bool) -> ExitCode {
    match result {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests;
