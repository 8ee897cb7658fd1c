use crate::client::error::{ClientError, Result as ClientResult};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tasker_core::{ALL_DASHBOARDS_ID, CreateTaskPayload, Dashboard, Task, UpdateTaskPayload, User};

/// Shown when the backend rejects a request without an error envelope.
const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// HTTP client for the Tasker REST API
pub struct Client {
    pub base_url: String,
    pub user_id: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:8000")
    /// * `user_id` - Optional user ID to include in X-User-Id header
    pub fn new(base_url: &str, user_id: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request with optional user ID header
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        let mut req = self.client.request(method, &url);

        if let Some(ref user_id) = self.user_id {
            req = req.header("X-User-Id", user_id);
        }

        req
    }

    /// Execute request, decode errors, deserialize the body
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::decode_error(status, response.json().await.ok()));
        }

        Ok(response.json::<T>().await?)
    }

    /// Map a non-success response to an API error; falls back to a generic
    /// message when the backend sends no `{"error":{code,message}}` envelope
    #[track_caller]
    fn decode_error(status: StatusCode, body: Option<Value>) -> ClientError {
        let envelope = body.as_ref().and_then(|body| body.get("error"));
        let code = envelope
            .and_then(|error| error.get("code"))
            .and_then(Value::as_str)
            .unwrap_or(status.as_str())
            .to_string();
        let message = envelope
            .and_then(|error| error.get("message"))
            .and_then(Value::as_str)
            .unwrap_or(GENERIC_ERROR_MESSAGE)
            .to_string();

        ClientError::Api {
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    /// Fetch every task across dashboards
    pub async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
        let req = self.request(Method::GET, "/tasklist");
        self.execute(req).await
    }

    /// Fetch the tasks belonging to one dashboard
    pub async fn list_tasks_by_dashboard(&self, dashboard_id: &str) -> ClientResult<Vec<Task>> {
        let req = self.request(Method::GET, &format!("/taskByDB/{}", dashboard_id));
        self.execute(req).await
    }

    /// Fetch the task collection for a view.
    ///
    /// Single branch point: the aggregate (or a not-yet-resolved empty id)
    /// loads everything, a concrete id loads one dashboard. Exactly one
    /// fetch path runs per call.
    pub async fn tasks_for(&self, active_dashboard_id: &str) -> ClientResult<Vec<Task>> {
        if active_dashboard_id.is_empty() || active_dashboard_id == ALL_DASHBOARDS_ID {
            self.list_tasks().await
        } else {
            self.list_tasks_by_dashboard(active_dashboard_id).await
        }
    }

    /// Fetch a single task by ID
    pub async fn get_task(&self, task_id: &str) -> ClientResult<Task> {
        let req = self.request(Method::GET, &format!("/task/by_id/{}", task_id));
        self.execute(req).await
    }

    /// Create a new task
    pub async fn create_task(&self, payload: &CreateTaskPayload) -> ClientResult<Value> {
        let req = self.request(Method::POST, "/create").json(payload);
        self.execute(req).await
    }

    /// Update an existing task
    pub async fn update_task(
        &self,
        task_id: &str,
        payload: &UpdateTaskPayload,
    ) -> ClientResult<Value> {
        let req = self
            .request(Method::PUT, &format!("/update/{}", task_id))
            .json(payload);
        self.execute(req).await
    }

    // =========================================================================
    // Dashboard Operations
    // =========================================================================

    /// Fetch the dashboard list; the aggregate entry always comes first
    pub async fn list_dashboards(&self) -> ClientResult<Vec<Dashboard>> {
        let req = self.request(Method::GET, "/showDB");
        let mut dashboards: Vec<Dashboard> = self.execute(req).await?;

        // the backend may or may not include the aggregate itself
        dashboards.retain(|dashboard| !dashboard.is_aggregate());
        dashboards.insert(0, Dashboard::aggregate());

        Ok(dashboards)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Fetch all registered users
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        let req = self.request(Method::GET, "/Users");
        self.execute(req).await
    }
}
