//! HTTP client for the Tasker backend and loading state for its data.
//!
//! The backend owns every collection; this crate fetches immutable
//! snapshots of them and reports each request's loading/failed/ready state.

pub(crate) mod client;
pub(crate) mod remote;
pub(crate) mod store;

pub use client::{Client, ClientError, ClientResult};
pub use remote::Remote;
pub use store::BoardData;

#[cfg(test)]
mod tests;
