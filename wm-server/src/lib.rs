//! wm-server: axum HTTP service for the workspace manager.
//!
//! Wires the `wm-core` engine to routes: workspace listing under
//! `/workspaces` and tenant signup under `/api/v1/signup`. Cluster
//! access goes through the client traits; [`memory::MemoryCluster`]
//! provides the in-process implementation for dev mode and tests.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod state;

pub use app::router;
pub use config::ServerConfig;
pub use error::ApiError;
pub use memory::MemoryCluster;
pub use state::AppState;
