//! # Remi - Redmine command-line client
//!
//! A command-line client for the Redmine project management server.
//!
//! ## Features
//!
//! - **Time Tracking**: Create, update, delete and list spent time entries
//! - **Status Overview**: Concurrent account dashboard over six periods
//! - **Issues and Projects**: Browse details, assigned and watched lists
//! - **Search**: Full-text search across the server
//! - **Aliases**: Short names for frequently used issue and project ids
//! - **Defaults**: Persisted session defaults such as the activity name
//!
//! ## Usage
//!
//! ```rust,no_run
//! use remi::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
