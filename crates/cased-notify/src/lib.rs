//! One-shot deployment notifier for the Cased API.
//!
//! The binary reads CI-provided environment variables, assembles a single
//! deployment event, and posts it to `/api/v1/deployments/`.

pub mod cli;
pub mod config;
pub mod logging;
pub mod notifier;
pub mod payload;
