//! m3-proxy is a stateless, CORS-enabling edge proxy.
//!
//! It forwards three kinds of request to a single configured upstream
//! (index API calls, image downloads, and autocomplete queries),
//! streams the upstream body back unchanged, and stamps permissive
//! CORS headers on every response. Any other path gets a static
//! landing page.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (run, init, validate).
//! - [`config`] -- Config file model, parsing, validation, and overrides.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`middleware`] -- Response mapper applying the CORS header set.
//! - [`proxy`] -- Route dispatch, the three forwarders, and the landing page.
//! - [`server`] -- Axum server setup, shared state, HTTP client, and
//!   graceful shutdown.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `yaml` | YAML config file support _(enabled by default)_ |
//! | `json` | JSON config file support |
//! | `toml` | TOML config file support |
//! | `file-backends` | All file formats |

// Binary crate — public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod proxy;
pub mod server;
