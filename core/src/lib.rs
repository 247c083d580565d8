//! Read-only BigTime API client and tool handlers.
//!
//! # Overview
//! Nine tools (staff, projects, clients, tasks, time entries, daily totals)
//! backed by the BigTime REST API. Each tool validates its input, resolves
//! credentials, makes exactly one upstream call, paginates client-side, and
//! returns a uniform success or failure envelope.
//!
//! # Design
//! - `BigTimeClient` builds authenticated `HttpRequest` values and parses
//!   `HttpResponse` values; a `Transport` performs the round-trip in between.
//! - Handlers receive credentials and transport through `ToolContext`, so
//!   tests can substitute both.
//! - Nothing is cached and nothing is written upstream.

pub mod client;
pub mod config;
pub mod credentials;
pub mod envelope;
pub mod error;
pub mod field;
pub mod handlers;
pub mod http;
pub mod pagination;
pub mod tools;
pub mod types;

pub use client::BigTimeClient;
pub use config::ClientConfig;
pub use credentials::{CredentialSource, Credentials, EnvCredentials, StaticCredentials};
pub use envelope::{Envelope, ErrorKind, Failure};
pub use error::ApiError;
pub use field::Field;
pub use handlers::ToolContext;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use pagination::{PageInfo, Pagination};
pub use tools::{catalog, dispatch, DispatchError, ToolName};
pub use types::View;
