// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! HTTP surface and demo pipelines for rivulet.
//!
//! - [`service::NameService`]: the name pipelines, one method per operator
//! - [`routes::router`]: the axum routes `/flux`, `/mono` and `/stream`
//! - [`config`]: command-line arguments and the resolved [`config::ServerConfig`]

pub mod config;
pub mod routes;
pub mod service;

pub use config::{Args, ServerConfig};
pub use routes::router;
pub use service::NameService;
