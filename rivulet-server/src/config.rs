// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// rivulet-server - cold reactive pipelines over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Bind address for the HTTP server
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Log level
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Period of the `/stream` interval, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub stream_interval_ms: u64,
}

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub log_level: String,
    /// Period of the `/stream` interval
    pub stream_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            log_level: "info".to_string(),
            stream_interval: Duration::from_secs(1),
        }
    }
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            bind: args.bind,
            log_level: args.log_level,
            stream_interval: Duration::from_millis(args.stream_interval_ms),
        }
    }
}
