// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! REST service to manage student records.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use iii_iv_core::db::Db;
use iii_iv_core::env::get_optional_var;
use iii_iv_core::rest::RestError;
use log::{error, info, warn};
use std::error::Error;
use std::future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::timeout::TimeoutLayer;

mod db;
mod driver;
use driver::Driver;
mod model;
mod rest;

/// Default value for the `request_timeout` configuration property.
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Service-level configuration options.
#[derive(Debug, PartialEq)]
pub struct AlunosOptions {
    /// Maximum amount of time a request may take before it is answered with a timeout.
    pub request_timeout: Duration,
}

impl Default for AlunosOptions {
    fn default() -> Self {
        Self { request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS) }
    }
}

impl AlunosOptions {
    /// Initializes a set of options from environment variables whose name is prefixed with the
    /// given `prefix`.
    ///
    /// This will use variables such as `<prefix>_REQUEST_TIMEOUT_SECONDS`.
    pub fn from_env(prefix: &str) -> Result<Self, String> {
        let request_timeout = get_optional_var::<u64>(prefix, "REQUEST_TIMEOUT_SECONDS")?
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS);
        Ok(Self { request_timeout: Duration::from_secs(request_timeout) })
    }
}

/// Replaces the bare response emitted on a request timeout with the standard error payload.
async fn render_timeout(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        warn!("Request did not complete in time");
        return RestError::Timeout.into_response();
    }
    response
}

/// Wraps `app` with the middleware that applies to all APIs.
fn with_middleware(app: Router, opts: &AlunosOptions) -> Router {
    app.layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, opts.request_timeout))
        .layer(middleware::map_response(render_timeout))
}

/// Builds the router for the application, including the middleware that applies to all APIs.
fn router(db: Arc<dyn Db + Send + Sync>, opts: &AlunosOptions) -> Router {
    let driver = Driver::new(db);
    with_middleware(rest::app(driver), opts)
}

/// Waits until the process is asked to terminate.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("Received Ctrl+C; shutting down"),
        _ = terminate => warn!("Received SIGTERM; shutting down"),
    }
}

/// Instantiates all resources to serve the application on `bind_addr`.
///
/// The database schema is created if it does not yet exist.  The connection pool in `db` is closed
/// once the server stops, after in-flight requests complete.
///
/// While it'd be nice to push this responsibility to `main`, doing so would force us to expose many
/// crate-internal types to the public, which in turn would make dead code detection harder.
pub async fn serve(
    bind_addr: impl Into<SocketAddr>,
    db: Arc<dyn Db + Send + Sync>,
    opts: AlunosOptions,
) -> Result<(), Box<dyn Error>> {
    db::init_schema(&mut db.ex().await?).await?;

    let app = router(db.clone(), &opts);
    let listener = TcpListener::bind(bind_addr.into()).await?;
    info!("Listening on {} with options {:?}", listener.local_addr()?, opts);

    let result = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await;
    db.close().await;
    info!("Server shutdown complete");
    Ok(result?)
}
