//! Preview server for the built site.
//!
//! Builds once, then serves `[build] output` with `tiny_http` until Ctrl+C.

mod lifecycle;
mod path;
mod response;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tiny_http::{Request, Server};

use super::build::build_site;
use crate::config::HearthConfig;
use crate::{debug, log};

/// Build the site and serve it (blocking).
pub fn serve_site(config: &HearthConfig) -> Result<()> {
    build_site(config)?;

    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    crate::core::register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    run_request_loop(&server, &config.build.output);
    Ok(())
}

fn run_request_loop(server: &Server, root: &Path) {
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, root) {
            log!("serve"; "request error: {e}");
        }
    }
    debug!("serve"; "request loop stopped");
}

/// Handle a single HTTP request
fn handle_request(request: Request, root: &Path) -> Result<()> {
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    debug!("serve"; "{} {}", request.method(), request.url());
    match path::resolve_path(request.url(), root) {
        Some(file) => response::respond_file(request, &file),
        None => response::respond_not_found(request, root),
    }
}
