// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Waypoint CLI entrypoint.
//!
//! By default this runs the interactive TUI and serves MCP over streamable HTTP at
//! `http://127.0.0.1:<port>/mcp`, both driving the same navigator.
//!
//! Use `--mcp` to run the MCP server over stdio instead (intended for tool integrations).

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use waypoint::mcp::WaypointMcp;
use waypoint::model::FloorPlan;
use waypoint::session::Navigator;

const DEFAULT_MCP_HTTP_PORT: u16 = 27436;
const LOG_ENV: &str = "WAYPOINT_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<plan.json>] [--mcp-http-port <port>]\n  {program} [--plan <plan.json>] [--mcp-http-port <port>]\n  {program} [<plan.json>] --mcp\n  {program} [--plan <plan.json>] --mcp\n\nTUI mode (default) serves MCP over streamable HTTP at `http://127.0.0.1:<port>/mcp`.\n--mcp-http-port selects the port (0 = ephemeral; default {DEFAULT_MCP_HTTP_PORT}).\n\nWithout a plan file the built-in second-floor plan is used.\nA plan file is JSON: {{\"name\": \"...\", \"adjacency\": {{\"201\": [\"213\", ...]}}}}.\n\nLogs go to stderr, filtered by {LOG_ENV} (default: off in TUI mode, info with --mcp)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    mcp: bool,
    plan_path: Option<String>,
    mcp_http_port: Option<u16>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mcp" => {
                if options.mcp {
                    return Err(());
                }
                options.mcp = true;
            }
            "--plan" => {
                if options.plan_path.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.plan_path = Some(path);
            }
            "--mcp-http-port" => {
                if options.mcp_http_port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.mcp_http_port = Some(port);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.plan_path.is_some() {
                    return Err(());
                }
                options.plan_path = Some(arg);
            }
        }
    }

    if options.mcp && options.mcp_http_port.is_some() {
        return Err(());
    }

    Ok(options)
}

/// stderr only: stdout carries the MCP stdio transport or the TUI.
fn init_tracing(default_filter: &str) {
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| default_filter.to_owned());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_navigator(plan_path: Option<&str>) -> Result<Navigator, Box<dyn Error>> {
    let plan = match plan_path {
        Some(path) => FloorPlan::load(path)?,
        None => FloorPlan::builtin(),
    };
    let navigator = Navigator::from_plan(&plan)?;
    tracing::info!(
        plan = navigator.graph().name(),
        nodes = navigator.graph().node_count(),
        edges = navigator.graph().edge_count(),
        "floor plan ready"
    );
    Ok(navigator)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "waypoint".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing(if options.mcp { "info" } else { "off" });
        let navigator = load_navigator(options.plan_path.as_deref())?;

        if options.mcp {
            let mcp = WaypointMcp::new(navigator);
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

            runtime.block_on(mcp.serve_stdio())?;
            return Ok(());
        }

        let navigator = Arc::new(Mutex::new(navigator));
        let mcp = WaypointMcp::with_shared_navigator(navigator.clone());
        let mcp_http_port = options.mcp_http_port.unwrap_or(DEFAULT_MCP_HTTP_PORT);

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", mcp_http_port)).await?;
            tracing::info!(addr = %listener.local_addr()?, "serving MCP over streamable HTTP");

            let config = StreamableHttpServerConfig {
                stateful_mode: true,
                ..StreamableHttpServerConfig::default()
            };
            let shutdown_token = config.cancellation_token.clone();
            let server_shutdown = shutdown_token.clone();

            let session_manager = Arc::new(LocalSessionManager::default());
            let mcp_service = {
                let mcp = mcp.clone();
                StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config)
            };

            let router = Router::new().nest_service("/mcp", mcp_service);
            let server_handle = tokio::spawn(async move {
                let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
                    server_shutdown.cancelled().await;
                });
                if let Err(err) = serve.await {
                    tracing::error!(error = %err, "MCP HTTP server error");
                }
            });

            let tui_join = tokio::task::spawn_blocking(move || {
                waypoint::tui::run(navigator).map_err(|err| err.to_string())
            })
            .await;

            shutdown_token.cancel();
            let _ = server_handle.await;

            let tui_result = tui_join.map_err(|err| -> Box<dyn Error> { Box::new(err) })?;
            tui_result.map_err(|err| {
                Box::new(std::io::Error::new(std::io::ErrorKind::Other, err)) as Box<dyn Error>
            })?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("waypoint: {err}");
        std::process::exit(1);
    }
}
