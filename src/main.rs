use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use yokatlas_mcp::http;
use yokatlas_mcp::mcp::{
    dto::McpResponse,
    handler,
};
use yokatlas_mcp::{logging, YokatlasConfig, YokatlasServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env for local dev (if present)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let config = YokatlasConfig::from_env().context("failed to load configuration")?;
    let _log_guard = logging::init(&config).context("failed to initialize logging")?;

    if dotenv_loaded {
        tracing::info!("Loaded .env");
    }
    tracing::info!("Starting YOKATLAS MCP Server");
    tracing::info!(
        "Configuration loaded: transport={}, port={}, helper={} {}",
        config.server.transport,
        config.server.port,
        config.helper.interpreter,
        config.helper.script_path.display()
    );
    if !config.helper.script_path.is_file() {
        tracing::warn!(
            "Python helper not found at {}; tool calls will fail until it is installed",
            config.helper.script_path.display()
        );
    }

    let server = YokatlasServer::new(config.clone()).context("failed to build server")?;

    let tools = server.get_tools();
    tracing::info!("Available tools: {}", tools.len());
    for tool in &tools {
        tracing::info!("  - {}: {}", tool.name, tool.description);
    }

    match config.server.transport.to_lowercase().as_str() {
        "http" => {
            tracing::info!(
                "YOKATLAS MCP Server running with HTTP transport on port {}",
                config.server.port
            );
            http::run_http_server(server, config.server.port).await
        }
        _ => {
            tracing::info!("YOKATLAS MCP Server running with stdio transport");
            serve_stdio(Arc::new(server)).await?;
            tracing::info!("YOKATLAS MCP Server shutting down");
            Ok(())
        }
    }
}

/// Each request runs on its own task so a slow helper call does not hold up
/// the others; a single writer keeps response lines whole.
async fn serve_stdio(server: Arc<YokatlasServer>) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let writer = tokio::spawn(async move {
        let mut stdout = io::stdout();
        while let Some(response_json) = rx.recv().await {
            tracing::debug!("Sending: {}", response_json);
            stdout.write_all(response_json.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
        Ok::<_, std::io::Error>(())
    });

    let mut reader = BufReader::new(io::stdin());
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => break, // EOF
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                tracing::debug!("Received: {}", line);

                match handler::decode_request(line) {
                    Ok(request) => {
                        let server = Arc::clone(&server);
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            if let Some(response) = handler::handle_request(&server, request).await {
                                send(&tx, &response);
                            }
                        });
                    }
                    Err(rejection) => {
                        tracing::error!("Rejected request frame: {:?}", rejection.error);
                        send(&tx, &rejection);
                    }
                }
            }
            Err(e) => {
                tracing::error!("Error reading from stdin: {}", e);
                break;
            }
        }
    }

    // In-flight calls hold their own senders; the writer drains until the last one finishes.
    drop(tx);
    writer.await.context("stdout writer task panicked")??;
    Ok(())
}

fn send(tx: &mpsc::UnboundedSender<String>, response: &McpResponse) {
    match serde_json::to_string(response) {
        Ok(json) => {
            if tx.send(json).is_err() {
                tracing::error!("stdout writer closed; dropping response");
            }
        }
        Err(e) => tracing::error!("Failed to encode response: {}", e),
    }
}
