//! HTTP server rendering works pages on request

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::Error;
use crate::Works;

/// Generic error page; details only go to the log
const ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Internal Server Error</title></head>
<body><h1>500 Internal Server Error</h1></body>
</html>
"#;

/// Server state
struct ServerState {
    works: Works,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response()
    }
}

/// Build the router: works pages plus static files from the static dir
pub fn router(works: &Works) -> Router {
    let route = works.config.route();
    let static_files = ServeDir::new(&works.static_dir).append_index_html_on_directories(true);

    let state = Arc::new(ServerState {
        works: works.clone(),
    });

    Router::new()
        .route(&route, get(works_handler))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(works: &Works, ip: &str, port: u16) -> Result<()> {
    let app = router(works);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    if let Err(e) = works.config.endpoint() {
        tracing::warn!("{}; every works request will fail", e);
    }

    println!("Server running at http://{}:{}", ip, port);
    println!("Works pages at {}", works.config.route());
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Fetch, transform and render one works entry
async fn works_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, Error> {
    tracing::debug!("Rendering works entry {}", id);

    match state.works.render_page(&id).await {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Failed to render works entry {}: {}", id, e);
            Err(e)
        }
    }
}
