// file: src/web/server.rs
// description: http server bootstrap

use crate::web::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Web server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(crate::web::routes::create_routes(state))
        .layer(TraceLayer::new_for_http())
}
