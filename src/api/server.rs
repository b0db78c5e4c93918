//! HTTP server implementation

use std::sync::Arc;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::AppConfig;
use crate::rag::ChatService;
use crate::Result;

/// Start the API server
pub async fn serve_api(config: &AppConfig, host: String, port: u16, enable_cors: bool) -> Result<()> {
    info!("🚀 Starting ragchat API server...");

    // Initialize the pipeline once; requests share nothing but the service
    let chat_service = Arc::new(ChatService::new(config)?);
    let state = AppState { chat_service };

    let api_router = routes::api_routes(state.clone());
    let compat_router = routes::compat_routes(state);

    let mut app = Router::new()
        .nest("/api", api_router)
        .merge(compat_router);

    // Add middleware layers
    app = app
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    // Add CORS if enabled
    if enable_cors {
        info!("✅ CORS enabled");
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 API server listening on http://{}", addr);
    info!("");
    info!("Available endpoints:");
    info!("  GET  /api/health  - Health check");
    info!("  POST /api/chat    - Retrieval-augmented chat");
    info!("  POST /chat        - Alias for /api/chat");

    axum::serve(listener, app).await?;

    Ok(())
}
