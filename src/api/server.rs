use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::middleware;
use axum::{Router, extract::Request, response::Response};
use http::{HeaderValue, header};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::ai::prompt::render_system_prompt;
use crate::api::state::{AppState, SharedState};
use crate::core::{AppConfig, init_tracing};
use crate::openai::{OpenAiGateway, SharedGateway};

async fn set_static_cache_control(request: Request, next: middleware::Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    response
}

/// How often idle sessions are looked for
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// End sessions that have been idle for longer than `ttl`. Runs for
/// the life of the process in its own tokio task.
pub fn spawn_session_sweep(shared_state: SharedState, ttl: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let evicted = shared_state
                .write()
                .expect("Unable to write shared state")
                .sessions
                .evict_idle(Instant::now(), ttl);
            if evicted > 0 {
                tracing::debug!("Ended {} idle chat sessions", evicted);
            }
        }
    });
}

pub fn app(shared_state: SharedState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        // API routes
        .nest("/api", routes::router())
        // Static server of the chat UI in ./web-ui
        .fallback_service(
            ServiceBuilder::new()
                .layer(middleware::from_fn(set_static_cache_control))
                .service(ServeDir::new("./web-ui/src")),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::clone(&shared_state))
}

// Run the server
pub async fn serve(host: String, port: String, config: AppConfig) -> Result<()> {
    // axum logs rejections from built-in extractors with the `axum::rejection`
    // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
    init_tracing(&format!(
        "{}=debug,tower_http=debug,axum::rejection=trace",
        env!("CARGO_CRATE_NAME")
    ));

    let system_prompt = render_system_prompt()?;
    let gateway: SharedGateway = Arc::new(OpenAiGateway::from_config(&config));
    tracing::info!(
        "Using model {} at {}",
        config.llm_model,
        config.llm_api_hostname
    );

    let app_state = AppState::new(gateway, &system_prompt);
    let shared_state = Arc::new(RwLock::new(app_state));
    spawn_session_sweep(Arc::clone(&shared_state), config.session_ttl);
    let app = app(Arc::clone(&shared_state));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;

    tracing::debug!("Server started. Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
