#![recursion_limit = "256"]

mod llm;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use llm::LlmGenerate;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real environments set variables directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize LLM client (non-fatal: the catalog endpoint answers 503 without it).
    let llm: Option<Arc<dyn LlmGenerate>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured, catalog generation disabled");
            None
        }
    };

    let state = state::AppState::new(
        llm,
        rate_limit::RateLimiter::from_env(),
        services::catalog::CatalogSettings::from_env(),
    );

    let app = match routes::app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "storefront UI unavailable, serving API routes only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "storefront listening");
    axum::serve(listener, app).await.expect("server failed");
}
