use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use jotbook_api::config::AppConfig;
use jotbook_api::database;
use jotbook_api::middleware::require_auth;
use jotbook_api::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!("Starting Jotbook API in {:?} mode", config.environment);

    let state = match AppState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("invalid database configuration: {}", e);
            std::process::exit(1);
        }
    };

    // An unreachable store at startup is logged, not fatal; the pool
    // reconnects per request once the database comes back.
    if let Err(e) = database::run_migrations(&state.pool).await {
        tracing::error!("database unavailable at startup, migrations skipped: {}", e);
    }

    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Jotbook API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes (token acquisition)
        .merge(auth_routes())
        // Everything behind the auth gate
        .merge(protected_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use axum::routing::post;
    use jotbook_api::handlers::auth;

    Router::new()
        .route("/api/auth/createuser", post(auth::create_user))
        .route("/api/auth/login", post(auth::login))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use axum::routing::{delete, post, put};
    use jotbook_api::handlers::{auth, notes};

    Router::new()
        .route("/api/auth/getuser", post(auth::get_user))
        .route("/api/notes/fetchallnotes", get(notes::fetch_all_notes))
        .route("/api/notes/addnote", post(notes::add_note))
        .route("/api/notes/updatenote/:id", put(notes::update_note))
        .route("/api/notes/deletenote/:id", delete(notes::delete_note))
        .route_layer(axum::middleware::from_fn_with_state(state, require_auth))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Jotbook API",
            "version": version,
            "description": "Token-authenticated per-user note storage built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "auth": "/api/auth/createuser, /api/auth/login (public), /api/auth/getuser (protected)",
                "notes": "/api/notes/* (protected, auth-token header required)",
            }
        }
    }))
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
