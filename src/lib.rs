use std::{future::Future, net::TcpListener};

use axum::{http::Method, routing::get, Router, Server};
use sqlx::PgPool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Public modules
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;

// Re-export commonly used types
pub use error::AppError;
pub use handlers::{create_wish, delete_wish, get_wish, list_wishes, update_wish};
pub use models::{Wish, WishPayload};
pub use repository::{GatewayError, WishRepo};

/// Shared handler state. All wish data lives in the database.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the application router: the wish routes, API docs, CORS and request
/// tracing.
pub fn create_app(pool: PgPool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let swagger_ui =
        SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", docs::ApiDoc::openapi());

    Router::new()
        .merge(swagger_ui)
        .route("/docs", get(docs::serve_docs))
        .route("/openapi.json", get(docs::serve_openapi))
        .route("/wishes", get(list_wishes).post(create_wish))
        .route(
            "/wishes/:id",
            get(get_wish).put(update_wish).delete(delete_wish),
        )
        .with_state(AppState { db_pool: pool })
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), hyper::Error>
where
    F: Future<Output = ()>,
{
    Server::from_tcp(listener)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
}
