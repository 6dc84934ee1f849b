mod auth;
mod index;
mod product;

use crate::middleware::identity::identity_middleware;
use crate::state::AppState;
use anyhow::Result;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Extension, Json, middleware};
use serde::Serialize;
use serde_json::json;
use shared::errors::FieldError;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::{
    login_handler, login_page_handler, logout_handler, register_handler, register_page_handler,
};
pub use self::index::index_handler;
pub use self::product::{
    create_product_handler, delete_product_handler, delete_product_page_handler,
    edit_product_page_handler, list_products_handler, new_product_page_handler,
    update_product_handler,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        index::index_handler,

        auth::login_page_handler,
        auth::login_handler,
        auth::register_page_handler,
        auth::register_handler,
        auth::logout_handler,

        product::list_products_handler,
        product::new_product_page_handler,
        product::create_product_handler,
        product::edit_product_page_handler,
        product::update_product_handler,
        product::delete_product_page_handler,
        product::delete_product_handler,
    ),
    tags(
        (name = "Index", description = "Landing endpoint"),
        (name = "Auth", description = "Registration, login and logout"),
        (name = "Product", description = "Product catalog endpoints"),
    )
)]
struct ApiDoc;

/// 400 response carrying the complete batch of field errors together with
/// the submitted values, so the caller can re-display the form.
pub(crate) fn validation_failure<T: Serialize>(errors: Vec<FieldError>, values: &T) -> Response {
    let body = Json(json!({
        "status": "fail",
        "message": "Validation failed",
        "errors": errors,
        "values": values,
    }));

    (StatusCode::BAD_REQUEST, body).into_response()
}

pub fn index_routes() -> OpenApiRouter {
    OpenApiRouter::new().route("/", get(index_handler))
}

pub fn auth_routes() -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/login", get(login_page_handler).post(login_handler))
        .route(
            "/register",
            get(register_page_handler).post(register_handler),
        )
        .route("/logout", any(logout_handler))
}

pub fn product_routes() -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/products", get(list_products_handler))
        .route(
            "/products/new",
            get(new_product_page_handler).post(create_product_handler),
        )
        .route(
            "/products/{id}/edit",
            get(edit_product_page_handler).post(update_product_handler),
        )
        .route(
            "/products/{id}/delete",
            get(delete_product_page_handler).post(delete_product_handler),
        )
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(index_routes())
            .merge(auth_routes())
            .merge(product_routes())
            .layer(middleware::from_fn(identity_middleware))
            .layer(Extension(shared_state.jwt_config.clone()))
            .layer(Extension(shared_state.di_container.identity_service.clone()))
            .layer(Extension(shared_state.di_container.login_service.clone()))
            .layer(Extension(shared_state.di_container.register_service.clone()))
            .layer(Extension(
                shared_state.di_container.product_query_service.clone(),
            ))
            .layer(Extension(
                shared_state.di_container.product_command_service.clone(),
            ))
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(1024 * 1024));

        let (app_router, api) = api_router.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
