use axum::{Extension, Json, http::StatusCode, response::IntoResponse};
use shared::{
    abstract_trait::DynProductQueryService,
    domain::responses::{ApiResponse, IndexResponse, Principal},
    errors::HttpError,
};

#[utoipa::path(
    get,
    path = "/",
    tag = "Index",
    responses(
        (status = 200, description = "Landing payload; authenticated callers also see their groups and the catalog size", body = ApiResponse<IndexResponse>)
    )
)]
pub async fn index_handler(
    Extension(service): Extension<DynProductQueryService>,
    Extension(principal): Extension<Option<Principal>>,
) -> Result<impl IntoResponse, HttpError> {
    let response = match principal {
        Some(principal) => {
            let product_count = service.count_products().await?;
            IndexResponse {
                authenticated: true,
                username: Some(principal.username),
                groups: principal.groups,
                product_count: Some(product_count),
            }
        }
        None => IndexResponse {
            authenticated: false,
            username: None,
            groups: Vec::new(),
            product_count: None,
        },
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Inventory manager", response)),
    ))
}
