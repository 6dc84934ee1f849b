use crate::middleware::validate::ValidatedJson;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::{
    abstract_trait::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{
            ApiResponse, DeletedProductResponse, Principal, ProductFormResponse,
            ProductListResponse, ProductResponse,
        },
    },
    errors::{ErrorResponse, HttpError, ServiceError},
};

use super::validation_failure;

#[utoipa::path(
    get,
    path = "/products",
    tag = "Product",
    responses(
        (status = 200, description = "All products, newest first, with the caller's capabilities", body = ApiResponse<ProductListResponse>),
        (status = 403, description = "Permission denied", body = ErrorResponse)
    )
)]
pub async fn list_products_handler(
    Extension(service): Extension<DynProductQueryService>,
    Extension(principal): Extension<Option<Principal>>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(principal.as_ref()).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/products/new",
    tag = "Product",
    responses(
        (status = 200, description = "Blank creation form", body = ApiResponse<ProductFormResponse>),
        (status = 403, description = "Permission denied", body = ErrorResponse)
    )
)]
pub async fn new_product_page_handler(
    Extension(service): Extension<DynProductQueryService>,
    Extension(principal): Extension<Option<Principal>>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.new_form(principal.as_ref()).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/products/new",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation failed; every violated field is reported and the submission echoed"),
        (status = 403, description = "Permission denied", body = ErrorResponse)
    )
)]
pub async fn create_product_handler(
    Extension(service): Extension<DynProductCommandService>,
    Extension(principal): Extension<Option<Principal>>,
    ValidatedJson(body): ValidatedJson<CreateProductRequest>,
) -> Result<Response, HttpError> {
    match service.create_product(principal.as_ref(), &body).await {
        Ok(response) => Ok((StatusCode::CREATED, Json(response)).into_response()),
        Err(ServiceError::Validation(errors)) => Ok(validation_failure(errors, &body)),
        Err(err) => Err(err.into()),
    }
}

#[utoipa::path(
    get,
    path = "/products/{id}/edit",
    tag = "Product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Edit form with the current snapshot", body = ApiResponse<ProductFormResponse>),
        (status = 403, description = "Permission denied", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn edit_product_page_handler(
    Extension(service): Extension<DynProductQueryService>,
    Extension(principal): Extension<Option<Principal>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_for_edit(principal.as_ref(), id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/products/{id}/edit",
    tag = "Product",
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation failed; every violated field is reported and the submission echoed"),
        (status = 403, description = "Permission denied", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product_handler(
    Extension(service): Extension<DynProductCommandService>,
    Extension(principal): Extension<Option<Principal>>,
    Path(id): Path<i32>,
    ValidatedJson(mut body): ValidatedJson<UpdateProductRequest>,
) -> Result<Response, HttpError> {
    body.id = Some(id);

    match service.update_product(principal.as_ref(), &body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response)).into_response()),
        Err(ServiceError::Validation(errors)) => Ok(validation_failure(errors, &body)),
        Err(err) => Err(err.into()),
    }
}

#[utoipa::path(
    get,
    path = "/products/{id}/delete",
    tag = "Product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Deletion confirmation snapshot", body = ApiResponse<ProductResponse>),
        (status = 403, description = "Permission denied", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn delete_product_page_handler(
    Extension(service): Extension<DynProductQueryService>,
    Extension(principal): Extension<Option<Principal>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_for_delete(principal.as_ref(), id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/products/{id}/delete",
    tag = "Product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted; the former name is reported", body = ApiResponse<DeletedProductResponse>),
        (status = 403, description = "Permission denied", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn delete_product_handler(
    Extension(service): Extension<DynProductCommandService>,
    Extension(principal): Extension<Option<Principal>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_product(principal.as_ref(), id).await?;
    Ok((StatusCode::OK, Json(response)))
}
