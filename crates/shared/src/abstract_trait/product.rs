use crate::{
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{
            ApiResponse, DeletedProductResponse, Principal, ProductFormResponse,
            ProductListResponse, ProductResponse,
        },
    },
    errors::{RepositoryError, ServiceError},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError>;
    /// Case-insensitive name lookup, optionally excluding one row (the
    /// record currently being edited).
    async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<ProductModel>, RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    async fn delete_product(&self, id: i32) -> Result<ProductModel, RepositoryError>;
}

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(
        &self,
        principal: Option<&Principal>,
    ) -> Result<ApiResponse<ProductListResponse>, ServiceError>;
    async fn new_form(
        &self,
        principal: Option<&Principal>,
    ) -> Result<ApiResponse<ProductFormResponse>, ServiceError>;
    async fn find_for_edit(
        &self,
        principal: Option<&Principal>,
        id: i32,
    ) -> Result<ApiResponse<ProductFormResponse>, ServiceError>;
    async fn find_for_delete(
        &self,
        principal: Option<&Principal>,
        id: i32,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn count_products(&self) -> Result<i64, ServiceError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        principal: Option<&Principal>,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn update_product(
        &self,
        principal: Option<&Principal>,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn delete_product(
        &self,
        principal: Option<&Principal>,
        id: i32,
    ) -> Result<ApiResponse<DeletedProductResponse>, ServiceError>;
}
