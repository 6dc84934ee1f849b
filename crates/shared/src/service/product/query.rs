use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::responses::{
        ApiResponse, Principal, ProductFormResponse, ProductListResponse, ProductResponse,
    },
    errors::{RepositoryError, ServiceError},
    service::access::{self, ProductPermission},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        principal: Option<&Principal>,
    ) -> Result<ApiResponse<ProductListResponse>, ServiceError> {
        let principal = access::require(principal, ProductPermission::View)?;

        info!("🔍 Listing products for {}", principal.username);

        let products = self.query.find_all().await.map_err(|err| {
            error!("❌ Failed to list products: {err:?}");
            ServiceError::Repo(err)
        })?;

        let response = ProductListResponse {
            products: products.into_iter().map(ProductResponse::from).collect(),
            can_add: access::has_permission(principal, ProductPermission::Add),
            can_change: access::has_permission(principal, ProductPermission::Change),
            can_delete: access::can_delete_products(principal),
        };

        Ok(ApiResponse::success(
            "Products fetched successfully",
            response,
        ))
    }

    async fn new_form(
        &self,
        principal: Option<&Principal>,
    ) -> Result<ApiResponse<ProductFormResponse>, ServiceError> {
        access::require(principal, ProductPermission::Add)?;

        Ok(ApiResponse::success(
            "Provide the details of the new product",
            ProductFormResponse {
                action: "create".to_string(),
                product: None,
            },
        ))
    }

    async fn find_for_edit(
        &self,
        principal: Option<&Principal>,
        id: i32,
    ) -> Result<ApiResponse<ProductFormResponse>, ServiceError> {
        access::require(principal, ProductPermission::Change)?;

        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(ApiResponse::success(
            format!("Editing product \"{}\"", product.name),
            ProductFormResponse {
                action: "update".to_string(),
                product: Some(ProductResponse::from(product)),
            },
        ))
    }

    async fn find_for_delete(
        &self,
        principal: Option<&Principal>,
        id: i32,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        access::require_delete(principal)?;

        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(ApiResponse::success(
            format!("Confirm deletion of \"{}\"", product.name),
            ProductResponse::from(product),
        ))
    }

    async fn count_products(&self) -> Result<i64, ServiceError> {
        let count = self.query.count().await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::ProductCommandServiceTrait;
    use crate::domain::requests::CreateProductRequest;
    use crate::service::ProductCommandService;
    use crate::service::test_support::{InMemoryProducts, principal_with, product_request};
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn service_pair() -> (ProductQueryService, ProductCommandService) {
        let store = Arc::new(InMemoryProducts::new());
        (
            ProductQueryService::new(store.clone()),
            ProductCommandService::new(store.clone(), store),
        )
    }

    #[tokio::test]
    async fn created_product_round_trips_through_list_newest_first() {
        let (query, command) = service_pair();
        let creator = principal_with(&["add_product", "view_product"], &[], false);

        command
            .create_product(Some(&creator), &product_request("Older", "1.00", 1))
            .await
            .unwrap();
        command
            .create_product(
                Some(&creator),
                &CreateProductRequest {
                    name: "Widget".to_string(),
                    description: "A widget".to_string(),
                    price: Decimal::new(999, 2),
                    stock: 5,
                },
            )
            .await
            .unwrap();

        let listing = query.find_all(Some(&creator)).await.unwrap().data;

        let first = &listing.products[0];
        assert_eq!(first.name, "Widget");
        assert_eq!(first.price, Decimal::new(999, 2));
        assert_eq!(first.stock, 5);
        assert_eq!(first.description, "A widget");
        assert_eq!(listing.products.len(), 2);
    }

    #[tokio::test]
    async fn list_reports_the_callers_capabilities() {
        let (query, command) = service_pair();
        let creator = principal_with(&["add_product", "view_product"], &[], false);

        command
            .create_product(Some(&creator), &product_request("Widget", "9.99", 5))
            .await
            .unwrap();

        let listing = query.find_all(Some(&creator)).await.unwrap().data;
        assert!(listing.can_add);
        assert!(!listing.can_change);
        assert!(!listing.can_delete);

        let admin = principal_with(&["view_product"], &["Administrators"], false);
        let listing = query.find_all(Some(&admin)).await.unwrap().data;
        assert!(!listing.can_add);
        assert!(listing.can_delete);
    }

    #[tokio::test]
    async fn view_permission_is_required_to_list() {
        let (query, _) = service_pair();
        let stranger = principal_with(&["add_product"], &[], false);

        assert!(matches!(
            query.find_all(Some(&stranger)).await,
            Err(ServiceError::Forbidden(_))
        ));
        assert!(matches!(
            query.find_all(None).await,
            Err(ServiceError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn edit_form_of_missing_product_is_not_found() {
        let (query, _) = service_pair();
        let editor = principal_with(&["change_product"], &[], false);

        assert!(matches!(
            query.find_for_edit(Some(&editor), 9999).await,
            Err(ServiceError::Repo(RepositoryError::NotFound))
        ));
    }
}
