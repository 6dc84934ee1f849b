use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, ProductCommandServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, DeletedProductResponse, Principal, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    service::access::{self, ProductPermission},
    service::validation,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{error, info};

pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(query: DynProductQueryRepository, command: DynProductCommandRepository) -> Self {
        Self { query, command }
    }

    /// Runs every field check and returns the sanitized name, or the full
    /// batch of violations. The duplicate lookup here is a fast path for a
    /// friendly message; the storage-level unique index has the last word.
    async fn validate(
        &self,
        raw_name: &str,
        price: Decimal,
        stock: i32,
        exclude_id: Option<i32>,
    ) -> Result<String, ServiceError> {
        let mut errors = Vec::new();

        let name = raw_name.trim().to_string();
        if name.is_empty() {
            errors.push(validation::empty_name());
        } else if self.query.find_by_name(&name, exclude_id).await?.is_some() {
            errors.push(validation::duplicate_name(&name));
        }

        if let Some(err) = validation::check_price(price) {
            errors.push(err);
        }
        if let Some(err) = validation::check_stock(stock) {
            errors.push(err);
        }

        if errors.is_empty() {
            Ok(name)
        } else {
            Err(ServiceError::Validation(errors))
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        principal: Option<&Principal>,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        access::require(principal, ProductPermission::Add)?;

        info!("🏗️ Creating new product: {}", req.name);

        let name = self.validate(&req.name, req.price, req.stock, None).await?;

        let sanitized = CreateProductRequest {
            name: name.clone(),
            description: req.description.clone(),
            price: req.price,
            stock: req.stock,
        };

        let product_model = match self.command.create_product(&sanitized).await {
            Ok(product) => product,
            Err(RepositoryError::AlreadyExists(_)) => {
                // A concurrent writer won the name; report it as the same
                // field error the pre-check would have produced.
                return Err(ServiceError::Validation(vec![validation::duplicate_name(
                    &name,
                )]));
            }
            Err(err) => {
                error!("❌ Failed to create product: {err:?}");
                return Err(ServiceError::Repo(err));
            }
        };

        let response = ProductResponse::from(product_model);

        info!(
            "✅ Product created successfully: {} (ID: {})",
            response.name, response.id,
        );

        Ok(ApiResponse::success(
            format!("Product \"{}\" created successfully", response.name),
            response,
        ))
    }

    async fn update_product(
        &self,
        principal: Option<&Principal>,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        access::require(principal, ProductPermission::Change)?;

        let id = req.id.ok_or(RepositoryError::NotFound)?;

        info!("✏️ Updating product with ID: {id}");

        self.query
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let name = self
            .validate(&req.name, req.price, req.stock, Some(id))
            .await?;

        let sanitized = UpdateProductRequest {
            id: Some(id),
            name: name.clone(),
            description: req.description.clone(),
            price: req.price,
            stock: req.stock,
        };

        let product_model = match self.command.update_product(&sanitized).await {
            Ok(product) => product,
            Err(RepositoryError::AlreadyExists(_)) => {
                return Err(ServiceError::Validation(vec![validation::duplicate_name(
                    &name,
                )]));
            }
            Err(err) => {
                error!("❌ Failed to update product ID {id}: {err:?}");
                return Err(ServiceError::Repo(err));
            }
        };

        let response = ProductResponse::from(product_model);

        info!(
            "✅ Product updated successfully: {} (ID: {})",
            response.name, response.id,
        );

        Ok(ApiResponse::success(
            format!("Product \"{}\" updated successfully", response.name),
            response,
        ))
    }

    async fn delete_product(
        &self,
        principal: Option<&Principal>,
        id: i32,
    ) -> Result<ApiResponse<DeletedProductResponse>, ServiceError> {
        access::require_delete(principal)?;

        info!("🗑️ Deleting product with ID: {id}");

        let deleted = self.command.delete_product(id).await.map_err(|err| {
            if !matches!(err, RepositoryError::NotFound) {
                error!("❌ Failed to delete product ID {id}: {err:?}");
            }
            ServiceError::Repo(err)
        })?;

        info!("✅ Product deleted: {} (ID: {})", deleted.name, id);

        Ok(ApiResponse::success(
            format!("Product \"{}\" deleted successfully", deleted.name),
            DeletedProductResponse {
                id: deleted.product_id,
                name: deleted.name,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{FieldErrorCode, RepositoryError};
    use crate::service::test_support::{InMemoryProducts, principal_with, product_request};
    use rstest::rstest;
    use std::sync::Arc;

    fn service_with_store() -> (ProductCommandService, Arc<InMemoryProducts>) {
        let store = Arc::new(InMemoryProducts::new());
        (
            ProductCommandService::new(store.clone(), store.clone()),
            store,
        )
    }

    fn codes(err: ServiceError) -> Vec<FieldErrorCode> {
        match err {
            ServiceError::Validation(errors) => errors.into_iter().map(|e| e.code).collect(),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected_regardless_of_case() {
        let (service, store) = service_with_store();
        let editor = principal_with(&["add_product", "change_product"], &[], false);

        service
            .create_product(Some(&editor), &product_request("Widget", "9.99", 5))
            .await
            .unwrap();

        let err = service
            .create_product(Some(&editor), &product_request("wIDGET", "1.00", 1))
            .await
            .unwrap_err();

        assert_eq!(codes(err), vec![FieldErrorCode::DuplicateName]);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn update_excludes_its_own_row_from_the_uniqueness_check() {
        let (service, _store) = service_with_store();
        let editor = principal_with(&["add_product", "change_product"], &[], false);

        let created = service
            .create_product(Some(&editor), &product_request("Widget", "9.99", 5))
            .await
            .unwrap()
            .data;

        let mut update = UpdateProductRequest {
            id: Some(created.id),
            name: "Widget".to_string(),
            description: "restocked".to_string(),
            price: Decimal::new(1299, 2),
            stock: 7,
        };

        let updated = service
            .update_product(Some(&editor), &update)
            .await
            .unwrap()
            .data;
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.stock, 7);

        // Renaming onto another record's name still fails.
        service
            .create_product(Some(&editor), &product_request("Gadget", "2.00", 2))
            .await
            .unwrap();
        update.name = "gadget".to_string();

        let err = service.update_product(Some(&editor), &update).await.unwrap_err();
        assert_eq!(codes(err), vec![FieldErrorCode::DuplicateName]);
    }

    #[rstest]
    #[case("0", FieldErrorCode::NonPositiveValue)]
    #[case("-5.00", FieldErrorCode::NonPositiveValue)]
    #[tokio::test]
    async fn non_positive_prices_fail(#[case] price: &str, #[case] expected: FieldErrorCode) {
        let (service, store) = service_with_store();
        let editor = principal_with(&["add_product"], &[], false);

        let err = service
            .create_product(Some(&editor), &product_request("Widget", price, 5))
            .await
            .unwrap_err();

        assert_eq!(codes(err), vec![expected]);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn one_cent_price_and_zero_stock_are_accepted() {
        let (service, _store) = service_with_store();
        let editor = principal_with(&["add_product"], &[], false);

        let created = service
            .create_product(Some(&editor), &product_request("Widget", "0.01", 0))
            .await
            .unwrap()
            .data;

        assert_eq!(created.price, Decimal::new(1, 2));
        assert_eq!(created.stock, 0);
    }

    #[tokio::test]
    async fn every_violated_field_is_reported_together() {
        let (service, store) = service_with_store();
        let editor = principal_with(&["add_product"], &[], false);

        let err = service
            .create_product(Some(&editor), &product_request("   ", "0", -1))
            .await
            .unwrap_err();

        let codes = codes(err);
        assert_eq!(codes.len(), 3);
        assert!(codes.contains(&FieldErrorCode::EmptyField));
        assert!(codes.contains(&FieldErrorCode::NonPositiveValue));
        assert!(codes.contains(&FieldErrorCode::NegativeValue));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn submitted_name_is_trimmed_before_persisting() {
        let (service, _store) = service_with_store();
        let editor = principal_with(&["add_product"], &[], false);

        let created = service
            .create_product(Some(&editor), &product_request("  Widget  ", "9.99", 5))
            .await
            .unwrap()
            .data;

        assert_eq!(created.name, "Widget");
    }

    #[tokio::test]
    async fn add_without_permission_is_refused_before_validation() {
        let (service, store) = service_with_store();
        let viewer = principal_with(&["view_product"], &[], false);

        // The submission is also invalid; the permission failure must win.
        let err = service
            .create_product(Some(&viewer), &product_request("", "0", -1))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Forbidden(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn delete_requires_the_elevated_rule() {
        let (service, store) = service_with_store();
        let superuser = principal_with(&[], &[], true);
        let admin = principal_with(&[], &["Administrators"], false);
        let grant_holder = principal_with(&["delete_product"], &[], false);

        let created = service
            .create_product(Some(&superuser), &product_request("Widget", "9.99", 5))
            .await
            .unwrap()
            .data;

        let err = service
            .delete_product(Some(&grant_holder), created.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
        assert_eq!(store.len(), 1);

        let deleted = service
            .delete_product(Some(&admin), created.id)
            .await
            .unwrap()
            .data;
        assert_eq!(deleted.name, "Widget");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn deleting_a_missing_product_is_not_found() {
        let (service, store) = service_with_store();
        let superuser = principal_with(&[], &[], true);

        let err = service
            .delete_product(Some(&superuser), 9999)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn updating_a_missing_product_is_not_found() {
        let (service, _store) = service_with_store();
        let editor = principal_with(&["change_product"], &[], false);

        let update = UpdateProductRequest {
            id: Some(9999),
            name: "Widget".to_string(),
            description: String::new(),
            price: Decimal::new(999, 2),
            stock: 5,
        };

        assert!(matches!(
            service.update_product(Some(&editor), &update).await,
            Err(ServiceError::Repo(RepositoryError::NotFound))
        ));
    }
}
