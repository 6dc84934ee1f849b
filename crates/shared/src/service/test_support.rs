//! In-memory stand-ins for the sqlx repositories, used by the service
//! unit tests. The product store enforces the same case-insensitive name
//! uniqueness the database index provides.

use crate::{
    abstract_trait::{
        GroupQueryRepositoryTrait, ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
        UserCommandRepositoryTrait, UserQueryRepositoryTrait,
    },
    domain::{
        requests::{CreateProductRequest, CreateUserRequest, UpdateProductRequest},
        responses::Principal,
    },
    errors::RepositoryError,
    model::{Group, Product, User},
};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::{
    Mutex,
    atomic::{AtomicI32, Ordering},
};

pub(crate) fn principal_with(perms: &[&str], groups: &[&str], is_superuser: bool) -> Principal {
    Principal {
        user_id: 1,
        username: "tester".to_string(),
        is_superuser,
        groups: groups.iter().map(|g| g.to_string()).collect(),
        permissions: perms.iter().map(|p| p.to_string()).collect(),
    }
}

pub(crate) fn product_request(name: &str, price: &str, stock: i32) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        description: String::new(),
        price: Decimal::from_str(price).unwrap(),
        stock,
    }
}

fn timestamp_for(id: i32) -> NaiveDateTime {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    base + Duration::seconds(i64::from(id))
}

#[derive(Default)]
pub(crate) struct InMemoryProducts {
    items: Mutex<Vec<Product>>,
    next_id: AtomicI32,
}

impl InMemoryProducts {
    pub(crate) fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> bool {
        self.items
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name) && Some(p.product_id) != exclude_id)
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProducts {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut products = self.items.lock().unwrap().clone();
        products.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.product_id.cmp(&a.product_id))
        });
        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.product_id == id)
            .cloned())
    }

    async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name) && Some(p.product_id) != exclude_id)
            .cloned())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.len() as i64)
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProducts {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<Product, RepositoryError> {
        if self.name_taken(&req.name, None) {
            return Err(RepositoryError::AlreadyExists(req.name.clone()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product {
            product_id: id,
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            stock: req.stock,
            created_at: Some(timestamp_for(id)),
        };
        self.items.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let id = req.id.ok_or(RepositoryError::NotFound)?;

        if self.name_taken(&req.name, Some(id)) {
            return Err(RepositoryError::AlreadyExists(req.name.clone()));
        }

        let mut items = self.items.lock().unwrap();
        let product = items
            .iter_mut()
            .find(|p| p.product_id == id)
            .ok_or(RepositoryError::NotFound)?;

        product.name = req.name.clone();
        product.description = req.description.clone();
        product.price = req.price;
        product.stock = req.stock;
        Ok(product.clone())
    }

    async fn delete_product(&self, id: i32) -> Result<Product, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        let position = items
            .iter()
            .position(|p| p.product_id == id)
            .ok_or(RepositoryError::NotFound)?;
        Ok(items.remove(position))
    }
}

pub(crate) struct InMemoryDirectory {
    users: Mutex<Vec<User>>,
    groups: Vec<Group>,
    memberships: Mutex<Vec<(i32, i32)>>,
    grants: Mutex<Vec<(i32, String)>>,
    next_id: AtomicI32,
}

impl InMemoryDirectory {
    pub(crate) fn new(group_names: &[&str]) -> Self {
        let groups = group_names
            .iter()
            .enumerate()
            .map(|(idx, name)| Group {
                group_id: idx as i32 + 1,
                name: name.to_string(),
            })
            .collect();

        Self {
            users: Mutex::new(Vec::new()),
            groups,
            memberships: Mutex::new(Vec::new()),
            grants: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    pub(crate) fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub(crate) fn insert_user(&self, username: &str, email: &str, password_hash: &str) -> i32 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.users.lock().unwrap().push(User {
            user_id: id,
            username: username.to_string(),
            email: email.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            password: password_hash.to_string(),
            is_active: true,
            is_staff: false,
            is_superuser: false,
            created_at: Some(timestamp_for(id)),
        });
        id
    }

    pub(crate) fn deactivate(&self, user_id: i32) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.user_id == user_id) {
            user.is_active = false;
        }
    }

    pub(crate) fn grant(&self, user_id: i32, codename: &str) {
        self.grants
            .lock()
            .unwrap()
            .push((user_id, codename.to_string()));
    }

    pub(crate) fn join_group(&self, user_id: i32, group_name: &str) {
        let group_id = self
            .groups
            .iter()
            .find(|g| g.name == group_name)
            .map(|g| g.group_id)
            .unwrap();
        self.memberships.lock().unwrap().push((user_id, group_id));
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for InMemoryDirectory {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == id)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn group_names(&self, user_id: i32) -> Result<Vec<String>, RepositoryError> {
        let memberships = self.memberships.lock().unwrap();
        let mut names: Vec<String> = self
            .groups
            .iter()
            .filter(|g| memberships.contains(&(user_id, g.group_id)))
            .map(|g| g.name.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn effective_permissions(
        &self,
        user_id: i32,
    ) -> Result<HashSet<String>, RepositoryError> {
        Ok(self
            .grants
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| *id == user_id)
            .map(|(_, codename)| codename.clone())
            .collect())
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for InMemoryDirectory {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<User, RepositoryError> {
        {
            let users = self.users.lock().unwrap();
            if users
                .iter()
                .any(|u| u.username == req.username || u.email == req.email)
            {
                return Err(RepositoryError::AlreadyExists(req.username.clone()));
            }
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            user_id: id,
            username: req.username.clone(),
            email: req.email.clone(),
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            password: req.password.clone(),
            is_active: true,
            is_staff: false,
            is_superuser: false,
            created_at: Some(timestamp_for(id)),
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn add_to_group(&self, user_id: i32, group_id: i32) -> Result<(), RepositoryError> {
        self.memberships.lock().unwrap().push((user_id, group_id));
        Ok(())
    }
}

#[async_trait]
impl GroupQueryRepositoryTrait for InMemoryDirectory {
    async fn find_all(&self) -> Result<Vec<Group>, RepositoryError> {
        Ok(self.groups.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Group>, RepositoryError> {
        Ok(self.groups.iter().find(|g| g.name == name).cloned())
    }
}
