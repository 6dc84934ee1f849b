use crate::{
    abstract_trait::{
        DynGroupQueryRepository, DynHashing, DynIdentityService, DynJwtService, DynLoginService,
        DynProductCommandService, DynProductQueryService, DynRegisterService,
    },
    config::ConnectionPool,
    repository::{GroupRepository, ProductRepository, UserRepository},
    service::{
        IdentityService, LoginService, ProductCommandService, ProductQueryService,
        RegisterService, RegisterServiceDeps,
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub identity_service: DynIdentityService,
    pub register_service: DynRegisterService,
    pub login_service: DynLoginService,
    pub product_query_service: DynProductQueryService,
    pub product_command_service: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("identity_service", &"<IdentityService>")
            .field("register_service", &"<RegisterService>")
            .field("login_service", &"<LoginService>")
            .field("product_query_service", &"<ProductQueryService>")
            .field("product_command_service", &"<ProductCommandService>")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hash: DynHashing, jwt_config: DynJwtService) -> Self {
        let user_repository = UserRepository::new(pool.clone());
        let product_repository = ProductRepository::new(pool.clone());
        let group_repository =
            Arc::new(GroupRepository::new(pool.clone())) as DynGroupQueryRepository;

        let identity_service =
            Arc::new(IdentityService::new(user_repository.query.clone())) as DynIdentityService;

        let register_service = Arc::new(RegisterService::new(RegisterServiceDeps {
            query: user_repository.query.clone(),
            command: user_repository.command.clone(),
            groups: group_repository.clone(),
            hash: hash.clone(),
            jwt: jwt_config.clone(),
        })) as DynRegisterService;

        let login_service = Arc::new(LoginService::new(
            user_repository.query.clone(),
            hash,
            jwt_config,
        )) as DynLoginService;

        let product_query_service =
            Arc::new(ProductQueryService::new(product_repository.query.clone()))
                as DynProductQueryService;

        let product_command_service = Arc::new(ProductCommandService::new(
            product_repository.query.clone(),
            product_repository.command.clone(),
        )) as DynProductCommandService;

        Self {
            identity_service,
            register_service,
            login_service,
            product_query_service,
            product_command_service,
        }
    }
}
