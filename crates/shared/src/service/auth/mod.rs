mod identity;
mod login;
mod register;

use self::identity::IdentityService;
use self::login::LoginService;
use self::register::RegisterService;
use crate::abstract_trait::{
    DynHashing, DynIdentityService, DynJwtService, DynLoginService, DynRegisterService,
    DynUserCommandRepository, DynUserQueryRepository,
};
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AuthService {
    pub identity: DynIdentityService,
    pub login: DynLoginService,
    pub register: DynRegisterService,
}

#[derive(Clone)]
pub struct AuthServiceDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub user_query: DynUserQueryRepository,
    pub user_command: DynUserCommandRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl AuthService {
    pub async fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            hash,
            jwt,
            user_query,
            user_command,
            registry,
        } = deps;

        let identity = Arc::new(
            IdentityService::new(jwt.clone(), user_query.clone(), registry.clone()).await,
        ) as DynIdentityService;

        let login = Arc::new(
            LoginService::new(hash.clone(), jwt, user_query.clone(), registry.clone()).await,
        ) as DynLoginService;

        let register =
            Arc::new(RegisterService::new(hash, user_query, user_command, registry).await)
                as DynRegisterService;

        Self {
            identity,
            login,
            register,
        }
    }
}
