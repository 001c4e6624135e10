use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    AuthorizeUseCase, LoginUseCase, LogoutUseCase, SignupUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginUseCase + Send + Sync>,
    pub signup: Arc<dyn SignupUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutUseCase + Send + Sync>,
    pub authorize: Arc<dyn AuthorizeUseCase + Send + Sync>,
}
