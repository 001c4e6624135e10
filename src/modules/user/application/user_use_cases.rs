use std::sync::Arc;

use crate::user::application::ports::incoming::use_cases::{
    GetCurrentUserUseCase, UpdateUserUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub get_current: Arc<dyn GetCurrentUserUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateUserUseCase + Send + Sync>,
}
