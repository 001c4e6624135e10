use std::sync::Arc;

use crate::notification::application::ports::incoming::use_cases::{
    ListNotificationsUseCase, MarkAllReadUseCase,
};

#[derive(Clone)]
pub struct NotificationUseCases {
    pub list: Arc<dyn ListNotificationsUseCase + Send + Sync>,
    pub mark_all_read: Arc<dyn MarkAllReadUseCase + Send + Sync>,
}
