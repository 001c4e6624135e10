mod list_notifications_service;
mod mark_all_read_service;

pub use list_notifications_service::ListNotificationsService;
pub use mark_all_read_service::MarkAllReadService;
