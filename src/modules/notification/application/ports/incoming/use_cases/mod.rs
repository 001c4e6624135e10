mod list_notifications;
mod mark_all_read;

pub use list_notifications::*;
pub use mark_all_read::*;
