mod reminder_storage;
mod user_directory;

pub use reminder_storage::{SqliteReminderError, SqliteReminderStorage};
pub use user_directory::SqliteUserDirectory;
