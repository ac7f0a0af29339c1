use nudge_models::reminder::Reminder;
use nudge_storage::{NewReminder, ReminderStorage, UserDirectory};

/// Creation entry point for the user-facing CRUD surface. Validates the
/// request, backfills recipients the caller left out from the owner's
/// profile, and inserts the reminder as pending. Recipients are fixed from
/// here on; later profile edits do not affect existing reminders.
pub async fn create_reminder(
    store: &dyn ReminderStorage,
    users: &dyn UserDirectory,
    request: NewReminder,
) -> anyhow::Result<Reminder> {
    anyhow::ensure!(
        !request.title.trim().is_empty(),
        "reminder title must not be empty"
    );
    anyhow::ensure!(
        !request.message.trim().is_empty(),
        "reminder message must not be empty"
    );

    let owner = users.get(request.user_id).await?.ok_or_else(|| {
        anyhow::anyhow!("reminder owner does not exist [user_id = {}]", request.user_id)
    })?;

    store.insert(request.with_default_contacts(&owner)).await
}
