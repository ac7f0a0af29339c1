use chrono_tz::Tz;

use nudge_models::reminder::Reminder;

pub fn email_subject(reminder: &Reminder) -> String {
    format!("🔔 Reminder: {}", reminder.title)
}

/// HTML body for the email channel. The scheduled instant is rendered in the
/// operating timezone; everything else about the reminder stays in UTC.
pub fn email_html(reminder: &Reminder, timezone: Tz) -> String {
    let local_time = reminder.scheduled_time.with_timezone(&timezone);
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background: #4f46e5; padding: 20px; border-radius: 10px 10px 0 0;">
    <h1 style="color: white; margin: 0;">🔔 Nudge</h1>
  </div>
  <div style="background: #f9f9f9; padding: 20px; border-radius: 0 0 10px 10px;">
    <h2 style="color: #333;">{title}</h2>
    <p style="color: #666; font-size: 16px; line-height: 1.6;">{message}</p>
    <hr style="border: none; border-top: 1px solid #ddd; margin: 20px 0;">
    <p style="color: #999; font-size: 12px;">This reminder was scheduled for {scheduled}</p>
  </div>
</div>"#,
        title = reminder.title,
        message = reminder.message,
        scheduled = local_time.format("%d %B %Y, %H:%M %Z"),
    )
}

pub fn sms_text(reminder: &Reminder) -> String {
    format!("🔔 Nudge: {}\n\n{}", reminder.title, reminder.message)
}
