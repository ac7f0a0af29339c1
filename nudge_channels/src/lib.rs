mod email;
mod message;
mod sms;

pub use email::{EmailSender, SmtpEmailSender};
pub use message::{email_html, email_subject, sms_text};
pub use sms::{SmsSender, TwilioSmsSender};
