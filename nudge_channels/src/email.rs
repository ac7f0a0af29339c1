use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, SinglePart},
    transport::smtp::authentication::Credentials,
};

use nudge_models::settings::EmailSettings;

/// Hands a message to the mail transport. The outcome is a plain success
/// flag; transport errors are logged here and never reach the caller.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> bool;
}

pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailSender {
    pub fn new(settings: &EmailSettings) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();
        let from = settings.from.parse::<Mailbox>()?;

        Ok(Self { transport, from })
    }

    async fn try_send(&self, to: &str, subject: &str, html_body: &str) -> anyhow::Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(subject)
            .singlepart(SinglePart::html(html_body.to_string()))?;

        let response = self.transport.send(message).await?;
        log::info!("email accepted by relay [to = {to}, code = {}]", response.code());

        Ok(())
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> bool {
        match self.try_send(to, subject, html_body).await {
            Ok(()) => true,
            Err(error) => {
                log::error!("email delivery failed [to = {to}, error = {error:#}]");
                false
            }
        }
    }
}
