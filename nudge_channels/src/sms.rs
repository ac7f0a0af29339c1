use async_trait::async_trait;

use nudge_models::settings::SmsSettings;

/// Hands a text to the SMS transport. Same contract as [`crate::EmailSender`]:
/// a success flag, transport diagnostics stay in the log.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send(&self, to: &str, text: &str) -> bool;
}

/// Twilio Messages API adapter. Built without credentials it reports failure
/// for every send instead of attempting a network call.
pub struct TwilioSmsSender {
    settings: Option<SmsSettings>,
    client: reqwest::Client,
}

impl TwilioSmsSender {
    pub fn new(settings: Option<SmsSettings>) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }

    async fn try_send(&self, settings: &SmsSettings, to: &str, text: &str) -> anyhow::Result<()> {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            settings.account_sid
        );
        let params = [
            ("To", to),
            ("From", settings.from_number.as_str()),
            ("Body", text),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&settings.account_sid, Some(&settings.auth_token))
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("twilio send failed ({status}): {body}");
        }

        Ok(())
    }
}

#[async_trait]
impl SmsSender for TwilioSmsSender {
    async fn send(&self, to: &str, text: &str) -> bool {
        let Some(settings) = &self.settings else {
            log::warn!("sms transport not configured, skipping send [to = {to}]");
            return false;
        };

        match self.try_send(settings, to, text).await {
            Ok(()) => {
                log::info!("sms sent [to = {to}]");
                true
            }
            Err(error) => {
                log::error!("sms delivery failed [to = {to}, error = {error:#}]");
                false
            }
        }
    }
}
