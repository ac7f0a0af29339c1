
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use nudge_channels::{EmailSender, SmsSender};
use nudge_models::reminder::{Recurrence, ReminderChannel};
use nudge_storage::{InMemoryReminderStorage, NewReminder, ReminderStorage};

use crate::{Clock, ReminderDispatcher};

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub type SentLog = Arc<Mutex<Vec<(String, String)>>>;

pub struct StubEmailSender {
    outcome: bool,
    sent: SentLog,
}

#[async_trait]
impl EmailSender for StubEmailSender {
    async fn send(&self, to: &str, subject: &str, _html_body: &str) -> bool {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string()));
        self.outcome
    }
}

pub struct StubSmsSender {
    outcome: bool,
    sent: SentLog,
}

#[async_trait]
impl SmsSender for StubSmsSender {
    async fn send(&self, to: &str, text: &str) -> bool {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), text.to_string()));
        self.outcome
    }
}

pub fn build_dispatcher(
    store: Arc<dyn ReminderStorage>,
    now: DateTime<Utc>,
    email_ok: bool,
    sms_ok: bool,
) -> (ReminderDispatcher, SentLog, SentLog) {
    let emails: SentLog = Arc::new(Mutex::new(Vec::new()));
    let texts: SentLog = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = ReminderDispatcher::new(
        store,
        Arc::new(StubEmailSender {
            outcome: email_ok,
            sent: emails.clone(),
        }),
        Arc::new(StubSmsSender {
            outcome: sms_ok,
            sent: texts.clone(),
        }),
        Arc::new(FixedClock(now)),
        Tz::UTC,
        TimeDelta::seconds(60),
    );

    (dispatcher, emails, texts)
}

pub struct TestContext {
    pub store: Arc<InMemoryReminderStorage>,
    pub now: DateTime<Utc>,
    pub dispatcher: ReminderDispatcher,
    pub emails: SentLog,
    pub texts: SentLog,
}

impl TestContext {
    pub fn new(email_ok: bool, sms_ok: bool) -> Self {
        let now = Utc.with_ymd_and_hms(2024, 1, 31, 10, 0, 0).unwrap();
        let store = Arc::new(InMemoryReminderStorage::new());
        let (dispatcher, emails, texts) = build_dispatcher(store.clone(), now, email_ok, sms_ok);

        Self {
            store,
            now,
            dispatcher,
            emails,
            texts,
        }
    }
}

/// A reminder scheduled `offset_secs` before `now`, owned by user 1, with
/// both recipients resolved.
pub fn reminder_at(
    now: DateTime<Utc>,
    offset_secs: i64,
    channel: ReminderChannel,
    recurrence: Option<Recurrence>,
) -> NewReminder {
    NewReminder {
        user_id: 1,
        title: "Pay rent".to_string(),
        message: "Before noon".to_string(),
        channel,
        scheduled_time: now - TimeDelta::seconds(offset_secs),
        recurrence,
        recipient_email: Some("me@example.com".to_string()),
        recipient_phone: Some("+15550100".to_string()),
    }
}
