#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use site_backend::config::SmtpConfig;
use site_backend::domain::entities::OutgoingMail;
use site_backend::domain::mailer::{MailError, Mailer};
use site_backend::infrastructure::persistence::PgVisitRepository;
use site_backend::state::{AnalyticsState, ContactState};
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

pub const TEST_RECIPIENT: &str = "owner@example.com";

pub fn create_analytics_state(pool: PgPool) -> AnalyticsState {
    AnalyticsState::new(Arc::new(PgVisitRepository::new(Arc::new(pool))))
}

pub async fn insert_visit_at(pool: &PgPool, page: Option<&str>, timestamp: DateTime<Utc>) {
    sqlx::query(r#"INSERT INTO visits ("timestamp", page, ip, user_agent) VALUES ($1, $2, $3, $4)"#)
        .bind(timestamp)
        .bind(page)
        .bind("127.0.0.1")
        .bind("test-agent")
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_visit(pool: &PgPool, page: &str) {
    insert_visit_at(pool, Some(page), Utc::now()).await;
}

pub async fn count_rows(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM visits")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Mailer that records every message and optionally fails.
#[derive(Default)]
pub struct StubMailer {
    pub sent: Mutex<Vec<OutgoingMail>>,
    pub fail: bool,
}

impl StubMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for StubMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        if self.fail {
            let address = "relay-rejected".to_string();
            let source = address.parse::<lettre::Address>().unwrap_err();
            return Err(MailError::Address { address, source });
        }

        self.sent.lock().unwrap().push(mail);
        Ok(())
    }

    fn relay(&self) -> String {
        "stub:25".to_string()
    }
}

pub fn create_contact_state(mailer: Arc<StubMailer>) -> ContactState {
    ContactState::new(mailer, TEST_RECIPIENT)
}

/// Plaintext relay on a port nothing listens on.
pub fn unreachable_smtp_config() -> SmtpConfig {
    SmtpConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        username: "user".to_string(),
        password: "pass".to_string(),
        starttls: false,
    }
}
