#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use shortener_core::domain::entities::{NewUrlRecord, UrlRecord};
use shortener_core::domain::repositories::UrlRepository;
use shortener_core::error::AppError;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

/// HashMap-backed repository for driving services without a database.
///
/// Enforces the same short-code uniqueness contract as the Postgres
/// implementation: `create` on a taken code returns `AppError::Conflict`.
pub struct InMemoryUrlRepository {
    records: Mutex<HashMap<String, UrlRecord>>,
    next_id: AtomicI64,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Pre-populates the store with active records under the given codes.
    pub fn with_codes<'a>(codes: impl IntoIterator<Item = &'a str>) -> Self {
        let repo = Self::new();

        {
            let mut records = repo.records.lock().unwrap();
            for code in codes {
                let id = repo.next_id.fetch_add(1, Ordering::SeqCst);
                records.insert(
                    code.to_string(),
                    UrlRecord::new(
                        id,
                        code.to_string(),
                        format!("{code}_seedkey0"),
                        "https://example.com/seeded".to_string(),
                        true,
                        0,
                        Utc::now(),
                    ),
                );
            }
        }

        repo
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let mut records = self.records.lock().unwrap();

        if records.contains_key(&new_record.short_code) {
            return Err(AppError::Conflict("short code already exists".to_string()));
        }

        let record = UrlRecord::new(
            self.next_id.fetch_add(1, Ordering::SeqCst),
            new_record.short_code.clone(),
            new_record.secret_key,
            new_record.target_url,
            true,
            0,
            Utc::now(),
        );

        records.insert(new_record.short_code, record.clone());
        Ok(record)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.records.lock().unwrap().get(short_code).cloned())
    }

    async fn find_by_secret_key(&self, secret_key: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .find(|r| r.secret_key == secret_key)
            .cloned())
    }

    async fn code_exists(&self, short_code: &str) -> Result<bool, AppError> {
        Ok(self.records.lock().unwrap().contains_key(short_code))
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<bool, AppError> {
        let mut records = self.records.lock().unwrap();

        match records.get_mut(short_code) {
            Some(record) => {
                record.clicks += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn deactivate(&self, secret_key: &str) -> Result<bool, AppError> {
        let mut records = self.records.lock().unwrap();

        match records
            .values_mut()
            .find(|r| r.secret_key == secret_key && r.is_active)
        {
            Some(record) => {
                record.is_active = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Config for wiring services in tests; the database URL is never dialed.
pub fn test_config() -> shortener_core::Config {
    shortener_core::Config {
        env_name: "Test".to_string(),
        base_url: "https://sho.rt".to_string(),
        database_url: "postgres://localhost/shortener_test".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        code_length: 7,
        code_max_attempts: 10,
        db_max_connections: 10,
        db_connect_timeout: 30,
        db_idle_timeout: 600,
        db_max_lifetime: 1800,
    }
}
