use std::sync::Arc;

use axum::http::StatusCode;

use child_health_booklet_data::archive::BookletArchive;
use child_health_booklet_domain::health::HealthServiceTrait;
use child_health_booklet_domain::services::{
    create_default_record_service, BookletService, RecordServiceTrait,
};

use crate::api::handlers::health::AppHealthService;
use crate::config::AppConfig;

/// Record service type for dependency injection
pub type RecordService = Arc<dyn RecordServiceTrait + Send + Sync>;

/// Health service type for dependency injection
pub type HealthService = Arc<dyn HealthServiceTrait + Send + Sync>;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub records: RecordService,
    pub booklets: BookletService,
    pub health: HealthService,
    pub legacy_not_found_status: bool,
}

impl AppState {
    /// Build state around an existing record service
    pub fn new(records: RecordService, booklets: BookletService, legacy_not_found_status: bool) -> Self {
        let health: HealthService = Arc::new(AppHealthService::new(records.clone(), booklets.clone()));
        Self {
            records,
            booklets,
            health,
            legacy_not_found_status,
        }
    }

    /// Fresh in-memory store, plus an archive when one is configured
    pub fn from_config(config: &AppConfig) -> Self {
        let records: RecordService = Arc::new(create_default_record_service());
        let archive = config.booklet_output_dir.clone().map(BookletArchive::new);
        Self::new(records, BookletService::new(archive), config.legacy_not_found_status)
    }

    /// Status used when a booklet is requested for an unknown identifier
    pub fn not_found_status(&self) -> StatusCode {
        if self.legacy_not_found_status {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        }
    }
}
