//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;
use async_trait::async_trait;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

impl SystemHealth {
    /// Build a system health report, deriving the overall status from the
    /// worst component.
    pub fn from_components(components: HashMap<String, HealthComponent>) -> Self {
        let status = if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
            SystemStatus::Unhealthy
        } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
            SystemStatus::Degraded
        } else {
            SystemStatus::Healthy
        };

        SystemHealth { status, components }
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;
}

/// Health of the record store given the result of counting its records
pub fn store_component(record_count: Result<usize, String>) -> HealthComponent {
    match record_count {
        Ok(count) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: Some(format!("{} record(s) stored", count)),
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_status_follows_worst_component() {
        let mut components = HashMap::new();
        components.insert("store".to_string(), store_component(Ok(3)));
        components.insert(
            "renderer".to_string(),
            HealthComponent { status: ComponentStatus::Healthy, details: None },
        );
        assert_eq!(SystemHealth::from_components(components.clone()).status, SystemStatus::Healthy);

        components.insert(
            "archive".to_string(),
            HealthComponent { status: ComponentStatus::Degraded, details: None },
        );
        assert_eq!(SystemHealth::from_components(components.clone()).status, SystemStatus::Degraded);

        components.insert("store".to_string(), store_component(Err("Lock error".to_string())));
        assert_eq!(SystemHealth::from_components(components).status, SystemStatus::Unhealthy);
    }

    #[test]
    fn test_store_component_reports_count() {
        let component = store_component(Ok(2));
        assert_eq!(component.status, ComponentStatus::Healthy);
        assert_eq!(component.details.as_deref(), Some("2 record(s) stored"));
    }
}
