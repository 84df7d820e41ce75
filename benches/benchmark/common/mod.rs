use criterion::Criterion;
use std::time::Duration;

// ============================================================================
// Test Data & Domain Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    Database(String),
    Network(String),
    Validation(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Database(msg) => write!(f, "Database error: {msg}"),
            DomainError::Network(msg) => write!(f, "Network error: {msg}"),
            DomainError::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}

// ============================================================================
// Simulation Functions
// ============================================================================

pub fn simulate_db_query(user_id: u64) -> Result<u64, DomainError> {
    if user_id % 100 == 0 {
        Err(DomainError::Database("Connection timeout".to_string()))
    } else {
        Ok(user_id)
    }
}

pub fn simulate_validation(user_id: u64) -> Result<u64, DomainError> {
    if user_id % 50 == 0 {
        Err(DomainError::Validation("Invalid email format".to_string()))
    } else {
        Ok(user_id)
    }
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
