//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("'Category' is a placeholder and cannot be selected")]
    PlaceholderCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_category_display() {
        let error = DomainError::InvalidCategory("Sports".to_string());
        assert_eq!(error.to_string(), "Invalid category: Sports");
    }
}
