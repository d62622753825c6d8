use thiserror::Error;

/// Errors from loading question banks.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("category '{0}' not found")]
    NotFound(String),

    #[error("category '{category}' is malformed: {reason}")]
    Malformed { category: String, reason: String },
}

/// Errors from cursor operations.
///
/// Both variants are caller contract violations (asking for a question when
/// none can exist); the dialogue service treats them as recoverable and
/// falls back to the category menu.
#[derive(Debug, Error)]
pub enum TraversalError {
    #[error("no category loaded")]
    NoCategory,

    #[error("category '{0}' is exhausted")]
    Exhausted(String),
}

/// Errors from appending answer records.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to append to '{log}': {reason}")]
    Append { log: String, reason: String },

    #[error("failed to encode record: {0}")]
    Encode(String),
}

/// Errors from outbound message delivery.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("conversation channel closed")]
    Closed,

    #[error("send failed: {0}")]
    Send(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_error_display() {
        let err = BankError::NotFound("hogwarts".to_string());
        assert_eq!(err.to_string(), "category 'hogwarts' not found");

        let err = BankError::Malformed {
            category: "hpi".to_string(),
            reason: "scale 'Adjustment' has no questions".to_string(),
        };
        assert!(err.to_string().contains("hpi"));
        assert!(err.to_string().contains("no questions"));
    }

    #[test]
    fn test_traversal_error_display() {
        assert_eq!(
            TraversalError::NoCategory.to_string(),
            "no category loaded"
        );
        assert_eq!(
            TraversalError::Exhausted("hds".to_string()).to_string(),
            "category 'hds' is exhausted"
        );
    }

    #[test]
    fn test_record_error_display() {
        let err = RecordError::Append {
            log: "hpi".to_string(),
            reason: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "failed to append to 'hpi': disk full");
    }

    #[test]
    fn test_delivery_error_display() {
        let err = DeliveryError::Send("peer went away".to_string());
        assert_eq!(err.to_string(), "send failed: peer went away");
    }
}
