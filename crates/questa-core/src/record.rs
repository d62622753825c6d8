//! Answer log port.

use questa_types::error::RecordError;
use questa_types::record::AnswerRecord;

/// Append-side port for answer persistence.
///
/// Implementations live in questa-infra (e.g., `JsonlAnswerLog`). The log
/// is write-only from this system's point of view; nothing here reads
/// records back.
pub trait AnswerLog: Send + Sync {
    /// Append one record to the named category's log, creating it if absent.
    ///
    /// Each call either fully appends or leaves the log unchanged; a failed
    /// append never leaves a partial line behind.
    fn record(
        &self,
        category_name: &str,
        record: &AnswerRecord,
    ) -> impl std::future::Future<Output = Result<(), RecordError>> + Send;
}
