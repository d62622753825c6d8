//! Question bank port.
//!
//! The dialogue service reads questionnaire content through this trait;
//! the catalog query backs the category menu without loading full banks.

use questa_types::bank::{Category, CategorySummary};
use questa_types::error::BankError;

/// Read-side port for questionnaire content.
///
/// Implementations live in questa-infra (e.g., `JsonBankLoader`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait QuestionBank: Send + Sync {
    /// Resolve a category id into its full bank.
    ///
    /// Fails with `BankError::NotFound` for ids outside the catalog and
    /// `BankError::Malformed` when the backing document is unusable. Loading
    /// is a pure function of the document: re-loading an unchanged document
    /// yields a structurally equal category.
    fn load(
        &self,
        category_id: &str,
    ) -> impl std::future::Future<Output = Result<Category, BankError>> + Send;

    /// The categories on offer, in menu order.
    fn categories(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<CategorySummary>, BankError>> + Send;
}
