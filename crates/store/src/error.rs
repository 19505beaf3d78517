use thiserror::Error;

/// Failures surfaced by the contract and template stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Contract not found")]
    ContractNotFound,

    #[error("Template not found")]
    TemplateNotFound,

    /// Seeded default templates are read-only.
    #[error("Cannot modify default templates")]
    DefaultTemplateImmutable,
}
