//! Catalog resolution errors.

/// Errors raised when stored settings reference ids the catalog does
/// not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown exchange: {0}")]
    UnknownExchange(String),
}
