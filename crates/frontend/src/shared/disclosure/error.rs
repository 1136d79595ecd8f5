use thiserror::Error;

/// Errors of the disclosure primitives
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisclosureError {
    #[error("Invalid configuration: page size must be greater than zero (got {page_size})")]
    InvalidConfiguration { page_size: usize },
}
