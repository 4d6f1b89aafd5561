//! Error type for form decoding and route building.

/// Error returned when submitted form data cannot become a route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid item index in field '{0}'")]
    InvalidIndex(String),
    #[error("Invalid route order: {0}")]
    InvalidOrder(String),
    #[error("Percent-decoded text is not valid UTF-8: '{0}'")]
    InvalidEncoding(String),
}
