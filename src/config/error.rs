use thiserror::Error;

/// Errors that can occur while validating shell configuration.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// A window dimension or breakpoint is zero or negative.
    #[error("Invalid {name}: expected a positive value, found {value}")]
    InvalidDimension { name: &'static str, value: i32 },
    /// Brand title is empty or whitespace.
    #[error("Brand title must not be empty")]
    EmptyBrand,
}
