//! Error types for enumeration options.

use thiserror::Error;

/// Errors raised when an options value or a legacy flag is rejected.
///
/// Both kinds are caller contract violations. Values are never clamped or
/// coerced into range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// A numeric field was assigned a value outside its valid range.
    #[error("{name} is out of range: {value} (must be non-negative)")]
    OutOfRange { name: &'static str, value: i64 },

    /// An argument did not correspond to any known value.
    #[error("Invalid {name}: {value}")]
    InvalidArgument { name: &'static str, value: i64 },
}

impl OptionsError {
    /// Out-of-range error for the recursion depth field.
    pub fn depth_out_of_range(value: i32) -> Self {
        Self::OutOfRange {
            name: "max_recursion_depth",
            value: value.into(),
        }
    }

    /// Invalid-argument error for a raw legacy search option.
    pub fn invalid_search_option(value: i64) -> Self {
        Self::InvalidArgument {
            name: "search option",
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_out_of_range_message() {
        let err = OptionsError::depth_out_of_range(-3);
        assert!(matches!(err, OptionsError::OutOfRange { value: -3, .. }));
        assert!(err.to_string().contains("max_recursion_depth"));
    }

    #[test]
    fn test_invalid_search_option_message() {
        let err = OptionsError::invalid_search_option(7);
        assert_eq!(err.to_string(), "Invalid search option: 7");
    }
}
