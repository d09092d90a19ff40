//! Error types for observable-object.

/// Result type alias for observable-object operations.
pub type Result<T> = std::result::Result<T, ObservableError>;

/// Errors that can occur when reading observable properties.
///
/// Writes and notifications never fail; only reads can, and a failing read
/// leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObservableError {
    /// The property has no stored value and no default provider was declared
    /// for it while the store materializes defaults.
    #[error("Property '{property}' not declared")]
    PropertyNotDeclared {
        /// Name of the property that was read
        property: String,
    },

    /// The stored value cannot be converted to the requested type.
    #[error("Property '{property}' holds {found}, cannot read it as {expected}")]
    InvalidCast {
        /// Name of the property that was read
        property: String,
        /// Rust type requested by the caller
        expected: &'static str,
        /// Kind of the stored value
        found: &'static str,
    },
}

impl ObservableError {
    /// Create a property-not-declared error.
    pub fn not_declared(property: impl Into<String>) -> Self {
        Self::PropertyNotDeclared {
            property: property.into(),
        }
    }

    /// Create an invalid-cast error.
    pub fn invalid_cast(
        property: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::InvalidCast {
            property: property.into(),
            expected,
            found,
        }
    }

    /// Name of the property the error refers to.
    pub fn property(&self) -> &str {
        match self {
            Self::PropertyNotDeclared { property } | Self::InvalidCast { property, .. } => property,
        }
    }
}
