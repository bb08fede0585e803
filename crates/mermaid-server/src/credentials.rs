//! Provider credential validation.
//!
//! The rendering service is public and unauthenticated, so there is nothing
//! to check. The hook exists because hosts call it before enabling the
//! provider; it always succeeds.

use std::collections::HashMap;
use thiserror::Error;
use tracing::info;

/// Credentials supplied by the host, keyed by field name.
pub type Credentials = HashMap<String, String>;

/// Credential validation failure.
#[derive(Error, Debug)]
#[error("Credential validation failed: {reason}")]
pub struct CredentialValidationError {
    /// Why validation failed
    pub reason: String,
}

/// Validates provider credentials.
///
/// # Errors
///
/// Never fails today; the signature leaves room for a real check.
///
/// # Examples
///
/// ```
/// use mermaid_ink_server::credentials::{Credentials, validate_credentials};
///
/// assert!(validate_credentials(&Credentials::new()).is_ok());
/// ```
pub fn validate_credentials(credentials: &Credentials) -> Result<(), CredentialValidationError> {
    info!(
        fields = credentials.len(),
        "Credentials validation successful"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credentials_accepted() {
        assert!(validate_credentials(&Credentials::new()).is_ok());
    }

    #[test]
    fn test_arbitrary_credentials_accepted() {
        let mut credentials = Credentials::new();
        credentials.insert("api_key".to_string(), "unused".to_string());
        assert!(validate_credentials(&credentials).is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = CredentialValidationError {
            reason: "missing key".to_string(),
        };
        assert_eq!(err.to_string(), "Credential validation failed: missing key");
    }
}
