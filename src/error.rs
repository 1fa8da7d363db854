//! Error types surfaced to the user as notices.

use thiserror::Error;

/// Everything that can go wrong while filling in or submitting the form.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Items or states could not be loaded
    #[error("Não foi possível carregar os dados: {0}")]
    ReferenceDataUnavailable(String),

    /// Cities of the selected state could not be loaded
    #[error("Não foi possível carregar as cidades: {0}")]
    RegionLookupFailed(String),

    /// Backend refused (or never received) the new point
    #[error("Cadastro rejeitado: {0}")]
    SubmissionRejected(String),

    /// Browser denied or failed the position query
    #[error("Localização indisponível: {0}")]
    GeolocationUnavailable(String),
}

impl AppError {
    /// Whether a retry on user action makes sense
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::ReferenceDataUnavailable(_) | AppError::RegionLookupFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_kinds() {
        assert!(AppError::ReferenceDataUnavailable("x".into()).is_recoverable());
        assert!(AppError::RegionLookupFailed("x".into()).is_recoverable());
        assert!(!AppError::SubmissionRejected("x".into()).is_recoverable());
        assert!(!AppError::GeolocationUnavailable("x".into()).is_recoverable());
    }

    #[test]
    fn test_message_carries_detail() {
        let err = AppError::SubmissionRejected("\"email\" must be a valid email".into());
        assert!(err.to_string().contains("must be a valid email"));
    }
}
