use thiserror::Error;

pub type CommandResult<T> = Result<T, QoderError>;

#[derive(Debug, Error)]
pub enum QoderError {
    // Not marked as a source: the encoder text is already part of the message.
    #[error("Error marshaling JSON: {0}")]
    Encoding(serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_error_carries_prefix_and_encoder_text() {
        let inner = <serde_json::Error as serde::ser::Error>::custom("boom");
        let err = QoderError::Encoding(inner);

        assert_eq!(err.to_string(), "Error marshaling JSON: boom");
        assert!(std::error::Error::source(&err).is_none());
    }
}
