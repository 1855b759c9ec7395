pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
pub use logging::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.references.max_chunk_chars, 2000);
        assert_eq!(config.llm.temperature, 0.1);
    }

    #[test]
    fn test_error_handling() {
        let error = RevisioError::validation("file", "no file provided");
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert_eq!(error.http_status_code(), 400);

        let error = RevisioError::extraction("bad xref table");
        assert_eq!(error.http_status_code(), 422);
    }
}
