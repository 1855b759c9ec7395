//! PDF text extraction.
//!
//! Thin wrapper over the `pdf-extract` crate; pages come back
//! concatenated in document order as one string.

use revisio_utils::{RevisioError, RevisioResult};
use std::path::Path;
use tracing::debug;

/// Extract the full plain-text content of the PDF at `path`.
pub fn extract_text(path: &Path) -> RevisioResult<String> {
    let text = pdf_extract::extract_text(path)
        .map_err(|e| RevisioError::extraction(format!("{}: {}", path.display(), e)))?;

    debug!(path = %path.display(), chars = text.len(), "extracted PDF text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_maps_to_extraction_error() {
        let err = extract_text(Path::new("does-not-exist.pdf")).unwrap_err();
        assert_eq!(err.error_code(), "EXTRACTION_ERROR");
    }
}
