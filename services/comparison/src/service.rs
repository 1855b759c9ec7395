//! Comparison pipeline orchestration.
//!
//! Owns the LLM client and the reference configuration, spools the
//! uploaded candidate to a temp file, extracts all three texts, and
//! hands them to the comparator.

use revisio_utils::{ReferenceConfig, RevisioError, RevisioResult};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::info;

use crate::comparator::{Comparator, ComparisonOutcome};
use crate::llm::QueryLlm;
use crate::pdf;

#[derive(Clone)]
pub struct ComparisonService {
    llm: Arc<dyn QueryLlm>,
    references: ReferenceConfig,
}

impl ComparisonService {
    pub fn new(llm: Arc<dyn QueryLlm>, references: ReferenceConfig) -> Self {
        Self { llm, references }
    }

    /// Run the full pipeline for one uploaded candidate document.
    ///
    /// The upload is spooled to a named temp file for extraction. The
    /// file handle is scoped to this call, so the file is removed on
    /// drop on every exit path, error paths included.
    pub async fn run(&self, upload: &[u8]) -> RevisioResult<ComparisonOutcome> {
        let spooled = self.spool_upload(upload)?;

        let v1_text = pdf::extract_text(&self.references.v1_path)?;
        let v2_text = pdf::extract_text(&self.references.v2_path)?;
        let candidate_text = pdf::extract_text(spooled.path())?;

        info!(
            v1_chars = v1_text.len(),
            v2_chars = v2_text.len(),
            candidate_chars = candidate_text.len(),
            "extracted all three documents"
        );

        let comparator = Comparator::new(&*self.llm, self.references.max_chunk_chars);
        comparator.compare(&v1_text, &v2_text, &candidate_text).await
    }

    fn spool_upload(&self, upload: &[u8]) -> RevisioResult<NamedTempFile> {
        let mut file = match &self.references.spool_dir {
            Some(dir) => NamedTempFile::new_in(dir),
            None => NamedTempFile::new(),
        }
        .map_err(|e| RevisioError::internal(format!("temp file: {}", e)))?;

        file.write_all(upload)
            .map_err(|e| RevisioError::internal(format!("temp file: {}", e)))?;
        file.flush()
            .map_err(|e| RevisioError::internal(format!("temp file: {}", e)))?;

        Ok(file)
    }
}
