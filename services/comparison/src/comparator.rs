//! Comparator
//!
//! Chunks the two baseline texts and the candidate text, aligns the
//! chunk sequences by position, and asks the LLM to transfer the v1→v2
//! correction pattern onto each candidate chunk.

use revisio_utils::RevisioResult;
use tracing::{info, warn};

use crate::chunker::chunk_text;
use crate::llm::QueryLlm;

/// Result of one comparison run.
#[derive(Debug)]
pub struct ComparisonOutcome {
    /// Per-chunk LLM responses joined with newlines, in chunk order.
    pub result: String,
    /// Number of aligned chunk triples submitted to the LLM.
    pub chunks_compared: usize,
}

pub struct Comparator<'a, C: QueryLlm + ?Sized> {
    llm: &'a C,
    max_chunk_chars: usize,
}

impl<'a, C: QueryLlm + ?Sized> Comparator<'a, C> {
    pub fn new(llm: &'a C, max_chunk_chars: usize) -> Self {
        Self {
            llm,
            max_chunk_chars,
        }
    }

    /// Run the correction-transfer comparison over three document texts.
    ///
    /// Queries are issued sequentially in chunk order; the first LLM
    /// failure aborts the run with no partial result.
    pub async fn compare(
        &self,
        v1_text: &str,
        v2_text: &str,
        candidate_text: &str,
    ) -> RevisioResult<ComparisonOutcome> {
        let v1_chunks = chunk_text(v1_text, self.max_chunk_chars);
        let v2_chunks = chunk_text(v2_text, self.max_chunk_chars);
        let candidate_chunks = chunk_text(candidate_text, self.max_chunk_chars);

        // Positional alignment stops at the shortest sequence. Excess
        // chunks carry real content, so the truncation is logged rather
        // than dropped silently.
        let aligned = v1_chunks
            .len()
            .min(v2_chunks.len())
            .min(candidate_chunks.len());
        if v1_chunks.len() != aligned || v2_chunks.len() != aligned || candidate_chunks.len() != aligned
        {
            warn!(
                v1_chunks = v1_chunks.len(),
                v2_chunks = v2_chunks.len(),
                candidate_chunks = candidate_chunks.len(),
                aligned,
                "chunk sequences differ in length; excess chunks are not compared"
            );
        }

        info!(chunks = aligned, "running chunk comparison");

        let mut results = Vec::with_capacity(aligned);
        for i in 0..aligned {
            let prompt = build_prompt(&v1_chunks[i], &v2_chunks[i], &candidate_chunks[i]);
            let response = self.llm.query(&prompt).await?;
            results.push(response);
        }

        Ok(ComparisonOutcome {
            result: results.join("\n"),
            chunks_compared: aligned,
        })
    }
}

fn build_prompt(v1_chunk: &str, v2_chunk: &str, candidate_chunk: &str) -> String {
    format!(
        "Compare the following two versions of a document:\n\n\
         V1:\n{v1_chunk}\n\n\
         V2:\n{v2_chunk}\n\n\
         Highlight the differences and corrections made in V2 compared to V1.\n\n\
         Now, based on the corrections highlighted, evaluate the following \
         new document and suggest corrections:\n\n\
         New Document:\n{candidate_chunk}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub client that echoes its prompt and counts calls.
    struct EchoLlm {
        calls: AtomicUsize,
    }

    impl EchoLlm {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl QueryLlm for EchoLlm {
        async fn query(&self, prompt: &str) -> RevisioResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(prompt.to_string())
        }
    }

    /// Stub client that always fails.
    struct FailingLlm;

    #[async_trait]
    impl QueryLlm for FailingLlm {
        async fn query(&self, _prompt: &str) -> RevisioResult<String> {
            Err(revisio_utils::RevisioError::llm_query("rate limited"))
        }
    }

    // Builds a text that chunks into exactly `n` pieces under a budget
    // of 8: each 7-char word fills a chunk on its own.
    fn text_with_chunks(n: usize, word: &str) -> String {
        assert_eq!(word.len(), 7);
        vec![word; n].join(" ")
    }

    #[tokio::test]
    async fn aligns_to_shortest_sequence() {
        let llm = EchoLlm::new();
        let comparator = Comparator::new(&llm, 8);

        let v1 = text_with_chunks(3, "aaaaaaa");
        let v2 = text_with_chunks(5, "bbbbbbb");
        let candidate = text_with_chunks(2, "ccccccc");

        let outcome = comparator.compare(&v1, &v2, &candidate).await.unwrap();

        assert_eq!(outcome.chunks_compared, 2);
        assert_eq!(llm.calls.load(Ordering::SeqCst), 2);
        assert_eq!(outcome.result.lines().filter(|l| l.contains("New Document:")).count(), 2);
    }

    #[tokio::test]
    async fn preserves_chunk_order_in_output() {
        let llm = EchoLlm::new();
        let comparator = Comparator::new(&llm, 8);

        let v1 = text_with_chunks(2, "aaaaaaa");
        let v2 = text_with_chunks(2, "bbbbbbb");
        let candidate = "first11 second2";

        let outcome = comparator.compare(&v1, &v2, candidate).await.unwrap();

        let first = outcome.result.find("first11").unwrap();
        let second = outcome.result.find("second2").unwrap();
        assert!(first < second);
        assert_eq!(outcome.chunks_compared, 2);
    }

    #[tokio::test]
    async fn empty_candidate_issues_no_queries() {
        let llm = EchoLlm::new();
        let comparator = Comparator::new(&llm, 8);

        let v1 = text_with_chunks(3, "aaaaaaa");
        let v2 = text_with_chunks(3, "bbbbbbb");

        let outcome = comparator.compare(&v1, &v2, "").await.unwrap();

        assert_eq!(outcome.chunks_compared, 0);
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
        assert!(outcome.result.is_empty());
    }

    #[tokio::test]
    async fn llm_failure_aborts_without_partial_result() {
        let comparator = Comparator::new(&FailingLlm, 8);

        let v1 = text_with_chunks(2, "aaaaaaa");
        let v2 = text_with_chunks(2, "bbbbbbb");
        let candidate = text_with_chunks(2, "ccccccc");

        let err = comparator.compare(&v1, &v2, &candidate).await.unwrap_err();
        assert_eq!(err.error_code(), "LLM_QUERY_ERROR");
    }
}
