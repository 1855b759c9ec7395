//! Word-accumulating text chunker.
//!
//! Splits a document's text into pieces small enough to fit inside one
//! LLM request. The budget is counted in accumulated characters of the
//! whitespace-delimited words, which approximates the provider's token
//! limit well enough for prose.

/// Split `text` into chunks whose accumulated word lengths stay within
/// `max_size` characters.
///
/// Words are joined back with single spaces; the original whitespace
/// structure is not preserved. A single word longer than `max_size` is
/// emitted alone, untruncated.
pub fn chunk_text(text: &str, max_size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current_chunk: Vec<&str> = Vec::new();
    let mut current_length = 0usize;

    for word in text.split_whitespace() {
        // +1 accounts for the joining space
        current_length += word.len() + 1;
        if current_length > max_size {
            if !current_chunk.is_empty() {
                chunks.push(current_chunk.join(" "));
            }
            current_chunk = vec![word];
            current_length = word.len() + 1;
        } else {
            current_chunk.push(word);
        }
    }

    if !current_chunk.is_empty() {
        chunks.push(current_chunk.join(" "));
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(chunk_text("", 100).is_empty());
        assert!(chunk_text("   \n\t  ", 100).is_empty());
    }

    #[test]
    fn single_word_within_bound() {
        assert_eq!(chunk_text("word", 5), vec!["word".to_string()]);
        assert_eq!(chunk_text("word", 100), vec!["word".to_string()]);
    }

    #[test]
    fn oversized_word_is_emitted_alone_untruncated() {
        let long = "a".repeat(50);
        let text = format!("tiny {} tiny", long);
        let chunks = chunk_text(&text, 10);
        assert!(chunks.contains(&long));
        assert!(chunks.iter().all(|c| !c.contains("aa ")));
    }

    #[test]
    fn flush_starts_new_chunk_with_current_word() {
        // "alpha beta" costs 6 + 5 = 11 units, over a budget of 10,
        // so "beta" must open the second chunk.
        let chunks = chunk_text("alpha beta", 10);
        assert_eq!(chunks, vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn words_accumulate_up_to_the_bound() {
        let chunks = chunk_text("aa bb cc dd", 6);
        assert_eq!(chunks, vec!["aa bb".to_string(), "cc dd".to_string()]);
    }

    #[test]
    fn whitespace_structure_is_normalized() {
        let chunks = chunk_text("one\n\n  two\tthree", 100);
        assert_eq!(chunks, vec!["one two three".to_string()]);
    }

    proptest! {
        /// Joining all chunks and re-splitting reproduces the exact word
        /// sequence of the input (lossless tokenization).
        #[test]
        fn lossless_tokenization(text in "[ a-zA-Z0-9]{0,200}", max in 1usize..64) {
            let words: Vec<&str> = text.split_whitespace().collect();
            let chunks = chunk_text(&text, max);
            let rejoined = chunks.join(" ");
            let chunk_words: Vec<&str> = rejoined.split_whitespace().collect();
            prop_assert_eq!(words, chunk_words);
        }

        /// Every chunk containing more than one word respects the bound
        /// within one joining-space unit.
        #[test]
        fn multi_word_chunks_respect_bound(text in "[ a-z]{0,200}", max in 2usize..64) {
            for chunk in chunk_text(&text, max) {
                if chunk.contains(' ') {
                    prop_assert!(chunk.len() < max);
                }
            }
        }

        /// Empty input is empty output for any bound.
        #[test]
        fn empty_is_empty(max in 1usize..10_000) {
            prop_assert!(chunk_text("", max).is_empty());
        }
    }
}
