//! Property-based tests for the cleaning and splitting invariants.
//!
//! Rather than asserting specific examples, these tests state invariants
//! that must hold for arbitrary generated inputs: size bounds, metadata
//! preservation, determinism, parallel consistency, and cleaner
//! convergence.

use proptest::prelude::*;

use docsplit::{
    clean_and_split, clean_and_split_with_options, clean_non_ascii_chars, BatchOptions, Document,
    Metadata,
};

/// Arbitrary unicode content, including characters the cleaners remove.
fn content_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..400).prop_map(String::from_iter)
}

/// Random string-keyed metadata.
fn metadata_strategy() -> impl Strategy<Value = Metadata> {
    prop::collection::btree_map("[a-zA-Z0-9_ ]{1,20}", ".{0,40}", 0..4)
}

fn document_strategy() -> impl Strategy<Value = Document> {
    (content_strategy(), metadata_strategy())
        .prop_map(|(content, metadata)| Document::new(content, metadata))
}

fn chunk_size_strategy() -> impl Strategy<Value = usize> {
    10usize..1000
}

proptest! {
    // Every chunk respects the size bound. The default separator hierarchy
    // ends with the character-level fallback, so the bound is unconditional.
    #[test]
    fn chunks_never_exceed_size(doc in document_strategy(), chunk_size in chunk_size_strategy()) {
        let splits = doc.recursive_character_splitter(chunk_size).unwrap();
        for split in &splits {
            prop_assert!(
                split.page_content.chars().count() <= chunk_size,
                "chunk of {} characters exceeds limit {}",
                split.page_content.chars().count(),
                chunk_size
            );
        }
    }

    // Metadata survives every splitter unchanged.
    #[test]
    fn metadata_preserved(doc in document_strategy(), chunk_size in chunk_size_strategy()) {
        for split in doc.recursive_character_splitter(chunk_size).unwrap() {
            prop_assert_eq!(&split.metadata, &doc.metadata);
        }
        for split in doc.split_on_num_characters(chunk_size).unwrap() {
            prop_assert_eq!(&split.metadata, &doc.metadata);
        }
        for chunk in clean_and_split(std::slice::from_ref(&doc), chunk_size).unwrap() {
            prop_assert_eq!(&chunk.metadata, &doc.metadata);
        }
    }

    // Splitting is a pure function of its inputs.
    #[test]
    fn splitting_is_deterministic(doc in document_strategy(), chunk_size in chunk_size_strategy()) {
        let first = doc.recursive_character_splitter(chunk_size).unwrap();
        let second = doc.recursive_character_splitter(chunk_size).unwrap();
        prop_assert_eq!(first, second);
    }

    // The parallel batch gives exactly the sequential result, in order.
    #[test]
    fn parallel_matches_sequential(
        contents in prop::collection::vec(content_strategy(), 0..8),
        chunk_size in chunk_size_strategy(),
    ) {
        let docs: Vec<Document> = contents
            .into_iter()
            .enumerate()
            .map(|(i, content)| {
                let mut metadata = Metadata::new();
                metadata.insert("id".to_string(), i.to_string());
                Document::new(content, metadata)
            })
            .collect();

        let parallel = clean_and_split(&docs, chunk_size).unwrap();
        let sequential = clean_and_split_with_options(
            &docs,
            &BatchOptions::new(chunk_size).unwrap().sequential(),
        )
        .unwrap();
        prop_assert_eq!(parallel, sequential);
    }

    // Stripping non-ASCII is idempotent and leaves only ASCII behind.
    #[test]
    fn non_ascii_strip_idempotent(text in content_strategy()) {
        let once = clean_non_ascii_chars(&text);
        let twice = clean_non_ascii_chars(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.chars().all(|c| c.is_ascii()));
    }

    // The cleaner pipeline converges: a third application changes nothing
    // beyond what the second one produced.
    #[test]
    fn cleaners_converge(doc in document_strategy()) {
        let mut twice = doc.clone();
        twice.clean();
        twice.clean();

        let mut thrice = twice.clone();
        thrice.clean();

        prop_assert_eq!(twice.page_content.trim(), thrice.page_content.trim());
    }

    // Every input document's id shows up in the output when its content
    // survives cleaning.
    #[test]
    fn metadata_ids_round_trip(
        words in prop::collection::vec("[a-z]{1,8}", 1..6),
        repeats in 1usize..30,
        chunk_size in chunk_size_strategy(),
    ) {
        let docs: Vec<Document> = (0..8)
            .map(|i| {
                let mut metadata = Metadata::new();
                metadata.insert("id".to_string(), i.to_string());
                let body = format!("Document {i} {} ", words.join(" ")).repeat(repeats);
                Document::new(body, metadata)
            })
            .collect();

        let chunks = clean_and_split(&docs, chunk_size).unwrap();

        let output_ids: std::collections::BTreeSet<String> = chunks
            .iter()
            .map(|c| c.metadata["id"].clone())
            .collect();
        let input_ids: std::collections::BTreeSet<String> =
            (0..8).map(|i| i.to_string()).collect();
        prop_assert_eq!(output_ids, input_ids);
    }
}
