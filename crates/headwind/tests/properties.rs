//! Property-based tests for the sort engine and the document transform.

use std::collections::HashSet;

use headwind::defaults::CLASS_ORDER;
use headwind::modifiers::MODIFIERS;
use headwind::{FormatOptions, Settings, Sorter, apply_edits, transform};
use proptest::prelude::*;
use proptest::sample::select;

fn known_class() -> impl Strategy<Value = String> {
    select(CLASS_ORDER.as_slice()).prop_map(str::to_owned)
}

fn variant_class() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(select(MODIFIERS.as_slice()), 1..4),
        select(CLASS_ORDER.as_slice()),
    )
        .prop_map(|(variants, base)| format!("{}:{base}", variants.join(":")))
}

fn custom_class() -> impl Strategy<Value = String> {
    prop_oneof![
        "custom-[a-z]{1,8}",
        "[a-z]{1,6}:custom-[a-z]{1,4}",
        "not-a-modifier:flex",
    ]
}

/// Any subset of the known modifiers, in any order.
fn variant_order() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(MODIFIERS.as_slice(), 0..=MODIFIERS.len()).prop_shuffle()
}

fn known_token() -> impl Strategy<Value = String> {
    prop_oneof![3 => known_class(), 2 => variant_class()]
}

fn any_token() -> impl Strategy<Value = String> {
    prop_oneof![3 => known_class(), 2 => variant_class(), 1 => custom_class()]
}

fn sorter(options: &FormatOptions) -> Sorter {
    Sorter::new(CLASS_ORDER.iter(), MODIFIERS.iter(), options)
}

fn sorted(tokens: &[String], options: &FormatOptions) -> Vec<String> {
    let borrowed: Vec<&str> = tokens.iter().map(String::as_str).collect();
    sorter(options)
        .sort(&borrowed)
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn keep_duplicates() -> FormatOptions {
    FormatOptions {
        remove_duplicates: false,
        ..FormatOptions::default()
    }
}

proptest! {
    #[test]
    fn sorting_is_idempotent(
        tokens in prop::collection::vec(any_token(), 0..24),
        prepend in any::<bool>(),
    ) {
        let options = FormatOptions { prepend_unknown: prepend, ..FormatOptions::default() };
        let once = sorted(&tokens, &options);
        prop_assert_eq!(sorted(&once, &options), once);
    }

    #[test]
    fn known_tokens_sort_to_one_order(
        (tokens, shuffled) in prop::collection::vec(known_token(), 0..24)
            .prop_flat_map(|tokens| (Just(tokens.clone()), Just(tokens).prop_shuffle())),
        variant_order in variant_order(),
    ) {
        let sorter =
            Sorter::new(CLASS_ORDER.iter(), variant_order.iter(), &FormatOptions::default());
        fn borrowed(tokens: &[String]) -> Vec<&str> {
            tokens.iter().map(String::as_str).collect()
        }
        prop_assert_eq!(
            sorter.sort(&borrowed(&tokens)),
            sorter.sort(&borrowed(&shuffled))
        );
    }

    #[test]
    fn deduplication_keeps_each_token_once(tokens in prop::collection::vec(any_token(), 0..24)) {
        let output = sorted(&tokens, &FormatOptions::default());
        let unique: HashSet<&String> = output.iter().collect();
        prop_assert_eq!(unique.len(), output.len());
        prop_assert_eq!(unique, tokens.iter().collect::<HashSet<_>>());
    }

    #[test]
    fn without_deduplication_tokens_are_only_reordered(
        tokens in prop::collection::vec(any_token(), 0..24),
    ) {
        let mut output = sorted(&tokens, &keep_duplicates());
        let mut input = tokens.clone();
        output.sort();
        input.sort();
        prop_assert_eq!(output, input);
    }

    #[test]
    fn edits_cover_the_extracted_strings(
        attributes in prop::collection::vec(
            ("[a-z ]{0,12}", prop::collection::vec(any_token(), 1..8)),
            0..5,
        ),
    ) {
        let document: String = attributes
            .iter()
            .map(|(prefix, tokens)| format!("{prefix}<div class=\"{}\"></div>\n", tokens.join(" ")))
            .collect();
        let settings = Settings::default();
        let edits = transform(&document, "html", &settings)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(edits.len(), attributes.len());
        for (edit, (_, tokens)) in edits.iter().zip(&attributes) {
            let expected = tokens.join(" ");
            prop_assert_eq!(document.get(edit.range()), Some(expected.as_str()));
        }

        let rewritten = apply_edits(&document, &edits);
        let again = transform(&rewritten, "html", &settings)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert!(again.iter().all(|edit| edit.is_noop(&rewritten)));
    }
}
