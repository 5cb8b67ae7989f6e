//! Unit tests for the sort engine.

use super::*;
use rstest::{fixture, rstest};

fn options() -> FormatOptions {
    FormatOptions::default()
}

fn keep_duplicates() -> FormatOptions {
    FormatOptions {
        remove_duplicates: false,
        ..FormatOptions::default()
    }
}

#[fixture]
fn variant_sorter() -> Sorter {
    Sorter::new(
        [
            "text-blue-100",
            "mx-6",
            "mx-4",
            "mx-2",
            "bg-gray-200",
            "bg-blue-100",
            "bg-gray-400",
            "bg-gray-600",
        ],
        ["hover", "sm", "lg", "xl"],
        &options(),
    )
}

#[rstest]
fn groups_variants_by_variant_order_then_class_order(variant_sorter: Sorter) {
    let tokens = [
        "xl:mx-6",
        "lg:mx-4",
        "sm:bg-gray-200",
        "hover:bg-blue-100",
        "lg:bg-gray-400",
        "hover:text-blue-100",
        "xl:bg-gray-600",
        "sm:mx-2",
    ];
    assert_eq!(
        variant_sorter.sort(&tokens),
        [
            "hover:text-blue-100",
            "hover:bg-blue-100",
            "sm:mx-2",
            "sm:bg-gray-200",
            "lg:mx-4",
            "lg:bg-gray-400",
            "xl:mx-6",
            "xl:bg-gray-600",
        ]
    );
}

#[rstest]
fn plain_classes_precede_variant_classes(variant_sorter: Sorter) {
    assert_eq!(
        variant_sorter.sort(&["hover:mx-2", "mx-2", "mystery", "mx-6"]),
        ["mx-6", "mx-2", "hover:mx-2", "mystery"]
    );
}

#[rstest]
fn shorter_variant_paths_sort_first(variant_sorter: Sorter) {
    assert_eq!(
        variant_sorter.sort(&["hover:sm:mx-2", "hover:mx-6", "hover:lg:mx-6", "hover:mx-2"]),
        ["hover:mx-6", "hover:mx-2", "hover:sm:mx-2", "hover:lg:mx-6"]
    );
}

#[rstest]
fn outer_variant_decides_before_inner(variant_sorter: Sorter) {
    assert_eq!(
        variant_sorter.sort(&["sm:hover:mx-2", "hover:sm:mx-2"]),
        ["hover:sm:mx-2", "sm:hover:mx-2"]
    );
}

#[rstest]
#[case::unknown_variant("group-hover:mx-2")]
#[case::unknown_base("hover:not-a-class")]
#[case::mixed_variants("hover:peer-focus:mx-2")]
#[case::empty_variant(":mx-2")]
fn unqualified_variant_tokens_are_unknown(variant_sorter: Sorter, #[case] token: &str) {
    assert_eq!(variant_sorter.sort(&["sm:mx-2", token, "mx-6"]), ["mx-6", "sm:mx-2", token]);
}

#[rstest]
#[case(&["dark:flex", "hover:flex", "sm:flex"])]
#[case(&["hover:flex", "dark:flex", "sm:flex"])]
#[case(&["sm:flex", "dark:flex", "hover:flex"])]
fn modifiers_outside_variant_order_follow_canonical_order(#[case] tokens: &[&str]) {
    let sorter = Sorter::new(["flex"], ["sm"], &options());
    assert_eq!(sorter.sort(tokens), ["sm:flex", "hover:flex", "dark:flex"]);
}

#[test]
fn unknown_tokens_keep_relative_order_after_known() {
    let sorted = sort_tokens(
        &["random", "container", "random", "flex"],
        &["container", "flex"],
        &["hover"],
        &keep_duplicates(),
    );
    assert_eq!(sorted, ["container", "flex", "random", "random"]);
}

#[test]
fn unknown_tokens_can_be_prepended() {
    let options = FormatOptions {
        prepend_unknown: true,
        ..keep_duplicates()
    };
    let sorted = sort_tokens(
        &["container", "random", "flex", "random"],
        &["container", "flex"],
        &["hover"],
        &options,
    );
    assert_eq!(sorted, ["random", "random", "container", "flex"]);
}

#[test]
fn duplicates_collapse_to_first_occurrence() {
    let sorted = sort_tokens(
        &["b", "flex", "a", "flex", "b"],
        &["flex"],
        &["hover"],
        &options(),
    );
    assert_eq!(sorted, ["flex", "b", "a"]);
}

#[test]
fn duplicate_known_tokens_stay_adjacent_when_kept() {
    let sorted = sort_tokens(
        &["p-4", "flex", "p-4"],
        &["flex", "p-4"],
        &["hover"],
        &keep_duplicates(),
    );
    assert_eq!(sorted, ["flex", "p-4", "p-4"]);
}

#[test]
fn custom_prefix_ranks_prefixed_tokens_only() {
    let options = FormatOptions {
        custom_prefix: "tw-".into(),
        ..options()
    };
    let sorted = sort_tokens(
        &["flex", "hover:tw-block", "tw-flex", "tw-block"],
        &["block", "flex"],
        &["hover"],
        &options,
    );
    assert_eq!(sorted, ["tw-block", "tw-flex", "hover:tw-block", "flex"]);
}

#[test]
fn empty_order_lists_leave_tokens_in_place() {
    let no_order: [&str; 0] = [];
    let sorted = sort_tokens(&["p-4", "hover:flex", "a"], &no_order, &no_order, &options());
    assert_eq!(sorted, ["p-4", "hover:flex", "a"]);
}

#[rstest]
#[case(None, " ", "b a", "a b")]
#[case(Some(r"\+\+"), "++", "b++a", "a++b")]
#[case(Some(r"\."), ".", ".b.a", "a.b")]
fn class_strings_use_separator_and_replacement(
    #[case] separator: Option<&str>,
    #[case] replacement: &str,
    #[case] input: &str,
    #[case] expected: &str,
) {
    let options = FormatOptions {
        separator: separator.map(|s| regex::Regex::new(s).unwrap_or_else(|e| panic!("{e}"))),
        replacement: replacement.into(),
        ..options()
    };
    assert_eq!(sort_class_string(input, &["a", "b"], &["hover"], &options), expected);
}

#[test]
fn multi_line_class_strings_are_trimmed() {
    let sorted = sort_class_string(
        "\n\t\tp-4\n\t\tflex\n\t",
        &["flex", "p-4"],
        &["hover"],
        &options(),
    );
    assert_eq!(sorted, "flex p-4");
}

#[test]
fn sorting_sorted_output_is_stable() {
    let sorter = Sorter::new(["flex", "p-4", "m-2"], ["hover", "md"], &options());
    let once = sorter.sort(&["md:m-2", "x", "hover:p-4", "m-2", "flex", "md:flex"]);
    assert_eq!(sorter.sort(&once), once);
}
