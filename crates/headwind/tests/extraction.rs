//! Default JSX extraction: several strings per attribute and twin macro props.
#![expect(
    clippy::expect_used,
    reason = "tests require descriptive panic messages"
)]

use headwind::{Settings, build_matchers};
use rstest::{fixture, rstest};

const CLASS_STRING: &str = "w-64 h-full bg-blue-400 relative";

const BEFORE: &str = "export const Layout = ({ children }) => {
\t\t\tconst doNotSort = \"hello flex\";

\t\t\treturn (<div>
\t\t\t\t<div className=";

const AFTER: &str = "></div>
\t\t\t\t<div>{children}</div>
\t\t\t</div>)
\t\t}";

const JSX_LANGUAGES: [&str; 4] = [
    "javascript",
    "javascriptreact",
    "typescript",
    "typescriptreact",
];

#[fixture]
fn settings() -> Settings {
    Settings::default()
}

fn matches(settings: &Settings, language: &str, text: &str) -> Vec<(String, usize)> {
    let config = settings
        .lang_config(language)
        .expect("default languages are configured");
    build_matchers(config)
        .expect("defaults compile")
        .iter()
        .flat_map(|matcher| matcher.find_all(text))
        .map(|found| (found.text.to_owned(), found.start))
        .collect()
}

fn editor_text(attribute: &str) -> String {
    format!("{BEFORE}{attribute}{AFTER}")
}

#[rstest]
#[case::single_quotes(format!("'{CLASS_STRING}'"), 1)]
#[case::double_quotes(format!("\"{CLASS_STRING}\""), 1)]
#[case::curly_string(format!("{{ '{CLASS_STRING}' }}"), 3)]
#[case::template_literal(format!("{{`{CLASS_STRING}`}}"), 2)]
#[case::clsx_call(format!("{{ clsx(\"{CLASS_STRING}\") }}"), 8)]
fn finds_one_string_per_attribute(
    settings: Settings,
    #[case] attribute: String,
    #[case] offset: usize,
) {
    let text = editor_text(&attribute);
    for language in JSX_LANGUAGES {
        assert_eq!(
            matches(&settings, language, &text),
            [(CLASS_STRING.to_owned(), BEFORE.len() + offset)],
            "{language}"
        );
    }
}

#[rstest]
fn simple_multi_string(settings: Settings) {
    let text = r#"className={clsx("hello", "world")}"#;
    assert_eq!(
        matches(&settings, "typescriptreact", text),
        [
            ("hello".to_owned(), r#"className={clsx(""#.len()),
            ("world".to_owned(), r#"className={clsx("hello", ""#.len()),
        ]
    );
}

#[rstest]
#[case::single_quotes("'")]
#[case::double_quotes("\"")]
fn strings_between_variables(settings: Settings, #[case] quote: &str) {
    let head = format!("{{ clsx(foo, bar, {quote}");
    let middle = format!("{CLASS_STRING}{quote}, foo, {quote}");
    let attribute = format!("{head}{middle}class1 class2{quote}, bar) }}");
    let text = editor_text(&attribute);
    let first = BEFORE.len() + head.len();
    assert_eq!(
        matches(&settings, "javascriptreact", &text),
        [
            (CLASS_STRING.to_owned(), first),
            ("class1 class2".to_owned(), first + middle.len()),
        ]
    );
}

#[rstest]
fn strings_across_lines(settings: Settings) {
    let head = "{ clsx(\n\t\t\t\t\t\t\t\t\t  foo,\n\t\t\t\t\t\t\t\t\t  bar,\n\t\t\t\t\t\t\t\t\t  \"";
    let middle = format!("{CLASS_STRING}\",\n\t\t\t\t\t\t\t\t\t  foo,\n\t\t\t\t\t\t\t\t\t  \"");
    let attribute = format!(
        "{head}{middle}class1 class2\",\n\t\t\t\t\t\t\t\t\t  bar\n\t\t\t\t\t\t\t\t  }}"
    );
    let text = editor_text(&attribute);
    let first = BEFORE.len() + head.len();
    assert_eq!(
        matches(&settings, "javascript", &text),
        [
            (CLASS_STRING.to_owned(), first),
            ("class1 class2".to_owned(), first + middle.len()),
        ]
    );
}

#[rstest]
fn twin_macro_prop(settings: Settings) {
    let head = "import 'twin.macro'\n\n\t\t\tconst Input = () => <input tw=\"";
    let text = format!("{head}border hover:border-black\" />\n\t\t\t");
    for language in JSX_LANGUAGES {
        assert_eq!(
            matches(&settings, language, &text),
            [("border hover:border-black".to_owned(), head.len())]
        );
    }
}

#[rstest]
fn twin_macro_ternary(settings: Settings) {
    let head = "import 'twin.macro'\n\n\t\t\tconst Input = () => <input tw={!error ? \"";
    let middle = "border hover:border-black\" : \"";
    let text = format!("{head}{middle}border border-red-500\"}} />\n\t\t\t");
    assert_eq!(
        matches(&settings, "typescriptreact", &text),
        [
            ("border hover:border-black".to_owned(), head.len()),
            ("border border-red-500".to_owned(), head.len() + middle.len()),
        ]
    );
}

#[rstest]
fn tw_template_tag(settings: Settings) {
    let text = "const Button = tw`p-4 flex`;";
    assert_eq!(
        matches(&settings, "javascript", text),
        [("p-4 flex".to_owned(), "const Button = tw`".len())]
    );
}

#[rstest]
fn unrelated_strings_are_ignored(settings: Settings) {
    let text = "const doNotSort = \"hello flex\";";
    assert!(matches(&settings, "javascript", text).is_empty());
}
