//! Parameterized containment tables for both source variants.

use rstest::rstest;

use tokset::{Source, SourceOptions};

#[rstest]
#[case::whole_string("var a = 'alpha-beta'", "alpha-beta", true)]
#[case::string_case_folded("var a = 'CamelCase'", "camelcase", true)]
#[case::object_key("var o = {someKey: 1}", "somekey", true)]
#[case::string_object_key("var o = {'quoted-key': 1}", "quoted-key", true)]
#[case::dotted_assignment("o.written_key = 0", "written_key", true)]
#[case::literal_array_join("var j = ['a', 'b', 'c'].join('-')", "a-b-c", true)]
#[case::keyword("var a = 'alpha'", "var", false)]
#[case::declared_name("var someName = 'alpha'", "somename", false)]
#[case::property_read("var a = obj.read_key", "read_key", false)]
#[case::call_target("doIt('alpha')", "doit", false)]
fn script_containment(#[case] text: &str, #[case] token: &str, #[case] expected: bool) {
    let source = Source::script(text, SourceOptions::default());
    assert_eq!(
        source.contains(token),
        expected,
        "token {:?} in {:?}",
        token,
        text
    );
}

#[rstest]
#[case::word("some plain words", "plain", true)]
#[case::hyphen_run("keep my-hyphen-run intact", "my-hyphen-run", true)]
#[case::hyphen_segment("keep my-hyphen-run intact", "hyphen", true)]
#[case::identifier_is_a_word("const foo = 1", "const", true)]
#[case::no_substring_match("some plain words", "plai", false)]
#[case::never_spans_whitespace("going on", "going on", false)]
fn simple_containment(#[case] text: &str, #[case] token: &str, #[case] expected: bool) {
    let source = Source::simple(text, SourceOptions::default());
    assert_eq!(
        source.contains(token),
        expected,
        "token {:?} in {:?}",
        token,
        text
    );
}
