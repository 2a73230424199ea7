use super::*;

fn check(input: &str, expected: &str) {
    assert_eq!(repair(input).unwrap(), expected, "for input {:?}", input);
}

#[test]
fn adds_and_removes_escape_characters() {
    check("\"foo'bar\"", "\"foo'bar\"");
    check("\"foo\\\"bar\"", "\"foo\\\"bar\"");
    check("'foo\"bar'", "\"foo\\\"bar\"");
    check("'foo\\'bar'", "\"foo'bar\"");
    check("\"foo\\'bar\"", "\"foo'bar\"");
    check("\"\\a\"", "\"a\"");
}

#[test]
fn escapes_bare_control_characters() {
    check("\"hello\u{8}world\"", "\"hello\\bworld\"");
    check("\"hello\u{C}world\"", "\"hello\\fworld\"");
    check("\"hello\nworld\"", "\"hello\\nworld\"");
    check("\"hello\rworld\"", "\"hello\\rworld\"");
    check("\"hello\tworld\"", "\"hello\\tworld\"");
    check("{\"key\nafter\": \"foo\"}", "{\"key\\nafter\": \"foo\"}");
    check("[\"hello\nworld\"]", "[\"hello\\nworld\"]");
    check("[\"hello\nworld\"  ]", "[\"hello\\nworld\"  ]");
    check("[\"hello\nworld\"\n]", "[\"hello\\nworld\"\n]");
}

#[test]
fn repairs_doubly_escaped_strings() {
    check("\\\"hello world\\\"", "\"hello world\"");
    check("\\\"hello world\\", "\"hello world\"");
    check("\\\"hello \\\"world\\\"\\\"", "\"hello \\\"world\\\"\"");
    check("[\\\"hello \\\"world\\\"\\\"]", "[\"hello \\\"world\\\"\"]");
    check(
        "{\\\"stringified\\\": \\\"hello \\\"world\\\"\\\"}",
        "{\"stringified\": \"hello \\\"world\\\"\"}",
    );
    check("\\\"hello\"", "\"hello\"");
}

#[test]
fn preserves_complete_unicode_escapes() {
    check("\"\\u2605", "\"\\u2605\"");
    check("{\"\\u2605\": true}", "{\"\\u2605\": true}");
}

#[test]
fn drops_truncated_unicode_escapes() {
    check("\"\\u", "\"\"");
    check("\"\\u2", "\"\"");
    check("\"\\u260", "\"\"");
    check("{\"foo\":\"bar\\u20", "{\"foo\":\"bar\"}");
}

#[test]
fn drops_truncated_doubly_escaped_unicode() {
    check("\"\\\\u", "\"\"");
    check("\"\\\\u2", "\"\"");
    check("\"\\\\u260", "\"\"");
    check("\"\\\\u2605", "\"\\\\u2605\"");
    check("{\"s \\\\ud", "{\"s\": null}");
}
