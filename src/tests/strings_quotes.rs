use super::*;

fn check(input: &str, expected: &str) {
    assert_eq!(repair(input).unwrap(), expected, "for input {:?}", input);
}

#[test]
fn adds_missing_end_quote() {
    check("\"abc", "\"abc\"");
    check("'abc", "\"abc\"");
    check("\u{2018}abc", "\"abc\"");
    check("\"it's working", "\"it's working\"");
    check("\"12:20", "\"12:20\"");
    check("{\"time\":\"12:20}", "{\"time\":\"12:20\"}");
    check("\"She said:", "\"She said:\"");
    check("{\"text\": \"She said:", "{\"text\": \"She said:\"}");
    check("{\"a\":\"b}", "{\"a\":\"b\"}");
}

#[test]
fn unquoted_value_with_colons_becomes_a_string() {
    check(
        "{\"date\":2024-10-18T18:35:22.229Z}",
        "{\"date\":\"2024-10-18T18:35:22.229Z\"}",
    );
}

#[test]
fn splits_at_a_separating_comma_when_the_end_quote_is_missing() {
    check("[\"hello, world]", "[\"hello\", \"world\"]");
    check("[\"hello,\"world\"]", "[\"hello\",\"world\"]");
    check("{\"a\":\"b,\"c\":\"d\"}", "{\"a\":\"b\",\"c\":\"d\"}");
    check("{\"a\":\"b,c,\"d\":\"e\"}", "{\"a\":\"b,c\",\"d\":\"e\"}");
    check("{a:\"b,c,\"d\":\"e\"}", "{\"a\":\"b,c\",\"d\":\"e\"}");
    check("[\"b,c,]", "[\"b\",\"c\"]");
}

#[test]
fn stops_at_the_next_newline_when_the_end_quote_is_missing() {
    check("[\n\"abc,\n\"def\"\n]", "[\n\"abc\",\n\"def\"\n]");
    check("[\n\"abc,  \n\"def\"\n]", "[\n\"abc\",  \n\"def\"\n]");
    check("[\"abc]\n", "[\"abc\"]\n");
    check("[\"abc  ]\n", "[\"abc\"  ]\n");
    check("[\n[\n\"abc\n]\n]\n", "[\n[\n\"abc\"\n]\n]\n");
}

#[test]
fn adds_missing_start_quote() {
    check("abc\"", "\"abc\"");
    check("[a\",\"b\"]", "[\"a\",\"b\"]");
    check("[a\",b\"]", "[\"a\",\"b\"]");
    check("{a\":\"foo\",\"b\":\"bar\"}", "{\"a\":\"foo\",\"b\":\"bar\"}");
    check("{\"a\":\"foo\",b\":\"bar\"}", "{\"a\":\"foo\",\"b\":\"bar\"}");
    check("{\"a\":foo\",\"b\":\"bar\"}", "{\"a\":\"foo\",\"b\":\"bar\"}");
}

#[test]
fn replaces_single_quotes() {
    check("{'a':2}", "{\"a\":2}");
    check("{'a':'foo'}", "{\"a\":\"foo\"}");
    check("{\"a\":'foo'}", "{\"a\":\"foo\"}");
    check("{a:'foo',b:'bar'}", "{\"a\":\"foo\",\"b\":\"bar\"}");
}

#[test]
fn replaces_special_quotes() {
    check("{\u{60}a\u{B4}:\u{60}b\u{B4}}", "{\"a\":\"b\"}");
    check("\u{2018}foo\u{2019}", "\"foo\"");
    check("\u{201C}foo\u{201D}", "\"foo\"");
    check("\u{60}foo\u{B4}", "\"foo\"");
    check("\u{60}foo'", "\"foo\"");
}

#[test]
fn keeps_special_quotes_inside_regular_strings() {
    check("\"Rounded \u{201D} quote\"", "\"Rounded \u{201D} quote\"");
    check("'Rounded \u{201D} quote'", "\"Rounded \u{201D} quote\"");
    check("\"Rounded \u{2019} quote\"", "\"Rounded \u{2019} quote\"");
    check("'Rounded \u{2019} quote'", "\"Rounded \u{2019} quote\"");
    check("'Double \" quote'", "\"Double \\\" quote\"");
}

#[test]
fn leaves_string_content_untouched() {
    check("\"{a:b}\"", "\"{a:b}\"");
    check("\"[1,2,3,]\"", "\"[1,2,3,]\"");
    check("\"{a:2,}\"", "\"{a:2,}\"");
}

#[test]
fn escapes_unescaped_double_quotes() {
    check(
        "\"The TV has a 24\" screen\"",
        "\"The TV has a 24\\\" screen\"",
    );
    check(
        "{\"key\": \"apple \"bee\" carrot\"}",
        "{\"key\": \"apple \\\"bee\\\" carrot\"}",
    );
    check("[\",\",\":\"]", "[\",\",\":\"]");
    check("[\"a\" 2]", "[\"a\", 2]");
    check("[\"a\" 2", "[\"a\", 2]");
    check("[\",\" 2", "[\",\", 2]");
}

#[test]
fn escapes_quotes_followed_by_brackets_or_parens() {
    check("{ \"height\": \"53\"\" }", "{ \"height\": \"53\\\"\" }");
    check("{ \"height\": \"(5'3\")\" }", "{ \"height\": \"(5'3\\\")\" }");
    check("{\"a\": \"test\")\" }", "{\"a\": \"test\\\")\" }");
    check("{\"value\": \"foo(bar\")\"}", "{\"value\": \"foo(bar\\\")\"}");
}

#[test]
fn escapes_quotes_followed_by_commas() {
    check("{\"a\": \"x \"y\", z\"}", "{\"a\": \"x \\\"y\\\", z\"}");
    check(
        "{\"key\": \"become an \"Airbnb-free zone\", which is a political decision.\"}",
        "{\"key\": \"become an \\\"Airbnb-free zone\\\", which is a political decision.\"}",
    );
    check(
        "{\"key\": \"test \"quoted\", more text\"}",
        "{\"key\": \"test \\\"quoted\\\", more text\"}",
    );
}

#[test]
fn escapes_quotes_in_measurements() {
    check(
        "{\"text\": \"I want to buy 65\" television\"}",
        "{\"text\": \"I want to buy 65\\\" television\"}",
    );
    check("{\"text\": \"a 40\" TV\"}", "{\"text\": \"a 40\\\" TV\"}");
    check("{\"size\": \"12\" x 15\"\"}", "{\"size\": \"12\\\" x 15\\\"\"}");
}

#[test]
fn escapes_quotes_followed_by_slashes_and_letters() {
    check(
        "{\"value\": \"This is test \"message/stream\"}",
        "{\"value\": \"This is test \\\"message/stream\"}",
    );
    check(
        "{\"name\":\"Parth\",\"value\":\"This is test \"message/stream\"}",
        "{\"name\":\"Parth\",\"value\":\"This is test \\\"message/stream\"}",
    );
    check(
        "{\"path\": \"home/user\"test/file\"}",
        "{\"path\": \"home/user\\\"test/file\"}",
    );
    check(
        "{\"text\": \"hello \"world today\"}",
        "{\"text\": \"hello \\\"world today\"}",
    );
    check("{\"a\": \"x\",\"b\": \"y\"}", "{\"a\": \"x\",\"b\": \"y\"}");
}

#[test]
fn repairs_urls_missing_their_end_quote() {
    check("\"https://www.bible.com/", "\"https://www.bible.com/\"");
    check(
        "{\"url\":\"https://www.bible.com/}",
        "{\"url\":\"https://www.bible.com/\"}",
    );
    check(
        "{\"url\":\"https://www.bible.com/,\"id\":2}",
        "{\"url\":\"https://www.bible.com/\",\"id\":2}",
    );
    check("[\"https://www.bible.com/]", "[\"https://www.bible.com/\"]");
    check("[\"https://www.bible.com/,2]", "[\"https://www.bible.com/\",2]");
}
