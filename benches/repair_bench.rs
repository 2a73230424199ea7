use criterion::{criterion_group, criterion_main, Criterion};
use jsonmend::{repair_with_options, Options};

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair");
    let cases = [
        ("unquoted_keys", "{a:1, b:2, c:3}"),
        (
            "comments_trailing_comma",
            "// comment\n{\"a\": 1, /*b*/ \"b\": 2,}\n",
        ),
        ("fenced_block", "```json\n{c:3}\n```\n"),
        (
            "truncated_string",
            "{\"text\": \"The quick brown fox, \\n jumps",
        ),
        ("ndjson", "{a:1}\n{b:2}\n{c:3}"),
        ("python_keywords", "[True, False, None]"),
        (
            "unescaped_quotes",
            "{\"text\": \"I want to buy 65\" television\"}",
        ),
    ];
    let opts = Options::default();
    for (name, input) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                let out = repair_with_options(std::hint::black_box(input), &opts).unwrap();
                std::hint::black_box(out);
            })
        });
    }
    group.finish();
}

fn bench_valid_passthrough(c: &mut Criterion) {
    let mut group = c.benchmark_group("valid_passthrough");
    let mut doc = String::from("[");
    for i in 0..500 {
        if i > 0 {
            doc.push(',');
        }
        doc.push_str(&format!("{{\"id\":{},\"name\":\"item {}\"}}", i, i));
    }
    doc.push(']');
    let opts = Options::default();
    group.bench_function("array_500", |b| {
        b.iter(|| {
            let out = repair_with_options(std::hint::black_box(doc.as_str()), &opts).unwrap();
            std::hint::black_box(out);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_repair, bench_valid_passthrough);
criterion_main!(benches);
