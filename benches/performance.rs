use criterion::{criterion_group, criterion_main, Criterion};
use newsqa_core::variant::Variant;
use newsqa_io::RecordReader;
use serde_json::json;

fn make_split_csv(rows: usize) -> Vec<u8> {
    let mut out = String::from("\"story_id\",\"story_text\",\"question\",\"answer_token_ranges\"\n");
    for i in 0..rows {
        out.push_str(&format!(
            "\"./cnn/stories/{i}.story\",\"Story {i}, told at some length.\",\"Who is {i}?\",\"{}:{}\"\n",
            i % 50,
            i % 50 + 3
        ));
    }
    out.into_bytes()
}

fn make_structured(stories: usize) -> Vec<u8> {
    let data: Vec<_> = (0..stories)
        .map(|i| {
            json!({
                "storyId": format!("./cnn/stories/{i}.story"),
                "text": "A story.",
                "type": "train",
                "questions": [{
                    "q": "What?",
                    "consensus": {"s": i % 7},
                    "answers": [{"sourcerAnswers": [{"s": 1, "e": 4}, {"noAnswer": true}]}],
                    "validatedAnswers": [{"s": 1, "e": 4, "count": 2}]
                }]
            })
        })
        .collect();
    serde_json::to_vec(&json!({ "data": data })).unwrap()
}

fn bench_delimited(c: &mut Criterion) {
    let bytes = make_split_csv(4096);
    c.bench_function("split_csv_4096_rows", |b| {
        b.iter(|| {
            let n = RecordReader::from_reader(Variant::Split, bytes.as_slice())
                .unwrap()
                .map(|r| r.unwrap())
                .count();
            assert_eq!(n, 4096);
        })
    });
}

fn bench_structured(c: &mut Criterion) {
    let bytes = make_structured(1024);
    c.bench_function("combined_json_1024_stories", |b| {
        b.iter(|| {
            let n = RecordReader::from_reader(Variant::CombinedStructured, bytes.as_slice())
                .unwrap()
                .map(|r| r.unwrap())
                .count();
            assert_eq!(n, 1024);
        })
    });
}

criterion_group!(readers, bench_delimited, bench_structured);
criterion_main!(readers);
