//! Structured layout: key-wise defaulting and document-level failures.


use newsqa_core::record::{AnnotationSpan, ValidatedSpan};
use newsqa_core::variant::{Partition, Variant};
use newsqa_io::{NewsQa, RecordReader};
use serde_json::json;
use test_data_gen::*;

fn read_doc(doc: &serde_json::Value) -> Vec<newsqa_core::record::CombinedJsonRecord> {
    let bytes = serde_json::to_vec(doc).unwrap();
    RecordReader::from_reader(Variant::CombinedStructured, bytes.as_slice())
        .expect("reader")
        .map(|item| {
            item.expect("record")
                .1
                .as_combined_json()
                .expect("structured record")
                .clone()
        })
        .collect()
}

#[test]
fn test_question_without_optional_keys() {
    let stories = read_doc(&json!({"data": [{
        "storyId": "s", "text": "t", "type": "train",
        "questions": [{"q": "?", "consensus": {}, "answers": []}]
    }]}));
    let q = &stories[0].questions[0];
    assert_eq!(q.is_answer_absent, 0.0);
    assert_eq!(q.is_question_bad, 0.0);
    assert!(q.validated_answers.is_empty());
    assert_eq!(q.consensus, AnnotationSpan::default());
}

#[test]
fn test_defaulting_is_key_wise() {
    let stories = read_doc(&json!({"data": [{
        "storyId": "s", "text": "t", "type": "train",
        "questions": [{"q": "?", "consensus": {"s": 5}, "answers": []}]
    }]}));
    let consensus = serde_json::to_value(stories[0].questions[0].consensus).unwrap();
    assert_eq!(
        consensus,
        json!({"s": 5, "e": 0, "badQuestion": false, "noAnswer": false})
    );
}

#[test]
fn test_full_document_from_disk() {
    let dir = create_temp_data_dir("structured-disk");
    write_combined_json(&dir, &combined_json_doc());
    let dataset = NewsQa::open(Variant::CombinedStructured, &dir).expect("dataset");

    let records: Vec<_> = dataset
        .records(Partition::Combined)
        .expect("reader")
        .collect::<Result<_, _>>()
        .expect("records");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].0.get(), 0);
    assert_eq!(records[1].0.get(), 1);

    let first = records[0].1.as_combined_json().unwrap();
    assert_eq!(first.story_id, "./cnn/stories/0001.story");
    assert_eq!(first.kind, "train");
    let sourcer = &first.questions[0].answers[0].sourcer_answers;
    assert_eq!(sourcer[0], AnnotationSpan { s: 28, e: 34, bad_question: false, no_answer: false });
    assert_eq!(sourcer[1], AnnotationSpan { s: 0, e: 0, bad_question: false, no_answer: true });

    let second = records[1].1.as_combined_json().unwrap();
    let q = &second.questions[0];
    assert_eq!(q.is_answer_absent, 0.25);
    assert_eq!(q.is_question_bad, 0.5);
    assert_eq!(q.answers.len(), 2);
    assert!(q.answers[1].sourcer_answers[0].bad_question);
    assert_eq!(
        q.validated_answers,
        vec![
            ValidatedSpan { s: 18, e: 24, bad_question: false, no_answer: false, count: 2 },
            ValidatedSpan { s: 0, e: 0, bad_question: false, no_answer: true, count: 1 },
        ]
    );
}

#[test]
fn test_serialized_record_uses_canonical_keys() {
    let stories = read_doc(&combined_json_doc());
    let v = serde_json::to_value(&stories[1]).unwrap();
    assert_eq!(v["storyId"], "./cnn/stories/0002.story");
    assert_eq!(v["type"], "dev");
    let q = &v["questions"][0];
    assert!(q.get("validated_answers").is_some());
    assert!(q.get("validatedAnswers").is_none());
    assert_eq!(q["validated_answers"][1]["count"], 1);
    assert_eq!(q["answers"][0]["sourcerAnswers"][0]["e"], 24);
}

#[test]
fn test_missing_data_key_yields_zero_records() {
    let bytes = serde_json::to_vec(&json!({"stories": []})).unwrap();
    let err = RecordReader::from_reader(Variant::CombinedStructured, bytes.as_slice())
        .err()
        .expect("no data key");
    assert!(err.is_malformed());
}

#[test]
fn test_missing_data_key_from_disk() {
    let dir = create_temp_data_dir("structured-no-data");
    write_combined_json(&dir, &json!({"version": "1"}));
    let dataset = NewsQa::open(Variant::CombinedStructured, &dir).expect("dataset");
    let err = dataset.records(Partition::Combined).err().expect("malformed");
    assert!(err.is_malformed());
    assert!(err.to_string().contains("`data`"));
}

#[test]
fn test_wrongly_typed_span_key_aborts_pass() {
    let bytes = serde_json::to_vec(&json!({"data": [
        {"storyId": "a", "text": "t", "type": "train", "questions": []},
        {"storyId": "b", "text": "t", "type": "train",
         "questions": [{"q": "?", "consensus": {"s": "x"}, "answers": []}]},
        {"storyId": "c", "text": "t", "type": "train", "questions": []}
    ]}))
    .unwrap();
    let results: Vec<_> = RecordReader::from_reader(Variant::CombinedStructured, bytes.as_slice())
        .expect("reader")
        .collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    let err = results[1].as_ref().unwrap_err();
    assert!(err.is_malformed());
    assert!(err.to_string().contains("consensus"));
}
