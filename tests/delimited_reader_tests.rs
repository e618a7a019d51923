//! Delimited layouts: header discard, blank rows, id density, column mapping.


use std::fs;

use newsqa_core::record::{CombinedCsvRecord, SplitRecord};
use newsqa_core::variant::{Partition, Variant};
use newsqa_io::{NewsQa, RecordReader};
use test_data_gen::*;

#[test]
fn test_spec_combined_row() {
    let input = format!(
        "{}\n{}\n",
        quoted_row(&["id", "q", "s1", "s2", "text"]),
        quoted_row(&["A1", "what?", "0:3", "", "story."])
    );
    let records: Vec<_> = RecordReader::from_reader(Variant::CombinedDelimited, input.as_bytes())
        .expect("reader")
        .collect::<Result<_, _>>()
        .expect("records");
    assert_eq!(records.len(), 1);
    let (id, rec) = &records[0];
    assert_eq!(id.get(), 0);
    assert_eq!(
        rec.as_combined_csv().expect("combined csv"),
        &CombinedCsvRecord {
            story_id: "A1".into(),
            story_text: "story.".into(),
            question: "what?".into(),
            answer_char_ranges: "['0:3', '']".into(),
        }
    );
}

#[test]
fn test_spec_split_row() {
    let input = format!(
        "{}\n{}\n",
        quoted_row(&SPLIT_HEADER),
        quoted_row(&["A1", "story text", "question text", "0:3,5:7"])
    );
    let mut reader = RecordReader::from_reader(Variant::Split, input.as_bytes()).expect("reader");
    let (id, rec) = reader.next().expect("one record").expect("ok");
    assert_eq!(id.get(), 0);
    assert_eq!(
        rec.as_split().expect("split"),
        &SplitRecord {
            story_id: "A1".into(),
            story_text: "story text".into(),
            question: "question text".into(),
            answer_token_ranges: "0:3,5:7".into(),
        }
    );
    assert!(reader.next().is_none());
}

#[test]
fn test_header_never_yielded() {
    let dir = create_temp_data_dir("delim-header");
    write_combined_csv(&dir, 5);
    let dataset = NewsQa::open(Variant::CombinedDelimited, &dir).expect("dataset");
    for item in dataset.records(Partition::Combined).expect("reader") {
        let (_, rec) = item.expect("record");
        assert_ne!(rec.story_id(), "story_id");
    }
}

#[test]
fn test_interior_blank_lines_keep_ids_dense() {
    let dir = create_temp_data_dir("delim-blank");
    let path = dir.join("split_data").join("train.csv");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let body = [
        quoted_row(&SPLIT_HEADER),
        quoted_row(&["s0", "t", "q", "0:1"]),
        String::new(),
        String::new(),
        quoted_row(&["s1", "t", "q", "0:1"]),
        String::new(),
        quoted_row(&["s2", "t", "q", "0:1"]),
        String::new(),
    ]
    .join("\n");
    fs::write(&path, body).unwrap();

    let dataset = NewsQa::open(Variant::Split, &dir).expect("dataset");
    let got: Vec<(u64, String)> = dataset
        .records(Partition::Train)
        .expect("reader")
        .map(|item| {
            let (id, rec) = item.expect("record");
            (id.get(), rec.story_id().to_string())
        })
        .collect();
    assert_eq!(
        got,
        vec![
            (0, "s0".to_string()),
            (1, "s1".to_string()),
            (2, "s2".to_string())
        ]
    );
}

#[test]
fn test_each_split_partition_has_own_counter() {
    let dir = create_temp_data_dir("delim-counters");
    write_split_csv(&dir, "train", 4);
    write_split_csv(&dir, "test", 2);
    write_split_csv(&dir, "dev", 3);

    let dataset = NewsQa::open(Variant::Split, &dir).expect("dataset");
    for (partition, expected) in [
        (Partition::Train, 4u64),
        (Partition::Test, 2),
        (Partition::Dev, 3),
    ] {
        let ids: Vec<u64> = dataset
            .records(partition)
            .expect("reader")
            .map(|item| item.expect("record").0.get())
            .collect();
        assert_eq!(ids, (0..expected).collect::<Vec<_>>());
    }
}

#[test]
fn test_reopen_restarts_from_zero() {
    let dir = create_temp_data_dir("delim-reopen");
    write_split_csv(&dir, "train", 3);
    let dataset = NewsQa::open(Variant::Split, &dir).expect("dataset");

    let mut first = dataset.records(Partition::Train).expect("reader");
    let _ = first.next();
    let _ = first.next();
    drop(first);

    let (id, rec) = dataset
        .records(Partition::Train)
        .expect("reader")
        .next()
        .expect("record")
        .expect("ok");
    assert_eq!(id.get(), 0);
    assert_eq!(rec.story_id(), "train-0");
}

#[test]
fn test_combined_file_columns() {
    let dir = create_temp_data_dir("delim-combined");
    write_combined_csv(&dir, 2);
    let dataset = NewsQa::open(Variant::CombinedDelimited, &dir).expect("dataset");
    let records: Vec<_> = dataset
        .records(Partition::Combined)
        .expect("reader")
        .collect::<Result<_, _>>()
        .expect("records");
    assert_eq!(records.len(), 2);
    let rec = records[1].1.as_combined_csv().expect("combined");
    assert_eq!(rec.story_id, "./cnn/stories/0001.story");
    assert_eq!(rec.question, "What happened in story 1?");
    assert_eq!(rec.story_text, "Story number 1, with a comma.");
    assert_eq!(
        rec.answer_char_ranges,
        "['1:6|None', '0.0', '0.0', '{\"none\": 1}']"
    );
}

#[test]
fn test_insufficient_columns_is_malformed() {
    let input = format!(
        "{}\n{}\n{}\n",
        quoted_row(&SPLIT_HEADER),
        quoted_row(&["s0", "t", "q", "0:1"]),
        quoted_row(&["s1", "t", "q"])
    );
    let mut reader = RecordReader::from_reader(Variant::Split, input.as_bytes()).expect("reader");
    assert!(reader.next().expect("first").is_ok());
    let err = reader.next().expect("second").unwrap_err();
    assert!(err.is_malformed());
    assert!(reader.next().is_none());
}
