//! Reader for the structured layout (`combined-json`).
//!
//! The file is one document, `{"data": [story, ...]}`, so it is parsed whole.
//! Stories are normalized one at a time as the iterator is pulled: every
//! question is rebuilt with its optional keys and nested spans defaulted.

use std::io::Read;

use serde_json::{Map, Value};

use newsqa_core::id::RecordId;
use newsqa_core::record::{
    AnnotationSpan, AnswerRecord, CombinedJsonRecord, QuestionRecord, Record, ValidatedSpan,
};

use super::RecordItem;
use crate::error::{Error, Result};
use crate::merge::{json_kind, overlay};

/// Pull iterator over the stories of a structured document.
pub struct StructuredReader {
    stories: std::vec::IntoIter<Value>,
    next_id: RecordId,
    done: bool,
}

impl StructuredReader {
    /// Parse the document and locate its top-level `data` sequence.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let doc: Value = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                Error::Io(e.into())
            } else {
                Error::Malformed(format!("invalid structured document: {e}"))
            }
        })?;
        Self::from_value(doc)
    }

    pub fn from_value(doc: Value) -> Result<Self> {
        let data = match doc {
            Value::Object(mut top) => top.remove("data"),
            other => {
                return Err(Error::Malformed(format!(
                    "structured document must be an object, found {}",
                    json_kind(&other)
                )))
            }
        };
        let stories = match data {
            Some(Value::Array(stories)) => stories,
            Some(other) => {
                return Err(Error::Malformed(format!(
                    "top-level `data` must be a sequence, found {}",
                    json_kind(&other)
                )))
            }
            None => {
                return Err(Error::Malformed(
                    "structured document has no top-level `data` sequence".into(),
                ))
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(stories = stories.len(), "parsed structured document");

        Ok(Self {
            stories: stories.into_iter(),
            next_id: RecordId::new(0),
            done: false,
        })
    }
}

impl Iterator for StructuredReader {
    type Item = RecordItem;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(raw) = self.stories.next() else {
            self.done = true;
            return None;
        };
        let id = self.next_id;
        match normalize_story(&raw) {
            Ok(story) => {
                self.next_id = id.next();
                Some(Ok((id, Record::CombinedJson(story))))
            }
            Err(e) => {
                self.done = true;
                Some(Err(prefix(e, &format!("story {}", id.get()))))
            }
        }
    }
}

/// Copy the story fields and rebuild every question.
pub fn normalize_story(raw: &Value) -> Result<CombinedJsonRecord> {
    let obj = as_object(raw, "story")?;
    let questions = required_array(obj, "questions", "story")?
        .iter()
        .enumerate()
        .map(|(i, q)| normalize_question(q).map_err(|e| prefix(e, &format!("question {i}"))))
        .collect::<Result<Vec<_>>>()?;

    Ok(CombinedJsonRecord {
        story_id: required_str(obj, "storyId", "story")?,
        text: required_str(obj, "text", "story")?,
        kind: required_str(obj, "type", "story")?,
        questions,
    })
}

/// Rebuild one question: defaults first, then whatever the raw object has.
pub fn normalize_question(raw: &Value) -> Result<QuestionRecord> {
    let obj = as_object(raw, "question")?;

    let consensus = match obj.get("consensus") {
        Some(c) => overlay(&AnnotationSpan::default(), c, "consensus")?,
        None => {
            return Err(Error::Malformed(
                "question: missing required key `consensus`".into(),
            ))
        }
    };

    let answers = required_array(obj, "answers", "question")?
        .iter()
        .map(normalize_answer)
        .collect::<Result<Vec<_>>>()?;

    // raw key is `validatedAnswers`; often absent
    let validated_answers = match obj.get("validatedAnswers") {
        None => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| overlay(&ValidatedSpan::default(), v, "validated answer"))
            .collect::<Result<Vec<_>>>()?,
        Some(other) => {
            return Err(Error::Malformed(format!(
                "question: `validatedAnswers` must be a sequence, found {}",
                json_kind(other)
            )))
        }
    };

    Ok(QuestionRecord {
        q: required_str(obj, "q", "question")?,
        is_answer_absent: optional_number(obj, "isAnswerAbsent")?,
        is_question_bad: optional_number(obj, "isQuestionBad")?,
        consensus,
        answers,
        validated_answers,
    })
}

fn normalize_answer(raw: &Value) -> Result<AnswerRecord> {
    let obj = as_object(raw, "answer")?;
    let sourcer_answers = required_array(obj, "sourcerAnswers", "answer")?
        .iter()
        .map(|s| overlay(&AnnotationSpan::default(), s, "sourcer answer"))
        .collect::<Result<Vec<_>>>()?;
    Ok(AnswerRecord { sourcer_answers })
}

fn as_object<'a>(v: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    v.as_object().ok_or_else(|| {
        Error::Malformed(format!("{what}: expected an object, found {}", json_kind(v)))
    })
}

fn required_str(obj: &Map<String, Value>, key: &str, what: &str) -> Result<String> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(Error::Malformed(format!(
            "{what}: `{key}` must be a string, found {}",
            json_kind(other)
        ))),
        None => Err(Error::Malformed(format!(
            "{what}: missing required key `{key}`"
        ))),
    }
}

fn required_array<'a>(obj: &'a Map<String, Value>, key: &str, what: &str) -> Result<&'a [Value]> {
    match obj.get(key) {
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(Error::Malformed(format!(
            "{what}: `{key}` must be a sequence, found {}",
            json_kind(other)
        ))),
        None => Err(Error::Malformed(format!(
            "{what}: missing required key `{key}`"
        ))),
    }
}

/// Absent means 0.
fn optional_number(obj: &Map<String, Value>, key: &str) -> Result<f64> {
    match obj.get(key) {
        None => Ok(0.0),
        Some(v) => v.as_f64().ok_or_else(|| {
            Error::Malformed(format!(
                "question: `{key}` must be a number, found {}",
                json_kind(v)
            ))
        }),
    }
}

fn prefix(e: Error, context: &str) -> Error {
    match e {
        Error::Malformed(msg) => Error::Malformed(format!("{context}: {msg}")),
        other => other,
    }
}
