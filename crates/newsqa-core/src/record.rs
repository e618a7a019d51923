//! Canonical record shapes.
//!
//! One shape is active per dataset instance, picked by the [`Variant`]. Field
//! names on the wire follow the corpus: the structured shape keeps its
//! camelCase keys, except `validated_answers`, which is renamed from the raw
//! `validatedAnswers`.

use serde::{Deserialize, Serialize};

use crate::variant::Variant;

/// A row of `combined-newsqa-data-v1.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedCsvRecord {
    pub story_id: String,
    pub story_text: String,
    pub question: String,
    /// The span columns rendered as a list literal, e.g. `['0:3', '']`.
    pub answer_char_ranges: String,
}

/// A row of `split_data/*.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRecord {
    pub story_id: String,
    pub story_text: String,
    pub question: String,
    /// Raw token span string (e.g. `0:3,5:7`), not parsed.
    pub answer_token_ranges: String,
}

/// A story of `combined-newsqa-data-v1.json` with its questions normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedJsonRecord {
    #[serde(rename = "storyId")]
    pub story_id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub q: String,
    #[serde(rename = "isAnswerAbsent")]
    pub is_answer_absent: f64,
    #[serde(rename = "isQuestionBad")]
    pub is_question_bad: f64,
    pub consensus: AnnotationSpan,
    pub answers: Vec<AnswerRecord>,
    pub validated_answers: Vec<ValidatedSpan>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    #[serde(rename = "sourcerAnswers")]
    pub sourcer_answers: Vec<AnnotationSpan>,
}

/// Character span annotation. `Default` is `{s: 0, e: 0, badQuestion: false, noAnswer: false}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSpan {
    #[serde(deserialize_with = "whole_number")]
    pub s: i64,
    #[serde(deserialize_with = "whole_number")]
    pub e: i64,
    #[serde(rename = "badQuestion")]
    pub bad_question: bool,
    #[serde(rename = "noAnswer")]
    pub no_answer: bool,
}

/// An [`AnnotationSpan`] with the number of validators that agreed on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedSpan {
    #[serde(deserialize_with = "whole_number")]
    pub s: i64,
    #[serde(deserialize_with = "whole_number")]
    pub e: i64,
    #[serde(rename = "badQuestion")]
    pub bad_question: bool,
    #[serde(rename = "noAnswer")]
    pub no_answer: bool,
    #[serde(deserialize_with = "whole_number")]
    pub count: i64,
}

/// Offsets and counts are integers, but some annotators wrote them as `5.0`.
/// Whole-valued floats are accepted; fractional ones are rejected.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct WholeNumber;

    impl serde::de::Visitor<'_> for WholeNumber {
        type Value = i64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a whole number")
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(serde::de::Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<i64, E> {
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(serde::de::Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(WholeNumber)
}

/// Any canonical record. Serializes as the inner shape, without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    CombinedCsv(CombinedCsvRecord),
    CombinedJson(CombinedJsonRecord),
    Split(SplitRecord),
}

impl Record {
    pub fn variant(&self) -> Variant {
        match self {
            Record::CombinedCsv(_) => Variant::CombinedDelimited,
            Record::CombinedJson(_) => Variant::CombinedStructured,
            Record::Split(_) => Variant::Split,
        }
    }

    /// Story identifier as it appears in the raw data.
    pub fn story_id(&self) -> &str {
        match self {
            Record::CombinedCsv(r) => &r.story_id,
            Record::CombinedJson(r) => &r.story_id,
            Record::Split(r) => &r.story_id,
        }
    }

    pub fn as_combined_csv(&self) -> Option<&CombinedCsvRecord> {
        match self {
            Record::CombinedCsv(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_combined_json(&self) -> Option<&CombinedJsonRecord> {
        match self {
            Record::CombinedJson(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_split(&self) -> Option<&SplitRecord> {
        match self {
            Record::Split(r) => Some(r),
            _ => None,
        }
    }
}

impl From<CombinedCsvRecord> for Record {
    fn from(r: CombinedCsvRecord) -> Self {
        Record::CombinedCsv(r)
    }
}

impl From<CombinedJsonRecord> for Record {
    fn from(r: CombinedJsonRecord) -> Self {
        Record::CombinedJson(r)
    }
}

impl From<SplitRecord> for Record {
    fn from(r: SplitRecord) -> Self {
        Record::Split(r)
    }
}
