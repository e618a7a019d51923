//! Declared record schemas. Pure data.
//!
//! Each [`Variant`] declares the shape of the records it yields. The schema is
//! descriptive: readers build typed records directly, and downstream
//! consumers use the schema to lay out columns or validate exports.

use serde::{Deserialize, Serialize};

use crate::variant::Variant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Boolean,
    Int32,
    Float64,
    Utf8,
    /// Ordered, variable-length sequence.
    List(Box<DataType>),
    /// Nested record with named fields.
    Struct(Vec<Field>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }

    fn utf8(name: &str) -> Self {
        Self::new(name, DataType::Utf8, false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn field(&self, idx: usize) -> Option<&Field> {
        self.fields.get(idx)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::CombinedDelimited => Schema::new(vec![
                Field::utf8("story_id"),
                Field::utf8("story_text"),
                Field::utf8("question"),
                Field::utf8("answer_char_ranges"),
            ]),
            Variant::CombinedStructured => Schema::new(vec![
                Field::utf8("storyId"),
                Field::utf8("text"),
                Field::utf8("type"),
                Field::new(
                    "questions",
                    DataType::List(Box::new(question_type())),
                    false,
                ),
            ]),
            Variant::Split => Schema::new(vec![
                Field::utf8("story_id"),
                Field::utf8("story_text"),
                Field::utf8("question"),
                Field::utf8("answer_token_ranges"),
            ]),
        }
    }
}

fn span_fields() -> Vec<Field> {
    vec![
        Field::new("s", DataType::Int32, false),
        Field::new("e", DataType::Int32, false),
        Field::new("badQuestion", DataType::Boolean, false),
        Field::new("noAnswer", DataType::Boolean, false),
    ]
}

fn question_type() -> DataType {
    let mut validated = span_fields();
    validated.push(Field::new("count", DataType::Int32, false));

    DataType::Struct(vec![
        Field::utf8("q"),
        Field::new("isAnswerAbsent", DataType::Float64, false),
        Field::new("isQuestionBad", DataType::Float64, false),
        Field::new("consensus", DataType::Struct(span_fields()), false),
        Field::new(
            "answers",
            DataType::List(Box::new(DataType::Struct(vec![Field::new(
                "sourcerAnswers",
                DataType::List(Box::new(DataType::Struct(span_fields()))),
                false,
            )]))),
            false,
        ),
        Field::new(
            "validated_answers",
            DataType::List(Box::new(DataType::Struct(validated))),
            false,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimited_schemas_are_flat_strings() {
        let s = Variant::CombinedDelimited.schema();
        assert_eq!(
            s.names(),
            vec!["story_id", "story_text", "question", "answer_char_ranges"]
        );
        assert!(s.fields.iter().all(|f| f.data_type == DataType::Utf8));

        let s = Variant::Split.schema();
        assert_eq!(s.index_of("answer_token_ranges"), Some(3));
        assert_eq!(s.index_of("answer_char_ranges"), None);
    }

    #[test]
    fn structured_schema_nests_questions() {
        let s = Variant::CombinedStructured.schema();
        let questions = s.field(s.index_of("questions").unwrap()).unwrap();
        let DataType::List(inner) = &questions.data_type else {
            panic!("questions should be a list");
        };
        let DataType::Struct(fields) = inner.as_ref() else {
            panic!("question entries should be structs");
        };
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "q",
                "isAnswerAbsent",
                "isQuestionBad",
                "consensus",
                "answers",
                "validated_answers"
            ]
        );
    }
}
