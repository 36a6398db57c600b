// src/domain/validation.rs
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::fmt;

pub const BLANK: &str = "can't be blank";

/// Field-level error messages collected while validating a record.
///
/// Fields keep the order in which their first error was added, so the
/// serialized object and the full messages follow the order rules ran in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: Vec<(&'static str, Vec<String>)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        let message = message.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.fields.push((field, vec![message])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|(name, _)| *name == field)
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// Messages prefixed with the humanized field name, e.g. `Title can't be blank`.
    pub fn full_messages(&self) -> Vec<String> {
        self.fields
            .iter()
            .flat_map(|(name, messages)| {
                let label = humanize(name);
                messages
                    .iter()
                    .map(move |message| format!("{label} {message}"))
            })
            .collect()
    }

    /// `Ok(value)` when nothing was recorded, otherwise the collected errors.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, messages) in &self.fields {
            map.serialize_entry(name, messages)?;
        }
        map.end()
    }
}

fn humanize(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Blank means missing, empty, or whitespace only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Length in characters; a missing value counts as zero.
pub fn char_len(value: Option<&str>) -> usize {
    value.map_or(0, |v| v.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_groups_messages_by_field_in_insertion_order() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "first");
        errors.add("content", "second");
        errors.add("title", "third");

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["title", "content"]);
        assert_eq!(errors.get("title"), ["first", "third"]);
        assert!(errors.get("missing").is_empty());
    }

    #[test]
    fn serializes_as_object_of_arrays() {
        let mut errors = ValidationErrors::new();
        errors.add("title", BLANK);
        errors.add("content", BLANK);

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(
            json,
            r#"{"title":["can't be blank"],"content":["can't be blank"]}"#
        );
    }

    #[test]
    fn full_messages_capitalize_field_names() {
        let mut errors = ValidationErrors::new();
        errors.add("created_at", "is odd");
        errors.add("title", BLANK);

        assert_eq!(
            errors.full_messages(),
            vec!["Created at is odd", "Title can't be blank"]
        );
        assert_eq!(errors.to_string(), "Created at is odd, Title can't be blank");
    }

    #[test]
    fn blank_and_length_helpers() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some(" \t\n")));
        assert!(!is_blank(Some(" a ")));

        assert_eq!(char_len(None), 0);
        assert_eq!(char_len(Some("晴れ")), 2);
    }

    #[test]
    fn into_result_only_fails_with_errors() {
        assert_eq!(ValidationErrors::new().into_result(7), Ok(7));

        let mut errors = ValidationErrors::new();
        errors.add("title", BLANK);
        assert!(errors.into_result(7).is_err());
    }
}
