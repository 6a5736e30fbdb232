use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

/// Marker describing which input a [`Text`] holds.
pub trait TextKind {
    const FIELD: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Title;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response;

impl TextKind for Title {
    const FIELD: &'static str = "job title";
}

impl TextKind for Response {
    const FIELD: &'static str = "answer";
}

/// User-supplied text that is guaranteed non-blank.
///
/// The original string is kept verbatim (including surrounding whitespace);
/// only the emptiness check looks at the trimmed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text<T>(String, PhantomData<T>);

pub type JobTitle = Text<Title>;
pub type AnswerText = Text<Response>;

impl<T: TextKind> Text<T> {
    /// # Errors
    ///
    /// Returns `TextError::Empty` when the input is empty after trimming.
    pub fn parse(s: impl Into<String>) -> Result<Self, TextError> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(TextError::Empty { field: T::FIELD });
        }
        Ok(Self(s, PhantomData))
    }
}

impl<T> Text<T> {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T> fmt::Display for Text<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<T> Serialize for Text<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de, T: TextKind> Deserialize<'de> for Text<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}
