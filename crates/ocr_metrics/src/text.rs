//! Boundary conversion from caller-supplied values into [`Text`].
//!
//! Every public entry point funnels its inputs through [`IntoText`] exactly
//! once; the rest of the pipeline only ever sees validated `Text`.

use crate::error::{MetricsError, Result};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;

/// An immutable sequence of Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Text(String);

impl Text {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in chars, not bytes.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.0
    }
}

/// Conversion of an arbitrary input into [`Text`], failing with
/// [`MetricsError::InvalidText`] when the value has no textual reading.
pub trait IntoText {
    fn into_text(self) -> Result<Text>;
}

impl IntoText for Text {
    fn into_text(self) -> Result<Text> {
        Ok(self)
    }
}

impl IntoText for &Text {
    fn into_text(self) -> Result<Text> {
        Ok(self.clone())
    }
}

impl IntoText for &str {
    fn into_text(self) -> Result<Text> {
        Ok(Text(self.to_owned()))
    }
}

impl IntoText for String {
    fn into_text(self) -> Result<Text> {
        Ok(Text(self))
    }
}

impl IntoText for &String {
    fn into_text(self) -> Result<Text> {
        Ok(Text(self.clone()))
    }
}

impl IntoText for Cow<'_, str> {
    fn into_text(self) -> Result<Text> {
        Ok(Text(self.into_owned()))
    }
}

impl IntoText for &[u8] {
    fn into_text(self) -> Result<Text> {
        std::str::from_utf8(self)
            .map(|s| Text(s.to_owned()))
            .map_err(|e| MetricsError::InvalidText(format!("invalid UTF-8: {e}")))
    }
}

impl IntoText for Vec<u8> {
    fn into_text(self) -> Result<Text> {
        String::from_utf8(self)
            .map(Text)
            .map_err(|e| MetricsError::InvalidText(format!("invalid UTF-8: {}", e.utf8_error())))
    }
}

impl IntoText for &OsStr {
    fn into_text(self) -> Result<Text> {
        self.to_str()
            .map(|s| Text(s.to_owned()))
            .ok_or_else(|| MetricsError::InvalidText(format!("non-Unicode OS string: {self:?}")))
    }
}

impl IntoText for OsString {
    fn into_text(self) -> Result<Text> {
        self.into_string()
            .map(Text)
            .map_err(|s| MetricsError::InvalidText(format!("non-Unicode OS string: {s:?}")))
    }
}

impl<T: IntoText> IntoText for Option<T> {
    fn into_text(self) -> Result<Text> {
        match self {
            Some(value) => value.into_text(),
            None => Err(MetricsError::InvalidText("text cannot be None".to_string())),
        }
    }
}
