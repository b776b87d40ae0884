//! Line-ending modes applied after a rendered line is written to a sink.
//!
//! A [`LineEndingMode`] pairs a name with the literal terminator sequence it
//! stands for. The built-in modes are exposed as associated constants and are
//! looked up by name through [`LineEndingMode::from_name`], which matches
//! ASCII case-insensitively. Equality is defined by the terminator payload,
//! so a custom mode built with [`LineEndingMode::custom`] that carries
//! `"\r\n"` is interchangeable with [`LineEndingMode::CRLF`].
//!
//! ```
//! use quill_config::LineEndingMode;
//!
//! let mode: LineEndingMode = "crlf".parse().expect("known mode");
//! assert_eq!(mode, LineEndingMode::CRLF);
//! assert_eq!(mode.newline(), "\r\n");
//! assert_eq!(mode.to_string(), "CRLF");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

#[cfg(windows)]
const NATIVE_NEWLINE: &str = "\r\n";
#[cfg(not(windows))]
const NATIVE_NEWLINE: &str = "\n";

/// Names of the built-in line-ending modes.
///
/// Parsing is ASCII case-insensitive, so `"crlf"`, `"CrLf"` and `"CRLF"`
/// all resolve to [`LineEndingName::Crlf`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum LineEndingName {
    /// Host-native terminator.
    Default,
    /// Carriage return followed by line feed.
    #[strum(serialize = "CRLF")]
    Crlf,
    /// Carriage return only.
    #[strum(serialize = "CR")]
    Cr,
    /// Line feed only.
    #[strum(serialize = "LF")]
    Lf,
    /// A single NUL byte.
    Null,
    /// No terminator at all.
    #[strum(serialize = "None")]
    Empty,
}

impl LineEndingName {
    /// Returns the built-in mode carrying this name.
    #[must_use]
    pub const fn mode(self) -> LineEndingMode {
        match self {
            Self::Default => LineEndingMode::DEFAULT,
            Self::Crlf => LineEndingMode::CRLF,
            Self::Cr => LineEndingMode::CR,
            Self::Lf => LineEndingMode::LF,
            Self::Null => LineEndingMode::NULL,
            Self::Empty => LineEndingMode::NONE,
        }
    }
}

/// Errors raised while converting text into a [`LineEndingMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineEndingModeParseError {
    /// The text matched none of the built-in mode names.
    #[error("unknown line ending mode '{0}' (expected Default, CRLF, CR, LF, Null or None)")]
    UnknownName(String),
}

/// A named line terminator.
///
/// Values are immutable and `'static`; copying one is free. Two values compare
/// equal when their terminator sequences match, regardless of their names.
///
/// Serde reads a built-in name and writes [`LineEndingMode::builtin_name`],
/// so a custom mode serialises under the built-in name sharing its payload.
#[derive(Debug, Clone, Copy)]
pub struct LineEndingMode {
    name: &'static str,
    newline: &'static str,
}

impl LineEndingMode {
    /// The host platform's native terminator.
    pub const DEFAULT: Self = Self::custom("Default", NATIVE_NEWLINE);
    /// `"\r\n"`.
    pub const CRLF: Self = Self::custom("CRLF", "\r\n");
    /// `"\r"`.
    pub const CR: Self = Self::custom("CR", "\r");
    /// `"\n"`.
    pub const LF: Self = Self::custom("LF", "\n");
    /// `"\0"`.
    pub const NULL: Self = Self::custom("Null", "\0");
    /// No terminator.
    pub const NONE: Self = Self::custom("None", "");

    /// Every built-in mode, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::DEFAULT,
        Self::CRLF,
        Self::CR,
        Self::LF,
        Self::NULL,
        Self::NONE,
    ];

    /// Builds a mode outside the built-in set.
    ///
    /// Custom modes are not reachable through [`LineEndingMode::from_name`];
    /// they exist so embedding code can describe its own terminators while
    /// still comparing equal to a built-in with the same payload.
    #[must_use]
    pub const fn custom(name: &'static str, newline: &'static str) -> Self {
        Self { name, newline }
    }

    /// Resolves a built-in mode by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`LineEndingModeParseError::UnknownName`] carrying `name` when
    /// it matches no built-in mode.
    pub fn from_name(name: &str) -> Result<Self, LineEndingModeParseError> {
        LineEndingName::from_str(name)
            .map(LineEndingName::mode)
            .map_err(|_| LineEndingModeParseError::UnknownName(name.to_owned()))
    }

    /// Returns the mode name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the terminator sequence.
    #[must_use]
    pub const fn newline(&self) -> &'static str {
        self.newline
    }

    /// Returns the name of the built-in mode equal to this one.
    ///
    /// A built-in keeps its own name. A custom mode takes the name of the
    /// explicit built-in with the same payload; `Default` is never chosen for
    /// a custom mode because its payload differs between hosts.
    #[must_use]
    pub fn builtin_name(&self) -> Option<&'static str> {
        if Self::from_name(self.name).is_ok_and(|builtin| builtin == *self) {
            return Some(self.name);
        }
        Self::ALL
            .iter()
            .filter(|builtin| builtin.name != Self::DEFAULT.name)
            .find(|builtin| builtin.newline == self.newline)
            .map(|builtin| builtin.name)
    }

    /// Returns the terminator sequence as bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'static [u8] {
        self.newline.as_bytes()
    }
}

impl Default for LineEndingMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PartialEq for LineEndingMode {
    fn eq(&self, other: &Self) -> bool {
        self.newline == other.newline
    }
}

impl Eq for LineEndingMode {}

impl Hash for LineEndingMode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.newline.hash(state);
    }
}

impl fmt::Display for LineEndingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for LineEndingMode {
    type Err = LineEndingModeParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_name(input)
    }
}

impl TryFrom<&str> for LineEndingMode {
    type Error = LineEndingModeParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_name(value)
    }
}

impl TryFrom<String> for LineEndingMode {
    type Error = LineEndingModeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

impl Serialize for LineEndingMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name = self.builtin_name().ok_or_else(|| {
            ser::Error::custom(format!(
                "line ending mode '{}' has no built-in name for its terminator",
                self.name
            ))
        })?;
        serializer.serialize_str(name)
    }
}

impl<'de> Deserialize<'de> for LineEndingMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).map_err(de::Error::custom)
    }
}
