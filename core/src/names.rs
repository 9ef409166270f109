//! Mutable sequence of names
//!
//! `NameList` is the shared state the deferred-argument demos operate on.
//! Removals mutate the list in place and hand back the removed name.

use std::collections::VecDeque;
use std::fmt;

use thiserror::Error;
use tracing::trace;

/// Initial contents of the demonstration list.
pub const KAKAO_FRIENDS: [&str; 6] = ["muzi", "ryon", "apeach", "neo", "tube", "con"];

/// Removal end of a `NameList`, carried in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    First,
    Last,
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Removal::First => write!(f, "remove_first"),
            Removal::Last => write!(f, "remove_last"),
        }
    }
}

/// Precondition violations on a `NameList`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameListError {
    #[error("{op}: cannot remove from an empty list")]
    Empty { op: Removal },
}

/// Ordered, mutable sequence of names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    names: VecDeque<String>,
}

impl NameList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The six kakao friends, in their canonical order.
    pub fn kakao_friends() -> Self {
        KAKAO_FRIENDS.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push_back(name.into());
    }

    /// Remove and return the first name.
    ///
    /// Fails with `NameListError::Empty` instead of returning a placeholder
    /// when there is nothing left to remove.
    pub fn remove_first(&mut self) -> Result<String, NameListError> {
        let name = self
            .names
            .pop_front()
            .ok_or(NameListError::Empty { op: Removal::First })?;
        trace!(%name, remaining = self.names.len(), "removed first name");
        Ok(name)
    }

    /// Remove and return the last name.
    pub fn remove_last(&mut self) -> Result<String, NameListError> {
        let name = self
            .names
            .pop_back()
            .ok_or(NameListError::Empty { op: Removal::Last })?;
        trace!(%name, remaining = self.names.len(), "removed last name");
        Ok(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for NameList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        NameList {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for NameList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{name}\"")?;
        }
        write!(f, "]")
    }
}
