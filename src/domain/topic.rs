//! Topic types
//!
//! A topic is entered as a `TopicInput` (name plus two ratings) and becomes a
//! weighted `Topic` once the whole list is known.

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// A difficulty or priority rating, always within `[1, 5]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, FieldError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(FieldError::Rating)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A topic as collected from the user, before weighting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicInput {
    /// Name as typed; `None` when left blank
    pub name: Option<String>,
    pub difficulty: Rating,
    pub priority: Rating,
}

impl TopicInput {
    pub fn new(name: impl Into<String>, difficulty: Rating, priority: Rating) -> Self {
        let name = name.into();
        let name = name.trim();
        Self {
            name: (!name.is_empty()).then(|| name.to_string()),
            difficulty,
            priority,
        }
    }

    /// Name to display, falling back to `Topic N` for the 0-based `index`
    pub fn display_name(&self, index: usize) -> String {
        self.name.clone().unwrap_or_else(|| format!("Topic {}", index + 1))
    }

    /// Difficulty plus priority
    pub fn weight(&self) -> u32 {
        u32::from(self.difficulty.value()) + u32::from(self.priority.value())
    }
}

/// A weighted topic. Built once by the allocator and never changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topic {
    pub name: String,
    pub difficulty: Rating,
    pub priority: Rating,
    pub weight: u32,
    /// Share of the total weight, in `[0, 1]`
    pub proportion: f64,
}
