use thiserror::Error;

use crate::Category;

/// Construction-time failures. Annotating text never fails; these only surface
/// when a tradition tag is unknown or a rule catalog is inconsistent with its
/// priority and conflict tables.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown recitation tradition '{0}'")]
    UnknownTradition(String),

    #[error("rule '{rule}' belongs to category '{category}', which has no priority entry")]
    MissingPriority { rule: &'static str, category: Category },

    #[error("rule '{0}' is declared more than once")]
    DuplicateRule(&'static str),

    #[error("conflict table entry '{owner}' refers to unknown rule '{target}'")]
    UnknownConflictRule { owner: &'static str, target: &'static str },

    #[error("rule '{0}' has a zero duration")]
    ZeroDuration(&'static str),
}
