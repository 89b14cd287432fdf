#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod normalize;
mod report;
mod result;
mod rules;

pub use api::{AnnotationVerbose, Engine, Options, Tradition, analyze_verse, annotate, annotate_with, extract_rules, format_report};
pub use engine::{LetterContext, RunMetrics};
pub use error::EngineError;
pub use normalize::normalize;
pub use report::{
    AppliedRule, CategoryEntry, CategoryGroup, CategorySummary, RuleCount, RuleExtraction, VerseAnalysis, VerseRule,
    VerseStatistics,
};
pub use result::{Metadata, PositionBreakdown, ProcessingResult, RuleApplication, RuleLog};
pub use rules::letters::LetterClass;
pub use rules::phonemes::PhonemeEntry;

use crate::engine::Window;
use serde::Serialize;

// --- Core types --------------------------------------------------------------

/// Rule families. The priority of each family comes from the tradition's
/// priority table, not from the enum itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Madd,
    NoonSakinah,
    MeemSakinah,
    Iqlab,
    Idgham,
    #[serde(rename = "ikhfa")]
    Ikhfaa,
    Izhaar,
    Qalqalah,
    Ghunnah,
    Tafkhim,
    Tarqeeq,
    LamDefinite,
    Hams,
    Jahr,
    Safeer,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Madd => "madd",
            Category::NoonSakinah => "noon_sakinah",
            Category::MeemSakinah => "meem_sakinah",
            Category::Iqlab => "iqlab",
            Category::Idgham => "idgham",
            Category::Ikhfaa => "ikhfa",
            Category::Izhaar => "izhaar",
            Category::Qalqalah => "qalqalah",
            Category::Ghunnah => "ghunnah",
            Category::Tafkhim => "tafkhim",
            Category::Tarqeeq => "tarqeeq",
            Category::LamDefinite => "lam_definite",
            Category::Hams => "hams",
            Category::Jahr => "jahr",
            Category::Safeer => "safeer",
        }
    }

    pub(crate) fn mask(&self) -> CategoryMask {
        match self {
            Category::Madd => CategoryMask::MADD,
            Category::NoonSakinah => CategoryMask::NOON_SAKINAH,
            Category::MeemSakinah => CategoryMask::MEEM_SAKINAH,
            Category::Iqlab => CategoryMask::IQLAB,
            Category::Idgham => CategoryMask::IDGHAM,
            Category::Ikhfaa => CategoryMask::IKHFAA,
            Category::Izhaar => CategoryMask::IZHAAR,
            Category::Qalqalah => CategoryMask::QALQALAH,
            Category::Ghunnah => CategoryMask::GHUNNAH,
            Category::Tafkhim => CategoryMask::TAFKHIM,
            Category::Tarqeeq => CategoryMask::TARQEEQ,
            Category::LamDefinite => CategoryMask::LAM_DEFINITE,
            Category::Hams => CategoryMask::HAMS,
            Category::Jahr => CategoryMask::JAHR,
            Category::Safeer => CategoryMask::SAFEER,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags::bitflags! {
    /// Tracks which categories already have a winner at a position.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) struct CategoryMask: u16 {
        const MADD         = 1 << 0;
        const NOON_SAKINAH = 1 << 1;
        const MEEM_SAKINAH = 1 << 2;
        const IQLAB        = 1 << 3;
        const IDGHAM       = 1 << 4;
        const IKHFAA       = 1 << 5;
        const IZHAAR       = 1 << 6;
        const QALQALAH     = 1 << 7;
        const GHUNNAH      = 1 << 8;
        const TAFKHIM      = 1 << 9;
        const TARQEEQ      = 1 << 10;
        const LAM_DEFINITE = 1 << 11;
        const HAMS         = 1 << 12;
        const JAHR         = 1 << 13;
        const SAFEER       = 1 << 14;
    }
}

/// What an accepted rule does to the running phoneme of its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PhonemeEffect {
    Keep,
    /// Overwrite the phoneme (conversion, e.g. noon to meem).
    Replace(&'static str),
    /// Collapse the phoneme to nothing (full assimilation).
    Elide,
}

impl PhonemeEffect {
    pub(crate) fn apply(&self, current: &str) -> String {
        match self {
            PhonemeEffect::Keep => current.to_string(),
            PhonemeEffect::Replace(phoneme) => (*phoneme).to_string(),
            PhonemeEffect::Elide => String::new(),
        }
    }
}

/// Rule predicates are pure functions of the raw input window. They never see
/// output emitted for earlier positions.
pub(crate) type Predicate = fn(&Window<'_>) -> bool;

/// A Tajweed rule: a name, the family it belongs to, the timing and attribute
/// it contributes when accepted, and the predicate deciding where it matches.
pub(crate) struct Rule {
    pub name: &'static str,
    pub category: Category,
    /// Duration in rhythmic counts.
    pub duration: u32,
    /// Attribute code appended to the position's attribute string.
    pub attribute: &'static str,
    pub effect: PhonemeEffect,
    /// Tie-break within a category (higher = preferred).
    pub priority: u16,
    pub description: &'static str,
    pub predicate: Predicate,
}

impl Rule {
    pub(crate) fn matches(&self, window: &Window<'_>) -> bool {
        (self.predicate)(window)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("duration", &self.duration)
            .field("attribute", &self.attribute)
            .field("effect", &self.effect)
            .field("priority", &self.priority)
            .field("description", &self.description)
            .field("predicate", &"<function>")
            .finish()
    }
}
