//! Annotation output.
//!
//! A [`ProcessingResult`] holds three sequences (phonemes, attributes and
//! durations), each aligned 1:1 with the chars of the input, plus the log
//! of every accepted rule.

use std::ops::Range;

use serde::ser::{Serialize, Serializer};

use crate::Category;
use crate::api::Tradition;
use crate::engine::LetterContext;
use crate::report::{self, CategorySummary, VerseAnalysis};

/// One accepted rule at one position.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RuleApplication {
    pub rule: &'static str,
    pub category: Category,
    /// Zero-based char offset into the original text.
    pub position: usize,
    pub character: char,
    pub phoneme_before: String,
    pub phoneme_after: String,
    pub attribute: &'static str,
    pub duration: u32,
    pub context: LetterContext,
}

/// Append-only application log, grouped by position.
///
/// Records are stored in position order; `spans[p]` is the range of records
/// accepted at position `p`, so per-position lookup is a slice, not a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleLog {
    records: Vec<RuleApplication>,
    spans: Vec<Range<usize>>,
}

impl RuleLog {
    pub(crate) fn with_capacity(positions: usize) -> Self {
        RuleLog { records: Vec::new(), spans: Vec::with_capacity(positions) }
    }

    /// Appends the applications of the next position (possibly none).
    pub(crate) fn push_position(&mut self, applications: impl IntoIterator<Item = RuleApplication>) {
        let start = self.records.len();
        self.records.extend(applications);
        self.spans.push(start..self.records.len());
    }

    /// Applications accepted at `position` (empty when out of range).
    pub fn at(&self, position: usize) -> &[RuleApplication] {
        match self.spans.get(position) {
            Some(span) => &self.records[span.clone()],
            None => &[],
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleApplication> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct rule names in first-seen order.
    pub fn unique_rule_names(&self) -> Vec<&'static str> {
        let mut seen = indexmap::IndexSet::new();
        for app in &self.records {
            seen.insert(app.rule);
        }
        seen.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a RuleLog {
    type Item = &'a RuleApplication;
    type IntoIter = std::slice::Iter<'a, RuleApplication>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Serialize for RuleLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.records)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Metadata {
    pub tradition: Tradition,
    pub char_count: usize,
    pub rule_count: usize,
    pub unique_rules: usize,
}

/// Per-position row of [`ProcessingResult::breakdown`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PositionBreakdown {
    pub position: usize,
    /// Sum of the durations of all earlier positions.
    pub offset: u32,
    pub character: char,
    pub phoneme: String,
    pub attribute: String,
    pub duration: u32,
    pub rules: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ProcessingResult {
    pub original_text: String,
    pub normalized_text: String,
    pub phonemes: Vec<String>,
    pub attributes: Vec<String>,
    pub durations: Vec<u32>,
    pub applications: RuleLog,
    /// Char offsets of whitespace in the normalized text.
    pub word_boundaries: Vec<usize>,
    pub metadata: Metadata,
}

impl ProcessingResult {
    /// Number of annotated positions (chars of the original text).
    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }

    pub fn phoneme_string(&self) -> String {
        self.phonemes.concat()
    }

    pub fn attribute_string(&self) -> String {
        self.attributes.join(" ")
    }

    pub fn breakdown(&self) -> Vec<PositionBreakdown> {
        let mut offset = 0;
        self.original_text
            .chars()
            .enumerate()
            .map(|(position, character)| {
                let duration = self.durations[position];
                let row = PositionBreakdown {
                    position,
                    offset,
                    character,
                    phoneme: self.phonemes[position].clone(),
                    attribute: self.attributes[position].clone(),
                    duration,
                    rules: self.applications.at(position).iter().map(|a| a.rule).collect(),
                };
                offset += duration;
                row
            })
            .collect()
    }

    pub fn summary(&self) -> CategorySummary {
        report::summarize(&self.applications)
    }

    pub fn analysis(&self) -> VerseAnalysis {
        VerseAnalysis::from_result(self)
    }

    /// Fixed-width text report; `detailed` adds the per-application table.
    pub fn report(&self, detailed: bool) -> String {
        report::render(self, detailed)
    }
}
