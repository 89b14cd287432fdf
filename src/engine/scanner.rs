//! Left-to-right scan over the raw input.
//!
//! Each position is evaluated on its own: build a [`Window`], look up the base
//! phoneme, collect matching rules, resolve them. Evaluation reads only the
//! raw text, so positions may run on the rayon pool; assembly into the output
//! sequences always happens in position order.
//!
//! The scan advances exactly one char per step. A rule's duration is timing
//! metadata, never a skip distance.

use std::time::Instant;

use indexmap::IndexSet;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::catalog::{Catalog, RuleId};
use super::metrics::{PositionCounts, RunMetrics, RunResult};
use super::resolve::resolve;
use super::window::Window;
use crate::api::Options;
use crate::normalize::normalize;
use crate::result::{Metadata, ProcessingResult, RuleApplication, RuleLog};
use crate::rules::sifa;

/// Everything one position contributes to the result.
#[derive(Debug)]
struct Emitted {
    phoneme: String,
    attribute: String,
    duration: u32,
    applications: Vec<RuleApplication>,
    counts: PositionCounts,
}

impl Emitted {
    fn space() -> Self {
        Emitted {
            phoneme: " ".to_string(),
            attribute: " ".to_string(),
            duration: 1,
            applications: Vec::new(),
            counts: PositionCounts::default(),
        }
    }
}

pub(crate) struct Scanner<'a> {
    catalog: &'a Catalog,
    input: &'a str,
    text: Vec<char>,
}

impl<'a> Scanner<'a> {
    pub fn new(catalog: &'a Catalog, input: &'a str) -> Self {
        Scanner { catalog, input, text: input.chars().collect() }
    }

    fn evaluate(&self, pos: usize) -> Emitted {
        let c = self.text[pos];
        if c.is_whitespace() {
            return Emitted::space();
        }

        let window = Window::new(&self.text, pos, &self.catalog.letters);
        let (base_phoneme, base_attributes): (String, &[&str]) = match self.catalog.letters.phoneme(c) {
            Some(entry) => (entry.phoneme.to_string(), entry.attributes),
            None => (c.to_string(), &[]),
        };

        let matches: Vec<RuleId> =
            (0..self.catalog.rules.len()).filter(|&id| self.catalog.rules[id].matches(&window)).collect();
        let matched = matches.len();

        let resolution = resolve(self.catalog, &window, &base_phoneme, matches);

        let mut attributes: IndexSet<&str> = base_attributes.iter().copied().collect();
        attributes.extend(resolution.applications.iter().map(|app| app.attribute));
        let attribute = if attributes.is_empty() {
            sifa::NONE.to_string()
        } else {
            attributes.into_iter().collect::<String>()
        };

        let duration = resolution.applications.iter().map(|app| app.duration).max().unwrap_or(1);

        if matched > 0 {
            trace!(
                position = pos,
                matched,
                accepted = resolution.applications.len(),
                suppressed = resolution.suppressed,
                "resolved position"
            );
        }

        Emitted {
            phoneme: resolution.phoneme,
            attribute,
            duration,
            counts: PositionCounts {
                evaluated: self.catalog.rules.len(),
                matched,
                accepted: resolution.applications.len(),
                suppressed: resolution.suppressed,
            },
            applications: resolution.applications,
        }
    }

    /// Evaluates every position, on the rayon pool when requested.
    #[cfg(feature = "parallel")]
    fn evaluate_all(&self, options: &Options) -> Vec<Emitted> {
        if options.parallel {
            (0..self.text.len()).into_par_iter().map(|pos| self.evaluate(pos)).collect()
        } else {
            self.evaluate_sequential()
        }
    }

    /// Evaluates every position (parallel feature disabled).
    #[cfg(not(feature = "parallel"))]
    fn evaluate_all(&self, _options: &Options) -> Vec<Emitted> {
        self.evaluate_sequential()
    }

    fn evaluate_sequential(&self) -> Vec<Emitted> {
        (0..self.text.len()).map(|pos| self.evaluate(pos)).collect()
    }

    pub fn run(&self, options: &Options) -> RunResult {
        let start = Instant::now();
        let n = self.text.len();

        let mut metrics = RunMetrics::default();
        let mut phonemes = Vec::with_capacity(n);
        let mut attributes = Vec::with_capacity(n);
        let mut durations = Vec::with_capacity(n);
        let mut applications = RuleLog::with_capacity(n);

        for emitted in self.evaluate_all(options) {
            metrics += emitted.counts;
            phonemes.push(emitted.phoneme);
            attributes.push(emitted.attribute);
            durations.push(emitted.duration);
            applications.push_position(emitted.applications);
        }

        let normalized_text = normalize(self.input);
        let word_boundaries =
            normalized_text.chars().enumerate().filter(|(_, c)| c.is_whitespace()).map(|(i, _)| i).collect();

        let metadata = Metadata {
            tradition: self.catalog.tradition,
            char_count: n,
            rule_count: applications.len(),
            unique_rules: applications.unique_rule_names().len(),
        };

        metrics.total = start.elapsed();
        debug!(
            chars = n,
            applications = metadata.rule_count,
            unique = metadata.unique_rules,
            parallel = options.parallel,
            elapsed = ?metrics.total,
            "annotated text"
        );

        let result = ProcessingResult {
            original_text: self.input.to_string(),
            normalized_text,
            phonemes,
            attributes,
            durations,
            applications,
            word_boundaries,
            metadata,
        };

        RunResult { result, metrics }
    }
}
