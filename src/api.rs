use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::engine::{Catalog, RunMetrics, Scanner};
use crate::error::EngineError;
use crate::report::{RuleExtraction, VerseAnalysis};
use crate::result::ProcessingResult;
use crate::rules::letters::LetterClass;
use crate::rules::phonemes::PhonemeEntry;
use crate::rules::profile::Profile;
use crate::{Rule, rules};

static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(|| match Engine::new(Tradition::default()) {
    Ok(engine) => engine,
    Err(err) => panic!("built-in rule catalog is misconfigured: {err}"),
});

/// Recitation tradition selecting the letter tables, priorities and
/// conflicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tradition {
    #[default]
    Hafs,
}

impl Tradition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tradition::Hafs => "hafs",
        }
    }

    pub(crate) fn profile(&self) -> Profile {
        match self {
            Tradition::Hafs => Profile::hafs(),
        }
    }

    pub(crate) fn rules(&self) -> Vec<Rule> {
        match self {
            Tradition::Hafs => rules::get(),
        }
    }
}

impl fmt::Display for Tradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tradition {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hafs" => Ok(Tradition::Hafs),
            _ => Err(EngineError::UnknownTradition(s.to_string())),
        }
    }
}

/// Options that affect a single annotation call.
///
/// Output never depends on these; they only change how the work is done.
#[derive(Debug, Clone)]
pub struct Options {
    /// Evaluate positions on the rayon pool. Ignored without the `parallel`
    /// feature.
    pub parallel: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { parallel: cfg!(feature = "parallel") }
    }
}

/// Result from [`Engine::annotate_verbose_with`].
#[derive(Debug, Clone)]
pub struct AnnotationVerbose {
    pub result: ProcessingResult,
    pub metrics: RunMetrics,
    /// Catalog rule names in declaration order.
    pub rules: Vec<&'static str>,
}

/// A compiled rule catalog for one tradition.
///
/// Construction validates the catalog; annotating never fails. An `Engine`
/// holds no per-call state and can be shared across threads.
///
/// # Example
/// ```
/// use tartil::{Engine, Tradition};
///
/// let engine = Engine::new(Tradition::Hafs).unwrap();
/// let result = engine.annotate("نب");
/// assert_eq!(result.phoneme_string(), "mb");
/// ```
#[derive(Debug)]
pub struct Engine {
    catalog: Catalog,
}

impl Engine {
    pub fn new(tradition: Tradition) -> Result<Self, EngineError> {
        Self::from_parts(tradition, tradition.rules(), tradition.profile())
    }

    pub(crate) fn from_parts(tradition: Tradition, rules: Vec<Rule>, profile: Profile) -> Result<Self, EngineError> {
        Ok(Engine { catalog: Catalog::compile(tradition, rules, profile)? })
    }

    pub fn tradition(&self) -> Tradition {
        self.catalog.tradition
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.catalog.rules.iter().map(|r| r.name).collect()
    }

    /// Letter classes `c` belongs to under this engine's tradition.
    pub fn classify(&self, c: char) -> LetterClass {
        self.catalog.letters.class_of(c)
    }

    /// Long-vowel phoneme of a madd letter.
    pub fn long_vowel(&self, c: char) -> Option<&'static str> {
        self.catalog.letters.long_vowel(c)
    }

    /// Base phoneme entry for `c`, or `None` for unrecognized characters.
    pub fn phoneme_entry(&self, c: char) -> Option<&PhonemeEntry> {
        self.catalog.letters.phoneme(c)
    }

    pub fn annotate(&self, text: &str) -> ProcessingResult {
        self.annotate_with(text, &Options::default())
    }

    pub fn annotate_with(&self, text: &str, options: &Options) -> ProcessingResult {
        Scanner::new(&self.catalog, text).run(options).result
    }

    /// Like [`Engine::annotate_with`], also returning run metrics and the
    /// catalog's rule names.
    pub fn annotate_verbose_with(&self, text: &str, options: &Options) -> AnnotationVerbose {
        let run = Scanner::new(&self.catalog, text).run(options);
        AnnotationVerbose { result: run.result, metrics: run.metrics, rules: self.rule_names() }
    }

    /// Annotates independent texts, in parallel when the `parallel` feature
    /// is enabled. Output order matches input order.
    pub fn annotate_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<ProcessingResult> {
        let sequential = Options { parallel: false };

        #[cfg(feature = "parallel")]
        let results: Vec<ProcessingResult> = {
            use rayon::prelude::*;
            texts.par_iter().map(|text| self.annotate_with(text.as_ref(), &sequential)).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<ProcessingResult> =
            texts.iter().map(|text| self.annotate_with(text.as_ref(), &sequential)).collect();

        results
    }
}

/// Annotate `text` with the default (Hafs) engine.
///
/// # Example
/// ```
/// let result = tartil::annotate("قَدْ");
/// assert_eq!(result.len(), 4);
/// assert!(result.applications.iter().any(|a| a.rule == "qalqalah_kubra"));
/// ```
pub fn annotate(text: &str) -> ProcessingResult {
    DEFAULT_ENGINE.annotate(text)
}

pub fn annotate_with(text: &str, options: &Options) -> ProcessingResult {
    DEFAULT_ENGINE.annotate_with(text, options)
}

/// Rules found in `text`, grouped by category, without the phonetic output.
pub fn extract_rules(text: &str) -> RuleExtraction {
    RuleExtraction::from_result(&annotate(text))
}

pub fn analyze_verse(text: &str) -> VerseAnalysis {
    annotate(text).analysis()
}

/// Fixed-width text report for `text`.
pub fn format_report(text: &str, detailed: bool) -> String {
    annotate(text).report(detailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    #[test]
    fn tradition_from_str() {
        assert_eq!("hafs".parse::<Tradition>(), Ok(Tradition::Hafs));
        assert_eq!(" HAFS \n".parse::<Tradition>(), Ok(Tradition::Hafs));
        assert_eq!("warsh".parse::<Tradition>(), Err(EngineError::UnknownTradition("warsh".to_string())));
        assert_eq!(Tradition::Hafs.to_string(), "hafs");
    }

    #[test]
    fn engine_exposes_catalog() {
        let engine = Engine::new(Tradition::Hafs).unwrap();
        let names = engine.rule_names();
        assert_eq!(names.len(), 25);
        assert_eq!(names.first(), Some(&"izhaar_halqi"));
        assert_eq!(names.last(), Some(&"safeer"));
        assert_eq!(engine.tradition(), Tradition::Hafs);
        assert!(engine.classify('ق').contains(LetterClass::QALQALAH | LetterClass::HEAVY));
        assert_eq!(engine.phoneme_entry('ب').map(|e| e.phoneme), Some("b"));
        assert!(engine.phoneme_entry('x').is_none());
        assert_eq!(engine.long_vowel('و'), Some("ū"));
        assert_eq!(engine.long_vowel('ب'), None);
    }

    #[test]
    fn misconfigured_catalog_fails_construction() {
        let mut profile = Profile::hafs();
        profile.priorities.remove(&Category::Madd);
        let err = Engine::from_parts(Tradition::Hafs, rules::get(), profile).unwrap_err();
        assert!(matches!(err, EngineError::MissingPriority { category: Category::Madd, .. }));
        assert!(err.to_string().contains("madd"));
    }

    #[test]
    fn verbose_includes_metrics_and_rules() {
        let engine = Engine::new(Tradition::Hafs).unwrap();
        let run = engine.annotate_verbose_with("نخ", &Options::default());
        assert_eq!(run.result.len(), 2);
        assert_eq!(run.metrics.positions, 2);
        assert_eq!(run.metrics.accepted, 4);
        assert_eq!(run.rules.len(), 25);
    }

    #[test]
    fn batch_preserves_order() {
        let engine = Engine::new(Tradition::Hafs).unwrap();
        let texts = ["نب", "", "قَدْ"];
        let results = engine.annotate_batch(&texts);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].phoneme_string(), "mb");
        assert!(results[1].is_empty());
        assert_eq!(results[2].original_text, "قَدْ");
    }

    #[test]
    fn free_functions_use_default_engine() {
        let result = annotate("نخ");
        assert_eq!(result.metadata.tradition, Tradition::Hafs);
        assert_eq!(extract_rules("نخ").total_rules_found, 4);
        assert_eq!(analyze_verse("نخ").statistics.total_rules, 4);
        assert!(format_report("نخ", false).starts_with(&"=".repeat(80)));
        assert_eq!(annotate_with("نخ", &Options { parallel: false }), result);
    }
}
