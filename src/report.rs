//! Summaries and the fixed-width text report.
//!
//! All groupings keep first-seen order (categories and rule names appear in
//! the order the log first mentions them), so reports are byte-identical
//! across runs.

use indexmap::IndexMap;
use serde::Serialize;

use crate::Category;
use crate::engine::LetterContext;
use crate::result::{ProcessingResult, RuleApplication, RuleLog};

const RULE_WIDTH: usize = 80;

// --- Category summary --------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleCount {
    pub name: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    /// Applications of any rule in this category.
    pub applications: usize,
    pub rules: Vec<RuleCount>,
}

/// Application log grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategorySummary {
    pub groups: Vec<CategoryGroup>,
}

impl CategorySummary {
    pub fn get(&self, category: Category) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.category == category)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryGroup> {
        self.groups.iter()
    }
}

pub(crate) fn summarize(log: &RuleLog) -> CategorySummary {
    let mut grouped: IndexMap<Category, (usize, IndexMap<&'static str, usize>)> = IndexMap::new();
    for app in log {
        let (total, rules) = grouped.entry(app.category).or_default();
        *total += 1;
        *rules.entry(app.rule).or_default() += 1;
    }

    let groups = grouped
        .into_iter()
        .map(|(category, (applications, rules))| CategoryGroup {
            category,
            applications,
            rules: rules.into_iter().map(|(name, count)| RuleCount { name, count }).collect(),
        })
        .collect();

    CategorySummary { groups }
}

// --- Rule extraction ---------------------------------------------------------

/// One application as listed under its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub rule: &'static str,
    pub position: usize,
    pub character: char,
    pub context: LetterContext,
}

/// One application in the flat list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedRule {
    pub rule: &'static str,
    pub category: Category,
    pub position: usize,
    pub character: char,
    pub attribute: &'static str,
    pub duration: u32,
}

/// Rules found in a text, without the phonetic sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleExtraction {
    pub text: String,
    pub total_rules_found: usize,
    pub unique_rules: Vec<&'static str>,
    pub rules_by_category: IndexMap<Category, Vec<CategoryEntry>>,
    pub rule_applications: Vec<AppliedRule>,
}

impl RuleExtraction {
    pub fn from_result(result: &ProcessingResult) -> Self {
        let mut rules_by_category: IndexMap<Category, Vec<CategoryEntry>> = IndexMap::new();
        for app in &result.applications {
            rules_by_category.entry(app.category).or_default().push(CategoryEntry {
                rule: app.rule,
                position: app.position,
                character: app.character,
                context: app.context,
            });
        }

        RuleExtraction {
            text: result.original_text.clone(),
            total_rules_found: result.applications.len(),
            unique_rules: result.applications.unique_rule_names(),
            rules_by_category,
            rule_applications: result
                .applications
                .iter()
                .map(|app| AppliedRule {
                    rule: app.rule,
                    category: app.category,
                    position: app.position,
                    character: app.character,
                    attribute: app.attribute,
                    duration: app.duration,
                })
                .collect(),
        }
    }
}

// --- Verse analysis ----------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseRule {
    pub rule: &'static str,
    pub category: Category,
    pub position: usize,
    pub character: char,
    /// Attribute code the rule emitted.
    pub effect: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseStatistics {
    pub total_chars: usize,
    pub total_rules: usize,
    pub unique_rules: usize,
    /// Categories in first-seen order.
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseAnalysis {
    pub text: String,
    pub phonetic: String,
    pub attributes: String,
    pub rules: Vec<VerseRule>,
    pub statistics: VerseStatistics,
}

impl VerseAnalysis {
    pub fn from_result(result: &ProcessingResult) -> Self {
        let rules = result
            .applications
            .iter()
            .map(|app| VerseRule {
                rule: app.rule,
                category: app.category,
                position: app.position,
                character: app.character,
                effect: app.attribute,
            })
            .collect();

        let mut categories = indexmap::IndexSet::new();
        categories.extend(result.applications.iter().map(|app| app.category));

        VerseAnalysis {
            text: result.original_text.clone(),
            phonetic: result.phoneme_string(),
            attributes: result.attribute_string(),
            rules,
            statistics: VerseStatistics {
                total_chars: result.metadata.char_count,
                total_rules: result.metadata.rule_count,
                unique_rules: result.metadata.unique_rules,
                categories: categories.into_iter().collect(),
            },
        }
    }
}

// --- Text report -------------------------------------------------------------

pub(crate) fn render(result: &ProcessingResult, detailed: bool) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut out: Vec<String> = vec![
        heavy.clone(),
        "TAJWEED RULES EXTRACTION - GENERIC SYSTEM".to_string(),
        heavy.clone(),
        format!("\nOriginal Text: {}", result.original_text),
        format!("Normalized: {}", result.normalized_text),
        format!("\nTotal Rules Found: {}", result.metadata.rule_count),
        format!("Unique Rules: {}", result.metadata.unique_rules),
        format!("\n{light}"),
        "RULES BY CATEGORY:".to_string(),
        light.clone(),
    ];

    for group in summarize(&result.applications).iter() {
        out.push(format!("\n{}: {} application(s)", group.category.as_str().to_uppercase(), group.applications));
        for rule in &group.rules {
            out.push(format!("  • {}: {} time(s)", rule.name, rule.count));
        }
    }

    if detailed {
        out.push(format!("\n{light}"));
        out.push("DETAILED BREAKDOWN:".to_string());
        out.push(light.clone());
        out.push(format!("{:<4} {:<4} {:<25} {:<15} {:<6} {:<4}", "Pos", "Char", "Rule", "Category", "Sifa", "Dur"));
        out.push(light);

        let mut rows: Vec<&RuleApplication> = result.applications.iter().collect();
        rows.sort_by_key(|app| app.position);
        for app in rows {
            out.push(format!(
                "{:<4} {:<4} {:<25} {:<15} {:<6} {:<4}",
                app.position,
                app.character,
                app.rule,
                app.category.as_str(),
                app.attribute,
                app.duration
            ));
        }
    }

    out.push(format!("\n{heavy}"));
    out.join("\n")
}
