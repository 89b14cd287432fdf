//! Conflict and priority resolution.
//!
//! Every rule is evaluated at every position; this module decides which of
//! the rules that matched at one position actually apply.
//!
//! ```text
//! matches ──▶ sort by (category priority, rule priority) desc, stable
//!         ──▶ for each candidate:
//!               conflicts with an accepted rule?   -> skip
//!               category already has a winner?     -> skip
//!               otherwise accept, record, update the running phoneme
//! ```
//!
//! The sort is stable, so rules of equal rank keep catalog order.

use std::cmp::Reverse;

use tracing::trace;

use super::catalog::{Catalog, RuleId};
use super::window::Window;
use crate::CategoryMask;
use crate::result::RuleApplication;

/// Outcome of resolving one position.
#[derive(Debug, Clone)]
pub(crate) struct Resolution {
    /// Phoneme after every accepted rule's effect.
    pub phoneme: String,
    /// Accepted applications, in acceptance order.
    pub applications: Vec<RuleApplication>,
    /// Matched rules that were not accepted.
    pub suppressed: usize,
}

pub(crate) fn resolve(catalog: &Catalog, window: &Window<'_>, base_phoneme: &str, mut matches: Vec<RuleId>) -> Resolution {
    matches.sort_by_key(|&id| Reverse(catalog.rank(id)));

    let mut phoneme = base_phoneme.to_string();
    let mut accepted: Vec<RuleId> = Vec::with_capacity(matches.len());
    let mut decided = CategoryMask::empty();
    let mut applications = Vec::with_capacity(matches.len());
    let mut suppressed = 0;

    for id in matches {
        let rule = &catalog.rules[id];

        if let Some(&winner) = accepted.iter().find(|&&a| catalog.in_conflict(a, id)) {
            trace!(position = window.pos(), rule = rule.name, by = catalog.rules[winner].name, "suppressed by conflict");
            suppressed += 1;
            continue;
        }

        if decided.contains(rule.category.mask()) {
            trace!(position = window.pos(), rule = rule.name, category = %rule.category, "category already decided");
            suppressed += 1;
            continue;
        }

        let phoneme_after = rule.effect.apply(&phoneme);
        applications.push(RuleApplication {
            rule: rule.name,
            category: rule.category,
            position: window.pos(),
            character: window.current(),
            phoneme_before: std::mem::replace(&mut phoneme, phoneme_after.clone()),
            phoneme_after,
            attribute: rule.attribute,
            duration: rule.duration,
            context: window.ctx,
        });
        decided |= rule.category.mask();
        accepted.push(id);
    }

    Resolution { phoneme, applications, suppressed }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::api::Tradition;
    use crate::rules::letters::LetterTable;
    use crate::rules::profile::Profile;
    use crate::{Category, PhonemeEffect, Rule};

    fn always(name: &'static str, category: Category, duration: u32, effect: PhonemeEffect) -> Rule {
        let mut rule = rule! {
            name: "always",
            category: Category::Hams,
            duration: 1,
            attribute: "x",
            description: "matches everywhere",
            when: |_w| true,
        };
        rule.name = name;
        rule.category = category;
        rule.duration = duration;
        rule.effect = effect;
        rule
    }

    fn catalog(rules: Vec<Rule>, conflicts: Vec<(&'static str, &'static [&'static str])>) -> Catalog {
        let priorities = HashMap::from([(Category::Iqlab, 85), (Category::Idgham, 80), (Category::Izhaar, 70), (Category::Hams, 20)]);
        let profile = Profile { letters: LetterTable::hafs(), priorities, conflicts };
        Catalog::compile(Tradition::Hafs, rules, profile).unwrap()
    }

    fn run(catalog: &Catalog, text: &str) -> Resolution {
        let chars: Vec<char> = text.chars().collect();
        let window = Window::new(&chars, 0, &catalog.letters);
        let matches = (0..catalog.rules.len()).filter(|&id| catalog.rules[id].matches(&window)).collect();
        resolve(catalog, &window, "n", matches)
    }

    fn names(resolution: &Resolution) -> Vec<&'static str> {
        resolution.applications.iter().map(|a| a.rule).collect()
    }

    #[test]
    fn higher_category_priority_goes_first() {
        let catalog = catalog(
            vec![
                always("low", Category::Hams, 1, PhonemeEffect::Keep),
                always("high", Category::Iqlab, 2, PhonemeEffect::Keep),
            ],
            vec![],
        );
        assert_eq!(names(&run(&catalog, "ن")), vec!["high", "low"]);
    }

    #[test]
    fn one_winner_per_category() {
        let catalog = catalog(
            vec![
                always("first", Category::Idgham, 2, PhonemeEffect::Keep),
                always("second", Category::Idgham, 1, PhonemeEffect::Keep),
            ],
            vec![],
        );
        let resolution = run(&catalog, "ن");
        assert_eq!(names(&resolution), vec!["first"]);
        assert_eq!(resolution.suppressed, 1);
    }

    #[test]
    fn accepted_rule_suppresses_named_conflicts() {
        let catalog = catalog(
            vec![
                always("clear", Category::Izhaar, 1, PhonemeEffect::Keep),
                always("merge", Category::Idgham, 2, PhonemeEffect::Elide),
            ],
            vec![("merge", &["clear"])],
        );
        let resolution = run(&catalog, "ن");
        assert_eq!(names(&resolution), vec!["merge"]);
        assert_eq!(resolution.phoneme, "");
    }

    #[test]
    fn candidate_listing_an_accepted_rule_is_skipped() {
        let catalog = catalog(
            vec![
                always("convert", Category::Iqlab, 2, PhonemeEffect::Replace("m")),
                always("clear", Category::Izhaar, 1, PhonemeEffect::Keep),
            ],
            vec![("clear", &["convert"])],
        );
        assert_eq!(names(&run(&catalog, "ن")), vec!["convert"]);
    }

    #[test]
    fn phoneme_effects_chain_in_acceptance_order() {
        let catalog = catalog(
            vec![
                always("convert", Category::Iqlab, 2, PhonemeEffect::Replace("m")),
                always("tag", Category::Hams, 1, PhonemeEffect::Keep),
            ],
            vec![],
        );
        let resolution = run(&catalog, "ن");
        assert_eq!(resolution.phoneme, "m");
        let convert = &resolution.applications[0];
        assert_eq!((convert.phoneme_before.as_str(), convert.phoneme_after.as_str()), ("n", "m"));
        let tag = &resolution.applications[1];
        assert_eq!((tag.phoneme_before.as_str(), tag.phoneme_after.as_str()), ("m", "m"));
        assert_eq!(tag.position, 0);
        assert_eq!(tag.character, 'ن');
    }

    #[test]
    fn no_matches_keeps_base_phoneme() {
        let catalog = catalog(vec![], vec![]);
        let resolution = run(&catalog, "ن");
        assert_eq!(resolution.phoneme, "n");
        assert!(resolution.applications.is_empty());
        assert_eq!(resolution.suppressed, 0);
    }
}
