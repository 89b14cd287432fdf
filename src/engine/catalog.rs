//! Rule catalog compilation.
//!
//! Joins the rule list with a tradition [`Profile`] and checks that the two
//! agree. Every inconsistency is a programming error in the tables, so it is
//! reported once here and an engine is never built from a bad catalog.
//!
//! ## Invariants
//!
//! - `RuleId` is an index into `Catalog::rules`. `ranks` and `suppresses` are
//!   aligned with it.
//! - Every rule's category has a priority entry.
//! - Every name in the conflict table refers to a rule in the catalog.

use std::collections::HashMap;

use tracing::debug;

use crate::api::Tradition;
use crate::error::EngineError;
use crate::rules::letters::LetterTable;
use crate::rules::profile::Profile;
use crate::Rule;

/// Rule identifier (index into the rules vector).
pub(crate) type RuleId = usize;

/// A validated rule catalog with its tradition tables.
#[derive(Debug)]
pub(crate) struct Catalog {
    pub tradition: Tradition,
    pub rules: Vec<Rule>,
    /// `(category priority, rule priority)` per rule.
    pub ranks: Vec<(u16, u16)>,
    /// Rules each rule suppresses at a shared position.
    pub suppresses: Vec<Vec<RuleId>>,
    pub letters: LetterTable,
}

impl Catalog {
    pub fn compile(tradition: Tradition, rules: Vec<Rule>, profile: Profile) -> Result<Self, EngineError> {
        let mut ids: HashMap<&'static str, RuleId> = HashMap::with_capacity(rules.len());
        let mut ranks = Vec::with_capacity(rules.len());

        for (id, rule) in rules.iter().enumerate() {
            if ids.insert(rule.name, id).is_some() {
                return Err(EngineError::DuplicateRule(rule.name));
            }
            if rule.duration == 0 {
                return Err(EngineError::ZeroDuration(rule.name));
            }
            let weight = profile
                .priorities
                .get(&rule.category)
                .copied()
                .ok_or(EngineError::MissingPriority { rule: rule.name, category: rule.category })?;
            ranks.push((weight, rule.priority));
        }

        let mut suppresses: Vec<Vec<RuleId>> = vec![Vec::new(); rules.len()];
        for &(owner, targets) in &profile.conflicts {
            let owner_id = *ids.get(owner).ok_or(EngineError::UnknownConflictRule { owner, target: owner })?;
            for &target in targets {
                let target_id = *ids.get(target).ok_or(EngineError::UnknownConflictRule { owner, target })?;
                suppresses[owner_id].push(target_id);
            }
        }

        debug!(
            tradition = %tradition,
            rules = rules.len(),
            conflicts = profile.conflicts.len(),
            "compiled rule catalog"
        );

        Ok(Catalog { tradition, rules, ranks, suppresses, letters: profile.letters })
    }

    pub fn rank(&self, id: RuleId) -> (u16, u16) {
        self.ranks[id]
    }

    /// Returns true when either rule names the other in the conflict table.
    pub fn in_conflict(&self, a: RuleId, b: RuleId) -> bool {
        self.suppresses[a].contains(&b) || self.suppresses[b].contains(&a)
    }

    #[cfg(test)]
    pub fn id_of(&self, name: &str) -> Option<RuleId> {
        self.rules.iter().position(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, rules};

    fn compile(rules: Vec<Rule>, profile: Profile) -> Result<Catalog, EngineError> {
        Catalog::compile(Tradition::Hafs, rules, profile)
    }

    #[test]
    fn builtin_catalog_compiles() {
        let catalog = compile(rules::get(), Profile::hafs()).unwrap();
        assert_eq!(catalog.rules.len(), 25);
        assert_eq!(catalog.ranks.len(), catalog.rules.len());

        let iqlab = catalog.id_of("iqlab").unwrap();
        let ikhfaa = catalog.id_of("ikhfaa").unwrap();
        let izhaar = catalog.id_of("izhaar_halqi").unwrap();
        assert!(catalog.in_conflict(iqlab, ikhfaa));
        assert!(catalog.in_conflict(izhaar, iqlab));
        assert!(!catalog.in_conflict(izhaar, catalog.id_of("jahr").unwrap()));
    }

    #[test]
    fn madd_rules_outrank_everything() {
        let catalog = compile(rules::get(), Profile::hafs()).unwrap();
        let madd = catalog.rank(catalog.id_of("madd_tabii").unwrap());
        let iqlab = catalog.rank(catalog.id_of("iqlab").unwrap());
        let lazim = catalog.rank(catalog.id_of("madd_lazim").unwrap());
        assert!(madd > iqlab);
        assert!(lazim > madd);
    }

    #[test]
    fn missing_priority_fails_fast() {
        let mut profile = Profile::hafs();
        profile.priorities.remove(&Category::Safeer);
        let err = compile(rules::get(), profile).unwrap_err();
        assert_eq!(err, EngineError::MissingPriority { rule: "safeer", category: Category::Safeer });
    }

    #[test]
    fn unknown_conflict_target_fails_fast() {
        let mut profile = Profile::hafs();
        profile.conflicts.push(("iqlab", &["idgham"]));
        let err = compile(rules::get(), profile).unwrap_err();
        assert_eq!(err, EngineError::UnknownConflictRule { owner: "iqlab", target: "idgham" });
    }

    #[test]
    fn duplicate_rule_fails_fast() {
        let mut all = rules::get();
        all.extend(rules::get().into_iter().filter(|r| r.name == "hams"));
        assert_eq!(compile(all, Profile::hafs()).unwrap_err(), EngineError::DuplicateRule("hams"));
    }

    #[test]
    fn zero_duration_fails_fast() {
        let mut all = rules::get();
        all[0].duration = 0;
        assert_eq!(compile(all, Profile::hafs()).unwrap_err(), EngineError::ZeroDuration("izhaar_halqi"));
    }
}
