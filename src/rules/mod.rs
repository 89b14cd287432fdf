pub mod letters;
pub mod phonemes;
pub mod predicates;
pub mod profile;
pub mod sifa;

mod rules_ghunnah;
mod rules_lam;
mod rules_madd;
mod rules_meem;
mod rules_noon;
mod rules_qalqalah;
mod rules_sifat;
mod rules_tafkhim;

#[cfg(test)]
mod tests;

use crate::Rule;

/// The full rule catalog in declaration order. Declaration order breaks ties
/// left after category priority and per-rule priority.
pub fn get() -> Vec<Rule> {
    let mut rules = Vec::new();
    rules.extend(rules_noon::get());
    rules.extend(rules_meem::get());
    rules.extend(rules_lam::get());
    rules.extend(rules_madd::get());
    rules.extend(rules_qalqalah::get());
    rules.extend(rules_tafkhim::get());
    rules.extend(rules_ghunnah::get());
    rules.extend(rules_sifat::get());
    rules
}
