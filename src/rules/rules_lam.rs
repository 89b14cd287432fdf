//! Lam of the definite article: assimilated before sun letters, clear before
//! moon letters.

use crate::rules::letters::LetterClass;
use crate::rules::predicates::{article_lam_before_geminated_sun, article_lam_target};
use crate::rules::sifa;
use crate::{Category, Rule};

fn rule_lam_shamsiyyah() -> Rule {
    rule! {
        name: "lam_shamsiyyah",
        category: Category::LamDefinite,
        duration: 2,
        attribute: sifa::IDGHAM,
        description: "Sun letters - lam is assimilated",
        when: |w| w.is(article_lam_target(w), LetterClass::SUN) || article_lam_before_geminated_sun(w),
    }
}

fn rule_lam_qamariyyah() -> Rule {
    rule! {
        name: "lam_qamariyyah",
        category: Category::LamDefinite,
        duration: 1,
        attribute: sifa::IZHAAR,
        description: "Moon letters - lam is clear",
        when: |w| w.is(article_lam_target(w), LetterClass::MOON),
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_lam_shamsiyyah(), rule_lam_qamariyyah()]
}
