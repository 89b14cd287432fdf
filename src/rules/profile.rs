//! Per-tradition tables: letter classes, category priorities and named rule
//! conflicts.

use std::collections::HashMap;

use crate::Category;
use crate::rules::letters::LetterTable;

/// Everything a tradition contributes besides the rules themselves.
#[derive(Debug, Clone)]
pub struct Profile {
    pub letters: LetterTable,
    /// Category weight; higher wins.
    pub priorities: HashMap<Category, u16>,
    /// Rule name -> rules it suppresses at the same position.
    pub conflicts: Vec<(&'static str, &'static [&'static str])>,
}

impl Profile {
    pub fn hafs() -> Self {
        let priorities = HashMap::from([
            (Category::Madd, 100),
            (Category::NoonSakinah, 90),
            (Category::MeemSakinah, 90),
            (Category::Iqlab, 85),
            (Category::Idgham, 80),
            (Category::Ikhfaa, 75),
            (Category::Izhaar, 70),
            (Category::Qalqalah, 60),
            (Category::Ghunnah, 50),
            (Category::Tafkhim, 40),
            (Category::Tarqeeq, 40),
            (Category::LamDefinite, 30),
            (Category::Hams, 20),
            (Category::Jahr, 20),
            (Category::Safeer, 20),
        ]);

        let conflicts: Vec<(&'static str, &'static [&'static str])> = vec![
            ("idgham_bi_ghunnah", &["izhaar_halqi", "ikhfaa"]),
            ("idgham_bila_ghunnah", &["izhaar_halqi", "ikhfaa"]),
            ("iqlab", &["izhaar_halqi", "ikhfaa", "idgham_bi_ghunnah", "idgham_bila_ghunnah"]),
            ("ikhfaa", &["izhaar_halqi", "idgham_bi_ghunnah", "idgham_bila_ghunnah"]),
        ];

        Profile { letters: LetterTable::hafs(), priorities, conflicts }
    }
}
