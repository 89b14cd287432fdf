//! Per-position context snapshots.
//!
//! A [`Window`] is what a rule predicate sees: the unmodified input (as
//! chars), the position under test, a [`LetterContext`] snapshot derived from
//! the raw text around it, and the tradition's letter tables.
//!
//! Snapshots are recomputed for every position and never cached or mutated,
//! so positions can be evaluated independently of one another.

use serde::Serialize;

use crate::rules::letters::{LetterClass, LetterTable, SHADDA, SUKUN, is_mark, is_short_vowel};

/// Neighbourhood of a single character in the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterContext {
    pub current: char,
    pub prev: Option<char>,
    pub prev_prev: Option<char>,
    pub next: Option<char>,
    pub next_next: Option<char>,
    pub is_word_start: bool,
    pub is_word_end: bool,
    pub is_verse_end: bool,
    /// The next character is a sukun.
    pub has_sukun: bool,
    /// A shadda is among the marks directly after the character, in either
    /// order relative to its vowel.
    pub has_shadda: bool,
    /// Short-vowel mark among the marks directly after the character.
    pub vowel: Option<char>,
}

impl LetterContext {
    /// Snapshot of `text` around `pos`. `pos` must be a valid index.
    pub fn at(text: &[char], pos: usize) -> Self {
        let get = |i: Option<usize>| i.and_then(|i| text.get(i)).copied();
        let prev = get(pos.checked_sub(1));
        let next = get(Some(pos + 1));
        let marks = || text[pos + 1..].iter().copied().take_while(|&c| is_mark(c));

        LetterContext {
            current: text[pos],
            prev,
            prev_prev: get(pos.checked_sub(2)),
            next,
            next_next: get(Some(pos + 2)),
            is_word_start: prev.is_none_or(char::is_whitespace),
            is_word_end: next.is_none_or(char::is_whitespace),
            is_verse_end: pos + 1 == text.len(),
            has_sukun: next == Some(SUKUN),
            has_shadda: marks().any(|c| c == SHADDA),
            vowel: marks().find(|&c| is_short_vowel(c)),
        }
    }
}

/// Read-only view handed to rule predicates.
#[derive(Debug)]
pub(crate) struct Window<'a> {
    text: &'a [char],
    pos: usize,
    pub ctx: LetterContext,
    pub letters: &'a LetterTable,
}

impl<'a> Window<'a> {
    pub(crate) fn new(text: &'a [char], pos: usize, letters: &'a LetterTable) -> Self {
        Window { text, pos, ctx: LetterContext::at(text, pos), letters }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn current(&self) -> char {
        self.ctx.current
    }

    /// Character `n` positions after the current one.
    pub(crate) fn ahead(&self, n: usize) -> Option<char> {
        self.text.get(self.pos + n).copied()
    }

    /// Character `n` positions before the current one.
    pub(crate) fn behind(&self, n: usize) -> Option<char> {
        self.pos.checked_sub(n).and_then(|i| self.text.get(i)).copied()
    }

    /// Returns true when the letter `n` positions ahead carries a shadda.
    pub(crate) fn carries_shadda(&self, n: usize) -> bool {
        let Some(letter) = self.ahead(n) else {
            return false;
        };
        !is_mark(letter)
            && self.text[self.pos + n + 1..].iter().take_while(|&&c| is_mark(c)).any(|&c| c == SHADDA)
    }

    /// Returns true when `c` exists and belongs to `class`.
    pub(crate) fn is(&self, c: Option<char>, class: LetterClass) -> bool {
        c.is_some_and(|c| self.letters.is(c, class))
    }
}
