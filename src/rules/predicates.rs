use crate::engine::Window;
use crate::rules::letters::{
    ALIF, ALIF_WASL, DAGGER_ALIF, DAMMA, DAMMATAN, FATHA, FATHATAN, HA, KASRA, KASRATAN, LAM, LetterClass, MEEM, NOON,
    RA, SHADDA, SUKUN, is_tanwin,
};

/// Returns true when the current character is a noon or a tanwin mark.
pub fn is_noon_trigger(c: char) -> bool {
    c == NOON || is_tanwin(c)
}

/// Noon sakinah / tanwin immediately followed by a letter of `class`.
pub fn noon_followed_by(w: &Window<'_>, class: LetterClass) -> bool {
    is_noon_trigger(w.current()) && w.is(w.ctx.next, class)
}

/// For a meem carrying sukun, the character after the sukun.
pub fn letter_after_meem_sakinah(w: &Window<'_>) -> Option<char> {
    if w.current() == MEEM && w.ctx.has_sukun { w.ctx.next_next } else { None }
}

/// For the lam of the definite article, the character two positions ahead.
pub fn article_lam_target(w: &Window<'_>) -> Option<char> {
    if w.current() == LAM && w.ctx.prev == Some(ALIF) { w.ctx.next_next } else { None }
}

/// Article lam written without a mark, directly followed by a sun letter
/// carrying shadda (the assimilated spelling, e.g. الشَّمس).
pub fn article_lam_before_geminated_sun(w: &Window<'_>) -> bool {
    w.current() == LAM && w.ctx.prev == Some(ALIF) && w.is(w.ctx.next, LetterClass::SUN) && w.carries_shadda(1)
}

/// Returns true for marks that make a ra heavy.
pub fn is_heavy_vowel(c: char) -> bool {
    matches!(c, FATHA | DAMMA | FATHATAN | DAMMATAN)
}

/// Returns true for marks that make a ra light.
pub fn is_light_vowel(c: char) -> bool {
    matches!(c, KASRA | KASRATAN)
}

/// Heavy ra: fatha or damma before it (directly or across a sukun-bearing
/// letter), or on the ra itself.
pub fn ra_is_heavy(w: &Window<'_>) -> bool {
    ra_vowel_is(w, is_heavy_vowel)
}

/// Light ra: kasra before it (directly or across a sukun-bearing letter), or
/// on the ra itself.
pub fn ra_is_light(w: &Window<'_>) -> bool {
    ra_vowel_is(w, is_light_vowel)
}

// A ra between opposite vowels satisfies both.
fn ra_vowel_is(w: &Window<'_>, class: fn(char) -> bool) -> bool {
    if w.current() != RA {
        return false;
    }

    let is_vowel = |c: &char| is_heavy_vowel(*c) || is_light_vowel(*c);
    let before = match w.behind(1) {
        Some(SUKUN) => [w.behind(2), w.behind(3)].into_iter().flatten().find(is_vowel),
        other => other,
    };
    if before.is_some_and(class) {
        return true;
    }

    let own = match w.ahead(1) {
        Some(SHADDA) => w.ahead(2),
        other => other,
    };
    own.is_some_and(class)
}

/// A lam carrying shadda (optionally with fatha or dagger alif) directly
/// followed by ha: the lam of the divine name.
pub fn is_lam_of_divine_name(w: &Window<'_>) -> bool {
    if w.current() != LAM {
        return false;
    }

    let mut offset = 1;
    let mut geminated = false;
    while let Some(c) = w.ahead(offset) {
        match c {
            SHADDA => geminated = true,
            FATHA | DAGGER_ALIF => {}
            _ => break,
        }
        offset += 1;
    }

    geminated && w.ahead(offset) == Some(HA)
}

/// Nearest mark before the definite article, skipping the article letters,
/// sukun and whitespace. `None` at the start of the text or when a bare letter
/// is reached first.
pub fn vowel_before_article(w: &Window<'_>) -> Option<char> {
    (1..=w.pos())
        .filter_map(|n| w.behind(n))
        .find(|&c| !(matches!(c, ALIF | ALIF_WASL | LAM | SUKUN) || c.is_whitespace()))
        .filter(|&c| is_heavy_vowel(c) || is_light_vowel(c))
}
