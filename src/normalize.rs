//! Orthographic normalization.
//!
//! Produces the `normalized_text` of a result and the basis for word-boundary
//! offsets. Rule predicates never see this text: they run on the original,
//! fully vocalised input so that diacritic-sensitive rules keep their marks.

/// Remove tatweel, fold alif variants (hamza below, hamza above, madda, wasl)
/// to bare alif and fold ta marbuta to ha.
///
/// The output contains none of the folded characters, so
/// `normalize(&normalize(t)) == normalize(t)`.
pub fn normalize(text: &str) -> String {
    let text = regex!(r"\x{0640}").replace_all(text, "");
    let text = regex!(r"[\x{0625}\x{0623}\x{0671}\x{0622}]").replace_all(&text, "\u{0627}");
    regex!(r"\x{0629}").replace_all(&text, "\u{0647}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tatweel() {
        assert_eq!(normalize("بـــسم"), "بسم");
    }

    #[test]
    fn folds_alif_variants() {
        assert_eq!(normalize("إأٱآ"), "اااا");
        assert_eq!(normalize("ٱلْحَمْدُ"), "الْحَمْدُ");
    }

    #[test]
    fn folds_ta_marbuta() {
        assert_eq!(normalize("رَحْمَة"), "رَحْمَه");
    }

    #[test]
    fn keeps_diacritics_and_spaces() {
        let text = "قُلْ هُوَ";
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn is_idempotent_on_mixed_input() {
        let text = "ٱلصَّلَوٰةَ وَآتُوا ٱلزَّكَـوٰةَ";
        let once = normalize(text);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(""), "");
    }
}
