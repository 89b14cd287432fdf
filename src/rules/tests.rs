use crate::{Category, Engine, Options, ProcessingResult, Tradition};

fn annotate(text: &str) -> ProcessingResult {
    Engine::new(Tradition::Hafs).unwrap().annotate_with(text, &Options { parallel: false })
}

fn rules_at(result: &ProcessingResult, position: usize) -> Vec<&'static str> {
    result.applications.at(position).iter().map(|a| a.rule).collect()
}

#[test]
fn rule_examples_matching() {
    // (input, position, expected rule, expected rule duration)
    let cases: Vec<(&str, usize, &str, u32)> = vec![
        // noon sakinah and tanwin
        ("نخ", 0, "izhaar_halqi", 1),
        ("ني", 0, "idgham_bi_ghunnah", 2),
        ("نر", 0, "idgham_bila_ghunnah", 1),
        ("نب", 0, "iqlab", 2),
        ("نس", 0, "ikhfaa", 2),
        ("عًب", 1, "iqlab", 2),
        // meem sakinah
        ("مْب", 0, "ikhfaa_shafawi", 2),
        ("مْم", 0, "idgham_shafawi", 2),
        ("مْت", 0, "izhaar_shafawi", 1),
        // definite article
        ("الْتِينِ", 1, "lam_shamsiyyah", 2),
        ("الشَّمْسُ", 1, "lam_shamsiyyah", 2),
        ("الْكِتَابُ", 1, "lam_qamariyyah", 1),
        // madd
        ("قَالَ", 2, "madd_tabii", 2),
        ("جَاءَ", 2, "madd_wajib_muttasil", 5),
        ("مَا ءَ", 2, "madd_jaiz_munfasil", 4),
        ("ضَالِّينَ", 2, "madd_lazim", 6),
        ("خَوْفٌ", 2, "madd_lin", 4),
        // qalqalah
        ("قَدْ", 2, "qalqalah_kubra", 2),
        ("يَدْخُلُ", 2, "qalqalah_wusta", 1),
        // tafkhim and tarqeeq
        ("ق", 0, "tafkhim_daim", 1),
        ("صِرَاطَ", 0, "tafkhim_daim", 1),
        ("رَ", 0, "tafkhim_ra", 1),
        ("مَرْيَمَ", 2, "tafkhim_ra", 1),
        ("رِ", 0, "tarqeeq_ra", 1),
        ("فِرْعَوْنَ", 2, "tarqeeq_ra", 1),
        ("قَالَ اللَّهُ", 8, "tafkhim_lam_allah", 1),
        // ghunnah
        ("إِنَّ", 2, "ghunnah_mushaddad", 3),
        ("ثُمَّ", 2, "ghunnah_mushaddad", 3),
        // sifat
        ("س", 0, "hams", 1),
        ("س", 0, "safeer", 1),
        ("د", 0, "jahr", 1),
    ];

    for (text, position, rule, duration) in cases {
        let result = annotate(text);
        let app = result
            .applications
            .at(position)
            .iter()
            .find(|a| a.rule == rule)
            .unwrap_or_else(|| panic!("{rule} not applied at {position} in {text:?}: {:?}", rules_at(&result, position)));
        assert_eq!(app.duration, duration, "{rule} in {text:?}");
        assert_eq!(app.position, position);
        assert_eq!(Some(app.character), text.chars().nth(position));
    }
}

#[test]
fn rule_examples_not_matching() {
    let cases: Vec<(&str, usize, &str)> = vec![
        // sakin noon: the mark sits between noon and the next letter
        ("نْخ", 0, "izhaar_halqi"),
        ("مَب", 0, "ikhfaa_shafawi"),
        ("لْت", 0, "lam_shamsiyyah"),
        ("جَاءَ", 2, "madd_tabii"),
        ("ضَالِّينَ", 2, "madd_tabii"),
        ("خَوْفٌ", 2, "madd_tabii"),
        ("قَدَ", 2, "qalqalah_kubra"),
        ("بِسْمِ اللَّهِ", 9, "tafkhim_lam_allah"),
        ("رِ", 0, "tafkhim_ra"),
        ("رَ", 0, "tarqeeq_ra"),
        ("نَ", 0, "ghunnah_mushaddad"),
        ("hello", 0, "jahr"),
    ];

    for (text, position, rule) in cases {
        let result = annotate(text);
        assert!(!rules_at(&result, position).contains(&rule), "{rule} unexpectedly applied at {position} in {text:?}");
    }
}

#[test]
fn clear_noon_keeps_its_phoneme() {
    let result = annotate("نخ");
    assert_eq!(result.phonemes[0], "n");
    assert_eq!(result.durations[0], 1);
    assert_eq!(result.attributes[0], "JTYZ");
}

#[test]
fn iqlab_converts_to_meem() {
    let result = annotate("نب");
    assert_eq!(result.phonemes[0], "m");
    assert_eq!(result.durations[0], 2);

    let iqlab = &result.applications.at(0)[0];
    assert_eq!(iqlab.phoneme_before, "n");
    assert_eq!(iqlab.phoneme_after, "m");

    // tanwin converts too
    assert_eq!(annotate("عًب").phonemes[1], "m");
}

#[test]
fn idgham_with_ghunnah_elides_the_noon() {
    let result = annotate("ني");
    assert_eq!(result.phonemes[0], "");
    assert_eq!(result.phoneme_string(), "j");
}

#[test]
fn specialised_madd_outranks_natural_madd() {
    let result = annotate("مَا ءَ");
    assert_eq!(rules_at(&result, 2), vec!["madd_jaiz_munfasil"]);
    assert_eq!(result.durations[2], 4);
}

#[test]
fn ra_between_opposite_vowels_is_heavy_and_light() {
    for text in ["مَرِ", "مِرَ"] {
        let result = annotate(text);
        assert_eq!(rules_at(&result, 2), vec!["tafkhim_ra", "tarqeeq_ra", "jahr"], "{text:?}");
        assert_eq!(result.attributes[2], "JTRrMQ", "{text:?}");
    }

    // a single governing vowel yields one tag
    assert_eq!(rules_at(&annotate("مَرَ"), 2), vec!["tafkhim_ra", "jahr"]);
    assert_eq!(rules_at(&annotate("مِرِ"), 2), vec!["tarqeeq_ra", "jahr"]);
}

#[test]
fn divine_name_lam_after_kasra_is_light() {
    let heavy = annotate("قَالَ اللَّهُ");
    assert!(rules_at(&heavy, 8).contains(&"tafkhim_lam_allah"));
    assert!(rules_at(&heavy, 7).contains(&"lam_shamsiyyah"));

    let light = annotate("بِسْمِ اللَّهِ");
    assert!(!rules_at(&light, 9).contains(&"tafkhim_lam_allah"));
}

#[test]
fn per_letter_tags_fire_everywhere() {
    let result = annotate("سس");
    for position in 0..2 {
        assert_eq!(rules_at(&result, position), vec!["hams", "safeer"]);
        assert_eq!(result.attributes[position], "HRSf");
    }
}

#[test]
fn heavy_letter_fires_regardless_of_context() {
    for (text, position) in [("ق", 0), ("قَ", 0), ("يَقْ", 2), ("ب ق", 2)] {
        let result = annotate(text);
        assert!(rules_at(&result, position).contains(&"tafkhim_daim"), "{text:?}");
        assert!(result.applications.at(position).iter().any(|a| a.category == Category::Tafkhim));
    }
}

#[test]
fn empty_input() {
    let result = annotate("");
    assert!(result.is_empty());
    assert!(result.attributes.is_empty());
    assert!(result.durations.is_empty());
    assert!(result.applications.is_empty());
    assert!(result.word_boundaries.is_empty());
    assert_eq!(result.metadata.char_count, 0);
    assert_eq!(result.metadata.rule_count, 0);
    assert_eq!(result.metadata.unique_rules, 0);
}

#[test]
fn non_arabic_input_fires_nothing() {
    let result = annotate("hello world");
    assert!(result.applications.is_empty());
    assert_eq!(result.phoneme_string(), "hello world");
    assert_eq!(result.attributes[0], "_");
    assert_eq!(result.word_boundaries, vec![5]);
}

#[test]
fn breakdown_offsets_accumulate_durations() {
    let result = annotate("نب");
    let rows = result.breakdown();
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].offset, rows[0].duration), (0, 2));
    assert_eq!((rows[1].offset, rows[1].duration), (2, 1));
    assert_eq!(rows[0].rules, vec!["iqlab", "jahr"]);
    assert_eq!(rows[1].character, 'ب');
}

#[test]
fn full_verse() {
    let text = "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ";
    let result = annotate(text);
    assert_eq!(result.len(), text.chars().count());
    assert_eq!(result.word_boundaries.len(), 3);
    assert_eq!(result.metadata.rule_count, result.applications.len());
    assert!(result.applications.unique_rule_names().contains(&"lam_shamsiyyah"));
    assert!(!result.applications.unique_rule_names().contains(&"tafkhim_lam_allah"));
}
