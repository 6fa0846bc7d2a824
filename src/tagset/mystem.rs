//! Mystem tag conversion.
//!
//! Mystem emits plain-string tags such as `S,жен,неод=им,ед`: the leading
//! fragment is the part of speech, the rest are grammeme fragments
//! separated by `,`, `=`, `|` and parentheses (variant groups).
use std::collections::{BTreeMap, HashMap};

use lazy_static::lazy_static;

use super::{format_features, TagConverter};
use crate::error::Error;

lazy_static! {
    static ref POS: HashMap<&'static str, &'static str> = [
        ("A", "ADJ"),
        ("ADV", "ADV"),
        ("ADVPRO", "ADV"),
        ("ANUM", "ADJ"),
        ("APRO", "DET"),
        ("COM", "ADJ"),
        ("CONJ", "CCONJ"),
        ("INTJ", "INTJ"),
        ("NONLEX", "X"),
        ("NUM", "NUM"),
        ("PART", "PART"),
        ("PR", "ADP"),
        ("S", "NOUN"),
        ("SPRO", "PRON"),
        ("UNKN", "X"),
        ("V", "VERB"),
    ]
    .iter()
    .copied()
    .collect();

    /// grammeme fragment → (UD feature name, UD feature value)
    static ref FEATURES: HashMap<&'static str, (&'static str, &'static str)> = [
        // case
        ("им", ("Case", "Nom")),
        ("род", ("Case", "Gen")),
        ("дат", ("Case", "Dat")),
        ("вин", ("Case", "Acc")),
        ("твор", ("Case", "Ins")),
        ("пр", ("Case", "Loc")),
        ("местн", ("Case", "Loc")),
        ("парт", ("Case", "Par")),
        ("зват", ("Case", "Voc")),
        // number
        ("ед", ("Number", "Sing")),
        ("мн", ("Number", "Plur")),
        // gender
        ("муж", ("Gender", "Masc")),
        ("жен", ("Gender", "Fem")),
        ("сред", ("Gender", "Neut")),
        // animacy
        ("од", ("Animacy", "Anim")),
        ("неод", ("Animacy", "Inan")),
        // tense
        ("наст", ("Tense", "Pres")),
        ("непрош", ("Tense", "Pres")),
        ("прош", ("Tense", "Past")),
    ]
    .iter()
    .copied()
    .collect();
}

fn fragments(tag: &str) -> impl Iterator<Item = &str> {
    tag.split(|c: char| ",=()|".contains(c) || c.is_whitespace())
        .filter(|fragment| !fragment.is_empty())
}

/// Converter for the Mystem native tagset.
#[derive(Debug, Default, Clone, Copy)]
pub struct MystemConverter;

impl TagConverter for MystemConverter {
    type Tag = str;

    fn convert_pos(&self, tag: &str) -> Result<&'static str, Error> {
        let fragment = fragments(tag)
            .next()
            .ok_or_else(|| Error::Conversion(format!("empty Mystem tag: {:?}", tag)))?;

        POS.get(fragment)
            .copied()
            .ok_or_else(|| Error::Conversion(format!("unknown Mystem POS fragment: {}", fragment)))
    }

    fn convert_morphological_tags(&self, tag: &str) -> String {
        let mut features: BTreeMap<&'static str, &'static str> = BTreeMap::new();
        for fragment in fragments(tag) {
            if let Some((name, value)) = FEATURES.get(fragment) {
                // first reading wins when a category repeats
                features.entry(name).or_insert(value);
            }
        }
        format_features(&features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_from_full_tag() {
        let converter = MystemConverter;
        assert_eq!(converter.convert_pos("S,жен,неод=им,ед").unwrap(), "NOUN");
        assert_eq!(
            converter.convert_pos("V,несов,нп=прош,ед,изъяв,муж").unwrap(),
            "VERB"
        );
        assert_eq!(converter.convert_pos("PR").unwrap(), "ADP");
    }

    #[test]
    fn unknown_pos_errors() {
        let converter = MystemConverter;
        assert!(matches!(
            converter.convert_pos("WAT,жен"),
            Err(Error::Conversion(_))
        ));
    }

    #[test]
    fn features_are_sorted_by_name() {
        let converter = MystemConverter;
        assert_eq!(
            converter.convert_morphological_tags("S,жен,неод=им,ед"),
            "Animacy=Inan|Case=Nom|Gender=Fem|Number=Sing"
        );
    }

    #[test]
    fn variant_groups_take_first_reading() {
        let converter = MystemConverter;
        assert_eq!(
            converter.convert_morphological_tags("S,муж,од=(вин,ед|род,ед)"),
            "Animacy=Anim|Case=Acc|Gender=Masc|Number=Sing"
        );
    }

    #[test]
    fn unrecognized_fragments_are_dropped() {
        let converter = MystemConverter;
        assert_eq!(
            converter.convert_morphological_tags("V,несов,нп=прош,ед,изъяв,муж"),
            "Gender=Masc|Number=Sing|Tense=Past"
        );
    }
}
