//! OpenCorpora tag conversion.
//!
//! OpenCorpora-style analyzers return a structured grammeme set rather
//! than a flat string. [OpenCorporaTag] models that shape with one slot
//! per grammatical category; [OpenCorporaTag::parse] accepts the usual
//! serialized form (`NOUN,anim,masc sing,nomn`).
use std::collections::{BTreeMap, HashMap};

use lazy_static::lazy_static;

use super::{format_features, TagConverter};
use crate::error::Error;

lazy_static! {
    static ref POS: HashMap<&'static str, &'static str> = [
        ("NOUN", "NOUN"),
        ("ADJF", "ADJ"),
        ("ADJS", "ADJ"),
        ("COMP", "ADJ"),
        ("VERB", "VERB"),
        ("INFN", "VERB"),
        ("PRTF", "VERB"),
        ("PRTS", "VERB"),
        ("GRND", "VERB"),
        ("NUMR", "NUM"),
        ("ADVB", "ADV"),
        ("NPRO", "PRON"),
        ("PRED", "ADV"),
        ("PREP", "ADP"),
        ("CONJ", "CCONJ"),
        ("PRCL", "PART"),
        ("INTJ", "INTJ"),
        ("UNKN", "X"),
    ]
    .iter()
    .copied()
    .collect();

    /// grammeme → (UD feature name, UD feature value)
    static ref FEATURES: HashMap<&'static str, (&'static str, &'static str)> = [
        // case
        ("nomn", ("Case", "Nom")),
        ("gent", ("Case", "Gen")),
        ("gen1", ("Case", "Gen")),
        ("gen2", ("Case", "Gen")),
        ("datv", ("Case", "Dat")),
        ("accs", ("Case", "Acc")),
        ("acc2", ("Case", "Acc")),
        ("ablt", ("Case", "Ins")),
        ("loct", ("Case", "Loc")),
        ("loc1", ("Case", "Loc")),
        ("loc2", ("Case", "Loc")),
        ("voct", ("Case", "Voc")),
        // number
        ("sing", ("Number", "Sing")),
        ("plur", ("Number", "Plur")),
        // gender
        ("masc", ("Gender", "Masc")),
        ("femn", ("Gender", "Fem")),
        ("neut", ("Gender", "Neut")),
        // animacy
        ("anim", ("Animacy", "Anim")),
        ("inan", ("Animacy", "Inan")),
        // tense
        ("pres", ("Tense", "Pres")),
        ("past", ("Tense", "Past")),
        ("futr", ("Tense", "Fut")),
    ]
    .iter()
    .copied()
    .collect();
}

/// Structured OpenCorpora tag: the part of speech plus one optional
/// native grammeme per recognized category.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OpenCorporaTag {
    pos: String,
    animacy: Option<String>,
    case: Option<String>,
    gender: Option<String>,
    number: Option<String>,
    tense: Option<String>,
}

impl OpenCorporaTag {
    /// Parses the serialized grammeme-set form, e.g.
    /// `NOUN,anim,masc sing,nomn`. The first grammeme is the part of
    /// speech; the rest are sorted into category slots, unknown
    /// grammemes are dropped.
    pub fn parse(tag: &str) -> Self {
        let mut grammemes = tag
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|g| !g.is_empty());

        let mut parsed = Self {
            pos: grammemes.next().unwrap_or("UNKN").to_string(),
            ..Self::default()
        };

        for grammeme in grammemes {
            let slot = match FEATURES.get(grammeme).map(|(name, _)| *name) {
                Some("Animacy") => &mut parsed.animacy,
                Some("Case") => &mut parsed.case,
                Some("Gender") => &mut parsed.gender,
                Some("Number") => &mut parsed.number,
                Some("Tense") => &mut parsed.tense,
                _ => continue,
            };
            slot.get_or_insert_with(|| grammeme.to_string());
        }
        parsed
    }

    pub fn pos(&self) -> &str {
        &self.pos
    }

    fn grammemes(&self) -> impl Iterator<Item = &str> {
        [
            self.animacy.as_deref(),
            self.case.as_deref(),
            self.gender.as_deref(),
            self.number.as_deref(),
            self.tense.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

/// Converter for the OpenCorpora native tagset.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenCorporaConverter;

impl TagConverter for OpenCorporaConverter {
    type Tag = OpenCorporaTag;

    fn convert_pos(&self, tag: &OpenCorporaTag) -> Result<&'static str, Error> {
        POS.get(tag.pos()).copied().ok_or_else(|| {
            Error::Conversion(format!("unknown OpenCorpora POS grammeme: {}", tag.pos()))
        })
    }

    fn convert_morphological_tags(&self, tag: &OpenCorporaTag) -> String {
        let mut features: BTreeMap<&'static str, &'static str> = BTreeMap::new();
        for grammeme in tag.grammemes() {
            if let Some((name, value)) = FEATURES.get(grammeme) {
                features.entry(name).or_insert(value);
            }
        }
        format_features(&features)
    }
}
