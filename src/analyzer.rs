//! Morphological analyzer interface.
//!
//! Analyzers are external black boxes: given a surface form they return a
//! lemma and a native-format tag, or nothing when the form is unknown.
//! [TsvLexicon] is the in-crate implementation, backed by a tab-separated
//! `form lemma tag` file, and stands in for an embedded analyzer binding.
use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::conllu::clean_form;
use crate::error::Error;
use crate::tagset::OpenCorporaTag;

/// One analyzer reading: the lemma and the native tag of a surface form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis<T> {
    pub lemma: String,
    pub tag: T,
}

/// Black-box morphological analyzer.
pub trait Analyzer {
    /// Native tag shape produced by this analyzer.
    type Tag;

    /// Analyzes a single surface form. `None` means the analyzer cannot
    /// tag it; callers must tolerate that per token.
    fn analyze(&self, surface: &str) -> Option<Analysis<Self::Tag>>;
}

/// Lexicon-backed analyzer loaded from a TSV file
/// (`form<TAB>lemma<TAB>native-tag`, no header).
///
/// Lookup is done on the cleaned form of the token, so `"Cats,"` and
/// `"cats"` hit the same entry.
pub struct TsvLexicon<T> {
    entries: HashMap<String, (String, T)>,
}

impl<T> TsvLexicon<T> {
    fn from_path<F>(path: &Path, parse_tag: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> T,
    {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut entries = HashMap::new();
        for record in reader.records() {
            let record = record?;
            if record.len() < 3 {
                debug!("skipping short lexicon record: {:?}", record);
                continue;
            }
            entries.insert(
                clean_form(&record[0]),
                (record[1].to_string(), parse_tag(&record[2])),
            );
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TsvLexicon<String> {
    /// Lexicon whose tag column holds Mystem string tags.
    pub fn mystem(path: &Path) -> Result<Self, Error> {
        Self::from_path(path, str::to_string)
    }
}

impl TsvLexicon<OpenCorporaTag> {
    /// Lexicon whose tag column holds serialized OpenCorpora grammeme sets.
    pub fn open_corpora(path: &Path) -> Result<Self, Error> {
        Self::from_path(path, OpenCorporaTag::parse)
    }
}

impl<T: Clone> Analyzer for TsvLexicon<T> {
    type Tag = T;

    fn analyze(&self, surface: &str) -> Option<Analysis<T>> {
        let key = clean_form(surface);
        self.entries.get(&key).map(|(lemma, tag)| Analysis {
            lemma: lemma.clone(),
            tag: tag.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn lexicon(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn lookup_ignores_case_and_punctuation() {
        let file = lexicon("cats\tcat\tS,мн\n");
        let lex = TsvLexicon::mystem(file.path()).unwrap();

        let analysis = lex.analyze("Cats,").unwrap();
        assert_eq!(analysis.lemma, "cat");
        assert_eq!(analysis.tag, "S,мн");
    }

    #[test]
    fn unknown_form_is_none() {
        let file = lexicon("cats\tcat\tS,мн\n");
        let lex = TsvLexicon::mystem(file.path()).unwrap();
        assert!(lex.analyze("dogs").is_none());
    }

    #[test]
    fn short_records_are_skipped() {
        let file = lexicon("cats\tcat\tS,мн\nbroken\n");
        let lex = TsvLexicon::mystem(file.path()).unwrap();
        assert_eq!(lex.len(), 1);
    }

    #[test]
    fn open_corpora_tags_are_parsed() {
        let file = lexicon("cats\tcat\tNOUN,anim plur,nomn\n");
        let lex = TsvLexicon::open_corpora(file.path()).unwrap();
        let analysis = lex.analyze("cats").unwrap();
        assert_eq!(analysis.tag.pos(), "NOUN");
    }
}
