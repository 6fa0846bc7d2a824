//! CONLL-U token.
//!
//! A [Token] keeps the surface form exactly as it occurred in the raw text.
//! The lowercased, punctuation-free form is derived on demand via [Token::clean],
//! never stored.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();
}

/// Lowercases `text` and strips every character that is neither a
/// word character nor whitespace (Unicode semantics).
///
/// Punctuation-only input reduces to the empty string.
pub fn clean_form(text: &str) -> String {
    NON_WORD.replace_all(&text.to_lowercase(), "").into_owned()
}

/// Lemma, UD part-of-speech and UD feature string of a tagged token.
///
/// The default value stands for "not yet annotated".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MorphologicalAnnotation {
    lemma: String,
    pos: String,
    tags: String,
}

impl MorphologicalAnnotation {
    pub fn new(lemma: String, pos: String, tags: String) -> Self {
        Self { lemma, pos, tags }
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn pos(&self) -> &str {
        &self.pos
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }
}

/// Single token of a sentence, along with its (optional) annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    annotation: Option<MorphologicalAnnotation>,
}

/// CONLL-U empty column placeholder.
const PLACEHOLDER: &str = "_";

impl Token {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            annotation: None,
        }
    }

    /// Original (not lowercased) surface form.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attaches the annotation. An annotation is immutable once set,
    /// later calls are ignored.
    pub fn set_annotation(&mut self, annotation: MorphologicalAnnotation) {
        if self.annotation.is_none() {
            self.annotation = Some(annotation);
        }
    }

    pub fn annotation(&self) -> Option<&MorphologicalAnnotation> {
        self.annotation.as_ref()
    }

    /// Cleaned form of the token. See [clean_form].
    pub fn clean(&self) -> String {
        clean_form(&self.text)
    }

    /// Renders one CONLL-U line:
    /// `ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL DEPS MISC`, tab-separated.
    ///
    /// `id` is the 1-based position of the token inside its sentence.
    /// With `include_tags` unset, the morphological columns stay `_`
    /// even when an annotation is present.
    pub fn render(&self, id: usize, include_tags: bool) -> String {
        let (lemma, pos, feats) = match (include_tags, &self.annotation) {
            (true, Some(a)) => (
                Self::column(a.lemma()),
                Self::column(a.pos()),
                Self::column(a.tags()),
            ),
            _ => (PLACEHOLDER, PLACEHOLDER, PLACEHOLDER),
        };

        [
            id.to_string().as_str(),
            &self.text,
            lemma,
            pos,
            PLACEHOLDER, // xpos
            feats,
            PLACEHOLDER, // head
            PLACEHOLDER, // deprel
            PLACEHOLDER, // deps
            PLACEHOLDER, // misc
        ]
        .join("\t")
    }

    fn column(value: &str) -> &str {
        if value.is_empty() {
            PLACEHOLDER
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_punctuation() {
        let token = Token::new("Hello,");
        assert_eq!(token.clean(), "hello");
    }

    #[test]
    fn clean_form_on_phrases() {
        assert_eq!(clean_form("Hello, World!"), "hello world");
        assert_eq!(clean_form("!!!"), "");
    }

    #[test]
    fn clean_punctuation_only_is_empty() {
        let token = Token::new("!!!");
        assert_eq!(token.clean(), "");
    }

    #[test]
    fn clean_keeps_unicode_word_chars() {
        let token = Token::new("Привет,");
        assert_eq!(token.clean(), "привет");
    }

    #[test]
    fn render_without_tags() {
        let mut token = Token::new("cats");
        token.set_annotation(MorphologicalAnnotation::new(
            "cat".to_string(),
            "NOUN".to_string(),
            "Number=Plur".to_string(),
        ));
        assert_eq!(
            token.render(1, false),
            "1\tcats\t_\t_\t_\t_\t_\t_\t_\t_"
        );
    }

    #[test]
    fn render_with_tags() {
        let mut token = Token::new("cats");
        token.set_annotation(MorphologicalAnnotation::new(
            "cat".to_string(),
            "NOUN".to_string(),
            "Number=Plur".to_string(),
        ));
        assert_eq!(
            token.render(2, true),
            "2\tcats\tcat\tNOUN\t_\tNumber=Plur\t_\t_\t_\t_"
        );
    }

    #[test]
    fn render_with_tags_but_no_annotation() {
        let token = Token::new("cats");
        assert_eq!(
            token.render(1, true),
            "1\tcats\t_\t_\t_\t_\t_\t_\t_\t_"
        );
    }

    #[test]
    fn annotation_is_set_once() {
        let mut token = Token::new("cats");
        token.set_annotation(MorphologicalAnnotation::new(
            "cat".to_string(),
            "NOUN".to_string(),
            String::new(),
        ));
        token.set_annotation(MorphologicalAnnotation::new(
            "dog".to_string(),
            "VERB".to_string(),
            String::new(),
        ));
        assert_eq!(token.annotation().unwrap().lemma(), "cat");
    }
}
