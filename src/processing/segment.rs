//! Sentence segmentation.
//!
//! Rule: a sentence ends at a maximal run of terminal punctuation
//! (`.`, `!`, `?`, `…`, possibly followed by closing quotes/brackets)
//! when the run is followed by whitespace and an uppercase letter or a
//! digit, or by the end of the text. Terminal punctuation stays with its
//! sentence; inter-sentence whitespace is discarded.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TERMINAL: Regex = Regex::new(r#"[.!?…]+[»")\]]*"#).unwrap();
}

/// Splits `text` into sentences. Empty fragments are dropped; a trailing
/// fragment without terminal punctuation still counts as a sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for terminal in TERMINAL.find_iter(text) {
        let rest = &text[terminal.end()..];
        let after_ws = rest.trim_start();

        let at_end = after_ws.is_empty();
        let new_sentence_follows = after_ws.len() != rest.len()
            && after_ws
                .chars()
                .next()
                .map(|c| c.is_uppercase() || c.is_numeric())
                .unwrap_or(false);

        if at_end || new_sentence_follows {
            let sentence = text[start..terminal.end()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = terminal.end();
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation() {
        assert_eq!(
            split_sentences("Cats run. Dogs sleep."),
            vec!["Cats run.", "Dogs sleep."]
        );
    }

    #[test]
    fn keeps_terminal_punctuation() {
        let sentences = split_sentences("Wow! Really? Yes…");
        assert_eq!(sentences, vec!["Wow!", "Really?", "Yes…"]);
    }

    #[test]
    fn lowercase_continuation_is_not_a_boundary() {
        assert_eq!(
            split_sentences("Прим. переводчика остался."),
            vec!["Прим. переводчика остался."]
        );
    }

    #[test]
    fn tail_without_punctuation_is_kept() {
        assert_eq!(
            split_sentences("First one. second part still here"),
            vec!["First one. second part still here"]
        );
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n ").is_empty());
    }

    #[test]
    fn closing_quote_stays_with_sentence() {
        assert_eq!(
            split_sentences("He said \"Go.\" Then left."),
            vec!["He said \"Go.\"", "Then left."]
        );
    }

    #[test]
    fn digit_starts_a_sentence() {
        assert_eq!(
            split_sentences("It ended. 2021 began."),
            vec!["It ended.", "2021 began."]
        );
    }
}
