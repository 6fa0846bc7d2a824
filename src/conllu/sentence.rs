//! CONLL-U sentence.
use itertools::Itertools;

use super::Token;

/// Ordered sequence of tokens with the raw sentence text and the
/// 0-based position of the sentence inside its article.
///
/// `position` is assigned at creation and never renumbered; tokens keep
/// the left-to-right order of occurrence in the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    position: usize,
    text: String,
    tokens: Vec<Token>,
}

impl Sentence {
    pub fn new<S: Into<String>>(position: usize, text: S, tokens: Vec<Token>) -> Self {
        Self {
            position,
            text: text.into(),
            tokens,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Mutable access for the tag-conversion pass.
    pub fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    /// Cleaned forms of the tokens, in order, space-separated.
    /// Tokens that clean to the empty string are skipped.
    pub fn clean_text(&self) -> String {
        self.tokens
            .iter()
            .map(|token| token.clean())
            .filter(|cleaned| !cleaned.is_empty())
            .join(" ")
    }

    /// Renders the CONLL-U block of the sentence: a `# sent_id` comment
    /// carrying the 1-based sentence number, a `# text` comment with the
    /// raw text, then one line per token with 1-based token ids.
    pub fn render(&self, include_tags: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("# sent_id = {}\n", self.position + 1));
        out.push_str(&format!("# text = {}\n", self.text));
        for (idx, token) in self.tokens.iter().enumerate() {
            out.push_str(&token.render(idx + 1, include_tags));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence() -> Sentence {
        let tokens = vec![Token::new("Wow!"), Token::new("Really?")];
        Sentence::new(0, "Wow! Really?", tokens)
    }

    #[test]
    fn clean_text_skips_empty_tokens() {
        let tokens = vec![Token::new("Wow!"), Token::new("..."), Token::new("Really?")];
        let s = Sentence::new(0, "Wow! ... Really?", tokens);
        assert_eq!(s.clean_text(), "wow really");
    }

    #[test]
    fn render_comment_lines_roundtrip() {
        let s = sentence();
        let rendered = s.render(false);
        let mut lines = rendered.lines();

        let sent_id = lines.next().unwrap();
        let text = lines.next().unwrap();

        let recovered: usize = sent_id
            .strip_prefix("# sent_id = ")
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(recovered, s.position() + 1);
        assert_eq!(text.strip_prefix("# text = ").unwrap(), s.text());
    }

    #[test]
    fn render_token_lines_are_one_based() {
        let rendered = sentence().render(false);
        let token_lines: Vec<&str> = rendered
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect();
        assert_eq!(token_lines.len(), 2);
        assert!(token_lines[0].starts_with("1\tWow!\t"));
        assert!(token_lines[1].starts_with("2\tReally?\t"));
    }

    #[test]
    fn render_is_idempotent() {
        let s = sentence();
        assert_eq!(s.render(true), s.render(true));
        assert_eq!(s.render(false), s.render(false));
    }
}
