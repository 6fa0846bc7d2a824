//! Cleaned-text and CONLL-U writers.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use itertools::Itertools;
use log::debug;

use crate::corpus::Article;
use crate::error::Error;

/// Persists the cleaned text of the article as `<id>_cleaned.txt`.
pub fn write_cleaned(dst: &Path, article: &Article) -> Result<(), Error> {
    let path = dst.join(format!("{}_cleaned.txt", article.id()));
    debug!("writing cleaned text to {:?}", path);

    let mut file = File::create(path)?;
    file.write_all(article.clean_text().as_bytes())?;
    Ok(())
}

/// Persists the CONLL-U rendering of the article, one sentence block per
/// sentence in order, blocks separated by blank lines.
///
/// The filename carries the annotation level: `<id>_pos_conllu.conllu`
/// with morphological tags, `<id>_conllu.conllu` without.
pub fn write_conllu(dst: &Path, article: &Article, include_tags: bool) -> Result<(), Error> {
    let filename = if include_tags {
        format!("{}_pos_conllu.conllu", article.id())
    } else {
        format!("{}_conllu.conllu", article.id())
    };
    let path = dst.join(filename);
    debug!("writing conllu to {:?}", path);

    let content = article
        .sentences()
        .iter()
        .map(|sentence| sentence.render(include_tags))
        .join("\n");

    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::conllu::{Sentence, Token};

    fn article() -> Article {
        let mut article = Article::new(1, "Cats run.".to_string());
        article.set_sentences(vec![Sentence::new(
            0,
            "Cats run.",
            vec![Token::new("Cats"), Token::new("run.")],
        )]);
        article
    }

    #[test]
    fn cleaned_file_content() {
        let dst = tempdir().unwrap();
        write_cleaned(dst.path(), &article()).unwrap();

        let content = std::fs::read_to_string(dst.path().join("1_cleaned.txt")).unwrap();
        assert_eq!(content, "cats run");
    }

    #[test]
    fn conllu_file_content() {
        let dst = tempdir().unwrap();
        write_conllu(dst.path(), &article(), false).unwrap();

        let content = std::fs::read_to_string(dst.path().join("1_conllu.conllu")).unwrap();
        assert!(content.starts_with("# sent_id = 1\n# text = Cats run.\n"));
        assert!(content.contains("1\tCats\t"));
        assert!(content.contains("2\trun.\t"));
    }
}
