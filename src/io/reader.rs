//! Raw and meta readers.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::corpus::ArticleMeta;
use crate::error::Error;

/// Reads the raw text of an article file.
pub fn read_raw(path: &Path) -> Result<String, Error> {
    Ok(std::fs::read_to_string(path)?)
}

/// Reads an `<id>_meta.json` file.
pub fn read_meta(path: &Path) -> Result<ArticleMeta, Error> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn read_raw_roundtrip() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("Cats run.".as_bytes()).unwrap();
        assert_eq!(read_raw(file.path()).unwrap(), "Cats run.");
    }

    #[test]
    fn read_meta_rejects_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        assert!(matches!(read_meta(file.path()), Err(Error::Serde(_))));
    }
}
