//! Corpus intake and validation.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glob::glob;
use log::{debug, info};

use super::article::Article;
use crate::error::Error;
use crate::io::reader;

/// Extracts the numeric article id from a `<id>_raw.txt`-style filename.
pub fn article_id(path: &Path) -> Result<usize, Error> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::InconsistentDataset(format!("bad filename: {:?}", path)))?;

    name.split('_')
        .next()
        .and_then(|id| id.parse().ok())
        .ok_or_else(|| Error::InconsistentDataset(format!("no numeric id in filename: {}", name)))
}

/// Validates a dataset directory and loads every raw article into an
/// id-addressed map.
///
/// Validation is eager: [CorpusManager::new] either returns a fully
/// loaded corpus or fails before any article is loaded.
#[derive(Debug)]
pub struct CorpusManager {
    path: PathBuf,
    storage: HashMap<usize, Article>,
}

impl CorpusManager {
    pub fn new(path: &Path) -> Result<Self, Error> {
        Self::validate(path)?;
        let storage = Self::scan(path)?;
        info!("loaded {} articles from {:?}", storage.len(), path);
        Ok(Self {
            path: path.to_path_buf(),
            storage,
        })
    }

    /// Dataset directory path the corpus was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn raw_files(path: &Path) -> Result<Vec<PathBuf>, Error> {
        let pattern = path.join("*_raw.txt");
        glob(&pattern.to_string_lossy())?.collect::<Result<Vec<_>, _>>().map_err(Error::from)
    }

    fn meta_files(path: &Path) -> Result<Vec<PathBuf>, Error> {
        let pattern = path.join("*_meta.json");
        glob(&pattern.to_string_lossy())?.collect::<Result<Vec<_>, _>>().map_err(Error::from)
    }

    fn validate(path: &Path) -> Result<(), Error> {
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(Error::NotADirectory(path.to_path_buf()));
        }
        if path.read_dir()?.next().is_none() {
            return Err(Error::EmptyDirectory(path.to_path_buf()));
        }

        let raw_files = Self::raw_files(path)?;

        for file in &raw_files {
            if std::fs::metadata(file)?.len() == 0 {
                return Err(Error::InconsistentDataset(format!(
                    "empty raw file: {:?}",
                    file
                )));
            }
        }

        let mut ids = raw_files
            .iter()
            .map(|file| article_id(file))
            .collect::<Result<Vec<_>, _>>()?;
        ids.sort_unstable();
        let expected: Vec<usize> = (1..=ids.len()).collect();
        if ids != expected {
            return Err(Error::InconsistentDataset(format!(
                "article ids do not cover 1..{} without gaps: {:?}",
                ids.len(),
                ids
            )));
        }

        // meta files are optional, but when present there must be one per raw file
        let meta_files = Self::meta_files(path)?;
        if !meta_files.is_empty() && meta_files.len() != raw_files.len() {
            return Err(Error::InconsistentDataset(format!(
                "{} meta files for {} raw files",
                meta_files.len(),
                raw_files.len()
            )));
        }

        Ok(())
    }

    fn scan(path: &Path) -> Result<HashMap<usize, Article>, Error> {
        let mut storage = HashMap::new();
        for file in Self::raw_files(path)? {
            let id = article_id(&file)?;
            debug!("reading article {} from {:?}", id, file);
            let mut article = Article::new(id, reader::read_raw(&file)?);

            let meta_path = path.join(format!("{}_meta.json", id));
            if meta_path.exists() {
                article.set_meta(reader::read_meta(&meta_path)?);
            }
            storage.insert(id, article);
        }
        Ok(storage)
    }

    /// The id → article mapping. No ordering is promised beyond the map's.
    pub fn get_articles(&self) -> &HashMap<usize, Article> {
        &self.storage
    }

    pub fn get_articles_mut(&mut self) -> &mut HashMap<usize, Article> {
        &mut self.storage
    }
}
