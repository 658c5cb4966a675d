use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A page as delivered by a page source: raw markup plus its last-edit date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page {
    pub text: String,
    #[serde(default)]
    pub date: String,
    /// Known page names, used to mark links to pages that do not exist.
    #[serde(default)]
    pub names: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Invalid page slug: {0:?}")]
    InvalidSlug(String),
    #[error("Page not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed page record {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid pages directory: {0}")]
    InvalidPagesDir(String),
}

/// Something that can look up a page by slug.
pub trait PageSource {
    fn fetch(&self, slug: &str) -> Result<Page, PageError>;
}

/// Pages stored as files in one directory.
///
/// `<slug>.json` holds a `{ "text": ..., "date": ... }` record; failing that,
/// `<slug>.txt` is read as raw markup with an empty date.
#[derive(Debug, Clone)]
pub struct DirectoryPageSource {
    root: PathBuf,
}

impl DirectoryPageSource {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, PageError> {
        let root = root.into();
        validate_pages_dir(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Slugs of every page in the directory, sorted.
    pub fn page_names(&self) -> Result<Vec<String>, PageError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if let Some(ext) = path.extension()
                && (ext == "json" || ext == "txt")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        names.dedup();
        Ok(names)
    }
}

impl PageSource for DirectoryPageSource {
    fn fetch(&self, slug: &str) -> Result<Page, PageError> {
        validate_slug(slug)?;

        let json_path = self.root.join(format!("{slug}.json"));
        if json_path.exists() {
            log::debug!("loading page record {}", json_path.display());
            let content = fs::read_to_string(&json_path)?;
            return serde_json::from_str(&content).map_err(|source| PageError::Json {
                path: json_path,
                source,
            });
        }

        let text_path = self.root.join(format!("{slug}.txt"));
        if text_path.exists() {
            log::debug!("loading raw page {}", text_path.display());
            return Ok(Page {
                text: fs::read_to_string(&text_path)?,
                date: String::new(),
                names: None,
            });
        }

        Err(PageError::NotFound(slug.to_string()))
    }
}

/// Rejects slugs that are empty or could escape the pages directory.
pub fn validate_slug(slug: &str) -> Result<(), PageError> {
    if slug.is_empty()
        || slug.contains(['/', '\\'])
        || slug.contains("..")
        || slug.starts_with('.')
    {
        return Err(PageError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

pub fn validate_pages_dir(path: &Path) -> Result<(), PageError> {
    if !path.exists() || !path.is_dir() {
        return Err(PageError::InvalidPagesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
