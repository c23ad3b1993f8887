// src/catalog.rs
//! The book corpus: one table row per book instead of one type per title.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{CharnetError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Biography,
    /// e.g. the Bible
    Legendary,
    Fiction,
}

impl Genre {
    /// Letter used in tables.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Biography => 'B',
            Self::Legendary => 'L',
            Self::Fiction => 'F',
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Biography => "Biography",
            Self::Legendary => "Legendary",
            Self::Fiction => "Fiction",
        };
        f.write_str(name)
    }
}

/// Where a book's record file lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Collected for this project.
    Charnet,
    /// Stanford GraphBase.
    Sgb,
}

impl SourceKind {
    #[must_use]
    pub fn data_dir(self, config: &Config) -> &Path {
        match self {
            Self::Charnet => &config.paths.data_dir,
            Self::Sgb => &config.paths.sgb_dir,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    pub name: &'static str,
    pub genre: Genre,
    /// Vertex fill color used by plotting collaborators.
    pub color: &'static str,
    pub source: SourceKind,
}

impl Book {
    #[must_use]
    pub fn record_path(&self, config: &Config) -> PathBuf {
        self.source
            .data_dir(config)
            .join(format!("{}.{}", self.name, config.paths.extension))
    }

    /// Book name as printed in tables, e.g. `Hobbit`.
    #[must_use]
    pub fn title(&self) -> String {
        title_case(self.name)
    }

    #[must_use]
    pub fn to_source(&self, config: &Config) -> BookSource {
        BookSource {
            name: self.name.to_string(),
            path: self.record_path(config),
            genre: Some(self.genre),
            color: Some(self.color.to_string()),
        }
    }
}

pub const BOOKS: &[Book] = &[
    book("acts", Genre::Legendary, "khaki", SourceKind::Charnet),
    book("apollonius", Genre::Legendary, "red", SourceKind::Charnet),
    book("arthur", Genre::Fiction, "cyan", SourceKind::Charnet),
    book("david", Genre::Fiction, "orange", SourceKind::Sgb),
    book("dick", Genre::Biography, "orchid", SourceKind::Charnet),
    book("hawking", Genre::Biography, "silver", SourceKind::Charnet),
    book("hobbit", Genre::Fiction, "gold", SourceKind::Charnet),
    book("huck", Genre::Fiction, "salmon", SourceKind::Sgb),
    book("luke", Genre::Legendary, "wheat", SourceKind::Charnet),
    book("newton", Genre::Biography, "tan", SourceKind::Charnet),
    book("pythagoras", Genre::Legendary, "tomato", SourceKind::Charnet),
    book("tolkien", Genre::Biography, "yellowgreen", SourceKind::Charnet),
];

const fn book(name: &'static str, genre: Genre, color: &'static str, source: SourceKind) -> Book {
    Book {
        name,
        genre,
        color,
        source,
    }
}

/// Looks a book up by name, case-insensitively.
///
/// # Errors
/// Returns `UnknownBook` if no catalog entry matches.
pub fn find(name: &str) -> Result<&'static Book> {
    BOOKS
        .iter()
        .find(|b| b.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| CharnetError::UnknownBook(name.to_string()))
}

/// A record file to analyze, from the catalog or found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSource {
    pub name: String,
    pub path: PathBuf,
    pub genre: Option<Genre>,
    pub color: Option<String>,
}

impl BookSource {
    /// An uncatalogued record file, named after its file stem.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_stem()
            .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());
        let known = find(&name).ok();
        Self {
            name,
            path: path.to_path_buf(),
            genre: known.map(|b| b.genre),
            color: known.map(|b| b.color.to_string()),
        }
    }
}

/// Every record file with the configured extension under `dir`, sorted by path.
///
/// # Errors
/// Returns `Io` if the directory cannot be walked.
pub fn discover(dir: &Path, config: &Config) -> Result<Vec<BookSource>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry?;
        let path = entry.path();
        let matches = entry.file_type().is_file()
            && path
                .extension()
                .is_some_and(|ext| ext == config.paths.extension.as_str());
        if matches {
            found.push(BookSource::from_path(path));
        }
    }
    found.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(found)
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
