//! Where word list text comes from

use super::embedded::WORDS;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A word list could not be fetched
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {location} unavailable: {reason}")]
    Unavailable { location: String, reason: String },
}

/// Provider of raw, line-delimited word list text
///
/// Implementations must be shareable across threads; a corpus may be loaded
/// from any of them.
pub trait WordSource: Send + Sync {
    /// Human-readable origin, used in logs and status output
    fn describe(&self) -> String;

    /// Fetch the full word list text
    ///
    /// # Errors
    /// Returns `SourceError` if the text cannot be obtained.
    fn fetch(&self) -> Result<String, SourceError>;
}

/// Word list file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, SourceError> {
        fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// The dictionary compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn describe(&self) -> String {
        format!("embedded dictionary ({} words)", WORDS.len())
    }

    fn fetch(&self) -> Result<String, SourceError> {
        Ok(WORDS.join("\n"))
    }
}

/// Word list held in memory
#[derive(Debug, Clone, Default)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// One word per line
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self { text }
    }
}

impl WordSource for TextSource {
    fn describe(&self) -> String {
        "in-memory word list".to_string()
    }

    fn fetch(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_source_reads_contents() {
        let path = std::env::temp_dir().join(format!("wordfinder-source-{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "cat\ndog").unwrap();
        }

        let source = FileSource::new(&path);
        assert_eq!(source.path(), path.as_path());
        assert_eq!(source.fetch().unwrap(), "cat\ndog\n");
        assert_eq!(source.describe(), path.display().to_string());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn file_source_missing_file_is_io_error() {
        let source = FileSource::new("/definitely/not/here/words.txt");
        assert_eq!(source.path(), Path::new("/definitely/not/here/words.txt"));
        let err = source.fetch().unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here/words.txt"));
    }

    #[test]
    fn embedded_source_yields_every_word() {
        let text = EmbeddedSource.fetch().unwrap();
        assert_eq!(text.lines().count(), WORDS.len());
    }

    #[test]
    fn text_source_from_words_joins_lines() {
        let source = TextSource::from_words(["cat", "cot"]);
        assert_eq!(source.fetch().unwrap(), "cat\ncot");
    }
}
