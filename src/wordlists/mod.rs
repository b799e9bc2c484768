//! Word list sources and parsing
//!
//! A corpus reads its words through a `WordSource`; the default source is the
//! dictionary compiled into the binary.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{ParsedWordList, parse_word_list};
pub use source::{EmbeddedSource, FileSource, SourceError, TextSource, WordSource};
