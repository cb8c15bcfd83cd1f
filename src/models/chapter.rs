use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Testament {
    Old,
    New,
}

impl std::fmt::Display for Testament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Testament::Old => write!(f, "Old Testament"),
            Testament::New => write!(f, "New Testament"),
        }
    }
}

/// One book of the canon and how many chapters it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    pub name: &'static str,
    pub chapters: u32,
    pub testament: Testament,
}

/// A single chapter in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChapterUnit {
    pub book: &'static str,
    pub chapter: u32,
    /// 0-based position in the whole catalog.
    #[serde(skip)]
    pub flat_index: usize,
}

impl std::fmt::Display for ChapterUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)
    }
}
