//! The fixed 66-book, 1,189-chapter reading catalog.

use once_cell::sync::Lazy;

use crate::models::{Book, ChapterUnit, Testament};

pub const TOTAL_CHAPTERS: usize = 1189;

const fn ot(name: &'static str, chapters: u32) -> Book {
    Book {
        name,
        chapters,
        testament: Testament::Old,
    }
}

const fn nt(name: &'static str, chapters: u32) -> Book {
    Book {
        name,
        chapters,
        testament: Testament::New,
    }
}

/// Protestant canon in reading order.
pub const BOOKS: &[Book] = &[
    ot("Genesis", 50),
    ot("Exodus", 40),
    ot("Leviticus", 27),
    ot("Numbers", 36),
    ot("Deuteronomy", 34),
    ot("Joshua", 24),
    ot("Judges", 21),
    ot("Ruth", 4),
    ot("1 Samuel", 31),
    ot("2 Samuel", 24),
    ot("1 Kings", 22),
    ot("2 Kings", 25),
    ot("1 Chronicles", 29),
    ot("2 Chronicles", 36),
    ot("Ezra", 10),
    ot("Nehemiah", 13),
    ot("Esther", 10),
    ot("Job", 42),
    ot("Psalms", 150),
    ot("Proverbs", 31),
    ot("Ecclesiastes", 12),
    ot("Song of Songs", 8),
    ot("Isaiah", 66),
    ot("Jeremiah", 52),
    ot("Lamentations", 5),
    ot("Ezekiel", 48),
    ot("Daniel", 12),
    ot("Hosea", 14),
    ot("Joel", 3),
    ot("Amos", 9),
    ot("Obadiah", 1),
    ot("Jonah", 4),
    ot("Micah", 7),
    ot("Nahum", 3),
    ot("Habakkuk", 3),
    ot("Zephaniah", 3),
    ot("Haggai", 2),
    ot("Zechariah", 14),
    ot("Malachi", 4),
    nt("Matthew", 28),
    nt("Mark", 16),
    nt("Luke", 24),
    nt("John", 21),
    nt("Acts", 28),
    nt("Romans", 16),
    nt("1 Corinthians", 16),
    nt("2 Corinthians", 13),
    nt("Galatians", 6),
    nt("Ephesians", 6),
    nt("Philippians", 4),
    nt("Colossians", 4),
    nt("1 Thessalonians", 5),
    nt("2 Thessalonians", 3),
    nt("1 Timothy", 6),
    nt("2 Timothy", 4),
    nt("Titus", 3),
    nt("Philemon", 1),
    nt("Hebrews", 13),
    nt("James", 5),
    nt("1 Peter", 5),
    nt("2 Peter", 3),
    nt("1 John", 5),
    nt("2 John", 1),
    nt("3 John", 1),
    nt("Jude", 1),
    nt("Revelation", 22),
];

static CANON: Lazy<Catalog> = Lazy::new(|| Catalog::from_books(BOOKS));

/// Ordered, immutable sequence of chapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    units: Vec<ChapterUnit>,
}

impl Catalog {
    /// The process-wide canonical catalog, built on first use.
    pub fn canonical() -> &'static Catalog {
        &CANON
    }

    pub fn from_books(books: &[Book]) -> Self {
        let units = books
            .iter()
            .flat_map(|book| (1..=book.chapters).map(move |chapter| (book.name, chapter)))
            .enumerate()
            .map(|(flat_index, (book, chapter))| ChapterUnit {
                book,
                chapter,
                flat_index,
            })
            .collect();
        Self { units }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, flat_index: usize) -> Option<&ChapterUnit> {
        self.units.get(flat_index)
    }

    /// Chapters in `range`, clipped to the catalog bounds.
    pub fn slice(&self, range: std::ops::Range<usize>) -> &[ChapterUnit] {
        let end = range.end.min(self.units.len());
        let start = range.start.min(end);
        &self.units[start..end]
    }

    pub fn units(&self) -> &[ChapterUnit] {
        &self.units
    }

    /// Flat index where `testament` begins.
    pub fn testament_start(&self, testament: Testament) -> Option<usize> {
        let book = BOOKS.iter().find(|b| b.testament == testament)?;
        self.book_start(book.name)
    }

    /// Flat index of the first chapter of `book` (case-insensitive).
    pub fn book_start(&self, book: &str) -> Option<usize> {
        self.units
            .iter()
            .find(|u| u.book.eq_ignore_ascii_case(book))
            .map(|u| u.flat_index)
    }
}
