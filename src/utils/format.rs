use crate::models::ChapterUnit;

/// Compact human label for a day's chapters.
///
/// - one chapter: `Genesis 1`
/// - one book, consecutive: `Genesis 1–3`
/// - one book, gaps: `Psalms 1, 3`
/// - across books: `Genesis 50 → Exodus 2`
pub fn chapter_label(chapters: &[ChapterUnit]) -> String {
    let (first, last) = match (chapters.first(), chapters.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return String::new(),
    };
    if chapters.len() == 1 {
        return first.to_string();
    }

    if chapters.iter().all(|c| c.book == first.book) {
        let consecutive = chapters
            .windows(2)
            .all(|pair| pair[1].chapter == pair[0].chapter + 1);
        if consecutive {
            return format!("{} {}–{}", first.book, first.chapter, last.chapter);
        }
        let list: Vec<String> = chapters.iter().map(|c| c.chapter.to_string()).collect();
        return format!("{} {}", first.book, list.join(", "));
    }

    format!("{} → {}", first, last)
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Format a 0.0..=1.0 ratio as a whole percentage
pub fn format_percent(ratio: f64) -> String {
    format!("{:.0}%", (ratio * 100.0).clamp(0.0, 100.0))
}
