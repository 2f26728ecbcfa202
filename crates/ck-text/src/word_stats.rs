//! Word counter statistics.

use ck_core::StatField;
use unicode_segmentation::UnicodeSegmentation;

/// Counts reported by the word counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordStats {
    /// Whitespace-separated words.
    pub words: usize,
    /// User-perceived characters (grapheme clusters).
    pub characters: usize,
    /// Characters excluding whitespace.
    pub characters_no_spaces: usize,
    /// Lines of text; zero for empty input.
    pub lines: usize,
    /// Estimated reading time in whole minutes, rounded up.
    pub read_minutes: usize,
}

impl WordStats {
    /// `"N min read"`.
    pub fn read_time(&self) -> String {
        format!("{} min read", self.read_minutes)
    }

    /// The statistics as ordered display fields.
    pub fn fields(&self) -> Vec<StatField> {
        vec![
            StatField::new("Words", self.words.to_string()),
            StatField::new("Characters", self.characters.to_string()),
            StatField::new(
                "Characters (no spaces)",
                self.characters_no_spaces.to_string(),
            ),
            StatField::new("Lines", self.lines.to_string()),
            StatField::new("Reading Time", self.read_time()),
        ]
    }
}

/// Analyse `text` at a reading speed of `words_per_minute`.
///
/// A speed of zero is treated as one word per minute.
pub fn analyze(text: &str, words_per_minute: u32) -> WordStats {
    let words = text.split_whitespace().count();
    let characters = text.graphemes(true).count();
    let characters_no_spaces = text
        .graphemes(true)
        .filter(|g| !g.chars().all(char::is_whitespace))
        .count();
    let lines = text.lines().count();
    let wpm = words_per_minute.max(1) as usize;
    WordStats {
        words,
        characters,
        characters_no_spaces,
        lines,
        read_minutes: words.div_ceil(wpm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_and_characters() {
        let stats = analyze("Hello world\nsecond line", 200);
        assert_eq!(stats.words, 4);
        assert_eq!(stats.characters, 23);
        assert_eq!(stats.characters_no_spaces, 20);
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.read_time(), "1 min read");
    }

    #[test]
    fn empty_text() {
        let stats = analyze("   ", 200);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters_no_spaces, 0);
        assert_eq!(stats.read_time(), "0 min read");
    }

    #[test]
    fn read_time_rounds_up() {
        let text = "word ".repeat(201);
        assert_eq!(analyze(&text, 200).read_minutes, 2);
        assert_eq!(analyze(&text, 100).read_minutes, 3);
    }

    #[test]
    fn graphemes_count_once() {
        // "e" + combining acute accent is one user-perceived character.
        let stats = analyze("e\u{301}", 200);
        assert_eq!(stats.characters, 1);
    }

    #[test]
    fn fields_keep_display_order() {
        let labels: Vec<_> = analyze("a b", 200)
            .fields()
            .into_iter()
            .map(|f| f.label)
            .collect();
        assert_eq!(
            labels,
            ["Words", "Characters", "Characters (no spaces)", "Lines", "Reading Time"]
        );
    }
}
