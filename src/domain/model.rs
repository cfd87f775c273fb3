use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformResult {
    pub lines: Vec<String>,
    pub source_line_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

impl FileStats {
    /// 計算文字內容的統計數據
    pub fn from_content(content: &str) -> Self {
        Self {
            // newline count + 1, so content without a trailing newline still
            // counts its last line
            lines: content.matches('\n').count() + 1,
            words: content.split_whitespace().count(),
            chars: content.chars().count(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub content: String,
    pub stats: FileStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_sample_content() {
        let stats = FileStats::from_content("a b\nc");
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.words, 3);
        assert_eq!(stats.chars, 5);
    }

    #[test]
    fn test_stats_empty_content() {
        let stats = FileStats::from_content("");
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.chars, 0);
    }

    #[test]
    fn test_stats_trailing_newline_counts_extra_line() {
        let stats = FileStats::from_content("one\ntwo\n");
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn test_stats_chars_are_unicode_scalars() {
        let stats = FileStats::from_content("héllo");
        assert_eq!(stats.chars, 5);
        assert_eq!(stats.words, 1);
    }

    #[test]
    fn test_stats_words_split_on_whitespace_runs() {
        let stats = FileStats::from_content("  one \t two\n\nthree  ");
        assert_eq!(stats.words, 3);
    }
}
