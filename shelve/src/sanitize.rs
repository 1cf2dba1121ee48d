//! Normalization of suggested labels into safe folder/file name fragments.
//!
//! Classification collaborators (model-backed or otherwise) produce free-form
//! folder and file name suggestions. This module reduces such a suggestion to
//! a bounded, filesystem-safe fragment: lowercase words joined by single
//! underscores, with filler words, extension words, and punctuation removed.
//!
//! The function is total: any input, including the empty string, produces a
//! non-empty result, falling back to `"untitled"` when nothing survives
//! cleaning.
//!
//! # Examples
//!
//! ```
//! use shelve::sanitize::sanitize_label;
//!
//! assert_eq!(sanitize_label("Quarterly Report (Final!)"), "quarterly_report_final");
//! assert_eq!(sanitize_label("IMG_2024.jpg"), "2024");
//! assert_eq!(sanitize_label(""), "untitled");
//! ```

/// Default maximum length of a sanitized name, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 50;

/// Default maximum number of underscore-delimited words kept.
pub const DEFAULT_MAX_WORDS: usize = 5;

/// Returned when sanitizing leaves nothing usable.
pub const FALLBACK_NAME: &str = "untitled";

/// Words removed from labels before assembly: filler words models like to
/// emit, data-type nouns, and extension words that would otherwise leak
/// into folder names.
const STOP_WORDS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "img", "txt", "md", "pdf", "docx", "xls", "xlsx", "csv",
    "ppt", "pptx", "image", "picture", "photo", "this", "that", "these", "those", "here", "there",
    "please", "note", "additional", "notes", "folder", "name", "sure", "heres", "a", "an", "the",
    "and", "of", "in", "to", "for", "on", "with", "your", "answer", "should", "be", "only",
    "summary", "summarize", "text", "category",
];

/// Sanitize a suggested label with the default length and word bounds.
///
/// Equivalent to [`sanitize`] with [`DEFAULT_MAX_LENGTH`] and
/// [`DEFAULT_MAX_WORDS`].
#[must_use]
pub fn sanitize_label(label: &str) -> String {
    sanitize(label, DEFAULT_MAX_LENGTH, DEFAULT_MAX_WORDS)
}

/// Sanitize a suggested label into a safe name fragment.
///
/// Cleaning proceeds as:
/// 1. strip a trailing extension (last-dot rule; a leading-dots-only prefix
///    is not an extension, so `".bashrc"` and `"...."` keep their dots)
/// 2. remove stop words, where any non-alphanumeric character (including
///    underscore and hyphen) bounds a word
/// 3. drop every character that is neither alphanumeric, underscore, nor
///    whitespace
/// 4. collapse whitespace/underscore runs to single underscores, lowercase,
///    and trim leading/trailing underscores
/// 5. keep at most `max_words` non-empty words and at most `max_length`
///    characters
///
/// An empty result becomes [`FALLBACK_NAME`]. Total over any input.
///
/// # Examples
///
/// ```
/// use shelve::sanitize::sanitize;
///
/// assert_eq!(sanitize("Heres the summary of Project Alpha", 50, 5), "project_alpha");
/// assert_eq!(sanitize("one two three", 50, 2), "one_two");
/// assert_eq!(sanitize("....", 50, 5), "untitled");
/// ```
#[must_use]
pub fn sanitize(label: &str, max_length: usize, max_words: usize) -> String {
    let stem = strip_extension(label);
    let kept = remove_stop_words(stem);

    // Keep only word characters and whitespace
    let filtered: String = kept
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    // Collapse whitespace/underscore runs while lowercasing
    let mut collapsed = String::with_capacity(filtered.len());
    let mut in_separator_run = false;
    for c in filtered.chars() {
        if c == '_' || c.is_whitespace() {
            if !in_separator_run {
                collapsed.push('_');
                in_separator_run = true;
            }
        } else {
            collapsed.extend(c.to_lowercase());
            in_separator_run = false;
        }
    }

    let words: Vec<&str> = collapsed
        .trim_matches('_')
        .split('_')
        .filter(|w| !w.is_empty())
        .take(max_words)
        .collect();
    let mut name = words.join("_");

    if name.chars().count() > max_length {
        name = name.chars().take(max_length).collect();
    }

    if name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        name
    }
}

/// Strip a trailing extension using the last-dot rule.
///
/// The extension starts at the last dot, provided at least one non-dot
/// character precedes it; otherwise there is no extension.
fn strip_extension(label: &str) -> &str {
    if let Some(dot) = label.rfind('.') {
        if label[..dot].chars().any(|c| c != '.') {
            return &label[..dot];
        }
    }
    label
}

/// Remove stop words, treating every non-alphanumeric character as a word
/// boundary. Boundary characters themselves are preserved for the later
/// collapsing step.
fn remove_stop_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();
    for c in text.chars() {
        if c.is_alphanumeric() {
            word.push(c);
        } else {
            if !word.is_empty() && !is_stop_word(&word) {
                out.push_str(&word);
            }
            word.clear();
            out.push(c);
        }
    }
    if !word.is_empty() && !is_stop_word(&word) {
        out.push_str(&word);
    }
    out
}

fn is_stop_word(word: &str) -> bool {
    let lowered = word.to_lowercase();
    STOP_WORDS.contains(&lowered.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_falls_back() {
        assert_eq!(sanitize_label(""), FALLBACK_NAME);
    }

    #[test]
    fn test_dots_only_falls_back() {
        assert_eq!(sanitize_label("...."), FALLBACK_NAME);
    }

    #[test]
    fn test_whitespace_only_falls_back() {
        assert_eq!(sanitize_label("   \t  "), FALLBACK_NAME);
    }

    #[test]
    fn test_stop_words_only_falls_back() {
        assert_eq!(sanitize_label("please note the summary"), FALLBACK_NAME);
    }

    #[test]
    fn test_plain_label() {
        assert_eq!(sanitize_label("Meeting Minutes"), "meeting_minutes");
    }

    #[test]
    fn test_extension_is_stripped() {
        assert_eq!(sanitize_label("report.pdf"), "report");
        assert_eq!(sanitize_label("archive.tar.gz"), "archive_tar");
    }

    #[test]
    fn test_camera_style_name_drops_prefix_and_extension() {
        let name = sanitize_label("IMG_2024.jpg");
        assert_eq!(name, "2024");
        assert!(!name.contains("img"));
        assert!(!name.contains("jpg"));
    }

    #[test]
    fn test_leading_dot_name_has_no_extension() {
        // ".bashrc" has no extension under the last-dot rule; the dot is
        // then dropped as a non-word character
        assert_eq!(sanitize_label(".bashrc"), "bashrc");
    }

    #[test]
    fn test_stop_words_removed_case_insensitively() {
        assert_eq!(
            sanitize_label("Heres THE Summary of Project Alpha"),
            "project_alpha"
        );
    }

    #[test]
    fn test_apostrophe_splits_words() {
        // "Here's" bounds at the apostrophe: "here" is a stop word, the
        // trailing "s" is not
        assert_eq!(sanitize_label("Here's Project Alpha"), "s_project_alpha");
    }

    #[test]
    fn test_stop_word_not_removed_inside_larger_word() {
        // "theme" contains "the" but is not a stop word itself
        assert_eq!(sanitize_label("theme colors"), "theme_colors");
    }

    #[test]
    fn test_underscore_bounds_stop_words() {
        assert_eq!(sanitize_label("summary_of_meeting"), "meeting");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(sanitize_label("Q3: Results & Analysis!"), "q3_results_analysis");
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(sanitize_label("a1  b2\t\tc3___d4"), "a1_b2_c3_d4");
    }

    #[test]
    fn test_word_cap() {
        assert_eq!(sanitize("one two three four five six seven", 50, 5), "one_two_three_four_five");
        assert_eq!(sanitize("one two three", 50, 2), "one_two");
    }

    #[test]
    fn test_length_cap() {
        let long = "abcdefghijklmnopqrstuvwxyz0123456789 zyxwvutsrqponmlkjihgfedcba";
        let name = sanitize(long, 10, 5);
        assert_eq!(name.chars().count(), 10);
    }

    #[test]
    fn test_unicode_letters_survive() {
        assert_eq!(sanitize_label("résumé draft"), "résumé_draft");
    }

    #[test]
    fn test_result_never_empty() {
        for input in ["", " ", "....", "!!!", "___", "the of and", "a.b"] {
            let name = sanitize_label(input);
            assert!(!name.is_empty(), "empty result for input {input:?}");
        }
    }
}
