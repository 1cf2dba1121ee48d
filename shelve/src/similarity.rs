//! Similarity scoring between destination paths.
//!
//! The reconciler needs to judge whether a desired destination folder is
//! "the same folder, spelled differently" as one that already exists. Two
//! complementary measures are combined:
//!
//! - a character-sequence ratio over normalized path strings, which catches
//!   near-identical spellings (`2024/January` vs `2024/Jan`)
//! - Jaccard overlap between normalized token sets, which catches reordered
//!   or synonym-equivalent paths (`Images/Photos` vs `photos`)
//!
//! The score is the maximum of the two, always in `[0, 1]`, and symmetric
//! in its arguments.
//!
//! # Examples
//!
//! ```
//! use shelve::similarity::similarity_score;
//!
//! assert_eq!(similarity_score("image_files", "image_files"), 1.0);
//! assert!(similarity_score("2024/Jan", "2024/January") > 0.62);
//! assert!(similarity_score("text_files/pdf_files", "image_files") < 0.62);
//! ```

use std::collections::{HashMap, HashSet};

/// Score the similarity of two relative destination paths.
///
/// Returns the maximum of the character-sequence ratio over the normalized
/// strings and the Jaccard overlap of the token sets. The sequence ratio is
/// computed over a canonical ordering of the pair, so the score is symmetric
/// by construction.
///
/// Pure function: total over any input strings, `1.0` for identical inputs,
/// always within `[0, 1]`.
#[must_use]
pub fn similarity_score(a: &str, b: &str) -> f64 {
    let na = normalize_for_sequence(a);
    let nb = normalize_for_sequence(b);
    let (first, second) = if na <= nb { (&na, &nb) } else { (&nb, &na) };
    let ratio = sequence_ratio(first, second);
    let overlap = jaccard(&tokenize(a), &tokenize(b));
    ratio.max(overlap)
}

/// Lowercase a path and collapse every run of non-alphanumeric characters
/// to a single underscore.
fn normalize_for_sequence(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut in_separator_run = false;
    for c in path.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
            in_separator_run = false;
        } else if !in_separator_run {
            out.push('_');
            in_separator_run = true;
        }
    }
    out
}

/// Split a path into its normalized token set: every maximal alphanumeric
/// run, lowercased, mapped through the synonym table.
fn tokenize(path: &str) -> HashSet<String> {
    let lowered = path.to_lowercase();
    let mut tokens = HashSet::new();
    for run in lowered.split(|c: char| !c.is_alphanumeric()) {
        if run.is_empty() {
            continue;
        }
        let token = normalize_token(run);
        if !token.is_empty() {
            tokens.insert(token);
        }
    }
    tokens
}

/// Map a token through the synonym table; unknown tokens have trailing
/// plural `s` characters stripped.
fn normalize_token(token: &str) -> String {
    let normalized = match token {
        "images" | "image" | "photos" | "pics" | "pictures" => "image",
        "texts" | "text" => "text",
        "documents" | "document" | "docs" => "doc",
        "pdfs" | "pdf" => "pdf",
        "xls" | "xlsx" | "spreadsheets" => "xls",
        "powerpoint" | "presentations" | "presentation" | "pptx" | "ppt" => "ppt",
        "ebooks" | "ebook" | "books" | "book" => "ebook",
        "others" | "other" => "other",
        _ => return token.trim_end_matches('s').to_string(),
    };
    normalized.to_string()
}

/// Jaccard overlap of two token sets; `0.0` when both are empty.
#[allow(clippy::cast_precision_loss)]
fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Longest-matching-blocks similarity ratio between two strings.
///
/// Recursively finds the longest common contiguous block, then the longest
/// blocks in the regions before and after it, and returns `2*M / (|a|+|b|)`
/// where `M` is the total matched length. `1.0` when both strings are
/// empty.
#[allow(clippy::cast_precision_loss)]
fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    // Positions of every character of b, ascending per character
    let mut b_positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b_positions.entry(c).or_default().push(j);
    }

    let mut matched = 0usize;
    let mut regions = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = regions.pop() {
        let (i, j, size) = longest_match(&a, &b_positions, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            regions.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            regions.push((i + size, ahi, j + size, bhi));
        }
    }

    2.0 * matched as f64 / total as f64
}

/// Find the longest block of `a[alo..ahi]` matching somewhere inside
/// `b[blo..bhi]`, returning `(start_in_a, start_in_b, length)`. Length 0
/// means no common character. Earliest block wins ties, keeping the ratio
/// deterministic.
fn longest_match(
    a: &[char],
    b_positions: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0usize;

    // j2len[j] = length of the longest block ending at a[i-1], b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut next_j2len: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b_positions.get(&a[i]) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let prev = if j == 0 {
                    0
                } else {
                    j2len.get(&(j - 1)).copied().unwrap_or(0)
                };
                let size = prev + 1;
                next_j2len.insert(j, size);
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
        }
        j2len = next_j2len;
    }

    (best_i, best_j, best_size)
}
