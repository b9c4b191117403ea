//! Heuristic field extraction from raw article text.
//!
//! Article files are scraped plain text: a title somewhere in the first lines, often an
//! "Abstract" heading, and a PMC id in the source URL. These helpers recover display fields
//! from that text. All lengths are measured in characters.

/// Abstract used for articles when nothing suitable is found.
pub const ARTICLE_ABSTRACT_FALLBACK: &str = "Abstract not available";

/// Abstract used for publications when nothing suitable is found.
pub const PUBLICATION_ABSTRACT_FALLBACK: &str = "This NASA bioscience research explores important \
     biological processes and their implications for space exploration and human health.";

/// Author list used when no author line is found.
pub const DEFAULT_AUTHOR: &str = "NASA Research Team";

/// How many leading lines are scanned for a title.
const TITLE_SCAN_LINES: usize = 10;

/// How many leading lines are scanned for a standalone abstract paragraph.
const ABSTRACT_SCAN_LINES: usize = 15;

/// Lines following an abstract heading that are joined into the abstract.
const ABSTRACT_HEADING_SPAN: usize = 4;

/// How many leading lines are scanned for an author list.
const AUTHOR_SCAN_LINES: usize = 5;

/// Parameters of abstract extraction.
#[derive(Debug, Clone, Copy)]
pub struct AbstractRule<'a> {
    /// Character budget of the result.
    pub budget: usize,
    /// Exclusive upper bound on the length of a standalone abstract line.
    pub max_line: usize,
    /// Value returned when no abstract is found.
    pub fallback: &'a str,
}

impl AbstractRule<'static> {
    /// Rule used for articles.
    pub fn article(budget: usize) -> Self {
        Self {
            budget,
            max_line: 500,
            fallback: ARTICLE_ABSTRACT_FALLBACK,
        }
    }

    /// Rule used for publications.
    pub fn publication(budget: usize) -> Self {
        Self {
            budget,
            max_line: 800,
            fallback: PUBLICATION_ABSTRACT_FALLBACK,
        }
    }
}

/// Splits text into trimmed, non-blank lines.
pub fn content_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Finds a plausible title among the leading lines.
pub fn extract_title(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .take(TITLE_SCAN_LINES)
        .filter(|line| {
            let len = line.chars().count();
            len > 20 && len < 200 && !line.contains("doi:") && !line.contains("PMC")
        })
        .map(|line| clean_title(line))
        .find(|title| title.chars().count() > 10)
}

/// Title used when none can be extracted: `"<prefix> - PMC<digits>"` or the bare prefix.
pub fn fallback_title(prefix: &str, url: &str) -> String {
    match extract_pmc_id(url) {
        Some(digits) => format!("{prefix} - PMC{digits}"),
        None => prefix.to_string(),
    }
}

/// Strips a leading `<digits>|` marker and stray punctuation from a title line.
fn clean_title(line: &str) -> String {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    let line = match line[digits..].strip_prefix('|') {
        Some(rest) if digits > 0 => rest,
        _ => line,
    };
    line.trim_start_matches(|c: char| !is_word_char(c))
        .trim_end_matches(|c: char| {
            !(is_word_char(c) || c.is_whitespace() || matches!(c, '-' | ':' | '(' | ')'))
        })
        .to_string()
}

/// ASCII word character: letter, digit or underscore.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Extracts an abstract.
///
/// A short line mentioning "abstract" is treated as a heading and the following lines are
/// joined. Failing that, the first long standalone line after the first is used.
pub fn extract_abstract(lines: &[&str], rule: AbstractRule<'_>) -> String {
    let heading = lines
        .iter()
        .position(|line| line.chars().count() < 50 && line.to_lowercase().contains("abstract"));

    if let Some(start) = heading
        && start + 1 < lines.len()
    {
        let end = (start + 1 + ABSTRACT_HEADING_SPAN).min(lines.len());
        let joined = lines[start + 1..end].join(" ");
        return truncate_chars(&joined, rule.budget).to_string();
    }

    lines
        .iter()
        .take(ABSTRACT_SCAN_LINES)
        .skip(1)
        .find(|line| {
            let len = line.chars().count();
            len > 100 && len < rule.max_line
        })
        .map_or_else(
            || rule.fallback.to_string(),
            |line| format!("{}...", truncate_chars(line, rule.budget)),
        )
}

/// Finds an author list: a comma-separated line of at most ten short names.
pub fn extract_authors(lines: &[&str]) -> Vec<String> {
    for line in lines.iter().take(AUTHOR_SCAN_LINES) {
        let len = line.chars().count();
        if !line.contains(',') || len >= 200 || len <= 10 {
            continue;
        }
        let names: Vec<&str> = line.split(',').map(str::trim).collect();
        if names.len() <= 10 && names.iter().all(|n| n.chars().count() < 50) {
            return names.into_iter().take(5).map(String::from).collect();
        }
    }
    vec![DEFAULT_AUTHOR.to_string()]
}

/// Digits following `PMC` in a URL.
pub fn extract_pmc_id(url: &str) -> Option<String> {
    url.match_indices("PMC").find_map(|(pos, _)| {
        let digits: String = url[pos + 3..]
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        (!digits.is_empty()).then_some(digits)
    })
}

/// Whitespace-separated token count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Returns at most `max` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
