//! CSV manifest parsing.
//!
//! The manifest lists one article per row:
//!
//! ```text
//! article_id,url,title,content_type,word_count,saved_file_path
//! 1,https://.../PMC4136787/,"Mice in Bion-M 1 space mission",HTML,3000,scraped_articles/article_1.txt
//! ```
//!
//! Fields may be quoted; inside quotes a comma is literal and `""` is an escaped quote.

use std::mem;

use tracing::warn;

use crate::{ContentType, DocumentError};

/// Columns every manifest header must name.
const REQUIRED_COLUMNS: [&str; 3] = ["article_id", "url", "saved_file_path"];

/// One article entry from the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    /// Numeric article id.
    pub article_id: u32,
    /// Source URL.
    pub url: String,
    /// Article file path, relative to the corpus root.
    pub saved_file_path: String,
    /// Title, when the manifest carries one.
    pub title: Option<String>,
    /// HTML or PDF.
    pub content_type: ContentType,
    /// Word count, when present and numeric.
    pub word_count: Option<usize>,
}

impl ManifestRecord {
    /// File name component of `saved_file_path`.
    pub fn file_name(&self) -> &str {
        self.saved_file_path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.saved_file_path)
    }
}

/// A parsed manifest.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    /// Valid records, in file order.
    pub records: Vec<ManifestRecord>,
    /// Number of data rows that were skipped.
    pub skipped: usize,
}

/// Parses manifest text.
///
/// A header row and at least one data row are required. Rows lacking a required field or with
/// a non-numeric id are skipped and counted; they never fail the whole parse.
pub fn parse_manifest(text: &str) -> Result<Manifest, DocumentError> {
    let lines: Vec<&str> = text
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty())
        .collect();
    if lines.len() < 2 {
        return Err(DocumentError::EmptyManifest { lines: lines.len() });
    }

    let header: Vec<String> = parse_line(lines[0])
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();
    for column in REQUIRED_COLUMNS {
        if !header.iter().any(|h| h == column) {
            return Err(DocumentError::MissingColumn { column });
        }
    }

    let mut manifest = Manifest::default();
    for (index, line) in lines.iter().enumerate().skip(1) {
        let values = parse_line(line);
        let field = |name: &str| -> Option<String> {
            let pos = header.iter().position(|h| h == name)?;
            let value = values.get(pos)?.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        let (Some(id), Some(url), Some(saved_file_path)) =
            (field("article_id"), field("url"), field("saved_file_path"))
        else {
            warn!(line = index + 1, "skipping manifest row with missing fields");
            manifest.skipped += 1;
            continue;
        };
        let Ok(article_id) = id.parse::<u32>() else {
            warn!(line = index + 1, id = %id, "skipping manifest row with non-numeric id");
            manifest.skipped += 1;
            continue;
        };

        manifest.records.push(ManifestRecord {
            article_id,
            url,
            saved_file_path,
            title: field("title"),
            content_type: field("content_type")
                .map(|v| ContentType::from_label(&v))
                .unwrap_or_default(),
            word_count: field("word_count").and_then(|v| v.parse().ok()),
        });
    }

    Ok(manifest)
}

/// Splits one CSV line into fields.
///
/// Quotes toggle literal mode and are not part of the value; `""` inside quotes yields `"`.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    values.push(current);
    values
}
