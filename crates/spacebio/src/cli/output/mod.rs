//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use spacebio_document::{Document, Publication};
use spacebio_highlight::emphasize_terms;
pub use spacebio_highlight::{
    Highlighter, dim, error, header, indent_content, rule, subheader, success, warning,
};
use spacebio_index::{
    CategoriesReport, CorpusStats, ErrorResponse, Insight, KeywordsReport, Overview, Priority,
    StatsReport, StatsView, TrendsReport,
};

/// Characters of the abstract shown under each search hit.
const SNIPPET_CHARS: usize = 160;

/// Prints `value` as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Reports a failure, as a JSON envelope on stdout or as `error: ...` on stderr.
pub fn fail(message: &str, json: bool) -> ExitCode {
    if json {
        // The failure exit code stands even if the envelope can't be printed
        print_json(&ErrorResponse::new(message));
    } else {
        eprintln!("error: {message}");
    }
    ExitCode::FAILURE
}

/// Truncates `text` to `max` characters, marking the cut.
fn snippet(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", text[..idx].trim_end()),
        None => text.to_string(),
    }
}

/// Lowercased query terms, for emphasis.
pub fn query_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Prints article hits, emphasizing query terms in titles.
pub fn print_articles(articles: &[Document], query: &str) {
    if articles.is_empty() {
        println!("{}", dim("No results found."));
        return;
    }

    let terms = query_terms(query);
    for doc in articles {
        println!(
            "{} {}",
            dim(&format!("[{}]", doc.id)),
            emphasize_terms(&doc.title, &terms)
        );
        let mut meta = vec![
            doc.categories.join(", "),
            format!("{} words", doc.word_count),
            doc.content_type.as_str().to_string(),
        ];
        if let Some(pmc) = &doc.pmc_id {
            meta.push(format!("PMC{pmc}"));
        }
        println!("    {}", dim(&meta.join(" · ")));
        println!("    {}", snippet(&doc.abstract_text, SNIPPET_CHARS));
        println!();
    }
    println!("{}", dim(&format!("─── {} results ───", articles.len())));
}

/// Prints one article in full.
pub fn print_article(doc: &Document) {
    println!("{}", header(&doc.title));
    println!("{}", rule(60));
    println!("{} {}", subheader("Id:"), doc.id);
    println!("{} {}", subheader("URL:"), doc.url);
    if let Some(pmc) = &doc.pmc_id {
        println!("{} PMC{pmc}", subheader("PMC:"));
    }
    println!("{} {}", subheader("Type:"), doc.content_type.as_str());
    println!("{} {}", subheader("Words:"), doc.word_count);
    println!("{} {}", subheader("Categories:"), doc.categories.join(", "));
    println!("{} {}", subheader("Keywords:"), doc.keywords.join(", "));
    println!();
    println!("{}", subheader("Abstract"));
    println!("{}", doc.abstract_text);
    println!();
    println!("{}", subheader("Content"));
    println!("{}", doc.content);
}

/// Prints publications as a table.
pub fn print_publications(publications: &[Publication]) {
    if publications.is_empty() {
        println!("{}", dim("No results found."));
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Id", "Title", "Type", "Organism", "Year", "Impact"]);
    for p in publications {
        table.add_row(vec![
            Cell::new(&p.id),
            Cell::new(snippet(&p.title, 60)),
            Cell::new(p.experiment_type.as_str()),
            Cell::new(p.organism.as_deref().unwrap_or("-")),
            Cell::new(p.year).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", p.impact_score)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
    println!("{}", dim(&format!("{} publications", publications.len())));
}

/// Builds a two-column table of names and counts.
fn count_table<'a, I>(name: &str, rows: I) -> Table
where
    I: IntoIterator<Item = (&'a str, usize)>,
{
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![name, "Count"]);
    for (label, count) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Prints totals and content types.
fn print_overview(overview: &Overview) {
    println!("{}", subheader("Overview"));
    println!("   Articles:      {}", overview.total_articles);
    println!("   Words:         {}", overview.total_words);
    println!("   Average words: {}", overview.average_words);
    println!();
    let rows = overview
        .content_types
        .iter()
        .map(|(k, v)| (k.as_str(), *v));
    println!("{}", count_table("Content type", rows));
}

/// Prints the keyword table.
fn print_keywords(report: &KeywordsReport) {
    println!("{}", subheader(&format!("Top keywords ({})", report.total)));
    let rows = report
        .top_keywords
        .iter()
        .map(|k| (k.keyword.as_str(), k.count));
    println!("{}", count_table("Keyword", rows));
}

/// Prints the category table, most frequent first.
fn print_categories(report: &CategoriesReport) {
    println!("{}", subheader(&format!("Categories ({})", report.total)));
    let mut rows: Vec<(&str, usize)> = report
        .categories_count
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    println!("{}", count_table("Category", rows));
}

/// Prints activity series and trends.
fn print_trends(report: &TrendsReport) {
    println!("{}", subheader("Research trends"));
    let mut trends = Table::new();
    trends.load_preset(UTF8_FULL_CONDENSED);
    trends.set_header(vec!["Topic", "Articles", "Growth"]);
    for t in &report.research_trends {
        trends.add_row(vec![
            Cell::new(&t.topic),
            Cell::new(t.articles).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:+}%", t.growth)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{trends}");
    println!();

    println!("{}", subheader("Monthly publications"));
    let monthly = report
        .monthly_publications
        .iter()
        .map(|m| format!("{} {}", m.month, m.count))
        .collect::<Vec<_>>()
        .join("  ");
    println!("   {monthly}");
    println!();

    if let (Some(first), Some(last)) = (report.daily_activity.first(), report.daily_activity.last())
    {
        let articles: u32 = report.daily_activity.iter().map(|d| d.articles).sum();
        let words: u32 = report.daily_activity.iter().map(|d| d.words).sum();
        println!("{}", subheader("Daily activity"));
        println!(
            "   {} to {}: {articles} articles, {words} words",
            first.date, last.date
        );
    }
}

/// Prints every section of the statistics.
fn print_full(stats: &CorpusStats) {
    let StatsReport::Overview(overview) = stats.view(StatsView::Overview) else {
        return;
    };
    print_overview(&overview);
    println!();
    if let StatsReport::Keywords(keywords) = stats.view(StatsView::Keywords) {
        print_keywords(&keywords);
        println!();
    }
    if let StatsReport::Categories(categories) = stats.view(StatsView::Categories) {
        print_categories(&categories);
        println!();
    }
    if let StatsReport::Trends(trends) = stats.view(StatsView::Trends) {
        print_trends(&trends);
    }
}

/// Prints one statistics view.
pub fn print_stats(report: &StatsReport) {
    match report {
        StatsReport::Overview(overview) => print_overview(overview),
        StatsReport::Keywords(keywords) => print_keywords(keywords),
        StatsReport::Categories(categories) => print_categories(categories),
        StatsReport::Trends(trends) => print_trends(trends),
        StatsReport::Full(stats) => print_full(stats),
    }
}

/// Styles a priority label.
fn priority_label(priority: Priority) -> String {
    match priority {
        Priority::High => error("high"),
        Priority::Medium => warning("medium"),
        Priority::Low => dim("low"),
    }
}

/// Prints insights as blocks.
pub fn print_insights(insights: &[Insight]) {
    if insights.is_empty() {
        println!("{}", dim("No insights."));
        return;
    }

    for insight in insights {
        println!(
            "{} {}",
            subheader(&insight.title),
            dim(&format!("({}, {})", insight.kind, insight.id))
        );
        let actionable = if insight.actionable {
            success("actionable")
        } else {
            dim("informational")
        };
        println!(
            "   priority {} · confidence {:.0}% · {actionable}",
            priority_label(insight.priority),
            insight.confidence * 100.0
        );
        println!("   {}", insight.description);
        for evidence in &insight.evidence {
            println!("   {} {evidence}", dim("+"));
        }
        for implication in &insight.implications {
            println!("   {} {implication}", dim("→"));
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet() {
        assert_eq!(snippet("short", 10), "short");
        assert_eq!(snippet("one two three", 7), "one two…");
    }

    #[test]
    fn test_query_terms() {
        assert_eq!(query_terms("  Bone  LOSS "), vec!["bone", "loss"]);
    }

    #[test]
    fn test_count_table_renders_rows() {
        let table = count_table("Keyword", [("space", 4), ("bone", 2)]).to_string();
        assert!(table.contains("space"));
        assert!(table.contains("Count"));
    }
}
