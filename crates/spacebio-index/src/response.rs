//! JSON response envelopes.
//!
//! Every envelope carries `success`. Failures use `{"success": false, "error": ...}`.

use serde::Serialize;
use spacebio_document::{Document, Publication};

use crate::{Insight, StatsReport};

/// Article search results.
#[derive(Debug, Clone, Serialize)]
pub struct ArticlesResponse {
    /// Always true.
    pub success: bool,
    /// Matching articles.
    pub articles: Vec<Document>,
    /// Number of articles returned.
    pub total: usize,
    /// The query, `null` when blank.
    pub query: Option<String>,
}

impl ArticlesResponse {
    /// Wraps article results for `query`.
    pub fn new(articles: Vec<Document>, query: &str) -> Self {
        Self {
            success: true,
            total: articles.len(),
            articles,
            query: (!query.trim().is_empty()).then(|| query.to_string()),
        }
    }
}

/// Publication search results.
#[derive(Debug, Clone, Serialize)]
pub struct PublicationsResponse {
    /// Always true.
    pub success: bool,
    /// Matching publications.
    pub publications: Vec<Publication>,
    /// Number of publications returned.
    pub total: usize,
}

impl PublicationsResponse {
    /// Wraps publication results.
    pub fn new(publications: Vec<Publication>) -> Self {
        Self {
            success: true,
            total: publications.len(),
            publications,
        }
    }
}

/// One statistics view.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Always true.
    pub success: bool,
    /// The projected view.
    pub data: StatsReport,
}

impl StatsResponse {
    /// Wraps a statistics view.
    pub fn new(data: StatsReport) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Generated insights.
#[derive(Debug, Clone, Serialize)]
pub struct InsightsResponse {
    /// Always true.
    pub success: bool,
    /// Selected insights.
    pub insights: Vec<Insight>,
    /// Number of insights returned.
    pub total: usize,
}

impl InsightsResponse {
    /// Wraps selected insights.
    pub fn new(insights: Vec<Insight>) -> Self {
        Self {
            success: true,
            total: insights.len(),
            insights,
        }
    }
}

/// A failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always false.
    pub success: bool,
    /// What went wrong.
    pub error: String,
}

impl ErrorResponse {
    /// Wraps an error message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
