//! spacebio: search and analysis of NASA bioscience publications.
//!
//! spacebio loads a corpus of scraped NASA bioscience articles, tags each article with coarse
//! research categories and answers ranked searches, statistics and rule-based insight queries
//! against a time-boxed in-memory cache. The corpus comes from a CSV manifest with per-article
//! text files, from a dataset compiled into the binary, or from a small fixed fallback set.

#![warn(missing_docs)]

pub mod cli;
