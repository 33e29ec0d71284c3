//! Cleaning statistics.
//!
//! A summary of one cleaning pass for downstream reports: quality buckets by
//! confidence, the highest-confidence posts, and author coverage.

use std::collections::HashMap;

use chrono::Utc;
use serde::Serialize;

use crate::result::CleanPost;
use crate::Result;

/// Method tag recorded in every summary.
pub const EXTRACTION_METHOD: &str = "Container extraction + cleaning";

const TOP_POSTS: usize = 10;
const TOP_AUTHORS: usize = 10;
const PREVIEW_CHARS: usize = 100;

const HIGH_CONFIDENCE: f64 = 0.8;
const MEDIUM_CONFIDENCE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningStats {
    pub summary: Summary,
    pub top_posts: Vec<TopPost>,
    pub quality_distribution: QualityDistribution,
    pub author_stats: AuthorStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub cleaned_posts: usize,
    /// RFC 3339 time the statistics were computed.
    pub processing_date: String,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPost {
    /// 1-based.
    pub rank: usize,
    /// Two decimal places.
    pub confidence: String,
    pub text: String,
    pub author: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityDistribution {
    pub high_confidence: usize,
    pub medium_confidence: usize,
    pub low_confidence: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorStats {
    pub total_authors: usize,
    pub posts_with_author: usize,
    pub posts_without_author: usize,
    /// Percentage with one decimal, e.g. `"66.7%"`.
    pub author_coverage: String,
    pub top_authors: Vec<AuthorCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorCount {
    pub author: String,
    pub post_count: usize,
}

impl CleaningStats {
    /// Compute statistics for `posts`.
    #[must_use]
    pub fn from_posts(posts: &[CleanPost]) -> Self {
        Self {
            summary: Summary {
                cleaned_posts: posts.len(),
                processing_date: Utc::now().to_rfc3339(),
                method: EXTRACTION_METHOD.to_string(),
            },
            top_posts: top_posts(posts),
            quality_distribution: QualityDistribution::from_posts(posts),
            author_stats: AuthorStats::from_posts(posts),
        }
    }

    /// Pretty-printed JSON, for callers that persist reports.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl QualityDistribution {
    #[must_use]
    pub fn from_posts(posts: &[CleanPost]) -> Self {
        let mut dist = Self::default();
        for post in posts {
            if post.confidence >= HIGH_CONFIDENCE {
                dist.high_confidence += 1;
            } else if post.confidence >= MEDIUM_CONFIDENCE {
                dist.medium_confidence += 1;
            } else {
                dist.low_confidence += 1;
            }
        }
        dist
    }
}

impl AuthorStats {
    /// Authors are counted by exact name. Ties in post count keep first-seen
    /// order.
    #[must_use]
    pub fn from_posts(posts: &[CleanPost]) -> Self {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for post in posts {
            let author = post.author.as_str();
            if author.trim().is_empty() {
                continue;
            }
            let count = counts.entry(author).or_insert(0);
            if *count == 0 {
                order.push(author);
            }
            *count += 1;
        }

        let posts_with_author: usize = counts.values().sum();
        let mut top_authors: Vec<AuthorCount> = order
            .iter()
            .map(|author| AuthorCount {
                author: (*author).to_string(),
                post_count: counts.get(author).copied().unwrap_or_default(),
            })
            .collect();
        // Stable sort keeps first-seen order among equal counts.
        top_authors.sort_by(|a, b| b.post_count.cmp(&a.post_count));
        top_authors.truncate(TOP_AUTHORS);

        let author_coverage = if posts.is_empty() {
            "0.0%".to_string()
        } else {
            format!("{:.1}%", posts_with_author as f64 / posts.len() as f64 * 100.0)
        };

        Self {
            total_authors: counts.len(),
            posts_with_author,
            posts_without_author: posts.len() - posts_with_author,
            author_coverage,
            top_authors,
        }
    }
}

fn top_posts(posts: &[CleanPost]) -> Vec<TopPost> {
    let mut ranked: Vec<&CleanPost> = posts.iter().collect();
    ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    ranked
        .into_iter()
        .take(TOP_POSTS)
        .enumerate()
        .map(|(i, post)| TopPost {
            rank: i + 1,
            confidence: format!("{:.2}", post.confidence),
            text: truncate(&post.text, PREVIEW_CHARS),
            author: post.author.clone(),
            timestamp: post.timestamp.clone(),
        })
        .collect()
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
