use rs_feedpost::{CleaningStats, FeedDocument, Options};

use crate::{FEED_PAGE, LOCATION};

#[test]
fn cleaning_drops_ui_noise_and_recovers_authors() {
    let page = FeedDocument::parse(FEED_PAGE, LOCATION).unwrap();
    let harvest = page.harvest(&Options::default());

    let summary: Vec<(&str, &str, &str)> = harvest
        .cleaned_posts
        .iter()
        .map(|p| (p.id.as_str(), p.original_id.as_str(), p.author.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("clean_post_1", "container_post_1", "Rina Kartika"),
            ("clean_post_2", "container_post_3", "Agus Pratama"),
            ("clean_post_3", "container_post_6", "Dewi Lestari"),
        ]
    );

    assert!(!harvest.cleaned_posts[0].timestamp_inferred);
    assert!(harvest.cleaned_posts[2].timestamp_inferred);
}

#[test]
fn stats_summarize_the_cleaned_posts() {
    let page = FeedDocument::parse(FEED_PAGE, LOCATION).unwrap();
    let stats = page.harvest(&Options::default()).stats;

    assert_eq!(stats.summary.cleaned_posts, 3);
    assert_eq!(stats.quality_distribution.high_confidence, 1);
    assert_eq!(stats.quality_distribution.medium_confidence, 0);
    assert_eq!(stats.quality_distribution.low_confidence, 2);
    assert_eq!(stats.author_stats.total_authors, 3);
    assert_eq!(stats.author_stats.author_coverage, "100.0%");
    assert_eq!(stats.top_posts[0].author, "Agus Pratama");
    assert_eq!(stats.top_posts[0].confidence, "0.80");
}

#[test]
fn author_enhancement_can_be_disabled() {
    let page = FeedDocument::parse(FEED_PAGE, LOCATION).unwrap();
    let options = Options { enhance_authors: false, ..Options::default() };
    let raw = page.extract_posts(&options);

    let cleaned = page.clean_posts(&raw, &options);
    assert!(cleaned.iter().all(|p| p.author != "Agus Pratama"));
    assert_eq!(cleaned.len(), 2);
}

#[test]
fn report_round_trips_through_json() {
    let page = FeedDocument::parse(FEED_PAGE, LOCATION).unwrap();
    let harvest = page.harvest(&Options::default());
    let report = CleaningStats::from_posts(&harvest.cleaned_posts).to_json_pretty().unwrap();

    let value: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(value["summary"]["cleanedPosts"], 3);
    assert_eq!(value["authorStats"]["topAuthors"].as_array().map(Vec::len), Some(3));
}
