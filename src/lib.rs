//! # rs-feedpost
//!
//! Heuristic post extraction for the obfuscated markup of mobile social
//! feeds.
//!
//! Feed pages rarely carry semantic markup. Posts are recognized instead by
//! a handful of styling and component markers: container components, text
//! areas, styled author links and `time`/`abbr` elements. This crate turns
//! those markers into structured [`PostRecord`]s, cleans them into
//! [`CleanPost`]s, and ships the [`DeviceProfile`] used to make the capturing
//! browser look like an ordinary phone.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_feedpost::{FeedDocument, Options};
//!
//! let html = r#"
//!     <div data-mcomponent="MContainer">
//!         <h3><a href="/jane">Jane Doe</a></h3>
//!         <div data-mcomponent="TextArea"><span class="f1">Just had a great lunch!!</span></div>
//!         <abbr title="Monday at 12:00">2h</abbr>
//!     </div>"#;
//!
//! let page = FeedDocument::parse(html, "https://m.example.com/")?;
//! let posts = page.extract_posts(&Options::default());
//!
//! assert_eq!(posts.len(), 1);
//! assert_eq!(posts[0].text, "Just had a great lunch!!");
//! assert_eq!(posts[0].timestamp, "Monday at 12:00");
//! # Ok::<(), rs_feedpost::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Container extraction**: first acceptable text area per container
//! - **Author resolution**: container-scoped, or anchored on known post text
//! - **Cleaning**: noise filtering, deduplication, confidence scoring
//! - **Fingerprint profiles**: navigator/screen overrides and request headers
//!
//! Extraction never fails. Missing markers leave fields empty or produce no
//! record; only snapshot construction and report serialization return
//! [`Error`].

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Feed markers and rule-based element queries.
pub mod selector;

/// Post text classification.
pub mod classifier;

/// Author resolution, text-anchored and container-scoped.
pub mod author;

/// Timestamp resolution.
pub mod timestamp;

/// Per-container post extraction.
pub mod container;

/// Cleaning pass over raw records.
pub mod cleaning;

/// Cleaning statistics.
pub mod stats;

/// Device fingerprint profiles and overlays.
pub mod fingerprint;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Parsed page snapshots.
pub mod document;

// Public API - re-exports
pub use author::extract_author_for_post;
pub use cleaning::clean_posts;
pub use container::{extract_container_post_data, extract_container_post_with_options};
pub use document::{FeedDocument, Harvest};
pub use error::{Error, Result};
pub use fingerprint::{apply_fingerprint_profile, DeviceProfile, EnvironmentOverlay};
pub use options::{
    Options, MAX_AUTHOR_ANCESTOR_DEPTH, MIN_AUTHOR_CHARS, MIN_CONTENT_CHARS, MIN_NOISE_CHARS,
    MIN_POST_TEXT_CHARS,
};
pub use result::{CleanPost, PostRecord};
pub use stats::CleaningStats;

/// Extract every post from an HTML string captured at `location`.
///
/// Convenience wrapper around [`FeedDocument::parse`] and
/// [`FeedDocument::extract_posts`] with default options.
///
/// # Errors
///
/// Returns [`Error::InvalidLocation`] if `location` is not an absolute URL.
pub fn extract_posts(html: &str, location: &str) -> Result<Vec<PostRecord>> {
    extract_posts_with_options(html, location, &Options::default())
}

/// [`extract_posts`] with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidLocation`] if `location` is not an absolute URL.
pub fn extract_posts_with_options(html: &str, location: &str, options: &Options) -> Result<Vec<PostRecord>> {
    Ok(FeedDocument::parse(html, location)?.extract_posts(options))
}
