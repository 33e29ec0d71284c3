//! Document snapshots.
//!
//! [`FeedDocument`] pairs a parsed page with the location it was captured
//! from. Every record extracted from it carries that location.

use dom_query::{Document, Selection};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::cleaning;
use crate::container;
use crate::encoding;
use crate::result::{CleanPost, PostRecord};
use crate::stats::CleaningStats;
use crate::{author, Error, Options, Result};

/// A parsed feed page and its location.
pub struct FeedDocument {
    document: Document,
    location: Url,
}

/// Output of a full extraction and cleaning run over one snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Harvest {
    pub raw_posts: Vec<PostRecord>,
    pub cleaned_posts: Vec<CleanPost>,
    pub stats: CleaningStats,
}

impl FeedDocument {
    /// Parse `html` captured at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLocation`] if `location` is not an absolute URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rs_feedpost::{FeedDocument, Options};
    ///
    /// let page = FeedDocument::parse(r#"
    ///     <div data-mcomponent="MContainer">
    ///         <span class="f2 a">Jane Doe</span>
    ///         <div data-mcomponent="TextArea"><span class="f1">Just had a great lunch!!</span></div>
    ///         <time datetime="2024-01-01T12:00:00Z">2h</time>
    ///     </div>"#, "https://m.example.com/home.php")?;
    ///
    /// let posts = page.extract_posts(&Options::default());
    /// assert_eq!(posts[0].author, "Jane Doe");
    /// assert_eq!(posts[0].url, "https://m.example.com/home.php");
    /// # Ok::<(), rs_feedpost::Error>(())
    /// ```
    pub fn parse(html: &str, location: &str) -> Result<Self> {
        let location = Url::parse(location).map_err(|source| Error::InvalidLocation {
            location: location.to_string(),
            source,
        })?;
        debug!(bytes = html.len(), %location, "parsing feed snapshot");

        Ok(Self {
            document: Document::from(html),
            location,
        })
    }

    /// Parse a raw snapshot, decoding it from its declared charset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLocation`] if `location` is not an absolute URL.
    pub fn from_bytes(html: &[u8], location: &str) -> Result<Self> {
        Self::parse(&encoding::transcode_to_utf8(html), location)
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    /// One record per feed container that yields a post, in document order.
    #[must_use]
    pub fn extract_posts(&self, options: &Options) -> Vec<PostRecord> {
        container::extract_posts(&self.document, self.location(), options)
    }

    /// Extract the post held by one container of this document.
    #[must_use]
    pub fn extract_container_post_data(&self, container: &Selection, index: usize) -> Option<PostRecord> {
        container::extract_container_post_data(container, index, self.location())
    }

    /// Text-anchored author lookup over the whole document.
    #[must_use]
    pub fn extract_author_for_post(&self, content_text: &str) -> String {
        author::extract_author_for_post(&self.document, content_text)
    }

    /// Run the cleaning pass over records extracted from this document.
    #[must_use]
    pub fn clean_posts(&self, raw_posts: &[PostRecord], options: &Options) -> Vec<CleanPost> {
        cleaning::clean_posts(&self.document, raw_posts, options)
    }

    /// Extract, clean and summarize in one go.
    #[must_use]
    pub fn harvest(&self, options: &Options) -> Harvest {
        let raw_posts = self.extract_posts(options);
        let cleaned_posts = self.clean_posts(&raw_posts, options);
        let stats = CleaningStats::from_posts(&cleaned_posts);

        Harvest { raw_posts, cleaned_posts, stats }
    }
}

impl std::fmt::Debug for FeedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedDocument")
            .field("location", &self.location.as_str())
            .finish_non_exhaustive()
    }
}
