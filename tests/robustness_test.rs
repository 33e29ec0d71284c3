use rs_feedpost::{extract_posts, FeedDocument, Options};
use std::time::{Duration, Instant};

const LOCATION: &str = "https://m.example.com/";

#[test]
fn empty_input_yields_no_posts() {
    assert!(extract_posts("", LOCATION).unwrap().is_empty());
}

#[test]
fn malformed_markup_does_not_panic() {
    let html = r#"<div data-mcomponent="MContainer"><div data-mcomponent="TextArea"><span class="f1">Unclosed tags still parse fine"#;
    let posts = extract_posts(html, LOCATION).unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].text, "Unclosed tags still parse fine");
}

#[test]
fn invalid_nesting_does_not_panic() {
    let html = r#"<span class="f1"><div data-mcomponent="MContainer"></span><p></div>"#;
    assert!(extract_posts(html, LOCATION).unwrap().is_empty());
}

#[test]
fn multibyte_text_is_measured_in_characters() {
    // Ten characters, many more bytes: rejected by the ten-character floor.
    let html = r#"<div data-mcomponent="MContainer"><div data-mcomponent="TextArea"><span class="f1">日本語のテキストです</span></div></div>"#;
    assert!(extract_posts(html, LOCATION).unwrap().is_empty());
}

#[test]
fn emoji_and_private_use_text_survive_extraction() {
    let html = "<div data-mcomponent=\"MContainer\"><div data-mcomponent=\"TextArea\">\
        <span class=\"f1\">Mantap sekali \u{1F600}\u{1F600} \u{F0378}</span></div></div>";
    let posts = extract_posts(html, LOCATION).unwrap();
    assert_eq!(posts.len(), 1);
}

#[test]
fn large_feed_completes_quickly() {
    let mut html = String::from("<html><body>");
    for i in 0..500 {
        html.push_str(&format!(
            r#"<div data-mcomponent="MContainer" id="c{i}">
                <span class="f2 a" role="link" data-focusable="true">Author {i}</span>
                <div data-mcomponent="TextArea"><span class="f1">Post number {i} in a long feed</span></div>
                <time datetime="2024-01-01T12:00:00Z"></time>
            </div>"#
        ));
    }
    html.push_str("</body></html>");

    let start = Instant::now();
    let page = FeedDocument::parse(&html, LOCATION).unwrap();
    let posts = page.extract_posts(&Options::default());
    assert_eq!(posts.len(), 500);
    assert!(start.elapsed() < Duration::from_secs(10));
}
