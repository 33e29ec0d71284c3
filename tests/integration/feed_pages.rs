use rs_feedpost::{FeedDocument, Options};

use crate::{FEED_PAGE, LOCATION};

fn page() -> FeedDocument {
    FeedDocument::parse(FEED_PAGE, LOCATION).unwrap()
}

#[test]
fn every_container_with_accepted_text_yields_a_record() {
    let posts = page().extract_posts(&Options::default());
    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();

    // Sponsored label is too short; the re-rendered post-1 repeats an id.
    assert_eq!(
        ids,
        vec![
            "container_post_0",
            "container_post_1",
            "container_post_2",
            "container_post_3",
            "container_post_6",
        ]
    );
}

#[test]
fn container_fields_are_scoped_to_their_container() {
    let posts = page().extract_posts(&Options::default());

    let first = &posts[1];
    assert_eq!(first.text, "Sarapan nasi uduk di pasar pagi ini, enak sekali!");
    assert_eq!(first.author, "Rina Kartika");
    assert_eq!(first.timestamp, "Rabu pukul 07.15");
    assert_eq!(first.url, LOCATION);

    // The author link of post-2 sits outside its container.
    let second = &posts[3];
    assert_eq!(second.author, "");
    assert_eq!(second.timestamp, "2024-05-02T08:30:00+07:00");

    let heading = &posts[4];
    assert_eq!(heading.author, "Dewi Lestari");
    assert_eq!(heading.timestamp, "");
}

#[test]
fn text_anchored_lookup_reaches_wrapper_author() {
    let page = page();
    assert_eq!(
        page.extract_author_for_post(
            "Macet total di tol dalam kota. Ada yang tahu kenapa? Sudah satu jam tidak bergerak."
        ),
        "Agus Pratama"
    );
}

#[test]
fn repeated_passes_are_identical() {
    let page = page();
    let options = Options::default();
    assert_eq!(page.extract_posts(&options), page.extract_posts(&options));
}

#[test]
fn raw_records_serialize_with_field_names() {
    let posts = page().extract_posts(&Options::default());
    let json = serde_json::to_value(&posts[1]).unwrap();

    assert_eq!(json["id"], "container_post_1");
    assert_eq!(json["selector"], "MContainer[role-button-child]");
}
