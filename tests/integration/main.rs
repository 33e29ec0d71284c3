//! Integration tests for rs-feedpost
//!
//! These tests run whole feed snapshots through extraction, cleaning and
//! statistics, the way a capturing driver would.

mod cleaning_pipeline;
mod feed_pages;

/// A captured mobile feed page: a composer, a suggestion carousel, posts in
/// nested item wrappers, a sponsored post and a repeated post.
pub const FEED_PAGE: &str = r#"<!DOCTYPE html>
<html lang="id">
<head><meta charset="utf-8"><title>Beranda</title></head>
<body>
  <div data-mcomponent="MContainer" id="composer">
    <div data-mcomponent="TextArea"><span class="f1">What's on your mind?</span></div>
  </div>

  <div class="m">
    <div data-mcomponent="MContainer" id="post-1" role-button-child="1">
      <span class="f2 a" role="link" data-focusable="true">Rina Kartika</span>
      <div data-mcomponent="TextArea"><span class="f1">Sarapan nasi uduk di pasar pagi ini, enak sekali!</span></div>
      <div data-mcomponent="TextArea"><span class="f1">See translation</span></div>
      <abbr title="Rabu pukul 07.15">3h</abbr>
    </div>
  </div>

  <div data-mcomponent="MContainer" id="suggestions">
    <div data-mcomponent="TextArea"><span class="f1">People You May Know</span></div>
    <span class="f2 a">Someone Suggested</span>
  </div>

  <div class="m">
    <div>
      <span class="f2 a" role="link" data-focusable="true">Agus Pratama</span>
      <div data-mcomponent="MContainer" id="post-2">
        <div data-mcomponent="TextArea">
          <span class="f1">Macet total di tol dalam kota. Ada yang tahu kenapa? Sudah satu jam tidak bergerak.</span>
        </div>
        <time datetime="2024-05-02T08:30:00+07:00">2h</time>
      </div>
    </div>
  </div>

  <div data-mcomponent="MContainer" id="post-3">
    <h3><a href="/brand">Kopi Nusantara</a></h3>
    <div data-mcomponent="TextArea"><span class="f1">Sponsored</span></div>
  </div>

  <div data-mcomponent="MContainer" id="post-1">
    <span class="f2 a">Rina Kartika</span>
    <div data-mcomponent="TextArea"><span class="f1">A re-rendered copy of the first post</span></div>
  </div>

  <div data-mcomponent="MContainer" id="post-4">
    <h4><a href="/dewi">Dewi Lestari</a></h4>
    <div data-mcomponent="TextArea"><span class="f1">Selamat hari raya untuk semua teman dan keluarga</span></div>
  </div>
</body>
</html>
"#;

pub const LOCATION: &str = "https://m.example.com/home.php";
