// End-to-end scenarios for the Scout loop against stub components.

use netcafe_scout::scout::Scout;
use netcafe_scout::store::ArtifactStore;
use netcafe_scout::testing::{StubScraper, StubSearcher};

fn scout_with(
    searcher: StubSearcher,
    scraper: StubScraper,
    dir: &std::path::Path,
    max_results: usize,
) -> Scout {
    Scout::with_components(
        Box::new(searcher),
        Box::new(scraper),
        ArtifactStore::new(dir),
        max_results,
    )
}

#[tokio::test]
async fn saves_only_urls_that_yield_text() {
    let dir = tempfile::tempdir().unwrap();

    let searcher = StubSearcher::new(&["http://a.test", "http://b.test"]);
    let scraper = StubScraper::new()
        .on_page("http://a.test", "Line1\nLine2")
        .on_page("http://b.test", "");

    let scout = scout_with(searcher, scraper, dir.path(), 10);
    let stats = scout.run("Shinjuku").await.unwrap();

    assert_eq!(stats.urls_scraped, 1);
    assert_eq!(stats.urls_empty, 1);
    assert_eq!(stats.urls_failed, 0);
    assert_eq!(stats.artifacts_written, 1);

    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);

    let path = dir.path().join(ArtifactStore::artifact_name("http://a.test"));
    let body = std::fs::read_to_string(&path).unwrap();
    assert_eq!(body, "# Scraped Content from http://a.test\n\nLine1\nLine2");
}

#[tokio::test]
async fn empty_search_results_write_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let scout = scout_with(StubSearcher::new(&[]), StubScraper::new(), dir.path(), 10);
    let stats = scout.run("Shinjuku").await.unwrap();

    assert_eq!(stats.artifacts_written, 0);
    // The data dir is never created when there is nothing to save.
    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 0);
}

#[tokio::test]
async fn search_failure_degrades_to_an_empty_run() {
    let dir = tempfile::tempdir().unwrap();

    let scout = scout_with(StubSearcher::failing(), StubScraper::new(), dir.path(), 10);
    let stats = scout.run("Shinjuku").await.unwrap();

    assert_eq!(stats.urls_scraped, 0);
    assert_eq!(stats.urls_failed, 0);
    assert_eq!(stats.artifacts_written, 0);
}

#[tokio::test]
async fn scrape_failures_are_isolated_per_url() {
    let dir = tempfile::tempdir().unwrap();

    // b.test is unregistered, so its scrape errors; c.test still gets saved.
    let searcher = StubSearcher::new(&["http://a.test", "http://b.test", "http://c.test"]);
    let scraper = StubScraper::new()
        .on_page("http://a.test", "alpha")
        .on_page("http://c.test", "gamma");

    let scout = scout_with(searcher, scraper, dir.path(), 10);
    let stats = scout.run("Shinjuku").await.unwrap();

    assert_eq!(stats.urls_scraped, 2);
    assert_eq!(stats.urls_failed, 1);
    assert_eq!(stats.artifacts_written, 2);

    assert!(dir
        .path()
        .join(ArtifactStore::artifact_name("http://c.test"))
        .exists());
}

#[tokio::test]
async fn empty_urls_from_the_backend_are_skipped() {
    let dir = tempfile::tempdir().unwrap();

    let searcher = StubSearcher::new(&["", "http://a.test"]);
    let scraper = StubScraper::new().on_page("http://a.test", "alpha");

    let scout = scout_with(searcher, scraper, dir.path(), 10);
    let stats = scout.run("Shinjuku").await.unwrap();

    assert_eq!(stats.urls_scraped, 1);
    assert_eq!(stats.urls_failed, 0);
    assert_eq!(stats.artifacts_written, 1);
}

#[tokio::test]
async fn honors_the_result_cap() {
    let dir = tempfile::tempdir().unwrap();

    let searcher = StubSearcher::new(&["http://a.test", "http://b.test"]);
    let scraper = StubScraper::new()
        .on_page("http://a.test", "alpha")
        .on_page("http://b.test", "beta");

    let scout = scout_with(searcher, scraper, dir.path(), 1);
    let stats = scout.run("Shinjuku").await.unwrap();

    assert_eq!(stats.artifacts_written, 1);
    assert!(dir
        .path()
        .join(ArtifactStore::artifact_name("http://a.test"))
        .exists());
}

#[tokio::test]
async fn rescraping_a_url_overwrites_its_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(ArtifactStore::artifact_name("http://a.test"));

    let scout = scout_with(
        StubSearcher::new(&["http://a.test"]),
        StubScraper::new().on_page("http://a.test", "first visit"),
        dir.path(),
        10,
    );
    scout.run("Shinjuku").await.unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().contains("first visit"));

    let scout = scout_with(
        StubSearcher::new(&["http://a.test"]),
        StubScraper::new().on_page("http://a.test", "second visit"),
        dir.path(),
        10,
    );
    scout.run("Shinjuku").await.unwrap();

    let body = std::fs::read_to_string(&path).unwrap();
    assert!(body.contains("second visit"));
    assert!(!body.contains("first visit"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[tokio::test]
async fn store_failures_do_not_abort_the_run() {
    let dir = tempfile::tempdir().unwrap();
    // Point the store at a path occupied by a file so every save fails.
    let blocker = dir.path().join("occupied");
    std::fs::write(&blocker, "a file, not a directory").unwrap();

    let searcher = StubSearcher::new(&["http://a.test", "http://b.test"]);
    let scraper = StubScraper::new()
        .on_page("http://a.test", "alpha")
        .on_page("http://b.test", "beta");

    let scout = Scout::with_components(
        Box::new(searcher),
        Box::new(scraper),
        ArtifactStore::new(&blocker),
        10,
    );
    let stats = scout.run("Shinjuku").await.unwrap();

    assert_eq!(stats.urls_scraped, 2);
    assert_eq!(stats.artifacts_written, 0);
}
