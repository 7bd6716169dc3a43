//! End-to-end pipeline tests against a mock Torrentz2 server.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use torrentz2_core::{
    ClientConfig, EntryExtractor, RawEntry, Result, SearchFilters, Torrentz2Error,
    Torrentz2Scraper,
};

fn entry_block(title: &str, uploaded: &str, size: &str, seeds: &str, peers: &str) -> String {
    format!(
        r#"<dl>
          <dt><a target="_blank" href="/torrent/x">{title}</a></dt>
          <dd>
            <span><a href="magnet:?xt=urn:btih:{seeds}-{title}">magnet</a></span>
            <span title="Added">{uploaded}</span>
            <span>{size}</span>
            <span>{seeds}</span>
            <span>{peers}</span>
          </dd>
        </dl>"#
    )
}

fn results_page(blocks: &[String]) -> String {
    format!("<html><body><div>{}</div></body></html>", blocks.join("\n"))
}

const EMPTY_PAGE: &str = "<html><body><div>No results</div></body></html>";

fn scraper_for(server: &MockServer) -> Torrentz2Scraper {
    Torrentz2Scraper::with_config(ClientConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    })
    .expect("scraper should build")
}

async fn mount_page(server: &MockServer, page: &str, body: String) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("page", page))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn end_to_end_filters_and_sorts_descending() {
    let server = MockServer::start().await;
    let page = results_page(&[
        entry_block("low", "a day", "700MB", "5", "1"),
        entry_block("high", "2 days", "1.5GB", "50", "9"),
        entry_block("mid", "3 weeks", "2GB", "10", "4"),
    ]);
    mount_page(&server, "1", page).await;

    let filters = SearchFilters {
        min_seeds: 10,
        sort_by: Some("seeds".to_string()),
        sort_order: Some("desc".to_string()),
        ..Default::default()
    };

    let (records, magnets) = scraper_for(&server)
        .try_search("ubuntu", &filters)
        .await
        .expect("search should succeed");

    let seeds: Vec<u64> = records.iter().map(|r| r.seeds).collect();
    assert_eq!(seeds, vec![50, 10]);
    assert_eq!(records[0].title, "high");
    assert_eq!(records[1].title, "mid");

    // Magnet links follow record order
    assert_eq!(magnets.len(), 2);
    assert_eq!(magnets[0], records[0].magnet);
    assert_eq!(magnets[1], records[1].magnet);
}

#[tokio::test]
async fn records_are_fully_normalized() {
    let server = MockServer::start().await;
    let page = results_page(&[entry_block("one", "2 days", "1.5GB", "1.3K", "42")]);
    mount_page(&server, "1", page).await;

    let (records, _) = scraper_for(&server)
        .try_search("ubuntu", &SearchFilters::default())
        .await
        .expect("search should succeed");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.uploaded, "2 days");
    assert_eq!(record.uploaded_secs, 172_800);
    assert_eq!(record.size, "1.5GB");
    assert_eq!(record.size_bytes, 1_610_612_736);
    assert_eq!(record.seeds, 1300);
    assert_eq!(record.peers, 42);
    assert!(record.magnet.starts_with("magnet:?"));
}

#[tokio::test]
async fn records_accumulate_across_pages() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "1",
        results_page(&[
            entry_block("p1a", "a day", "1GB", "3", "1"),
            entry_block("p1b", "a day", "1GB", "9", "1"),
        ]),
    )
    .await;
    mount_page(
        &server,
        "2",
        results_page(&[entry_block("p2a", "a day", "1GB", "6", "1")]),
    )
    .await;
    mount_page(&server, "3", EMPTY_PAGE.to_string()).await;

    let filters = SearchFilters {
        max_pages: 3,
        sort_by: Some("seeds".to_string()),
        ..Default::default()
    };

    let (records, _) = scraper_for(&server)
        .try_search("ubuntu", &filters)
        .await
        .expect("search should succeed");

    // Sorted once over the accumulated list, not per page
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["p1a", "p2a", "p1b"]);
}

#[tokio::test]
async fn pagination_stops_on_empty_page() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "1",
        results_page(&[entry_block("only", "a day", "1GB", "3", "1")]),
    )
    .await;
    mount_page(&server, "2", EMPTY_PAGE.to_string()).await;

    // Page 3 must never be requested even though the budget allows it
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_PAGE))
        .expect(0)
        .mount(&server)
        .await;

    let filters = SearchFilters {
        max_pages: 3,
        ..Default::default()
    };

    let (records, _) = scraper_for(&server)
        .try_search("ubuntu", &filters)
        .await
        .expect("search should succeed");
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn zero_page_budget_still_fetches_one_page() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "1",
        results_page(&[entry_block("only", "a day", "1GB", "3", "1")]),
    )
    .await;

    let filters = SearchFilters {
        max_pages: 0,
        ..Default::default()
    };

    let (records, _) = scraper_for(&server)
        .try_search("ubuntu", &filters)
        .await
        .expect("search should succeed");
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn search_starts_at_the_requested_page() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "4",
        results_page(&[entry_block("deep", "a day", "1GB", "3", "1")]),
    )
    .await;

    let filters = SearchFilters {
        page: 4,
        ..Default::default()
    };

    let (records, _) = scraper_for(&server)
        .try_search("ubuntu", &filters)
        .await
        .expect("search should succeed");
    assert_eq!(records[0].title, "deep");
}

#[tokio::test]
async fn query_is_url_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "big buck bunny"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(results_page(&[entry_block(
                "hit", "a day", "1GB", "3", "1",
            )])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (records, _) = scraper_for(&server)
        .try_search("big buck bunny", &SearchFilters::default())
        .await
        .expect("search should succeed");
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn network_failure_yields_empty_pair_without_panicking() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);

    // The never-failing facade swallows the error
    let (records, magnets) = scraper.search("ubuntu", &SearchFilters::default()).await;
    assert!(records.is_empty());
    assert!(magnets.is_empty());

    // The explicit form surfaces the cause
    let err = scraper
        .try_search("ubuntu", &SearchFilters::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Torrentz2Error::HttpError(_)));
}

#[tokio::test]
async fn later_page_failure_discards_earlier_results() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "1",
        results_page(&[entry_block("kept?", "a day", "1GB", "30", "1")]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let filters = SearchFilters {
        max_pages: 2,
        ..Default::default()
    };

    let scraper = scraper_for(&server);
    assert!(scraper.try_search("ubuntu", &filters).await.is_err());

    // Whole-call atomicity: the page-1 results are not returned
    let (records, magnets) = scraper.search("ubuntu", &filters).await;
    assert!(records.is_empty());
    assert!(magnets.is_empty());
}

#[tokio::test]
async fn structural_drift_aborts_the_call() {
    let server = MockServer::start().await;
    // A result block without the title anchor
    let broken = r#"<html><body><dl><dd>
        <span><a href="magnet:?xt=urn:btih:a">m</a></span>
        <span title="Added">a day</span>
        <span>1GB</span><span>1</span><span>1</span>
    </dd></dl></body></html>"#;
    mount_page(&server, "1", broken.to_string()).await;

    let scraper = scraper_for(&server);
    let err = scraper
        .try_search("ubuntu", &SearchFilters::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Torrentz2Error::ParseError(_)));

    let (records, _) = scraper.search("ubuntu", &SearchFilters::default()).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn malformed_time_label_aborts_the_call() {
    let server = MockServer::start().await;
    let page = results_page(&[entry_block("odd", "yesterday-ish", "1GB", "3", "1")]);
    mount_page(&server, "1", page).await;

    let err = scraper_for(&server)
        .try_search("ubuntu", &SearchFilters::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Torrentz2Error::InvalidTimeLabel(_)));
}

struct StubExtractor;

impl EntryExtractor for StubExtractor {
    fn entries(&self, _html: &str) -> Result<Vec<RawEntry>> {
        Ok(vec![RawEntry {
            title: "stubbed".to_string(),
            uploaded: "an hour".to_string(),
            size: "100MB".to_string(),
            seeds: "7".to_string(),
            peers: "2".to_string(),
            magnet: "magnet:?xt=urn:btih:stub".to_string(),
        }])
    }
}

#[tokio::test]
async fn extractor_seam_is_swappable() {
    let server = MockServer::start().await;
    // The stub never looks at the body
    mount_page(&server, "1", "<html></html>".to_string()).await;

    let scraper = Torrentz2Scraper::with_extractor(
        ClientConfig {
            base_url: server.uri(),
            timeout_secs: 5,
        },
        Box::new(StubExtractor),
    )
    .expect("scraper should build");

    let (records, magnets) = scraper
        .try_search("anything", &SearchFilters::default())
        .await
        .expect("search should succeed");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "stubbed");
    assert_eq!(records[0].uploaded_secs, 3600);
    assert_eq!(records[0].size_bytes, 104_857_600);
    assert_eq!(magnets, vec!["magnet:?xt=urn:btih:stub".to_string()]);
}
