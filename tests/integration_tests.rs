use httpmock::prelude::*;
use pubmed_scrape::config::DEFAULT_USER_AGENT;
use pubmed_scrape::{CliConfig, LocalStorage, PubmedPipeline, ScrapeEngine};
use tempfile::TempDir;

fn article_page(title: &str, pmid: &str, doi: &str) -> String {
    format!(
        r#"<html><body>
        <main id="article-details" class="article-details">
        <header id="heading" class="heading">
          <div id="full-view-heading" class="full-view">
            <h1 class="heading-title">{}</h1>
            <div class="inline-authors">
              <div class="authors">
                <div class="authors-list">Doe J, Roe A</div>
              </div>
            </div>
            <ul id="full-view-identifiers" class="identifiers">
              <li><span class="identifier pubmed">PMID:
                <strong class="current-id">{}</strong></span></li>
              <li><span class="identifier doi">
                <a class="id-link">{}</a></span></li>
            </ul>
          </div>
        </header>
        </main>
        </body></html>"#,
        title, pmid, doi
    )
}

fn config_for(temp_dir: &TempDir, server_urls: &[String]) -> CliConfig {
    let input_path = temp_dir.path().join("urls.csv");
    let mut input = String::from("url\n");
    for url in server_urls {
        input.push_str(url);
        input.push('\n');
    }
    std::fs::write(&input_path, input).unwrap();

    CliConfig {
        input_file: input_path.to_str().unwrap().to_string(),
        output_file: temp_dir
            .path()
            .join("articles.csv")
            .to_str()
            .unwrap()
            .to_string(),
        delay: 0,
        max_requests: 5,
        timeout: 5,
        user_agent: DEFAULT_USER_AGENT.to_string(),
        output_formats: vec!["csv".to_string()],
        verbose: false,
        monitor: false,
    }
}

#[tokio::test]
async fn test_end_to_end_scrape_with_real_http() {
    let temp_dir = TempDir::new().unwrap();

    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET).path("/32678890/");
        then.status(200).body(article_page(
            "Aspirin use and ovarian cancer risk",
            "32678890",
            "10.1093/jncics/pkaa021",
        ));
    });
    let second = server.mock(|when, then| {
        when.method(GET).path("/31562797/");
        then.status(200).body(article_page(
            "Dietary fiber intake and mortality",
            "31562797",
            "10.1001/jama.2019.16968",
        ));
    });

    let config = config_for(
        &temp_dir,
        &[server.url("/32678890/"), server.url("/31562797/")],
    );
    let output_path = config.output_file.clone();

    let storage = LocalStorage::new(String::new());
    let pipeline = PubmedPipeline::new(storage, config).unwrap();
    let engine = ScrapeEngine::new(pipeline);

    let result = engine.run().await;

    assert!(result.is_ok());
    first.assert();
    second.assert();
    assert_eq!(result.unwrap(), output_path);

    let content = std::fs::read_to_string(&output_path).unwrap();
    let mut lines = content.lines();

    assert_eq!(
        lines.next().unwrap(),
        "url,title,publication_type,journal,coi,grants,authors,abstracts,pmid,pmcid,doi,citation,erratum"
    );

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("Aspirin use and ovarian cancer risk"));
    assert!(rows[0].contains("32678890"));
    assert!(rows[0].contains("10.1093/jncics/pkaa021"));
    assert!(rows[0].contains("\"Doe J, Roe A\""));
    assert!(rows[1].contains("Dietary fiber intake and mortality"));
}

#[tokio::test]
async fn test_end_to_end_server_failure_keeps_rows() {
    let temp_dir = TempDir::new().unwrap();

    let server = MockServer::start();
    let ok_page = server.mock(|when, then| {
        when.method(GET).path("/1/");
        then.status(200)
            .body(article_page("Reachable article", "1", "10.1/1"));
    });
    let broken_page = server.mock(|when, then| {
        when.method(GET).path("/2/");
        then.status(500).body("internal error");
    });

    let config = config_for(&temp_dir, &[server.url("/1/"), server.url("/2/")]);
    let output_path = config.output_file.clone();

    let storage = LocalStorage::new(String::new());
    let pipeline = PubmedPipeline::new(storage, config).unwrap();
    let engine = ScrapeEngine::new(pipeline);

    let result = engine.run().await;

    // Per-URL failures degrade to empty rows, the run itself succeeds.
    assert!(result.is_ok());
    ok_page.assert();
    broken_page.assert();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let rows: Vec<&str> = content.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("Reachable article"));
    // The 500 body has no article markup, so every metadata cell is empty.
    assert!(rows[1].ends_with(",,,,,,,,,,,,"));
}

#[tokio::test]
async fn test_end_to_end_with_monitoring() {
    let temp_dir = TempDir::new().unwrap();

    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET).path("/1/");
        then.status(200)
            .body(article_page("Monitored article", "1", "10.1/1"));
    });

    let mut config = config_for(&temp_dir, &[server.url("/1/")]);
    config.monitor = true;

    let storage = LocalStorage::new(String::new());
    let pipeline = PubmedPipeline::new(storage, config).unwrap();
    let engine = ScrapeEngine::new_with_monitoring(pipeline, true);

    let result = engine.run().await;

    assert!(result.is_ok());
    page.assert();
}

#[tokio::test]
async fn test_end_to_end_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET).path("/1/");
        then.status(200)
            .body(article_page("JSON article", "4242", "10.1/json"));
    });

    let mut config = config_for(&temp_dir, &[server.url("/1/")]);
    config.output_formats = vec!["csv".to_string(), "json".to_string()];

    let storage = LocalStorage::new(String::new());
    let pipeline = PubmedPipeline::new(storage, config).unwrap();
    let engine = ScrapeEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok());
    page.assert();

    let json_path = temp_dir.path().join("articles.json");
    let articles: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(json_path).unwrap()).unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["title"], "JSON article");
    assert_eq!(articles[0]["pmid"], "4242");
    assert_eq!(articles[0]["journal"], serde_json::Value::Null);
}
