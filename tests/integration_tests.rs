use httpmock::prelude::*;
use project_cards::{
    FileFetcher, HtmlPage, HttpFetcher, LoadOutcome, LocalStorage, Page, ProjectLoader, Storage,
};
use project_cards::utils::error::GENERIC_LOAD_ERROR;
use tempfile::TempDir;

const PLACEHOLDER: &str = r#"<p class="muted">No projects found yet.</p>"#;

#[tokio::test]
async fn test_end_to_end_render_over_http() {
    let server = MockServer::start();
    let mock_data = serde_json::json!({
        "projects": [
            {
                "title": "Setlist Builder",
                "tag": "Tool",
                "bullets": ["Drag & drop", "Exports PDF", "Syncs", "Extra", "More"],
                "tech": ["Rust", "Axum"],
                "links": {"github": "https://github.com/me/setlist", "demo": "https://setlist.dev"},
                "image": "img/setlist.png"
            },
            {"title": "Tiny Thing"}
        ]
    });

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/projects.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(mock_data);
    });

    let loader = ProjectLoader::new(HttpFetcher::new(&server.base_url()).unwrap());
    let page = HtmlPage::new("Projects");

    let outcome = loader.load_and_render(&page).await;

    api_mock.assert();
    assert!(matches!(outcome, LoadOutcome::Rendered(2)));

    let html = page.container_html();
    assert_eq!(html.matches(r#"<article class="card">"#).count(), 2);
    assert!(html.contains("<li>Drag &amp; drop</li>"));
    assert_eq!(html.matches("<li>").count(), 3);
    assert!(html.contains(r#"<p class="tech"><strong>Tech:</strong> Rust, Axum</p>"#));
    assert!(html.contains("<h3>Tiny Thing</h3>"));
    assert!(html.contains(r#"<p class="muted">No description yet.</p>"#));
    assert!(!page.error_visible());
}

#[tokio::test]
async fn test_not_found_shows_error_and_keeps_container() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/projects.json");
        then.status(404);
    });

    let loader = ProjectLoader::new(HttpFetcher::new(&server.base_url()).unwrap());
    let page = HtmlPage::new("Projects");
    page.replace_container("<p>Loading…</p>".to_string());

    let outcome = loader.load_and_render(&page).await;

    api_mock.assert();
    assert!(outcome.is_failure());
    assert_eq!(page.container_html(), "<p>Loading…</p>");
    assert!(page.error_visible());
    assert_eq!(page.error_text(), GENERIC_LOAD_ERROR);
    assert!(page
        .render_document()
        .contains(r#"style="display: block">Could not load projects."#));
}

#[tokio::test]
async fn test_malformed_json_over_http() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/site/projects.json");
        then.status(200).body("{ not json");
    });

    let loader = ProjectLoader::new(HttpFetcher::new(&server.url("/site")).unwrap());
    let page = HtmlPage::new("Projects");

    let outcome = loader.load_and_render(&page).await;

    assert!(outcome.is_failure());
    assert_eq!(page.error_text(), GENERIC_LOAD_ERROR);
    assert_eq!(page.container_html(), "");
}

#[tokio::test]
async fn test_empty_project_list_over_http() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/projects.json");
        then.status(200).json_body(serde_json::json!({"projects": []}));
    });

    let loader = ProjectLoader::new(HttpFetcher::new(&server.base_url()).unwrap());
    let page = HtmlPage::new("Projects");

    let outcome = loader.load_and_render(&page).await;

    assert!(matches!(outcome, LoadOutcome::Empty));
    assert_eq!(page.container_html(), PLACEHOLDER);
}

#[tokio::test]
async fn test_static_site_from_local_files() {
    let site_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    std::fs::write(
        site_dir.path().join("projects.json"),
        r#"{"projects": [{"title": "<script>", "links": {"demo": "https://x"}}]}"#,
    )
    .unwrap();

    let loader = ProjectLoader::new(FileFetcher::from_location(
        site_dir.path().to_str().unwrap(),
    ));
    let page = HtmlPage::new("Portfolio");

    let outcome = loader.load_and_render(&page).await;
    assert!(matches!(outcome, LoadOutcome::Rendered(1)));

    let storage = LocalStorage::new(out_dir.path());
    storage
        .write_file("index.html", page.render_document().as_bytes())
        .await
        .unwrap();

    let written = std::fs::read_to_string(out_dir.path().join("index.html")).unwrap();
    assert!(written.contains("<title>Portfolio</title>"));
    assert!(written.contains("&lt;script&gt;"));
    assert!(!written.contains("<script>"));
    assert_eq!(written.matches("<a ").count(), 1);
    assert!(written.contains(">Demo</a>"));
    assert!(!written.contains("GitHub"));
}
