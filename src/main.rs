use anyhow::Context;
use clap::Parser;
use project_cards::utils::logger::{self, LogFormat};
use project_cards::utils::validation::{is_remote, Validate};
use project_cards::{
    CliConfig, ConfigProvider, DocumentFetcher, FileFetcher, HtmlPage, HttpFetcher, LoadOutcome,
    LocalStorage, ProjectLoader, SiteConfig, Storage,
};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, cli.verbose);

    tracing::info!("Starting project-cards");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let site = match SiteConfig::from_file(path) {
                Ok(site) => site,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    std::process::exit(1);
                }
            };
            exit_on_invalid(&site);
            Box::new(site)
        }
        None => {
            exit_on_invalid(&cli);
            Box::new(cli.clone())
        }
    };

    let fetcher: Box<dyn DocumentFetcher> = if is_remote(config.source_location()) {
        Box::new(HttpFetcher::new(config.source_location())?)
    } else {
        Box::new(FileFetcher::from_location(config.source_location()))
    };

    let page = HtmlPage::new(config.page_title());
    let outcome = ProjectLoader::new(fetcher).load_and_render(&page).await;

    let output = Path::new(config.output_path());
    let file_name = output
        .file_name()
        .and_then(|name| name.to_str())
        .context("output path has no file name")?;
    let storage = LocalStorage::new(output.parent().unwrap_or_else(|| Path::new("")));
    storage
        .write_file(file_name, page.render_document().as_bytes())
        .await
        .with_context(|| format!("writing {}", output.display()))?;

    tracing::info!("📁 Page saved to: {}", output.display());

    match outcome {
        LoadOutcome::Rendered(count) => println!("✅ Rendered {} projects", count),
        LoadOutcome::Empty => println!("✅ No projects found yet"),
        LoadOutcome::Failed(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
        LoadOutcome::Stale => {}
    }

    Ok(())
}

fn exit_on_invalid<C: Validate>(config: &C) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}
