use anyhow::Result;
use chrono::Local;
use std::path::Path;
use tracing::info;

use wishlist_exporter::config::Config;
use wishlist_exporter::credentials::Credentials;
use wishlist_exporter::export::write_results;
use wishlist_exporter::reporter::{LogReporter, Reporter};
use wishlist_exporter::scrapers::{build_index, WishlistPaginator};
use wishlist_exporter::session::Session;
use wishlist_exporter::utils::http::create_client;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wishlist_exporter=info".parse()?),
        )
        .init();

    let reporter = LogReporter;
    if let Err(e) = run(&reporter).await {
        reporter.fail(&format!("Failed to scrape wishlists: {e}"));
        return Err(e);
    }

    Ok(())
}

async fn run(reporter: &dyn Reporter) -> Result<()> {
    info!(
        "Starting wishlist export at {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let config = Config::load()?;
    let credentials = Credentials::load(Path::new(&config.credentials_path))?;

    let client = create_client(&config.user_agent, config.request_timeout_seconds)?;
    let session = Session::new(client, &config)?;

    reporter.start(&format!("Logging in as {}", credentials.username));
    session.login(&credentials).await?;
    reporter.succeed("Logged in");

    reporter.start("Getting list of wishlists");
    let mut results = build_index(&session, session.wishlist_overview_url()).await?;
    let names = results
        .iter()
        .map(|w| w.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    reporter.succeed(&format!("Found {} wishlists: {}", results.len(), names));

    let total = results.len();
    let paginator = WishlistPaginator::new(
        &session,
        session.base_url(),
        session.wishlist_overview_url(),
        config.max_pages,
    );

    // Strictly one wishlist at a time: the session's cookie state is the
    // single shared resource and is never used from two navigations at once.
    for (position, wishlist) in results.iter_mut().enumerate() {
        let progress = format!("{}/{}", position + 1, total);
        reporter.start(&format!(
            "Scraping {progress}: {} ({})",
            wishlist.name, wishlist.id
        ));

        paginator
            .collect_into(wishlist, reporter, &progress)
            .await?;

        if wishlist.books.is_empty() {
            // Suspicious but not fatal; the run moves on to the next list.
            reporter.fail(&format!(
                "Found no books for {} ({})",
                wishlist.name, wishlist.id
            ));
        } else {
            reporter.succeed(&format!(
                "Scraped {progress}: {} ({})",
                wishlist.name, wishlist.id
            ));
        }
    }

    let output = Path::new(&config.output_path);
    reporter.start(&format!("Writing results to {}", output.display()));
    write_results(output, &results)?;
    reporter.succeed(&format!("Wrote results to {}", output.display()));

    Ok(())
}
