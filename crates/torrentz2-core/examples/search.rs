//! Searches Torrentz2 and prints the qualifying results.
//!
//! Run with: cargo run --example search -- "ubuntu iso"

use torrentz2_core::{Result, SearchFilters, Torrentz2Scraper};

#[tokio::main]
async fn main() -> Result<()> {
    let query = std::env::args().nth(1).unwrap_or_else(|| "ubuntu".to_string());

    let scraper = Torrentz2Scraper::new()?;
    let filters = SearchFilters {
        min_seeds: 5,
        max_pages: 2,
        sort_by: Some("seeds".to_string()),
        sort_order: Some("desc".to_string()),
        ..Default::default()
    };

    let (records, magnets) = scraper.try_search(&query, &filters).await?;

    if records.is_empty() {
        println!("No results for {query:?}");
        return Ok(());
    }

    for record in &records {
        println!(
            "{:>6} seeds  {:>6} peers  {:>10}  {} ({})",
            record.seeds, record.peers, record.size, record.title, record.uploaded
        );
    }

    println!("\nMagnet links:");
    for magnet in &magnets {
        println!("{magnet}");
    }

    Ok(())
}
