//! Print an overview of a Lending Club investor account.
//!
//! ```text
//! LC_KEY=... LC_ACCOUNT_ID=1234 cargo run --example account_overview
//! ```
//!
//! Set `LC_API_URL` to point at another deployment and `RUST_LOG=lendingclub=debug`
//! to see the requests being made.

use lendingclub::prelude::*;
use tracing_subscriber::EnvFilter;

fn env(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    std::env::var(name).map_err(|_| format!("{} must be set", name).into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let token = env("LC_KEY")?;
    let investor_id: u64 = env("LC_ACCOUNT_ID")?.parse()?;

    let mut builder = LendingClubClient::builder(token);
    if let Ok(url) = std::env::var("LC_API_URL") {
        builder = builder.base_url(url);
    }
    let client = builder.build()?;
    let account = client.accounts(investor_id);

    let summary = account.summary().await?;
    println!("Account {}", summary.investor_id);
    println!("  total:       {}", summary.account_total);
    println!("  available:   {}", summary.available_cash);
    println!("  in funding:  {}", summary.in_funding_balance);
    println!("  notes:       {}", summary.total_notes);

    let cash = account.available_cash().await?;
    println!("Available cash: {}", cash.available_cash);

    let transfers = account.pending_funds().await?;
    println!("Pending transfers: {}", transfers.len());
    for transfer in &transfers {
        let date = transfer
            .transfer_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  #{} {} {} on {} ({})",
            transfer.transfer_id, transfer.operation, transfer.amount, date, transfer.status
        );
    }

    match account.notes().await {
        Ok(notes) => {
            let invested: Decimal = notes.iter().map(|n| n.note_amount).sum();
            println!("Notes: {} ({} invested)", notes.len(), invested);
        }
        Err(ApiError::Forbidden(body)) => println!("Notes unavailable: {}", body),
        Err(e) => return Err(e.into()),
    }

    for portfolio in account.portfolios().await? {
        println!("Portfolio {}: {}", portfolio.portfolio_id, portfolio.portfolio_name);
    }

    let listing = client.loans().listed().await?;
    println!(
        "Listed loans as of {}: {} ({} still in funding)",
        listing.as_of_date,
        listing.loans.len(),
        listing.in_funding().count()
    );

    Ok(())
}
