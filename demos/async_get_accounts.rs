//! Fetch the account list with the typed async `TochkaClient`.
//!
//! Run:
//! `TOCHKA_ACCESS_TOKEN=<token> cargo run --example async_get_accounts`
//!
//! Optional env vars:
//! - `TOCHKA_BASE_URL` (defaults to the production server URL)

use tochka_client::TochkaClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = match std::env::var("TOCHKA_ACCESS_TOKEN") {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Set TOCHKA_ACCESS_TOKEN before running this example.");
            std::process::exit(2);
        }
    };

    let base_url = std::env::var("TOCHKA_BASE_URL").ok();
    let client = match base_url {
        Some(url) => TochkaClient::new(url)?,
        None => TochkaClient::from_default_server()?,
    }
    .with_bearer_token(token);

    let accounts = client.get_accounts().await?;
    for account in &accounts.data.account {
        println!(
            "{} [{} {:?}]",
            account.account_id, account.currency, account.status
        );
    }
    Ok(())
}
