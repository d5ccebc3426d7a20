//! Register a dynamic SBP QR code and print its NSPK payload link.
//!
//! Run:
//! `TOCHKA_ACCESS_TOKEN=<token> TOCHKA_MERCHANT_ID=<id> TOCHKA_ACCOUNT_ID=<id> \
//!   cargo run --example async_register_qr_code`

use tochka_client::TochkaClient;
use tochka_client::models::sbp::{QrType, RegisterQrCode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = require_env("TOCHKA_ACCESS_TOKEN");
    let merchant_id = require_env("TOCHKA_MERCHANT_ID");
    let account_id = require_env("TOCHKA_ACCOUNT_ID");

    let client = TochkaClient::from_default_server()?.with_bearer_token(token);

    let request = RegisterQrCode {
        amount: Some(10050),
        currency: Some("RUB".to_owned()),
        payment_purpose: "Оплата заказа 12-Н".to_owned(),
        qrc_type: QrType::Dynamic,
        image_params: None,
        source_name: Some("tochka-client demo".to_owned()),
        ttl: Some(60),
    };

    let response = client
        .register_qr_code(&merchant_id, &account_id, request)
        .await?;
    println!("qrcId:   {}", response.data.qrc_id);
    println!("payload: {}", response.data.payload);
    Ok(())
}

fn require_env(name: &str) -> String {
    match std::env::var(name) {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Set {name} before running this example.");
            std::process::exit(2);
        }
    }
}
