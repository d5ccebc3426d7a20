//! List registry operations from the blocking client.
//!
//! Run:
//! `cargo run --example blocking_list_operations`

use tochka_client::{BlockingTochkaClient, default_server_url};

fn main() {
    println!("Default server: {}", default_server_url());

    let operations = BlockingTochkaClient::operations();
    println!("Loaded {} operations", operations.len());

    for operation in operations {
        println!(
            "- {:<6} {:<60} ({})",
            operation.method, operation.path_template, operation.operation_id
        );
    }
}
