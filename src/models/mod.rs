//! Declared request/response shapes of the Tochka Open Banking API.
//!
//! These mirror the component schemas of the vendor OpenAPI document. Field
//! casing follows the wire format, which is not uniform across API areas:
//! open-banking resources use PascalCase keys inside the `Data` envelope,
//! while payments, SBP, invoices, webhooks and statement queries use
//! camelCase. Amounts travel as decimal strings, timestamps as RFC 3339
//! strings; neither is reinterpreted here.

mod envelope;

pub mod accounts;
pub mod balances;
pub mod consents;
pub mod customers;
pub mod invoices;
pub mod payments;
pub mod sbp;
pub mod statements;
pub mod webhooks;

pub use envelope::{Data, ErrorDetail, ErrorResponse, Links, Meta};
