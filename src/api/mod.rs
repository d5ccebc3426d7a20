//! Typed per-area methods on [`crate::TochkaClient`].
//!
//! Each method resolves an operation from the registry, fills its path
//! parameters, and deserializes the response into the declared models. The
//! raw [`crate::TochkaClient::call_operation`] remains available for
//! endpoints added by the bank after this crate's registry revision.

mod accounts;
mod balances;
mod consents;
mod customers;
mod invoices;
mod payments;
mod sbp;
mod statements;
mod webhooks;
