//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O or external
//! dependencies.

mod account;
pub mod amount;
pub mod email;
pub mod result;

pub use account::Account;
pub use amount::{format_amount, is_amount_valid, parse_amount};
pub use email::is_email_valid;
