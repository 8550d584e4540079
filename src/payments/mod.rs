//! Payment provider integration module
//!
//! Client for the OPay cashier API: wallet and bank payouts, card and
//! bank-account collections, account creation and status lookups.

pub mod providers;
pub mod reference;
pub mod response;
pub mod traits;
pub mod transport;
pub mod types;
