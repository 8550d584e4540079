//! Payment provider implementations

pub mod opay;

pub use opay::OpayClient;
