//! Client library for the OPay cashier HTTP API.
//!
//! ```rust,no_run
//! use opay_client::{BankListRequest, OpayClient, OpayConfig};
//!
//! # async fn example() -> opay_client::OpayResult<()> {
//! let client = OpayClient::new(OpayConfig::new("OPAYPUB_...", "256612345678901"))?;
//! let banks = client.fetch_bank_list(BankListRequest::default()).await?;
//! println!("{}", banks);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod payments;

pub use crate::config::OpayConfig;
pub use error::{OpayError, OpayResult};
pub use payments::providers::opay::Endpoint;
pub use payments::providers::OpayClient;
pub use payments::reference::{generate_reference, TimestampReferenceGenerator};
pub use payments::traits::{HttpTransport, ReferenceGenerator};
pub use payments::transport::ReqwestTransport;
pub use payments::types::{
    BankAccountPaymentRequest, BankListRequest, BankTransferRequest, CardPaymentRequest,
    CreateAccountRequest, Credentials, RecipientType, RequestHeaders, ValidateBankRequest,
    WalletRecipient, WalletTransferRequest, WalletType,
};
