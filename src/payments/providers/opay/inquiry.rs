//! Balance and identity lookups

use super::{Endpoint, OpayClient};
use crate::error::{require_str, OpayResult};
use crate::payments::types::{EmailPayload, PhonePayload, ValidateBankRequest};
use serde_json::Value;
use tracing::info;

impl OpayClient {
    /// Fetch the merchant's account balances. Sends no body.
    pub async fn get_balance(&self) -> OpayResult<Value> {
        info!("Fetching OPay balance");
        self.send(Endpoint::Balance, None).await
    }

    /// Look up the OPay user registered to a phone number
    pub async fn validate_user(&self, phone_number: &str) -> OpayResult<Value> {
        let phone_number = require_str(phone_number, "phone_number")?;
        info!("Validating OPay user");
        self.dispatch(Endpoint::UserInfo, &PhonePayload { phone_number })
            .await
    }

    /// Look up the OPay merchant registered to an email address
    pub async fn validate_merchant(&self, email: &str) -> OpayResult<Value> {
        let email = require_str(email, "email")?;
        info!("Validating OPay merchant");
        self.dispatch(Endpoint::MerchantInfo, &EmailPayload { email })
            .await
    }

    /// Resolve a bank account number to its holder
    pub async fn validate_bank(&self, request: ValidateBankRequest) -> OpayResult<Value> {
        let payload = request.into_payload()?;
        info!(
            "Resolving bank account: bank_code={}, country={}",
            payload.bank_code, payload.country_code
        );
        self.dispatch(Endpoint::BankAccountResolve, &payload).await
    }
}
