use super::{Endpoint, OpayClient};
use crate::error::{require_str, OpayResult};
use crate::payments::types::{CreateAccountRequest, PhonePayload};
use serde_json::Value;
use tracing::info;

impl OpayClient {
    /// Send a one-time passcode to a phone number ahead of account creation
    pub async fn send_otp(&self, phone_number: &str) -> OpayResult<Value> {
        let phone_number = require_str(phone_number, "phone_number")?;
        info!("Sending OPay account OTP");
        self.dispatch(Endpoint::SendOtp, &PhonePayload { phone_number })
            .await
    }

    /// Create an OPay user account
    pub async fn create_account(&self, request: CreateAccountRequest) -> OpayResult<Value> {
        let payload = request.into_payload()?;
        info!("Creating OPay user account");
        self.dispatch(Endpoint::CreateAccount, &payload).await
    }
}
