//! Collections: card and bank-account payments into the merchant's OPay account

use super::{Endpoint, OpayClient};
use crate::error::{require_str, OpayResult};
use crate::payments::types::{BankAccountPaymentRequest, CardPaymentRequest, StatusPayload};
use serde_json::Value;
use tracing::info;

impl OpayClient {
    /// Collect a payment from a card
    ///
    /// Every required field is checked by name before anything is sent. A fresh
    /// reference is generated for every call.
    pub async fn card_payment(&self, request: CardPaymentRequest) -> OpayResult<Value> {
        let reference = self.next_reference();
        let payload = request.into_payload(reference)?;

        info!(
            "Initiating OPay card payment: {} {}, reference={}",
            payload.amount, payload.currency, payload.reference
        );

        self.dispatch(Endpoint::CardPayment, &payload).await
    }

    /// Collect a payment directly from a bank account
    ///
    /// A fresh reference is generated for every call.
    pub async fn bank_account_payment(
        &self,
        request: BankAccountPaymentRequest,
    ) -> OpayResult<Value> {
        let reference = self.next_reference();
        let payload = request.into_payload(reference)?;

        info!(
            "Initiating OPay bank account payment: {} {} from bank_code={}, reference={}",
            payload.amount, payload.currency, payload.bank_code, payload.reference
        );

        self.dispatch(Endpoint::BankAccountPayment, &payload).await
    }

    /// Query the status of a collection
    pub async fn transaction_status(&self, reference: &str, order_no: &str) -> OpayResult<Value> {
        let payload = StatusPayload {
            reference: require_str(reference, "reference")?,
            order_no: require_str(order_no, "order_no")?,
        };

        info!("Querying OPay transaction status: reference={}", reference);

        self.dispatch(Endpoint::TransactionStatus, &payload).await
    }
}
