//! Payouts to OPay wallets and bank accounts

use super::{Endpoint, OpayClient};
use crate::error::{require_str, OpayResult};
use crate::payments::types::{
    BankListRequest, BankTransferRequest, RecipientType, StatusPayload, WalletTransferRequest,
};
use serde_json::Value;
use tracing::info;

impl OpayClient {
    /// Transfer funds to an OPay user or merchant wallet
    ///
    /// A fresh reference is generated for every call.
    pub async fn transfer_to_wallet(&self, request: WalletTransferRequest) -> OpayResult<Value> {
        let reference = self.next_reference();
        let payload = request.into_payload(reference)?;

        info!(
            "Initiating OPay wallet transfer: {} {} to {} wallet, reference={}",
            payload.amount,
            payload.currency,
            payload.receiver.wallet_type(),
            payload.reference
        );

        self.dispatch(Endpoint::TransferToWallet, &payload).await
    }

    /// Transfer funds to a bank account
    ///
    /// A fresh reference is generated for every call.
    pub async fn transfer_to_bank(&self, request: BankTransferRequest) -> OpayResult<Value> {
        let reference = self.next_reference();
        let payload = request.into_payload(reference)?;

        info!(
            "Initiating OPay bank transfer: {} {} to bank_code={}, reference={}",
            payload.amount, payload.currency, payload.receiver.bank_code, payload.reference
        );

        self.dispatch(Endpoint::TransferToBank, &payload).await
    }

    /// Query the status of a previous transfer
    ///
    /// `recipient_type` selects the wallet or bank status endpoint.
    pub async fn transfer_status(
        &self,
        reference: &str,
        order_no: &str,
        recipient_type: RecipientType,
    ) -> OpayResult<Value> {
        let payload = StatusPayload {
            reference: require_str(reference, "reference")?,
            order_no: require_str(order_no, "order_no")?,
        };

        let endpoint = match recipient_type {
            RecipientType::Opay => Endpoint::WalletTransferStatus,
            RecipientType::Bank => Endpoint::BankTransferStatus,
        };

        info!(
            "Querying OPay transfer status: reference={}, recipient_type={}",
            reference, recipient_type
        );

        self.dispatch(endpoint, &payload).await
    }

    /// Fetch the banks supported in a country
    pub async fn fetch_bank_list(&self, request: BankListRequest) -> OpayResult<Value> {
        let payload = request.into_payload();
        info!("Fetching OPay bank list: country={}", payload.country_code);
        self.dispatch(Endpoint::BankList, &payload).await
    }
}
