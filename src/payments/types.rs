//! OPay request types and wire payloads
//!
//! Each operation takes a request struct whose `Default` impl carries the
//! vendor defaults for its optional fields. Required fields are `Option`s and
//! are checked when the request is turned into its wire payload, before any
//! network activity.

use crate::error::{require, OpayError, OpayResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default currency code for transfers and collections
pub const DEFAULT_CURRENCY: &str = "NGN";
/// Default country code
pub const DEFAULT_COUNTRY: &str = "NG";
/// Default pay type for card collections
pub const CARD_PAY_TYPE: &str = "bankcard";
/// Default pay type for bank-account collections
pub const BANK_ACCOUNT_PAY_TYPE: &str = "bankaccount";

const REDACTED: &str = "[REDACTED]";

fn redact(value: &Option<String>) -> Option<&'static str> {
    value.as_ref().map(|_| REDACTED)
}

/// Merchant credentials supplied at client construction
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    public_key: String,
    merchant_id: String,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, merchant_id: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            merchant_id: merchant_id.into(),
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &REDACTED)
            .field("merchant_id", &self.merchant_id)
            .finish()
    }
}

/// Fixed header set attached to every request
#[derive(Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    authorization: String,
    merchant_id: String,
}

impl RequestHeaders {
    pub const AUTHORIZATION: &'static str = "Authorization";
    pub const CONTENT_TYPE: &'static str = "Content-Type";
    pub const MERCHANT_ID: &'static str = "MerchantId";
    pub const JSON: &'static str = "application/json";

    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self {
            authorization: format!("Bearer {}", credentials.public_key()),
            merchant_id: credentials.merchant_id().to_string(),
        }
    }

    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    /// Header name/value pairs in send order
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            (Self::AUTHORIZATION, self.authorization.as_str()),
            (Self::CONTENT_TYPE, Self::JSON),
            (Self::MERCHANT_ID, self.merchant_id.as_str()),
        ]
    }
}

impl fmt::Debug for RequestHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestHeaders")
            .field("authorization", &"Bearer [REDACTED]")
            .field("merchant_id", &self.merchant_id)
            .finish()
    }
}

/// Wallet kind addressed by a wallet transfer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WalletType {
    #[default]
    User,
    Merchant,
}

impl WalletType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletType::User => "USER",
            WalletType::Merchant => "MERCHANT",
        }
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recipient of a wallet transfer
///
/// Serialized as the `receiver` object, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum WalletRecipient {
    /// Personal wallet addressed by phone number
    #[serde(rename = "USER")]
    User {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(rename = "phoneNumber")]
        phone_number: String,
    },
    /// Business wallet addressed by merchant identifier
    #[serde(rename = "MERCHANT")]
    Merchant {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(rename = "merchantId")]
        merchant_id: String,
    },
}

impl WalletRecipient {
    pub fn user(phone_number: impl Into<String>) -> Self {
        WalletRecipient::User {
            name: None,
            phone_number: phone_number.into(),
        }
    }

    pub fn merchant(merchant_id: impl Into<String>) -> Self {
        WalletRecipient::Merchant {
            name: None,
            merchant_id: merchant_id.into(),
        }
    }

    /// Attach the beneficiary's display name
    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            WalletRecipient::User { name, .. } | WalletRecipient::Merchant { name, .. } => {
                *name = Some(value.into());
            }
        }
        self
    }

    pub fn wallet_type(&self) -> WalletType {
        match self {
            WalletRecipient::User { .. } => WalletType::User,
            WalletRecipient::Merchant { .. } => WalletType::Merchant,
        }
    }

    fn validated(self) -> OpayResult<Self> {
        match self {
            WalletRecipient::User { name, phone_number } => Ok(WalletRecipient::User {
                name,
                phone_number: require(Some(phone_number), "phone_number")?,
            }),
            WalletRecipient::Merchant { name, merchant_id } => Ok(WalletRecipient::Merchant {
                name,
                merchant_id: require(Some(merchant_id), "merchant_id")?,
            }),
        }
    }
}

/// Which transfer-status endpoint to query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientType {
    /// Transfer to an OPay wallet
    #[default]
    Opay,
    /// Transfer to a bank account
    Bank,
}

impl fmt::Display for RecipientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipientType::Opay => f.write_str("opay"),
            RecipientType::Bank => f.write_str("bank"),
        }
    }
}

/// Bank account validation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateBankRequest {
    pub bank_code: Option<String>,
    pub account_number: Option<String>,
    /// Defaults to `NG`
    pub country_code: String,
}

impl Default for ValidateBankRequest {
    fn default() -> Self {
        Self {
            bank_code: None,
            account_number: None,
            country_code: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl ValidateBankRequest {
    pub fn new(bank_code: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self {
            bank_code: Some(bank_code.into()),
            account_number: Some(account_number.into()),
            ..Default::default()
        }
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    pub(crate) fn into_payload(self) -> OpayResult<BankValidationPayload> {
        Ok(BankValidationPayload {
            bank_code: require(self.bank_code, "bank_code")?,
            bank_account_no: require(self.account_number, "account_number")?,
            country_code: self.country_code,
        })
    }
}

/// Bank list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankListRequest {
    /// Defaults to `NG`
    pub country_code: String,
}

impl Default for BankListRequest {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl BankListRequest {
    pub fn for_country(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
        }
    }

    pub(crate) fn into_payload(self) -> CountryPayload {
        CountryPayload {
            country_code: self.country_code,
        }
    }
}

/// Transfer to an OPay wallet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletTransferRequest {
    pub amount: Option<String>,
    pub reason: Option<String>,
    /// `None` is treated as a `USER` recipient without a phone number
    pub recipient: Option<WalletRecipient>,
    /// Defaults to `NGN`
    pub currency: String,
    /// Defaults to `NG`
    pub country: String,
}

impl Default for WalletTransferRequest {
    fn default() -> Self {
        Self {
            amount: None,
            reason: None,
            recipient: None,
            currency: DEFAULT_CURRENCY.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl WalletTransferRequest {
    pub fn new(
        amount: impl Into<String>,
        reason: impl Into<String>,
        recipient: WalletRecipient,
    ) -> Self {
        Self {
            amount: Some(amount.into()),
            reason: Some(reason.into()),
            recipient: Some(recipient),
            ..Default::default()
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub(crate) fn into_payload(self, reference: String) -> OpayResult<WalletTransferPayload> {
        let amount = require(self.amount, "amount")?;
        let reason = require(self.reason, "reason")?;
        let receiver = match self.recipient {
            Some(recipient) => recipient.validated()?,
            None => return Err(OpayError::missing_field("phone_number")),
        };

        Ok(WalletTransferPayload {
            reference,
            amount,
            currency: self.currency,
            country: self.country,
            receiver,
            reason,
        })
    }
}

/// Transfer to a bank account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankTransferRequest {
    pub amount: Option<String>,
    /// Beneficiary name
    pub name: Option<String>,
    pub bank_code: Option<String>,
    pub account_number: Option<String>,
    pub reason: Option<String>,
    /// Defaults to `NGN`
    pub currency: String,
    /// Defaults to `NG`
    pub country: String,
}

impl Default for BankTransferRequest {
    fn default() -> Self {
        Self {
            amount: None,
            name: None,
            bank_code: None,
            account_number: None,
            reason: None,
            currency: DEFAULT_CURRENCY.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl BankTransferRequest {
    pub fn new(
        amount: impl Into<String>,
        name: impl Into<String>,
        bank_code: impl Into<String>,
        account_number: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            amount: Some(amount.into()),
            name: Some(name.into()),
            bank_code: Some(bank_code.into()),
            account_number: Some(account_number.into()),
            reason: Some(reason.into()),
            ..Default::default()
        }
    }

    pub(crate) fn into_payload(self, reference: String) -> OpayResult<BankTransferPayload> {
        let amount = require(self.amount, "amount")?;
        let receiver = BankReceiver {
            name: require(self.name, "name")?,
            bank_code: require(self.bank_code, "bank_code")?,
            bank_account_number: require(self.account_number, "account_number")?,
        };
        let reason = require(self.reason, "reason")?;

        Ok(BankTransferPayload {
            reference,
            amount,
            currency: self.currency,
            country: self.country,
            receiver,
            reason,
        })
    }
}

/// OPay user account creation
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CreateAccountRequest {
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
    /// Passcode delivered by `send_otp`
    pub otp: Option<String>,
}

impl fmt::Debug for CreateAccountRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateAccountRequest")
            .field("phone_number", &self.phone_number)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &redact(&self.password))
            .field("address", &self.address)
            .field("otp", &redact(&self.otp))
            .finish()
    }
}

impl CreateAccountRequest {
    pub(crate) fn into_payload(self) -> OpayResult<CreateAccountPayload> {
        Ok(CreateAccountPayload {
            phone_number: require(self.phone_number, "phone_number")?,
            email: require(self.email, "email")?,
            first_name: require(self.first_name, "first_name")?,
            last_name: require(self.last_name, "last_name")?,
            password: require(self.password, "password")?,
            address: require(self.address, "address")?,
            otp: require(self.otp, "otp")?,
        })
    }
}

/// Card collection request
///
/// Every field except `country` and `pay_type` is required.
#[derive(Clone, PartialEq, Eq)]
pub struct CardPaymentRequest {
    pub amount: Option<String>,
    pub currency: Option<String>,
    /// Defaults to `NG`
    pub country: String,
    /// Defaults to `bankcard`
    pub pay_type: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub customer_email: Option<String>,
    pub card_number: Option<String>,
    pub card_month: Option<String>,
    pub card_year: Option<String>,
    pub card_cvv: Option<String>,
    /// 3-D Secure return URL
    pub return_url: Option<String>,
    pub account_number: Option<String>,
    pub bank_code: Option<String>,
    pub reason: Option<String>,
    pub callback_url: Option<String>,
    /// Expiry of the payment, in minutes
    pub expire_at: Option<String>,
    pub billing_zip: Option<String>,
    pub billing_city: Option<String>,
    pub billing_address: Option<String>,
    pub billing_state: Option<String>,
    pub billing_country: Option<String>,
}

impl Default for CardPaymentRequest {
    fn default() -> Self {
        Self {
            amount: None,
            currency: None,
            country: DEFAULT_COUNTRY.to_string(),
            pay_type: CARD_PAY_TYPE.to_string(),
            first_name: None,
            last_name: None,
            customer_email: None,
            card_number: None,
            card_month: None,
            card_year: None,
            card_cvv: None,
            return_url: None,
            account_number: None,
            bank_code: None,
            reason: None,
            callback_url: None,
            expire_at: None,
            billing_zip: None,
            billing_city: None,
            billing_address: None,
            billing_state: None,
            billing_country: None,
        }
    }
}

impl fmt::Debug for CardPaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardPaymentRequest")
            .field("amount", &self.amount)
            .field("currency", &self.currency)
            .field("country", &self.country)
            .field("pay_type", &self.pay_type)
            .field("customer_email", &self.customer_email)
            .field("card_number", &redact(&self.card_number))
            .field("card_cvv", &redact(&self.card_cvv))
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

impl CardPaymentRequest {
    pub(crate) fn into_payload(self, reference: String) -> OpayResult<CardPaymentPayload> {
        Ok(CardPaymentPayload {
            reference,
            amount: require(self.amount, "amount")?,
            currency: require(self.currency, "currency")?,
            country: self.country,
            pay_type: self.pay_type,
            first_name: require(self.first_name, "first_name")?,
            last_name: require(self.last_name, "last_name")?,
            customer_email: require(self.customer_email, "customer_email")?,
            card_number: require(self.card_number, "card_number")?,
            card_date_month: require(self.card_month, "card_month")?,
            card_date_year: require(self.card_year, "card_year")?,
            card_cvc: require(self.card_cvv, "card_cvv")?,
            return_3ds_url: require(self.return_url, "return_url")?,
            bank_account_number: require(self.account_number, "account_number")?,
            bank_code: require(self.bank_code, "bank_code")?,
            reason: require(self.reason, "reason")?,
            callback_url: require(self.callback_url, "callback_url")?,
            expire_at: require(self.expire_at, "expire_at")?,
            billing_zip: require(self.billing_zip, "billing_zip")?,
            billing_city: require(self.billing_city, "billing_city")?,
            billing_address: require(self.billing_address, "billing_address")?,
            billing_state: require(self.billing_state, "billing_state")?,
            billing_country: require(self.billing_country, "billing_country")?,
        })
    }
}

/// Bank-account collection request
#[derive(Clone, PartialEq, Eq)]
pub struct BankAccountPaymentRequest {
    pub amount: Option<String>,
    pub account_number: Option<String>,
    pub bank_code: Option<String>,
    pub return_url: Option<String>,
    pub reason: Option<String>,
    pub customer_phone: Option<String>,
    /// Bank verification number
    pub bvn: Option<String>,
    pub dob_day: Option<String>,
    pub dob_month: Option<String>,
    pub dob_year: Option<String>,
    /// Defaults to `bankaccount`
    pub pay_type: String,
    /// Defaults to `NGN`
    pub currency: String,
    /// Defaults to `NG`
    pub country: String,
}

impl Default for BankAccountPaymentRequest {
    fn default() -> Self {
        Self {
            amount: None,
            account_number: None,
            bank_code: None,
            return_url: None,
            reason: None,
            customer_phone: None,
            bvn: None,
            dob_day: None,
            dob_month: None,
            dob_year: None,
            pay_type: BANK_ACCOUNT_PAY_TYPE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl fmt::Debug for BankAccountPaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BankAccountPaymentRequest")
            .field("amount", &self.amount)
            .field("bank_code", &self.bank_code)
            .field("reason", &self.reason)
            .field("bvn", &redact(&self.bvn))
            .field("pay_type", &self.pay_type)
            .field("currency", &self.currency)
            .field("country", &self.country)
            .finish_non_exhaustive()
    }
}

impl BankAccountPaymentRequest {
    pub(crate) fn into_payload(self, reference: String) -> OpayResult<BankAccountPaymentPayload> {
        Ok(BankAccountPaymentPayload {
            reference,
            amount: require(self.amount, "amount")?,
            currency: self.currency,
            country: self.country,
            pay_type: self.pay_type,
            bank_account_number: require(self.account_number, "account_number")?,
            bank_code: require(self.bank_code, "bank_code")?,
            return_3ds_url: require(self.return_url, "return_url")?,
            reason: require(self.reason, "reason")?,
            customer_phone: require(self.customer_phone, "customer_phone")?,
            bvn: require(self.bvn, "bvn")?,
            dob_day: require(self.dob_day, "dob_day")?,
            dob_month: require(self.dob_month, "dob_month")?,
            dob_year: require(self.dob_year, "dob_year")?,
        })
    }
}

// Wire payloads. Key names follow the vendor's API exactly.

#[derive(Debug, Serialize)]
pub(crate) struct PhonePayload<'a> {
    #[serde(rename = "phoneNumber")]
    pub phone_number: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmailPayload<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BankValidationPayload {
    pub bank_code: String,
    pub bank_account_no: String,
    pub country_code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CountryPayload {
    pub country_code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatusPayload<'a> {
    pub reference: &'a str,
    pub order_no: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct WalletTransferPayload {
    pub reference: String,
    pub amount: String,
    pub currency: String,
    pub country: String,
    pub receiver: WalletRecipient,
    pub reason: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BankReceiver {
    pub name: String,
    pub bank_code: String,
    pub bank_account_number: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct BankTransferPayload {
    pub reference: String,
    pub amount: String,
    pub currency: String,
    pub country: String,
    pub receiver: BankReceiver,
    pub reason: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateAccountPayload {
    pub phone_number: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub address: String,
    pub otp: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CardPaymentPayload {
    pub reference: String,
    pub amount: String,
    pub currency: String,
    pub country: String,
    pub pay_type: String,
    pub first_name: String,
    pub last_name: String,
    pub customer_email: String,
    pub card_number: String,
    pub card_date_month: String,
    pub card_date_year: String,
    #[serde(rename = "cardCVC")]
    pub card_cvc: String,
    #[serde(rename = "return3dsUrl")]
    pub return_3ds_url: String,
    pub bank_account_number: String,
    pub bank_code: String,
    pub reason: String,
    pub callback_url: String,
    pub expire_at: String,
    pub billing_zip: String,
    pub billing_city: String,
    pub billing_address: String,
    pub billing_state: String,
    pub billing_country: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BankAccountPaymentPayload {
    pub reference: String,
    pub amount: String,
    pub currency: String,
    pub country: String,
    pub pay_type: String,
    pub bank_account_number: String,
    pub bank_code: String,
    #[serde(rename = "return3dsUrl")]
    pub return_3ds_url: String,
    pub reason: String,
    pub customer_phone: String,
    pub bvn: String,
    pub dob_day: String,
    pub dob_month: String,
    pub dob_year: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_headers_from_credentials() {
        let credentials = Credentials::new("OPAYPUB_test", "256612345678901");
        let headers = RequestHeaders::from_credentials(&credentials);

        assert_eq!(
            headers.pairs(),
            [
                ("Authorization", "Bearer OPAYPUB_test"),
                ("Content-Type", "application/json"),
                ("MerchantId", "256612345678901"),
            ]
        );
        assert!(!format!("{:?}", headers).contains("OPAYPUB_test"));
        assert!(!format!("{:?}", credentials).contains("OPAYPUB_test"));
    }

    #[test]
    fn test_wallet_recipient_serialization() {
        let user = serde_json::to_value(WalletRecipient::user("+2348000000000")).unwrap();
        assert_eq!(user, json!({"type": "USER", "phoneNumber": "+2348000000000"}));

        let merchant =
            serde_json::to_value(WalletRecipient::merchant("256612345678901").with_name("Shop"))
                .unwrap();
        assert_eq!(
            merchant,
            json!({"type": "MERCHANT", "name": "Shop", "merchantId": "256612345678901"})
        );
    }

    #[test]
    fn test_wallet_transfer_without_recipient_reports_phone() {
        let request = WalletTransferRequest {
            amount: Some("100".to_string()),
            reason: Some("refund".to_string()),
            ..Default::default()
        };
        let err = request.into_payload("REF".to_string()).unwrap_err();
        assert_eq!(err.missing_field_name(), Some("phone_number"));
    }

    #[test]
    fn test_blank_merchant_id_is_missing() {
        let request = WalletTransferRequest::new("100", "refund", WalletRecipient::merchant(" "));
        let err = request.into_payload("REF".to_string()).unwrap_err();
        assert_eq!(err.missing_field_name(), Some("merchant_id"));
    }

    #[test]
    fn test_validate_bank_payload_keys() {
        let payload = ValidateBankRequest::new("058", "0123456789")
            .into_payload()
            .unwrap();
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({"bankCode": "058", "bankAccountNo": "0123456789", "countryCode": "NG"})
        );
    }

    #[test]
    fn test_bank_account_payment_payload_keys() {
        let request = BankAccountPaymentRequest {
            amount: Some("5000".to_string()),
            account_number: Some("0123456789".to_string()),
            bank_code: Some("058".to_string()),
            return_url: Some("https://shop.example.com/return".to_string()),
            reason: Some("order 42".to_string()),
            customer_phone: Some("+2348000000000".to_string()),
            bvn: Some("22222222222".to_string()),
            dob_day: Some("01".to_string()),
            dob_month: Some("02".to_string()),
            dob_year: Some("1990".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(request.into_payload("REF".to_string()).unwrap()).unwrap();

        assert_eq!(value["payType"], "bankaccount");
        assert_eq!(value["currency"], "NGN");
        assert_eq!(value["country"], "NG");
        assert_eq!(value["return3dsUrl"], "https://shop.example.com/return");
        assert_eq!(value["bankAccountNumber"], "0123456789");
        assert_eq!(value["dobYear"], "1990");
        assert_eq!(value.as_object().unwrap().len(), 14);
    }

    #[test]
    fn test_sensitive_debug_output_is_redacted() {
        let card = CardPaymentRequest {
            card_number: Some("5399830000000008".to_string()),
            card_cvv: Some("123".to_string()),
            ..Default::default()
        };
        let rendered = format!("{:?}", card);
        assert!(!rendered.contains("5399830000000008"));
        assert!(!rendered.contains("\"123\""));

        let account = CreateAccountRequest {
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        assert!(!format!("{:?}", account).contains("hunter2"));
    }
}
