use std::fmt;

/// Cashier API endpoints, relative to the configured base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Balance,
    UserInfo,
    MerchantInfo,
    BankAccountResolve,
    TransferToWallet,
    TransferToBank,
    WalletTransferStatus,
    BankTransferStatus,
    BankList,
    SendOtp,
    CreateAccount,
    CardPayment,
    BankAccountPayment,
    TransactionStatus,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Balance => "/balances",
            Endpoint::UserInfo => "/info/user",
            Endpoint::MerchantInfo => "/info/merchant",
            Endpoint::BankAccountResolve => "/verification/accountNumber/resolve",
            Endpoint::TransferToWallet => "/transfer/toWallet",
            Endpoint::TransferToBank => "/transfer/toBank",
            Endpoint::WalletTransferStatus => "/transfer/status/toWallet",
            Endpoint::BankTransferStatus => "/transfer/status/toBank",
            Endpoint::BankList => "/banks",
            Endpoint::SendOtp => "/info/user/sendOTP",
            Endpoint::CreateAccount => "/info/user/create",
            Endpoint::CardPayment => "/transaction/initialize",
            Endpoint::BankAccountPayment => "/transaction/banks",
            Endpoint::TransactionStatus => "/transaction/status",
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
