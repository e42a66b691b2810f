use anyhow::Result;

/// Supplies the account identity that keys all progress lookups. Real
/// implementations sit on a wallet RPC; the core treats the address as
/// opaque and never blocks on another wallet's data.
pub trait WalletProvider {
    /// The currently connected account, or `None` while disconnected.
    async fn current_account(&self) -> Result<Option<String>>;
}

/// Fixed-account provider for tests and local runs.
#[derive(Clone, Debug, Default)]
pub struct StaticWallet {
    account: Option<String>,
}

impl StaticWallet {
    pub fn connected(address: impl Into<String>) -> Self {
        Self {
            account: Some(address.into()),
        }
    }

    pub fn disconnected() -> Self {
        Self { account: None }
    }
}

impl WalletProvider for StaticWallet {
    async fn current_account(&self) -> Result<Option<String>> {
        Ok(self.account.clone())
    }
}
