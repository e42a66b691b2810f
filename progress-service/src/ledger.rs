use std::hash::{DefaultHasher, Hash, Hasher};
use std::time::Duration;

use anyhow::Result;
use schema::storage::ProgressStorage;
use tracing::info;

use crate::store::ProgressStore;

/// Receipt from a successful certificate write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintReceipt {
    pub course_id: String,
    pub tx: String,
}

/// Writes a course certificate to the external ledger. Real
/// implementations submit the mint transaction through the connected
/// wallet; the core only cares about success or failure.
pub trait LedgerWriter {
    async fn mint_certificate(&self, course_id: &str) -> Result<MintReceipt>;
}

/// Simulated transaction confirmation time.
const CONFIRMATION_DELAY: Duration = Duration::from_millis(2000);

/// Simulated ledger, standing in for the on-chain certificate contract.
#[derive(Clone, Debug)]
pub struct MockLedger {
    accept: bool,
}

impl MockLedger {
    pub fn new() -> Self {
        Self { accept: true }
    }

    /// A ledger that fails every mint, for exercising failure paths.
    pub fn rejecting() -> Self {
        Self { accept: false }
    }
}

impl Default for MockLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerWriter for MockLedger {
    async fn mint_certificate(&self, course_id: &str) -> Result<MintReceipt> {
        tokio::time::sleep(CONFIRMATION_DELAY).await;
        if !self.accept {
            anyhow::bail!("ledger rejected certificate mint for course {course_id}");
        }

        let mut hasher = DefaultHasher::new();
        course_id.hash(&mut hasher);
        Ok(MintReceipt {
            course_id: course_id.to_string(),
            tx: format!("0x{:016x}", hasher.finish()),
        })
    }
}

/// Mint a certificate and record it in the progress store. The store is
/// only touched after the ledger signals success; a ledger failure
/// leaves the record unchanged.
pub async fn mint_and_record<S, L>(
    store: &mut ProgressStore<S>,
    ledger: &L,
    wallet: &str,
    course_id: &str,
) -> Result<MintReceipt>
where
    S: ProgressStorage,
    L: LedgerWriter,
{
    anyhow::ensure!(
        store.has_passed(wallet, course_id),
        "certificate requires a passed quiz for course {course_id}"
    );

    let receipt = ledger.mint_certificate(course_id).await?;
    info!(wallet, course_id, tx = %receipt.tx, "certificate minted");
    store.record_certificate_minted(wallet, course_id)?;
    Ok(receipt)
}
