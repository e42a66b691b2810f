use std::collections::HashMap;

use chrono::Utc;
use schema::storage::{ProgressStorage, StorageError, progress_key};
use schema::{EnrollmentRecord, ProgressRecord};
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("malformed wallet address {0:?}")]
    InvalidWallet(String),
    #[error("score {0} is out of range, must be within 0..=100")]
    InvalidScore(u32),
    /// The in-memory record was updated but the write behind it failed.
    #[error("{0}")]
    Persist(#[from] StorageError),
}

/// Owns the per-wallet progress records and their persistence.
///
/// Every mutation is written through the injected storage before
/// returning. A persistence failure leaves the in-memory record updated
/// and is surfaced as [`StoreError::Persist`]; the store does not retry.
/// Missing-target mutations (un-enrolled course, unloaded wallet) are
/// silent no-ops, not failures.
pub struct ProgressStore<S> {
    storage: S,
    records: HashMap<String, ProgressRecord>,
}

impl<S: ProgressStorage> ProgressStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            records: HashMap::new(),
        }
    }

    /// Load the persisted record for this address, or create and persist
    /// an empty one the first time the address is seen. Idempotent:
    /// calling twice with no mutation in between yields identical
    /// records.
    pub fn load_or_create(&mut self, wallet: &str) -> Result<&ProgressRecord, StoreError> {
        validate_wallet(wallet)?;
        if self.records.contains_key(wallet) {
            return Ok(&self.records[wallet]);
        }

        match self.storage.get(&progress_key(wallet))? {
            Some(raw) => {
                let record: ProgressRecord =
                    serde_json::from_str(&raw).map_err(StorageError::from)?;
                debug!(
                    wallet,
                    enrollments = record.enrolled_courses.len(),
                    "loaded progress record"
                );
                self.records.insert(wallet.to_string(), record);
            }
            None => {
                debug!(wallet, "creating progress record");
                self.records
                    .insert(wallet.to_string(), ProgressRecord::new(wallet));
                self.persist(wallet)?;
            }
        }
        Ok(&self.records[wallet])
    }

    /// Enroll the wallet in a course. No-op unless a record is loaded
    /// (creation only happens via `load_or_create`) and the course is not
    /// already enrolled; re-enrolling never resets prior progress.
    pub fn enroll(&mut self, wallet: &str, course_id: &str) -> Result<(), StoreError> {
        let Some(record) = self.records.get_mut(wallet) else {
            debug!(wallet, "enroll ignored, no progress record loaded");
            return Ok(());
        };
        if record.enrollment(course_id).is_some() {
            debug!(wallet, course_id, "enroll ignored, already enrolled");
            return Ok(());
        }
        record
            .enrolled_courses
            .push(EnrollmentRecord::new(course_id));
        self.persist(wallet)
    }

    /// Record a finished attempt. The caller derives `passed` (the quiz
    /// runner is the single source of truth); the store records it as
    /// given. No-op for a course the wallet never enrolled in.
    pub fn record_quiz_result(
        &mut self,
        wallet: &str,
        course_id: &str,
        score: u32,
        passed: bool,
    ) -> Result<(), StoreError> {
        if score > 100 {
            return Err(StoreError::InvalidScore(score));
        }
        let Some(record) = self.records.get_mut(wallet) else {
            debug!(wallet, "quiz result ignored, no progress record loaded");
            return Ok(());
        };
        let Some(entry) = record.enrollment_mut(course_id) else {
            debug!(wallet, course_id, "quiz result ignored, not enrolled");
            return Ok(());
        };
        entry.quiz_score = Some(score);
        entry.quiz_passed = Some(passed);
        entry.completed = passed;
        entry.last_accessed = Utc::now();
        self.persist(wallet)
    }

    /// Mark the course certificate as minted. Idempotent; no-op when the
    /// enrollment is absent or already minted.
    pub fn record_certificate_minted(
        &mut self,
        wallet: &str,
        course_id: &str,
    ) -> Result<(), StoreError> {
        let Some(record) = self.records.get_mut(wallet) else {
            debug!(wallet, "mint ignored, no progress record loaded");
            return Ok(());
        };
        let Some(entry) = record.enrollment_mut(course_id) else {
            debug!(wallet, course_id, "mint ignored, not enrolled");
            return Ok(());
        };
        if entry.nft_minted == Some(true) {
            debug!(wallet, course_id, "mint ignored, already minted");
            return Ok(());
        }
        entry.nft_minted = Some(true);
        entry.last_accessed = Utc::now();
        self.persist(wallet)
    }

    pub fn record(&self, wallet: &str) -> Option<&ProgressRecord> {
        self.records.get(wallet)
    }

    pub fn is_enrolled(&self, wallet: &str, course_id: &str) -> bool {
        self.enrollment(wallet, course_id).is_some()
    }

    pub fn has_passed(&self, wallet: &str, course_id: &str) -> bool {
        self.enrollment(wallet, course_id)
            .is_some_and(|e| e.quiz_passed == Some(true))
    }

    pub fn has_nft(&self, wallet: &str, course_id: &str) -> bool {
        self.enrollment(wallet, course_id)
            .is_some_and(|e| e.nft_minted == Some(true))
    }

    fn enrollment(&self, wallet: &str, course_id: &str) -> Option<&EnrollmentRecord> {
        self.records.get(wallet).and_then(|r| r.enrollment(course_id))
    }

    fn persist(&self, wallet: &str) -> Result<(), StoreError> {
        let record = self.records.get(wallet).expect("record is loaded");
        let raw = serde_json::to_string(record).map_err(StorageError::from)?;
        self.storage.set(&progress_key(wallet), &raw)?;
        Ok(())
    }
}

/// Addresses are opaque identity keys, held fixed as `0x` + 40 hex
/// digits, case preserved.
fn validate_wallet(wallet: &str) -> Result<(), StoreError> {
    let invalid = || StoreError::InvalidWallet(wallet.to_string());
    let hex = wallet.strip_prefix("0x").ok_or_else(invalid)?;
    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::storage::MemoryStorage;

    const WALLET: &str = "0x00a3b2c4d5e6f708192a3b4c5d6e7f8091a2b3c4";

    fn store() -> ProgressStore<MemoryStorage> {
        ProgressStore::new(MemoryStorage::new())
    }

    #[test]
    fn an_unseen_wallet_gets_an_empty_record() {
        let mut store = store();
        let record = store.load_or_create(WALLET).unwrap().clone();
        assert_eq!(record.wallet, WALLET);
        assert!(record.enrolled_courses.is_empty());

        let again = store.load_or_create(WALLET).unwrap();
        assert_eq!(&record, again);
    }

    #[test]
    fn malformed_addresses_are_rejected() {
        let mut store = store();
        for bad in ["", "0x123", "00a3b2c4d5e6f708192a3b4c5d6e7f8091a2b3c4",
            "0xzza3b2c4d5e6f708192a3b4c5d6e7f8091a2b3c4"]
        {
            assert!(matches!(
                store.load_or_create(bad),
                Err(StoreError::InvalidWallet(_))
            ));
        }
    }

    #[test]
    fn enrolling_twice_keeps_a_single_entry() {
        let mut store = store();
        store.load_or_create(WALLET).unwrap();
        store.enroll(WALLET, "c001").unwrap();
        store.enroll(WALLET, "c001").unwrap();

        let record = store.record(WALLET).unwrap();
        assert_eq!(record.enrolled_courses.len(), 1);
        let entry = record.enrollment("c001").unwrap();
        assert!(!entry.completed);
        assert_eq!(entry.quiz_score, None);
    }

    #[test]
    fn enroll_without_a_loaded_record_is_a_no_op() {
        let mut store = store();
        store.enroll(WALLET, "c001").unwrap();
        assert!(store.record(WALLET).is_none());
        assert!(!store.is_enrolled(WALLET, "c001"));
    }

    #[test]
    fn a_quiz_result_updates_the_enrollment() {
        let mut store = store();
        store.load_or_create(WALLET).unwrap();
        store.enroll(WALLET, "c001").unwrap();
        store.record_quiz_result(WALLET, "c001", 85, true).unwrap();

        assert!(store.is_enrolled(WALLET, "c001"));
        assert!(store.has_passed(WALLET, "c001"));
        let entry = store.record(WALLET).unwrap().enrollment("c001").unwrap();
        assert_eq!(entry.quiz_score, Some(85));
        assert_eq!(entry.quiz_passed, Some(true));
        assert!(entry.completed);
    }

    #[test]
    fn a_failed_quiz_does_not_complete_the_course() {
        let mut store = store();
        store.load_or_create(WALLET).unwrap();
        store.enroll(WALLET, "c001").unwrap();
        store.record_quiz_result(WALLET, "c001", 60, false).unwrap();

        let entry = store.record(WALLET).unwrap().enrollment("c001").unwrap();
        assert_eq!(entry.quiz_score, Some(60));
        assert!(!entry.completed);
        assert!(!store.has_passed(WALLET, "c001"));
    }

    #[test]
    fn a_result_for_an_unenrolled_course_changes_nothing() {
        let mut store = store();
        store.load_or_create(WALLET).unwrap();
        store.enroll(WALLET, "c001").unwrap();
        let before = store.record(WALLET).unwrap().clone();

        store.record_quiz_result(WALLET, "c999", 85, true).unwrap();
        assert_eq!(store.record(WALLET).unwrap(), &before);
    }

    #[test]
    fn out_of_range_scores_are_rejected_not_clamped() {
        let mut store = store();
        store.load_or_create(WALLET).unwrap();
        store.enroll(WALLET, "c001").unwrap();
        let before = store.record(WALLET).unwrap().clone();

        assert!(matches!(
            store.record_quiz_result(WALLET, "c001", 101, true),
            Err(StoreError::InvalidScore(101))
        ));
        assert_eq!(store.record(WALLET).unwrap(), &before);
    }

    #[test]
    fn minting_is_idempotent() {
        let mut store = store();
        store.load_or_create(WALLET).unwrap();
        store.enroll(WALLET, "c001").unwrap();
        store.record_quiz_result(WALLET, "c001", 100, true).unwrap();

        store.record_certificate_minted(WALLET, "c001").unwrap();
        let after_first = store.record(WALLET).unwrap().clone();
        store.record_certificate_minted(WALLET, "c001").unwrap();

        assert!(store.has_nft(WALLET, "c001"));
        assert_eq!(store.record(WALLET).unwrap(), &after_first);
    }

    #[test]
    fn minting_an_unenrolled_course_is_a_no_op() {
        let mut store = store();
        store.load_or_create(WALLET).unwrap();
        store.record_certificate_minted(WALLET, "c001").unwrap();
        assert!(!store.has_nft(WALLET, "c001"));
    }

    #[test]
    fn queries_are_false_for_unknown_wallets() {
        let store = store();
        assert!(!store.is_enrolled(WALLET, "c001"));
        assert!(!store.has_passed(WALLET, "c001"));
        assert!(!store.has_nft(WALLET, "c001"));
    }

    /// Write failures surface as errors, but the in-memory record still
    /// reflects the mutation.
    #[test]
    fn a_persistence_failure_keeps_the_in_memory_mutation() {
        struct FailingWrites {
            inner: MemoryStorage,
        }
        impl ProgressStorage for FailingWrites {
            fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
                self.inner.get(key)
            }
            fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
                Err(std::io::Error::other("disk full").into())
            }
            fn keys(&self) -> Result<Vec<String>, StorageError> {
                self.inner.keys()
            }
        }

        // Seed a persisted record first so load_or_create succeeds.
        let seeded = MemoryStorage::new();
        seeded
            .set(
                &progress_key(WALLET),
                &serde_json::to_string(&ProgressRecord::new(WALLET)).unwrap(),
            )
            .unwrap();

        let mut store = ProgressStore::new(FailingWrites { inner: seeded });
        store.load_or_create(WALLET).unwrap();

        let result = store.enroll(WALLET, "c001");
        assert!(matches!(result, Err(StoreError::Persist(_))));
        assert!(store.is_enrolled(WALLET, "c001"));
    }
}
