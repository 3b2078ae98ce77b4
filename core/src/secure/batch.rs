//! secure/batch.rs
//! Batch entry points; key derivation dominates, so items run on the worker
//! pool.

use crate::secure::types::{SecureCodec, SecureEnvelopeError};
use crate::workers::{run_batch, WorkerProfile};

impl SecureCodec {
    /// Encode each plaintext independently; results keep input order.
    pub fn encode_batch<T>(&self, plaintexts: &[T], profile: &WorkerProfile) -> Vec<Result<String, SecureEnvelopeError>>
    where
        T: AsRef<[u8]> + Sync,
    {
        let jobs: Vec<&T> = plaintexts.iter().collect();
        run_batch(jobs, profile, |p| self.encode_sequence(p.as_ref()))
    }

    /// Decode each sequence independently; results keep input order.
    pub fn decode_batch<S>(&self, sequences: &[S], profile: &WorkerProfile) -> Vec<Result<Vec<u8>, SecureEnvelopeError>>
    where
        S: AsRef<str> + Sync,
    {
        let jobs: Vec<&S> = sequences.iter().collect();
        run_batch(jobs, profile, |s| self.decode_sequence(s.as_ref()))
    }
}
