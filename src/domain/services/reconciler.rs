#[cfg(test)]
#[path = "reconciler_test.rs"]
mod tests;

use std::future::Future;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::GatewayError;

/// Optimistic working copy of a remote-backed record. A mutation is applied
/// locally first so the UI reflects it with zero latency, then settled
/// against the remote call: success keeps the optimistic copy, failure
/// restores the pre-mutation snapshot. Works for any
/// `(snapshot, transform, remote call)` triple.
pub struct Reconciler<T: Clone> {
    working: T,
    snapshot: Option<T>,
}

impl<T: Clone> Reconciler<T> {
    pub fn new(snapshot: T) -> Reconciler<T> {
        return Reconciler {
            working: snapshot,
            snapshot: None,
        };
    }

    pub fn working_copy(&self) -> &T {
        return &self.working;
    }

    pub fn is_applying(&self) -> bool {
        return self.snapshot.is_some();
    }

    /// Adopts a fresh server snapshot, e.g. after the detail view re-fetches.
    pub fn reset(&mut self, snapshot: T) {
        self.working = snapshot;
        self.snapshot = None;
    }

    /// Publishes `transform(working copy)` as the new working copy and
    /// returns it for the remote call. Rejects a second mutation while one
    /// is still applying; serializing attempts on one entity is the
    /// caller's contract.
    pub fn begin<F>(&mut self, transform: F) -> Result<T>
    where
        F: FnOnce(&T) -> T,
    {
        if self.snapshot.is_some() {
            bail!("A mutation is already applying for this entity");
        }

        let optimistic = transform(&self.working);
        self.snapshot = Some(self.working.clone());
        self.working = optimistic.clone();

        return Ok(optimistic);
    }

    /// Settles the applying mutation. Success keeps the optimistic copy;
    /// failure restores the pre-mutation snapshot and surfaces the error for
    /// the view to display.
    pub fn settle(&mut self, result: Result<(), GatewayError>) -> Result<(), GatewayError> {
        let snapshot = self.snapshot.take();

        if let Err(err) = result {
            if let Some(previous) = snapshot {
                self.working = previous;
            }

            tracing::debug!(error = %err, "Rolled back optimistic mutation");
            return Err(err);
        }

        return Ok(());
    }

    /// Begin, remote call, settle in one step.
    pub async fn mutate<F, C, Fut>(&mut self, transform: F, call: C) -> Result<()>
    where
        F: FnOnce(&T) -> T,
        C: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<(), GatewayError>>,
    {
        let optimistic = self.begin(transform)?;
        let result = call(optimistic).await;
        self.settle(result)?;

        return Ok(());
    }
}
