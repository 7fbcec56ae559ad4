//! Optimistic mutation controller for the selection list
//!
//! Edits apply locally first, then persist through the configured
//! [`SelectionStore`]; a failed save restores the pre-mutation snapshot
//! exactly and emits a dismissible notice. Mutations are strictly
//! serialized: one async mutex guards the whole apply-persist-settle
//! sequence, so every mutation starts from the latest confirmed-or-reverted
//! list and at most one snapshot exists at a time.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, error, info};
use waypoint_api::{Place, Result, SyncError};

use crate::selection::SelectionList;
use crate::store::SelectionStore;

const UPDATE_FAILED_MESSAGE: &str = "Failed to update places.";
const DELETE_FAILED_MESSAGE: &str = "Failed to delete the place.";

/// Dismissible failure notice surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncNotice {
    pub message: String,
}

struct ControllerState {
    list: SelectionList,
    /// Item awaiting removal confirmation, held here instead of in an
    /// out-of-band mutable cell so the flow is testable in isolation.
    pending_removal: Option<String>,
}

pub struct SelectionController {
    state: Mutex<ControllerState>,
    store: Arc<dyn SelectionStore>,
    list_tx: watch::Sender<SelectionList>,
    notice_tx: watch::Sender<Option<SyncNotice>>,
}

impl SelectionController {
    pub fn new(store: Arc<dyn SelectionStore>) -> Self {
        let (list_tx, _) = watch::channel(SelectionList::new());
        let (notice_tx, _) = watch::channel(None);
        Self {
            state: Mutex::new(ControllerState {
                list: SelectionList::new(),
                pending_removal: None,
            }),
            store,
            list_tx,
            notice_tx,
        }
    }

    /// Replace the list with already-persisted places (initial load). Does
    /// not write back to the store.
    pub async fn set_confirmed(&self, places: Vec<Place>) {
        let mut state = self.state.lock().await;
        state.list = SelectionList::from_places(places);
        info!(count = state.list.len(), "selection list hydrated");
        self.publish(&state.list);
    }

    /// Optimistically prepend `place` and persist the new list.
    ///
    /// Adding an id that is already selected is a no-op; a failed save rolls
    /// the list back to the pre-mutation snapshot.
    pub async fn add(&self, place: Place) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.list.contains(&place.id) {
            debug!(id = %place.id, "place already selected, ignoring add");
            return Ok(());
        }

        let snapshot = state.list.clone();
        state.list.prepend(place);
        self.publish(&state.list);

        self.persist_or_rollback(&mut state, snapshot, UPDATE_FAILED_MESSAGE)
            .await
    }

    /// Optimistically drop the entry with `id` and persist the new list.
    ///
    /// Clears any pending-removal marker (the confirmation dialog closes on
    /// both paths). Removing an absent id is a no-op.
    pub async fn remove(&self, id: &str) -> Result<()> {
        let mut state = self.state.lock().await;
        self.remove_locked(&mut state, id).await
    }

    /// Mark `id` as awaiting removal confirmation.
    pub async fn begin_remove(&self, id: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.pending_removal = Some(id.into());
    }

    /// Abandon the pending removal, if any.
    pub async fn cancel_remove(&self) {
        let mut state = self.state.lock().await;
        state.pending_removal = None;
    }

    /// Remove the item marked by [`begin_remove`](Self::begin_remove).
    /// No-op when nothing is pending.
    pub async fn confirm_remove(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        match state.pending_removal.take() {
            Some(id) => self.remove_locked(&mut state, &id).await,
            None => Ok(()),
        }
    }

    /// The id currently awaiting removal confirmation.
    pub async fn pending_removal(&self) -> Option<String> {
        self.state.lock().await.pending_removal.clone()
    }

    /// Snapshot of the current list.
    pub async fn list(&self) -> SelectionList {
        self.state.lock().await.list.clone()
    }

    /// Observe list changes (read-only snapshots).
    pub fn subscribe_list(&self) -> watch::Receiver<SelectionList> {
        self.list_tx.subscribe()
    }

    /// Observe failure notices.
    pub fn subscribe_notices(&self) -> watch::Receiver<Option<SyncNotice>> {
        self.notice_tx.subscribe()
    }

    /// Dismiss the current notice, if any.
    pub fn dismiss_notice(&self) {
        self.notice_tx.send_replace(None);
    }

    async fn remove_locked(&self, state: &mut ControllerState, id: &str) -> Result<()> {
        state.pending_removal = None;
        if !state.list.contains(id) {
            debug!(%id, "place not selected, ignoring remove");
            return Ok(());
        }

        let snapshot = state.list.clone();
        state.list.remove(id);
        self.publish(&state.list);

        self.persist_or_rollback(state, snapshot, DELETE_FAILED_MESSAGE)
            .await
    }

    async fn persist_or_rollback(
        &self,
        state: &mut ControllerState,
        snapshot: SelectionList,
        fallback: &str,
    ) -> Result<()> {
        match self.store.save(state.list.places()).await {
            Ok(ack) => {
                if let Some(message) = ack {
                    debug!(%message, "save acknowledged");
                }
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "persisting selection failed, rolling back");
                state.list = snapshot;
                self.publish(&state.list);

                let mut message = err.to_string();
                if message.is_empty() {
                    message = fallback.to_string();
                }
                self.notice_tx.send_replace(Some(SyncNotice {
                    message: message.clone(),
                }));
                Err(SyncError::Persist { message })
            }
        }
    }

    fn publish(&self, list: &SelectionList) {
        self.list_tx.send_replace(list.clone());
    }
}
