//! Dashboard request handlers
//!
//! Every user action that talks to the menu API is sent from here. Requests
//! run as independent tokio tasks; their results come back as `Completion`s
//! and only touch `DashboardState` when applied, in arrival order.

use super::state::DashboardState;
use crate::api::FoodApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::COMPLETION_QUEUE_SIZE;
use crate::events::Operation;
use crate::food::{FoodInput, FoodItem, NewFood};

use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;

/// What a successful request changes in the local collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Loaded(Vec<FoodItem>),
    Created(FoodItem),
    Updated { id: u64, food: FoodItem },
    Deleted(u64),
}

/// A finished request, waiting to be reconciled into the state.
#[derive(Debug)]
pub struct Completion {
    pub operation: Operation,
    pub result: Result<Mutation, ApiError>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("no dish is selected for editing")]
    NoEditingSelection,
}

/// The dashboard view-model: owns the state and issues menu requests.
pub struct Dashboard {
    pub state: DashboardState,
    api: Arc<dyn FoodApi>,
    completion_sender: mpsc::Sender<Completion>,
    completion_receiver: mpsc::Receiver<Completion>,
    mounted: bool,
}

impl Dashboard {
    pub fn new(api: Arc<dyn FoodApi>, state: DashboardState) -> Self {
        let (completion_sender, completion_receiver) = mpsc::channel(COMPLETION_QUEUE_SIZE);
        Self {
            state,
            api,
            completion_sender,
            completion_receiver,
            mounted: false,
        }
    }

    /// Load the menu the first time the dashboard is shown. Later calls do nothing.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.reload();
    }

    /// Fetch the whole menu again, replacing the local copy when it arrives.
    pub fn reload(&mut self) {
        let api = Arc::clone(&self.api);
        self.dispatch(Operation::Load, async move {
            api.list_foods().await.map(Mutation::Loaded)
        });
    }

    /// Create a dish from form input. New dishes are always available.
    pub fn handle_add_food(&mut self, input: FoodInput) {
        let api = Arc::clone(&self.api);
        let body = NewFood::from(input);
        self.dispatch(Operation::Create, async move {
            api.create_food(&body).await.map(Mutation::Created)
        });
    }

    /// Update the dish currently selected for editing with form input.
    pub fn handle_update_food(&mut self, input: FoodInput) -> Result<(), DashboardError> {
        let Some(editing) = self.state.editing_food.as_ref() else {
            log::warn!("update requested with no dish selected for editing");
            return Err(DashboardError::NoEditingSelection);
        };
        let payload = FoodItem::merged(editing, input);
        let api = Arc::clone(&self.api);
        self.dispatch(Operation::Update, async move {
            let id = payload.id;
            api.update_food(&payload)
                .await
                .map(|food| Mutation::Updated { id, food })
        });
        Ok(())
    }

    pub fn handle_delete_food(&mut self, id: u64) {
        let api = Arc::clone(&self.api);
        self.dispatch(Operation::Delete, async move {
            api.delete_food(id).await.map(|()| Mutation::Deleted(id))
        });
    }

    /// Flip a dish between available and unavailable.
    pub fn handle_toggle_available(&mut self, food: &FoodItem) {
        let payload = food.with_availability(!food.available);
        let api = Arc::clone(&self.api);
        self.dispatch(Operation::Availability, async move {
            let id = payload.id;
            api.update_food(&payload)
                .await
                .map(|food| Mutation::Updated { id, food })
        });
    }

    pub fn handle_edit_food(&mut self, food: FoodItem) {
        self.state.begin_edit(food);
    }

    pub fn toggle_modal(&mut self) {
        self.state.toggle_modal();
    }

    pub fn toggle_edit_modal(&mut self) {
        self.state.toggle_edit_modal();
    }

    /// Apply every completion that has already arrived, without waiting.
    /// Returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completion_receiver.try_recv() {
            self.state.apply_completion(completion);
            applied += 1;
        }
        applied
    }

    /// Wait until every request sent so far has been applied.
    #[cfg(test)]
    pub async fn settle(&mut self) {
        while self.state.pending_requests > 0 {
            match self.completion_receiver.recv().await {
                Some(completion) => self.state.apply_completion(completion),
                None => break,
            }
        }
    }

    fn dispatch<F>(&mut self, operation: Operation, request: F)
    where
        F: Future<Output = Result<Mutation, ApiError>> + Send + 'static,
    {
        self.state.pending_requests += 1;
        let sender = self.completion_sender.clone();
        // The request runs in its own task so a panic still yields a completion
        tokio::spawn(async move {
            let result = match tokio::spawn(request).await {
                Ok(result) => result,
                Err(e) => Err(ApiError::Task(e.to_string())),
            };
            let _ = sender.send(Completion { operation, result }).await;
        });
    }
}
