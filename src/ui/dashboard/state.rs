//! Dashboard state management
//!
//! The menu view-model: every piece of state the dashboard renders, mutated
//! only through the transitions below.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::food::FoodItem;

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Menu items in server order; created items are appended.
    pub foods: Vec<FoodItem>,
    /// Item targeted by the edit modal, if any has been picked yet.
    pub editing_food: Option<FoodItem>,
    /// Whether the add modal is visible.
    pub modal_open: bool,
    /// Whether the edit modal is visible.
    pub edit_modal_open: bool,
    /// Cursor into `foods`
    pub selected: usize,
    /// Activity logs for display (bounded)
    pub activity_logs: VecDeque<Event>,
    /// Base URL of the menu API, shown in the header
    pub api_url: String,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Requests sent but not yet reconciled
    pub pending_requests: usize,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    pub fn new(api_url: String, with_background_color: bool) -> Self {
        Self {
            foods: Vec::new(),
            editing_food: None,
            modal_open: false,
            edit_modal_open: false,
            selected: 0,
            activity_logs: VecDeque::new(),
            api_url,
            with_background_color,
            pending_requests: 0,
            tick: 0,
        }
    }

    /// Replace the whole collection with a freshly loaded one.
    pub fn set_foods(&mut self, foods: Vec<FoodItem>) {
        self.foods = foods;
        self.clamp_selection();
    }

    pub fn append_food(&mut self, food: FoodItem) {
        self.foods.push(food);
    }

    /// Swap the item with `id` for `food`, keeping its position.
    /// Returns false when no item matched.
    pub fn replace_food(&mut self, id: u64, food: FoodItem) -> bool {
        match self.foods.iter_mut().find(|f| f.id == id) {
            Some(slot) => {
                *slot = food;
                true
            }
            None => false,
        }
    }

    /// Drop every item with `id`. Returns false when nothing was removed.
    pub fn remove_food(&mut self, id: u64) -> bool {
        let before = self.foods.len();
        self.foods.retain(|f| f.id != id);
        self.clamp_selection();
        self.foods.len() != before
    }

    /// Select `food` for editing and show the edit modal.
    pub fn begin_edit(&mut self, food: FoodItem) {
        self.edit_modal_open = true;
        self.editing_food = Some(food);
    }

    pub fn toggle_modal(&mut self) {
        self.modal_open = !self.modal_open;
    }

    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
    }

    /// True while either modal is showing; key input then goes to the form.
    pub fn any_modal_open(&self) -> bool {
        self.modal_open || self.edit_modal_open
    }

    pub fn selected_food(&self) -> Option<&FoodItem> {
        self.foods.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.foods.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.foods.len().saturating_sub(1));
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}
