//! Dashboard state update logic
//!
//! Reconciles finished requests into the dashboard state.

use super::handlers::{Completion, Mutation};
use super::state::DashboardState;

use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, Operation};
use crate::logging;

impl DashboardState {
    /// Advance the animation tick.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Apply a finished request. Failures never touch the collection; they
    /// only produce an error event.
    pub fn apply_completion(&mut self, completion: Completion) {
        self.pending_requests = self.pending_requests.saturating_sub(1);

        let event = match completion.result {
            Ok(mutation) => self.apply_mutation(completion.operation, mutation),
            Err(error) => {
                let level = ErrorClassifier::new().classify_api_error(&error);
                Event::error(
                    completion.operation,
                    format!("{} failed: {}", describe(completion.operation), error),
                    level,
                )
            }
        };

        logging::record(&event);
        self.add_to_activity_log(event);
    }

    fn apply_mutation(&mut self, operation: Operation, mutation: Mutation) -> Event {
        let msg = match mutation {
            Mutation::Loaded(foods) => {
                let count = foods.len();
                self.set_foods(foods);
                format!("Loaded {} dishes", count)
            }
            Mutation::Created(food) => {
                let msg = format!("Added {} (#{})", food.name, food.id);
                self.append_food(food);
                msg
            }
            Mutation::Updated { id, food } => {
                let msg = match operation {
                    Operation::Availability if food.available => {
                        format!("{} is now available", food.name)
                    }
                    Operation::Availability => format!("{} is now unavailable", food.name),
                    _ => format!("Updated {}", food.name),
                };
                if self.replace_food(id, food) {
                    msg
                } else {
                    format!("{} (no longer listed)", msg)
                }
            }
            Mutation::Deleted(id) => {
                self.remove_food(id);
                format!("Removed dish #{}", id)
            }
        };
        Event::success(operation, msg)
    }
}

fn describe(operation: Operation) -> &'static str {
    match operation {
        Operation::Load => "Loading the menu",
        Operation::Create => "Adding the dish",
        Operation::Update => "Saving the dish",
        Operation::Delete => "Removing the dish",
        Operation::Availability => "Changing availability",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::events::EventType;
    use crate::food::FoodItem;

    fn food(id: u64, name: &str) -> FoodItem {
        FoodItem {
            id,
            name: name.to_string(),
            image: "x".to_string(),
            price: "1.00".to_string(),
            description: String::new(),
            available: true,
        }
    }

    fn completed(operation: Operation, mutation: Mutation) -> Completion {
        Completion {
            operation,
            result: Ok(mutation),
        }
    }

    fn state(pending: usize) -> DashboardState {
        let mut state = DashboardState::new(String::new(), false);
        state.pending_requests = pending;
        state
    }

    #[test]
    fn test_completions_apply_in_arrival_order() {
        // Delete issued after an update, but the update lands last.
        let mut state = state(2);
        state.set_foods(vec![food(1, "Pizza"), food(2, "Pasta")]);

        state.apply_completion(completed(Operation::Delete, Mutation::Deleted(1)));
        state.apply_completion(completed(
            Operation::Update,
            Mutation::Updated {
                id: 1,
                food: food(1, "Calzone"),
            },
        ));

        assert_eq!(state.foods, vec![food(2, "Pasta")]);
        assert_eq!(state.pending_requests, 0);
        assert!(state.activity_logs.back().unwrap().msg.contains("no longer listed"));
    }

    #[test]
    fn test_error_completion_only_logs() {
        let mut state = state(1);
        state.set_foods(vec![food(1, "Pizza")]);

        state.apply_completion(Completion {
            operation: Operation::Delete,
            result: Err(ApiError::Http {
                status: 503,
                message: "down".to_string(),
            }),
        });

        assert_eq!(state.foods, vec![food(1, "Pizza")]);
        let event = state.activity_logs.back().unwrap();
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.msg, "Removing the dish failed: HTTP error with status 503: down");
    }

    #[test]
    fn test_availability_message() {
        let mut state = state(1);
        state.set_foods(vec![food(1, "Pizza")]);
        let mut off = food(1, "Pizza");
        off.available = false;

        state.apply_completion(completed(
            Operation::Availability,
            Mutation::Updated { id: 1, food: off },
        ));

        assert!(!state.foods[0].available);
        assert_eq!(state.activity_logs.back().unwrap().msg, "Pizza is now unavailable");
    }

    #[test]
    fn test_load_replaces_collection() {
        let mut state = state(1);
        state.set_foods(vec![food(9, "Old")]);
        state.apply_completion(completed(
            Operation::Load,
            Mutation::Loaded(vec![food(1, "A"), food(2, "B")]),
        ));
        assert_eq!(state.foods, vec![food(1, "A"), food(2, "B")]);
        assert_eq!(state.activity_logs.back().unwrap().msg, "Loaded 2 dishes");
    }

    #[test]
    fn test_update_ticks() {
        let mut state = state(0);
        state.update();
        state.update();
        assert_eq!(state.tick, 2);
    }
}
