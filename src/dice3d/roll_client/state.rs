//! Roll client state
//!
//! Request/response types, the [`RollClient`] resource that owns the worker
//! queue, and the [`RollDisplay`] resource the result panel is drawn from.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use bevy::log::{debug, warn};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dice3d::types::DiceType;

use super::service::RollService;

/// One roll as sent to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollRequest {
    pub die_type: DiceType,
    pub info: String,
}

impl RollRequest {
    pub fn new(die_type: DiceType, info: impl Into<String>) -> Self {
        Self {
            die_type,
            info: info.into(),
        }
    }
}

/// JSON body returned by the roll endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResponse {
    pub roll_result: u32,
    pub die_type: String,
    #[serde(default)]
    pub info: String,
}

/// A finished roll, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    pub value: u32,
    pub die_type: DiceType,
    /// `None` when the roll carried no note
    pub info: Option<String>,
}

impl RollResult {
    /// Build from a server response. The die type the server names wins; an
    /// unknown token falls back to the one that was requested.
    pub fn from_response(response: RollResponse, request: &RollRequest) -> Self {
        let die_type = DiceType::parse(&response.die_type).unwrap_or(request.die_type);
        let info = Some(response.info).filter(|s| !s.is_empty());
        Self {
            value: response.roll_result,
            die_type,
            info,
        }
    }
}

/// Finished request from a worker thread
#[derive(Debug, Clone)]
pub struct RollOutcome {
    pub generation: u64,
    pub request: RollRequest,
    pub result: Result<RollResult, String>,
}

/// Resource that issues roll requests and collects their outcomes.
#[derive(Resource)]
pub struct RollClient {
    service: Arc<dyn RollService>,
    /// Outcomes pushed by worker threads, drained each frame
    completed: Arc<Mutex<Vec<RollOutcome>>>,
    /// Generation of the most recent request; older outcomes are stale
    generation: u64,
    in_flight: usize,
    last_request: Option<RollRequest>,
}

impl RollClient {
    pub fn new(service: Arc<dyn RollService>) -> Self {
        Self {
            service,
            completed: Arc::new(Mutex::new(Vec::new())),
            generation: 0,
            in_flight: 0,
            last_request: None,
        }
    }

    /// Send a request on a background thread. Returns its generation.
    pub fn send(&mut self, request: RollRequest) -> u64 {
        self.generation += 1;
        self.in_flight += 1;
        self.last_request = Some(request.clone());

        let generation = self.generation;
        let service = Arc::clone(&self.service);
        let completed = Arc::clone(&self.completed);

        debug!(
            "Roll #{} ({}) -> {}",
            generation,
            request.die_type,
            service.describe()
        );

        thread::spawn(move || {
            // A panicking service still reports back, as a failed roll
            let result = panic::catch_unwind(AssertUnwindSafe(|| service.roll(&request)))
                .unwrap_or_else(|_| {
                    warn!("Roll #{} worker panicked", generation);
                    Err("roll worker panicked".to_string())
                })
                .map(|response| RollResult::from_response(response, &request));

            let mut lock = completed.lock().unwrap_or_else(|poisoned| {
                warn!("Roll queue lock was poisoned; recovering for roll #{}", generation);
                poisoned.into_inner()
            });
            lock.push(RollOutcome {
                generation,
                request,
                result,
            });
        });

        generation
    }

    /// Re-send the last request, if there was one.
    pub fn retry(&mut self) -> Option<u64> {
        let request = self.last_request.clone()?;
        Some(self.send(request))
    }

    /// Take every outcome that has arrived since the last call.
    pub fn drain(&mut self) -> Vec<RollOutcome> {
        let mut lock = self
            .completed
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let outcomes = std::mem::take(&mut *lock);
        drop(lock);
        self.in_flight = self.in_flight.saturating_sub(outcomes.len());
        outcomes
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn latest_generation(&self) -> u64 {
        self.generation
    }

    /// Requests sent whose outcome has not been drained yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn last_request(&self) -> Option<&RollRequest> {
        self.last_request.as_ref()
    }

    pub fn service_name(&self) -> String {
        self.service.describe()
    }
}

/// What the result panel currently shows.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct RollDisplay {
    pub visible: bool,
    pub value_text: String,
    pub die_text: String,
    pub info_text: String,
    pub error_text: String,
    pub can_retry: bool,
}

impl RollDisplay {
    pub fn show(&mut self, result: &RollResult) {
        self.visible = true;
        self.value_text = format!("Roll Result: {}", result.value);
        self.die_text = format!("on a {}", result.die_type);
        self.info_text = result
            .info
            .as_ref()
            .map(|info| format!("Info: {}", info))
            .unwrap_or_default();
        self.error_text.clear();
        self.can_retry = false;
    }

    pub fn fail(&mut self, error: &str) {
        self.visible = true;
        self.value_text.clear();
        self.die_text.clear();
        self.info_text.clear();
        self.error_text = format!("Roll failed: {}", error);
        self.can_retry = true;
    }

    pub fn hide(&mut self) {
        *self = Self::default();
    }
}
