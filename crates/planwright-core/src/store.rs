//! In-memory plan storage.
//!
//! Plans live for the lifetime of the process. The store owns id assignment:
//! `put` generates the id and inserts the plan under a single write lock, so
//! concurrent callers never observe or produce a duplicate id.

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use jiff::Timestamp;
use log::debug;
use uuid::Uuid;

use crate::{
    error::{PlannerError, Result},
    models::{Plan, PlanDraft, PlanSummary, Stats},
};

/// Length of generated plan ids.
pub const ID_LEN: usize = 8;

#[derive(Debug, Default)]
struct Inner {
    /// Plans in insertion order
    plans: Vec<Plan>,
    /// Plan id to position in `plans`
    index: HashMap<String, usize>,
}

/// Append-only, thread-safe plan store.
#[derive(Debug, Default)]
pub struct PlanStore {
    inner: RwLock<Inner>,
}

impl PlanStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a draft as a new plan under a fresh id, returning the stored copy.
    pub fn put(&self, draft: PlanDraft) -> Plan {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let id = loop {
            let candidate = generate_id();
            if !inner.index.contains_key(&candidate) {
                break candidate;
            }
            debug!("put: id {candidate} already taken, regenerating");
        };

        let plan = Plan::from_draft(id.clone(), Timestamp::now(), draft);
        let position = inner.plans.len();
        inner.plans.push(plan.clone());
        inner.index.insert(id, position);

        debug!("put: stored plan {} with {} tasks", plan.id, plan.total_tasks());
        plan
    }

    /// Fetch a copy of a stored plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` when no plan has this id.
    pub fn get(&self, id: &str) -> Result<Plan> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .index
            .get(id.trim())
            .and_then(|&position| inner.plans.get(position))
            .cloned()
            .ok_or_else(|| PlannerError::PlanNotFound { id: id.to_string() })
    }

    /// Summaries of all stored plans, oldest first.
    pub fn list(&self) -> Vec<PlanSummary> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.plans.iter().map(PlanSummary::from).collect()
    }

    /// Number of stored plans.
    pub fn count(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .plans
            .len()
    }

    /// Plan and task counts across the store.
    pub fn stats(&self) -> Stats {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Stats {
            total_plans: inner.plans.len(),
            total_tasks: inner.plans.iter().map(Plan::total_tasks).sum(),
        }
    }
}

/// Short id: the first eight hex digits of a random v4 UUID.
fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()[..ID_LEN].to_string()
}
