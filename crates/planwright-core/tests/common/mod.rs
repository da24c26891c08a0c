#![allow(dead_code)]

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use planwright_core::{CompletionClient, LlmError, Planner, PlannerBuilder, Prompt};

/// What the scripted client does on every call.
pub enum Script {
    Reply(String),
    Timeout,
}

/// Completion client that answers every prompt the same way.
pub struct ScriptedClient {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedClient {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            script: Script::Reply(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn timing_out() -> Arc<Self> {
        Arc::new(Self {
            script: Script::Timeout,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, _prompt: &Prompt) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Timeout => Err(LlmError::Timeout(Duration::from_secs(60))),
        }
    }
}

/// Helper function to create a planner backed by a scripted client
pub fn create_test_planner(client: Arc<ScriptedClient>) -> Planner {
    PlannerBuilder::new()
        .with_client(client)
        .build()
        .expect("Failed to create planner")
}

/// A reply in the requested layout for the food delivery scenario.
pub const FOOD_DELIVERY_REPLY: &str = "\
TASK 1: Market research
Description: Identify target neighborhoods and competing apps
Duration: 2 days
Dependencies: None
Priority: High
Risks:
- Competitor data is incomplete
Deliverables:
- Market summary
END TASK

TASK 2: Restaurant partnerships
Description: Sign the first ten partner restaurants
Duration: 4 days
Dependencies: 1
Priority: High
Risks:
- Restaurants may demand low commission
Deliverables:
- Signed agreements
END TASK

TASK 3: App MVP
Description: Ordering, payment and tracking screens
Duration: 1 week
Dependencies: 1, 7
Risks:
- App store review delays
Deliverables:
- Installable beta build
END TASK

TASK 4: Launch campaign
Description: Promote the launch in the pilot area
Duration: 2-3 days
Dependencies: 2, 3
Priority: Low
Deliverables:
- Campaign assets
END TASK

OVERALL RISKS: Two weeks leaves no slack for payment provider onboarding.
";
