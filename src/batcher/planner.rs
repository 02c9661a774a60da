// planner.rs - splits a requested total into upstream-sized pieces
use serde::{Deserialize, Serialize};

/// Largest item count one upstream call is trusted to produce
pub const DEFAULT_CEILING: u32 = 100;

/// One upstream call's share of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRequest {
    pub count: u32,
}

pub struct Batcher {
    pub ceiling: u32,
}

impl Batcher {
    /// A ceiling of zero is treated as one.
    pub fn new(ceiling: u32) -> Self {
        Self {
            ceiling: ceiling.max(1),
        }
    }

    /// Greedy fill: full-ceiling pieces first, then the remainder if any.
    pub fn plan(&self, total: u32) -> Vec<SubRequest> {
        let full = total / self.ceiling;
        let remainder = total % self.ceiling;

        let mut plan: Vec<SubRequest> = (0..full)
            .map(|_| SubRequest {
                count: self.ceiling,
            })
            .collect();
        if remainder > 0 {
            plan.push(SubRequest { count: remainder });
        }
        plan
    }

    pub fn counts(&self, total: u32) -> Vec<u32> {
        self.plan(total).into_iter().map(|s| s.count).collect()
    }
}

impl Default for Batcher {
    fn default() -> Self {
        Self::new(DEFAULT_CEILING)
    }
}
