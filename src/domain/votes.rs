// src/domain/votes.rs

/// Signed adjustment applied to a votes counter by the store in a single
/// `votes = votes + delta` statement. Counters may go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteDelta(i32);

impl VoteDelta {
    pub fn new(delta: i32) -> Self {
        Self(delta)
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<VoteDelta> for i32 {
    fn from(value: VoteDelta) -> Self {
        value.0
    }
}
