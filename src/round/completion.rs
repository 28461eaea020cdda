//! Single-shot round completion.

use tokio::sync::oneshot;

use crate::core::EngineError;

use super::event::RoundSummary;

/// Resolves once, when the round it came from ends.
///
/// There is no cancellation: the only way to resolve it is to end the
/// round. Dropping the round before that turns the wait into
/// `EngineError::CompletionDropped`.
#[derive(Debug)]
pub struct RoundCompletion {
    round: u32,
    receiver: oneshot::Receiver<RoundSummary>,
}

impl RoundCompletion {
    pub(crate) fn channel(round: u32) -> (oneshot::Sender<RoundSummary>, Self) {
        let (sender, receiver) = oneshot::channel();
        (sender, Self { round, receiver })
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Wait for the round to end.
    pub async fn wait(self) -> Result<RoundSummary, EngineError> {
        let round = self.round;
        self.receiver
            .await
            .map_err(|_| EngineError::CompletionDropped { round })
    }

    /// The summary if the round has already ended.
    pub fn try_take(&mut self) -> Option<RoundSummary> {
        self.receiver.try_recv().ok()
    }
}
