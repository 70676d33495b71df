use tracing::{debug, warn};

use crate::analysis::AnalysisResponse;
use crate::error::AnalyzeError;

/// Handle for one in-flight analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Held analysis response plus the busy and error flags of the dashboard.
///
/// Only the most recently issued [`Ticket`] may complete a request, so a slow
/// earlier response can never overwrite a newer one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisSession {
    response: Option<AnalysisResponse>,
    busy: bool,
    error: Option<String>,
    generation: u64,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn response(&self) -> Option<&AnalysisResponse> {
        self.response.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a submission. Returns `None` while another request is in flight.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.busy {
            debug!(generation = self.generation, "submission refused while busy");
            return None;
        }
        self.generation += 1;
        self.busy = true;
        self.error = None;
        debug!(generation = self.generation, "analysis request started");
        Some(Ticket {
            generation: self.generation,
        })
    }

    /// Complete a submission. Returns `false` when the ticket is stale and
    /// the outcome was dropped.
    pub fn finish(
        &mut self,
        ticket: Ticket,
        outcome: Result<AnalysisResponse, AnalyzeError>,
    ) -> bool {
        if ticket.generation != self.generation || !self.busy {
            warn!(
                ticket = ticket.generation,
                current = self.generation,
                "dropping stale analysis outcome"
            );
            return false;
        }
        self.busy = false;
        match outcome {
            Ok(response) => {
                debug!(symbols = response.len(), "analysis response stored");
                self.response = Some(response);
                self.error = None;
            }
            Err(err) => {
                debug!(error = %err, "analysis request failed");
                self.response = None;
                self.error = Some(err.to_string());
            }
        }
        true
    }
}
