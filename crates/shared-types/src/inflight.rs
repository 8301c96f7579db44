/// Handle for one triggered request. Only the newest ticket is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tracks a single logical in-flight request with a loading flag.
///
/// A new trigger supersedes the previous one rather than queueing behind it:
/// when an older request completes after a newer one was started, its result
/// is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InFlight {
    generation: u64,
    loading: bool,
}

impl InFlight {
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.loading = true;
        Ticket(self.generation)
    }

    /// Report completion. Returns `true` when the result should be applied.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
