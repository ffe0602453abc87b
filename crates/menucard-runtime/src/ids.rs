use chrono::Utc;
use menucard_types::DishId;

/// Hands out dish ids from the wall clock
///
/// Ids are the current time in epoch milliseconds. When two ids are requested
/// within the same millisecond, or the clock steps backwards, the next id is
/// bumped to one past the previous so ids stay strictly increasing.
#[derive(Debug, Default)]
pub struct DishIdGenerator {
    last: Option<u64>,
}

impl DishIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> DishId {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }

    /// Allocate an id as if the clock read `now_millis`
    pub fn next_at(&mut self, now_millis: u64) -> DishId {
        let raw = match self.last {
            Some(last) if now_millis <= last => last.saturating_add(1),
            _ => now_millis,
        };
        self.last = Some(raw);
        DishId::new(raw)
    }
}
