/// Observer notified once per `trace` call with the recursion budget left.
pub trait TraceStats {
    fn record(&mut self, depth: u32);
    fn merge(&mut self, another: &Self);
}

impl TraceStats for () {
    fn record(&mut self, _depth: u32) {}
    fn merge(&mut self, _another: &Self) {}
}

/// Total number of trace calls.
impl TraceStats for usize {
    fn record(&mut self, _depth: u32) {
        *self += 1;
    }

    fn merge(&mut self, another: &Self) {
        *self += *another
    }
}

/// Calls per recursion level; index 0 counts primary rays.
///
/// Levels are relative to the budget of the first recorded call, so tracing
/// from depth `d` yields at most `d + 1` entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelCounts {
    initial_depth: Option<u32>,
    counts: Vec<usize>,
}

impl LevelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts[..]
    }
}

impl TraceStats for LevelCounts {
    fn record(&mut self, depth: u32) {
        let initial = *self.initial_depth.get_or_insert(depth);
        let level = initial.saturating_sub(depth) as usize;
        if level >= self.counts.len() {
            self.counts.resize(level + 1, 0);
        }
        self.counts[level] += 1;
    }

    fn merge(&mut self, another: &Self) {
        if another.counts.len() > self.counts.len() {
            self.counts.resize(another.counts.len(), 0);
        }
        for (mine, theirs) in self.counts.iter_mut().zip(another.counts.iter()) {
            *mine += *theirs;
        }
        if self.initial_depth.is_none() {
            self.initial_depth = another.initial_depth;
        }
    }
}

impl<U, V> TraceStats for (U, V)
where
    U: TraceStats,
    V: TraceStats,
{
    fn record(&mut self, depth: u32) {
        self.0.record(depth);
        self.1.record(depth);
    }

    fn merge(&mut self, another: &Self) {
        self.0.merge(&another.0);
        self.1.merge(&another.1);
    }
}

#[test]
fn test_level_counts() {
    let mut stats = (0usize, LevelCounts::new());
    for depth in [3, 2, 1, 3, 2] {
        stats.record(depth);
    }
    assert_eq!(stats.0, 5);
    assert_eq!(stats.1.counts(), &[2, 2, 1]);

    let mut other = LevelCounts::new();
    other.record(3);
    other.record(2);
    other.record(1);
    other.record(0);
    stats.1.merge(&other);
    assert_eq!(stats.1.counts(), &[3, 3, 2, 1]);
}
