/// Milliseconds since the Unix epoch.
pub fn epoch_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generates `<prefix><epoch-ms>` identifiers (`p1718000000000`, `w1718...`).
///
/// Two ids requested within the same millisecond would collide, so the
/// generator bumps the stamp past the last one it handed out.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id using the current wall clock.
    pub fn next(&mut self, prefix: &str) -> String {
        self.next_at(prefix, epoch_millis())
    }

    /// Next id for a given clock reading. Always strictly increasing.
    pub fn next_at(&mut self, prefix: &str, millis: i64) -> String {
        let stamp = if millis > self.last {
            millis
        } else {
            self.last + 1
        };
        self.last = stamp;
        format!("{prefix}{stamp}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_uses_prefix_and_stamp() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at("p", 1000), "p1000");
        assert_eq!(ids.next_at("w", 2000), "w2000");
    }

    #[test]
    fn generator_never_repeats_within_same_millisecond() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at("p", 5000);
        let b = ids.next_at("p", 5000);
        let c = ids.next_at("p", 4000);
        assert_eq!(a, "p5000");
        assert_eq!(b, "p5001");
        assert_eq!(c, "p5002");
    }

    #[test]
    fn generator_wall_clock_ids_are_distinct() {
        let mut ids = IdGenerator::new();
        let a = ids.next("p");
        let b = ids.next("p");
        assert!(a.starts_with('p'));
        assert_ne!(a, b);
    }
}
