//! Player module - name and cumulative counters
//!
//! Both counters only ever grow within a session; a new session replaces the
//! player wholesale.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Player {
    name: String,
    score: u32,
    lines_cleared: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            lines_cleared: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Add a landing's points (saturating)
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Add cleared lines; returns true if the count changed
    pub fn add_lines(&mut self, lines: u32) -> bool {
        self.lines_cleared = self.lines_cleared.saturating_add(lines);
        lines > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_at_zero() {
        let p = Player::new("ada");
        assert_eq!(p.name(), "ada");
        assert_eq!(p.score(), 0);
        assert_eq!(p.lines_cleared(), 0);
    }

    #[test]
    fn test_counters_accumulate() {
        let mut p = Player::new("ada");
        p.add_score(40);
        p.add_score(100);
        assert!(p.add_lines(1));
        assert!(!p.add_lines(0));
        assert!(p.add_lines(2));
        assert_eq!(p.score(), 140);
        assert_eq!(p.lines_cleared(), 3);
    }

    #[test]
    fn test_score_saturates() {
        let mut p = Player::new("ada");
        p.add_score(u32::MAX);
        p.add_score(10);
        assert_eq!(p.score(), u32::MAX);
    }
}
