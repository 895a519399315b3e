/// Score awarded per simultaneous row clear, before the level multiplier.
///
/// Index is the number of rows cleared in one lock; a tetromino can clear
/// at most 4 rows at once.
const SCORE_TABLE: [u32; 5] = [0, 40, 100, 300, 1200];

/// Cleared lines needed per level step.
const LINES_PER_LEVEL: u32 = 10;

/// Score, line, and level tracking for one game.
///
/// Score and line counters are monotonically non-decreasing. The level
/// starts at 1, steps every [`LINES_PER_LEVEL`] cleared lines, and drives
/// both the fall speed and the per-clear score multiplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: u32,
    cleared_lines: u32,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            cleared_lines: 0,
        }
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn cleared_lines(&self) -> u32 {
        self.cleared_lines
    }

    #[must_use]
    pub const fn level(&self) -> u32 {
        self.cleared_lines / LINES_PER_LEVEL + 1
    }

    /// Records a lock that cleared `rows` rows (0 to 4), scoring at the
    /// level in effect before those rows are counted.
    pub fn record_clear(&mut self, rows: usize) {
        let per_level = SCORE_TABLE.get(rows).copied().unwrap_or(0);
        self.score += per_level * self.level();
        self.cleared_lines += u32::try_from(rows).unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_at_level_one() {
        let stats = GameStats::new();
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.cleared_lines(), 0);
        assert_eq!(stats.level(), 1);
    }

    #[test]
    fn zero_clears_add_nothing() {
        let mut stats = GameStats::new();
        stats.record_clear(0);
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.cleared_lines(), 0);
    }

    #[test]
    fn single_clear_scores_forty_at_level_one() {
        let mut stats = GameStats::new();
        stats.record_clear(1);
        assert_eq!(stats.score(), 40);
        assert_eq!(stats.cleared_lines(), 1);
    }

    #[test]
    fn double_clear_at_level_three_adds_three_hundred() {
        let mut stats = GameStats::new();
        // Ten doubles reach 20 lines, which is level 3.
        for _ in 0..10 {
            stats.record_clear(2);
        }
        assert_eq!(stats.level(), 3);

        let before = stats.score();
        stats.record_clear(2);
        assert_eq!(stats.score() - before, 300);
    }

    #[test]
    fn tetris_scores_twelve_hundred_per_level() {
        let mut stats = GameStats::new();
        stats.record_clear(4);
        assert_eq!(stats.score(), 1200);
        assert_eq!(stats.cleared_lines(), 4);
    }

    #[test]
    fn level_steps_every_ten_lines() {
        let mut stats = GameStats::new();
        for _ in 0..9 {
            stats.record_clear(1);
        }
        assert_eq!(stats.level(), 1);
        stats.record_clear(1);
        assert_eq!(stats.level(), 2);
    }
}
