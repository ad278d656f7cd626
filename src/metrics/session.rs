use std::time::{Duration, Instant};

/// Per-process statistics shown alongside the board. Nothing is persisted.
pub struct SessionStats {
    run_started: Instant,
    pub elapsed: Duration,
    pub runs_finished: u32,
    pub best_score: u32,
    /// The run that just ended beat every earlier run this session
    pub new_best: bool,
    run_over: bool,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            run_started: Instant::now(),
            elapsed: Duration::ZERO,
            runs_finished: 0,
            best_score: 0,
            new_best: false,
            run_over: false,
        }
    }

    /// Refresh the run clock; it stops once the run has ended
    pub fn update(&mut self) {
        if !self.run_over {
            self.elapsed = self.run_started.elapsed();
        }
    }

    /// Record the final score of a run. Repeated calls for the same run are ignored.
    pub fn on_run_over(&mut self, final_score: u32) {
        if self.run_over {
            return;
        }
        self.run_over = true;
        self.runs_finished += 1;
        self.new_best = final_score > self.best_score;
        self.best_score = self.best_score.max(final_score);
    }

    pub fn on_run_start(&mut self) {
        self.run_started = Instant::now();
        self.elapsed = Duration::ZERO;
        self.run_over = false;
        self.new_best = false;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new();
        stats.elapsed = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.elapsed = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }

    #[test]
    fn test_best_score_tracking() {
        let mut stats = SessionStats::new();

        stats.on_run_over(10);
        assert!(stats.new_best);
        stats.on_run_start();
        assert!(!stats.new_best);
        stats.on_run_over(5);
        assert_eq!(stats.best_score, 10);
        assert!(!stats.new_best);
        assert_eq!(stats.runs_finished, 2);
    }

    #[test]
    fn test_zero_score_and_ties_are_not_new_best() {
        let mut stats = SessionStats::new();
        stats.on_run_over(0);
        assert!(!stats.new_best);

        stats.on_run_start();
        stats.on_run_over(4);
        assert!(stats.new_best);

        stats.on_run_start();
        stats.on_run_over(4);
        assert!(!stats.new_best);
    }

    #[test]
    fn test_run_counted_once() {
        let mut stats = SessionStats::new();
        stats.on_run_over(3);
        stats.on_run_over(3);
        assert_eq!(stats.runs_finished, 1);
    }

    #[test]
    fn test_clock_stops_after_run_over() {
        let mut stats = SessionStats::new();
        stats.on_run_over(0);
        std::thread::sleep(Duration::from_millis(20));
        stats.update();
        assert_eq!(stats.elapsed, Duration::ZERO);
    }
}
