use crate::types::stage::{Stage, StagePlan};
use tracing::info;

/// Countdown state machine for one darkroom run. Exactly one stage may be
/// counting down at a time; ticking is driven externally (the UI frame
/// clock, or a test loop), one call per elapsed second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTimer {
    plan: StagePlan,
    current: Option<Stage>,
    running: bool,
    seconds_remaining: u32,
    /// Duration the current stage was started with. The plan may be
    /// re-resolved while a countdown runs; the active stage keeps the
    /// duration snapshotted here.
    active_duration: u32,
    next_agitation: Option<u32>,
}

impl ProcessTimer {
    pub fn new(plan: StagePlan) -> Self {
        ProcessTimer {
            plan,
            current: None,
            running: false,
            seconds_remaining: 0,
            active_duration: 0,
            next_agitation: None,
        }
    }

    /// Replace the duration table. Takes effect at the next `start`; an
    /// active countdown keeps the durations it was started with.
    pub fn set_plan(&mut self, plan: StagePlan) {
        self.plan = plan;
    }

    pub fn current_stage(&self) -> Option<Stage> {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Seconds until the next agitation, while the current stage has an
    /// agitation cadence.
    pub fn next_agitation(&self) -> Option<u32> {
        self.next_agitation
    }

    /// Start (or restart) a stage's countdown. Returns false while another
    /// countdown is running; only one stage may be active at a time.
    /// Restarting a finished stage is an ordinary start. All countdown
    /// state is replaced in a single assignment so a stage switch can never
    /// leave the old stage's agitation countdown behind.
    pub fn start(&mut self, stage: Stage) -> bool {
        if self.running {
            return false;
        }
        let duration = self.plan.duration_of(stage);
        *self = ProcessTimer {
            plan: self.plan,
            current: Some(stage),
            running: true,
            seconds_remaining: duration,
            active_duration: duration,
            next_agitation: stage.agitation_interval(),
        };
        info!(
            stage = stage.name_en(),
            duration_seconds = duration,
            "stage started"
        );
        true
    }

    /// Advance the countdown by one second. A no-op unless running. When the
    /// stage reaches zero the timer stops on that stage; the next stage is
    /// never started automatically.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        let Some(stage) = self.current else {
            return;
        };
        if let (Some(interval), Some(next)) = (stage.agitation_interval(), self.next_agitation) {
            // Sawtooth: counts down to the agitation cue, then rearms.
            self.next_agitation = Some(if next <= 1 { interval } else { next - 1 });
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.running = false;
            info!(stage = stage.name_en(), "stage finished");
        }
    }

    /// Halt the countdown without clearing the stage.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            if let Some(stage) = self.current {
                info!(
                    stage = stage.name_en(),
                    seconds_remaining = self.seconds_remaining,
                    "stage stopped"
                );
            }
        }
    }

    /// Discard the session and return to idle.
    pub fn reset(&mut self) {
        *self = ProcessTimer::new(self.plan);
    }

    /// The duration a stage runs: the snapshot taken at `start` for the
    /// stage currently counting down, the plan's resolution otherwise.
    pub fn duration_of(&self, stage: Stage) -> u32 {
        if self.running && self.current == Some(stage) {
            self.active_duration
        } else {
            self.plan.duration_of(stage)
        }
    }

    /// Percentage of the stage elapsed, for the progress fill. Zero for any
    /// stage other than the one currently counting down. Measured against
    /// the started-with duration, so a plan change mid-run cannot push it
    /// outside 0..=100.
    pub fn progress_percent(&self, stage: Stage) -> f32 {
        if !self.running || self.current != Some(stage) {
            return 0.0;
        }
        if self.active_duration == 0 {
            return 0.0;
        }
        (self.active_duration - self.seconds_remaining) as f32 / self.active_duration as f32
            * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer() -> ProcessTimer {
        // Developer at 7 minutes, 18°C: 420 + 30 = 450 seconds
        ProcessTimer::new(StagePlan::new(450))
    }

    #[test]
    fn test_idle_until_started() {
        let t = timer();
        assert_eq!(t.current_stage(), None);
        assert!(!t.is_running());
        assert_eq!(t.seconds_remaining(), 0);
        assert_eq!(t.next_agitation(), None);
    }

    #[test]
    fn test_start_initializes_all_countdown_state() {
        let mut t = timer();
        assert!(t.start(Stage::Developer));
        assert_eq!(t.current_stage(), Some(Stage::Developer));
        assert!(t.is_running());
        assert_eq!(t.seconds_remaining(), 450);
        assert_eq!(t.next_agitation(), Some(30));
    }

    #[test]
    fn test_developer_runs_to_completion_and_stays_put() {
        let mut t = timer();
        t.start(Stage::Developer);
        for _ in 0..450 {
            t.tick();
        }
        assert_eq!(t.seconds_remaining(), 0);
        assert!(!t.is_running());
        assert_eq!(t.current_stage(), Some(Stage::Developer));

        // A further tick is a no-op
        let before = t.clone();
        t.tick();
        assert_eq!(t, before);
    }

    #[test]
    fn test_agitation_sawtooth_cycles_back_to_interval() {
        let mut t = timer();
        t.start(Stage::Developer);
        for expected in (1..30).rev() {
            t.tick();
            assert_eq!(t.next_agitation(), Some(expected));
        }
        // 30th tick: the cue fires and the countdown rearms
        t.tick();
        assert_eq!(t.next_agitation(), Some(30));
    }

    #[test]
    fn test_stage_without_agitation_has_no_countdown() {
        let mut t = timer();
        t.start(Stage::Wash);
        assert_eq!(t.next_agitation(), None);
        t.tick();
        assert_eq!(t.next_agitation(), None);
    }

    #[test]
    fn test_start_is_rejected_while_running() {
        let mut t = timer();
        assert!(t.start(Stage::PreSoak));
        t.tick();
        assert!(!t.start(Stage::Developer));
        assert_eq!(t.current_stage(), Some(Stage::PreSoak));
        assert_eq!(t.seconds_remaining(), 59);
    }

    #[test]
    fn test_switching_stages_replaces_agitation_state() {
        let mut t = timer();
        t.start(Stage::Developer);
        for _ in 0..10 {
            t.tick();
        }
        t.stop();
        assert!(t.start(Stage::Fixer));
        assert_eq!(t.seconds_remaining(), 300);
        assert_eq!(t.next_agitation(), Some(60));
    }

    #[test]
    fn test_restarting_a_finished_stage() {
        let mut t = timer();
        t.start(Stage::StopBath);
        for _ in 0..60 {
            t.tick();
        }
        assert!(!t.is_running());
        assert!(t.start(Stage::StopBath));
        assert!(t.is_running());
        assert_eq!(t.seconds_remaining(), 60);
    }

    #[test]
    fn test_progress_percent() {
        let mut t = timer();
        assert_eq!(t.progress_percent(Stage::Developer), 0.0);
        t.start(Stage::Developer);
        for _ in 0..225 {
            t.tick();
        }
        assert_eq!(t.progress_percent(Stage::Developer), 50.0);
        // Other stages report no progress while Developer runs
        assert_eq!(t.progress_percent(Stage::Fixer), 0.0);
    }

    #[test]
    fn test_plan_change_does_not_touch_active_countdown() {
        let mut t = timer();
        t.start(Stage::Developer);
        t.tick();
        t.set_plan(StagePlan::new(240));
        assert_eq!(t.seconds_remaining(), 449);
        // New plan applies at the next start
        t.stop();
        t.start(Stage::Developer);
        assert_eq!(t.seconds_remaining(), 240);
    }

    #[test]
    fn test_progress_stays_bounded_when_plan_shrinks_mid_run() {
        let mut t = timer();
        t.start(Stage::Developer);
        for _ in 0..10 {
            t.tick();
        }
        // Warmer bath re-resolves to a shorter Developer time mid-run
        t.set_plan(StagePlan::new(240));
        let progress = t.progress_percent(Stage::Developer);
        assert!((0.0..=100.0).contains(&progress));
        assert_eq!(progress, 10.0 / 450.0 * 100.0);
        // The running stage keeps the duration it was started with
        assert_eq!(t.duration_of(Stage::Developer), 450);
        // Once restarted, the new plan is in effect
        t.stop();
        t.start(Stage::Developer);
        assert_eq!(t.duration_of(Stage::Developer), 240);
        assert_eq!(t.progress_percent(Stage::Developer), 0.0);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut t = timer();
        t.start(Stage::Fixer);
        for _ in 0..5 {
            t.tick();
        }
        t.reset();
        assert_eq!(t.current_stage(), None);
        assert!(!t.is_running());
        assert_eq!(t.next_agitation(), None);
    }
}
