#[cfg(test)]
mod tests;

use std::time::Duration;

use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta};
use tokio::time::{interval, sleep};
use tracing::info;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Fires a task once per day at a fixed local wall-clock time.
///
/// Owned by the process entry point; the pipeline it triggers holds no
/// scheduling state of its own. Runs are serial: the task completes before
/// the loop goes back to waiting on the next tick.
pub struct DailySchedule {
    run_at: NaiveTime
}

impl DailySchedule {
    pub fn new(run_at: NaiveTime) -> Self {
        Self { run_at }
    }

    /// Delay from `now` until the next occurrence of the configured time.
    /// A `now` exactly on the boundary waits a full day.
    pub fn delay_until_next(&self, now: NaiveDateTime) -> Duration {
        let mut next = now.date().and_time(self.run_at);

        if next <= now {
            next = next + TimeDelta::days(1);
        }

        (next - now).to_std().unwrap_or(Duration::ZERO)
    }

    /// Waits until the configured time, then runs `task` every 24 hours at
    /// a fixed rate. Never returns.
    pub async fn run<F: FnMut()>(&self, mut task: F) {
        let initial = self.delay_until_next(Local::now().naive_local());

        info!("Next scheduled run in {}s", initial.as_secs());
        sleep(initial).await;

        let mut ticker = interval(Duration::from_secs(SECONDS_PER_DAY));

        loop {
            ticker.tick().await;
            task();
        }
    }
}
