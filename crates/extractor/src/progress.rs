use std::collections::VecDeque;
use std::time::{Duration, Instant};


#[derive(Clone, Debug)]
struct ProgressUnit {
    value: u64,
    time: Instant,
}


/// Block rate over a sliding window of samples.
pub struct Progress {
    window: VecDeque<ProgressUnit>,
    window_size: usize,
    granularity: Duration,
    report_interval: Duration,
    last_report: Instant,
}


impl Progress {
    pub fn new(window_size: usize, granularity: Duration, report_interval: Duration) -> Self {
        assert!(window_size > 0);
        Self {
            window: VecDeque::with_capacity(window_size + 1),
            window_size: window_size + 1,
            granularity,
            report_interval,
            last_report: Instant::now(),
        }
    }

    pub fn set_current_value(&mut self, value: u64) {
        self.push(value, Instant::now())
    }

    fn push(&mut self, value: u64, time: Instant) {
        if let Some(last) = self.window.back_mut() {
            let value = value.max(last.value);
            if time <= last.time + self.granularity {
                last.value = value;
                return;
            }
            self.window.push_back(ProgressUnit { value, time });
        } else {
            self.window.push_back(ProgressUnit { value, time });
        }
        if self.window.len() > self.window_size {
            self.window.pop_front();
        }
    }

    /// Items per second between the oldest and the newest sample.
    pub fn speed(&self) -> f64 {
        let (Some(beg), Some(end)) = (self.window.front(), self.window.back()) else {
            return 0.0
        };
        let duration = end.time.duration_since(beg.time).as_secs_f64();
        if duration == 0.0 {
            return 0.0
        }
        (end.value - beg.value) as f64 / duration
    }

    /// Returns `true` once per report interval.
    pub fn should_report(&mut self) -> bool {
        if self.last_report.elapsed() >= self.report_interval {
            self.last_report = Instant::now();
            true
        } else {
            false
        }
    }
}
