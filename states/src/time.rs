use chrono::{DateTime, Duration, Utc};

/// The clock every render reads "now" from.
///
/// Rendering never calls `Utc::now()` directly. The host ticks this state once
/// per frame, and tests pin it with [`Time::fixed`] so relative durations are
/// deterministic.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    virt: DateTime<Utc>,
    manual: bool,
}

impl Default for Time {
    fn default() -> Self {
        Self {
            virt: Utc::now(),
            manual: false,
        }
    }
}

impl Time {
    /// A clock frozen at `at`. [`Time::tick`] leaves it untouched.
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self {
            virt: at,
            manual: true,
        }
    }

    /// Follow the wall clock, unless the clock was frozen.
    pub fn tick(&mut self) {
        if !self.manual {
            self.virt = Utc::now();
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.virt += by;
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.virt
    }
}
