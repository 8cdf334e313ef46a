use crate::application::ports::time::Clock;
use crate::domain::article::to_store_precision;
use chrono::{DateTime, Utc};

/// Wall clock, truncated to the precision the stores persist so that a
/// stamped value reads back unchanged.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        to_store_precision(Utc::now())
    }
}
