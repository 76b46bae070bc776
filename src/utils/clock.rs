use std::cell::Cell;
use std::rc::Rc;

/// Reloj de pared en segundos desde epoch
pub trait Clock {
    fn now_secs(&self) -> i64;
}

/// Reloj real (`Date.now()` en wasm a través de chrono)
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Reloj manual para tests
#[derive(Clone, Debug, Default)]
pub struct FixedClock {
    now: Rc<Cell<i64>>,
}

impl FixedClock {
    pub fn at(now_secs: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(now_secs)),
        }
    }

    pub fn advance(&self, secs: i64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for FixedClock {
    fn now_secs(&self) -> i64 {
        self.now.get()
    }
}
