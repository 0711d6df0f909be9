use crate::error::{Error, Result};

/// Frame divider: fires once every `hit` ticks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Counter {
    hit: u32,
    current: u64,
}

impl Counter {
    pub fn new(hit: u32) -> Result<Counter> {
        if hit == 0 {
            return Err(Error::ZeroTickRate);
        }
        Ok(Counter { hit, current: 0 })
    }

    /// Counts one frame and reports whether this frame is a multiple of `hit`.
    pub fn tick(&mut self) -> bool {
        self.current += 1;
        self.current % u64::from(self.hit) == 0
    }

    pub fn hit(&self) -> u32 {
        self.hit
    }
}
