//! PPU stub.
//!
//! Rendering is out of scope for now; the stub only advances its dot clock
//! (3 PPU dots per CPU cycle, NTSC) so bus timing stays honest until the
//! real 2C02 lands.

pub struct PPU {
    pub dots: u64,
}

impl PPU {
    pub fn new() -> Self {
        Self { dots: 0 }
    }

    /// Advance one CPU cycle's worth of PPU time.
    pub fn tick(&mut self) {
        self.dots += 3;
    }
}
