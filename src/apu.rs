//! APU stub.
//!
//! Audio synthesis is out of scope for now; the stub counts elapsed CPU
//! cycles so frame-counter timing can be built on top later.

pub struct APU {
    pub cycles: u64,
}

impl APU {
    pub fn new() -> Self {
        Self { cycles: 0 }
    }

    pub fn tick(&mut self) {
        self.cycles += 1;
    }
}
