//! Famicore: a cycle-accurate NES (Famicom) CPU emulator written in Rust.
//!
//! Implements the Ricoh 2A03 as documented on the
//! [NESdev Wiki](https://www.nesdev.org/wiki/NES_reference_guide), with the
//! video/audio subsystems stubbed at their timing interface.
//!
//! ## Modules
//!
//! - **apu** – cycle-counting stub for the [APU](https://www.nesdev.org/wiki/APU)
//! - **bus** – [CPU memory map](https://www.nesdev.org/wiki/CPU_memory_map): mirrored RAM,
//!   PRG pass-through, per-cycle sync to the subsystems
//! - **cartridge** – [iNES](https://www.nesdev.org/wiki/INES) container parsing, NROM-style PRG reads
//! - **cpu** – [6502](https://www.nesdev.org/wiki/CPU) / 2A03: full + undocumented opcodes,
//!   one bus sync per cycle, data-driven dispatch
//! - **ppu** – dot-counting stub for the [PPU](https://www.nesdev.org/wiki/PPU)

pub mod apu;
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod ppu;
