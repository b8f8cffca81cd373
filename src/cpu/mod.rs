//! Ricoh 2A03 (6502) CPU emulation for the NES.
//!
//! Full documented + undocumented instruction set with one bus sync per
//! elapsed cycle; data-driven opcode dispatch. The [`crate::bus::Bus`] trait
//! carries memory, I/O, and the per-cycle sync to the PPU/APU.

pub mod cpu;
pub mod flags;
pub mod opcodes;
