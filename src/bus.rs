//! Memory bus and address decoding for the NES.
//!
//! Maps CPU addresses to RAM, subsystem registers, and cartridge PRG, and
//! forwards the per-cycle sync pulse the subsystems derive their timing from.

use crate::{apu::APU, cartridge::Cartridge, ppu::PPU};

/// Trait for memory-mapped I/O and cycle accounting used by the CPU.
pub trait Bus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);
    /// Invoked exactly once per elapsed CPU cycle.
    fn sync(&mut self);
}

/// Main NES bus: RAM, cartridge, and the PPU/APU stubs. Owns all of them
/// outright for the machine's lifetime.
pub struct NesBus {
    pub ram: [u8; 2048],
    pub cart: Cartridge,
    pub ppu: PPU,
    pub apu: APU,
}

impl NesBus {
    pub fn new(cart: Cartridge) -> Self {
        Self {
            ram: [0; 2048],
            cart,
            ppu: PPU::new(),
            apu: APU::new(),
        }
    }
}

impl Bus for NesBus {
    fn read(&mut self, addr: u16) -> u8 {
        match addr {
            // Internal RAM (mirrored 4x in 0x0000-0x1FFF)
            0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize],
            // PPU/APU registers and expansion: stubs, nothing to read yet
            0x2000..=0x7FFF => 0,
            // Cartridge PRG ROM
            0x8000..=0xFFFF => self.cart.prg_read(addr),
        }
    }

    fn write(&mut self, addr: u16, data: u8) {
        match addr {
            // Internal RAM
            0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize] = data,
            // Subsystem registers and cartridge space: ignored until those land
            _ => {}
        }
    }

    fn sync(&mut self) {
        // One tick per subsystem; each advances its own cycle-ratio state
        self.ppu.tick();
        self.apu.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::MAGIC;
    use crate::cpu::cpu::CPU;
    use crate::cpu::flags::{FLAG_NEGATIVE, FLAG_ZERO};

    /// One-bank iNES image whose PRG runs `program` from the reset vector.
    fn test_rom(program: &[u8]) -> Cartridge {
        let mut prg = vec![0u8; 16 * 1024];
        prg[..program.len()].copy_from_slice(program);
        // Reset vector -> 0x8000
        prg[0x3FFC] = 0x00;
        prg[0x3FFD] = 0x80;

        let mut data = MAGIC.to_vec();
        data.extend_from_slice(&[1, 0, 0, 0, 0, 0]);
        data.extend_from_slice(&[0; 6]);
        data.extend(prg);
        Cartridge::parse(&data).unwrap()
    }

    #[test]
    fn ram_mirrors_every_0x800() {
        let mut bus = NesBus::new(test_rom(&[]));
        bus.write(0x0002, 0x5A);

        assert_eq!(bus.read(0x0002), 0x5A);
        assert_eq!(bus.read(0x0802), 0x5A);
        assert_eq!(bus.read(0x1002), 0x5A);
        assert_eq!(bus.read(0x1802), 0x5A);

        bus.write(0x1FFF, 0x77);
        assert_eq!(bus.read(0x07FF), 0x77);
    }

    #[test]
    fn unmapped_regions_read_zero_and_drop_writes() {
        let mut bus = NesBus::new(test_rom(&[]));
        bus.write(0x2000, 0xFF);
        bus.write(0x4016, 0xFF);

        assert_eq!(bus.read(0x2000), 0);
        assert_eq!(bus.read(0x5000), 0);
    }

    #[test]
    fn prg_is_visible_above_0x8000() {
        let bus = &mut NesBus::new(test_rom(&[0xA9, 0x05]));
        assert_eq!(bus.read(0x8000), 0xA9);
        // Single bank mirrors into the upper half
        assert_eq!(bus.read(0xC000), 0xA9);
    }

    #[test]
    fn sync_forwards_one_tick_per_subsystem() {
        let mut bus = NesBus::new(test_rom(&[]));
        bus.sync();
        bus.sync();

        // PPU runs 3 dots per CPU cycle, APU 1:1
        assert_eq!(bus.ppu.dots, 6);
        assert_eq!(bus.apu.cycles, 2);
    }

    #[test]
    fn reset_then_lda_runs_from_prg() {
        // LDA #5; BRK
        let mut cpu = CPU::new(NesBus::new(test_rom(&[0xA9, 0x05, 0x00])));

        cpu.step(); // reset sequence
        assert_eq!(cpu.regs.pc, 0x8000);

        cpu.step(); // LDA #5
        assert_eq!(cpu.regs.a, 5);
        assert!(!cpu.regs.flag(FLAG_ZERO));
        assert!(!cpu.regs.flag(FLAG_NEGATIVE));
    }

    #[test]
    fn instruction_cycles_reach_the_ppu() {
        let mut cpu = CPU::new(NesBus::new(test_rom(&[0xA9, 0x05])));
        cpu.step(); // reset: 7 cycles
        cpu.step(); // LDA #5: 2 cycles

        assert_eq!(cpu.bus.apu.cycles, 9);
        assert_eq!(cpu.bus.ppu.dots, 27);
    }
}
