//! Ricoh 2A03 CPU core: fetch-decode-execute with one bus sync per cycle.
//!
//! Every memory access routes through [`CPU::read`]/[`CPU::write`], each of
//! which fires exactly one [`Bus::sync`] before the transaction; idle cycles
//! fire bare syncs at the positions real hardware burns them. Subsystems
//! composed behind the bus derive their timing purely from those syncs, so
//! the count and relative order per instruction must not drift. See
//! [6502 cycle times](https://www.nesdev.org/wiki/Cycle_reference_chart).

use crate::bus::Bus;
use crate::cpu::flags::{
    FLAG_BREAK, FLAG_CARRY, FLAG_DECIMAL, FLAG_INTERRUPT_DISABLE, FLAG_NEGATIVE, FLAG_OVERFLOW,
    FLAG_UNUSED, FLAG_ZERO,
};
use crate::cpu::opcodes::{Entry, Index, Interrupt, Mode, Op, Penalty, OPCODES};

const VECTOR_NMI: u16 = 0xFFFA;
const VECTOR_RESET: u16 = 0xFFFC;
const VECTOR_IRQ: u16 = 0xFFFE;

/// Architectural register file. Plain data; the dispatcher and instruction
/// semantics are the only writers.
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
}

impl Registers {
    /// Power-on state: `pc` stays 0 until the reset vector loads.
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFF,
            pc: 0,
            status: 0x34,
        }
    }

    pub fn flag(&self, mask: u8) -> bool {
        self.status & mask != 0
    }

    pub fn set_flag(&mut self, mask: u8, on: bool) {
        if on {
            self.status |= mask;
        } else {
            self.status &= !mask;
        }
    }

    pub fn update_zero_and_negative(&mut self, value: u8) {
        self.set_flag(FLAG_ZERO, value == 0);
        self.set_flag(FLAG_NEGATIVE, value & 0x80 != 0);
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

/// The processor. Owns its bus outright; the composing machine owns the CPU.
pub struct CPU<B: Bus> {
    pub regs: Registers,
    pub bus: B,
    /// Forces the synthetic reset interrupt on the next step. Set at power-on.
    pub pending_reset: bool,
    /// Latched NMI line; serviced before the next opcode fetch.
    pub pending_nmi: bool,
    /// Latched IRQ line; serviced when InterruptDisable is clear.
    pub pending_irq: bool,
    running: bool,
    jammed: Option<u8>,
}

impl<B: Bus> CPU<B> {
    pub fn new(bus: B) -> Self {
        Self {
            regs: Registers::new(),
            bus,
            pending_reset: true,
            pending_nmi: false,
            pending_irq: false,
            running: true,
            jammed: None,
        }
    }

    /// False once stopped: externally via [`stop`](Self::stop), or by a jam.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Cooperative stop; terminal.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// The opcode byte that jammed the processor, if any.
    pub fn jammed(&self) -> Option<u8> {
        self.jammed
    }

    /// Execute one instruction (or service a pending interrupt/reset).
    pub fn step(&mut self) {
        if !self.running {
            return;
        }

        if self.pending_nmi {
            self.pending_nmi = false;
            self.sync(); // hardware burns the fetch slot
            self.interrupt(Interrupt::Nmi);
            return;
        }

        if self.pending_irq && !self.regs.flag(FLAG_INTERRUPT_DISABLE) {
            self.pending_irq = false;
            self.sync();
            self.interrupt(Interrupt::Irq);
            return;
        }

        let opcode = self.fetch_byte();
        if self.pending_reset {
            // The fetched byte is discarded in favor of the synthetic reset
            self.interrupt(Interrupt::Reset);
        } else {
            match OPCODES[opcode as usize] {
                Some(e) => self.execute(e),
                None => self.jam(opcode),
            }
        }

        self.pending_reset = false;
    }

    /// Unmapped encoding: halt and record the byte, never a silent fall-through.
    fn jam(&mut self, opcode: u8) {
        self.jammed = Some(opcode);
        self.running = false;
    }

    fn sync(&mut self) {
        self.bus.sync();
    }

    fn read(&mut self, addr: u16) -> u8 {
        self.sync();
        self.bus.read(addr)
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.sync();
        // The reset sequence goes through the push motions without storing
        if self.pending_reset {
            return;
        }
        self.bus.write(addr, data);
    }

    fn fetch_byte(&mut self) -> u8 {
        let byte = self.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        byte
    }

    fn push(&mut self, value: u8) {
        let addr = 0x0100 | self.regs.sp as u16;
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write(addr, value);
    }

    fn pop(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.read(0x0100 | self.regs.sp as u16)
    }

    fn index_value(&self, index: Index) -> u8 {
        match index {
            Index::None => 0,
            Index::X => self.regs.x,
            Index::Y => self.regs.y,
        }
    }

    /// Compute the effective address for an addressed entry, consuming operand
    /// bytes and paying the mode's extra cycles.
    fn resolve(&mut self, e: Entry) -> u16 {
        match e.mode {
            Mode::Implied => unreachable!("implied entries resolve no address"),
            Mode::Immediate => {
                let addr = self.regs.pc;
                self.regs.pc = self.regs.pc.wrapping_add(1);
                addr
            }
            Mode::ZeroPage => {
                // Adding the index register costs a cycle; the sum wraps in page zero
                if e.index != Index::None {
                    self.sync();
                }
                let base = self.fetch_byte();
                base.wrapping_add(self.index_value(e.index)) as u16
            }
            Mode::Absolute => {
                let lo = self.fetch_byte() as u16;
                let hi = self.fetch_byte() as u16;
                let base = (hi << 8) | lo;
                let addr = base.wrapping_add(self.index_value(e.index) as u16);
                if e.penalty == Penalty::Check && (base & 0xFF00) != (addr & 0xFF00) {
                    self.sync();
                }
                addr
            }
            Mode::IndexedIndirect => {
                let ptr = self.fetch_byte().wrapping_add(self.regs.x);
                let lo = self.read(ptr as u16) as u16;
                let hi = self.read(ptr.wrapping_add(1) as u16) as u16;
                (hi << 8) | lo
            }
            Mode::IndirectIndexed => {
                let ptr = self.fetch_byte();
                let lo = self.read(ptr as u16) as u16;
                let hi = self.read(ptr.wrapping_add(1) as u16) as u16;
                let base = (hi << 8) | lo;
                let addr = base.wrapping_add(self.regs.y as u16);
                if e.penalty == Penalty::Check && (base & 0xFF00) != (addr & 0xFF00) {
                    self.sync();
                }
                addr
            }
        }
    }

    fn execute(&mut self, e: Entry) {
        match e.op {
            Op::Adc => {
                let addr = self.resolve(e);
                self.adc(addr)
            }
            Op::And => {
                let addr = self.resolve(e);
                self.and(addr)
            }
            Op::Asl => {
                let addr = self.resolve(e);
                self.asl(addr)
            }
            Op::AslAcc => self.asl_acc(),
            Op::Aso => {
                let addr = self.resolve(e);
                self.aso(addr)
            }
            Op::Axs => {
                let addr = self.resolve(e);
                self.axs(addr)
            }
            Op::Bfc(mask) => self.branch(mask, false),
            Op::Bfs(mask) => self.branch(mask, true),
            Op::Bit => {
                let addr = self.resolve(e);
                self.bit(addr)
            }
            Op::Brk(reason) => self.interrupt(reason),
            Op::Clc => self.flag_op(FLAG_CARRY, false),
            Op::Cld => self.flag_op(FLAG_DECIMAL, false),
            Op::Cli => self.flag_op(FLAG_INTERRUPT_DISABLE, false),
            Op::Clv => self.flag_op(FLAG_OVERFLOW, false),
            Op::Cmp => {
                let addr = self.resolve(e);
                self.compare(self.regs.a, addr)
            }
            Op::Cpx => {
                let addr = self.resolve(e);
                self.compare(self.regs.x, addr)
            }
            Op::Cpy => {
                let addr = self.resolve(e);
                self.compare(self.regs.y, addr)
            }
            Op::Dcp => {
                let addr = self.resolve(e);
                self.dcp(addr)
            }
            Op::Dec => {
                let addr = self.resolve(e);
                self.dec(addr)
            }
            Op::Dex => self.dex(),
            Op::Dey => self.dey(),
            Op::Eor => {
                let addr = self.resolve(e);
                self.eor(addr)
            }
            Op::Inc => {
                let addr = self.resolve(e);
                self.inc(addr)
            }
            Op::Ins => {
                let addr = self.resolve(e);
                self.ins(addr)
            }
            Op::Inx => self.inx(),
            Op::Iny => self.iny(),
            Op::Jmp => {
                let addr = self.resolve(e);
                self.regs.pc = addr;
            }
            Op::JmpInd => self.jmp_indirect(),
            Op::Jsr => self.jsr(),
            Op::Lax => {
                let addr = self.resolve(e);
                self.lax(addr)
            }
            Op::Lda => {
                let addr = self.resolve(e);
                self.lda(addr)
            }
            Op::Ldx => {
                let addr = self.resolve(e);
                self.ldx(addr)
            }
            Op::Ldy => {
                let addr = self.resolve(e);
                self.ldy(addr)
            }
            Op::Lse => {
                let addr = self.resolve(e);
                self.lse(addr)
            }
            Op::Lsr => {
                let addr = self.resolve(e);
                self.lsr(addr)
            }
            Op::LsrAcc => self.lsr_acc(),
            Op::Nop => self.sync(),
            Op::Ora => {
                let addr = self.resolve(e);
                self.ora(addr)
            }
            Op::Pha => self.pha(),
            Op::Php => self.php(),
            Op::Pla => self.pla(),
            Op::Plp => self.plp(),
            Op::Rla => {
                let addr = self.resolve(e);
                self.rla(addr)
            }
            Op::Rol => {
                let addr = self.resolve(e);
                self.rol(addr)
            }
            Op::RolAcc => self.rol_acc(),
            Op::Ror => {
                let addr = self.resolve(e);
                self.ror(addr)
            }
            Op::RorAcc => self.ror_acc(),
            Op::Rra => {
                let addr = self.resolve(e);
                self.rra(addr)
            }
            Op::Rti => self.rti(),
            Op::Rts => self.rts(),
            Op::Sbc => {
                let addr = self.resolve(e);
                self.sbc(addr)
            }
            Op::Sec => self.flag_op(FLAG_CARRY, true),
            Op::Sed => self.flag_op(FLAG_DECIMAL, true),
            Op::Sei => self.flag_op(FLAG_INTERRUPT_DISABLE, true),
            Op::Skb => self.skb(),
            Op::Skw => self.skw(),
            Op::Sta => {
                let addr = self.resolve(e);
                self.write(addr, self.regs.a)
            }
            Op::Stx => {
                let addr = self.resolve(e);
                self.write(addr, self.regs.x)
            }
            Op::Sty => {
                let addr = self.resolve(e);
                self.write(addr, self.regs.y)
            }
            Op::Tax => self.tax(),
            Op::Tay => self.tay(),
            Op::Tsx => self.tsx(),
            Op::Txa => self.txa(),
            Op::Txs => self.txs(),
            Op::Tya => self.tya(),
        }
    }

    /// Push/vector sequence shared by BRK, IRQ, NMI and reset. The pushed
    /// flag byte's Break/bit-5 encoding depends on the reason; reset skips
    /// the live-flag write-back entirely (nothing returns from a reset).
    fn interrupt(&mut self, reason: Interrupt) {
        if reason == Interrupt::Break {
            // BRK consumes a signature byte nobody reads
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }
        self.sync();

        self.push((self.regs.pc >> 8) as u8);
        self.push(self.regs.pc as u8);

        let pushed = match reason {
            Interrupt::Break | Interrupt::Reset => self.regs.status | FLAG_BREAK | FLAG_UNUSED,
            Interrupt::Nmi => self.regs.status | FLAG_UNUSED,
            Interrupt::Irq => self.regs.status,
        };
        self.push(pushed);

        let vector = match reason {
            Interrupt::Nmi => VECTOR_NMI,
            Interrupt::Reset => VECTOR_RESET,
            Interrupt::Break | Interrupt::Irq => VECTOR_IRQ,
        };
        let lo = self.read(vector) as u16;
        let hi = self.read(vector.wrapping_add(1)) as u16;
        self.regs.pc = (hi << 8) | lo;

        if reason == Interrupt::Reset {
            self.regs.set_flag(FLAG_INTERRUPT_DISABLE, true);
        } else {
            // Break and bit 5 exist only in the stack copy
            self.regs.status = (pushed | FLAG_INTERRUPT_DISABLE) & 0xCF;
        }
    }

    fn lda(&mut self, addr: u16) {
        let value = self.read(addr);
        self.regs.a = value;
        self.regs.update_zero_and_negative(value);
    }

    fn ldx(&mut self, addr: u16) {
        let value = self.read(addr);
        self.regs.x = value;
        self.regs.update_zero_and_negative(value);
    }

    fn ldy(&mut self, addr: u16) {
        let value = self.read(addr);
        self.regs.y = value;
        self.regs.update_zero_and_negative(value);
    }

    fn lax(&mut self, addr: u16) {
        let value = self.read(addr);
        self.regs.a = value;
        self.regs.x = value;
        self.regs.update_zero_and_negative(value);
    }

    fn axs(&mut self, addr: u16) {
        self.write(addr, self.regs.a & self.regs.x)
    }

    fn adc(&mut self, addr: u16) {
        let value = self.read(addr);
        self.add_with_carry(value);
    }

    fn sbc(&mut self, addr: u16) {
        // Same adder as ADC with the operand inverted; no separate borrow path
        let value = self.read(addr);
        self.add_with_carry(!value);
    }

    fn add_with_carry(&mut self, value: u8) {
        let carry = self.regs.flag(FLAG_CARRY) as u16;
        let result = self.regs.a as u16 + value as u16 + carry;

        // Overflow: operands agree in sign, truncated result does not
        let overflow = !(self.regs.a ^ value) & (self.regs.a ^ result as u8) & 0x80;
        self.regs.set_flag(FLAG_OVERFLOW, overflow != 0);
        self.regs.set_flag(FLAG_CARRY, result > 0xFF);

        self.regs.a = result as u8;
        self.regs.update_zero_and_negative(self.regs.a);
    }

    fn and(&mut self, addr: u16) {
        let value = self.read(addr);
        self.regs.a &= value;
        self.regs.update_zero_and_negative(self.regs.a);
    }

    fn ora(&mut self, addr: u16) {
        let value = self.read(addr);
        self.regs.a |= value;
        self.regs.update_zero_and_negative(self.regs.a);
    }

    fn eor(&mut self, addr: u16) {
        let value = self.read(addr);
        self.regs.a ^= value;
        self.regs.update_zero_and_negative(self.regs.a);
    }

    fn bit(&mut self, addr: u16) {
        let value = self.read(addr);
        self.regs.set_flag(FLAG_OVERFLOW, value & 0x40 != 0);
        self.regs.set_flag(FLAG_NEGATIVE, value & 0x80 != 0);
        self.regs.set_flag(FLAG_ZERO, self.regs.a & value == 0);
    }

    fn compare(&mut self, reg: u8, addr: u16) {
        let value = self.read(addr);
        self.compare_value(reg, value);
    }

    fn compare_value(&mut self, reg: u8, value: u8) {
        self.regs.set_flag(FLAG_CARRY, reg >= value);
        self.regs.update_zero_and_negative(reg.wrapping_sub(value));
    }

    fn asl(&mut self, addr: u16) {
        let value = self.read(addr);
        self.regs.set_flag(FLAG_CARRY, value & 0x80 != 0);
        let result = value << 1;
        self.write(addr, result);
        self.sync();
        self.regs.update_zero_and_negative(result);
    }

    fn asl_acc(&mut self) {
        self.regs.set_flag(FLAG_CARRY, self.regs.a & 0x80 != 0);
        self.regs.a <<= 1;
        self.sync();
        self.regs.update_zero_and_negative(self.regs.a);
    }

    fn lsr(&mut self, addr: u16) {
        let value = self.read(addr);
        self.regs.set_flag(FLAG_CARRY, value & 0x01 != 0);
        let result = value >> 1;
        self.write(addr, result);
        self.sync();
        self.regs.update_zero_and_negative(result);
    }

    fn lsr_acc(&mut self) {
        self.regs.set_flag(FLAG_CARRY, self.regs.a & 0x01 != 0);
        self.regs.a >>= 1;
        self.sync();
        self.regs.update_zero_and_negative(self.regs.a);
    }

    fn rol(&mut self, addr: u16) {
        let value = self.read(addr);
        let result = value << 1 | self.regs.flag(FLAG_CARRY) as u8;
        self.regs.set_flag(FLAG_CARRY, value & 0x80 != 0);
        self.write(addr, result);
        self.sync();
        self.regs.update_zero_and_negative(result);
    }

    fn rol_acc(&mut self) {
        self.sync();
        let result = self.regs.a << 1 | self.regs.flag(FLAG_CARRY) as u8;
        self.regs.set_flag(FLAG_CARRY, self.regs.a & 0x80 != 0);
        self.regs.a = result;
        self.regs.update_zero_and_negative(result);
    }

    fn ror(&mut self, addr: u16) {
        let value = self.read(addr);
        let result = value >> 1 | (self.regs.flag(FLAG_CARRY) as u8) << 7;
        self.regs.set_flag(FLAG_CARRY, value & 0x01 != 0);
        self.write(addr, result);
        self.sync();
        self.regs.update_zero_and_negative(result);
    }

    fn ror_acc(&mut self) {
        self.sync();
        let result = self.regs.a >> 1 | (self.regs.flag(FLAG_CARRY) as u8) << 7;
        self.regs.set_flag(FLAG_CARRY, self.regs.a & 0x01 != 0);
        self.regs.a = result;
        self.regs.update_zero_and_negative(result);
    }

    fn inc(&mut self, addr: u16) {
        let value = self.read(addr);
        let result = value.wrapping_add(1);
        self.sync();
        self.write(addr, result);
        self.regs.update_zero_and_negative(result);
    }

    fn dec(&mut self, addr: u16) {
        let value = self.read(addr);
        let result = value.wrapping_sub(1);
        self.sync();
        self.write(addr, result);
        self.regs.update_zero_and_negative(result);
    }

    fn inx(&mut self) {
        self.sync();
        self.regs.x = self.regs.x.wrapping_add(1);
        self.regs.update_zero_and_negative(self.regs.x);
    }

    fn iny(&mut self) {
        self.sync();
        self.regs.y = self.regs.y.wrapping_add(1);
        self.regs.update_zero_and_negative(self.regs.y);
    }

    fn dex(&mut self) {
        self.sync();
        self.regs.x = self.regs.x.wrapping_sub(1);
        self.regs.update_zero_and_negative(self.regs.x);
    }

    fn dey(&mut self) {
        self.sync();
        self.regs.y = self.regs.y.wrapping_sub(1);
        self.regs.update_zero_and_negative(self.regs.y);
    }

    // ASL then ORA
    fn aso(&mut self, addr: u16) {
        let value = self.read(addr);
        self.regs.set_flag(FLAG_CARRY, value & 0x80 != 0);
        let result = value << 1;
        self.write(addr, result);
        self.sync();
        self.regs.a |= result;
        self.regs.update_zero_and_negative(self.regs.a);
    }

    // ROL then AND
    fn rla(&mut self, addr: u16) {
        let value = self.read(addr);
        let result = value << 1 | self.regs.flag(FLAG_CARRY) as u8;
        self.regs.set_flag(FLAG_CARRY, value & 0x80 != 0);
        self.write(addr, result);
        self.sync();
        self.regs.a &= result;
        self.regs.update_zero_and_negative(self.regs.a);
    }

    // LSR then EOR
    fn lse(&mut self, addr: u16) {
        let value = self.read(addr);
        self.regs.set_flag(FLAG_CARRY, value & 0x01 != 0);
        let result = value >> 1;
        self.write(addr, result);
        self.sync();
        self.regs.a ^= result;
        self.regs.update_zero_and_negative(self.regs.a);
    }

    // ROR then ADC; the add consumes the carry the rotate just produced
    fn rra(&mut self, addr: u16) {
        let value = self.read(addr);
        let result = value >> 1 | (self.regs.flag(FLAG_CARRY) as u8) << 7;
        self.regs.set_flag(FLAG_CARRY, value & 0x01 != 0);
        self.write(addr, result);
        self.sync();
        self.add_with_carry(result);
    }

    // DEC then CMP against the decremented value
    fn dcp(&mut self, addr: u16) {
        let value = self.read(addr);
        let result = value.wrapping_sub(1);
        self.sync();
        self.write(addr, result);
        self.compare_value(self.regs.a, result);
    }

    // INC then SBC of the incremented value
    fn ins(&mut self, addr: u16) {
        let value = self.read(addr);
        let result = value.wrapping_add(1);
        self.sync();
        self.write(addr, result);
        self.add_with_carry(!result);
    }

    fn skb(&mut self) {
        let _ = self.fetch_byte();
        self.sync();
    }

    fn skw(&mut self) {
        let _ = self.fetch_byte();
        let _ = self.fetch_byte();
        self.sync();
    }

    /// BFC/BFS: the displacement is always consumed; a taken branch costs a
    /// cycle, plus another when the destination sits on a different page than
    /// the instruction after the branch.
    fn branch(&mut self, mask: u8, taken_when_set: bool) {
        let offset = self.fetch_byte() as i8;
        if self.regs.flag(mask) == taken_when_set {
            let dest = self.regs.pc.wrapping_add(offset as u16);
            self.sync();
            if (dest & 0xFF00) != (self.regs.pc & 0xFF00) {
                self.sync();
            }
            self.regs.pc = dest;
        }
    }

    fn jmp_indirect(&mut self) {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        let ptr = (hi << 8) | lo;

        let target_lo = self.read(ptr) as u16;
        // Hardware bug: a pointer ending in 0xFF wraps within its own page
        let hi_ptr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
        let target_hi = self.read(hi_ptr) as u16;

        self.regs.pc = (target_hi << 8) | target_lo;
    }

    fn jsr(&mut self) {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;

        self.sync();

        let return_addr = self.regs.pc.wrapping_sub(1);
        self.push((return_addr >> 8) as u8);
        self.push(return_addr as u8);

        self.regs.pc = (hi << 8) | lo;
    }

    fn rts(&mut self) {
        self.sync();
        self.sync();

        let lo = self.pop() as u16;
        let hi = self.pop() as u16;
        self.regs.pc = ((hi << 8) | lo).wrapping_add(1);

        self.sync();
    }

    fn rti(&mut self) {
        self.sync();
        // Push-time convention: bit 5 forced, Break cleared
        let status = (self.pop() | 0x30) - 0x10;
        self.sync();

        let lo = self.pop() as u16;
        let hi = self.pop() as u16;
        self.regs.pc = (hi << 8) | lo;

        self.regs.status = status;
    }

    fn pha(&mut self) {
        let value = self.regs.a;
        self.sync();
        self.push(value);
    }

    fn php(&mut self) {
        // Quirk: PHP pushes with Break and bit 5 set
        let status = self.regs.status | FLAG_BREAK | FLAG_UNUSED;
        self.sync();
        self.push(status);
    }

    fn pla(&mut self) {
        let value = self.pop();
        self.sync();
        self.regs.a = value;
        self.regs.update_zero_and_negative(value);
        self.sync();
    }

    fn plp(&mut self) {
        self.sync();
        self.sync();
        self.regs.status = (self.pop() | 0x30) - 0x10;
    }

    fn tax(&mut self) {
        self.sync();
        self.regs.x = self.regs.a;
        self.regs.update_zero_and_negative(self.regs.x);
    }

    fn tay(&mut self) {
        self.sync();
        self.regs.y = self.regs.a;
        self.regs.update_zero_and_negative(self.regs.y);
    }

    fn txa(&mut self) {
        self.sync();
        self.regs.a = self.regs.x;
        self.regs.update_zero_and_negative(self.regs.a);
    }

    fn tya(&mut self) {
        self.sync();
        self.regs.a = self.regs.y;
        self.regs.update_zero_and_negative(self.regs.a);
    }

    fn txs(&mut self) {
        // The only transfer that leaves the flags alone
        self.sync();
        self.regs.sp = self.regs.x;
    }

    fn tsx(&mut self) {
        self.sync();
        self.regs.x = self.regs.sp;
        self.regs.update_zero_and_negative(self.regs.x);
    }

    fn flag_op(&mut self, mask: u8, on: bool) {
        self.sync();
        self.regs.set_flag(mask, on);
    }
}
