//! Opcode dispatch table for the 2A03.
//!
//! Maps each opcode byte to a data-driven [`Entry`]: addressing mode, index
//! register, page-cross penalty policy, and semantic operation. Encodings
//! without an entry jam the processor (illegal-and-halting); see
//! [CPU unofficial opcodes](https://www.nesdev.org/wiki/CPU_unofficial_opcodes)
//! for the fused undocumented forms carried here.

use crate::cpu::flags::{FLAG_CARRY, FLAG_NEGATIVE, FLAG_OVERFLOW, FLAG_ZERO};

/// Addressing mode of a dispatch entry. `Implied` covers accumulator forms
/// and instructions that consume their own operand bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Implied,
    Immediate,
    ZeroPage,
    Absolute,
    IndexedIndirect,
    IndirectIndexed,
}

/// Index register added during address resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Index {
    None,
    X,
    Y,
}

/// Page-cross penalty policy. `Check` pays one extra cycle when the indexed
/// sum crosses a page; `Free` never checks (store-type entries, whose timing
/// is fixed regardless of crossing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Penalty {
    Check,
    Free,
}

/// Reason the BRK semantics run: the BRK opcode itself, a hardware interrupt
/// line, or the synthetic reset substituted by the step loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interrupt {
    Break,
    Irq,
    Nmi,
    Reset,
}

/// Semantic operation. Branches carry the tested flag mask; BRK carries its
/// reason. `Aso`/`Rla`/`Lse`/`Rra`/`Dcp`/`Ins`/`Lax`/`Axs`/`Skb`/`Skw` are
/// the undocumented fused forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Adc,
    And,
    Asl,
    AslAcc,
    Aso,
    Axs,
    Bfc(u8),
    Bfs(u8),
    Bit,
    Brk(Interrupt),
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dcp,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Ins,
    Inx,
    Iny,
    Jmp,
    JmpInd,
    Jsr,
    Lax,
    Lda,
    Ldx,
    Ldy,
    Lse,
    Lsr,
    LsrAcc,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rla,
    Rol,
    RolAcc,
    Ror,
    RorAcc,
    Rra,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Skb,
    Skw,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

/// One decoded dispatch entry, fixed at table-construction time.
#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub mode: Mode,
    pub index: Index,
    pub penalty: Penalty,
    pub op: Op,
}

const fn entry(mode: Mode, index: Index, penalty: Penalty, op: Op) -> Option<Entry> {
    Some(Entry {
        mode,
        index,
        penalty,
        op,
    })
}

const fn implied(op: Op) -> Option<Entry> {
    entry(Mode::Implied, Index::None, Penalty::Free, op)
}

const fn imm(op: Op) -> Option<Entry> {
    entry(Mode::Immediate, Index::None, Penalty::Free, op)
}

const fn zp(op: Op) -> Option<Entry> {
    entry(Mode::ZeroPage, Index::None, Penalty::Free, op)
}

const fn zp_x(op: Op) -> Option<Entry> {
    entry(Mode::ZeroPage, Index::X, Penalty::Free, op)
}

const fn zp_y(op: Op) -> Option<Entry> {
    entry(Mode::ZeroPage, Index::Y, Penalty::Free, op)
}

const fn abs(op: Op) -> Option<Entry> {
    entry(Mode::Absolute, Index::None, Penalty::Check, op)
}

const fn abs_x(op: Op) -> Option<Entry> {
    entry(Mode::Absolute, Index::X, Penalty::Check, op)
}

const fn abs_y(op: Op) -> Option<Entry> {
    entry(Mode::Absolute, Index::Y, Penalty::Check, op)
}

const fn abs_x_store(op: Op) -> Option<Entry> {
    entry(Mode::Absolute, Index::X, Penalty::Free, op)
}

const fn abs_y_store(op: Op) -> Option<Entry> {
    entry(Mode::Absolute, Index::Y, Penalty::Free, op)
}

const fn ind_x(op: Op) -> Option<Entry> {
    entry(Mode::IndexedIndirect, Index::X, Penalty::Free, op)
}

const fn ind_y(op: Op) -> Option<Entry> {
    entry(Mode::IndirectIndexed, Index::Y, Penalty::Check, op)
}

const fn ind_y_store(op: Op) -> Option<Entry> {
    entry(Mode::IndirectIndexed, Index::Y, Penalty::Free, op)
}

/// Total opcode map, indexed by the fetched byte.
pub const OPCODES: [Option<Entry>; 256] = {
    let mut t: [Option<Entry>; 256] = [None; 256];

    t[0x00] = implied(Op::Brk(Interrupt::Break));
    t[0x01] = ind_x(Op::Ora);
    t[0x03] = ind_x(Op::Aso);
    t[0x04] = implied(Op::Skb);
    t[0x05] = zp(Op::Ora);
    t[0x06] = zp(Op::Asl);
    t[0x07] = zp(Op::Aso);
    t[0x08] = implied(Op::Php);
    t[0x09] = imm(Op::Ora);
    t[0x0A] = implied(Op::AslAcc);
    t[0x0C] = implied(Op::Skw);
    t[0x0D] = abs(Op::Ora);
    t[0x0E] = abs(Op::Asl);
    t[0x0F] = abs(Op::Aso);
    t[0x10] = implied(Op::Bfc(FLAG_NEGATIVE)); // BPL
    t[0x11] = ind_y(Op::Ora);
    t[0x13] = ind_y(Op::Aso);
    t[0x14] = implied(Op::Skb);
    t[0x15] = zp_x(Op::Ora);
    t[0x16] = zp_x(Op::Asl);
    t[0x17] = zp_x(Op::Aso);
    t[0x18] = implied(Op::Clc);
    t[0x19] = abs_y(Op::Ora);
    t[0x1A] = implied(Op::Nop);
    t[0x1B] = abs_y(Op::Aso);
    t[0x1C] = implied(Op::Skw);
    t[0x1D] = abs_x(Op::Ora);
    t[0x1E] = abs_x(Op::Asl);
    t[0x1F] = abs_x(Op::Aso);
    t[0x20] = implied(Op::Jsr);
    t[0x21] = ind_x(Op::And);
    t[0x23] = ind_x(Op::Rla);
    t[0x24] = zp(Op::Bit);
    t[0x25] = zp(Op::And);
    t[0x26] = zp(Op::Rol);
    t[0x27] = zp(Op::Rla);
    t[0x28] = implied(Op::Plp);
    t[0x29] = imm(Op::And);
    t[0x2A] = implied(Op::RolAcc);
    t[0x2C] = abs(Op::Bit);
    t[0x2D] = abs(Op::And);
    t[0x2E] = abs(Op::Rol);
    t[0x2F] = abs(Op::Rla);
    t[0x30] = implied(Op::Bfs(FLAG_NEGATIVE)); // BMI
    t[0x31] = ind_y(Op::And);
    t[0x33] = ind_y(Op::Rla);
    t[0x34] = implied(Op::Skb);
    t[0x35] = zp_x(Op::And);
    t[0x36] = zp_x(Op::Rol);
    t[0x37] = zp_x(Op::Rla);
    t[0x38] = implied(Op::Sec);
    t[0x39] = abs_y(Op::And);
    t[0x3A] = implied(Op::Nop);
    t[0x3B] = abs_y(Op::Rla);
    t[0x3C] = implied(Op::Skw);
    t[0x3D] = abs_x(Op::And);
    t[0x3E] = abs_x(Op::Rol);
    t[0x3F] = abs_x(Op::Rla);
    t[0x40] = implied(Op::Rti);
    t[0x41] = ind_x(Op::Eor);
    t[0x43] = ind_x(Op::Lse);
    t[0x44] = implied(Op::Skb);
    t[0x45] = zp(Op::Eor);
    t[0x46] = zp(Op::Lsr);
    t[0x47] = zp(Op::Lse);
    t[0x48] = implied(Op::Pha);
    t[0x49] = imm(Op::Eor);
    t[0x4A] = implied(Op::LsrAcc);
    t[0x4C] = abs(Op::Jmp);
    t[0x4D] = abs(Op::Eor);
    t[0x4E] = abs(Op::Lsr);
    t[0x4F] = abs(Op::Lse);
    t[0x50] = implied(Op::Bfc(FLAG_OVERFLOW)); // BVC
    t[0x51] = ind_y(Op::Eor);
    t[0x53] = ind_y(Op::Lse);
    t[0x54] = implied(Op::Skb);
    t[0x55] = zp_x(Op::Eor);
    t[0x56] = zp_x(Op::Lsr);
    t[0x57] = zp_x(Op::Lse);
    t[0x58] = implied(Op::Cli);
    t[0x59] = abs_y(Op::Eor);
    t[0x5A] = implied(Op::Nop);
    t[0x5B] = abs_y(Op::Lse);
    t[0x5C] = implied(Op::Skw);
    t[0x5D] = abs_x(Op::Eor);
    t[0x5E] = abs_x(Op::Lsr);
    t[0x5F] = abs_x(Op::Lse);
    t[0x60] = implied(Op::Rts);
    t[0x61] = ind_x(Op::Adc);
    t[0x63] = ind_x(Op::Rra);
    t[0x64] = implied(Op::Skb);
    t[0x65] = zp(Op::Adc);
    t[0x66] = zp(Op::Ror);
    t[0x67] = zp(Op::Rra);
    t[0x68] = implied(Op::Pla);
    t[0x69] = imm(Op::Adc);
    t[0x6A] = implied(Op::RorAcc);
    t[0x6C] = implied(Op::JmpInd);
    t[0x6D] = abs(Op::Adc);
    t[0x6E] = abs(Op::Ror);
    t[0x6F] = abs(Op::Rra);
    t[0x70] = implied(Op::Bfs(FLAG_OVERFLOW)); // BVS
    t[0x71] = ind_y(Op::Adc);
    t[0x73] = ind_y(Op::Rra);
    t[0x74] = implied(Op::Skb);
    t[0x75] = zp_x(Op::Adc);
    t[0x76] = zp_x(Op::Ror);
    t[0x77] = zp_x(Op::Rra);
    t[0x78] = implied(Op::Sei);
    t[0x79] = abs_y(Op::Adc);
    t[0x7A] = implied(Op::Nop);
    t[0x7B] = abs_y(Op::Rra);
    t[0x7C] = implied(Op::Skw);
    t[0x7D] = abs_x(Op::Adc);
    t[0x7E] = abs_x(Op::Ror);
    t[0x7F] = abs_x(Op::Rra);
    t[0x80] = implied(Op::Skb);
    t[0x81] = ind_x(Op::Sta);
    t[0x83] = ind_x(Op::Axs);
    t[0x84] = zp(Op::Sty);
    t[0x85] = zp(Op::Sta);
    t[0x86] = zp(Op::Stx);
    t[0x87] = zp(Op::Axs);
    t[0x88] = implied(Op::Dey);
    t[0x8A] = implied(Op::Txa);
    t[0x8C] = abs(Op::Sty);
    t[0x8D] = abs(Op::Sta);
    t[0x8E] = abs(Op::Stx);
    t[0x8F] = abs(Op::Axs);
    t[0x90] = implied(Op::Bfc(FLAG_CARRY)); // BCC
    t[0x91] = ind_y_store(Op::Sta);
    t[0x94] = zp_x(Op::Sty);
    t[0x95] = zp_x(Op::Sta);
    t[0x96] = zp_y(Op::Stx);
    t[0x97] = zp_y(Op::Axs);
    t[0x98] = implied(Op::Tya);
    t[0x99] = abs_y_store(Op::Sta);
    t[0x9A] = implied(Op::Txs);
    t[0x9D] = abs_x_store(Op::Sta);
    t[0xA0] = imm(Op::Ldy);
    t[0xA1] = ind_x(Op::Lda);
    t[0xA2] = imm(Op::Ldx);
    t[0xA3] = ind_x(Op::Lax);
    t[0xA4] = zp(Op::Ldy);
    t[0xA5] = zp(Op::Lda);
    t[0xA6] = zp(Op::Ldx);
    t[0xA7] = zp(Op::Lax);
    t[0xA8] = implied(Op::Tay);
    t[0xA9] = imm(Op::Lda);
    t[0xAA] = implied(Op::Tax);
    t[0xAC] = abs(Op::Ldy);
    t[0xAD] = abs(Op::Lda);
    t[0xAE] = abs(Op::Ldx);
    t[0xAF] = abs(Op::Lax);
    t[0xB0] = implied(Op::Bfs(FLAG_CARRY)); // BCS
    t[0xB1] = ind_y(Op::Lda);
    t[0xB3] = ind_y(Op::Lax);
    t[0xB4] = zp_x(Op::Ldy);
    t[0xB5] = zp_x(Op::Lda);
    t[0xB6] = zp_y(Op::Ldx);
    t[0xB7] = zp_y(Op::Lax);
    t[0xB8] = implied(Op::Clv);
    t[0xB9] = abs_y(Op::Lda);
    t[0xBA] = implied(Op::Tsx);
    t[0xBC] = abs_x(Op::Ldy);
    t[0xBD] = abs_x(Op::Lda);
    t[0xBE] = abs_y(Op::Ldx);
    t[0xBF] = abs_y(Op::Lax);
    t[0xC0] = imm(Op::Cpy);
    t[0xC1] = ind_x(Op::Cmp);
    t[0xC3] = ind_x(Op::Dcp);
    t[0xC4] = zp(Op::Cpy);
    t[0xC5] = zp(Op::Cmp);
    t[0xC6] = zp(Op::Dec);
    t[0xC7] = zp(Op::Dcp);
    t[0xC8] = implied(Op::Iny);
    t[0xC9] = imm(Op::Cmp);
    t[0xCA] = implied(Op::Dex);
    t[0xCC] = abs(Op::Cpy);
    t[0xCD] = abs(Op::Cmp);
    t[0xCE] = abs(Op::Dec);
    t[0xCF] = abs(Op::Dcp);
    t[0xD0] = implied(Op::Bfc(FLAG_ZERO)); // BNE
    t[0xD1] = ind_y(Op::Cmp);
    t[0xD3] = ind_y(Op::Dcp);
    t[0xD4] = implied(Op::Skb);
    t[0xD5] = zp_x(Op::Cmp);
    t[0xD6] = zp_x(Op::Dec);
    t[0xD7] = zp_x(Op::Dcp);
    t[0xD8] = implied(Op::Cld);
    t[0xD9] = abs_y(Op::Cmp);
    t[0xDA] = implied(Op::Nop);
    t[0xDB] = abs_y(Op::Dcp);
    t[0xDC] = implied(Op::Skw);
    t[0xDD] = abs_x(Op::Cmp);
    t[0xDE] = abs_x(Op::Dec);
    t[0xDF] = abs_x(Op::Dcp);
    t[0xE0] = imm(Op::Cpx);
    t[0xE1] = ind_x(Op::Sbc);
    t[0xE3] = ind_x(Op::Ins);
    t[0xE4] = zp(Op::Cpx);
    t[0xE5] = zp(Op::Sbc);
    t[0xE6] = zp(Op::Inc);
    t[0xE7] = zp(Op::Ins);
    t[0xE8] = implied(Op::Inx);
    t[0xE9] = imm(Op::Sbc);
    t[0xEA] = implied(Op::Nop);
    t[0xEB] = imm(Op::Sbc);
    t[0xEC] = abs(Op::Cpx);
    t[0xED] = abs(Op::Sbc);
    t[0xEE] = abs(Op::Inc);
    t[0xEF] = abs(Op::Ins);
    t[0xF0] = implied(Op::Bfs(FLAG_ZERO)); // BEQ
    t[0xF1] = ind_y(Op::Sbc);
    t[0xF3] = ind_y(Op::Ins);
    t[0xF4] = implied(Op::Skb);
    t[0xF5] = zp_x(Op::Sbc);
    t[0xF6] = zp_x(Op::Inc);
    t[0xF7] = zp_x(Op::Ins);
    t[0xF8] = implied(Op::Sed);
    t[0xF9] = abs_y(Op::Sbc);
    t[0xFA] = implied(Op::Nop);
    t[0xFB] = abs_y(Op::Ins);
    t[0xFC] = implied(Op::Skw);
    t[0xFD] = abs_x(Op::Sbc);
    t[0xFE] = abs_x(Op::Inc);
    t[0xFF] = abs_x(Op::Ins);

    t
};
