//! NES emulator entry point.
//!
//! Loads a cartridge and runs the CPU until a test-harness sentinel shows up
//! at $02/$03, the processor jams, or it is stopped.
//! Usage: famicore path/to/game.nes

use std::env;
use std::process::ExitCode;

use ansi_term::Colour::Red;
use famicore::{bus::NesBus, cartridge::Cartridge, cpu::cpu::CPU};

fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: famicore <rom.nes>");
        return ExitCode::FAILURE;
    };

    let Some(cart) = Cartridge::load(&path) else {
        eprintln!("{} not an iNES ROM: {}", Red.bold().paint("ERROR"), path);
        return ExitCode::FAILURE;
    };

    let hdr = cart.header;
    println!("Loaded ROM, mapper '{}'", hdr.mapper());
    println!("16k: {}, 8k: {}", hdr.prg_banks, hdr.chr_banks);
    println!(
        "{:#04X} (m:{} b:{} t:{} 4:{})",
        hdr.flags,
        hdr.vertical_mirroring() as u8,
        hdr.battery() as u8,
        hdr.trainer() as u8,
        hdr.four_screen() as u8
    );
    println!("{:#04X} (vs:{})", hdr.flags2, hdr.vs_system() as u8);
    println!("8k ram: {} pal: {}", hdr.ram_banks, hdr.pal() as u8);
    println!();

    let mut cpu = CPU::new(NesBus::new(cart));

    while cpu.running() {
        cpu.step();

        if let Some(opcode) = cpu.jammed() {
            println!(
                "{} jammed on opcode {:#04X}",
                Red.bold().paint("ERROR"),
                opcode
            );
            break;
        }

        // Blargg-style test ROMs report a failure code at $02/$03
        for addr in [0x02, 0x03] {
            let code = cpu.bus.ram[addr];
            if code != 0 {
                println!("Stop! {:#04X}, {:#x}", addr, code);
                cpu.stop();
            }
        }
    }

    ExitCode::SUCCESS
}
