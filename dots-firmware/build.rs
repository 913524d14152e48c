//! Build script for dots-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml and turns it into `board_config.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Board {
    bus: BusSection,
    matrix: MatrixSection,
    gatekeeper: GatekeeperSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BusSection {
    frequency_hz: u32,
    #[serde(default = "default_transaction_timeout")]
    transaction_timeout_ms: u64,
    #[serde(default = "default_probe_timeout")]
    probe_timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MatrixSection {
    addresses: Vec<i64>,
    #[serde(default = "default_lock_timeout")]
    lock_timeout_ms: u32,
    global_current: i64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GatekeeperSection {
    queue_depth: usize,
    #[serde(default = "default_probe_retry")]
    probe_retry_ms: u32,
}

fn default_transaction_timeout() -> u64 {
    100
}

fn default_probe_timeout() -> u64 {
    1000
}

fn default_lock_timeout() -> u32 {
    100
}

fn default_probe_retry() -> u32 {
    500
}

fn main() {
    setup_linker();
    let board = load_board();
    validate_board(&board);
    write_board_config(&board);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and parse board.toml
fn load_board() -> Board {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the dots-firmware directory.               ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&content) {
        Ok(board) => board,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid board.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Range and consistency checks the core would otherwise catch at boot
fn validate_board(board: &Board) {
    let mut errors = Vec::new();

    if board.bus.frequency_hz == 0 || board.bus.frequency_hz > 400_000 {
        errors.push("[bus] frequency_hz must be 1-400000".to_string());
    }
    if board.bus.transaction_timeout_ms == 0 {
        errors.push("[bus] transaction_timeout_ms must be non-zero".to_string());
    }
    if board.bus.probe_timeout_ms == 0 {
        errors.push("[bus] probe_timeout_ms must be non-zero".to_string());
    }

    let addresses = &board.matrix.addresses;
    if !(3..=4).contains(&addresses.len()) {
        errors.push(format!(
            "[matrix] needs 3 or 4 addresses, found {}",
            addresses.len()
        ));
    }
    for (i, addr) in addresses.iter().enumerate() {
        if !(0x30..=0x33).contains(addr) {
            errors.push(format!("[matrix] address {:#04x} is not 0x30-0x33", addr));
        }
        if addresses[..i].contains(addr) {
            errors.push(format!("[matrix] address {:#04x} listed twice", addr));
        }
    }
    if !(0..=255).contains(&board.matrix.global_current) {
        errors.push("[matrix] global_current must be 0-255".to_string());
    }

    if board.gatekeeper.queue_depth == 0 || board.gatekeeper.queue_depth > 64 {
        errors.push("[gatekeeper] queue_depth must be 1-64".to_string());
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid board configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=board.toml validated successfully");
}

/// Emit the constants `src/config.rs` includes
fn write_board_config(board: &Board) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let addresses = board
        .matrix
        .addresses
        .iter()
        .map(|a| format!("{:#04x}", a))
        .collect::<Vec<_>>()
        .join(", ");

    let generated = format!(
        "// Generated by build.rs from board.toml\n\
         pub const I2C_FREQUENCY_HZ: u32 = {};\n\
         pub const TRANSACTION_TIMEOUT_MS: u64 = {};\n\
         pub const PROBE_TIMEOUT_MS: u64 = {};\n\
         pub const CHIP_ADDRESSES: &[u8] = &[{}];\n\
         pub const LOCK_TIMEOUT_MS: u32 = {};\n\
         pub const GLOBAL_CURRENT: u8 = {};\n\
         pub const QUEUE_DEPTH: usize = {};\n\
         pub const PROBE_RETRY_MS: u32 = {};\n",
        board.bus.frequency_hz,
        board.bus.transaction_timeout_ms,
        board.bus.probe_timeout_ms,
        addresses,
        board.matrix.lock_timeout_ms,
        board.matrix.global_current,
        board.gatekeeper.queue_depth,
        board.gatekeeper.probe_retry_ms,
    );

    fs::write(out_dir.join("board_config.rs"), generated).unwrap();
}
