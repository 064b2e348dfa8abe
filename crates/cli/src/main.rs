//! MIPS simulator command-line front end.
//!
//! This binary validates the simulator command line and hands the result to a backend. It performs:
//! 1. **Parsing:** Reads flags with clap; repeatable flags keep every occurrence.
//! 2. **Logging:** Initialises `tracing` output on stderr, filtered by `RUST_LOG`.
//! 3. **Session:** Runs the fail-fast session builder against the inspect backend.
//! 4. **Exit status:** 0 on success, 1 on any configuration, assembly or machine error.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mipsim_core::{Flags, SessionBuilder};
use tracing_subscriber::EnvFilter;

mod inspect;

use crate::inspect::{InspectBackend, Inspection};

/// MIPS CLI machine simulator.
#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS CLI machine simulator",
    long_about = "Validate a simulator command line and report the resulting machine, tracer and reporter configuration.\n\nExamples:\n  mipsim --pipelined --d-cache=lru,4,2,2,wb program.elf\n  mipsim --dump-range=0x80020000,64,out.txt --fail-match=o program.elf\n  mipsim --load-range=main,data.txt --trace-gp='*' program.elf"
)]
struct Cli {
    /// Input ELF executable file or assembler source.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Treat provided file argument as assembler source.
    #[arg(long)]
    asm: bool,

    /// Configure CPU to use five stage pipeline.
    #[arg(long)]
    pipelined: bool,

    /// Disable jump delay slot.
    #[arg(long = "no-delay-slot")]
    no_delay_slot: bool,

    /// Trace fetched instruction (for both pipelined and not core).
    #[arg(long = "trace-fetch", visible_alias = "tr-fetch")]
    trace_fetch: bool,

    /// Trace instruction in decode stage (only for pipelined core).
    #[arg(long = "trace-decode", visible_alias = "tr-decode")]
    trace_decode: bool,

    /// Trace instruction in execute stage (only for pipelined core).
    #[arg(long = "trace-execute", visible_alias = "tr-execute")]
    trace_execute: bool,

    /// Trace instruction in memory stage (only for pipelined core).
    #[arg(long = "trace-memory", visible_alias = "tr-memory")]
    trace_memory: bool,

    /// Trace instruction in write back stage (only for pipelined core).
    #[arg(long = "trace-writeback", visible_alias = "tr-writeback")]
    trace_writeback: bool,

    /// Print program counter register changes.
    #[arg(long = "trace-pc", visible_alias = "tr-pc")]
    trace_pc: bool,

    /// Print general purpose register changes. You can use * for all registers.
    #[arg(long = "trace-gp", visible_alias = "tr-gp", value_name = "REG")]
    trace_gp: Vec<String>,

    /// Print LO register changes.
    #[arg(long = "trace-lo", visible_alias = "tr-lo")]
    trace_lo: bool,

    /// Print HI register changes.
    #[arg(long = "trace-hi", visible_alias = "tr-hi")]
    trace_hi: bool,

    /// Dump registers state at program exit.
    #[arg(long = "dump-registers", visible_alias = "d-regs")]
    dump_registers: bool,

    /// Dump cache statistics at program exit.
    #[arg(long = "dump-cache-stats")]
    dump_cache_stats: bool,

    /// Dump number of CPU cycles till program end.
    #[arg(long = "dump-cycles")]
    dump_cycles: bool,

    /// Dump memory range.
    #[arg(long = "dump-range", value_name = "START,LENGTH,FNAME")]
    dump_range: Vec<String>,

    /// Load memory range.
    #[arg(long = "load-range", value_name = "START,FNAME")]
    load_range: Vec<String>,

    /// Expect that program causes CPU trap and fail if it doesn't.
    #[arg(long = "expect-fail")]
    expect_fail: bool,

    /// Program should exit with exactly this CPU TRAP. Possible values are I(unsupported
    /// Instruction), A(Unsupported ALU operation), O(Overflow/underflow) and J(Unaligned Jump).
    /// You can freely combine them. Using this implies expect-fail option.
    #[arg(long = "fail-match", value_name = "TRAP")]
    fail_match: Vec<String>,

    /// Data cache. Format POLICY,SETS,WORDS_IN_BLOCKS,ASSOCIATIVITY[,WRITE] where POLICY is
    /// random/lru/lfu and WRITE is wb/wt/wtna/wta.
    #[arg(long = "d-cache", value_name = "DCACHE")]
    d_cache: Vec<String>,

    /// Instruction cache. Format POLICY,SETS,WORDS_IN_BLOCKS,ASSOCIATIVITY[,WRITE] where
    /// POLICY is random/lru/lfu and WRITE is wb/wt/wtna/wta.
    #[arg(long = "i-cache", value_name = "ICACHE")]
    i_cache: Vec<String>,

    /// Memory read access time (cycles).
    #[arg(long = "read-time", value_name = "RTIME")]
    read_time: Vec<String>,

    /// Memory write access time (cycles).
    #[arg(long = "write-time", value_name = "WTIME")]
    write_time: Vec<String>,

    /// Memory burst access time (cycles).
    #[arg(long = "burst-time", value_name = "BTIME")]
    burst_time: Vec<String>,
}

impl From<Cli> for Flags {
    fn from(cli: Cli) -> Self {
        Self {
            files: cli.files,
            asm: cli.asm,
            pipelined: cli.pipelined,
            no_delay_slot: cli.no_delay_slot,
            trace_fetch: cli.trace_fetch,
            trace_decode: cli.trace_decode,
            trace_execute: cli.trace_execute,
            trace_memory: cli.trace_memory,
            trace_writeback: cli.trace_writeback,
            trace_pc: cli.trace_pc,
            trace_gp: cli.trace_gp,
            trace_lo: cli.trace_lo,
            trace_hi: cli.trace_hi,
            dump_registers: cli.dump_registers,
            dump_cache_stats: cli.dump_cache_stats,
            dump_cycles: cli.dump_cycles,
            dump_range: cli.dump_range,
            load_range: cli.load_range,
            expect_fail: cli.expect_fail,
            fail_match: cli.fail_match,
            d_cache: cli.d_cache,
            i_cache: cli.i_cache,
            read_time: cli.read_time,
            write_time: cli.write_time,
            burst_time: cli.burst_time,
        }
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();
    tracing::debug!(?cli, "Command line");

    let flags = Flags::from(cli);
    let mut backend = InspectBackend::new();
    let inspection = match SessionBuilder::new(&flags).run(&mut backend) {
        Ok(inspection) => inspection,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    if let Err(e) = print_report(&inspection) {
        eprintln!("error: cannot write report: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Writes the inspection as pretty-printed JSON on stdout.
fn print_report(inspection: &Inspection) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, inspection)?;
    writeln!(stdout)
}
