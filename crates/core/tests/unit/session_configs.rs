//! # Tracer and Reporter Configuration Tests

use std::collections::BTreeSet;
use std::path::PathBuf;

use mipsim_core::Flags;
use mipsim_core::common::ConfigError;
use mipsim_core::parse::range::DumpRange;
use mipsim_core::parse::trap::{TrapExpectation, TrapKind};
use mipsim_core::report::ReportConfig;
use mipsim_core::trace::TraceConfig;
use pretty_assertions::assert_eq;

use crate::common::{flags_for, program_symbols};

fn all_stage_traces(pipelined: bool) -> Flags {
    Flags {
        pipelined,
        trace_fetch: true,
        trace_decode: true,
        trace_execute: true,
        trace_memory: true,
        trace_writeback: true,
        ..flags_for("prog.elf")
    }
}

#[test]
fn test_default_trace_is_empty() {
    let trace = TraceConfig::from_flags(&flags_for("prog.elf")).unwrap();
    assert!(trace.is_empty());
    assert_eq!(trace, TraceConfig::default());
}

#[test]
fn test_stage_traces_need_pipelined_core() {
    let trace = TraceConfig::from_flags(&all_stage_traces(false)).unwrap();
    assert!(trace.fetch);
    assert!(!trace.decode && !trace.execute && !trace.memory && !trace.writeback);

    let trace = TraceConfig::from_flags(&all_stage_traces(true)).unwrap();
    assert!(trace.fetch && trace.decode && trace.execute && trace.memory && trace.writeback);
}

#[test]
fn test_register_traces() {
    let flags = Flags {
        trace_pc: true,
        trace_lo: true,
        trace_hi: true,
        trace_gp: vec!["4".to_owned(), "5".to_owned()],
        ..flags_for("prog.elf")
    };
    let trace = TraceConfig::from_flags(&flags).unwrap();
    assert!(trace.pc && trace.lo && trace.hi);
    assert_eq!(trace.gp, BTreeSet::from([4, 5]));
    assert!(!trace.is_empty());
}

#[test]
fn test_gp_only_trace_is_not_empty() {
    let flags = Flags {
        trace_gp: vec!["0".to_owned()],
        ..flags_for("prog.elf")
    };
    assert!(!TraceConfig::from_flags(&flags).unwrap().is_empty());
}

#[test]
fn test_bad_register_fails_trace() {
    let flags = Flags {
        trace_gp: vec!["40".to_owned()],
        ..flags_for("prog.elf")
    };
    assert!(matches!(
        TraceConfig::from_flags(&flags),
        Err(ConfigError::UnknownRegister(_))
    ));
}

#[test]
fn test_report_flags() {
    let symbols = program_symbols();
    let flags = Flags {
        dump_registers: true,
        dump_cycles: true,
        fail_match: vec!["a".to_owned()],
        dump_range: vec!["main,16,first.txt".to_owned(), "0x40,8,second.txt".to_owned()],
        ..flags_for("prog.elf")
    };
    let report = ReportConfig::from_flags(&flags, Some(&symbols)).unwrap();
    assert_eq!(
        report,
        ReportConfig {
            registers: true,
            cache_stats: false,
            cycles: true,
            expected_trap: TrapExpectation::Exact(BTreeSet::from([TrapKind::AluUnsupported])),
            dump_ranges: vec![
                DumpRange {
                    start: 0x8002_0000,
                    length: 16,
                    path: PathBuf::from("first.txt"),
                },
                DumpRange {
                    start: 0x40,
                    length: 8,
                    path: PathBuf::from("second.txt"),
                },
            ],
        }
    );
}

#[test]
fn test_report_fails_on_first_bad_range() {
    let flags = Flags {
        dump_range: vec!["0,4,ok.txt".to_owned(), "0x10".to_owned()],
        ..flags_for("prog.elf")
    };
    assert!(matches!(
        ReportConfig::from_flags(&flags, None),
        Err(ConfigError::RangeStartMissing)
    ));
}

#[test]
fn test_report_checks_traps_before_ranges() {
    let flags = Flags {
        fail_match: vec!["x".to_owned()],
        dump_range: vec!["bogus".to_owned()],
        ..flags_for("prog.elf")
    };
    assert!(matches!(
        ReportConfig::from_flags(&flags, None),
        Err(ConfigError::UnknownFailCondition('x'))
    ));
}

#[test]
fn test_report_serializes_expectation() {
    let flags = Flags {
        expect_fail: true,
        ..flags_for("prog.elf")
    };
    let report = ReportConfig::from_flags(&flags, None).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["expected_trap"], "any");
}
