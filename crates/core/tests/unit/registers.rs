//! # Register Trace List Tests

use mipsim_core::common::ConfigError;
use mipsim_core::parse::register::parse_register_list;
use rstest::rstest;

#[test]
fn test_star_selects_all_registers() {
    let registers = parse_register_list(["*"]).unwrap();
    assert_eq!(registers.len(), 32);
    assert_eq!(registers.first(), Some(&0));
    assert_eq!(registers.last(), Some(&31));
}

#[test]
fn test_values_accumulate_without_duplicates() {
    let registers = parse_register_list(["2", "*", "31", "2"]).unwrap();
    assert_eq!(registers.len(), 32);

    let registers = parse_register_list(vec!["8".to_owned(), "9".to_owned()]).unwrap();
    assert_eq!(registers.into_iter().collect::<Vec<_>>(), vec![8, 9]);
}

#[test]
fn test_index_past_last_register_is_accepted() {
    let registers = parse_register_list(["32"]).unwrap();
    assert!(registers.contains(&32));
}

#[test]
fn test_no_values() {
    assert!(parse_register_list::<_, &str>([]).unwrap().is_empty());
}

#[rstest]
#[case("33")]
#[case("256")]
#[case("-1")]
#[case("+4")]
#[case("r4")]
#[case("")]
#[case("**")]
fn test_rejected_tokens(#[case] token: &str) {
    let err = parse_register_list(["1", token]).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownRegister(ref t) if t == token));
    assert_eq!(
        err.to_string(),
        format!("Unknown register number given for trace-gp: {token}")
    );
}
