//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, RuleLocation};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UndefinedRuleSet {
            name: "numbers".to_string(),
        },
        RuleLocation::new("root", 4),
    );

    assert_eq!(error.get_error_name(), "UndefinedRuleSet");
}

#[test]
fn test_error_location() {
    let error = Error::new(
        ErrorImpl::InvalidPattern {
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        },
        RuleLocation::new("name", 1),
    );

    assert_eq!(error.get_location().rule_set, "name");
    assert_eq!(error.get_location().index, 1);
    assert_eq!(error.get_location().to_string(), "name[1]");
}

#[test]
fn test_cyclic_include_error() {
    let error = Error::new(
        ErrorImpl::CyclicInclude {
            chain: vec!["root".to_string(), "a".to_string(), "root".to_string()],
        },
        RuleLocation::new("a", 0),
    );

    assert_eq!(error.get_error_name(), "CyclicInclude");
    assert_eq!(
        error.to_string(),
        "cyclic include: root -> a -> root at a[0]"
    );
}

#[test]
fn test_serialization_error() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = Error::from(json_error);

    assert_eq!(error.get_error_name(), "Serialization");
    assert_eq!(error.get_location(), &RuleLocation::null());
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::Serialization {
            message: "broken pipe".to_string(),
        },
        RuleLocation::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UndefinedRuleSet {
            name: "keyword".to_string(),
        },
        RuleLocation::new("root", 12),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`keyword`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_cyclic_include_tip_names_the_chain() {
    let error = Error::new(
        ErrorImpl::CyclicInclude {
            chain: vec!["root".to_string(), "root".to_string()],
        },
        RuleLocation::new("root", 0),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Rule-set `root` includes itself through `root -> root`"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_source() {
    use std::error::Error as _;

    let error = Error::new(
        ErrorImpl::UndefinedRuleSet {
            name: "x".to_string(),
        },
        RuleLocation::null(),
    );

    assert_eq!(
        error.source().unwrap().to_string(),
        "include of undefined rule-set \"x\""
    );
}
