use std::fmt::Display;

use thiserror::Error;

/// Where in the rule table an error was detected: the rule-set and the index
/// of the offending definition inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLocation {
    pub rule_set: String,
    pub index: usize,
}

impl RuleLocation {
    pub fn new(rule_set: &str, index: usize) -> Self {
        RuleLocation {
            rule_set: rule_set.to_string(),
            index,
        }
    }

    /// Location of problems that belong to no rule, such as a missing entry
    /// rule-set or a rendering failure.
    pub fn null() -> Self {
        RuleLocation {
            rule_set: String::from("<null>"),
            index: 0,
        }
    }
}

impl Display for RuleLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.rule_set, self.index)
    }
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    location: RuleLocation,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, location: RuleLocation) -> Self {
        Error {
            internal_error: error_impl,
            location,
        }
    }

    pub fn get_location(&self) -> &RuleLocation {
        &self.location
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UndefinedRuleSet { .. } => "UndefinedRuleSet",
            ErrorImpl::CyclicInclude { .. } => "CyclicInclude",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::Serialization { .. } => "Serialization",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UndefinedRuleSet { name } => ErrorTip::Suggestion(format!(
                "No rule-set named `{}`, is the include misspelled?",
                name
            )),
            ErrorImpl::CyclicInclude { chain } => ErrorTip::Suggestion(format!(
                "Rule-set `{}` includes itself through `{}`",
                chain.last().map(String::as_str).unwrap_or_default(),
                chain.join(" -> ")
            )),
            ErrorImpl::InvalidPattern { pattern, .. } => {
                ErrorTip::Suggestion(format!("Check the regular expression `{}`", pattern))
            }
            ErrorImpl::Serialization { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.location)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(
            ErrorImpl::Serialization {
                message: err.to_string(),
            },
            RuleLocation::null(),
        )
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("include of undefined rule-set {name:?}")]
    UndefinedRuleSet { name: String },
    #[error("cyclic include: {}", .chain.join(" -> "))]
    CyclicInclude { chain: Vec<String> },
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("error serializing tokens: {message}")]
    Serialization { message: String },
}
