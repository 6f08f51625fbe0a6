use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

pub const ALPHA_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALPHA_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";

/// Selects which alphabetic subsets end up in a pool.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum CaseMode {
    Upper,
    Lower,
    #[default]
    Both,
}

impl CaseMode {
    /// Permissive parse: anything that is not exactly `upper` or `lower` is `Both`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "upper" => Self::Upper,
            "lower" => Self::Lower,
            _ => Self::Both,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Both => "both",
        }
    }
}

impl From<String> for CaseMode {
    fn from(token: String) -> Self {
        Self::from_token(&token)
    }
}

/// Strict parse, used where a typo should be reported instead of swallowed.
impl FromStr for CaseMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            "both" => Ok(Self::Both),
            other => Err(Error::InvalidCaseMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for CaseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the three generators a request maps to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Alpha,
    Numeric,
    #[default]
    #[serde(alias = "alpha_numeric")]
    AlphaNumeric,
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alpha" => Ok(Self::Alpha),
            "numeric" => Ok(Self::Numeric),
            "alphanumeric" | "alpha_numeric" => Ok(Self::AlphaNumeric),
            other => Err(Error::InvalidKind(other.to_string())),
        }
    }
}

fn digits_if(include_digits: bool) -> &'static str {
    if include_digits {
        DIGITS
    } else {
        ""
    }
}

/// Builds the sampling alphabet for `mode`.
///
/// In `Both` mode the digit block is placed before, between and after the
/// letter blocks, so an alphanumeric pool holds 30 digits against 52 letters
/// and digits are drawn roughly 36.6% of the time. Callers rely on that
/// weighting; keep it.
pub fn pool(mode: CaseMode, include_digits: bool) -> String {
    let digits = digits_if(include_digits);
    match mode {
        CaseMode::Upper => [ALPHA_UPPER, digits].concat(),
        CaseMode::Lower => [ALPHA_LOWER, digits].concat(),
        CaseMode::Both => [digits, ALPHA_UPPER, digits, ALPHA_LOWER, digits].concat(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn upper_and_lower_pools_append_digits() {
        assert_eq!(pool(CaseMode::Upper, false).as_str(), ALPHA_UPPER);
        assert_eq!(pool(CaseMode::Lower, false).as_str(), ALPHA_LOWER);
        assert_eq!(
            pool(CaseMode::Upper, true).as_str(),
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"
        );
        assert_eq!(
            pool(CaseMode::Lower, true).as_str(),
            "abcdefghijklmnopqrstuvwxyz0123456789"
        );
    }

    #[test]
    fn both_pool_interleaves_three_digit_blocks() {
        let p = pool(CaseMode::Both, true);
        assert_eq!(p.len(), 82);
        assert_eq!(p.chars().filter(char::is_ascii_digit).count(), 30);
        assert_eq!(
            p,
            format!("{DIGITS}{ALPHA_UPPER}{DIGITS}{ALPHA_LOWER}{DIGITS}")
        );
        assert_eq!(pool(CaseMode::Both, false), format!("{ALPHA_UPPER}{ALPHA_LOWER}"));
    }

    #[test]
    fn unknown_tokens_fall_back_to_both() {
        assert_eq!(CaseMode::from_token("upper"), CaseMode::Upper);
        assert_eq!(CaseMode::from_token("lower"), CaseMode::Lower);
        assert_eq!(CaseMode::from_token("middle"), CaseMode::Both);
        assert_eq!(CaseMode::from_token("UPPER"), CaseMode::Both);
        assert_eq!(CaseMode::from_token(""), CaseMode::Both);
    }

    #[test]
    fn strict_parse_rejects_unknown_tokens() {
        assert_eq!("lower".parse::<CaseMode>().ok(), Some(CaseMode::Lower));
        assert!(matches!(
            "middle".parse::<CaseMode>(),
            Err(Error::InvalidCaseMode(t)) if t == "middle"
        ));
        assert_eq!("alpha_numeric".parse::<Kind>().ok(), Some(Kind::AlphaNumeric));
        assert!("hex".parse::<Kind>().is_err());
    }

    #[test]
    fn case_mode_deserializes_permissively() {
        let mode: CaseMode = serde_yaml::from_str("middle").unwrap();
        assert_eq!(mode, CaseMode::Both);
        let mode: CaseMode = serde_yaml::from_str("upper").unwrap();
        assert_eq!(mode, CaseMode::Upper);
    }
}
