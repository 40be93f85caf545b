//! KMS key identifier recognition
//!
//! A key may be referenced by its bare id, by an alias, or by the full ARN of
//! either. Every pattern is anchored at both ends so partial matches such as
//! `"abc!"` are rejected.

use once_cell::sync::Lazy;
use regex::Regex;

const KEY_ID_PATTERN: &str = r"[a-f0-9-]+";
const ALIAS_PATTERN: &str = r"alias/[a-zA-Z0-9:/_-]+";
// `\d` is Unicode-aware in `regex`, account ids and region suffixes are ASCII only
const ARN_PREFIX_PATTERN: &str = r"arn:aws:kms:([a-z]{2}-(gov-)?[a-z]+-[0-9])?:([0-9]{12}):";

fn compile(pattern: String) -> Regex {
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid KMS key pattern {pattern}: {e}"))
}

static KEY_ID_RE: Lazy<Regex> = Lazy::new(|| compile(format!("^{KEY_ID_PATTERN}$")));

static ALIAS_RE: Lazy<Regex> = Lazy::new(|| compile(format!("^{ALIAS_PATTERN}$")));

static KEY_ARN_RE: Lazy<Regex> =
    Lazy::new(|| compile(format!("^{ARN_PREFIX_PATTERN}key/{KEY_ID_PATTERN}$")));

static ALIAS_ARN_RE: Lazy<Regex> =
    Lazy::new(|| compile(format!("^{ARN_PREFIX_PATTERN}{ALIAS_PATTERN}$")));

/// Whether `key` has the shape of a KMS key id, alias, or ARN
pub fn is_valid_kms_key(key: &str) -> bool {
    KEY_ID_RE.is_match(key)
        || ALIAS_RE.is_match(key)
        || KEY_ARN_RE.is_match(key)
        || ALIAS_ARN_RE.is_match(key)
}
