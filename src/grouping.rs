//! Bank-name classification.
//!
//! The naming convention packs the bank into the asset's display name:
//! `"{bank}{delimiter}{member}"`. Classification is a pure function of the
//! name and the configured delimiter, with a strict ambiguity rule: the
//! delimiter may appear at most once. A name with two or more occurrences
//! fails loudly instead of guessing which occurrence is the separator, since
//! a wrong guess would silently misfile the asset or corrupt its clean name.

use crate::asset::Asset;
use crate::error::{BankrollError, Result};

/// Outcome of classifying an asset name against the bank delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankScope {
    /// The name contains no delimiter. The asset stays out of every bank;
    /// this is a legitimate classification, not an error.
    Standalone,
    /// The name contains exactly one delimiter. Both halves are trimmed of
    /// surrounding whitespace.
    Member { bank: String, member: String },
}

/// Classify an asset's current name against the delimiter.
///
/// Fails with [`BankrollError::AmbiguousDelimiter`] when the delimiter
/// occurs more than once, and with [`BankrollError::EmptyDelimiter`] when
/// the delimiter is empty (splitting on nothing is meaningless).
pub fn classify(asset: &Asset, delimiter: &str) -> Result<BankScope> {
    if delimiter.is_empty() {
        return Err(BankrollError::EmptyDelimiter);
    }

    let components: Vec<&str> = asset.name().split(delimiter).collect();
    match components.as_slice() {
        [_] => Ok(BankScope::Standalone),
        [bank, member] => Ok(BankScope::Member {
            bank: bank.trim().to_string(),
            member: member.trim().to_string(),
        }),
        _ => Err(BankrollError::AmbiguousDelimiter {
            kind: asset.kind(),
            name: asset.name().to_string(),
        }),
    }
}
