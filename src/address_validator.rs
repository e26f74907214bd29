//! Wallet address format checks.
//!
//! A fixed allowlist of chain-specific patterns. This only checks shape; it
//! does not verify checksums.

use crate::errors::AppError;
use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_ADDRESS_LENGTH: usize = 256;

pub const EMPTY_ADDRESS_MESSAGE: &str = "請輸入錢包地址";
pub const ADDRESS_TOO_LONG_MESSAGE: &str = "地址長度過長";
pub const UNSUPPORTED_ADDRESS_MESSAGE: &str = "地址格式錯誤或尚未支援的鏈別";

/// One blockchain address family.
#[derive(Debug)]
pub struct ChainPattern {
    pub label: &'static str,
    pub regex: Regex,
}

const PATTERN_SOURCES: &[(&str, &str)] = &[
    ("EVM", r"(?i)^0x[a-f0-9]{40}$"),
    ("Bitcoin bech32", r"^(bc1|tb1|bcrt1)[0-9a-z]{11,71}$"),
    ("Bitcoin legacy", r"^[13][a-km-zA-HJ-NP-Z1-9]{25,34}$"),
    ("Bitcoin cash", r"^(q|p)[a-z0-9]{41}$"),
    ("Litecoin bech32", r"^(ltc1)[0-9a-z]{11,71}$"),
    ("Litecoin legacy", r"^[LM3][a-km-zA-HJ-NP-Z1-9]{25,34}$"),
    ("Tron", r"^T[1-9A-HJ-NP-Za-km-z]{33}$"),
    ("Solana", r"^[1-9A-HJ-NP-Za-km-z]{32,44}$"),
    ("Dogecoin", r"^D[5-9A-HJ-NP-U][1-9A-HJ-NP-Za-km-z]{32}$"),
    ("Bech32 generic", r"^[a-z0-9]{1,83}1[ac-hj-np-z02-9]{6,}$"),
];

static CHAIN_PATTERNS: Lazy<Vec<ChainPattern>> = Lazy::new(|| {
    PATTERN_SOURCES
        .iter()
        .filter_map(|&(label, source)| match Regex::new(source) {
            Ok(regex) => Some(ChainPattern { label, regex }),
            Err(e) => {
                tracing::error!("Invalid address pattern for {}: {}", label, e);
                None
            }
        })
        .collect()
});

/// Registered chain patterns, in match order.
pub fn chain_patterns() -> &'static [ChainPattern] {
    &CHAIN_PATTERNS
}

/// A trimmed address that matched at least one chain pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressCandidate {
    pub address: String,
    /// Label of the first pattern that matched.
    pub chain: &'static str,
}

/// Validate a raw wallet address.
///
/// Trims the input, then rejects it when empty, longer than
/// [`MAX_ADDRESS_LENGTH`] characters, or matching none of the chain patterns.
pub fn validate_address(input: &str) -> Result<AddressCandidate, AppError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(AppError::Validation(EMPTY_ADDRESS_MESSAGE.to_string()));
    }

    if trimmed.chars().count() > MAX_ADDRESS_LENGTH {
        return Err(AppError::Validation(ADDRESS_TOO_LONG_MESSAGE.to_string()));
    }

    let pattern = chain_patterns()
        .iter()
        .find(|pattern| pattern.regex.is_match(trimmed))
        .ok_or_else(|| AppError::Validation(UNSUPPORTED_ADDRESS_MESSAGE.to_string()))?;

    tracing::debug!("Address matched {} pattern", pattern.label);

    Ok(AddressCandidate {
        address: trimmed.to_string(),
        chain: pattern.label,
    })
}

/// True for a `0x`-prefixed 40-digit hex address, in any letter case.
pub fn is_evm_address(address: &str) -> bool {
    chain_patterns()
        .iter()
        .find(|pattern| pattern.label == "EVM")
        .is_some_and(|pattern| pattern.regex.is_match(address))
}
