//! Simple TOML parser for badge configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! badge.toml. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - [section] headers
//! - key = integer pairs
//! - Comments (# ...), including trailing ones
//!
//! NOT supported:
//! - Strings, floats, arrays or tables as values
//! - Dotted keys

use breadboard_core::config::AppConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Line is not a key = value pair
    InvalidLine,
    /// Key not recognised in its section
    UnknownKey,
    /// Value is not a non-negative integer that fits
    InvalidValue,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Hexpansion,
    Ui,
}

/// Parse TOML configuration into AppConfig
///
/// Keys not present keep their defaults; the result is sanitized.
pub fn parse_config(input: &str) -> Result<AppConfig, ParseError> {
    let mut config = AppConfig::defaults();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(&mut config, section, key, value)?;
    }

    config.sanitize();
    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "hexpansion" => Ok(Section::Hexpansion),
        "ui" => Ok(Section::Ui),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse an integer value, allowing `_` separators
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    let mut digits: heapless::String<16> = heapless::String::new();
    for c in value.chars().filter(|&c| c != '_') {
        digits.push(c).map_err(|_| ParseError::InvalidValue)?;
    }
    digits.parse().map_err(|_| ParseError::InvalidValue)
}

fn apply_value(
    config: &mut AppConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Hexpansion, "port") => config.port = parse_int(value)?,
        (Section::Hexpansion, "detect_debounce_ms") => config.detect_debounce_ms = parse_int(value)?,
        (Section::Ui, "notice_ms") => config.notice_ms = parse_int(value)?,
        (Section::Ui, "idle_poll_ms") => config.idle_poll_ms = parse_int(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}
