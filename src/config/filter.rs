use crate::engine::SymbolFilter;
use crate::errors::SimcheckError;
use super::types::{CodePointRange, FilterConfig, FilterPreset};

/// Build the symbol predicate described by a filter section.
///
/// `pattern` and `ranges` take precedence over `preset`; the parser rejects
/// configs that set both.
pub fn build_filter(config: &FilterConfig) -> Result<SymbolFilter, SimcheckError> {
    if let Some(pattern) = &config.pattern {
        return Ok(SymbolFilter::pattern(pattern)?);
    }

    if let Some(ranges) = &config.ranges {
        let parsed = ranges
            .iter()
            .map(parse_range)
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(SymbolFilter::Ranges(parsed));
    }

    Ok(match config.preset.unwrap_or_default() {
        FilterPreset::Cjk => SymbolFilter::cjk(),
        FilterPreset::Alphanumeric => SymbolFilter::Alphanumeric,
        FilterPreset::NonWhitespace => SymbolFilter::NonWhitespace,
    })
}

pub fn parse_range(range: &CodePointRange) -> Result<std::ops::RangeInclusive<char>, SimcheckError> {
    let start = parse_code_point(&range.start)?;
    let end = parse_code_point(&range.end)?;
    if start > end {
        return Err(SimcheckError::Config(format!(
            "Range start {} is after end {}",
            range.start, range.end
        )));
    }
    Ok(start..=end)
}

/// Accepts `U+4E00`, `0x4E00`, bare hex `4E00`, or a single literal character.
pub fn parse_code_point(value: &str) -> Result<char, SimcheckError> {
    let trimmed = value.trim();

    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if !c.is_ascii_hexdigit() {
            return Ok(c);
        }
    }

    let hex = trimmed
        .strip_prefix("U+")
        .or_else(|| trimmed.strip_prefix("u+"))
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| SimcheckError::Config(format!("Invalid code point: {}", value)))
}
