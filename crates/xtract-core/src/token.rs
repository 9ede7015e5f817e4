//! Legend token grammar.
//!
//! ```text
//! token         := [':'] name_part ['<' index_literal '>']
//! index_literal := one or more decimal digits, 1-based
//! ```

use xtract_model::{LegendError, PathSegment};

/// Parse one whitespace-free legend token into a path segment.
///
/// A leading `:` marks the name as namespace-qualified. A trailing `<N>`
/// selects the N-th matching sibling and is stored zero-based.
pub fn parse_token(token: &str) -> Result<PathSegment, LegendError> {
    let mut name = token;

    let has_namespace = name.starts_with(':');
    if has_namespace {
        name = name.trim_start_matches(':');
    }

    let mut occurrence_index = 0;
    if name.ends_with('>') {
        let open = name
            .find('<')
            .ok_or_else(|| LegendError::MissingIndexOpen {
                token: token.to_string(),
            })?;
        let literal = name[open..].trim_start_matches('<').trim_end_matches('>');
        let invalid = || LegendError::InvalidIndex {
            token: token.to_string(),
            literal: literal.to_string(),
        };
        if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let ordinal: usize = literal.parse().map_err(|_| invalid())?;
        occurrence_index = ordinal
            .checked_sub(1)
            .ok_or_else(|| LegendError::ZeroIndex {
                token: token.to_string(),
            })?;
        name = &name[..open];
    }

    Ok(PathSegment {
        name: name.to_string(),
        has_namespace,
        occurrence_index,
        raw_token: token.to_string(),
    })
}
