//! Request path validation.
//!
//! A patch request is `/<timestamp>`: exactly one non-empty segment holding a
//! base-10 `u64`. The path is percent-decoded before it is split, so `%2F`
//! counts as a separator.

use percent_encoding::percent_decode_str;

use crate::patches::PatchError;

/// Extract the requested timestamp from a request path.
///
/// Fails with [`PatchError::NotFound`] when the path is not a single
/// non-empty segment and with [`PatchError::InvalidArgument`] when that
/// segment is not an unsigned 64-bit decimal. A path that does not decode
/// to UTF-8 is an invalid argument.
pub fn parse_timestamp_path(path: &str) -> Result<u64, PatchError> {
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map_err(|_| PatchError::InvalidArgument(path.trim_start_matches('/').to_string()))?;

    let mut segments = decoded.split('/');

    // Anything before the leading separator must be empty.
    if segments.next() != Some("") {
        return Err(PatchError::NotFound);
    }

    let arg = match (segments.next(), segments.next()) {
        (Some(arg), None) if !arg.is_empty() => arg,
        _ => return Err(PatchError::NotFound),
    };

    parse_timestamp(arg)
}

/// Parse a single timestamp token.
pub fn parse_timestamp(token: &str) -> Result<u64, PatchError> {
    // u64::from_str also takes a leading '+'.
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PatchError::InvalidArgument(token.to_string()));
    }

    token
        .parse::<u64>()
        .map_err(|_| PatchError::InvalidArgument(token.to_string()))
}
