//! Query-string encoding for objectserver requests.
//!
//! Filter expressions contain spaces and comparison operators
//! (`Severity > 0`). Form encoding would turn spaces into `+`; the
//! objectserver expects RFC 3986 percent-encoding, so spaces become `%20`.
//!
//! # Example
//!
//! ```
//! use netcool_client::endpoints::url_encoding::encode_query_value;
//!
//! assert_eq!(encode_query_value("Severity > 0"), "Severity%20%3E%200");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that must be percent-encoded in a query parameter value.
///
/// Commas are left alone so `collist` stays readable in logs.
pub const QUERY_VALUE_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b'/')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode a string for use as a query parameter value.
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE_ENCODE_SET).to_string()
}
