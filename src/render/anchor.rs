//! Row anchors.
//!
//! Row ids are the raw titles. The "link here" href percent-encodes the
//! title with the same set as JavaScript's `encodeURI`: URI reserved and
//! unreserved characters (and `#`) pass through, everything else is
//! encoded as UTF-8 bytes.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'#');

/// Percent-encode a title for use in a URL fragment.
#[must_use]
pub fn encode_title(title: &str) -> String {
    utf8_percent_encode(title, URI).to_string()
}
