//! Escaping helpers shared by the formatters and the assertion helpers.

use std::fmt::Write as _;

/// The maximum length of the text produced by [`format_data`].
pub const DATA_BUFFER_SIZE: usize = 1024;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Escape a byte string for embedding in a JSON string literal.
///
/// Quotes and backslashes are prefixed with a backslash and control
/// characters (`0x00..=0x1f` and `0x7f`) are written as `\u00XX`.
/// Every other byte is passed through; invalid UTF-8 sequences are
/// replaced with U+FFFD.
pub fn escape_json(data: impl AsRef<[u8]>) -> String {
    let text = String::from_utf8_lossy(data.as_ref());
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '\x00'..='\x1f' | '\x7f' => {
                let b = ch as u8;
                escaped.push_str("\\u00");
                escaped.push(HEX_DIGITS[(b >> 4) as usize] as char);
                escaped.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
            }
            ch => escaped.push(ch),
        }
    }
    escaped
}

/// Escape a byte string so that it stays on a single terminal line.
///
/// Common control characters use their mnemonic form (`\n`, `\t`, ...),
/// the remaining ones are written as a three-digit decimal code.
pub fn escape_display(data: impl AsRef<[u8]>) -> String {
    let text = String::from_utf8_lossy(data.as_ref());
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\x07' => escaped.push_str("\\a"),
            '\x08' => escaped.push_str("\\b"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\x0b' => escaped.push_str("\\v"),
            '\x0c' => escaped.push_str("\\f"),
            '\r' => escaped.push_str("\\r"),
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '\x00'..='\x1f' | '\x7f' => {
                let _ = write!(escaped, "\\{:03}", ch as u8);
            }
            ch => escaped.push(ch),
        }
    }
    escaped
}

/// Render arbitrary bytes for an assertion diagnostic.
///
/// The rendered text never exceeds [`DATA_BUFFER_SIZE`] bytes. Data that does
/// not fit is a bug in the test itself and terminates the process instead
/// of producing a misleading report.
pub fn format_data(data: impl AsRef<[u8]>) -> String {
    match try_format_data(data.as_ref()) {
        Some(rendered) => rendered,
        None => {
            tracing::error!(len = data.as_ref().len(), "data too large for buffer");
            eprintln!("data too large for buffer");
            std::process::abort();
        }
    }
}

fn try_format_data(data: &[u8]) -> Option<String> {
    let mut rendered = String::with_capacity(DATA_BUFFER_SIZE);
    for &b in data {
        let needed = match b {
            b'"' | b'\\' | b'\r' | b'\n' | b'\t' => 2,
            0x20..=0x7e => 1,
            _ => 4,
        };
        // the last byte of the buffer is reserved for a terminator
        if rendered.len() + needed > DATA_BUFFER_SIZE - 1 {
            return None;
        }
        match b {
            b'"' => rendered.push_str("\\\""),
            b'\\' => rendered.push_str("\\\\"),
            b'\r' => rendered.push_str("\\r"),
            b'\n' => rendered.push_str("\\n"),
            b'\t' => rendered.push_str("\\t"),
            0x20..=0x7e => rendered.push(b as char),
            _ => {
                let _ = write!(rendered, "\\{:03}", b);
            }
        }
    }
    Some(rendered)
}
