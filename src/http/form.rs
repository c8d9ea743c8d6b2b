//! URL-encoded form parsing for captured requests.
//!
//! Body values come first, then query values for the same key.
//! Only url-encoded bodies are decoded; other media types contribute
//! nothing. A bad escape or malformed media type is an error, and the
//! caller decides how to degrade.

use std::collections::BTreeMap;

use thiserror::Error;

use super::HttpRequest;

/// Parsed form: key → values, in key order.
pub type Form = BTreeMap<String, Vec<String>>;

const URLENCODED: &str = "application/x-www-form-urlencoded";
const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing form body")]
    MissingBody,

    #[error("form body too large ({size} bytes, limit {limit})")]
    TooLarge { size: usize, limit: usize },

    #[error("invalid media type: {0:?}")]
    InvalidMediaType(String),

    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),

    #[error("invalid semicolon separator in query")]
    Semicolon,
}

impl HttpRequest {
    /// Parse the url-encoded body (for POST, PUT and PATCH) and the URL query.
    ///
    /// `limit` bounds the body size accepted for decoding.
    pub fn parse_form(&self, limit: usize) -> Result<Form, FormError> {
        let mut form = Form::new();

        if has_form_body(&self.method) {
            let body = self.body.as_ref().ok_or(FormError::MissingBody)?;
            let media_type = media_type(self.header("Content-Type").unwrap_or(DEFAULT_MEDIA_TYPE))?;
            if media_type == URLENCODED {
                if body.len() > limit {
                    return Err(FormError::TooLarge {
                        size: body.len(),
                        limit,
                    });
                }
                parse_query_into(&body.text(), &mut form)?;
            }
        }

        if let Some(query) = self.query() {
            parse_query_into(query, &mut form)?;
        }

        Ok(form)
    }
}

fn has_form_body(method: &str) -> bool {
    matches!(method, "POST" | "PUT" | "PATCH")
}

/// Lowercased `type/subtype` with parameters stripped.
fn media_type(content_type: &str) -> Result<String, FormError> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    let valid = essence
        .split_once('/')
        .is_some_and(|(ty, sub)| is_token(ty) && is_token(sub));
    if valid {
        Ok(essence)
    } else {
        Err(FormError::InvalidMediaType(content_type.to_string()))
    }
}

fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?=".contains(&b))
}

/// Decode `a=1&b=2` pairs, appending to existing keys.
pub fn parse_query_into(query: &str, form: &mut Form) -> Result<(), FormError> {
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        if pair.contains(';') {
            return Err(FormError::Semicolon);
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = unescape(key)?;
        let value = unescape(value)?;
        form.entry(key).or_default().push(value);
    }
    Ok(())
}

/// Decode `+` and `%XX` escapes.
fn unescape(s: &str) -> Result<String, FormError> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let hi = bytes.get(i + 1).copied().and_then(hex_value);
                let lo = bytes.get(i + 2).copied().and_then(hex_value);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
                    _ => {
                        let end = (i + 3).min(bytes.len());
                        let escape = String::from_utf8_lossy(&bytes[i..end]).into_owned();
                        return Err(FormError::InvalidEscape(escape));
                    }
                }
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
