// Curlcast - Shell HTTP Invocation Translator
//
// Copyright (c) 2025 Curlcast contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Request extraction: token stream to dialect-neutral [`HttpRequestSpec`].
//!
//! The extractor scans left to right and recognizes a fixed, small flag
//! vocabulary per dialect. Flags are binary (flag plus exactly one value
//! token) except the PowerShell `-Headers` hashtable, which arrives as a
//! single aggregate token and is split internally.
//!
//! Anything the scanner does not recognize is skipped: a garbled header
//! block or an unknown flag yields a best-effort partial spec rather than
//! a hard failure. The only error is an invocation with no URL.

use crate::dialect::Dialect;
use crate::error::{ExtractError, ExtractResult};
use crate::lex::Token;
use crate::spec::HttpRequestSpec;

/// Extracts a dialect-neutral request spec from a token sequence.
///
/// # Errors
///
/// Returns [`ExtractError::MissingUrl`] when no token satisfies the URL
/// rule for `dialect`.
///
/// # Examples
///
/// ```
/// use curlcast_core::{extract, lex::tokenize, Dialect};
///
/// let tokens = tokenize(
///     "Invoke-WebRequest -Uri 'https://x.com' -Headers @{'A'='1'}",
///     Dialect::PowerShell,
/// );
/// let spec = extract(&tokens, Dialect::PowerShell).unwrap();
/// assert_eq!(spec.url, "https://x.com");
/// assert_eq!(spec.headers, vec![("A".to_string(), "1".to_string())]);
/// ```
pub fn extract(tokens: &[Token], dialect: Dialect) -> ExtractResult<HttpRequestSpec> {
    match dialect {
        Dialect::Posix | Dialect::Cmd => extract_curl(tokens, dialect),
        Dialect::PowerShell => extract_powershell(tokens),
    }
}

fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Shared extraction for the two curl-flavored dialects.
///
/// Recognized flags: `-X`/`--request`, `-H`/`--header`, `-d`/`--data`.
/// The URL is the first otherwise-unclaimed token matching `http(s)://`,
/// bare or quoted.
fn extract_curl(tokens: &[Token], dialect: Dialect) -> ExtractResult<HttpRequestSpec> {
    let mut url: Option<&str> = None;
    let mut method: Option<&str> = None;
    let mut headers: Vec<(String, String)> = Vec::new();
    let mut body: Option<&str> = None;

    let mut i = 0;
    while i < tokens.len() {
        let text = tokens[i].as_str();
        let value = tokens.get(i + 1);
        match text {
            "-X" | "--request" => {
                if let Some(v) = value {
                    method = Some(v.as_str());
                    i += 1;
                }
            }
            "-H" | "--header" => {
                if let Some(v) = value {
                    if let Some(pair) = split_header_line(v.as_str()) {
                        headers.push(pair);
                    }
                    i += 1;
                }
            }
            "-d" | "--data" => {
                if let Some(v) = value {
                    body = Some(v.as_str());
                    i += 1;
                }
            }
            _ => {
                if url.is_none() && is_http_url(text) {
                    url = Some(text);
                }
            }
        }
        i += 1;
    }

    build_spec(url, method, headers, body, dialect)
}

/// Extraction for PowerShell `Invoke-WebRequest` invocations.
///
/// Parameter names match ASCII-case-insensitively, mirroring PowerShell's
/// own parameter binding. When `-Uri` is absent, the first bare
/// `http(s)://` token is used instead.
fn extract_powershell(tokens: &[Token]) -> ExtractResult<HttpRequestSpec> {
    let mut uri: Option<&str> = None;
    let mut fallback_url: Option<&str> = None;
    let mut method: Option<&str> = None;
    let mut headers: Vec<(String, String)> = Vec::new();
    let mut body: Option<&str> = None;

    let mut i = 0;
    while i < tokens.len() {
        let text = tokens[i].as_str();
        let value = tokens.get(i + 1);
        if text.eq_ignore_ascii_case("-uri") {
            if let Some(v) = value {
                uri = Some(v.as_str());
                i += 1;
            }
        } else if text.eq_ignore_ascii_case("-method") {
            if let Some(v) = value {
                method = Some(v.as_str());
                i += 1;
            }
        } else if text.eq_ignore_ascii_case("-headers") {
            if let Some(v) = value {
                headers.extend(split_hashtable(v.as_str()));
                i += 1;
            }
        } else if text.eq_ignore_ascii_case("-body") {
            if let Some(v) = value {
                body = Some(v.as_str());
                i += 1;
            }
        } else if fallback_url.is_none() && !tokens[i].is_quoted() && is_http_url(text) {
            fallback_url = Some(text);
        }
        i += 1;
    }

    build_spec(
        uri.or(fallback_url),
        method,
        headers,
        body,
        Dialect::PowerShell,
    )
}

fn build_spec(
    url: Option<&str>,
    method: Option<&str>,
    headers: Vec<(String, String)>,
    body: Option<&str>,
    dialect: Dialect,
) -> ExtractResult<HttpRequestSpec> {
    let url = url.ok_or(ExtractError::MissingUrl { dialect })?;
    let mut spec = HttpRequestSpec::new(url);
    if let Some(method) = method {
        spec.set_method(method);
    }
    spec.headers = headers;
    spec.body = body.map(str::to_string);
    Ok(spec)
}

/// Splits a `Name: value` header line on the first colon, trimming both
/// sides. Lines without a colon, or with an empty name or value, are
/// dropped.
fn split_header_line(line: &str) -> Option<(String, String)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    let value = value.trim();
    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some((name.to_string(), value.to_string()))
}

/// Splits a `@{ k = v; k2 = v2 }` hashtable token into header pairs.
///
/// Entries split on `;`, then on the first `=`; keys and values are
/// trimmed and stripped of one layer of surrounding quotes. Malformed
/// entries are dropped.
fn split_hashtable(block: &str) -> Vec<(String, String)> {
    let inner = block
        .trim()
        .strip_prefix("@{")
        .and_then(|rest| rest.strip_suffix('}'));
    let inner = match inner {
        Some(inner) => inner,
        None => return Vec::new(),
    };

    inner
        .split(';')
        .filter_map(|entry| {
            let (key, value) = entry.split_once('=')?;
            let key = strip_surrounding_quotes(key.trim());
            let value = strip_surrounding_quotes(value.trim());
            if key.is_empty() || value.is_empty() {
                return None;
            }
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Strips one layer of matching surrounding quotes, if present.
fn strip_surrounding_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'\'' || first == b'"') && bytes[bytes.len() - 1] == first {
            return &s[1..s.len() - 1];
        }
    }
    s
}
