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

//! The quote-aware token scanner.

use crate::dialect::Dialect;
use crate::lex::normalize::normalize_continuations;

/// A single shell token with its outer quote layer already stripped.
///
/// The original quote character is retained so the extractor can tell a
/// bare `https://...` token from a quoted one where a dialect cares about
/// the difference.
///
/// # Examples
///
/// ```
/// use curlcast_core::{lex::tokenize, Dialect};
///
/// let tokens = tokenize("curl 'https://x.com'", Dialect::Posix);
/// assert_eq!(tokens[1].as_str(), "https://x.com");
/// assert_eq!(tokens[1].quote(), Some('\''));
/// assert!(tokens[0].quote().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    quote: Option<char>,
}

impl Token {
    pub(crate) fn bare(text: String) -> Self {
        Self { text, quote: None }
    }

    pub(crate) fn quoted(text: String, quote: char) -> Self {
        Self {
            text,
            quote: Some(quote),
        }
    }

    /// The token text with outer quotes stripped.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The outer quote character, if the token was wholly quoted.
    #[inline]
    pub fn quote(&self) -> Option<char> {
        self.quote
    }

    /// Returns `true` when the token was wrapped in quotes in the source.
    #[inline]
    pub fn is_quoted(&self) -> bool {
        self.quote.is_some()
    }

    /// Consumes the token, yielding its text.
    #[inline]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Splits a raw invocation into tokens under `dialect`'s quoting rules.
///
/// Never fails: unterminated quotes degrade to literal characters and the
/// rest of the run is taken verbatim up to the next whitespace.
///
/// # Examples
///
/// ```
/// use curlcast_core::{lex::tokenize, Dialect};
///
/// // CMD doubled quotes decode to one literal quote.
/// let tokens = tokenize(r#"curl -d "{""k"":""v""}""#, Dialect::Cmd);
/// assert_eq!(tokens[2].as_str(), r#"{"k":"v"}"#);
///
/// // A PowerShell hashtable is one aggregate token, spaces and all.
/// let tokens = tokenize("-Headers @{ 'A'='1'; 'B'='2' }", Dialect::PowerShell);
/// assert_eq!(tokens.len(), 2);
/// assert!(tokens[1].as_str().starts_with("@{"));
/// ```
pub fn tokenize(text: &str, dialect: Dialect) -> Vec<Token> {
    let normalized = normalize_continuations(text, dialect);
    let chars: Vec<char> = normalized.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c == '\'' || c == '"' {
            if let Some((content, next)) = scan_quoted(&chars, i) {
                tokens.push(Token::quoted(content, c));
                i = next;
            } else {
                // Unterminated quote: take the run verbatim, quote included.
                let (content, next) = scan_verbatim(&chars, i);
                tokens.push(Token::bare(content));
                i = next;
            }
            continue;
        }

        if c == '@' && chars.get(i + 1) == Some(&'{') {
            let (content, next) = scan_hashtable(&chars, i);
            tokens.push(Token::bare(content));
            i = next;
            continue;
        }

        let (content, next) = scan_bare(&chars, i);
        tokens.push(Token::bare(content));
        i = next;
    }

    tokens
}

/// Scans a quoted run starting at the opening quote.
///
/// Inside a double-quoted run every `""` pair decodes to one literal `"`;
/// only a lone `"` closes the run. Returns `None` when no closing quote
/// exists.
fn scan_quoted(chars: &[char], start: usize) -> Option<(String, usize)> {
    let quote = chars[start];
    let mut content = String::new();
    let mut j = start + 1;

    while j < chars.len() {
        let c = chars[j];
        if c == quote {
            if quote == '"' && chars.get(j + 1) == Some(&'"') {
                content.push('"');
                j += 2;
                continue;
            }
            return Some((content, j + 1));
        }
        content.push(c);
        j += 1;
    }

    None
}

/// Scans a bare run, stopping at whitespace or a quote character.
fn scan_bare(chars: &[char], start: usize) -> (String, usize) {
    let mut j = start;
    let mut content = String::new();
    while j < chars.len() {
        let c = chars[j];
        if c.is_whitespace() || c == '\'' || c == '"' {
            break;
        }
        content.push(c);
        j += 1;
    }
    (content, j)
}

/// Scans a run up to the next whitespace, quotes included.
///
/// Fallback for unterminated quotes, where strict token boundaries no
/// longer apply.
fn scan_verbatim(chars: &[char], start: usize) -> (String, usize) {
    let mut j = start;
    let mut content = String::new();
    while j < chars.len() && !chars[j].is_whitespace() {
        content.push(chars[j]);
        j += 1;
    }
    (content, j)
}

/// Scans an `@{...}` hashtable block to its closing brace, inclusive.
///
/// Interior whitespace does not split the block; the extractor receives it
/// as one aggregate token. With no closing brace the rest of the input is
/// taken.
fn scan_hashtable(chars: &[char], start: usize) -> (String, usize) {
    let mut j = start;
    let mut content = String::new();
    while j < chars.len() {
        let c = chars[j];
        content.push(c);
        j += 1;
        if c == '}' {
            break;
        }
    }
    (content, j)
}
