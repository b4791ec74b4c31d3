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

//! Line-continuation normalization.
//!
//! Each dialect has one continuation marker (`\` for Posix, `` ` `` for
//! PowerShell, `^` for Cmd). A marker immediately followed by a line break
//! collapses to a single space; everything else passes through untouched.

use crate::dialect::Dialect;

/// Collapses `<marker>\n` / `<marker>\r\n` sequences to a single space.
///
/// This is the only multi-line handling the tokenizer performs. A marker
/// not followed by a line break is an ordinary character.
///
/// # Examples
///
/// ```
/// use curlcast_core::{lex::normalize_continuations, Dialect};
///
/// let cmd = "curl \"https://x.com\" ^\n -X POST";
/// assert_eq!(
///     normalize_continuations(cmd, Dialect::Cmd),
///     "curl \"https://x.com\"   -X POST"
/// );
/// ```
pub fn normalize_continuations(text: &str, dialect: Dialect) -> String {
    let marker = dialect.continuation_marker();
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != marker {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('\n') => {
                chars.next();
                out.push(' ');
            }
            Some('\r') => {
                // Consume a full \r\n pair after the marker; a lone \r
                // is left in place.
                let mut lookahead = chars.clone();
                lookahead.next();
                if lookahead.peek() == Some(&'\n') {
                    chars.next();
                    chars.next();
                    out.push(' ');
                } else {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }

    out
}
