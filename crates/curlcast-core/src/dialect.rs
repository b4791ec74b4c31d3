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

//! The closed set of supported command-shell dialects.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A command-shell dialect for HTTP invocations.
///
/// The set is closed: tokenizer, extractor, and serializer all match
/// exhaustively over it, so adding a dialect is a compile-enforced change
/// at every stage of the pipeline.
///
/// # Examples
///
/// ```
/// use curlcast_core::Dialect;
///
/// assert_eq!("powershell".parse::<Dialect>().unwrap(), Dialect::PowerShell);
/// assert_eq!(Dialect::Posix.to_string(), "Posix");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    /// POSIX/Unix shell `curl` syntax.
    Posix,
    /// Windows PowerShell `Invoke-WebRequest` syntax.
    PowerShell,
    /// Windows Command Prompt `curl` syntax.
    Cmd,
}

impl Dialect {
    /// All supported dialects, in declaration order.
    pub const ALL: [Dialect; 3] = [Dialect::Posix, Dialect::PowerShell, Dialect::Cmd];

    /// The line-continuation marker for this dialect.
    ///
    /// A marker immediately followed by a line break is collapsed to a
    /// single space before tokenizing. This is the only multi-line syntax
    /// the tokenizer understands.
    pub(crate) fn continuation_marker(self) -> char {
        match self {
            Dialect::Posix => '\\',
            Dialect::PowerShell => '`',
            Dialect::Cmd => '^',
        }
    }

    /// Best-effort guess of the dialect a raw invocation is written in.
    ///
    /// `Invoke-WebRequest` commands are unambiguous. A `curl` command is
    /// assumed to be Cmd when it carries a caret line continuation and
    /// Posix otherwise. Anything else returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use curlcast_core::Dialect;
    ///
    /// assert_eq!(
    ///     Dialect::detect("Invoke-WebRequest -Uri 'https://x.com'"),
    ///     Some(Dialect::PowerShell)
    /// );
    /// assert_eq!(Dialect::detect("curl 'https://x.com'"), Some(Dialect::Posix));
    /// assert_eq!(Dialect::detect("curl \"https://x.com\" ^\n -X POST"), Some(Dialect::Cmd));
    /// assert_eq!(Dialect::detect("wget https://x.com"), None);
    /// ```
    pub fn detect(input: &str) -> Option<Dialect> {
        const COMMAND: &str = "invoke-webrequest";
        let trimmed = input.trim_start();
        let is_invoke_webrequest = trimmed
            .get(..COMMAND.len())
            .map_or(false, |prefix| prefix.eq_ignore_ascii_case(COMMAND));
        if is_invoke_webrequest {
            return Some(Dialect::PowerShell);
        }
        if trimmed.starts_with("curl") {
            if trimmed.contains("^\r\n") || trimmed.contains("^\n") {
                return Some(Dialect::Cmd);
            }
            return Some(Dialect::Posix);
        }
        None
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Posix => write!(f, "Posix"),
            Dialect::PowerShell => write!(f, "PowerShell"),
            Dialect::Cmd => write!(f, "Cmd"),
        }
    }
}

/// Error returned when parsing an unrecognized dialect name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dialect '{0}' (expected posix, powershell, or cmd)")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "posix" | "unix" | "sh" | "bash" => Ok(Dialect::Posix),
            "powershell" | "pwsh" | "ps" => Ok(Dialect::PowerShell),
            "cmd" | "bat" | "batch" => Ok(Dialect::Cmd),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}
