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

//! The end-to-end translation pipeline.

use crate::error::{TranslateError, TranslateResult};
use curlcast_core::{extract, lex::tokenize, Dialect, HttpRequestSpec};
use curlcast_render::serialize;

/// Returns `true` when a direct conversion path exists for the pair.
///
/// Every pair involving `Posix` is supported, as is same-dialect
/// normalization. `PowerShell <-> Cmd` has no direct path.
pub fn is_supported_pair(source: Dialect, target: Dialect) -> bool {
    source == target || source == Dialect::Posix || target == Dialect::Posix
}

/// Tokenizes and extracts `input` under `dialect` in one step.
///
/// # Errors
///
/// Returns [`TranslateError::Extract`] when no URL can be found.
///
/// # Examples
///
/// ```
/// use curlcast::{parse_invocation, Dialect};
///
/// let spec = parse_invocation("curl 'https://x.com' -X PUT", Dialect::Posix).unwrap();
/// assert_eq!(spec.method, "PUT");
/// ```
pub fn parse_invocation(input: &str, dialect: Dialect) -> TranslateResult<HttpRequestSpec> {
    let tokens = tokenize(input, dialect);
    Ok(extract(&tokens, dialect)?)
}

/// Translates an HTTP invocation from one shell dialect to another.
///
/// The conversion is pure text rewriting: nothing is executed, and
/// repeated calls with the same input are idempotent.
///
/// # Errors
///
/// - [`TranslateError::UnsupportedPair`] when no direct path exists
///   (`PowerShell <-> Cmd`).
/// - [`TranslateError::Extract`] when the input has no recognizable URL.
///
/// # Examples
///
/// ```
/// use curlcast::{translate, Dialect};
///
/// let out = translate(
///     "Invoke-WebRequest -Uri 'https://x.com' -Method GET -Headers @{'Authorization'='Bearer t'}",
///     Dialect::PowerShell,
///     Dialect::Posix,
/// )
/// .unwrap();
/// assert_eq!(out, "curl 'https://x.com' -H \"Authorization: Bearer t\"");
/// ```
pub fn translate(input: &str, source: Dialect, target: Dialect) -> TranslateResult<String> {
    if !is_supported_pair(source, target) {
        return Err(TranslateError::UnsupportedPair {
            from: source,
            to: target,
        });
    }
    let spec = parse_invocation(input, source)?;
    Ok(serialize(&spec, target))
}
