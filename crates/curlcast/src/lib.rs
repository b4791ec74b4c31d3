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

//! # Curlcast - Shell HTTP Invocation Translator
//!
//! Curlcast rewrites a textual HTTP(S) request command between three
//! command-shell dialects: POSIX/Unix shell `curl`, Windows PowerShell
//! `Invoke-WebRequest`, and Windows Command Prompt `curl`.
//!
//! Each conversion is a pure function over text: tokenize under the source
//! dialect's quoting rules, extract a dialect-neutral [`HttpRequestSpec`],
//! and re-serialize with the target dialect's flag names and quoting. No
//! request is ever executed.
//!
//! ## Quick Start
//!
//! ```rust
//! use curlcast::{translate, Dialect};
//!
//! let posix = r#"curl -X POST 'https://api.example.com/data' -H 'Content-Type: application/json' -d '{"key":"value"}'"#;
//! let ps = translate(posix, Dialect::Posix, Dialect::PowerShell).unwrap();
//!
//! assert_eq!(
//!     ps,
//!     r#"Invoke-WebRequest -Uri 'https://api.example.com/data' -Method POST -Headers @{'Content-Type'='application/json'} -Body '{"key":"value"}'"#
//! );
//! ```
//!
//! ## Supported directions
//!
//! `Posix <-> PowerShell` and `Posix <-> Cmd`. There is no direct
//! `PowerShell <-> Cmd` path; [`translate`] returns a typed
//! [`TranslateError::UnsupportedPair`] for it, and callers who need that
//! direction chain through `Posix` explicitly. Same-dialect translation is
//! allowed and acts as a normalizer.
//!
//! ## Modules
//!
//! - [`curlcast_core`] (re-exported here): dialect model, tokenizer,
//!   extractor
//! - [`curlcast_render`] (re-exported here): per-dialect serializers

// Re-export the core model and pipeline stages.
pub use curlcast_core::{
    extract,
    lex::{tokenize, Token},
    Dialect, ExtractError, HttpRequestSpec, UnknownDialect, DEFAULT_METHOD,
};

// Re-export the serializer entry point.
pub use curlcast_render::serialize;

mod error;
mod translate;

pub use error::{TranslateError, TranslateResult};
pub use translate::{is_supported_pair, parse_invocation, translate};
