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

//! Dialect-aware tokenization of shell invocations.
//!
//! The tokenizer splits a raw invocation line into whitespace-delimited,
//! quote-aware tokens. It is deliberately not a shell grammar: there is no
//! pipe, redirection, variable expansion, or subshell handling, and quoting
//! is only honored at whole-token granularity.
//!
//! # Module Structure
//!
//! - [`normalize`] - line-continuation collapse before tokenizing
//! - [`tokenizer`] - the token scanner itself
//!
//! # Quoting rules
//!
//! All three dialects share one tokenization shape:
//!
//! - a bare run of characters up to the next whitespace or quote,
//! - a single-quoted run taken verbatim,
//! - a double-quoted run taken verbatim, except that a doubled `""` decodes
//!   to one literal `"` (the CMD escaping convention),
//! - a bare run opening with `@{` extends to the matching `}`, interior
//!   whitespace included, so a PowerShell hashtable arrives as one token.
//!
//! Tokenization never fails; an unterminated quote degrades to literal
//! characters.
//!
//! # Examples
//!
//! ```
//! use curlcast_core::{lex::tokenize, Dialect};
//!
//! let tokens = tokenize("curl -X POST 'https://x.com'", Dialect::Posix);
//! let texts: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
//! assert_eq!(texts, ["curl", "-X", "POST", "https://x.com"]);
//! ```

pub mod normalize;
pub mod tokenizer;

pub use normalize::normalize_continuations;
pub use tokenizer::{tokenize, Token};
