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

//! Core tokenizer, request model, and extractor for Curlcast.
//!
//! This crate provides the dialect-aware front half of the translation
//! pipeline: splitting a raw shell invocation into quote-aware tokens and
//! recognizing the HTTP request it expresses.
//!
//! # Pipeline
//!
//! ```text
//! text --[lex::tokenize]--> Vec<Token> --[extract]--> HttpRequestSpec
//! ```
//!
//! The [`lex`] module handles the quoting rules of each [`Dialect`]
//! (single-quoted runs, double-quoted runs with CMD-style `""` escapes,
//! line-continuation normalization, PowerShell `@{...}` hashtable
//! aggregation). The [`extract`](extract()) operation walks the token stream
//! and builds a dialect-neutral [`HttpRequestSpec`].
//!
//! # Examples
//!
//! ```
//! use curlcast_core::{extract, lex::tokenize, Dialect};
//!
//! let tokens = tokenize("curl -X POST 'https://api.example.com' -d '{}'", Dialect::Posix);
//! let spec = extract(&tokens, Dialect::Posix).unwrap();
//!
//! assert_eq!(spec.url, "https://api.example.com");
//! assert_eq!(spec.method, "POST");
//! assert_eq!(spec.body.as_deref(), Some("{}"));
//! ```
//!
//! Extraction is deliberately permissive: unrecognized flags are skipped
//! rather than rejected, and the only hard failure is a missing URL.

mod dialect;
mod error;
mod extract;
pub mod lex;
mod spec;

pub use dialect::{Dialect, UnknownDialect};
pub use error::{ExtractError, ExtractResult};
pub use extract::extract;
pub use spec::{HttpRequestSpec, DEFAULT_METHOD};

// Re-export the tokenizer entry points alongside the extractor.
pub use lex::{tokenize, Token};
