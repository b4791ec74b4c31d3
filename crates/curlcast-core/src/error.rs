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

//! Error types for request extraction.

use crate::dialect::Dialect;
use thiserror::Error;

/// An error that occurred while extracting an HTTP request from tokens.
///
/// Extraction is permissive: unknown flags, malformed header blocks, and
/// stray tokens are ignored rather than reported. The single hard failure
/// is an invocation with no recognizable URL.
///
/// The `MissingUrl` message text is part of the public contract; existing
/// callers display it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No token satisfied the URL rule for the source dialect.
    #[error("Error: Could not find URL in {dialect} command.")]
    MissingUrl {
        /// The dialect the invocation was read as.
        dialect: Dialect,
    },
}

impl ExtractError {
    /// The dialect the failing invocation was read as.
    pub fn dialect(&self) -> Dialect {
        match self {
            ExtractError::MissingUrl { dialect } => *dialect,
        }
    }
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
