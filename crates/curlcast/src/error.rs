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

//! Error types for translation.

use curlcast_core::{Dialect, ExtractError};
use thiserror::Error;

/// An error from the end-to-end translation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// Extraction failed; today that always means a missing URL. The
    /// message renders verbatim as
    /// `Error: Could not find URL in <Dialect> command.`
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The requested direction has no direct conversion path. Callers
    /// needing PowerShell <-> Cmd chain through Posix.
    #[error("no direct {from} to {to} conversion; translate through Posix")]
    UnsupportedPair {
        /// Requested source dialect.
        from: Dialect,
        /// Requested target dialect.
        to: Dialect,
    },
}

/// Result type for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;
