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

//! Structured error types for the Curlcast CLI.

use curlcast::TranslateError;
use thiserror::Error;

/// The main error type for CLI command execution.
#[derive(Debug, Clone, Error)]
pub enum CliError {
    /// I/O operation failed (stdin read or output file write).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path or stream that failed.
        path: String,
        /// The underlying error message.
        message: String,
    },

    /// Translation failed; the message is displayed verbatim.
    #[error("{0}")]
    Translate(#[from] TranslateError),

    /// The source dialect was not given and could not be inferred.
    #[error("could not detect the source dialect of the input; pass --from")]
    UnknownSourceDialect,

    /// JSON encoding of the extracted spec failed.
    #[error("failed to encode spec as JSON: {0}")]
    Json(String),
}

impl CliError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<String>, err: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
