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

//! Curlcast CLI library: argument parsing and command execution.
//!
//! # Commands
//!
//! - **convert**: rewrite an HTTP invocation from one shell dialect to
//!   another (`--from` is detected from the input when omitted)
//! - **inspect**: show the dialect-neutral request a command expresses,
//!   as text or JSON
//! - **completion**: generate shell completion scripts

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
