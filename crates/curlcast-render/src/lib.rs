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

//! Per-dialect serialization of [`HttpRequestSpec`] back to invocation text.
//!
//! Each dialect module renders the same neutral model with its own flag
//! names and quoting conventions. All three share the omission rule: a
//! clause is emitted only when its value differs from the dialect's
//! implicit default (GET method, empty header set, no body), keeping round
//! trips minimal rather than verbose.
//!
//! # Examples
//!
//! ```
//! use curlcast_core::{Dialect, HttpRequestSpec};
//! use curlcast_render::serialize;
//!
//! let spec = HttpRequestSpec::new("https://x.com");
//! assert_eq!(serialize(&spec, Dialect::Posix), "curl 'https://x.com'");
//! assert_eq!(
//!     serialize(&spec, Dialect::PowerShell),
//!     "Invoke-WebRequest -Uri 'https://x.com'"
//! );
//! ```
//!
//! # Known limitation
//!
//! A value containing the quote character the target dialect wraps it in
//! is reproduced unescaped (except for CMD bodies, where `"` is doubled).
//! Downstream callers rely on this behavior; see the tests in each dialect
//! module.

pub mod cmd;
pub mod posix;
pub mod powershell;

use curlcast_core::{Dialect, HttpRequestSpec};

/// Renders `spec` as invocation text in `dialect`.
pub fn serialize(spec: &HttpRequestSpec, dialect: Dialect) -> String {
    match dialect {
        Dialect::Posix => posix::render(spec),
        Dialect::PowerShell => powershell::render(spec),
        Dialect::Cmd => cmd::render(spec),
    }
}
