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

//! The dialect-neutral HTTP request model.

/// The method used when no method flag is present.
pub const DEFAULT_METHOD: &str = "GET";

/// A dialect-neutral description of an HTTP request invocation.
///
/// This is the intermediate representation between extraction and
/// serialization. It is created fresh per translation and has no identity
/// beyond a single call.
///
/// Invariants:
/// - `url` is non-empty once extraction succeeds.
/// - `method` is always present; a missing method flag defaults to `GET`.
///   Note that `-X GET` and an absent method flag are indistinguishable
///   after extraction.
/// - `headers` preserves source order; duplicate names are kept, not merged.
/// - `body`, when present, has had exactly one layer of dialect quoting and
///   escaping removed.
///
/// # Examples
///
/// ```
/// use curlcast_core::HttpRequestSpec;
///
/// let spec = HttpRequestSpec::new("https://api.example.com")
///     .with_method("post")
///     .with_header("Content-Type", "application/json")
///     .with_body("{\"key\":\"value\"}");
///
/// assert_eq!(spec.method, "POST");
/// assert!(!spec.is_get());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HttpRequestSpec {
    /// The request URL. Required; extraction fails without one.
    pub url: String,
    /// The HTTP method, always uppercase, defaulted to `GET`.
    pub method: String,
    /// Headers in source order. Duplicates allowed.
    pub headers: Vec<(String, String)>,
    /// Raw payload text with outer quoting removed, if any.
    pub body: Option<String>,
}

impl HttpRequestSpec {
    /// Creates a spec for a plain GET request to `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: DEFAULT_METHOD.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Sets the method, normalizing to uppercase.
    #[must_use]
    pub fn with_method(mut self, method: impl AsRef<str>) -> Self {
        self.set_method(method);
        self
    }

    /// Appends a header, preserving insertion order.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the method in place, normalizing to uppercase.
    pub fn set_method(&mut self, method: impl AsRef<str>) {
        self.method = method.as_ref().to_ascii_uppercase();
    }

    /// Returns `true` when the method is the implicit default.
    ///
    /// Serializers omit the method clause in this case, which is what makes
    /// the GET default lossy across round trips.
    #[inline]
    pub fn is_get(&self) -> bool {
        self.method == DEFAULT_METHOD
    }
}
