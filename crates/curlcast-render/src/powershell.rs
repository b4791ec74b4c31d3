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

//! Windows PowerShell `Invoke-WebRequest` rendering.
//!
//! Headers collapse into one `-Headers @{...}` hashtable with single-quoted
//! keys and values, semicolon-joined, in source order.

use curlcast_core::HttpRequestSpec;

/// Renders `spec` as a PowerShell `Invoke-WebRequest` invocation.
///
/// # Examples
///
/// ```
/// use curlcast_core::HttpRequestSpec;
/// use curlcast_render::powershell;
///
/// let spec = HttpRequestSpec::new("https://x.com")
///     .with_method("POST")
///     .with_header("A", "1")
///     .with_header("B", "2");
/// assert_eq!(
///     powershell::render(&spec),
///     "Invoke-WebRequest -Uri 'https://x.com' -Method POST -Headers @{'A'='1';'B'='2'}"
/// );
/// ```
pub fn render(spec: &HttpRequestSpec) -> String {
    let mut out = String::with_capacity(64);

    out.push_str("Invoke-WebRequest -Uri '");
    out.push_str(&spec.url);
    out.push('\'');

    if !spec.is_get() {
        out.push_str(" -Method ");
        out.push_str(&spec.method);
    }

    if !spec.headers.is_empty() {
        out.push_str(" -Headers @{");
        for (i, (name, value)) in spec.headers.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            out.push('\'');
            out.push_str(name);
            out.push_str("'='");
            out.push_str(value);
            out.push('\'');
        }
        out.push('}');
    }

    if let Some(body) = &spec.body {
        out.push_str(" -Body '");
        out.push_str(body);
        out.push('\'');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_get() {
        let spec = HttpRequestSpec::new("https://x.com");
        assert_eq!(render(&spec), "Invoke-WebRequest -Uri 'https://x.com'");
    }

    #[test]
    fn test_method_clause_omitted_for_get() {
        let spec = HttpRequestSpec::new("https://x.com").with_method("GET");
        assert_eq!(render(&spec), "Invoke-WebRequest -Uri 'https://x.com'");
    }

    #[test]
    fn test_headers_joined_with_semicolons() {
        let spec = HttpRequestSpec::new("https://x.com")
            .with_header("Content-Type", "application/json")
            .with_header("Authorization", "Bearer t");
        assert_eq!(
            render(&spec),
            "Invoke-WebRequest -Uri 'https://x.com' -Headers @{'Content-Type'='application/json';'Authorization'='Bearer t'}"
        );
    }

    #[test]
    fn test_no_headers_clause_when_empty() {
        let spec = HttpRequestSpec::new("https://x.com").with_method("POST");
        assert!(!render(&spec).contains("-Headers"));
    }

    #[test]
    fn test_full_invocation() {
        let spec = HttpRequestSpec::new("https://api.example.com/data")
            .with_method("POST")
            .with_header("Content-Type", "application/json")
            .with_body("{\"key\":\"value\"}");
        assert_eq!(
            render(&spec),
            "Invoke-WebRequest -Uri 'https://api.example.com/data' -Method POST -Headers @{'Content-Type'='application/json'} -Body '{\"key\":\"value\"}'"
        );
    }

    #[test]
    fn test_single_quote_in_value_is_not_escaped() {
        // Known limitation shared by all dialect writers.
        let spec = HttpRequestSpec::new("https://x.com").with_body("it's");
        assert_eq!(
            render(&spec),
            "Invoke-WebRequest -Uri 'https://x.com' -Body 'it's'"
        );
    }
}
