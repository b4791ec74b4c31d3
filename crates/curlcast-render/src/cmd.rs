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

//! Windows Command Prompt `curl` rendering.
//!
//! CMD has no single-quote syntax, so everything is double-quoted and a
//! literal `"` inside the body is doubled to `""`.

use curlcast_core::HttpRequestSpec;

/// Renders `spec` as a CMD `curl` invocation.
///
/// # Examples
///
/// ```
/// use curlcast_core::HttpRequestSpec;
/// use curlcast_render::cmd;
///
/// let spec = HttpRequestSpec::new("https://x.com").with_body("{\"k\":\"v\"}");
/// assert_eq!(
///     cmd::render(&spec),
///     r#"curl "https://x.com" -d "{""k"":""v""}""#
/// );
/// ```
pub fn render(spec: &HttpRequestSpec) -> String {
    let mut out = String::with_capacity(64);

    out.push_str("curl \"");
    out.push_str(&spec.url);
    out.push('"');

    if !spec.is_get() {
        out.push_str(" -X ");
        out.push_str(&spec.method);
    }

    for (name, value) in &spec.headers {
        out.push_str(" -H \"");
        out.push_str(name);
        out.push_str(": ");
        out.push_str(value);
        out.push('"');
    }

    if let Some(body) = &spec.body {
        out.push_str(" -d \"");
        out.push_str(&body.replace('"', "\"\""));
        out.push('"');
    }

    out
}
