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

//! CLI command implementations.

use crate::cli::{Cli, DialectArg};
use crate::error::CliError;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use curlcast::{parse_invocation, translate, Dialect};
use std::fs;
use std::io::{self, Read};

/// Reads the invocation text from the argument or, when absent or `-`,
/// from stdin.
fn read_input(command: Option<&str>) -> Result<String, CliError> {
    match command {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CliError::io("stdin", e))?;
            Ok(buf)
        }
    }
}

/// Writes `text` to `output`, or stdout when no path is given.
fn write_output(text: &str, output: Option<&str>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            fs::write(path, format!("{text}\n")).map_err(|e| CliError::io(path, e))
        }
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

/// Resolves the source dialect from `--from` or by detection.
fn resolve_source(input: &str, from: Option<DialectArg>) -> Result<Dialect, CliError> {
    match from {
        Some(arg) => Ok(arg.into()),
        None => Dialect::detect(input).ok_or(CliError::UnknownSourceDialect),
    }
}

/// Converts an invocation between dialects.
pub fn convert(
    from: Option<DialectArg>,
    to: DialectArg,
    command: Option<&str>,
    output: Option<&str>,
) -> Result<(), CliError> {
    let input = read_input(command)?;
    let source = resolve_source(&input, from)?;
    let translated = translate(input.trim(), source, to.into())?;
    write_output(&translated, output)
}

/// Prints the dialect-neutral spec extracted from an invocation.
pub fn inspect(from: Option<DialectArg>, command: Option<&str>, json: bool) -> Result<(), CliError> {
    let input = read_input(command)?;
    let source = resolve_source(&input, from)?;
    let spec = parse_invocation(input.trim(), source)?;

    if json {
        let encoded =
            serde_json::to_string_pretty(&spec).map_err(|e| CliError::Json(e.to_string()))?;
        println!("{encoded}");
        return Ok(());
    }

    println!("url:     {}", spec.url);
    println!("method:  {}", spec.method);
    for (name, value) in &spec.headers {
        println!("header:  {name}: {value}");
    }
    if let Some(body) = &spec.body {
        println!("body:    {body}");
    }
    Ok(())
}

/// Generates a shell completion script on stdout.
pub fn completion(shell: Shell) -> Result<(), CliError> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
