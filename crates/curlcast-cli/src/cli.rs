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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use curlcast::Dialect;

/// Curlcast - translate HTTP invocations between shell dialects.
///
/// Rewrites `curl` and `Invoke-WebRequest` commands between POSIX shell,
/// Windows PowerShell, and Windows Command Prompt syntax without executing
/// anything.
#[derive(Parser)]
#[command(name = "curlcast")]
#[command(author, version, about = "Translate HTTP invocations between shell dialects", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// A dialect name as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
    /// POSIX/Unix shell `curl`.
    #[value(alias = "unix")]
    Posix,
    /// Windows PowerShell `Invoke-WebRequest`.
    #[value(alias = "ps")]
    Powershell,
    /// Windows Command Prompt `curl`.
    Cmd,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Posix => Dialect::Posix,
            DialectArg::Powershell => Dialect::PowerShell,
            DialectArg::Cmd => Dialect::Cmd,
        }
    }
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Convert an HTTP invocation from one dialect to another.
    Convert {
        /// Source dialect. Detected from the input when omitted.
        #[arg(long, value_enum)]
        from: Option<DialectArg>,

        /// Target dialect.
        #[arg(long, value_enum)]
        to: DialectArg,

        /// The invocation text. Reads stdin when omitted or `-`.
        #[arg(allow_hyphen_values = true)]
        command: Option<String>,

        /// Write the result to a file instead of stdout.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the dialect-neutral request a command expresses.
    Inspect {
        /// Source dialect. Detected from the input when omitted.
        #[arg(long, value_enum)]
        from: Option<DialectArg>,

        /// The invocation text. Reads stdin when omitted or `-`.
        #[arg(allow_hyphen_values = true)]
        command: Option<String>,

        /// Emit JSON instead of a text summary.
        #[arg(long)]
        json: bool,
    },

    /// Generate a shell completion script on stdout.
    Completion {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Executes the command, returning any error for the caller to report.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Convert {
                from,
                to,
                command,
                output,
            } => commands::convert(from, to, command.as_deref(), output.as_deref()),
            Commands::Inspect {
                from,
                command,
                json,
            } => commands::inspect(from, command.as_deref(), json),
            Commands::Completion { shell } => commands::completion(shell),
        }
    }
}
