// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing error and warning lines on stderr.
//!
//! Colored when stderr is a terminal, plain otherwise.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Severity::Error => "\x1b[31m",
            Severity::Warning => "\x1b[33m",
        }
    }
}

pub fn print_error(msg: impl Display) {
    print(Severity::Error, msg);
}

pub fn print_warning(msg: impl Display) {
    print(Severity::Warning, msg);
}

fn print(severity: Severity, msg: impl Display) {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    write_diagnostic(&mut stderr.lock(), severity, msg, is_tty);
}

fn write_diagnostic<W: Write>(writer: &mut W, severity: Severity, msg: impl Display, color: bool) {
    let _ = if color {
        writeln!(writer, "{}{}: {}\x1b[0m", severity.color(), severity.label(), msg)
    } else {
        writeln!(writer, "{}: {}", severity.label(), msg)
    };
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
