//! Startup banner.

use std::io::{self, Write};

use colored::Colorize;

/// Writes the "BUILTWITH.COM" banner with the red accents of the site's logo.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "     __              ___        ___        {}   __        ",
        "__".red()
    )?;
    writeln!(
        out,
        "    |__) |  | {} {}     |  |  | |  |  |__|  {} /  \\  |\\/| ",
        "|".red(),
        "|".red(),
        "/  `".red()
    )?;
    writeln!(
        out,
        "    |__) \\__/ {} {}  |  |/\\| |  |  |  | .{} \\__/  |  | ",
        "|".red(),
        "|___".red(),
        "\\__,".red()
    )?;
    writeln!(out, "    (c) 2022 - Jakob Schaffarczyk\n")
}

/// [`write_banner`] to stdout.
pub fn print_banner() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_banner(&mut out)?;
    out.flush()
}
