/// Standard output utilities
use colored::*;
use std::io::{self, Write};

/// Write rendered report content to stdout, ending with exactly one newline
pub fn emit(content: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_content(&mut handle, content)?;
    handle.flush()
}

fn write_content<W: Write>(writer: &mut W, content: &str) -> io::Result<()> {
    writer.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Display an error message on stderr
pub fn error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
