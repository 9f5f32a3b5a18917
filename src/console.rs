// console.rs - Buffered console output
//
// All output accumulates in one String and is written to stdout in a
// single call by flush().  On Windows the console is switched to UTF-8 and
// VT processing first so icon glyphs render.

use std::io::{self, IsTerminal, Write};

use crate::ehm::AppError;

/// Initial buffer capacity: 64 KB
const INITIAL_BUFFER_SIZE: usize = 64 * 1024;

pub struct Console {
    buffer: String,
}

impl Console {
    /// Prepare stdout and pre-allocate the buffer.
    pub fn initialize() -> Result<Self, AppError> {
        if io::stdout().is_terminal() {
            enable_unicode_output()?;
        }

        Ok(Console {
            buffer: String::with_capacity(INITIAL_BUFFER_SIZE),
        })
    }

    /// Write text followed by a newline.
    pub fn puts(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Buffered text not yet flushed.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    ////////////////////////////////////////////////////////////////////////////
    //
    //  flush
    //
    //  Write the whole buffer to stdout and clear it.  A closed pipe on the
    //  other end (e.g. `glyphls | head`) is not an error.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn flush(&mut self) -> Result<(), AppError> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let mut out = io::stdout().lock();
        let result = out.write_all(self.buffer.as_bytes()).and_then(|()| out.flush());
        self.buffer.clear();

        match result {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => Ok(other?),
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  enable_unicode_output
//
//  Windows consoles default to an OEM code page; switch to UTF-8 and turn
//  on VT processing.  Nothing to do elsewhere.
//
////////////////////////////////////////////////////////////////////////////////

#[cfg(windows)]
fn enable_unicode_output() -> Result<(), AppError> {
    use windows::Win32::Globalization::CP_UTF8;
    use windows::Win32::System::Console::{
        GetConsoleMode, GetStdHandle, SetConsoleMode, SetConsoleOutputCP,
        CONSOLE_MODE, ENABLE_VIRTUAL_TERMINAL_PROCESSING, STD_OUTPUT_HANDLE,
    };

    let stdout_handle = unsafe { GetStdHandle(STD_OUTPUT_HANDLE)? };
    let _ = unsafe { SetConsoleOutputCP(CP_UTF8) };

    let mut mode = CONSOLE_MODE(0);
    if unsafe { GetConsoleMode(stdout_handle, &mut mode) }.is_ok() {
        let new_mode = CONSOLE_MODE(mode.0 | ENABLE_VIRTUAL_TERMINAL_PROCESSING.0);
        let _ = unsafe { SetConsoleMode(stdout_handle, new_mode) };
    }

    Ok(())
}

#[cfg(not(windows))]
fn enable_unicode_output() -> Result<(), AppError> {
    Ok(())
}





#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puts_accumulates_lines() {
        let mut console = Console::initialize().unwrap();
        console.puts("a");
        console.puts("");
        assert_eq!(console.buffer(), "a\n\n");
    }
}
