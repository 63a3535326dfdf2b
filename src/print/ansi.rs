use const_format::concatcp;
use std::io;

pub const ESC: &str = "\x1b[";

pub const RESET: &str = concatcp!(ESC, "0m");
pub const BOLD: &str = concatcp!(ESC, "1m");
pub const RED: &str = concatcp!(ESC, "31m");
pub const GREEN: &str = concatcp!(ESC, "32m");
pub const YELLOW: &str = concatcp!(ESC, "33m");
pub const BLUE: &str = concatcp!(ESC, "34m");
pub const MAGENTA: &str = concatcp!(ESC, "35m");
pub const CYAN: &str = concatcp!(ESC, "36m");

pub const NUMBER: &str = CYAN;
pub const UNIT: &str = MAGENTA;
pub const OPERATOR: &str = concatcp!(BOLD, YELLOW);
pub const PUNCT: &str = BLUE;

/// A writer adapter that drops ANSI escape sequences before forwarding bytes.
pub struct StripAnsi<W: io::Write> {
    inner: W,
    in_escape: bool,
}

impl<W: io::Write> StripAnsi<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            in_escape: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> io::Write for StripAnsi<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut plain = Vec::with_capacity(buf.len());
        for &byte in buf {
            match (self.in_escape, byte) {
                (false, 0x1b) => self.in_escape = true,
                (false, b) => plain.push(b),
                // CSI sequences end on a byte in the range '@'..='~' (the '[' itself is skipped)
                (true, b'[') => (),
                (true, b) if (0x40..=0x7e).contains(&b) => self.in_escape = false,
                (true, _) => (),
            }
        }
        self.inner.write_all(&plain)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
