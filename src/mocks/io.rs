use std::io::{self, Read, Write};

/// Reader that fails on every read.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlowUpOnRead;

impl Read for BlowUpOnRead {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "boom"))
    }
}

/// Reads nothing and accepts writes, but every flush fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlowUpOnFlush;

impl Read for BlowUpOnFlush {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Ok(0)
    }
}

impl Write for BlowUpOnFlush {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "ka-boom"))
    }
}

/// Writer that returns the supplied error on any attempt to write.
#[derive(Debug, Clone)]
pub struct ErrorWriter {
    kind: io::ErrorKind,
    message: String,
}

impl ErrorWriter {
    pub fn new(kind: io::ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl Write for ErrorWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(self.kind, self.message.clone()))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
