use std::io::{self, BufRead, ErrorKind};

/// Reads one UTF-8 encoded character from `reader`.
///
/// Returns `Ok(None)` at a clean end of stream. A stream that ends in the
/// middle of a character, or contains bytes that are not UTF-8, yields an
/// `InvalidData` error.
pub fn read_char<R: BufRead>(reader: &mut R) -> io::Result<Option<char>> {
    let mut buf = [0u8; 4];
    let read = loop {
        match reader.read(&mut buf[..1]) {
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            other => break other?,
        }
    };
    if read == 0 {
        return Ok(None);
    }

    let width = match buf[0] {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        byte => {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("invalid UTF-8 leading byte 0x{:02X}", byte),
            ))
        }
    };

    if width > 1 {
        reader.read_exact(&mut buf[1..width]).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                io::Error::new(ErrorKind::InvalidData, "stream ended inside a UTF-8 sequence")
            } else {
                e
            }
        })?;
    }

    let decoded = std::str::from_utf8(&buf[..width])
        .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
    Ok(decoded.chars().next())
}
