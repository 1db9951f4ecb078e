//! Length-prefix message codec.
//!
//! Wire format:
//! ```text
//! ┌─────────────┬──────────────────────────┐
//! │ Length (4B) │ FlatBuffer payload (N B) │
//! │ LE i32      │                          │
//! └─────────────┴──────────────────────────┘
//! ```
//!
//! The transport is blocking, so a message is read with two exact reads
//! (header, then payload). A single `Transport::read` may return fewer
//! bytes than asked for; the loops below keep going until the buffer is
//! full, the peer hangs up, or the transport fails.

use std::io;

use super::transport::Transport;

/// Frame header size (4-byte little-endian signed length).
pub const HEADER_SIZE: usize = 4;

/// Default bound on a single incoming payload (protects against memory
/// exhaustion from a corrupt or hostile length field).
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 32 * 1024 * 1024;

/// Fill `buf` completely, retrying on `Interrupted`.
pub fn read_exact<T: Transport + ?Sized>(transport: &mut T, buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match transport.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("connection closed after {filled} of {} bytes", buf.len()),
                ));
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Write all of `data`, retrying on `Interrupted`.
pub fn write_all<T: Transport + ?Sized>(transport: &mut T, mut data: &[u8]) -> io::Result<()> {
    while !data.is_empty() {
        match transport.write(data) {
            Ok(0) => return Err(io::ErrorKind::WriteZero.into()),
            Ok(n) => data = &data[n..],
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Encode a payload into a length-prefixed frame.
pub fn encode_frame(payload: &[u8]) -> io::Result<Vec<u8>> {
    let len = i32::try_from(payload.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("message of {} bytes does not fit the length prefix", payload.len()),
        )
    })?;
    let mut frame = Vec::with_capacity(HEADER_SIZE + payload.len());
    frame.extend_from_slice(&len.to_le_bytes());
    frame.extend_from_slice(payload);
    Ok(frame)
}

/// Validate a decoded length header against `max`.
pub fn frame_len(header: [u8; HEADER_SIZE], max: usize) -> io::Result<usize> {
    let len = i32::from_le_bytes(header);
    let len = usize::try_from(len).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("negative message length {len}"),
        )
    })?;
    if len > max {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("message length {len} exceeds limit {max}"),
        ));
    }
    Ok(len)
}

/// Write one length-prefixed message of at most `max` bytes and flush.
/// An oversized payload fails with `InvalidInput` before anything is sent.
pub fn write_message<T: Transport + ?Sized>(
    transport: &mut T,
    payload: &[u8],
    max: usize,
) -> io::Result<()> {
    if payload.len() > max {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("message of {} bytes exceeds limit {max}", payload.len()),
        ));
    }
    let frame = encode_frame(payload)?;
    write_all(transport, &frame)?;
    transport.flush()
}

/// Read one length-prefixed message of at most `max` bytes.
pub fn read_message<T: Transport + ?Sized>(transport: &mut T, max: usize) -> io::Result<Vec<u8>> {
    let mut header = [0u8; HEADER_SIZE];
    read_exact(transport, &mut header)?;
    let len = frame_len(header, max)?;
    let mut payload = vec![0u8; len];
    read_exact(transport, &mut payload)?;
    Ok(payload)
}

// ── Handshake primitives ──────────────────────────────────────

pub fn write_int32<T: Transport + ?Sized>(transport: &mut T, value: i32) -> io::Result<()> {
    write_all(transport, &value.to_le_bytes())?;
    transport.flush()
}

pub fn read_int32<T: Transport + ?Sized>(transport: &mut T) -> io::Result<i32> {
    let mut raw = [0u8; 4];
    read_exact(transport, &mut raw)?;
    Ok(i32::from_le_bytes(raw))
}

/// Strings are length-prefixed UTF-8, framed like a message.
pub fn write_string<T: Transport + ?Sized>(transport: &mut T, s: &str) -> io::Result<()> {
    write_message(transport, s.as_bytes(), DEFAULT_MAX_MESSAGE_SIZE)
}

pub fn read_string<T: Transport + ?Sized>(transport: &mut T, max: usize) -> io::Result<String> {
    let raw = read_message(transport, max)?;
    String::from_utf8(raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Reads from a scripted queue in fixed-size chunks; records writes.
    struct Chunky {
        input: VecDeque<u8>,
        chunk: usize,
        written: Vec<u8>,
        interrupt_next: bool,
    }

    impl Chunky {
        fn new(input: &[u8], chunk: usize) -> Self {
            Self {
                input: input.iter().copied().collect(),
                chunk,
                written: Vec::new(),
                interrupt_next: true,
            }
        }
    }

    impl Transport for Chunky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if std::mem::take(&mut self.interrupt_next) {
                return Err(io::ErrorKind::Interrupted.into());
            }
            let n = buf.len().min(self.chunk).min(self.input.len());
            for slot in &mut buf[..n] {
                *slot = self.input.pop_front().unwrap_or_default();
            }
            Ok(n)
        }

        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            let n = data.len().min(self.chunk);
            self.written.extend_from_slice(&data[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn message_survives_partial_reads_and_writes() {
        let mut out = Chunky::new(&[], 3);
        write_message(&mut out, b"hello mbtool", DEFAULT_MAX_MESSAGE_SIZE).unwrap();
        assert_eq!(&out.written[..4], &12i32.to_le_bytes());

        let mut input = Chunky::new(&out.written, 1);
        assert_eq!(
            read_message(&mut input, DEFAULT_MAX_MESSAGE_SIZE).unwrap(),
            b"hello mbtool"
        );
    }

    #[test]
    fn oversized_outgoing_message_is_invalid_input() {
        let mut out = Chunky::new(&[], 64);
        let err = write_message(&mut out, &[0u8; 17], 16).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(out.written.is_empty());

        write_message(&mut out, &[0u8; 16], 16).unwrap();
        assert_eq!(out.written.len(), HEADER_SIZE + 16);
    }

    #[test]
    fn empty_message_is_valid() {
        let mut input = Chunky::new(&0i32.to_le_bytes(), 8);
        assert!(read_message(&mut input, 16).unwrap().is_empty());
    }

    #[test]
    fn negative_length_is_invalid_data() {
        let mut input = Chunky::new(&(-1i32).to_le_bytes(), 8);
        let err = read_message(&mut input, 16).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn oversized_length_is_invalid_data() {
        let mut input = Chunky::new(&17i32.to_le_bytes(), 8);
        let err = read_message(&mut input, 16).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn truncated_payload_is_unexpected_eof() {
        let mut frame = 10i32.to_le_bytes().to_vec();
        frame.extend_from_slice(b"short");
        let mut input = Chunky::new(&frame, 4);
        let err = read_message(&mut input, 64).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn handshake_primitives_round_trip() {
        let mut out = Chunky::new(&[], 64);
        write_string(&mut out, "ALLOW").unwrap();
        write_int32(&mut out, 3).unwrap();

        let mut input = Chunky::new(&out.written, 2);
        assert_eq!(read_string(&mut input, 64).unwrap(), "ALLOW");
        assert_eq!(read_int32(&mut input).unwrap(), 3);
    }

    #[test]
    fn non_utf8_string_is_invalid_data() {
        let frame = encode_frame(&[0xff, 0xfe]).unwrap();
        let mut input = Chunky::new(&frame, 8);
        let err = read_string(&mut input, 64).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
