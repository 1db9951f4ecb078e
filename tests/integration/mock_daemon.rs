//! Scripted daemon transport for integration tests.
//!
//! Replays pre-encoded response frames and records every byte the client
//! writes, so tests can assert on the exact request history without a
//! socket.

use std::collections::VecDeque;
use std::io;

use mbtool_client::rpc::codec;
use mbtool_client::rpc::transport::Transport;
use mbtool_client::{MbtoolClient, Request, Response};

// ── MockDaemon ────────────────────────────────────────────────

pub struct MockDaemon {
    input: VecDeque<u8>,
    pub written: Vec<u8>,
}

#[allow(dead_code)]
impl MockDaemon {
    pub fn new() -> Self {
        Self {
            input: VecDeque::new(),
            written: Vec::new(),
        }
    }

    pub fn with_responses(responses: impl IntoIterator<Item = Response>) -> Self {
        let mut daemon = Self::new();
        for response in responses {
            daemon.push(&response);
        }
        daemon
    }

    /// Queue one framed response.
    pub fn push(&mut self, response: &Response) {
        self.push_raw(&response.encode());
    }

    /// Queue an arbitrary payload as one frame.
    pub fn push_raw(&mut self, payload: &[u8]) {
        let frame = codec::encode_frame(payload).unwrap();
        self.input.extend(frame);
    }

    /// Every request the client sent, decoded.
    pub fn requests(&self) -> Vec<Request> {
        let mut requests = Vec::new();
        let mut rest = self.written.as_slice();
        while !rest.is_empty() {
            let (header, tail) = rest.split_at(codec::HEADER_SIZE);
            let len = codec::frame_len(header.try_into().unwrap(), usize::MAX).unwrap();
            let (payload, tail) = tail.split_at(len);
            requests.push(Request::decode(payload).unwrap());
            rest = tail;
        }
        requests
    }

    pub fn bytes_written(&self) -> usize {
        self.written.len()
    }

    pub fn unread(&self) -> usize {
        self.input.len()
    }
}

impl Default for MockDaemon {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockDaemon {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.input.len());
        for (slot, byte) in buf.iter_mut().zip(self.input.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }

    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.written.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Client over a daemon that will answer with `responses`, in order.
pub fn client(responses: impl IntoIterator<Item = Response>) -> MbtoolClient<MockDaemon> {
    MbtoolClient::new(MockDaemon::with_responses(responses))
}
