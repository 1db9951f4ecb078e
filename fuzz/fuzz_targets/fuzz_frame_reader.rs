//! Fuzz target: `codec::read_message`
//!
//! Feeds arbitrary bytes through the blocking frame reader one byte per
//! read and asserts that it never panics and never yields a payload over
//! the configured limit.
//!
//! cargo fuzz run fuzz_frame_reader

#![no_main]

use std::io;

use libfuzzer_sys::fuzz_target;
use mbtool_client::rpc::codec;
use mbtool_client::rpc::transport::Transport;

const LIMIT: usize = 4096;

struct Trickle<'a>(&'a [u8]);

impl Transport for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match (self.0.split_first(), buf.first_mut()) {
            (Some((byte, rest)), Some(slot)) => {
                *slot = *byte;
                self.0 = rest;
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fuzz_target!(|data: &[u8]| {
    let mut input = Trickle(data);
    while let Ok(payload) = codec::read_message(&mut input, LIMIT) {
        assert!(payload.len() <= LIMIT, "payload exceeds limit");
    }
});
