//! File-handle operations.
//!
//! Handles are daemon-side resources. [`MbtoolClient::open_file`] and
//! [`MbtoolClient::with_file`] guarantee a `FileCloseRequest` on every
//! exit path.

use log::warn;

use super::MbtoolClient;
use crate::error::Result;
use crate::rpc::request::Request;
use crate::rpc::response::{Response, StatBuf};
use crate::rpc::transport::Transport;
use crate::rpc::wire::{FileOpenFlag, ResponseType, SeekWhence};

impl<T: Transport> MbtoolClient<T> {
    /// Open `path` on the daemon side; returns the handle id.
    ///
    /// `perms` is the creation mode applied with [`FileOpenFlag::Creat`]
    /// (e.g. `0o644`). The wire field is an unsigned 32-bit `uint`, so
    /// the mode is taken as `u32` rather than a signed int.
    pub fn file_open(&mut self, path: &str, flags: &[FileOpenFlag], perms: u32) -> Result<i32> {
        let request = Request::FileOpen {
            path: path.to_owned(),
            flags: flags.to_vec(),
            perms,
        };
        rpc!(self, request, FileOpen)
    }

    pub fn file_close(&mut self, id: i32) -> Result<()> {
        rpc!(self, Request::FileClose { id }, FileClose)
    }

    /// Read up to `count` bytes. An empty result means end of file.
    pub fn file_read(&mut self, id: i32, count: u64) -> Result<Vec<u8>> {
        rpc!(self, Request::FileRead { id, count }, FileRead)
    }

    /// Returns the number of bytes the daemon wrote.
    pub fn file_write(&mut self, id: i32, data: &[u8]) -> Result<u64> {
        let request = Request::FileWrite {
            id,
            data: data.to_vec(),
        };
        rpc!(self, request, FileWrite)
    }

    /// Returns the new absolute offset.
    pub fn file_seek(&mut self, id: i32, offset: i64, whence: SeekWhence) -> Result<i64> {
        rpc!(self, Request::FileSeek { id, offset, whence }, FileSeek)
    }

    pub fn file_stat(&mut self, id: i32) -> Result<StatBuf> {
        rpc!(self, Request::FileStat { id }, FileStat)
    }

    pub fn file_chmod(&mut self, id: i32, mode: u32) -> Result<()> {
        rpc!(self, Request::FileChmod { id, mode }, FileChmod)
    }

    pub fn file_selinux_get_label(&mut self, id: i32) -> Result<String> {
        rpc!(self, Request::FileSELinuxGetLabel { id }, FileSELinuxGetLabel)
    }

    pub fn file_selinux_set_label(&mut self, id: i32, label: &str) -> Result<()> {
        let request = Request::FileSELinuxSetLabel {
            id,
            label: label.to_owned(),
        };
        rpc!(self, request, FileSELinuxSetLabel)
    }

    /// Open `path` and return a guard that closes the handle when dropped.
    /// `perms` is the unsigned creation mode, as in [`Self::file_open`].
    pub fn open_file(
        &mut self,
        path: &str,
        flags: &[FileOpenFlag],
        perms: u32,
    ) -> Result<OpenFile<'_, T>> {
        let id = self.file_open(path, flags, perms)?;
        Ok(OpenFile {
            client: self,
            id,
            open: true,
        })
    }

    /// Run `body` with an open handle, then close it.
    ///
    /// The close is issued even when `body` fails. An error from `body`
    /// wins over an error from the close.
    pub fn with_file<R>(
        &mut self,
        path: &str,
        flags: &[FileOpenFlag],
        perms: u32,
        body: impl FnOnce(&mut Self, i32) -> Result<R>,
    ) -> Result<R> {
        let id = self.file_open(path, flags, perms)?;
        let result = body(self, id);
        let closed = self.file_close(id);
        match (result, closed) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), closed) => {
                if let Err(close_err) = closed {
                    warn!("RPC: closing handle {id} after failure: {close_err}");
                }
                Err(e)
            }
        }
    }
}

/// An open daemon-side file. Closed on drop; use [`OpenFile::close`] to
/// observe the close result.
pub struct OpenFile<'a, T: Transport> {
    client: &'a mut MbtoolClient<T>,
    id: i32,
    open: bool,
}

impl<T: Transport> OpenFile<'_, T> {
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn read(&mut self, count: u64) -> Result<Vec<u8>> {
        self.client.file_read(self.id, count)
    }

    /// Read in `chunk`-sized requests until the daemon returns no data.
    pub fn read_to_end(&mut self, chunk: u64) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        loop {
            let data = self.read(chunk)?;
            if data.is_empty() {
                return Ok(out);
            }
            out.extend_from_slice(&data);
        }
    }

    pub fn write(&mut self, data: &[u8]) -> Result<u64> {
        self.client.file_write(self.id, data)
    }

    /// Write every byte, issuing more requests after short writes.
    pub fn write_all(&mut self, mut data: &[u8]) -> Result<()> {
        while !data.is_empty() {
            let written = self.write(data)?;
            if written == 0 {
                return Err(std::io::Error::from(std::io::ErrorKind::WriteZero).into());
            }
            let written = usize::try_from(written).unwrap_or(usize::MAX).min(data.len());
            data = &data[written..];
        }
        Ok(())
    }

    pub fn seek(&mut self, offset: i64, whence: SeekWhence) -> Result<i64> {
        self.client.file_seek(self.id, offset, whence)
    }

    pub fn stat(&mut self) -> Result<StatBuf> {
        self.client.file_stat(self.id)
    }

    pub fn chmod(&mut self, mode: u32) -> Result<()> {
        self.client.file_chmod(self.id, mode)
    }

    pub fn selinux_label(&mut self) -> Result<String> {
        self.client.file_selinux_get_label(self.id)
    }

    pub fn set_selinux_label(&mut self, label: &str) -> Result<()> {
        self.client.file_selinux_set_label(self.id, label)
    }

    /// Close the handle and report the daemon's answer.
    pub fn close(mut self) -> Result<()> {
        self.open = false;
        self.client.file_close(self.id)
    }
}

impl<T: Transport> Drop for OpenFile<'_, T> {
    fn drop(&mut self) {
        if self.open {
            if let Err(e) = self.client.file_close(self.id) {
                warn!("RPC: implicit close of handle {} failed: {e}", self.id);
            }
        }
    }
}
