//! Path operations, all executed with the daemon's privileges.

use super::MbtoolClient;
use crate::error::Result;
use crate::rpc::request::Request;
use crate::rpc::response::Response;
use crate::rpc::transport::Transport;
use crate::rpc::wire::{PathDeleteFlag, ResponseType};

impl<T: Transport> MbtoolClient<T> {
    pub fn path_copy(&mut self, source: &str, target: &str) -> Result<()> {
        let request = Request::PathCopy {
            source: source.to_owned(),
            target: target.to_owned(),
        };
        rpc!(self, request, PathCopy)
    }

    pub fn path_delete(&mut self, path: &str, flag: PathDeleteFlag) -> Result<()> {
        let request = Request::PathDelete {
            path: path.to_owned(),
            flag,
        };
        rpc!(self, request, PathDelete)
    }

    pub fn path_chmod(&mut self, path: &str, mode: u32) -> Result<()> {
        let request = Request::PathChmod {
            path: path.to_owned(),
            mode,
        };
        rpc!(self, request, PathChmod)
    }

    pub fn path_mkdir(&mut self, path: &str, mode: u32, recursive: bool) -> Result<()> {
        let request = Request::PathMkdir {
            path: path.to_owned(),
            mode,
            recursive,
        };
        rpc!(self, request, PathMkdir)
    }

    pub fn path_readlink(&mut self, path: &str) -> Result<String> {
        let request = Request::PathReadlink {
            path: path.to_owned(),
        };
        rpc!(self, request, PathReadlink)
    }

    pub fn path_selinux_get_label(&mut self, path: &str, follow_symlinks: bool) -> Result<String> {
        let request = Request::PathSELinuxGetLabel {
            path: path.to_owned(),
            follow_symlinks,
        };
        rpc!(self, request, PathSELinuxGetLabel)
    }

    pub fn path_selinux_set_label(
        &mut self,
        path: &str,
        label: &str,
        follow_symlinks: bool,
    ) -> Result<()> {
        let request = Request::PathSELinuxSetLabel {
            path: path.to_owned(),
            label: label.to_owned(),
            follow_symlinks,
        };
        rpc!(self, request, PathSELinuxSetLabel)
    }

    /// Total size in bytes of `path`, skipping entries named in `exclusions`.
    pub fn path_get_directory_size<S: AsRef<str>>(
        &mut self,
        path: &str,
        exclusions: &[S],
    ) -> Result<u64> {
        let request = Request::PathGetDirectorySize {
            path: path.to_owned(),
            exclusions: exclusions.iter().map(|s| s.as_ref().to_owned()).collect(),
        };
        rpc!(self, request, PathGetDirectorySize)
    }
}
