//! Boot partition lookup.
//!
//! ROM switching and kernel setting need the boot block device path before
//! anything is sent to the daemon. The lookup sits behind a trait so callers
//! (and tests) can supply their own.

use std::path::Path;

use log::debug;

use crate::config::ClientConfig;

/// Resolves the device holding the boot partition.
pub trait BootBlockDevResolver {
    /// Path of the boot block device, or `None` when it cannot be found.
    fn boot_block_device(&self) -> Option<String>;

    /// Directories the daemon may search for by-name block devices.
    fn search_dirs(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Probes a fixed list of candidate paths; the first one that exists wins.
#[derive(Debug, Clone, Default)]
pub struct ProbingResolver {
    candidates: Vec<String>,
    search_dirs: Vec<String>,
}

impl ProbingResolver {
    pub fn new(candidates: Vec<String>, search_dirs: Vec<String>) -> Self {
        Self {
            candidates,
            search_dirs,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            config.boot_blockdev_candidates.clone(),
            config.blockdev_search_dirs.clone(),
        )
    }
}

impl BootBlockDevResolver for ProbingResolver {
    fn boot_block_device(&self) -> Option<String> {
        let found = self
            .candidates
            .iter()
            .find(|candidate| Path::new(candidate.as_str()).exists())
            .cloned();
        debug!("boot block device: {found:?}");
        found
    }

    fn search_dirs(&self) -> Vec<String> {
        self.search_dirs.clone()
    }
}

/// Always answers with the given device (or none).
#[derive(Debug, Clone, Default)]
pub struct FixedResolver {
    pub device: Option<String>,
    pub search_dirs: Vec<String>,
}

impl BootBlockDevResolver for FixedResolver {
    fn boot_block_device(&self) -> Option<String> {
        self.device.clone()
    }

    fn search_dirs(&self) -> Vec<String> {
        self.search_dirs.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_existing_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let boot = dir.path().join("boot");
        std::fs::write(&boot, b"").unwrap();
        let missing = dir.path().join("missing").display().to_string();
        let boot = boot.display().to_string();

        let resolver = ProbingResolver::new(
            vec![missing, boot.clone()],
            vec![dir.path().display().to_string()],
        );
        assert_eq!(resolver.boot_block_device(), Some(boot));
        assert_eq!(resolver.search_dirs().len(), 1);
    }

    #[test]
    fn no_candidate_means_unknown() {
        let resolver = ProbingResolver::new(vec!["/nonexistent/by-name/boot".into()], vec![]);
        assert_eq!(resolver.boot_block_device(), None);
        assert_eq!(ProbingResolver::default().boot_block_device(), None);
    }
}
