//! Host environment access behind a capability trait.

use std::io;
use std::process::Command;

/// Raw counts reported by the filesystem for one mount point.
#[derive(Debug, Clone, Copy)]
pub struct FilesystemStats {
    pub block_size: u64,
    pub blocks: u64,
    pub blocks_available: u64,
}

impl FilesystemStats {
    pub fn total_bytes(&self) -> u64 {
        self.blocks * self.block_size
    }

    /// Bytes available to unprivileged users, not raw free blocks.
    pub fn free_bytes(&self) -> u64 {
        self.blocks_available * self.block_size
    }
}

/// Read-only view of the host a resolver runs against. Production code
/// hands resolvers a [`SystemHost`]; tests substitute an in-memory fake.
pub trait HostEnv {
    fn read_file(&self, path: &str) -> io::Result<String>;

    fn env_var(&self, key: &str) -> Option<String>;

    fn command_output(&self, program: &str, args: &[&str]) -> io::Result<String>;

    fn filesystem_stats(&self, path: &str) -> io::Result<FilesystemStats>;
}

/// The real host: pseudo-files, process environment, external commands
/// and filesystem statistics of the running operating system.
pub struct SystemHost;

impl HostEnv for SystemHost {
    fn read_file(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn env_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn command_output(&self, program: &str, args: &[&str]) -> io::Result<String> {
        let output = Command::new(program).args(args).output()?;
        if !output.status.success() {
            let status = output.status;
            return Err(io::Error::other(format!("{program} exited with {status}")));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    #[cfg(unix)]
    fn filesystem_stats(&self, path: &str) -> io::Result<FilesystemStats> {
        use std::ffi::CString;

        let c_path =
            CString::new(path).map_err(|_| io::Error::from(io::ErrorKind::InvalidInput))?;
        // SAFETY: statvfs expects a valid NUL-terminated path and a properly
        // sized out-parameter; both hold here.
        let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
        let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
        if rc != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(FilesystemStats {
            block_size: u64::from(stat.f_frsize),
            blocks: u64::from(stat.f_blocks),
            blocks_available: u64::from(stat.f_bavail),
        })
    }

    #[cfg(not(unix))]
    fn filesystem_stats(&self, _path: &str) -> io::Result<FilesystemStats> {
        Err(io::Error::from(io::ErrorKind::Unsupported))
    }
}
