//! The snapshot record of collected host facts.

/// Placeholder shown for any field whose source is unavailable.
pub const NOT_AVAILABLE: &str = "N/A";

/// All facts collected for one run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSnapshot {
    pub os: String,
    pub kernel: String,
    pub arch: String,
    pub host: String,
    pub user: String,
    pub shell: String,
    pub term: String,
    pub cpu: String,
    pub uptime: String,
    pub memory: MemoryUsage,
    pub disk: DiskUsage,
}

/// Memory usage in whole megabytes. Both fields are zero when
/// the memory source could not be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryUsage {
    pub used_mb: u64,
    pub total_mb: u64,
}

impl MemoryUsage {
    pub fn percent_used(&self) -> f64 {
        percent(self.used_mb, self.total_mb)
    }
}

/// Disk usage in whole gigabytes. Both fields are zero when
/// the filesystem query failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskUsage {
    pub used_gb: u64,
    pub total_gb: u64,
}

impl DiskUsage {
    pub fn percent_used(&self) -> f64 {
        percent(self.used_gb, self.total_gb)
    }
}

fn percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        used as f64 / total as f64 * 100.0
    }
}
