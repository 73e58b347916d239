//! Collects one [`SystemSnapshot`], one resolver per field.
//!
//! Every resolver degrades to a fallback value when its source is missing
//! or malformed; collection as a whole cannot fail.

mod host;

pub use host::FilesystemStats;
pub use host::HostEnv;
pub use host::SystemHost;

use tracing::debug;

use crate::domain::DiskUsage;
use crate::domain::MemoryUsage;
use crate::domain::NOT_AVAILABLE;
use crate::domain::SystemSnapshot;

const OS_RELEASE_PATH: &str = "/etc/os-release";
const CPUINFO_PATH: &str = "/proc/cpuinfo";
const UPTIME_PATH: &str = "/proc/uptime";
const MEMINFO_PATH: &str = "/proc/meminfo";
const ROOT_PATH: &str = "/";

const BYTES_PER_GB: u64 = 1 << 30;
const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;

pub fn collect(env: &dyn HostEnv) -> SystemSnapshot {
    SystemSnapshot {
        os: resolve_os(env),
        kernel: resolve_kernel(env),
        arch: std::env::consts::ARCH.to_string(),
        host: resolve_env_field(env, "HOSTNAME"),
        user: resolve_env_field(env, "USER"),
        shell: resolve_env_field(env, "SHELL"),
        term: resolve_env_field(env, "TERM"),
        cpu: resolve_cpu(env),
        uptime: resolve_uptime(env),
        memory: resolve_memory(env),
        disk: resolve_disk(env),
    }
}

/// `PRETTY_NAME` from the os-release file, quotes stripped. Falls back to
/// the platform identifier compiled into the binary.
fn resolve_os(env: &dyn HostEnv) -> String {
    let Ok(contents) = env.read_file(OS_RELEASE_PATH) else {
        debug!(path = OS_RELEASE_PATH, "os-release unreadable");
        return std::env::consts::OS.to_string();
    };
    contents
        .lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|value| value.trim_matches('"').to_string())
        .unwrap_or_else(|| std::env::consts::OS.to_string())
}

fn resolve_kernel(env: &dyn HostEnv) -> String {
    match env.command_output("uname", &["-r"]) {
        Ok(output) => output.trim().to_string(),
        Err(err) => {
            debug!(%err, "uname -r failed");
            NOT_AVAILABLE.to_string()
        }
    }
}

fn resolve_env_field(env: &dyn HostEnv, key: &str) -> String {
    match env.env_var(key) {
        Some(value) if !value.is_empty() => value,
        _ => {
            debug!(key, "environment variable unset");
            NOT_AVAILABLE.to_string()
        }
    }
}

/// First `model name` line of the CPU-info file, value after the colon.
fn resolve_cpu(env: &dyn HostEnv) -> String {
    let Ok(contents) = env.read_file(CPUINFO_PATH) else {
        debug!(path = CPUINFO_PATH, "cpuinfo unreadable");
        return NOT_AVAILABLE.to_string();
    };
    contents
        .lines()
        .filter(|line| line.starts_with("model name"))
        .find_map(|line| line.split_once(':'))
        .map(|(_, model)| model.trim().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn resolve_uptime(env: &dyn HostEnv) -> String {
    env.read_file(UPTIME_PATH)
        .ok()
        .and_then(|contents| {
            contents
                .split_whitespace()
                .next()
                .and_then(|token| token.parse::<f64>().ok())
        })
        .map(|seconds| format_uptime(seconds as u64))
        .unwrap_or_else(|| {
            debug!(path = UPTIME_PATH, "uptime unreadable");
            NOT_AVAILABLE.to_string()
        })
}

/// `Dd Hh Mm`, with the days unit omitted when zero. Hours and minutes are
/// always shown.
fn format_uptime(total_seconds: u64) -> String {
    let days = total_seconds / SECONDS_PER_DAY;
    let hours = total_seconds % SECONDS_PER_DAY / SECONDS_PER_HOUR;
    let minutes = total_seconds % SECONDS_PER_HOUR / 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else {
        format!("{hours}h {minutes}m")
    }
}

fn resolve_memory(env: &dyn HostEnv) -> MemoryUsage {
    let Ok(contents) = env.read_file(MEMINFO_PATH) else {
        debug!(path = MEMINFO_PATH, "meminfo unreadable");
        return MemoryUsage::default();
    };
    parse_meminfo(&contents)
}

/// `MemTotal` and `MemAvailable` in kB, converted to whole megabytes.
/// Scanning stops once both are seen.
fn parse_meminfo(contents: &str) -> MemoryUsage {
    let mut total_kb = 0u64;
    let mut available_kb = 0u64;
    for line in contents.lines() {
        let Some((label, rest)) = line.split_once(':') else {
            continue;
        };
        let value = rest
            .split_whitespace()
            .next()
            .and_then(|token| token.parse::<u64>().ok())
            .unwrap_or(0);
        match label {
            "MemTotal" => total_kb = value,
            "MemAvailable" => available_kb = value,
            _ => {}
        }
        if total_kb > 0 && available_kb > 0 {
            break;
        }
    }
    let total_mb = total_kb / 1024;
    MemoryUsage {
        used_mb: total_mb.saturating_sub(available_kb / 1024),
        total_mb,
    }
}

fn resolve_disk(env: &dyn HostEnv) -> DiskUsage {
    let stats = match env.filesystem_stats(ROOT_PATH) {
        Ok(stats) => stats,
        Err(err) => {
            debug!(%err, path = ROOT_PATH, "filesystem stats unavailable");
            return DiskUsage::default();
        }
    };
    let total_bytes = stats.total_bytes();
    let used_bytes = total_bytes.saturating_sub(stats.free_bytes());
    DiskUsage {
        used_gb: used_bytes / BYTES_PER_GB,
        total_gb: total_bytes / BYTES_PER_GB,
    }
}
