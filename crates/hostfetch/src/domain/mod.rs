mod snapshot;

pub use snapshot::DiskUsage;
pub use snapshot::MemoryUsage;
pub use snapshot::NOT_AVAILABLE;
pub use snapshot::SystemSnapshot;
