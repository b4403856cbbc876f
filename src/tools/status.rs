//! MacroCal status tool
//!
//! Provides runtime status information about the MacroCal service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Status response
#[derive(Debug, Clone, Serialize)]
pub struct MacroCalStatus {
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    /// Where the content override is looked for
    pub content_source: String,
    /// Whether a host override document was merged in
    pub override_applied: bool,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Tracks service start time and reports runtime status
pub struct StatusTracker {
    start_time: Instant,
    content_source: String,
    override_applied: bool,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(content_source: String, override_applied: bool) -> Self {
        Self {
            start_time: Instant::now(),
            content_source,
            override_applied,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> MacroCalStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        MacroCalStatus {
            version: build_info.version,
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            content_source: self.content_source.clone(),
            override_applied: self.override_applied,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_content_source() {
        let tracker = StatusTracker::new("data/content.json".to_string(), false);
        let status = tracker.get_status();
        assert_eq!(status.content_source, "data/content.json");
        assert!(!status.override_applied);
        assert_eq!(status.process_id, std::process::id());
    }
}
