//! Statistics
//!
//! Counters describing the decisions made by the rasterizer. Meant for
//!   tests and tuning; collection is disabled by default with [NullStats].
//!
//! [NullStats]: struct.NullStats.html

use std::fmt;

/// Statistics Collector
///
/// All methods default to doing nothing
pub trait Statistics {
    /// Triangle submitted
    fn increase_triangles(&mut self) {}
    /// Triangle dropped as it lies completely outside the buffer
    fn increase_discarded_triangles(&mut self) {}
    /// Rasterline considered for a row inside the buffer
    fn increase_rasterlines(&mut self) {}
    /// Rasterline dropped as it is empty or outside the buffer
    fn increase_discarded_rasterlines(&mut self) {}
    /// Rasterline cut back to the width of the buffer
    fn increase_clamped_rasterlines(&mut self) {}
    /// Pending rasterlines rendered
    fn increase_flushes(&mut self) {}
}

/// No statistics collected
#[derive(Debug,Default,Copy,Clone)]
pub struct NullStats;

impl Statistics for NullStats {}

/// Counting statistics
///
/// Counters only increase, from construction on
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Stats {
    pub triangles: u64,
    pub discarded_triangles: u64,
    pub rasterlines: u64,
    pub discarded_rasterlines: u64,
    pub clamped_rasterlines: u64,
    pub flushes: u64,
}

impl Statistics for Stats {
    fn increase_triangles(&mut self) {
        self.triangles += 1;
    }
    fn increase_discarded_triangles(&mut self) {
        self.discarded_triangles += 1;
    }
    fn increase_rasterlines(&mut self) {
        self.rasterlines += 1;
    }
    fn increase_discarded_rasterlines(&mut self) {
        self.discarded_rasterlines += 1;
    }
    fn increase_clamped_rasterlines(&mut self) {
        self.clamped_rasterlines += 1;
    }
    fn increase_flushes(&mut self) {
        self.flushes += 1;
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "triangles: {} (discarded {}) rasterlines: {} (discarded {}, clamped {}) flushes: {}",
               self.triangles, self.discarded_triangles,
               self.rasterlines, self.discarded_rasterlines,
               self.clamped_rasterlines, self.flushes)
    }
}
