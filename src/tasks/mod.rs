//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - TTL Cleanup: Removes expired listing pages at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
