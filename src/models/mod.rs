//! Request and Response models for the thought feed API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CreateThoughtRequest, PageQuery};
pub use responses::{
    HealthResponse, MessageResponse, PageResponse, StatsResponse, ThoughtSummary,
};
