/// Shared utilities and types used across all layers
///
/// This module contains:
/// - Common data structures (bounded ring buffer)

pub mod collections;

// Re-export commonly used types
pub use collections::RingBuffer;
