/// Collections shared across layers
///
/// - RingBuffer: fixed-capacity circular buffer with discard-oldest eviction

pub mod ringbuffer;

pub use ringbuffer::RingBuffer;
