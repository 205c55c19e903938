use memory_sentinel::{heap, Result};

/// A frame buffer allocated through the typed layer, so it is evaluated even
/// without the sentinel's global allocator.
pub fn frame(len: usize) -> Result<Box<[f32]>> {
    heap::new_slice(len, 0.0)
}

pub fn release(frame: Box<[f32]>) {
    heap::delete_slice(frame);
}
