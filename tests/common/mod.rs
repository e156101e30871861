//! Shared test infrastructure for pixel-grid integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use pixel_grid::{Color, FrameBuffer, GridMapper, Transport};

// ============================================================================
// Mock Transport
// ============================================================================

/// Error returned by a `MockTransport` set to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockTransportError;

/// Mock transport that records every frame written to it
pub struct MockTransport {
    frames: Vec<Vec<u8>>,
    fail: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            frames: Vec::new(),
            fail: true,
        }
    }

    pub fn frames(&self) -> &[Vec<u8>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl Transport for MockTransport {
    type Error = MockTransportError;

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockTransportError);
        }
        self.frames.push(bytes.to_vec());
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Frame buffer over rows of the given pixel counts
pub fn frame(rows: &[usize], buffers: usize) -> FrameBuffer {
    FrameBuffer::new(GridMapper::new(rows).unwrap(), buffers).unwrap()
}

/// A distinct gray level per chain position: pixel `i` is `(i, i, i)`
pub fn fill_ramp(frame: &mut FrameBuffer, buffer: usize) {
    for (i, color) in frame.get_mut(buffer).unwrap().iter_mut().enumerate() {
        *color = gray(i as f32);
    }
}

pub fn gray(level: f32) -> Color {
    Color::new(level, level, level)
}

/// Red channel of every pixel in a buffer, handy for comparing ramps
pub fn reds(frame: &FrameBuffer, buffer: usize) -> Vec<f32> {
    frame.get(buffer).unwrap().iter().map(|c| c.red).collect()
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Color, b: Color) -> bool {
    const EPSILON: f32 = 0.001;
    colors_equal_epsilon(a, b, EPSILON)
}

/// Compare two colors with custom epsilon
pub fn colors_equal_epsilon(a: Color, b: Color, epsilon: f32) -> bool {
    (a.red - b.red).abs() < epsilon
        && (a.green - b.green).abs() < epsilon
        && (a.blue - b.blue).abs() < epsilon
}
