use bytemuck::{Pod, Zeroable};
use derive_more::{Add, AddAssign, Sub, SubAssign};
use std::mem;

/// The size of something, in pixels.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    /// Constructor
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// An `(x, y)` coordinate.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable, Add, AddAssign, Sub, SubAssign,
)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Constructor
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    /// The distance between two points.
    pub fn dist(self, p2: Point) -> f32 {
        ((self.x - p2.x).powf(2.0) + (self.y - p2.y).powf(2.0)).sqrt()
    }
}

impl From<[f32; 2]> for Point {
    fn from(p: [f32; 2]) -> Self {
        unsafe { mem::transmute(p) }
    }
}

/// An `(x, y, z)` position or axis vector.
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable, Add, AddAssign, Sub, SubAssign)]
#[repr(C)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Pos {
    /// Constructor
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for Pos {
    fn from(p: [f32; 3]) -> Self {
        unsafe { mem::transmute(p) }
    }
}
