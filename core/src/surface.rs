use crate::error::InputError;
use crate::types::{PixelSize, Point};

/// Pixel extent of the host surface, tracked across resize notifications.
///
/// Invalid until the first notification arrives, and again after the surface
/// is destroyed. While invalid, normalization fails with
/// [`InputError::InvalidSurfaceExtent`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SurfaceExtent {
    size: Option<PixelSize>,
}

impl SurfaceExtent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.size.is_some()
    }

    /// Apply a resize notification. Zero-sized configures are noise from the
    /// host and leave the last good extent in place.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = Some(PixelSize::new(width, height));
    }

    /// Mark the extent invalid, on surface destruction.
    pub fn invalidate(&mut self) {
        self.size = None;
    }

    pub fn size(&self) -> Result<PixelSize, InputError> {
        self.size.ok_or(InputError::InvalidSurfaceExtent)
    }

    /// Map a device-pixel position into the centered unit space: origin at
    /// the surface center, x right, y up, both axes covering [-1, 1].
    pub fn normalize(&self, pixel: Point) -> Result<Point, InputError> {
        let size = self.size()?;
        Ok(Point::new(
            pixel.x / size.width as f32 * 2.0 - 1.0,
            -(pixel.y / size.height as f32 * 2.0 - 1.0),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(width: u32, height: u32) -> SurfaceExtent {
        let mut e = SurfaceExtent::new();
        e.resize(width, height);
        e
    }

    #[test]
    fn test_invalid_before_first_resize() {
        let e = SurfaceExtent::new();
        assert!(!e.is_valid());
        assert_eq!(
            e.normalize(Point::new(1.0, 1.0)),
            Err(InputError::InvalidSurfaceExtent)
        );
    }

    #[test]
    fn test_corners_and_center() {
        let e = extent(1000, 500);
        assert_eq!(e.normalize(Point::new(0.0, 0.0)), Ok(Point::new(-1.0, 1.0)));
        assert_eq!(
            e.normalize(Point::new(1000.0, 500.0)),
            Ok(Point::new(1.0, -1.0))
        );
        assert_eq!(
            e.normalize(Point::new(500.0, 250.0)),
            Ok(Point::new(0.0, 0.0))
        );
        assert_eq!(
            e.normalize(Point::new(750.0, 250.0)),
            Ok(Point::new(0.5, 0.0))
        );
    }

    #[test]
    fn test_zero_resize_is_ignored() {
        let mut e = extent(800, 600);
        e.resize(0, 600);
        e.resize(800, 0);
        assert_eq!(e.size(), Ok(PixelSize::new(800, 600)));
    }

    #[test]
    fn test_invalidate() {
        let mut e = extent(800, 600);
        e.invalidate();
        assert_eq!(
            e.normalize(Point::new(400.0, 300.0)),
            Err(InputError::InvalidSurfaceExtent)
        );
    }
}
