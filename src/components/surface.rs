//! RGBA8 pixel buffer.
//!
//! Reads outside the buffer return transparent black and writes outside it
//! are dropped, so callers can probe neighbours without bounds checks.

use crate::error::{EngineError, EngineResult};

pub type Color = [u8; 4];

const TRANSPARENT: Color = [0, 0, 0, 0];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Create a transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Surface {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Wrap raw RGBA data, row-major from the top-left pixel.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> EngineResult<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return Err(EngineError::InvalidBuffer {
                len: data.len(),
                width,
                height,
            });
        }
        Ok(Surface {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some((x as usize + y as usize * self.width as usize) * 4)
    }

    pub fn get_at(&self, x: i64, y: i64) -> Color {
        let Some(start) = self.index(x, y) else {
            return TRANSPARENT;
        };
        let mut color = TRANSPARENT;
        color.copy_from_slice(&self.data[start..start + 4]);
        color
    }

    /// Write a colour. Missing components are written as 0 and extra
    /// components are ignored.
    pub fn set_at(&mut self, x: i64, y: i64, color: &[u8]) {
        let Some(start) = self.index(x, y) else {
            return;
        };
        for (i, slot) in self.data[start..start + 4].iter_mut().enumerate() {
            *slot = color.get(i).copied().unwrap_or(0);
        }
    }

    pub fn fill(&mut self, color: &[u8]) {
        let mut pixel = TRANSPARENT;
        for (i, slot) in pixel.iter_mut().enumerate() {
            *slot = color.get(i).copied().unwrap_or(0);
        }
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&pixel);
        }
    }

    /// Compare the components both colours have. Two empty colours are not
    /// equal.
    pub fn is_color_equal(first: &[u8], second: &[u8]) -> bool {
        let length = first.len().min(second.len());
        length > 0 && first[..length] == second[..length]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_is_transparent() {
        let surface = Surface::new(3, 2);
        assert_eq!(surface.data().len(), 24);
        assert_eq!(surface.get_at(2, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn test_set_and_get() {
        let mut surface = Surface::new(3, 2);
        surface.set_at(1, 1, &[10, 20, 30, 40]);
        assert_eq!(surface.get_at(1, 1), [10, 20, 30, 40]);
        assert_eq!(&surface.data()[16..20], &[10, 20, 30, 40]);
    }

    #[test]
    fn test_short_colour_is_padded() {
        let mut surface = Surface::new(1, 1);
        surface.fill(&[9, 9, 9, 9]);
        surface.set_at(0, 0, &[255, 128, 1]);
        assert_eq!(surface.get_at(0, 0), [255, 128, 1, 0]);
        surface.set_at(0, 0, &[1, 2, 3, 4, 5]);
        assert_eq!(surface.get_at(0, 0), [1, 2, 3, 4]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut surface = Surface::new(2, 2);
        surface.fill(&[255, 255, 255, 255]);
        for (x, y) in [(-1, 0), (0, -1), (2, 0), (0, 2)] {
            assert_eq!(surface.get_at(x, y), [0, 0, 0, 0]);
            surface.set_at(x, y, &[1, 1, 1, 1]);
        }
        assert!(surface.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_from_data_checks_length() {
        let surface = Surface::from_data(1, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(surface.get_at(0, 1), [5, 6, 7, 8]);
        let err = Surface::from_data(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_is_color_equal() {
        assert!(Surface::is_color_equal(&[1, 2, 3], &[1, 2, 3, 255]));
        assert!(!Surface::is_color_equal(&[1, 2, 3], &[1, 2, 4]));
        assert!(!Surface::is_color_equal(&[], &[]));
        assert!(!Surface::is_color_equal(&[1], &[]));
    }
}
