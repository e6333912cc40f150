//! Convolution kernels
//!
//! A kernel is a small row-major grid of weights with an origin. One-row
//! or one-column kernels are the building blocks of separable filters.

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    width: u32,
    height: u32,
    /// X coordinate of the origin
    cx: u32,
    /// Y coordinate of the origin
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from a slice of values, with the origin at the center.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if either dimension is zero or
    /// `data.len() != width * height`.
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be non-zero, got {width}x{height}"
            )));
        }
        if data.len() != width as usize * height as usize {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} values for a {width}x{height} kernel, got {}",
                width as usize * height as usize,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: data.to_vec(),
        })
    }

    /// Create a normalized horizontal Gaussian kernel for `sigma`.
    ///
    /// The kernel spans `ceil(3 * sigma)` taps on each side of the origin.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] unless `sigma` is finite
    /// and positive.
    pub fn gaussian_1d(sigma: f32) -> FilterResult<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(FilterError::InvalidParameters(format!(
                "gaussian sigma must be positive, got {sigma}"
            )));
        }
        let half = (3.0 * sigma).ceil() as i32;
        let denom = 2.0 * sigma * sigma;
        let data: Vec<f32> = (-half..=half)
            .map(|i| (-((i * i) as f32) / denom).exp())
            .collect();

        let mut kernel = Self::from_slice(data.len() as u32, 1, &data)?;
        kernel.normalize();
        Ok(kernel)
    }

    /// Swap rows and columns, turning a horizontal kernel into a vertical one.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for x in 0..self.width {
            for y in 0..self.height {
                data.push(self.data[(y * self.width + x) as usize]);
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cx: self.cy,
            cy: self.cx,
            data,
        }
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the origin X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the origin Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Normalize the kernel so that values sum to 1.
    ///
    /// A kernel summing to zero is left untouched.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum != 0.0 {
            for v in &mut self.data {
                *v /= sum;
            }
        }
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}
