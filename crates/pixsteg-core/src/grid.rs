use crate::{Result, SteganoError};

/// An owned 3 dimensional array of 8-bit channel values, indexed `[row][column][channel]`.
///
/// The buffer is stored row-major with interleaved channels, the same layout the
/// `image` crate uses for its `ImageBuffer`, so conversion is a plain move of the `Vec`.
///
/// ## Example of usage
/// ```rust
/// use pixsteg_core::PixelGrid;
///
/// let mut grid = PixelGrid::new(2, 3, 3).expect("Cannot create grid");
/// grid.set(1, 2, 0, 42);
///
/// assert_eq!(grid.get(1, 2, 0), 42);
/// assert_eq!(grid.resolution(), (3, 2, 6));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PixelGrid {
    height: usize,
    width: usize,
    depth: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// creates a zero filled grid of the given shape
    pub fn new(height: usize, width: usize, depth: usize) -> Result<Self> {
        ensure_shape(height, width, depth)?;
        Ok(Self {
            height,
            width,
            depth,
            data: vec![0; height * width * depth],
        })
    }

    /// wraps an existing row-major, channel interleaved buffer
    pub fn from_raw(height: usize, width: usize, depth: usize, data: Vec<u8>) -> Result<Self> {
        ensure_shape(height, width, depth)?;
        let expected = height * width * depth;
        if data.len() != expected {
            return Err(SteganoError::InvalidGrid(format!(
                "buffer holds {} values, shape {height}x{width}x{depth} needs {expected}",
                data.len()
            )));
        }

        Ok(Self {
            height,
            width,
            depth,
            data,
        })
    }

    /// builds a grid by calling `f(row, column, channel)` for every channel value
    pub fn from_fn<F>(height: usize, width: usize, depth: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize, usize) -> u8,
    {
        let mut grid = Self::new(height, width, depth)?;
        for row in 0..height {
            for column in 0..width {
                for channel in 0..depth {
                    grid.set(row, column, channel, f(row, column, channel));
                }
            }
        }

        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// number of channels per pixel
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `(height, width, depth)`
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.height, self.width, self.depth)
    }

    /// `(width, height, width * height)`, the pixel count is the per channel bit capacity
    pub fn resolution(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.width * self.height)
    }

    /// # Panics
    /// if the coordinate lies outside of the grid
    pub fn get(&self, row: usize, column: usize, channel: usize) -> u8 {
        self.data[self.index_of(row, column, channel)]
    }

    /// # Panics
    /// if the coordinate lies outside of the grid
    pub fn get_mut(&mut self, row: usize, column: usize, channel: usize) -> &mut u8 {
        let i = self.index_of(row, column, channel);
        &mut self.data[i]
    }

    /// # Panics
    /// if the coordinate lies outside of the grid
    pub fn set(&mut self, row: usize, column: usize, channel: usize, value: u8) {
        *self.get_mut(row, column, channel) = value;
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn index_of(&self, row: usize, column: usize, channel: usize) -> usize {
        assert!(
            row < self.height && column < self.width && channel < self.depth,
            "coordinate ({row}, {column}, {channel}) is outside of a {}x{}x{} grid",
            self.height,
            self.width,
            self.depth
        );
        (row * self.width + column) * self.depth + channel
    }
}

fn ensure_shape(height: usize, width: usize, depth: usize) -> Result<()> {
    if height == 0 || width == 0 || depth == 0 {
        return Err(SteganoError::InvalidGrid(format!(
            "shape {height}x{width}x{depth} has an empty dimension"
        )));
    }

    Ok(())
}
