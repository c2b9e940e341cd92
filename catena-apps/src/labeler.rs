//! Connected-component labeling of binary images.
//!
//! Two foreground pixels belong to the same component when one can be
//! reached from the other through horizontal or vertical steps over
//! foreground pixels (4-connectivity). Components are discovered in
//! row-major order and flooded breadth-first from their first pixel.

use std::fmt;

use catena_collections::{Error, LinkedQueue};

/// A pixel coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

/// Pixel count did not match `height * width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMismatch {
    /// `height * width`.
    pub expected: usize,
    /// Pixels supplied.
    pub found: usize,
}

impl fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bitmap expects {} pixels, found {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for ShapeMismatch {}

/// A row-major grid of foreground (`true`) and background (`false`) pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    height: usize,
    width: usize,
    pixels: Vec<bool>,
}

impl Bitmap {
    /// Builds a bitmap from row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`] if `pixels.len() != height * width`.
    pub fn from_pixels(
        height: usize,
        width: usize,
        pixels: Vec<bool>,
    ) -> Result<Self, ShapeMismatch> {
        let expected = height.saturating_mul(width);
        if pixels.len() != expected {
            return Err(ShapeMismatch {
                expected,
                found: pixels.len(),
            });
        }
        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns `true` if the pixel at `point` is foreground.
    ///
    /// # Panics
    ///
    /// Panics if `point` lies outside the bitmap.
    #[inline]
    pub fn is_set(&self, point: Point) -> bool {
        self.pixels[self.offset(point)]
    }

    #[inline]
    fn offset(&self, point: Point) -> usize {
        assert!(
            point.x < self.width && point.y < self.height,
            "{point:?} outside {}x{} bitmap",
            self.width,
            self.height
        );
        point.y * self.width + point.x
    }

    /// The in-bounds 4-neighbours of `point`: right, left, below, above.
    fn neighbours(&self, point: Point) -> impl Iterator<Item = Point> {
        let Point { x, y } = point;
        let (width, height) = (self.width, self.height);
        [
            (x + 1 < width).then(|| Point { x: x + 1, y }),
            x.checked_sub(1).map(|x| Point { x, y }),
            (y + 1 < height).then(|| Point { x, y: y + 1 }),
            y.checked_sub(1).map(|y| Point { x, y }),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bitmap {}x{}", self.width, self.height)?;
        for row in self.pixels.chunks(self.width.max(1)) {
            for &pixel in row {
                f.write_str(if pixel { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Per-pixel component labels.
///
/// Background pixels carry label 0; components are numbered from 1 in the
/// order their first pixel appears in a row-major scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    width: usize,
    labels: Vec<u32>,
    count: usize,
}

impl Labels {
    /// Number of components found.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Label of the pixel at `point`, 0 for background.
    ///
    /// # Panics
    ///
    /// Panics if `point` lies outside the labeled bitmap.
    pub fn get(&self, point: Point) -> u32 {
        assert!(point.x < self.width, "{point:?} outside labeled bitmap");
        self.labels[point.y * self.width + point.x]
    }

    /// Pixel count of each component, indexed by `label - 1`.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.count];
        for &label in self.labels.iter().filter(|&&label| label != 0) {
            sizes[label as usize - 1] += 1;
        }
        sizes
    }
}

/// Labels every 4-connected foreground component of `bitmap`.
///
/// # Errors
///
/// Propagates [`Error::AllocationFailure`] if the frontier queue runs out of
/// node keys, which needs more than `u32::MAX - 1` pending pixels.
pub fn label(bitmap: &Bitmap) -> Result<Labels, Error> {
    let mut labels = vec![0u32; bitmap.pixels.len()];
    let mut frontier: LinkedQueue<Point> = LinkedQueue::new();
    let mut next_label = 1u32;

    for y in 0..bitmap.height {
        for x in 0..bitmap.width {
            let seed = Point { x, y };
            let offset = bitmap.offset(seed);
            if !bitmap.pixels[offset] || labels[offset] != 0 {
                continue;
            }

            labels[offset] = next_label;
            frontier.enqueue(seed)?;
            let mut size = 1usize;

            while !frontier.is_empty() {
                let point = frontier.dequeue()?;
                for neighbour in bitmap.neighbours(point) {
                    let offset = bitmap.offset(neighbour);
                    if bitmap.pixels[offset] && labels[offset] == 0 {
                        // Marked on enqueue so no pixel is queued twice.
                        labels[offset] = next_label;
                        frontier.enqueue(neighbour)?;
                        size += 1;
                    }
                }
            }

            tracing::trace!(label = next_label, ?seed, size, "component flooded");
            next_label += 1;
        }
    }

    Ok(Labels {
        width: bitmap.width,
        labels,
        count: next_label as usize - 1,
    })
}

/// Counts the 4-connected foreground components of `bitmap`.
///
/// # Errors
///
/// Same as [`label`].
pub fn count_components(bitmap: &Bitmap) -> Result<usize, Error> {
    label(bitmap).map(|labels| labels.count())
}
