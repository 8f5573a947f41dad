//! The encoded observation tensor.

/// A 4-D float tensor with shape `(1, channels, height, width)`.
///
/// Data is flat row-major: channel-major, then row, then column. The
/// leading batch axis is always 1; it exists so the buffer can be
/// handed to a network without reshaping. Allocated fresh per encode
/// call; nothing is cached across ticks.
///
/// # Examples
///
/// ```
/// use vantage_obs::EncodedTensor;
///
/// let t = EncodedTensor::new(vec![0.0, 1.0, 2.0, 3.0], 1, 2, 2);
/// assert_eq!(t.shape(), [1, 1, 2, 2]);
/// assert_eq!(t.at(0, 1, 0), 2.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedTensor {
    data: Vec<f32>,
    channels: usize,
    height: usize,
    width: usize,
}

impl EncodedTensor {
    /// Wrap a flat buffer with its channel/spatial shape.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != channels * height * width`.
    pub fn new(data: Vec<f32>, channels: usize, height: usize, width: usize) -> Self {
        assert_eq!(
            data.len(),
            channels * height * width,
            "tensor buffer is {} values but shape (1, {channels}, {height}, {width}) needs {}",
            data.len(),
            channels * height * width,
        );
        Self {
            data,
            channels,
            height,
            width,
        }
    }

    /// Shape as `[batch, channels, height, width]`; batch is always 1.
    pub fn shape(&self) -> [usize; 4] {
        [1, self.channels, self.height, self.width]
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Spatial height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Spatial width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The value at `(channel, row, col)` in the single batch element.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn at(&self, channel: usize, row: usize, col: usize) -> f32 {
        assert!(channel < self.channels && row < self.height && col < self.width);
        self.data[(channel * self.height + row) * self.width + col]
    }

    /// The flat backing buffer, row-major in `(channel, row, col)`.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// The channel offset (relative to `first_channel`) holding the
    /// largest value at one spatial position.
    ///
    /// Recovers the raw category from an expanded categorical block.
    pub fn argmax_channel(&self, first_channel: usize, count: usize, row: usize, col: usize) -> usize {
        (0..count)
            .max_by(|&a, &b| {
                self.at(first_channel + a, row, col)
                    .total_cmp(&self.at(first_channel + b, row, col))
            })
            .unwrap_or(0)
    }
}
