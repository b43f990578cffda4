/// One raster pixel, straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        let [r, g, b, a] = bytes;
        Self::new(r, g, b, a)
    }

    #[must_use]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Unweighted mean of the colour channels, rounded down.
    #[must_use]
    pub fn channel_average(self) -> u8 {
        let sum = u16::from(self.r) + u16::from(self.g) + u16::from(self.b);
        u8::try_from(sum / 3).unwrap_or(u8::MAX)
    }

    #[must_use]
    pub fn to_gray(self) -> Self {
        let avg = self.channel_average();
        Self::new(avg, avg, avg, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_truncates_toward_zero() {
        assert_eq!(Rgba::new(255, 0, 0, 128).channel_average(), 85);
        assert_eq!(Rgba::new(1, 1, 0, 255).channel_average(), 0);
        assert_eq!(Rgba::new(2, 2, 1, 255).channel_average(), 1);
    }

    #[test]
    fn average_of_white_does_not_overflow() {
        assert_eq!(Rgba::new(255, 255, 255, 255).channel_average(), 255);
    }

    #[test]
    fn to_gray_keeps_alpha() {
        assert_eq!(
            Rgba::new(10, 20, 60, 7).to_gray(),
            Rgba::new(30, 30, 30, 7)
        );
    }

    #[test]
    fn bytes_keep_channel_order() {
        let px = Rgba::from_bytes([1, 2, 3, 4]);
        assert_eq!((px.r, px.g, px.b, px.a), (1, 2, 3, 4));
        assert_eq!(px.to_bytes(), [1, 2, 3, 4]);
    }
}
