use embedded_graphics::prelude::Size;
use hal::spi::Mode;

#[cfg(feature = "ili9341")]
use crate::ili9341;
#[cfg(feature = "ili9488")]
use crate::ili9488;

/// Display controller the graphics library is built for
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    #[cfg(feature = "ili9488")]
    Ili9488,
    #[cfg(feature = "ili9341")]
    Ili9341,
}

impl Driver {
    pub const fn symbol(self) -> &'static str {
        match self {
            #[cfg(feature = "ili9488")]
            Driver::Ili9488 => "ILI9488_DRIVER",
            #[cfg(feature = "ili9341")]
            Driver::Ili9341 => "ILI9341_DRIVER",
        }
    }

    pub const fn spi_mode(self) -> Mode {
        match self {
            #[cfg(feature = "ili9488")]
            Driver::Ili9488 => ili9488::MODE,
            #[cfg(feature = "ili9341")]
            Driver::Ili9341 => ili9341::MODE,
        }
    }

    /// Native panel size in portrait orientation
    pub const fn size(self) -> Size {
        match self {
            #[cfg(feature = "ili9488")]
            Driver::Ili9488 => Size::new(ili9488::WIDTH, ili9488::HEIGHT),
            #[cfg(feature = "ili9341")]
            Driver::Ili9341 => Size::new(ili9341::WIDTH, ili9341::HEIGHT),
        }
    }

    /// Bytes clocked out per pixel on the SPI link
    pub const fn bytes_per_pixel(self) -> u8 {
        match self {
            #[cfg(feature = "ili9488")]
            Driver::Ili9488 => ili9488::BYTES_PER_PIXEL,
            #[cfg(feature = "ili9341")]
            Driver::Ili9341 => ili9341::BYTES_PER_PIXEL,
        }
    }

    pub const fn max_read_hz(self) -> u32 {
        match self {
            #[cfg(feature = "ili9488")]
            Driver::Ili9488 => ili9488::MAX_READ_HZ,
            #[cfg(feature = "ili9341")]
            Driver::Ili9341 => ili9341::MAX_READ_HZ,
        }
    }

    /// Bytes needed to push one full frame
    pub const fn frame_bytes(self) -> u32 {
        let size = self.size();
        size.width * size.height * self.bytes_per_pixel() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hal::spi::MODE_0;

    #[cfg(feature = "ili9488")]
    #[test]
    fn ili9488_geometry() {
        let d = Driver::Ili9488;
        assert_eq!(d.size(), Size::new(320, 480));
        assert_eq!(d.bytes_per_pixel(), 3);
        assert_eq!(d.frame_bytes(), 320 * 480 * 3);
        assert!(d.spi_mode() == MODE_0);
        assert_eq!(d.symbol(), "ILI9488_DRIVER");
    }

    #[cfg(feature = "ili9341")]
    #[test]
    fn ili9341_geometry() {
        let d = Driver::Ili9341;
        assert_eq!(d.size(), Size::new(240, 320));
        assert_eq!(d.bytes_per_pixel(), 2);
        assert_eq!(d.symbol(), "ILI9341_DRIVER");
    }
}
