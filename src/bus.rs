use hal::spi::{Mode, MODE_0};

/// APB clock feeding the ESP32-S3 SPI peripherals
pub const APB_HZ: u32 = 80_000_000;
/// The SPI peripheral can't clock faster than its source
pub const MAX_WRITE_HZ: u32 = APB_HZ;

/// XPT2046 resistive touch controller
pub const TOUCH_MODE: Mode = MODE_0;
pub const MAX_TOUCH_HZ: u32 = 2_500_000;

/// SPI peripheral the display is attached to
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpiPort {
    /// SPI2
    #[default]
    Fspi,
    /// SPI3, `USE_HSPI_PORT`
    Hspi,
}

impl SpiPort {
    pub const fn peripheral(self) -> u8 {
        match self {
            SpiPort::Fspi => 2,
            SpiPort::Hspi => 3,
        }
    }
}

/// Transaction classes, each with its own clock ceiling
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Write,
    Read,
    Touch,
}

impl Link {
    pub const fn symbol(self) -> &'static str {
        match self {
            Link::Write => "SPI_FREQUENCY",
            Link::Read => "SPI_READ_FREQUENCY",
            Link::Touch => "SPI_TOUCH_FREQUENCY",
        }
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frequencies {
    pub write_hz: u32,
    pub read_hz: u32,
    pub touch_hz: u32,
}

impl Frequencies {
    pub const fn get(&self, link: Link) -> u32 {
        match link {
            Link::Write => self.write_hz,
            Link::Read => self.read_hz,
            Link::Touch => self.touch_hz,
        }
    }

    /// Clock the peripheral will really produce for `link`
    pub const fn effective(&self, link: Link) -> u32 {
        effective_hz(self.get(link))
    }
}

/// Round a requested clock down to one the integer APB divider can reach
pub const fn effective_hz(requested: u32) -> u32 {
    if requested == 0 {
        return 0;
    }
    if requested >= APB_HZ {
        return APB_HZ;
    }
    let div = (APB_HZ + requested - 1) / requested;
    APB_HZ / div
}
