use hal::spi::{Mode, MODE_0};

pub(crate) const MODE: Mode = MODE_0;
pub(crate) const WIDTH: u32 = 320;
pub(crate) const HEIGHT: u32 = 480;
// 18-bit colour only over SPI
pub(crate) const BYTES_PER_PIXEL: u8 = 3;
pub(crate) const MAX_READ_HZ: u32 = 20_000_000;
