#![cfg_attr(not(test), no_std)]
//! Typed user setup for a TFT display on an ESP32-S3 board.
//!
//! The setup picks the display controller, binds every SPI/touch/backlight
//! pin, lists the fonts and JPEG support compiled into the graphics library
//! and bounds the SPI clocks. The compiled-in [`ACTIVE`] setup is checked at
//! build time; [`UserSetup::symbols`] yields the `#define`s for the C side.
extern crate bitvec;
extern crate embedded_graphics;
extern crate embedded_hal as hal;

#[cfg(not(any(feature = "ili9488", feature = "ili9341")))]
compile_error!("enable a display driver feature: `ili9488` or `ili9341`");

pub mod backlight;
pub mod bus;
pub mod driver;
pub mod fonts;
pub mod pin;
pub mod setup;
pub mod validate;

#[cfg(feature = "ili9341")]
mod ili9341;
#[cfg(feature = "ili9488")]
mod ili9488;

pub use backlight::Backlight;
pub use bus::{effective_hz, Frequencies, Link, SpiPort};
pub use driver::Driver;
pub use fonts::{Font, FontSet};
pub use pin::{Level, Pin, Role};
#[cfg(feature = "ili9488")]
pub use setup::SETUP_70;
#[cfg(feature = "ili9341")]
pub use setup::SETUP_70B;
pub use setup::{BacklightPin, DisplayPins, Symbol, SymbolValue, TouchPins, UserSetup};
pub use validate::SetupError;

/// The setup this build targets, ILI9488 when both drivers are enabled
#[cfg(feature = "ili9488")]
pub const ACTIVE: UserSetup = SETUP_70;
/// The setup this build targets
#[cfg(all(feature = "ili9341", not(feature = "ili9488")))]
pub const ACTIVE: UserSetup = SETUP_70B;

#[cfg(any(feature = "ili9488", feature = "ili9341"))]
const _: () = assert!(ACTIVE.check().is_ok(), "active user setup is invalid");
