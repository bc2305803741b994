use core::fmt;

use crate::bus::{Frequencies, Link, SpiPort};
use crate::driver::Driver;
use crate::fonts::{Font, FontSet};
use crate::pin::{Level, Pin, Role};

/// Display SPI bindings
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPins {
    pub cs: Pin,
    pub dc: Pin,
    pub rst: Pin,
    pub mosi: Pin,
    pub sclk: Pin,
    /// Only needed for read-back
    pub miso: Pin,
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BacklightPin {
    pub pin: Pin,
    pub on_level: Level,
}

/// Touch controller bindings
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPins {
    pub cs: Pin,
    pub clk: Pin,
    pub din: Pin,
    pub dout: Pin,
    /// `Unused` disables pen-down interrupts, the panel is polled instead
    pub irq: Pin,
}

/// A complete board setup for the display library
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserSetup {
    pub id: u16,
    pub driver: Driver,
    pub jpeg: bool,
    pub pins: DisplayPins,
    pub backlight: BacklightPin,
    pub touch: TouchPins,
    pub fonts: FontSet,
    pub port: SpiPort,
    pub frequencies: Frequencies,
}

/// ESP32-S3 board with a 3.5" ILI9488 panel and XPT2046 touch on a shared bus
#[cfg(feature = "ili9488")]
pub const SETUP_70: UserSetup = UserSetup {
    id: 70,
    driver: Driver::Ili9488,
    jpeg: true,
    pins: DisplayPins {
        cs: Pin::Gpio(10),
        dc: Pin::Gpio(21),
        rst: Pin::Gpio(7),
        mosi: Pin::Gpio(11),
        sclk: Pin::Gpio(13),
        miso: Pin::Gpio(4),
    },
    backlight: BacklightPin {
        pin: Pin::Gpio(14),
        on_level: Level::High,
    },
    touch: TouchPins {
        cs: Pin::Gpio(5),
        clk: Pin::Gpio(13),
        din: Pin::Gpio(11),
        dout: Pin::Gpio(4),
        irq: Pin::Unused,
    },
    fonts: FontSet::ALL,
    port: SpiPort::Hspi,
    frequencies: Frequencies {
        write_hz: 75_000_000,
        read_hz: 16_000_000,
        touch_hz: 2_500_000,
    },
};

/// Same board fitted with a 2.8" ILI9341 panel
#[cfg(feature = "ili9341")]
pub const SETUP_70B: UserSetup = UserSetup {
    id: 70,
    driver: Driver::Ili9341,
    jpeg: true,
    pins: DisplayPins {
        cs: Pin::Gpio(10),
        dc: Pin::Gpio(21),
        rst: Pin::Gpio(7),
        mosi: Pin::Gpio(11),
        sclk: Pin::Gpio(13),
        miso: Pin::Gpio(4),
    },
    backlight: BacklightPin {
        pin: Pin::Gpio(14),
        on_level: Level::High,
    },
    touch: TouchPins {
        cs: Pin::Gpio(5),
        clk: Pin::Gpio(13),
        din: Pin::Gpio(11),
        dout: Pin::Gpio(4),
        irq: Pin::Unused,
    },
    fonts: FontSet::ALL,
    port: SpiPort::Hspi,
    frequencies: Frequencies {
        write_hz: 40_000_000,
        read_hz: 16_000_000,
        touch_hz: 2_500_000,
    },
};

const MAX_SYMBOLS: usize = 29;

impl UserSetup {
    pub const fn pin(&self, role: Role) -> Pin {
        match role {
            Role::Cs => self.pins.cs,
            Role::Dc => self.pins.dc,
            Role::Rst => self.pins.rst,
            Role::Mosi => self.pins.mosi,
            Role::Sclk => self.pins.sclk,
            Role::Miso => self.pins.miso,
            Role::Backlight => self.backlight.pin,
            Role::TouchCs => self.touch.cs,
            Role::TouchClk => self.touch.clk,
            Role::TouchDin => self.touch.din,
            Role::TouchDout => self.touch.dout,
            Role::TouchIrq => self.touch.irq,
        }
    }

    pub const fn touch_enabled(&self) -> bool {
        self.touch.cs.is_used()
    }

    pub const fn reads_enabled(&self) -> bool {
        self.pins.miso.is_used()
    }

    /// Touch clock/data lines are unwired or ride on the display bus
    pub const fn touch_shares_bus(&self) -> bool {
        let mut i = 0;
        while i < Role::ALL.len() {
            let role = Role::ALL[i];
            if let Some(bus) = role.shared_with() {
                let touch = self.pin(role);
                if touch.is_used() && touch.raw() != self.pin(bus).raw() {
                    return false;
                }
            }
            i += 1;
        }
        true
    }

    /// The `#define`s the C display library is built with
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> {
        let mut out = [None; MAX_SYMBOLS];
        let mut n = 0;
        let mut push = |name: &'static str, value: SymbolValue| {
            out[n] = Some(Symbol { name, value });
            n += 1;
        };

        push("USER_SETUP_ID", SymbolValue::Int(self.id as i32));
        push(self.driver.symbol(), SymbolValue::Flag);
        if self.jpeg {
            push("SUPPORT_JPEG", SymbolValue::Flag);
            push("TFT_eSPI_ENABLE_JPG", SymbolValue::Flag);
        }
        for role in Role::ALL {
            push(role.symbol(), SymbolValue::Int(self.pin(role).raw() as i32));
            if role == Role::Backlight {
                push("TFT_BACKLIGHT_ON", SymbolValue::Level(self.backlight.on_level));
            }
        }
        for font in self.fonts.iter() {
            push(font.symbol(), SymbolValue::Flag);
        }
        if self.port == SpiPort::Hspi {
            push("USE_HSPI_PORT", SymbolValue::Flag);
        }
        for link in [Link::Write, Link::Read, Link::Touch] {
            push(link.symbol(), SymbolValue::Hz(self.frequencies.get(link)));
        }

        out.into_iter().flatten()
    }

    pub fn has_font(&self, font: Font) -> bool {
        self.fonts.contains(font)
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolValue {
    /// Defined with no value, presence is the setting
    Flag,
    Int(i32),
    /// Clock in Hertz, kept unsigned so fast buses render as written
    Hz(u32),
    Level(Level),
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub name: &'static str,
    pub value: SymbolValue,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            SymbolValue::Flag => write!(f, "#define {}", self.name),
            SymbolValue::Int(v) => write!(f, "#define {} {}", self.name, v),
            SymbolValue::Hz(hz) => write!(f, "#define {} {}", self.name, hz),
            SymbolValue::Level(l) => write!(f, "#define {} {}", self.name, l.symbol()),
        }
    }
}
