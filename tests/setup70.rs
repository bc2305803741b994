#![cfg(feature = "ili9488")]

use embedded_graphics::prelude::Size;
use tft_user_setup::{
    effective_hz, Driver, Font, Level, Link, Pin, Role, SetupError, SpiPort, SymbolValue, ACTIVE,
    SETUP_70,
};

#[test]
fn active_is_setup_70() {
    assert_eq!(ACTIVE, SETUP_70);
    assert_eq!(ACTIVE.id, 70);
    assert_eq!(ACTIVE.driver, Driver::Ili9488);
    assert_eq!(ACTIVE.driver.size(), Size::new(320, 480));
}

#[test]
fn pins_match_board() {
    let expected = [
        (Role::Cs, 10),
        (Role::Dc, 21),
        (Role::Rst, 7),
        (Role::Mosi, 11),
        (Role::Sclk, 13),
        (Role::Miso, 4),
        (Role::Backlight, 14),
        (Role::TouchCs, 5),
        (Role::TouchClk, 13),
        (Role::TouchDin, 11),
        (Role::TouchDout, 4),
        (Role::TouchIrq, -1),
    ];
    for (role, raw) in expected {
        assert_eq!(ACTIVE.pin(role), Pin::from_raw(raw).unwrap(), "{}", role);
    }
    assert_eq!(ACTIVE.backlight.on_level, Level::High);
}

#[test]
fn features_enabled() {
    assert!(ACTIVE.jpeg);
    assert_eq!(ACTIVE.port, SpiPort::Hspi);
    for font in Font::ALL {
        assert!(ACTIVE.has_font(font));
    }
}

#[test]
fn clocks() {
    let f = ACTIVE.frequencies;
    assert_eq!(f.get(Link::Write), 75_000_000);
    assert_eq!(f.get(Link::Read), 16_000_000);
    assert_eq!(f.get(Link::Touch), 2_500_000);
    assert!(f.read_hz <= f.write_hz);
    assert!(f.touch_hz < f.write_hz);
    // the divider lands the write clock on 40 MHz
    assert_eq!(f.effective(Link::Write), 40_000_000);
    assert_eq!(effective_hz(f.read_hz), f.read_hz);
}

#[test]
fn validates() {
    assert_eq!(ACTIVE.validate(), Ok(()));

    let mut broken = ACTIVE;
    broken.pins.sclk = Pin::Unused;
    assert_eq!(broken.validate(), Err(SetupError::MissingPin(Role::Sclk)));
}

#[test]
fn header_symbols() {
    let symbols: Vec<_> = ACTIVE.symbols().collect();
    let value = |name: &str| {
        symbols
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value)
    };

    assert_eq!(value("TFT_CS"), Some(SymbolValue::Int(10)));
    assert_eq!(value("T_IRQ"), Some(SymbolValue::Int(-1)));
    assert_eq!(value("TFT_BACKLIGHT_ON"), Some(SymbolValue::Level(Level::High)));
    assert_eq!(value("TFT_eSPI_ENABLE_JPG"), Some(SymbolValue::Flag));
    assert_eq!(value("SPI_TOUCH_FREQUENCY"), Some(SymbolValue::Hz(2_500_000)));
    assert_eq!(value("ILI9341_DRIVER"), None);

    let header: String = symbols.iter().map(|s| format!("{}\n", s)).collect();
    assert!(header.starts_with("#define USER_SETUP_ID 70\n#define ILI9488_DRIVER\n"));
    assert!(header.ends_with("#define SPI_TOUCH_FREQUENCY 2500000\n"));
}
