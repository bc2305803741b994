use core::fmt;

/// A GPIO assignment, or the `-1` sentinel meaning the line is not wired
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pin {
    Gpio(u8),
    Unused,
}

impl Pin {
    /// Build a pin from the raw value used in the C setup headers
    ///
    /// `-1` is the "unused" sentinel, other negative values are rejected.
    pub const fn from_raw(raw: i16) -> Option<Self> {
        match raw {
            -1 => Some(Pin::Unused),
            0..=255 => Some(Pin::Gpio(raw as u8)),
            _ => None,
        }
    }

    pub const fn raw(self) -> i16 {
        match self {
            Pin::Gpio(n) => n as i16,
            Pin::Unused => -1,
        }
    }

    pub const fn gpio(self) -> Option<u8> {
        match self {
            Pin::Gpio(n) => Some(n),
            Pin::Unused => None,
        }
    }

    pub const fn is_used(self) -> bool {
        matches!(self, Pin::Gpio(_))
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub const fn symbol(self) -> &'static str {
        match self {
            Level::Low => "LOW",
            Level::High => "HIGH",
        }
    }
}

/// Every pin role a setup binds
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Cs,
    Dc,
    Rst,
    Mosi,
    Sclk,
    Miso,
    Backlight,
    TouchCs,
    TouchClk,
    TouchDin,
    TouchDout,
    TouchIrq,
}

impl Role {
    pub const ALL: [Role; 12] = [
        Role::Cs,
        Role::Dc,
        Role::Rst,
        Role::Mosi,
        Role::Sclk,
        Role::Miso,
        Role::Backlight,
        Role::TouchCs,
        Role::TouchClk,
        Role::TouchDin,
        Role::TouchDout,
        Role::TouchIrq,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            Role::Cs => "TFT_CS",
            Role::Dc => "TFT_DC",
            Role::Rst => "TFT_RST",
            Role::Mosi => "TFT_MOSI",
            Role::Sclk => "TFT_SCLK",
            Role::Miso => "TFT_MISO",
            Role::Backlight => "TFT_BL",
            Role::TouchCs => "TOUCH_CS",
            Role::TouchClk => "T_CLK",
            Role::TouchDin => "T_DIN",
            Role::TouchDout => "T_DO",
            Role::TouchIrq => "T_IRQ",
        }
    }

    /// The display bus line a touch line may share without conflict
    pub(crate) const fn shared_with(self) -> Option<Role> {
        match self {
            Role::TouchClk => Some(Role::Sclk),
            Role::TouchDin => Some(Role::Mosi),
            Role::TouchDout => Some(Role::Miso),
            _ => None,
        }
    }

    /// `a` and `b` may carry the same GPIO (bus sharing, chip-selects keep them apart)
    pub(crate) const fn may_share(a: Role, b: Role) -> bool {
        let a_ok = match a.shared_with() {
            Some(r) => r as u8 == b as u8,
            None => false,
        };
        let b_ok = match b.shared_with() {
            Some(r) => r as u8 == a as u8,
            None => false,
        };
        a_ok || b_ok
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
