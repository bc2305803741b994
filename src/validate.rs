use core::fmt;

use crate::bus::{Link, MAX_TOUCH_HZ, MAX_WRITE_HZ};
use crate::pin::{Pin, Role};
use crate::setup::UserSetup;

/// Roles the display can't work without
const MANDATORY: [Role; 3] = [Role::Dc, Role::Mosi, Role::Sclk];

/// Highest GPIO number on the ESP32-S3
pub const MAX_GPIO: u8 = 48;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    MissingPin(Role),
    /// No such GPIO on the chip
    InvalidPin(Role, u8),
    /// Wired to the SPI flash / PSRAM
    ReservedPin(Role, u8),
    PinConflict { first: Role, second: Role, gpio: u8 },
    ZeroFrequency(Link),
    FrequencyTooHigh { link: Link, hz: u32, max: u32 },
    ReadExceedsWrite { read_hz: u32, write_hz: u32 },
    TouchNotBelowWrite { touch_hz: u32, write_hz: u32 },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SetupError::MissingPin(role) => write!(f, "{} is not assigned", role),
            SetupError::InvalidPin(role, gpio) => {
                write!(f, "{} uses GPIO{} which does not exist", role, gpio)
            }
            SetupError::ReservedPin(role, gpio) => {
                write!(f, "{} uses GPIO{} which is reserved for flash", role, gpio)
            }
            SetupError::PinConflict {
                first,
                second,
                gpio,
            } => write!(f, "{} and {} both use GPIO{}", first, second, gpio),
            SetupError::ZeroFrequency(link) => write!(f, "{} must be positive", link.symbol()),
            SetupError::FrequencyTooHigh { link, hz, max } => {
                write!(f, "{} of {} Hz exceeds {} Hz", link.symbol(), hz, max)
            }
            SetupError::ReadExceedsWrite { read_hz, write_hz } => write!(
                f,
                "read clock {} Hz is faster than write clock {} Hz",
                read_hz, write_hz
            ),
            SetupError::TouchNotBelowWrite { touch_hz, write_hz } => write!(
                f,
                "touch clock {} Hz is not below write clock {} Hz",
                touch_hz, write_hz
            ),
        }
    }
}

const fn gpio_exists(n: u8) -> bool {
    matches!(n, 0..=21 | 26..=MAX_GPIO)
}

const fn gpio_reserved(n: u8) -> bool {
    matches!(n, 26..=32)
}

impl UserSetup {
    /// Check the setup, usable in const context
    pub const fn check(&self) -> Result<(), SetupError> {
        if let Err(e) = self.check_pins() {
            return Err(e);
        }
        if let Err(e) = self.check_conflicts() {
            return Err(e);
        }
        self.check_frequencies()
    }

    /// Runtime wrapper around [`UserSetup::check`] that logs the outcome
    pub fn validate(&self) -> Result<(), SetupError> {
        let res = self.check();
        match res {
            #[cfg(feature = "defmt")]
            Ok(()) => defmt::debug!("User setup {} ok", self.id),
            #[cfg(feature = "defmt")]
            Err(e) => defmt::warn!("User setup {} rejected: {}", self.id, e),
            #[cfg(not(feature = "defmt"))]
            _ => {}
        }
        res
    }

    const fn check_pins(&self) -> Result<(), SetupError> {
        let mut i = 0;
        while i < MANDATORY.len() {
            if !self.pin(MANDATORY[i]).is_used() {
                return Err(SetupError::MissingPin(MANDATORY[i]));
            }
            i += 1;
        }

        let mut i = 0;
        while i < Role::ALL.len() {
            let role = Role::ALL[i];
            if let Pin::Gpio(n) = self.pin(role) {
                if !gpio_exists(n) {
                    return Err(SetupError::InvalidPin(role, n));
                }
                if gpio_reserved(n) {
                    return Err(SetupError::ReservedPin(role, n));
                }
            }
            i += 1;
        }
        Ok(())
    }

    const fn check_conflicts(&self) -> Result<(), SetupError> {
        let mut i = 0;
        while i < Role::ALL.len() {
            let first = Role::ALL[i];
            let mut j = i + 1;
            while j < Role::ALL.len() {
                let second = Role::ALL[j];
                if let (Pin::Gpio(a), Pin::Gpio(b)) = (self.pin(first), self.pin(second)) {
                    if a == b && !Role::may_share(first, second) {
                        return Err(SetupError::PinConflict {
                            first,
                            second,
                            gpio: a,
                        });
                    }
                }
                j += 1;
            }
            i += 1;
        }
        Ok(())
    }

    const fn check_frequencies(&self) -> Result<(), SetupError> {
        let f = &self.frequencies;
        if f.write_hz == 0 {
            return Err(SetupError::ZeroFrequency(Link::Write));
        }
        if f.read_hz == 0 {
            return Err(SetupError::ZeroFrequency(Link::Read));
        }
        if self.touch_enabled() && f.touch_hz == 0 {
            return Err(SetupError::ZeroFrequency(Link::Touch));
        }

        if f.write_hz > MAX_WRITE_HZ {
            return Err(SetupError::FrequencyTooHigh {
                link: Link::Write,
                hz: f.write_hz,
                max: MAX_WRITE_HZ,
            });
        }
        let max_read = self.driver.max_read_hz();
        if f.read_hz > max_read {
            return Err(SetupError::FrequencyTooHigh {
                link: Link::Read,
                hz: f.read_hz,
                max: max_read,
            });
        }
        if f.touch_hz > MAX_TOUCH_HZ {
            return Err(SetupError::FrequencyTooHigh {
                link: Link::Touch,
                hz: f.touch_hz,
                max: MAX_TOUCH_HZ,
            });
        }

        if f.read_hz > f.write_hz {
            return Err(SetupError::ReadExceedsWrite {
                read_hz: f.read_hz,
                write_hz: f.write_hz,
            });
        }
        if f.touch_hz >= f.write_hz {
            return Err(SetupError::TouchNotBelowWrite {
                touch_hz: f.touch_hz,
                write_hz: f.write_hz,
            });
        }
        Ok(())
    }
}
