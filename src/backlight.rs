use hal::digital::v2::OutputPin;

use crate::pin::Level;

/// Backlight switch honouring the board's active level
pub struct Backlight<BL> {
    pin: BL,
    on_level: Level,
    on: bool,
}

impl<BL, E> Backlight<BL>
where
    BL: OutputPin<Error = E>,
{
    /// Take the pin and drive it to the "off" level
    pub fn new(pin: BL, on_level: Level) -> Result<Self, E> {
        let mut bl = Self {
            pin,
            on_level,
            on: true,
        };
        bl.off()?;
        Ok(bl)
    }

    pub fn on(&mut self) -> Result<(), E> {
        self.set(true)
    }

    pub fn off(&mut self) -> Result<(), E> {
        self.set(false)
    }

    pub fn set(&mut self, on: bool) -> Result<(), E> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Backlight {}", if on { "on" } else { "off" });
        // High when on XOR active-low
        let high = on == (self.on_level == Level::High);
        if high {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        self.on = on;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Give the pin back
    pub fn release(self) -> BL {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    #[derive(Default)]
    struct MockPin {
        high: bool,
        writes: usize,
    }

    impl OutputPin for MockPin {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn active_high() {
        let mut bl = Backlight::new(MockPin::default(), Level::High).unwrap();
        assert!(!bl.is_on());
        bl.on().unwrap();
        assert!(bl.is_on());
        let pin = bl.release();
        assert!(pin.high);
        assert_eq!(pin.writes, 2);
    }

    #[test]
    fn active_low() {
        let mut bl = Backlight::new(MockPin::default(), Level::Low).unwrap();
        assert!(bl.release().high);

        let mut bl = Backlight::new(MockPin::default(), Level::Low).unwrap();
        bl.set(true).unwrap();
        assert!(!bl.release().high);
    }

    struct BrokenPin;

    impl OutputPin for BrokenPin {
        type Error = ();

        fn set_low(&mut self) -> Result<(), ()> {
            Err(())
        }

        fn set_high(&mut self) -> Result<(), ()> {
            Err(())
        }
    }

    #[test]
    fn pin_errors_propagate() {
        assert!(Backlight::new(BrokenPin, Level::High).is_err());
    }
}
