use bitvec::prelude::*;

/// Font assets compiled into the graphics library
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Glcd,
    Font2,
    Font4,
    Font6,
    Font7,
    Font8,
    Gfxff,
    Smooth,
}

impl Font {
    pub const ALL: [Font; 8] = [
        Font::Glcd,
        Font::Font2,
        Font::Font4,
        Font::Font6,
        Font::Font7,
        Font::Font8,
        Font::Gfxff,
        Font::Smooth,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            Font::Glcd => "LOAD_GLCD",
            Font::Font2 => "LOAD_FONT2",
            Font::Font4 => "LOAD_FONT4",
            Font::Font6 => "LOAD_FONT6",
            Font::Font7 => "LOAD_FONT7",
            Font::Font8 => "LOAD_FONT8",
            Font::Gfxff => "LOAD_GFXFF",
            Font::Smooth => "SMOOTH_FONT",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of enabled fonts, one bit per [`Font`]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontSet(u8);

impl FontSet {
    pub const EMPTY: FontSet = FontSet(0);
    pub const ALL: FontSet = FontSet(0xff);

    pub const fn with(self, font: Font) -> Self {
        FontSet(self.0 | font.bit())
    }

    pub const fn without(self, font: Font) -> Self {
        FontSet(self.0 & !font.bit())
    }

    pub const fn contains(self, font: Font) -> bool {
        self.0 & font.bit() != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled fonts in declaration order
    pub fn iter(self) -> impl Iterator<Item = Font> {
        let bits = self.0;
        BitSlice::<u8, Lsb0>::from_element(&bits)
            .iter_ones()
            .map(|i| Font::ALL[i])
            .collect::<FontIter>()
    }
}

/// Owned iterator so the set can be walked without borrowing it
#[derive(Debug, Default)]
pub struct FontIter {
    fonts: [Option<Font>; 8],
    next: usize,
}

impl FromIterator<Font> for FontIter {
    fn from_iter<T: IntoIterator<Item = Font>>(iter: T) -> Self {
        let mut out = FontIter::default();
        for (slot, font) in out.fonts.iter_mut().zip(iter) {
            *slot = Some(font);
        }
        out
    }
}

impl Iterator for FontIter {
    type Item = Font;

    fn next(&mut self) -> Option<Font> {
        let font = *self.fonts.get(self.next)?;
        self.next += 1;
        font
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_ops() {
        let set = FontSet::EMPTY.with(Font::Glcd).with(Font::Smooth);
        assert!(set.contains(Font::Glcd));
        assert!(!set.contains(Font::Font4));
        assert_eq!(set.len(), 2);
        assert_eq!(set.without(Font::Glcd).len(), 1);
        assert!(FontSet::EMPTY.is_empty());
    }

    #[test]
    fn iterates_in_order() {
        let set = FontSet::EMPTY.with(Font::Font8).with(Font::Font2);
        let mut it = set.iter();
        assert_eq!(it.next(), Some(Font::Font2));
        assert_eq!(it.next(), Some(Font::Font8));
        assert_eq!(it.next(), None);
        assert_eq!(FontSet::ALL.iter().count(), 8);
    }
}
