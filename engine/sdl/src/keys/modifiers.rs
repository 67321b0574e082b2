use std::fmt;

use crate::flags::flags_def;

flags_def!(Mod: u16);

impl Mod {
    pub const NONE: Self = Self(0x0000);
    /// Left Shift
    pub const LSHIFT: Self = Self(0x0001);
    /// Right Shift
    pub const RSHIFT: Self = Self(0x0002);
    /// Left Control
    pub const LCTRL: Self = Self(0x0040);
    /// Right Control
    pub const RCTRL: Self = Self(0x0080);
    /// Left Alt
    pub const LALT: Self = Self(0x0100);
    /// Right Alt
    pub const RALT: Self = Self(0x0200);
    /// Left GUI, often the Windows key
    pub const LGUI: Self = Self(0x0400);
    /// Right GUI, often the Windows key
    pub const RGUI: Self = Self(0x0800);
    /// Num Lock
    pub const NUM: Self = Self(0x1000);
    /// Caps Lock
    pub const CAPS: Self = Self(0x2000);
    /// AltGr
    pub const MODE: Self = Self(0x4000);
    /// Scroll Lock
    pub const SCROLL: Self = Self(0x8000);

    pub const CTRL: Self = Self(Self::LCTRL.0 | Self::RCTRL.0);
    pub const SHIFT: Self = Self(Self::LSHIFT.0 | Self::RSHIFT.0);
    pub const ALT: Self = Self(Self::LALT.0 | Self::RALT.0);
    pub const GUI: Self = Self(Self::LGUI.0 | Self::RGUI.0);

    /// Either shift key.
    pub const fn has_shift(self) -> bool {
        self.intersects(Self::SHIFT)
    }

    pub const fn has_ctrl(self) -> bool {
        self.intersects(Self::CTRL)
    }

    pub const fn has_alt(self) -> bool {
        self.intersects(Self::ALT)
    }

    pub const fn has_gui(self) -> bool {
        self.intersects(Self::GUI)
    }
}

const NAMES: [(Mod, &str); 12] = [
    (Mod::LSHIFT, "LShift"),
    (Mod::RSHIFT, "RShift"),
    (Mod::LCTRL, "LCtrl"),
    (Mod::RCTRL, "RCtrl"),
    (Mod::LALT, "LAlt"),
    (Mod::RALT, "RAlt"),
    (Mod::LGUI, "LGUI"),
    (Mod::RGUI, "RGUI"),
    (Mod::NUM, "Num"),
    (Mod::CAPS, "Caps"),
    (Mod::MODE, "Mode"),
    (Mod::SCROLL, "Scroll"),
];

/// Formats as `LShift|LCtrl`, or `None` for no modifiers.
impl fmt::Display for Mod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        let mut first = true;
        for (_, name) in NAMES.iter().filter(|(mask, _)| self.intersects(*mask)) {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Mod::NONE.to_string(), "None");
        assert_eq!((Mod::LCTRL | Mod::LSHIFT).to_string(), "LShift|LCtrl");
        assert_eq!(Mod::GUI.to_string(), "LGUI|RGUI");
        assert_eq!((Mod::CAPS | Mod::RALT).to_string(), "RAlt|Caps");
    }

    #[test]
    fn groups() {
        assert!(Mod::RSHIFT.has_shift());
        assert!(!Mod::RSHIFT.has_ctrl());
        assert!((Mod::LALT | Mod::NUM).has_alt());
        assert!(Mod::RGUI.has_gui());
        assert!(!Mod::NONE.has_gui());
    }
}
