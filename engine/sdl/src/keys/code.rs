use std::ffi::CString;

use sdl2_sys as sdl;

use crate::{Result, keys::Scancode, string_from_ptr};

/// Virtual key, the symbol a key produces under the current keyboard layout.
///
/// Printable keys use their unshifted character. Keys without one use their
/// scancode with bit 30 set.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Code(pub i32);

impl Code {
    pub const SCANCODE_MASK: i32 = 1 << 30;

    pub const UNKNOWN: Self = Self(0);
    pub const RETURN: Self = Self(b'\r' as i32);
    pub const ESCAPE: Self = Self(b'\x1B' as i32);
    pub const BACKSPACE: Self = Self(b'\x08' as i32);
    pub const TAB: Self = Self(b'\t' as i32);
    pub const SPACE: Self = Self(b' ' as i32);
    pub const EXCLAIM: Self = Self(b'!' as i32);
    pub const QUOTEDBL: Self = Self(b'"' as i32);
    pub const HASH: Self = Self(b'#' as i32);
    pub const PERCENT: Self = Self(b'%' as i32);
    pub const DOLLAR: Self = Self(b'$' as i32);
    pub const AMPERSAND: Self = Self(b'&' as i32);
    pub const QUOTE: Self = Self(b'\'' as i32);
    pub const LEFTPAREN: Self = Self(b'(' as i32);
    pub const RIGHTPAREN: Self = Self(b')' as i32);
    pub const ASTERISK: Self = Self(b'*' as i32);
    pub const PLUS: Self = Self(b'+' as i32);
    pub const COMMA: Self = Self(b',' as i32);
    pub const MINUS: Self = Self(b'-' as i32);
    pub const PERIOD: Self = Self(b'.' as i32);
    pub const SLASH: Self = Self(b'/' as i32);
    pub const NUM_0: Self = Self(b'0' as i32);
    pub const NUM_1: Self = Self(b'1' as i32);
    pub const NUM_2: Self = Self(b'2' as i32);
    pub const NUM_3: Self = Self(b'3' as i32);
    pub const NUM_4: Self = Self(b'4' as i32);
    pub const NUM_5: Self = Self(b'5' as i32);
    pub const NUM_6: Self = Self(b'6' as i32);
    pub const NUM_7: Self = Self(b'7' as i32);
    pub const NUM_8: Self = Self(b'8' as i32);
    pub const NUM_9: Self = Self(b'9' as i32);
    pub const COLON: Self = Self(b':' as i32);
    pub const SEMICOLON: Self = Self(b';' as i32);
    pub const LESS: Self = Self(b'<' as i32);
    pub const EQUALS: Self = Self(b'=' as i32);
    pub const GREATER: Self = Self(b'>' as i32);
    pub const QUESTION: Self = Self(b'?' as i32);
    pub const AT: Self = Self(b'@' as i32);
    pub const LEFTBRACKET: Self = Self(b'[' as i32);
    pub const BACKSLASH: Self = Self(b'\\' as i32);
    pub const RIGHTBRACKET: Self = Self(b']' as i32);
    pub const CARET: Self = Self(b'^' as i32);
    pub const UNDERSCORE: Self = Self(b'_' as i32);
    pub const BACKQUOTE: Self = Self(b'`' as i32);
    pub const A: Self = Self(b'a' as i32);
    pub const B: Self = Self(b'b' as i32);
    pub const C: Self = Self(b'c' as i32);
    pub const D: Self = Self(b'd' as i32);
    pub const E: Self = Self(b'e' as i32);
    pub const F: Self = Self(b'f' as i32);
    pub const G: Self = Self(b'g' as i32);
    pub const H: Self = Self(b'h' as i32);
    pub const I: Self = Self(b'i' as i32);
    pub const J: Self = Self(b'j' as i32);
    pub const K: Self = Self(b'k' as i32);
    pub const L: Self = Self(b'l' as i32);
    pub const M: Self = Self(b'm' as i32);
    pub const N: Self = Self(b'n' as i32);
    pub const O: Self = Self(b'o' as i32);
    pub const P: Self = Self(b'p' as i32);
    pub const Q: Self = Self(b'q' as i32);
    pub const R: Self = Self(b'r' as i32);
    pub const S: Self = Self(b's' as i32);
    pub const T: Self = Self(b't' as i32);
    pub const U: Self = Self(b'u' as i32);
    pub const V: Self = Self(b'v' as i32);
    pub const W: Self = Self(b'w' as i32);
    pub const X: Self = Self(b'x' as i32);
    pub const Y: Self = Self(b'y' as i32);
    pub const Z: Self = Self(b'z' as i32);
    pub const CAPSLOCK: Self = Self::from_scancode(Scancode::CAPSLOCK);
    pub const F1: Self = Self::from_scancode(Scancode::F1);
    pub const F2: Self = Self::from_scancode(Scancode::F2);
    pub const F3: Self = Self::from_scancode(Scancode::F3);
    pub const F4: Self = Self::from_scancode(Scancode::F4);
    pub const F5: Self = Self::from_scancode(Scancode::F5);
    pub const F6: Self = Self::from_scancode(Scancode::F6);
    pub const F7: Self = Self::from_scancode(Scancode::F7);
    pub const F8: Self = Self::from_scancode(Scancode::F8);
    pub const F9: Self = Self::from_scancode(Scancode::F9);
    pub const F10: Self = Self::from_scancode(Scancode::F10);
    pub const F11: Self = Self::from_scancode(Scancode::F11);
    pub const F12: Self = Self::from_scancode(Scancode::F12);
    pub const PRINTSCREEN: Self = Self::from_scancode(Scancode::PRINTSCREEN);
    pub const SCROLLLOCK: Self = Self::from_scancode(Scancode::SCROLLLOCK);
    pub const PAUSE: Self = Self::from_scancode(Scancode::PAUSE);
    pub const INSERT: Self = Self::from_scancode(Scancode::INSERT);
    pub const HOME: Self = Self::from_scancode(Scancode::HOME);
    pub const PAGEUP: Self = Self::from_scancode(Scancode::PAGEUP);
    pub const DELETE: Self = Self(b'\x7F' as i32);
    pub const END: Self = Self::from_scancode(Scancode::END);
    pub const PAGEDOWN: Self = Self::from_scancode(Scancode::PAGEDOWN);
    pub const RIGHT: Self = Self::from_scancode(Scancode::RIGHT);
    pub const LEFT: Self = Self::from_scancode(Scancode::LEFT);
    pub const DOWN: Self = Self::from_scancode(Scancode::DOWN);
    pub const UP: Self = Self::from_scancode(Scancode::UP);
    pub const NUMLOCKCLEAR: Self = Self::from_scancode(Scancode::NUMLOCKCLEAR);
    pub const KP_DIVIDE: Self = Self::from_scancode(Scancode::KP_DIVIDE);
    pub const KP_MULTIPLY: Self = Self::from_scancode(Scancode::KP_MULTIPLY);
    pub const KP_MINUS: Self = Self::from_scancode(Scancode::KP_MINUS);
    pub const KP_PLUS: Self = Self::from_scancode(Scancode::KP_PLUS);
    pub const KP_ENTER: Self = Self::from_scancode(Scancode::KP_ENTER);
    pub const KP_1: Self = Self::from_scancode(Scancode::KP_1);
    pub const KP_2: Self = Self::from_scancode(Scancode::KP_2);
    pub const KP_3: Self = Self::from_scancode(Scancode::KP_3);
    pub const KP_4: Self = Self::from_scancode(Scancode::KP_4);
    pub const KP_5: Self = Self::from_scancode(Scancode::KP_5);
    pub const KP_6: Self = Self::from_scancode(Scancode::KP_6);
    pub const KP_7: Self = Self::from_scancode(Scancode::KP_7);
    pub const KP_8: Self = Self::from_scancode(Scancode::KP_8);
    pub const KP_9: Self = Self::from_scancode(Scancode::KP_9);
    pub const KP_0: Self = Self::from_scancode(Scancode::KP_0);
    pub const KP_PERIOD: Self = Self::from_scancode(Scancode::KP_PERIOD);
    pub const APPLICATION: Self = Self::from_scancode(Scancode::APPLICATION);
    pub const POWER: Self = Self::from_scancode(Scancode::POWER);
    pub const KP_EQUALS: Self = Self::from_scancode(Scancode::KP_EQUALS);
    pub const F13: Self = Self::from_scancode(Scancode::F13);
    pub const F14: Self = Self::from_scancode(Scancode::F14);
    pub const F15: Self = Self::from_scancode(Scancode::F15);
    pub const F16: Self = Self::from_scancode(Scancode::F16);
    pub const F17: Self = Self::from_scancode(Scancode::F17);
    pub const F18: Self = Self::from_scancode(Scancode::F18);
    pub const F19: Self = Self::from_scancode(Scancode::F19);
    pub const F20: Self = Self::from_scancode(Scancode::F20);
    pub const F21: Self = Self::from_scancode(Scancode::F21);
    pub const F22: Self = Self::from_scancode(Scancode::F22);
    pub const F23: Self = Self::from_scancode(Scancode::F23);
    pub const F24: Self = Self::from_scancode(Scancode::F24);
    pub const EXECUTE: Self = Self::from_scancode(Scancode::EXECUTE);
    pub const HELP: Self = Self::from_scancode(Scancode::HELP);
    pub const MENU: Self = Self::from_scancode(Scancode::MENU);
    pub const SELECT: Self = Self::from_scancode(Scancode::SELECT);
    pub const STOP: Self = Self::from_scancode(Scancode::STOP);
    pub const AGAIN: Self = Self::from_scancode(Scancode::AGAIN);
    pub const UNDO: Self = Self::from_scancode(Scancode::UNDO);
    pub const CUT: Self = Self::from_scancode(Scancode::CUT);
    pub const COPY: Self = Self::from_scancode(Scancode::COPY);
    pub const PASTE: Self = Self::from_scancode(Scancode::PASTE);
    pub const FIND: Self = Self::from_scancode(Scancode::FIND);
    pub const MUTE: Self = Self::from_scancode(Scancode::MUTE);
    pub const VOLUMEUP: Self = Self::from_scancode(Scancode::VOLUMEUP);
    pub const VOLUMEDOWN: Self = Self::from_scancode(Scancode::VOLUMEDOWN);
    pub const KP_COMMA: Self = Self::from_scancode(Scancode::KP_COMMA);
    pub const KP_EQUALSAS400: Self = Self::from_scancode(Scancode::KP_EQUALSAS400);
    pub const ALTERASE: Self = Self::from_scancode(Scancode::ALTERASE);
    pub const SYSREQ: Self = Self::from_scancode(Scancode::SYSREQ);
    pub const CANCEL: Self = Self::from_scancode(Scancode::CANCEL);
    pub const CLEAR: Self = Self::from_scancode(Scancode::CLEAR);
    pub const PRIOR: Self = Self::from_scancode(Scancode::PRIOR);
    pub const RETURN2: Self = Self::from_scancode(Scancode::RETURN2);
    pub const SEPARATOR: Self = Self::from_scancode(Scancode::SEPARATOR);
    pub const OUT: Self = Self::from_scancode(Scancode::OUT);
    pub const OPER: Self = Self::from_scancode(Scancode::OPER);
    pub const CLEARAGAIN: Self = Self::from_scancode(Scancode::CLEARAGAIN);
    pub const CRSEL: Self = Self::from_scancode(Scancode::CRSEL);
    pub const EXSEL: Self = Self::from_scancode(Scancode::EXSEL);
    pub const KP_00: Self = Self::from_scancode(Scancode::KP_00);
    pub const KP_000: Self = Self::from_scancode(Scancode::KP_000);
    pub const THOUSANDSSEPARATOR: Self = Self::from_scancode(Scancode::THOUSANDSSEPARATOR);
    pub const DECIMALSEPARATOR: Self = Self::from_scancode(Scancode::DECIMALSEPARATOR);
    pub const CURRENCYUNIT: Self = Self::from_scancode(Scancode::CURRENCYUNIT);
    pub const CURRENCYSUBUNIT: Self = Self::from_scancode(Scancode::CURRENCYSUBUNIT);
    pub const KP_LEFTPAREN: Self = Self::from_scancode(Scancode::KP_LEFTPAREN);
    pub const KP_RIGHTPAREN: Self = Self::from_scancode(Scancode::KP_RIGHTPAREN);
    pub const KP_LEFTBRACE: Self = Self::from_scancode(Scancode::KP_LEFTBRACE);
    pub const KP_RIGHTBRACE: Self = Self::from_scancode(Scancode::KP_RIGHTBRACE);
    pub const KP_TAB: Self = Self::from_scancode(Scancode::KP_TAB);
    pub const KP_BACKSPACE: Self = Self::from_scancode(Scancode::KP_BACKSPACE);
    pub const KP_A: Self = Self::from_scancode(Scancode::KP_A);
    pub const KP_B: Self = Self::from_scancode(Scancode::KP_B);
    pub const KP_C: Self = Self::from_scancode(Scancode::KP_C);
    pub const KP_D: Self = Self::from_scancode(Scancode::KP_D);
    pub const KP_E: Self = Self::from_scancode(Scancode::KP_E);
    pub const KP_F: Self = Self::from_scancode(Scancode::KP_F);
    pub const KP_XOR: Self = Self::from_scancode(Scancode::KP_XOR);
    pub const KP_POWER: Self = Self::from_scancode(Scancode::KP_POWER);
    pub const KP_PERCENT: Self = Self::from_scancode(Scancode::KP_PERCENT);
    pub const KP_LESS: Self = Self::from_scancode(Scancode::KP_LESS);
    pub const KP_GREATER: Self = Self::from_scancode(Scancode::KP_GREATER);
    pub const KP_AMPERSAND: Self = Self::from_scancode(Scancode::KP_AMPERSAND);
    pub const KP_DBLAMPERSAND: Self = Self::from_scancode(Scancode::KP_DBLAMPERSAND);
    pub const KP_VERTICALBAR: Self = Self::from_scancode(Scancode::KP_VERTICALBAR);
    pub const KP_DBLVERTICALBAR: Self = Self::from_scancode(Scancode::KP_DBLVERTICALBAR);
    pub const KP_COLON: Self = Self::from_scancode(Scancode::KP_COLON);
    pub const KP_HASH: Self = Self::from_scancode(Scancode::KP_HASH);
    pub const KP_SPACE: Self = Self::from_scancode(Scancode::KP_SPACE);
    pub const KP_AT: Self = Self::from_scancode(Scancode::KP_AT);
    pub const KP_EXCLAM: Self = Self::from_scancode(Scancode::KP_EXCLAM);
    pub const KP_MEMSTORE: Self = Self::from_scancode(Scancode::KP_MEMSTORE);
    pub const KP_MEMRECALL: Self = Self::from_scancode(Scancode::KP_MEMRECALL);
    pub const KP_MEMCLEAR: Self = Self::from_scancode(Scancode::KP_MEMCLEAR);
    pub const KP_MEMADD: Self = Self::from_scancode(Scancode::KP_MEMADD);
    pub const KP_MEMSUBTRACT: Self = Self::from_scancode(Scancode::KP_MEMSUBTRACT);
    pub const KP_MEMMULTIPLY: Self = Self::from_scancode(Scancode::KP_MEMMULTIPLY);
    pub const KP_MEMDIVIDE: Self = Self::from_scancode(Scancode::KP_MEMDIVIDE);
    pub const KP_PLUSMINUS: Self = Self::from_scancode(Scancode::KP_PLUSMINUS);
    pub const KP_CLEAR: Self = Self::from_scancode(Scancode::KP_CLEAR);
    pub const KP_CLEARENTRY: Self = Self::from_scancode(Scancode::KP_CLEARENTRY);
    pub const KP_BINARY: Self = Self::from_scancode(Scancode::KP_BINARY);
    pub const KP_OCTAL: Self = Self::from_scancode(Scancode::KP_OCTAL);
    pub const KP_DECIMAL: Self = Self::from_scancode(Scancode::KP_DECIMAL);
    pub const KP_HEXADECIMAL: Self = Self::from_scancode(Scancode::KP_HEXADECIMAL);
    pub const LCTRL: Self = Self::from_scancode(Scancode::LCTRL);
    pub const LSHIFT: Self = Self::from_scancode(Scancode::LSHIFT);
    pub const LALT: Self = Self::from_scancode(Scancode::LALT);
    pub const LGUI: Self = Self::from_scancode(Scancode::LGUI);
    pub const RCTRL: Self = Self::from_scancode(Scancode::RCTRL);
    pub const RSHIFT: Self = Self::from_scancode(Scancode::RSHIFT);
    pub const RALT: Self = Self::from_scancode(Scancode::RALT);
    pub const RGUI: Self = Self::from_scancode(Scancode::RGUI);
    pub const MODE: Self = Self::from_scancode(Scancode::MODE);
    pub const AUDIONEXT: Self = Self::from_scancode(Scancode::AUDIONEXT);
    pub const AUDIOPREV: Self = Self::from_scancode(Scancode::AUDIOPREV);
    pub const AUDIOSTOP: Self = Self::from_scancode(Scancode::AUDIOSTOP);
    pub const AUDIOPLAY: Self = Self::from_scancode(Scancode::AUDIOPLAY);
    pub const AUDIOMUTE: Self = Self::from_scancode(Scancode::AUDIOMUTE);
    pub const MEDIASELECT: Self = Self::from_scancode(Scancode::MEDIASELECT);
    pub const WWW: Self = Self::from_scancode(Scancode::WWW);
    pub const MAIL: Self = Self::from_scancode(Scancode::MAIL);
    pub const CALCULATOR: Self = Self::from_scancode(Scancode::CALCULATOR);
    pub const COMPUTER: Self = Self::from_scancode(Scancode::COMPUTER);
    pub const AC_SEARCH: Self = Self::from_scancode(Scancode::AC_SEARCH);
    pub const AC_HOME: Self = Self::from_scancode(Scancode::AC_HOME);
    pub const AC_BACK: Self = Self::from_scancode(Scancode::AC_BACK);
    pub const AC_FORWARD: Self = Self::from_scancode(Scancode::AC_FORWARD);
    pub const AC_STOP: Self = Self::from_scancode(Scancode::AC_STOP);
    pub const AC_REFRESH: Self = Self::from_scancode(Scancode::AC_REFRESH);
    pub const AC_BOOKMARKS: Self = Self::from_scancode(Scancode::AC_BOOKMARKS);
    pub const BRIGHTNESSDOWN: Self = Self::from_scancode(Scancode::BRIGHTNESSDOWN);
    pub const BRIGHTNESSUP: Self = Self::from_scancode(Scancode::BRIGHTNESSUP);
    pub const DISPLAYSWITCH: Self = Self::from_scancode(Scancode::DISPLAYSWITCH);
    pub const KBDILLUMTOGGLE: Self = Self::from_scancode(Scancode::KBDILLUMTOGGLE);
    pub const KBDILLUMDOWN: Self = Self::from_scancode(Scancode::KBDILLUMDOWN);
    pub const KBDILLUMUP: Self = Self::from_scancode(Scancode::KBDILLUMUP);
    pub const EJECT: Self = Self::from_scancode(Scancode::EJECT);
    pub const SLEEP: Self = Self::from_scancode(Scancode::SLEEP);
    pub const APP1: Self = Self::from_scancode(Scancode::APP1);
    pub const APP2: Self = Self::from_scancode(Scancode::APP2);
    pub const AUDIOREWIND: Self = Self::from_scancode(Scancode::AUDIOREWIND);
    pub const AUDIOFASTFORWARD: Self = Self::from_scancode(Scancode::AUDIOFASTFORWARD);
    /// The code of a key without a character.
    #[inline]
    pub const fn from_scancode(scancode: Scancode) -> Code {
        Code(scancode.0 | Self::SCANCODE_MASK)
    }

    #[inline]
    pub const fn is_scancode_derived(self) -> bool {
        self.0 & Self::SCANCODE_MASK != 0
    }

    /// Human readable name, empty for keys without one.
    pub fn name(self) -> Result<String> {
        crate::load()?;
        Ok(unsafe { string_from_ptr(sdl::SDL_GetKeyName(self.0)) }.unwrap_or_default())
    }

    /// Looks a key code up by the name [`Code::name`] returns.
    pub fn from_name(name: &str) -> Result<Option<Code>> {
        crate::load()?;
        let name = CString::new(name)?;
        let code = Code(unsafe { sdl::SDL_GetKeyFromName(name.as_ptr()) });
        Ok((code != Code::UNKNOWN).then_some(code))
    }

    /// The physical key producing this code with the current keyboard layout.
    pub fn scancode(self) -> Result<Scancode> {
        crate::load()?;
        Ok(Scancode(unsafe { sdl::SDL_GetScancodeFromKey(self.0) }))
    }
}

impl From<Code> for sdl::Keycode {
    fn from(code: Code) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_codes() {
        assert_eq!(Code::A.0, 'a' as i32);
        assert_eq!(Code::NUM_0.0, '0' as i32);
        assert_eq!(Code::ESCAPE.0, 0x1B);
        assert_eq!(Code::DELETE.0, 0x7F);
        assert!(!Code::SPACE.is_scancode_derived());
    }

    #[test]
    fn scancode_derived_codes() {
        assert_eq!(Code::F1.0, 58 | 1 << 30);
        assert_eq!(Code::RIGHT, Code::from_scancode(Scancode::RIGHT));
        assert_eq!(Code::LEFT.0, 0x4000_0050);
        assert!(Code::CAPSLOCK.is_scancode_derived());
        assert_eq!(Code::AUDIOFASTFORWARD.0 & !Code::SCANCODE_MASK, Scancode::AUDIOFASTFORWARD.0);
    }
}
