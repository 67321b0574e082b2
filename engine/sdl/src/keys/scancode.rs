use std::ffi::CString;

use sdl2_sys as sdl;

use crate::{Result, keys::Code, string_from_ptr};

/// Physical key location, a USB HID usage id from the keyboard page. Does not
/// change with the keyboard layout.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Scancode(pub i32);

impl Scancode {
    pub const UNKNOWN: Self = Self(0);
    pub const A: Self = Self(4);
    pub const B: Self = Self(5);
    pub const C: Self = Self(6);
    pub const D: Self = Self(7);
    pub const E: Self = Self(8);
    pub const F: Self = Self(9);
    pub const G: Self = Self(10);
    pub const H: Self = Self(11);
    pub const I: Self = Self(12);
    pub const J: Self = Self(13);
    pub const K: Self = Self(14);
    pub const L: Self = Self(15);
    pub const M: Self = Self(16);
    pub const N: Self = Self(17);
    pub const O: Self = Self(18);
    pub const P: Self = Self(19);
    pub const Q: Self = Self(20);
    pub const R: Self = Self(21);
    pub const S: Self = Self(22);
    pub const T: Self = Self(23);
    pub const U: Self = Self(24);
    pub const V: Self = Self(25);
    pub const W: Self = Self(26);
    pub const X: Self = Self(27);
    pub const Y: Self = Self(28);
    pub const Z: Self = Self(29);
    pub const NUM_1: Self = Self(30);
    pub const NUM_2: Self = Self(31);
    pub const NUM_3: Self = Self(32);
    pub const NUM_4: Self = Self(33);
    pub const NUM_5: Self = Self(34);
    pub const NUM_6: Self = Self(35);
    pub const NUM_7: Self = Self(36);
    pub const NUM_8: Self = Self(37);
    pub const NUM_9: Self = Self(38);
    pub const NUM_0: Self = Self(39);
    pub const RETURN: Self = Self(40);
    pub const ESCAPE: Self = Self(41);
    pub const BACKSPACE: Self = Self(42);
    pub const TAB: Self = Self(43);
    pub const SPACE: Self = Self(44);
    pub const MINUS: Self = Self(45);
    pub const EQUALS: Self = Self(46);
    pub const LEFTBRACKET: Self = Self(47);
    pub const RIGHTBRACKET: Self = Self(48);
    pub const BACKSLASH: Self = Self(49);
    pub const NONUSHASH: Self = Self(50);
    pub const SEMICOLON: Self = Self(51);
    pub const APOSTROPHE: Self = Self(52);
    pub const GRAVE: Self = Self(53);
    pub const COMMA: Self = Self(54);
    pub const PERIOD: Self = Self(55);
    pub const SLASH: Self = Self(56);
    pub const CAPSLOCK: Self = Self(57);
    pub const F1: Self = Self(58);
    pub const F2: Self = Self(59);
    pub const F3: Self = Self(60);
    pub const F4: Self = Self(61);
    pub const F5: Self = Self(62);
    pub const F6: Self = Self(63);
    pub const F7: Self = Self(64);
    pub const F8: Self = Self(65);
    pub const F9: Self = Self(66);
    pub const F10: Self = Self(67);
    pub const F11: Self = Self(68);
    pub const F12: Self = Self(69);
    pub const PRINTSCREEN: Self = Self(70);
    pub const SCROLLLOCK: Self = Self(71);
    pub const PAUSE: Self = Self(72);
    pub const INSERT: Self = Self(73);
    pub const HOME: Self = Self(74);
    pub const PAGEUP: Self = Self(75);
    pub const DELETE: Self = Self(76);
    pub const END: Self = Self(77);
    pub const PAGEDOWN: Self = Self(78);
    pub const RIGHT: Self = Self(79);
    pub const LEFT: Self = Self(80);
    pub const DOWN: Self = Self(81);
    pub const UP: Self = Self(82);
    pub const NUMLOCKCLEAR: Self = Self(83);
    pub const KP_DIVIDE: Self = Self(84);
    pub const KP_MULTIPLY: Self = Self(85);
    pub const KP_MINUS: Self = Self(86);
    pub const KP_PLUS: Self = Self(87);
    pub const KP_ENTER: Self = Self(88);
    pub const KP_1: Self = Self(89);
    pub const KP_2: Self = Self(90);
    pub const KP_3: Self = Self(91);
    pub const KP_4: Self = Self(92);
    pub const KP_5: Self = Self(93);
    pub const KP_6: Self = Self(94);
    pub const KP_7: Self = Self(95);
    pub const KP_8: Self = Self(96);
    pub const KP_9: Self = Self(97);
    pub const KP_0: Self = Self(98);
    pub const KP_PERIOD: Self = Self(99);
    pub const NONUSBACKSLASH: Self = Self(100);
    pub const APPLICATION: Self = Self(101);
    pub const POWER: Self = Self(102);
    pub const KP_EQUALS: Self = Self(103);
    pub const F13: Self = Self(104);
    pub const F14: Self = Self(105);
    pub const F15: Self = Self(106);
    pub const F16: Self = Self(107);
    pub const F17: Self = Self(108);
    pub const F18: Self = Self(109);
    pub const F19: Self = Self(110);
    pub const F20: Self = Self(111);
    pub const F21: Self = Self(112);
    pub const F22: Self = Self(113);
    pub const F23: Self = Self(114);
    pub const F24: Self = Self(115);
    pub const EXECUTE: Self = Self(116);
    pub const HELP: Self = Self(117);
    pub const MENU: Self = Self(118);
    pub const SELECT: Self = Self(119);
    pub const STOP: Self = Self(120);
    pub const AGAIN: Self = Self(121);
    pub const UNDO: Self = Self(122);
    pub const CUT: Self = Self(123);
    pub const COPY: Self = Self(124);
    pub const PASTE: Self = Self(125);
    pub const FIND: Self = Self(126);
    pub const MUTE: Self = Self(127);
    pub const VOLUMEUP: Self = Self(128);
    pub const VOLUMEDOWN: Self = Self(129);
    pub const KP_COMMA: Self = Self(133);
    pub const KP_EQUALSAS400: Self = Self(134);
    pub const INTERNATIONAL1: Self = Self(135);
    pub const INTERNATIONAL2: Self = Self(136);
    pub const INTERNATIONAL3: Self = Self(137);
    pub const INTERNATIONAL4: Self = Self(138);
    pub const INTERNATIONAL5: Self = Self(139);
    pub const INTERNATIONAL6: Self = Self(140);
    pub const INTERNATIONAL7: Self = Self(141);
    pub const INTERNATIONAL8: Self = Self(142);
    pub const INTERNATIONAL9: Self = Self(143);
    pub const LANG1: Self = Self(144);
    pub const LANG2: Self = Self(145);
    pub const LANG3: Self = Self(146);
    pub const LANG4: Self = Self(147);
    pub const LANG5: Self = Self(148);
    pub const LANG6: Self = Self(149);
    pub const LANG7: Self = Self(150);
    pub const LANG8: Self = Self(151);
    pub const LANG9: Self = Self(152);
    pub const ALTERASE: Self = Self(153);
    pub const SYSREQ: Self = Self(154);
    pub const CANCEL: Self = Self(155);
    pub const CLEAR: Self = Self(156);
    pub const PRIOR: Self = Self(157);
    pub const RETURN2: Self = Self(158);
    pub const SEPARATOR: Self = Self(159);
    pub const OUT: Self = Self(160);
    pub const OPER: Self = Self(161);
    pub const CLEARAGAIN: Self = Self(162);
    pub const CRSEL: Self = Self(163);
    pub const EXSEL: Self = Self(164);
    pub const KP_00: Self = Self(176);
    pub const KP_000: Self = Self(177);
    pub const THOUSANDSSEPARATOR: Self = Self(178);
    pub const DECIMALSEPARATOR: Self = Self(179);
    pub const CURRENCYUNIT: Self = Self(180);
    pub const CURRENCYSUBUNIT: Self = Self(181);
    pub const KP_LEFTPAREN: Self = Self(182);
    pub const KP_RIGHTPAREN: Self = Self(183);
    pub const KP_LEFTBRACE: Self = Self(184);
    pub const KP_RIGHTBRACE: Self = Self(185);
    pub const KP_TAB: Self = Self(186);
    pub const KP_BACKSPACE: Self = Self(187);
    pub const KP_A: Self = Self(188);
    pub const KP_B: Self = Self(189);
    pub const KP_C: Self = Self(190);
    pub const KP_D: Self = Self(191);
    pub const KP_E: Self = Self(192);
    pub const KP_F: Self = Self(193);
    pub const KP_XOR: Self = Self(194);
    pub const KP_POWER: Self = Self(195);
    pub const KP_PERCENT: Self = Self(196);
    pub const KP_LESS: Self = Self(197);
    pub const KP_GREATER: Self = Self(198);
    pub const KP_AMPERSAND: Self = Self(199);
    pub const KP_DBLAMPERSAND: Self = Self(200);
    pub const KP_VERTICALBAR: Self = Self(201);
    pub const KP_DBLVERTICALBAR: Self = Self(202);
    pub const KP_COLON: Self = Self(203);
    pub const KP_HASH: Self = Self(204);
    pub const KP_SPACE: Self = Self(205);
    pub const KP_AT: Self = Self(206);
    pub const KP_EXCLAM: Self = Self(207);
    pub const KP_MEMSTORE: Self = Self(208);
    pub const KP_MEMRECALL: Self = Self(209);
    pub const KP_MEMCLEAR: Self = Self(210);
    pub const KP_MEMADD: Self = Self(211);
    pub const KP_MEMSUBTRACT: Self = Self(212);
    pub const KP_MEMMULTIPLY: Self = Self(213);
    pub const KP_MEMDIVIDE: Self = Self(214);
    pub const KP_PLUSMINUS: Self = Self(215);
    pub const KP_CLEAR: Self = Self(216);
    pub const KP_CLEARENTRY: Self = Self(217);
    pub const KP_BINARY: Self = Self(218);
    pub const KP_OCTAL: Self = Self(219);
    pub const KP_DECIMAL: Self = Self(220);
    pub const KP_HEXADECIMAL: Self = Self(221);
    pub const LCTRL: Self = Self(224);
    pub const LSHIFT: Self = Self(225);
    pub const LALT: Self = Self(226);
    pub const LGUI: Self = Self(227);
    pub const RCTRL: Self = Self(228);
    pub const RSHIFT: Self = Self(229);
    pub const RALT: Self = Self(230);
    pub const RGUI: Self = Self(231);
    pub const MODE: Self = Self(257);
    pub const AUDIONEXT: Self = Self(258);
    pub const AUDIOPREV: Self = Self(259);
    pub const AUDIOSTOP: Self = Self(260);
    pub const AUDIOPLAY: Self = Self(261);
    pub const AUDIOMUTE: Self = Self(262);
    pub const MEDIASELECT: Self = Self(263);
    pub const WWW: Self = Self(264);
    pub const MAIL: Self = Self(265);
    pub const CALCULATOR: Self = Self(266);
    pub const COMPUTER: Self = Self(267);
    pub const AC_SEARCH: Self = Self(268);
    pub const AC_HOME: Self = Self(269);
    pub const AC_BACK: Self = Self(270);
    pub const AC_FORWARD: Self = Self(271);
    pub const AC_STOP: Self = Self(272);
    pub const AC_REFRESH: Self = Self(273);
    pub const AC_BOOKMARKS: Self = Self(274);
    pub const BRIGHTNESSDOWN: Self = Self(275);
    pub const BRIGHTNESSUP: Self = Self(276);
    pub const DISPLAYSWITCH: Self = Self(277);
    pub const KBDILLUMTOGGLE: Self = Self(278);
    pub const KBDILLUMDOWN: Self = Self(279);
    pub const KBDILLUMUP: Self = Self(280);
    pub const EJECT: Self = Self(281);
    pub const SLEEP: Self = Self(282);
    pub const APP1: Self = Self(283);
    pub const APP2: Self = Self(284);
    pub const AUDIOREWIND: Self = Self(285);
    pub const AUDIOFASTFORWARD: Self = Self(286);
    pub const NUM_SCANCODES: i32 = 512;

    /// Human readable name, empty for keys without one.
    pub fn name(self) -> Result<String> {
        crate::load()?;
        Ok(unsafe { string_from_ptr(sdl::SDL_GetScancodeName(self.0)) }.unwrap_or_default())
    }

    /// Looks a scancode up by the name [`Scancode::name`] returns.
    pub fn from_name(name: &str) -> Result<Option<Scancode>> {
        crate::load()?;
        let name = CString::new(name)?;
        let scancode = Scancode(unsafe { sdl::SDL_GetScancodeFromName(name.as_ptr()) });
        Ok((scancode != Scancode::UNKNOWN).then_some(scancode))
    }

    /// The key code this key produces with the current keyboard layout.
    pub fn code(self) -> Result<Code> {
        crate::load()?;
        Ok(Code(unsafe { sdl::SDL_GetKeyFromScancode(self.0) }))
    }
}

impl From<Scancode> for sdl::Scancode {
    fn from(scancode: Scancode) -> Self {
        scancode.0
    }
}
