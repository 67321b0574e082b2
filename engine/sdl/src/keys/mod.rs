//! Keyboard scancodes, key codes and modifier state.

mod code;
mod modifiers;
mod scancode;

pub use code::Code;
pub use modifiers::Mod;
pub use scancode::Scancode;

use sdl2_sys as sdl;

/// A key as reported by a keyboard event.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct KeySym {
    pub scancode: Scancode,
    pub code: Code,
    pub modifiers: Mod,
}

impl From<sdl::Keysym> for KeySym {
    fn from(keysym: sdl::Keysym) -> Self {
        KeySym {
            scancode: Scancode(keysym.scancode),
            code: Code(keysym.sym),
            modifiers: Mod::from_raw(keysym.modifiers),
        }
    }
}

/// The modifier keys currently held.
pub fn keyboard_modifiers() -> Mod {
    Mod::from_raw(unsafe { sdl::SDL_GetModState() } as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keysym_from_native() {
        let keysym = KeySym::from(sdl::Keysym {
            scancode: 41,
            sym: 0x1B,
            modifiers: 0x0041,
            _unused: 0,
        });
        assert_eq!(keysym.scancode, Scancode::ESCAPE);
        assert_eq!(keysym.code, Code::ESCAPE);
        assert_eq!(keysym.modifiers, Mod::LSHIFT | Mod::LCTRL);
    }
}
