use std::fmt;

use sdl2_sys as sdl;

use crate::{Result, check, flags::flags_def};

#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MouseButton(pub u8);

impl MouseButton {
    pub const LEFT: Self = Self(sdl::BUTTON_LEFT);
    pub const MIDDLE: Self = Self(sdl::BUTTON_MIDDLE);
    pub const RIGHT: Self = Self(sdl::BUTTON_RIGHT);
    pub const X1: Self = Self(sdl::BUTTON_X1);
    pub const X2: Self = Self(sdl::BUTTON_X2);

    /// The bit for this button in a [`MouseState`]. Empty for buttons the
    /// state can't represent.
    pub const fn mask(self) -> MouseState {
        if self.0 == 0 {
            return MouseState(0);
        }
        match 1u32.checked_shl(self.0 as u32 - 1) {
            Some(mask) => MouseState(mask),
            None => MouseState(0),
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::LEFT => f.write_str("LeftMouseButton"),
            Self::MIDDLE => f.write_str("MiddleMouseButton"),
            Self::RIGHT => f.write_str("RightMouseButton"),
            Self::X1 => f.write_str("X1MouseButton"),
            Self::X2 => f.write_str("X2MouseButton"),
            Self(button) => write!(f, "MouseButton({button})"),
        }
    }
}

flags_def!(MouseState: u32);

impl MouseState {
    pub const LEFT: Self = MouseButton::LEFT.mask();
    pub const MIDDLE: Self = MouseButton::MIDDLE.mask();
    pub const RIGHT: Self = MouseButton::RIGHT.mask();
    pub const X1: Self = MouseButton::X1.mask();
    pub const X2: Self = MouseButton::X2.mask();

    pub const fn is_pressed(self, button: MouseButton) -> bool {
        self.intersects(button.mask())
    }
}

/// Cursor position relative to the focused window, and the buttons held.
pub fn mouse_state() -> (i32, i32, MouseState) {
    let mut x = 0;
    let mut y = 0;
    let state = unsafe { sdl::SDL_GetMouseState(&mut x, &mut y) };
    (x, y, MouseState::from_raw(state))
}

/// Shows or hides the cursor. Returns whether it was shown before.
pub fn show_cursor(show: bool) -> Result<bool> {
    let toggle = if show { sdl::ENABLE } else { sdl::DISABLE };
    let previous = unsafe { sdl::SDL_ShowCursor(toggle) };
    check(previous)?;
    Ok(previous == sdl::ENABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks() {
        assert_eq!(MouseButton::LEFT.mask().as_raw(), 0x01);
        assert_eq!(MouseButton::MIDDLE.mask().as_raw(), 0x02);
        assert_eq!(MouseButton::RIGHT.mask().as_raw(), 0x04);
        assert_eq!(MouseButton::X1.mask().as_raw(), 0x08);
        assert_eq!(MouseButton::X2.mask().as_raw(), 0x10);

        assert_eq!(MouseButton(32).mask().as_raw(), 0x8000_0000);
        assert!(MouseButton(33).mask().is_empty());
        assert!(MouseButton(255).mask().is_empty());
        assert!(MouseButton(0).mask().is_empty());

        let state = MouseState::LEFT | MouseState::X2;
        assert!(state.is_pressed(MouseButton::X2));
        assert!(!state.is_pressed(MouseButton(40)));
        assert!(!state.is_pressed(MouseButton::RIGHT));
    }

    #[test]
    fn display() {
        assert_eq!(MouseButton::LEFT.to_string(), "LeftMouseButton");
        assert_eq!(MouseButton::X2.to_string(), "X2MouseButton");
        assert_eq!(MouseButton(9).to_string(), "MouseButton(9)");
    }
}
