/// Instance id of an opened joystick. Unique for as long as the device stays
/// connected.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct JoystickId(pub i32);

/// Position of a joystick hat. Diagonals combine two directions.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct HatPosition(pub u8);

impl HatPosition {
    pub const CENTERED: Self = Self(sdl2_sys::HAT_CENTERED);
    pub const UP: Self = Self(sdl2_sys::HAT_UP);
    pub const RIGHT: Self = Self(sdl2_sys::HAT_RIGHT);
    pub const DOWN: Self = Self(sdl2_sys::HAT_DOWN);
    pub const LEFT: Self = Self(sdl2_sys::HAT_LEFT);

    pub const RIGHT_UP: Self = Self(Self::RIGHT.0 | Self::UP.0);
    pub const RIGHT_DOWN: Self = Self(Self::RIGHT.0 | Self::DOWN.0);
    pub const LEFT_UP: Self = Self(Self::LEFT.0 | Self::UP.0);
    pub const LEFT_DOWN: Self = Self(Self::LEFT.0 | Self::DOWN.0);

    pub const fn contains(self, direction: HatPosition) -> bool {
        direction.0 != 0 && self.0 & direction.0 == direction.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonals() {
        assert_eq!(HatPosition::RIGHT_UP.0, 0x03);
        assert_eq!(HatPosition::LEFT_DOWN.0, 0x0C);
        assert!(HatPosition::RIGHT_DOWN.contains(HatPosition::DOWN));
        assert!(!HatPosition::RIGHT_DOWN.contains(HatPosition::UP));
        assert!(!HatPosition::CENTERED.contains(HatPosition::CENTERED));
    }
}
