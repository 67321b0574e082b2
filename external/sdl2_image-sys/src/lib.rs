#![allow(clippy::missing_safety_doc)]

use std::ffi::{c_char, c_int};

use sdl2_sys::{Surface, Version};

pub const MAJOR_VERSION: u8 = 2;
pub const MINOR_VERSION: u8 = 6;
pub const PATCHLEVEL: u8 = 2;

pub const INIT_JPG: c_int = 0x0000_0001;
pub const INIT_PNG: c_int = 0x0000_0002;
pub const INIT_TIF: c_int = 0x0000_0004;
pub const INIT_WEBP: c_int = 0x0000_0008;

sdl2_sys::dynamic_library! {
    name: "SDL2_image",
    env: "SDL2_IMAGE_LIBRARY_PATH",
    candidates: [
        "libSDL2_image-2.0.so.0",
        "libSDL2_image.so",
        "libSDL2_image-2.0.0.dylib",
        "libSDL2_image.dylib",
        "SDL2_image.dll",
    ],
    functions: {
        pub fn IMG_Linked_Version() -> *const Version;
        pub fn IMG_Init(flags: c_int) -> c_int;
        pub fn IMG_Quit();
        pub fn IMG_Load(file: *const c_char) -> *mut Surface;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_flags_are_distinct_bits() {
        let flags = [INIT_JPG, INIT_PNG, INIT_TIF, INIT_WEBP];
        assert_eq!(flags.iter().fold(0, |acc, flag| acc | flag), 0xf);
        assert!(flags.iter().all(|flag| flag.count_ones() == 1));
    }

    #[test]
    fn library_name_tracks_load_state() {
        assert_eq!(library_name().is_some(), is_loaded());
    }
}
