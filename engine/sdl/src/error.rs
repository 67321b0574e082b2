use std::ffi::{CStr, NulError};

use sdl2_sys as sdl;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The message SDL recorded for the last failing call.
    #[error("sdl: {0}")]
    Sdl(String),
    #[error(transparent)]
    Load(#[from] sdl::LoadError),
    #[error("string contains an interior nul byte")]
    Nul(#[from] NulError),
    #[error("pixel format {0:#010x} is not supported for pixel access")]
    UnsupportedPixelFormat(u32),
    #[error("pixel ({x}, {y}) is outside of the surface")]
    OutOfBounds { x: i32, y: i32 },
    #[error("the main thread is not servicing calls")]
    MainThread,
    #[error("event type {0:#x} is outside the user event range")]
    NotUserEvent(u32),
}

/// Reads the last error SDL recorded for the calling thread.
pub fn get_error() -> Error {
    if !sdl::is_loaded() {
        return Error::Sdl(String::new());
    }
    let message = unsafe {
        let ptr = sdl::SDL_GetError();
        if ptr.is_null() {
            String::new()
        } else {
            CStr::from_ptr(ptr).to_string_lossy().into_owned()
        }
    };
    Error::Sdl(message)
}

pub fn clear_error() {
    if sdl::is_loaded() {
        unsafe { sdl::SDL_ClearError() }
    }
}

/// Maps a negative return code to the current SDL error.
#[inline]
pub(crate) fn check(ret: i32) -> Result<()> {
    if ret < 0 { Err(get_error()) } else { Ok(()) }
}

/// Maps a null return to the current SDL error.
#[inline]
pub(crate) fn check_ptr<T>(ptr: *mut T) -> Result<std::ptr::NonNull<T>> {
    std::ptr::NonNull::new(ptr).ok_or_else(get_error)
}

/// Copies a string owned by SDL, `None` when the pointer is null.
pub(crate) unsafe fn string_from_ptr(ptr: *const std::ffi::c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_maps_negative_codes() {
        assert!(check(0).is_ok());
        assert!(check(3).is_ok());
        assert!(matches!(check(-1), Err(Error::Sdl(_))));
    }

    #[test]
    fn check_ptr_rejects_null() {
        let mut value = 7;
        assert!(check_ptr(&mut value as *mut i32).is_ok());
        assert!(matches!(
            check_ptr(std::ptr::null_mut::<i32>()),
            Err(Error::Sdl(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(Error::Sdl("No video".into()).to_string(), "sdl: No video");
        assert_eq!(
            Error::OutOfBounds { x: 3, y: -1 }.to_string(),
            "pixel (3, -1) is outside of the surface"
        );
        assert_eq!(
            Error::UnsupportedPixelFormat(0x32315659).to_string(),
            "pixel format 0x32315659 is not supported for pixel access"
        );
    }
}
