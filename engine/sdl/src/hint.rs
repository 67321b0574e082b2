use std::ffi::CString;

use sdl2_sys as sdl;

use crate::{Result, string_from_ptr};

/// Sets an SDL configuration hint with normal priority. Returns whether SDL
/// accepted the value.
pub fn set_hint(name: &str, value: &str) -> Result<bool> {
    crate::load()?;
    let name = CString::new(name)?;
    let value = CString::new(value)?;
    let set = unsafe { sdl::SDL_SetHint(name.as_ptr(), value.as_ptr()) };
    Ok(set == sdl::Bool::True)
}

/// Reads a hint, falling back to the environment variable of the same name
/// as SDL does.
pub fn hint(name: &str) -> Result<Option<String>> {
    crate::load()?;
    let name = CString::new(name)?;
    Ok(unsafe { string_from_ptr(sdl::SDL_GetHint(name.as_ptr())) })
}
