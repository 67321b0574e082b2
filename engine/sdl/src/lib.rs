//! Safe bindings to SDL2.
//!
//! The native library is opened at run time by [`init`]. Everything that
//! touches a window, renderer or the event queue has to happen on the thread
//! that called [`init`], see [`main_thread`] for running a program on it.

mod error;
pub mod event;
mod flags;
mod gl;
mod hint;
mod joystick;
pub mod keys;
pub mod main_thread;
mod mouse;
mod pixel;
mod rect;
mod renderer;
mod surface;
mod texture;
mod window;

pub use error::{Error, Result, clear_error, get_error};
pub use event::Event;
pub use gl::{
    GlAttr, GlContext, gl_get_attribute, gl_get_proc_address, gl_set_attribute,
    gl_set_swap_interval,
};
pub use hint::{hint, set_hint};
pub use joystick::{HatPosition, JoystickId};
pub use keys::{KeySym, keyboard_modifiers};
pub use mouse::{MouseButton, MouseState, mouse_state, show_cursor};
pub use pixel::{Color, PixelFormat, PixelFormatEnum, PixelLayout, PixelOrder, PixelType};
pub use rect::{Point, Rect};
pub use renderer::{Renderer, RendererFlags};
pub use surface::{PixelData, Surface, WindowSurface};
pub use texture::{Texture, TextureAccess, TextureQuery};
pub use window::{WINDOWPOS_CENTERED, WINDOWPOS_UNDEFINED, Window, WindowFlags};

pub(crate) use error::{check, check_ptr, string_from_ptr};

use sdl2_sys as sdl;

flags::flags_def!(InitFlags: u32);

impl InitFlags {
    pub const TIMER: Self = Self(sdl::INIT_TIMER);
    pub const AUDIO: Self = Self(sdl::INIT_AUDIO);
    /// Implies `EVENTS`.
    pub const VIDEO: Self = Self(sdl::INIT_VIDEO);
    /// Implies `EVENTS`.
    pub const JOYSTICK: Self = Self(sdl::INIT_JOYSTICK);
    pub const HAPTIC: Self = Self(sdl::INIT_HAPTIC);
    /// Implies `JOYSTICK`.
    pub const GAMECONTROLLER: Self = Self(sdl::INIT_GAMECONTROLLER);
    pub const EVENTS: Self = Self(sdl::INIT_EVENTS);
    /// Don't catch fatal signals.
    pub const NOPARACHUTE: Self = Self(sdl::INIT_NOPARACHUTE);

    pub const EVERYTHING: Self = Self(
        Self::TIMER.0
            | Self::AUDIO.0
            | Self::VIDEO.0
            | Self::JOYSTICK.0
            | Self::HAPTIC.0
            | Self::GAMECONTROLLER.0
            | Self::EVENTS.0
            | Self::NOPARACHUTE.0,
    );
}

/// The linked SDL version.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Opens the native library without initializing any subsystem.
pub fn load() -> Result<()> {
    if sdl::is_loaded() {
        return Ok(());
    }
    sdl::load()?;
    log::debug!(
        "loaded SDL2 from `{}`",
        sdl::library_name().unwrap_or_default()
    );
    Ok(())
}

/// Loads SDL and initializes the requested subsystems.
pub fn init(flags: InitFlags) -> Result<()> {
    load()?;
    check(unsafe { sdl::SDL_Init(flags.as_raw()) })?;
    log::debug!("initialized SDL {} ({:#x})", version(), flags.as_raw());
    Ok(())
}

pub fn init_subsystem(flags: InitFlags) -> Result<()> {
    load()?;
    check(unsafe { sdl::SDL_InitSubSystem(flags.as_raw()) })
}

pub fn quit_subsystem(flags: InitFlags) {
    if sdl::is_loaded() {
        unsafe { sdl::SDL_QuitSubSystem(flags.as_raw()) }
    }
}

/// Reports which of `flags` have been initialized. Passing an empty set asks
/// for every initialized subsystem.
pub fn was_init(flags: InitFlags) -> InitFlags {
    if !sdl::is_loaded() {
        return InitFlags::empty();
    }
    InitFlags::from_raw(unsafe { sdl::SDL_WasInit(flags.as_raw()) })
}

/// Shuts down every subsystem. Safe to call when SDL was never loaded.
pub fn quit() {
    if sdl::is_loaded() {
        unsafe { sdl::SDL_Quit() }
    }
}

/// The version of the loaded library, or the version these bindings were
/// written against when nothing has been loaded yet.
pub fn version() -> Version {
    let mut version = sdl::Version::current();
    if sdl::is_loaded() {
        unsafe { sdl::SDL_GetVersion(&mut version) };
    }
    Version {
        major: version.major,
        minor: version.minor,
        patch: version.patch,
    }
}

/// Milliseconds since SDL was initialized.
pub fn ticks() -> u32 {
    unsafe { sdl::SDL_GetTicks() }
}

pub fn delay(ms: u32) {
    unsafe { sdl::SDL_Delay(ms) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_is_every_flag() {
        let all = InitFlags::TIMER
            | InitFlags::AUDIO
            | InitFlags::VIDEO
            | InitFlags::JOYSTICK
            | InitFlags::HAPTIC
            | InitFlags::GAMECONTROLLER
            | InitFlags::EVENTS
            | InitFlags::NOPARACHUTE;
        assert_eq!(InitFlags::EVERYTHING, all);
        assert_eq!(InitFlags::EVERYTHING.cardinality(), 8);
    }

    #[test]
    fn version_display() {
        let version = Version {
            major: 2,
            minor: 0,
            patch: 22,
        };
        assert_eq!(version.to_string(), "2.0.22");
    }
}
