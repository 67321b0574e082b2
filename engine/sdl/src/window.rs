use std::{ffi::CString, ptr::NonNull};

use sdl2_sys as sdl;

use crate::{
    Point, Rect, Result, WindowSurface, check, check_ptr, flags::flags_def,
    string_from_ptr,
};

flags_def!(WindowFlags: u32);

impl WindowFlags {
    /// Fullscreen window
    pub const FULLSCREEN: Self = Self(sdl::WINDOW_FULLSCREEN);
    /// Window usable with OpenGL context
    pub const OPENGL: Self = Self(sdl::WINDOW_OPENGL);
    /// Window is visible
    pub const SHOWN: Self = Self(sdl::WINDOW_SHOWN);
    /// Window is not visible
    pub const HIDDEN: Self = Self(sdl::WINDOW_HIDDEN);
    /// No window decoration
    pub const BORDERLESS: Self = Self(sdl::WINDOW_BORDERLESS);
    /// Window can be resized
    pub const RESIZABLE: Self = Self(sdl::WINDOW_RESIZABLE);
    /// Window is minimized
    pub const MINIMIZED: Self = Self(sdl::WINDOW_MINIMIZED);
    /// Window is maximized
    pub const MAXIMIZED: Self = Self(sdl::WINDOW_MAXIMIZED);
    /// Window has grabbed input focus
    pub const INPUT_GRABBED: Self = Self(sdl::WINDOW_INPUT_GRABBED);
    /// Window has input focus
    pub const INPUT_FOCUS: Self = Self(sdl::WINDOW_INPUT_FOCUS);
    /// Window has mouse focus
    pub const MOUSE_FOCUS: Self = Self(sdl::WINDOW_MOUSE_FOCUS);
    /// Fullscreen at the desktop resolution, includes `FULLSCREEN`.
    pub const FULLSCREEN_DESKTOP: Self = Self(sdl::WINDOW_FULLSCREEN_DESKTOP);
    /// Window not created by SDL
    pub const FOREIGN: Self = Self(sdl::WINDOW_FOREIGN);
    /// Window should be created in high-DPI mode if supported.
    pub const ALLOW_HIGHDPI: Self = Self(sdl::WINDOW_ALLOW_HIGHDPI);
    /// Window has mouse captured (unrelated to INPUT_GRABBED)
    pub const MOUSE_CAPTURE: Self = Self(sdl::WINDOW_MOUSE_CAPTURE);
    /// Window should always be above others
    pub const ALWAYS_ON_TOP: Self = Self(sdl::WINDOW_ALWAYS_ON_TOP);
    /// Window should not be added to the taskbar
    pub const SKIP_TASKBAR: Self = Self(sdl::WINDOW_SKIP_TASKBAR);
    /// Window should be treated as a utility window
    pub const UTILITY: Self = Self(sdl::WINDOW_UTILITY);
    /// Window should be treated as a tooltip
    pub const TOOLTIP: Self = Self(sdl::WINDOW_TOOLTIP);
    /// Window should be treated as a popup menu
    pub const POPUP_MENU: Self = Self(sdl::WINDOW_POPUP_MENU);
    /// Window usable for Vulkan surface
    pub const VULKAN: Self = Self(sdl::WINDOW_VULKAN);
    /// Window usable for Metal view
    pub const METAL: Self = Self(sdl::WINDOW_METAL);
}

/// Position a window wherever the platform likes.
pub const WINDOWPOS_UNDEFINED: i32 = sdl::WINDOWPOS_UNDEFINED;
/// Center a window on the display.
pub const WINDOWPOS_CENTERED: i32 = sdl::WINDOWPOS_CENTERED;

/// A native window, destroyed on drop.
pub struct Window {
    window: NonNull<sdl::Window>,
}

impl Window {
    /// Creates a window with `rect` as its position and size. Use
    /// [`WINDOWPOS_UNDEFINED`] or [`WINDOWPOS_CENTERED`] for the position to
    /// let SDL decide.
    pub fn new(title: &str, rect: Rect, flags: WindowFlags) -> Result<Window> {
        crate::load()?;
        let title = CString::new(title)?;
        let window = check_ptr(unsafe {
            sdl::SDL_CreateWindow(
                title.as_ptr(),
                rect.x,
                rect.y,
                rect.w,
                rect.h,
                flags.as_raw(),
            )
        })?;
        log::debug!("created window {}x{} ({:#x})", rect.w, rect.h, flags.as_raw());
        Ok(Window { window })
    }

    pub fn as_raw(&self) -> *mut sdl::Window {
        self.window.as_ptr()
    }

    pub fn id(&self) -> u32 {
        unsafe { sdl::SDL_GetWindowID(self.as_raw()) }
    }

    /// Client area size in screen coordinates.
    pub fn size(&self) -> Point {
        let mut size = Point::default();
        unsafe { sdl::SDL_GetWindowSize(self.as_raw(), &mut size.x, &mut size.y) };
        size
    }

    pub fn set_size(&self, width: i32, height: i32) {
        unsafe { sdl::SDL_SetWindowSize(self.as_raw(), width, height) }
    }

    pub fn position(&self) -> Point {
        let mut position = Point::default();
        unsafe { sdl::SDL_GetWindowPosition(self.as_raw(), &mut position.x, &mut position.y) };
        position
    }

    pub fn set_title(&self, title: &str) -> Result<()> {
        let title = CString::new(title)?;
        unsafe { sdl::SDL_SetWindowTitle(self.as_raw(), title.as_ptr()) };
        Ok(())
    }

    pub fn title(&self) -> String {
        unsafe { string_from_ptr(sdl::SDL_GetWindowTitle(self.as_raw())) }.unwrap_or_default()
    }

    pub fn flags(&self) -> WindowFlags {
        WindowFlags::from_raw(unsafe { sdl::SDL_GetWindowFlags(self.as_raw()) })
    }

    pub fn show(&self) {
        unsafe { sdl::SDL_ShowWindow(self.as_raw()) }
    }

    pub fn hide(&self) {
        unsafe { sdl::SDL_HideWindow(self.as_raw()) }
    }

    pub fn raise(&self) {
        unsafe { sdl::SDL_RaiseWindow(self.as_raw()) }
    }

    /// Accepts `FULLSCREEN`, `FULLSCREEN_DESKTOP` or an empty set for
    /// windowed mode.
    pub fn set_fullscreen(&self, flags: WindowFlags) -> Result<()> {
        let flags = flags & WindowFlags::FULLSCREEN_DESKTOP;
        check(unsafe { sdl::SDL_SetWindowFullscreen(self.as_raw(), flags.as_raw()) })
    }

    /// The surface SDL created for software drawing to this window. It is
    /// owned by the window and invalidated when the window is resized.
    pub fn surface(&mut self) -> Result<WindowSurface<'_>> {
        let surface = check_ptr(unsafe { sdl::SDL_GetWindowSurface(self.as_raw()) })?;
        Ok(unsafe { WindowSurface::from_non_null(surface) })
    }

    /// Copies the window surface to the screen.
    pub fn update_surface(&self) -> Result<()> {
        check(unsafe { sdl::SDL_UpdateWindowSurface(self.as_raw()) })
    }

    /// Swaps the OpenGL buffers of a window created with `OPENGL`.
    pub fn gl_swap(&self) {
        unsafe { sdl::SDL_GL_SwapWindow(self.as_raw()) }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        unsafe { sdl::SDL_DestroyWindow(self.as_raw()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullscreen_desktop_includes_fullscreen() {
        assert_eq!(WindowFlags::FULLSCREEN_DESKTOP.as_raw(), 0x1001);
        assert!(WindowFlags::FULLSCREEN_DESKTOP.contains(WindowFlags::FULLSCREEN));
    }

    #[test]
    fn window_positions() {
        assert_eq!(WINDOWPOS_UNDEFINED, 0x1FFF_0000);
        assert_eq!(WINDOWPOS_CENTERED, 0x2FFF_0000);
    }
}
