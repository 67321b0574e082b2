use std::{
    ffi::{CString, c_void},
    marker::PhantomData,
    ptr::NonNull,
};

use sdl2_sys as sdl;

use crate::{Result, Window, check, check_ptr};

/// OpenGL attributes to request before creating a window, `SDL_GLattr`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GlAttr(pub i32);

impl GlAttr {
    pub const RED_SIZE: Self = Self(0);
    pub const GREEN_SIZE: Self = Self(1);
    pub const BLUE_SIZE: Self = Self(2);
    pub const ALPHA_SIZE: Self = Self(3);
    pub const BUFFER_SIZE: Self = Self(4);
    pub const DOUBLEBUFFER: Self = Self(5);
    pub const DEPTH_SIZE: Self = Self(6);
    pub const STENCIL_SIZE: Self = Self(7);
    pub const ACCUM_RED_SIZE: Self = Self(8);
    pub const ACCUM_GREEN_SIZE: Self = Self(9);
    pub const ACCUM_BLUE_SIZE: Self = Self(10);
    pub const ACCUM_ALPHA_SIZE: Self = Self(11);
    pub const STEREO: Self = Self(12);
    pub const MULTISAMPLEBUFFERS: Self = Self(13);
    pub const MULTISAMPLESAMPLES: Self = Self(14);
    pub const ACCELERATED_VISUAL: Self = Self(15);
    pub const RETAINED_BACKING: Self = Self(16);
    pub const CONTEXT_MAJOR_VERSION: Self = Self(17);
    pub const CONTEXT_MINOR_VERSION: Self = Self(18);
    pub const CONTEXT_EGL: Self = Self(19);
    pub const CONTEXT_FLAGS: Self = Self(20);
    pub const CONTEXT_PROFILE_MASK: Self = Self(21);
    pub const SHARE_WITH_CURRENT_CONTEXT: Self = Self(22);
    pub const FRAMEBUFFER_SRGB_CAPABLE: Self = Self(23);
    pub const CONTEXT_RELEASE_BEHAVIOR: Self = Self(24);
    pub const CONTEXT_RESET_NOTIFICATION: Self = Self(25);
    pub const CONTEXT_NO_ERROR: Self = Self(26);

    /// Values for `CONTEXT_PROFILE_MASK`.
    pub const PROFILE_CORE: i32 = 0x0001;
    pub const PROFILE_COMPATIBILITY: i32 = 0x0002;
    pub const PROFILE_ES: i32 = 0x0004;
}

/// An OpenGL context, deleted on drop.
pub struct GlContext<'window> {
    context: NonNull<c_void>,
    phantom: PhantomData<&'window Window>,
}

impl<'window> GlContext<'window> {
    /// Creates a context for `window` and makes it current.
    pub fn new(window: &'window Window) -> Result<Self> {
        let context = check_ptr(unsafe { sdl::SDL_GL_CreateContext(window.as_raw()) })?;
        Ok(GlContext {
            context,
            phantom: PhantomData,
        })
    }

    pub fn as_raw(&self) -> sdl::GLContext {
        self.context.as_ptr()
    }

    pub fn make_current(&self, window: &Window) -> Result<()> {
        check(unsafe { sdl::SDL_GL_MakeCurrent(window.as_raw(), self.as_raw()) })
    }
}

impl Drop for GlContext<'_> {
    fn drop(&mut self) {
        unsafe { sdl::SDL_GL_DeleteContext(self.as_raw()) }
    }
}

/// Must be called before the window is created to take effect.
pub fn gl_set_attribute(attr: GlAttr, value: i32) -> Result<()> {
    crate::load()?;
    check(unsafe { sdl::SDL_GL_SetAttribute(attr.0, value) })
}

/// The actual value of an attribute for the current context.
pub fn gl_get_attribute(attr: GlAttr) -> Result<i32> {
    let mut value = 0;
    check(unsafe { sdl::SDL_GL_GetAttribute(attr.0, &mut value) })?;
    Ok(value)
}

/// Resolves an OpenGL function for the current context. Null when the name is
/// unknown.
pub fn gl_get_proc_address(name: &str) -> *const c_void {
    let Ok(name) = CString::new(name) else {
        return std::ptr::null();
    };
    unsafe { sdl::SDL_GL_GetProcAddress(name.as_ptr()) as *const c_void }
}

/// 0 for immediate updates, 1 to wait for vertical retrace, -1 for adaptive
/// vsync.
pub fn gl_set_swap_interval(interval: i32) -> Result<()> {
    check(unsafe { sdl::SDL_GL_SetSwapInterval(interval) })
}
