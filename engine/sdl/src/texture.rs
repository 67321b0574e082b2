use std::{marker::PhantomData, ptr::NonNull};

use sdl2_sys as sdl;

use crate::{PixelFormatEnum, Result, check};

#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TextureAccess(pub i32);

impl TextureAccess {
    /// Changes rarely, not lockable
    pub const STATIC: Self = Self(0);
    /// Changes frequently, lockable
    pub const STREAMING: Self = Self(1);
    /// Can be used as a render target
    pub const TARGET: Self = Self(2);
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TextureQuery {
    pub format: PixelFormatEnum,
    pub access: TextureAccess,
    pub width: i32,
    pub height: i32,
}

/// Pixel data in renderer memory. Destroyed on drop, and can't outlive the
/// renderer that created it.
pub struct Texture<'renderer> {
    texture: NonNull<sdl::Texture>,
    phantom: PhantomData<&'renderer ()>,
}

impl Texture<'_> {
    pub(crate) unsafe fn from_non_null(texture: NonNull<sdl::Texture>) -> Self {
        Texture {
            texture,
            phantom: PhantomData,
        }
    }

    pub fn as_raw(&self) -> *mut sdl::Texture {
        self.texture.as_ptr()
    }

    pub fn query(&self) -> Result<TextureQuery> {
        let mut format = 0;
        let mut access = 0;
        let mut width = 0;
        let mut height = 0;
        check(unsafe {
            sdl::SDL_QueryTexture(
                self.as_raw(),
                &mut format,
                &mut access,
                &mut width,
                &mut height,
            )
        })?;
        Ok(TextureQuery {
            format: PixelFormatEnum(format),
            access: TextureAccess(access),
            width,
            height,
        })
    }
}

impl Drop for Texture<'_> {
    fn drop(&mut self) {
        unsafe { sdl::SDL_DestroyTexture(self.as_raw()) }
    }
}
