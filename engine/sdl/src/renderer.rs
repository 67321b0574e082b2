use std::{marker::PhantomData, ptr::NonNull};

use sdl2_sys as sdl;

use crate::{
    Color, Point, Rect, Result, Surface, Texture, Window, check, check_ptr, flags::flags_def,
    rect::raw_rect,
};

flags_def!(RendererFlags: u32);

impl RendererFlags {
    /// The renderer is a software fallback
    pub const SOFTWARE: Self = Self(sdl::RENDERER_SOFTWARE);
    /// The renderer uses hardware acceleration
    pub const ACCELERATED: Self = Self(sdl::RENDERER_ACCELERATED);
    /// Present is synchronized with the refresh rate
    pub const PRESENTVSYNC: Self = Self(sdl::RENDERER_PRESENTVSYNC);
    /// The renderer supports rendering to texture
    pub const TARGETTEXTURE: Self = Self(sdl::RENDERER_TARGETTEXTURE);
}

/// A 2D rendering context for a window. Destroyed on drop, and can't outlive
/// the window it draws to.
pub struct Renderer<'window> {
    renderer: NonNull<sdl::Renderer>,
    phantom: PhantomData<&'window Window>,
}

impl<'window> Renderer<'window> {
    /// Creates a renderer for `window`. An `index` of -1 picks the first
    /// driver supporting `flags`.
    pub fn new(window: &'window Window, index: i32, flags: RendererFlags) -> Result<Self> {
        let renderer =
            check_ptr(unsafe { sdl::SDL_CreateRenderer(window.as_raw(), index, flags.as_raw()) })?;
        Ok(Renderer {
            renderer,
            phantom: PhantomData,
        })
    }

    pub fn as_raw(&self) -> *mut sdl::Renderer {
        self.renderer.as_ptr()
    }

    /// Clears the target with the draw colour.
    pub fn clear(&self) -> Result<()> {
        check(unsafe { sdl::SDL_RenderClear(self.as_raw()) })
    }

    pub fn present(&self) {
        unsafe { sdl::SDL_RenderPresent(self.as_raw()) }
    }

    pub fn set_draw_color(&self, color: Color) -> Result<()> {
        check(unsafe {
            sdl::SDL_SetRenderDrawColor(self.as_raw(), color.r, color.g, color.b, color.a)
        })
    }

    pub fn draw_color(&self) -> Result<Color> {
        let mut color = Color::default();
        check(unsafe {
            sdl::SDL_GetRenderDrawColor(
                self.as_raw(),
                &mut color.r,
                &mut color.g,
                &mut color.b,
                &mut color.a,
            )
        })?;
        Ok(color)
    }

    /// Fills `rect`, or the whole target when `None`.
    pub fn fill_rect(&self, rect: Option<Rect>) -> Result<()> {
        let rect = rect.map(sdl::Rect::from);
        check(unsafe { sdl::SDL_RenderFillRect(self.as_raw(), raw_rect(&rect)) })
    }

    /// Outlines `rect`, or the whole target when `None`.
    pub fn draw_rect(&self, rect: Option<Rect>) -> Result<()> {
        let rect = rect.map(sdl::Rect::from);
        check(unsafe { sdl::SDL_RenderDrawRect(self.as_raw(), raw_rect(&rect)) })
    }

    pub fn draw_line(&self, from: Point, to: Point) -> Result<()> {
        check(unsafe { sdl::SDL_RenderDrawLine(self.as_raw(), from.x, from.y, to.x, to.y) })
    }

    /// Copies `src` of the texture, or all of it, into `dst` of the target, or
    /// all of it, scaling as needed.
    pub fn copy(&self, texture: &Texture, src: Option<Rect>, dst: Option<Rect>) -> Result<()> {
        let src = src.map(sdl::Rect::from);
        let dst = dst.map(sdl::Rect::from);
        check(unsafe {
            sdl::SDL_RenderCopy(
                self.as_raw(),
                texture.as_raw(),
                raw_rect(&src),
                raw_rect(&dst),
            )
        })
    }

    /// Output size in pixels.
    pub fn output_size(&self) -> Result<Point> {
        let mut size = Point::default();
        check(unsafe { sdl::SDL_GetRendererOutputSize(self.as_raw(), &mut size.x, &mut size.y) })?;
        Ok(size)
    }

    pub fn create_texture_from_surface(&self, surface: &Surface) -> Result<Texture<'_>> {
        let texture = check_ptr(unsafe {
            sdl::SDL_CreateTextureFromSurface(self.as_raw(), surface.as_raw())
        })?;
        Ok(unsafe { Texture::from_non_null(texture) })
    }
}

impl Drop for Renderer<'_> {
    fn drop(&mut self) {
        unsafe { sdl::SDL_DestroyRenderer(self.as_raw()) }
    }
}

impl Window {
    /// Shorthand for [`Renderer::new`].
    pub fn create_renderer(&self, index: i32, flags: RendererFlags) -> Result<Renderer<'_>> {
        Renderer::new(self, index, flags)
    }
}
