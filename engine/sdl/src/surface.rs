use std::{
    marker::PhantomData,
    mem::ManuallyDrop,
    ops::Deref,
    ptr::NonNull,
};

use sdl2_sys as sdl;

use crate::{
    Color, Error, PixelFormat, PixelFormatEnum, Point, Rect, Renderer, Result, Texture, Window,
    check, check_ptr, rect::raw_rect,
};

/// A block of pixels in system memory, freed on drop.
pub struct Surface {
    surface: NonNull<sdl::Surface>,
}

impl Surface {
    /// Allocates a zeroed surface with the given pixel format.
    pub fn new(width: i32, height: i32, format: PixelFormatEnum) -> Result<Surface> {
        crate::load()?;
        let surface = check_ptr(unsafe {
            sdl::SDL_CreateRGBSurfaceWithFormat(
                0,
                width,
                height,
                format.bits_per_pixel() as i32,
                format.0,
            )
        })?;
        Ok(unsafe { Surface::from_non_null(surface) })
    }

    /// Takes ownership of a surface returned by SDL. A null pointer is taken
    /// to mean the call that produced it failed.
    ///
    /// # Safety
    ///
    /// `surface` must be null or a valid surface that nothing else frees.
    pub unsafe fn from_raw(surface: *mut sdl::Surface) -> Result<Surface> {
        let surface = check_ptr(surface)?;
        Ok(unsafe { Surface::from_non_null(surface) })
    }

    pub(crate) unsafe fn from_non_null(surface: NonNull<sdl::Surface>) -> Surface {
        Surface { surface }
    }

    pub fn as_raw(&self) -> *mut sdl::Surface {
        self.surface.as_ptr()
    }

    #[inline]
    fn raw(&self) -> &sdl::Surface {
        unsafe { self.surface.as_ref() }
    }

    pub fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    pub fn width(&self) -> i32 {
        self.raw().w
    }

    pub fn height(&self) -> i32 {
        self.raw().h
    }

    /// Length of a row of pixels in bytes.
    pub fn pitch(&self) -> i32 {
        self.raw().pitch
    }

    pub fn format(&self) -> PixelFormatEnum {
        match unsafe { self.raw().format.as_ref() } {
            Some(format) => PixelFormatEnum(format.format),
            None => PixelFormatEnum::UNKNOWN,
        }
    }

    /// Copies the full format descriptor, including the palette.
    pub fn pixel_format(&self) -> Result<PixelFormat> {
        match unsafe { self.raw().format.as_ref() } {
            Some(format) => Ok(unsafe { PixelFormat::from_raw(format) }),
            None => Err(Error::UnsupportedPixelFormat(PixelFormatEnum::UNKNOWN.0)),
        }
    }

    /// Fills `rect`, or the whole surface when `None`, with `color` mapped to
    /// the surface's format.
    pub fn fill_rect(&mut self, rect: Option<Rect>, color: Color) -> Result<()> {
        unsafe { fill_rect(self.surface, rect, color) }
    }

    /// Locks the pixels for direct access until the returned guard is dropped.
    pub fn lock(&mut self) -> Result<PixelData<'_>> {
        unsafe { lock(self.surface) }
    }

    /// Uploads the surface into a texture owned by `renderer`.
    pub fn to_texture<'r>(&self, renderer: &'r Renderer<'_>) -> Result<Texture<'r>> {
        renderer.create_texture_from_surface(self)
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        unsafe { sdl::SDL_FreeSurface(self.as_raw()) }
    }
}

/// # Safety
///
/// `surface` must be valid and not aliased mutably elsewhere.
unsafe fn fill_rect(surface: NonNull<sdl::Surface>, rect: Option<Rect>, color: Color) -> Result<()> {
    let rect = rect.map(sdl::Rect::from);
    unsafe {
        let format = surface.as_ref().format;
        let pixel = sdl::SDL_MapRGBA(format, color.r, color.g, color.b, color.a);
        check(sdl::SDL_FillRect(surface.as_ptr(), raw_rect(&rect), pixel))
    }
}

/// # Safety
///
/// `surface` must be valid and stay exclusively borrowed for `'a`.
unsafe fn lock<'a>(surface: NonNull<sdl::Surface>) -> Result<PixelData<'a>> {
    let format = match unsafe { surface.as_ref().format.as_ref() } {
        Some(format) => unsafe { PixelFormat::from_raw(format) },
        None => return Err(Error::UnsupportedPixelFormat(PixelFormatEnum::UNKNOWN.0)),
    };
    check(unsafe { sdl::SDL_LockSurface(surface.as_ptr()) })?;

    let raw = unsafe { surface.as_ref() };
    let (width, height, pitch) = (raw.w, raw.h, raw.pitch);
    let len = pitch.max(0) as usize * height.max(0) as usize;
    let pixels = raw.pixels as *mut u8;

    let pixels = if pixels.is_null() || len == 0 {
        &mut []
    } else {
        unsafe { std::slice::from_raw_parts_mut(pixels, len) }
    };

    Ok(PixelData {
        pixels,
        width,
        height,
        pitch: pitch as usize,
        format,
        surface: Some(surface),
    })
}

/// The surface of a window. Owned by the window, so it is never freed here.
///
/// Only shared access to the inner [`Surface`] is handed out, it can't be
/// moved out of the window:
///
/// ```compile_fail
/// fn take(surface: &mut sdl::WindowSurface<'_>, other: sdl::Surface) -> sdl::Surface {
///     std::mem::replace(&mut **surface, other)
/// }
/// ```
pub struct WindowSurface<'window> {
    surface: ManuallyDrop<Surface>,
    phantom: PhantomData<&'window mut Window>,
}

impl WindowSurface<'_> {
    /// # Safety
    ///
    /// `surface` must be the surface of a window that outlives the result.
    pub(crate) unsafe fn from_non_null(surface: NonNull<sdl::Surface>) -> Self {
        WindowSurface {
            surface: ManuallyDrop::new(unsafe { Surface::from_non_null(surface) }),
            phantom: PhantomData,
        }
    }

    /// See [`Surface::fill_rect`].
    pub fn fill_rect(&mut self, rect: Option<Rect>, color: Color) -> Result<()> {
        unsafe { fill_rect(self.surface.surface, rect, color) }
    }

    /// See [`Surface::lock`].
    pub fn lock(&mut self) -> Result<PixelData<'_>> {
        unsafe { lock(self.surface.surface) }
    }
}

impl Deref for WindowSurface<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.surface
    }
}

/// Locked pixels of a surface. Unlocks the surface on drop.
pub struct PixelData<'a> {
    pixels: &'a mut [u8],
    width: i32,
    height: i32,
    pitch: usize,
    format: PixelFormat,
    surface: Option<NonNull<sdl::Surface>>,
}

impl<'a> PixelData<'a> {
    /// Wraps pixels that are not backed by a native surface.
    pub fn from_bytes(
        pixels: &'a mut [u8],
        width: i32,
        height: i32,
        pitch: usize,
        format: PixelFormat,
    ) -> PixelData<'a> {
        PixelData {
            pixels,
            width,
            height,
            pitch,
            format,
            surface: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn format(&self) -> &PixelFormat {
        &self.format
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    pub fn bytes(&self) -> &[u8] {
        &*self.pixels
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.pixels
    }

    fn offset(&self, x: i32, y: i32) -> Result<usize> {
        self.format.check_access()?;
        if !self.bounds().contains_point(Point::new(x, y)) {
            return Err(Error::OutOfBounds { x, y });
        }
        let offset = y as usize * self.pitch + x as usize * self.format.bytes_per_pixel() as usize;
        if offset + self.format.bytes_per_pixel() as usize > self.pixels.len() {
            return Err(Error::OutOfBounds { x, y });
        }
        Ok(offset)
    }

    pub fn at(&self, x: i32, y: i32) -> Result<Color> {
        let offset = self.offset(x, y)?;
        self.format.read(&self.pixels[offset..])
    }

    pub fn set(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        let offset = self.offset(x, y)?;
        self.format.write(&mut self.pixels[offset..], color)
    }
}

impl Drop for PixelData<'_> {
    fn drop(&mut self) {
        if let Some(surface) = self.surface {
            unsafe { sdl::SDL_UnlockSurface(surface.as_ptr()) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xrgb8888() -> PixelFormat {
        PixelFormat::from_masks(
            PixelFormatEnum::RGB888,
            24,
            0x00FF_0000,
            0x0000_FF00,
            0x0000_00FF,
            0,
        )
    }

    #[test]
    fn pixel_access_respects_pitch() {
        // Two rows of three pixels, padded to 16 bytes per row.
        let mut bytes = [0u8; 32];
        let mut pixels = PixelData::from_bytes(&mut bytes, 3, 2, 16, xrgb8888());
        assert_eq!(pixels.bounds(), Rect::new(0, 0, 3, 2));

        pixels.set(2, 1, Color::rgb(0x10, 0x20, 0x30)).unwrap();
        assert_eq!(pixels.at(2, 1).unwrap(), Color::rgb(0x10, 0x20, 0x30));
        assert_eq!(pixels.at(0, 0).unwrap(), Color::rgb(0, 0, 0));

        drop(pixels);
        let offset = 16 + 2 * 4;
        let value = u32::from_ne_bytes(bytes[offset..offset + 4].try_into().unwrap());
        assert_eq!(value, 0x0010_2030);
    }

    #[test]
    fn pixel_access_out_of_bounds() {
        let mut bytes = [0u8; 24];
        let mut pixels = PixelData::from_bytes(&mut bytes, 3, 2, 12, xrgb8888());
        assert!(matches!(pixels.at(3, 0), Err(Error::OutOfBounds { x: 3, y: 0 })));
        assert!(matches!(pixels.at(0, -1), Err(Error::OutOfBounds { x: 0, y: -1 })));
        assert!(matches!(
            pixels.set(0, 2, Color::WHITE),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn pixel_access_short_buffer() {
        // Claims two rows but only holds one.
        let mut bytes = [0u8; 12];
        let pixels = PixelData::from_bytes(&mut bytes, 3, 2, 12, xrgb8888());
        assert!(pixels.at(2, 0).is_ok());
        assert!(matches!(pixels.at(0, 1), Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn window_surface_is_borrowed() {
        let mut format = sdl::PixelFormat {
            format: PixelFormatEnum::RGB888.0,
            palette: std::ptr::null_mut(),
            bits_per_pixel: 24,
            bytes_per_pixel: 4,
            padding: [0; 2],
            r_mask: 0x00FF_0000,
            g_mask: 0x0000_FF00,
            b_mask: 0x0000_00FF,
            a_mask: 0,
            r_loss: 0,
            g_loss: 0,
            b_loss: 0,
            a_loss: 8,
            r_shift: 16,
            g_shift: 8,
            b_shift: 0,
            a_shift: 0,
            refcount: 1,
            next: std::ptr::null_mut(),
        };
        let mut raw = sdl::Surface {
            flags: 0,
            format: &mut format,
            w: 3,
            h: 2,
            pitch: 12,
            pixels: std::ptr::null_mut(),
            userdata: std::ptr::null_mut(),
            locked: 0,
            list_blitmap: std::ptr::null_mut(),
            clip_rect: sdl::Rect::default(),
            map: std::ptr::null_mut(),
            refcount: 1,
        };

        let surface = unsafe { WindowSurface::from_non_null(NonNull::from(&mut raw)) };
        assert_eq!(surface.size(), Point::new(3, 2));
        assert_eq!(surface.pitch(), 12);
        assert_eq!(surface.format(), PixelFormatEnum::RGB888);
        assert_eq!(
            surface.pixel_format().unwrap().masks(),
            [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0]
        );
        // Freeing here would call into the unloaded library and panic.
        drop(surface);
        assert_eq!(raw.refcount, 1);
    }
}
