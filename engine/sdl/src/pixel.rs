use sdl2_sys as sdl;

use crate::{Error, Result, string_from_ptr};

/// Non-premultiplied RGBA colour.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl From<sdl::Color> for Color {
    fn from(color: sdl::Color) -> Self {
        Self::rgba(color.r, color.g, color.b, color.a)
    }
}

impl From<Color> for sdl::Color {
    fn from(color: Color) -> Self {
        sdl::Color {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PixelType(pub u32);

impl PixelType {
    pub const UNKNOWN: Self = Self(0);
    pub const INDEX1: Self = Self(1);
    pub const INDEX4: Self = Self(2);
    pub const INDEX8: Self = Self(3);
    pub const PACKED8: Self = Self(4);
    pub const PACKED16: Self = Self(5);
    pub const PACKED32: Self = Self(6);
    pub const ARRAYU8: Self = Self(7);
    pub const ARRAYU16: Self = Self(8);
    pub const ARRAYU32: Self = Self(9);
    pub const ARRAYF16: Self = Self(10);
    pub const ARRAYF32: Self = Self(11);
}

/// Channel order. The meaning of the value depends on the pixel type, so the
/// bitmap, packed and array orders share the same numbers.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PixelOrder(pub u32);

impl PixelOrder {
    pub const BITMAP_NONE: Self = Self(0);
    pub const BITMAP_4321: Self = Self(1);
    pub const BITMAP_1234: Self = Self(2);

    pub const PACKED_NONE: Self = Self(0);
    pub const PACKED_XRGB: Self = Self(1);
    pub const PACKED_RGBX: Self = Self(2);
    pub const PACKED_ARGB: Self = Self(3);
    pub const PACKED_RGBA: Self = Self(4);
    pub const PACKED_XBGR: Self = Self(5);
    pub const PACKED_BGRX: Self = Self(6);
    pub const PACKED_ABGR: Self = Self(7);
    pub const PACKED_BGRA: Self = Self(8);

    pub const ARRAY_NONE: Self = Self(0);
    pub const ARRAY_RGB: Self = Self(1);
    pub const ARRAY_RGBA: Self = Self(2);
    pub const ARRAY_ARGB: Self = Self(3);
    pub const ARRAY_BGR: Self = Self(4);
    pub const ARRAY_BGRA: Self = Self(5);
    pub const ARRAY_ABGR: Self = Self(6);
}

/// Bit widths of the channels in a packed pixel.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PixelLayout(pub u32);

impl PixelLayout {
    pub const NONE: Self = Self(0);
    pub const L332: Self = Self(1);
    pub const L4444: Self = Self(2);
    pub const L1555: Self = Self(3);
    pub const L5551: Self = Self(4);
    pub const L565: Self = Self(5);
    pub const L8888: Self = Self(6);
    pub const L2101010: Self = Self(7);
    pub const L1010102: Self = Self(8);
}

const fn define(
    pixel_type: PixelType,
    order: PixelOrder,
    layout: PixelLayout,
    bits: u32,
    bytes: u32,
) -> PixelFormatEnum {
    PixelFormatEnum(
        (1 << 28) | (pixel_type.0 << 24) | (order.0 << 20) | (layout.0 << 16) | (bits << 8) | bytes,
    )
}

const fn fourcc(code: &[u8; 4]) -> PixelFormatEnum {
    PixelFormatEnum(
        code[0] as u32 | (code[1] as u32) << 8 | (code[2] as u32) << 16 | (code[3] as u32) << 24,
    )
}

/// Packed description of how pixels are stored, `SDL_PixelFormatEnum`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PixelFormatEnum(pub u32);

impl PixelFormatEnum {
    pub const UNKNOWN: Self = Self(0);
    pub const INDEX1LSB: Self = define(
        PixelType::INDEX1,
        PixelOrder::BITMAP_4321,
        PixelLayout::NONE,
        1,
        0,
    );
    pub const INDEX1MSB: Self = define(
        PixelType::INDEX1,
        PixelOrder::BITMAP_1234,
        PixelLayout::NONE,
        1,
        0,
    );
    pub const INDEX4LSB: Self = define(
        PixelType::INDEX4,
        PixelOrder::BITMAP_4321,
        PixelLayout::NONE,
        4,
        0,
    );
    pub const INDEX4MSB: Self = define(
        PixelType::INDEX4,
        PixelOrder::BITMAP_1234,
        PixelLayout::NONE,
        4,
        0,
    );
    pub const INDEX8: Self = define(
        PixelType::INDEX8,
        PixelOrder::BITMAP_NONE,
        PixelLayout::NONE,
        8,
        1,
    );
    pub const RGB332: Self = define(
        PixelType::PACKED8,
        PixelOrder::PACKED_XRGB,
        PixelLayout::L332,
        8,
        1,
    );
    pub const XRGB4444: Self = define(
        PixelType::PACKED16,
        PixelOrder::PACKED_XRGB,
        PixelLayout::L4444,
        12,
        2,
    );
    pub const RGB444: Self = Self::XRGB4444;
    pub const XBGR4444: Self = define(
        PixelType::PACKED16,
        PixelOrder::PACKED_XBGR,
        PixelLayout::L4444,
        12,
        2,
    );
    pub const BGR444: Self = Self::XBGR4444;
    pub const XRGB1555: Self = define(
        PixelType::PACKED16,
        PixelOrder::PACKED_XRGB,
        PixelLayout::L1555,
        15,
        2,
    );
    pub const RGB555: Self = Self::XRGB1555;
    pub const XBGR1555: Self = define(
        PixelType::PACKED16,
        PixelOrder::PACKED_XBGR,
        PixelLayout::L1555,
        15,
        2,
    );
    pub const BGR555: Self = Self::XBGR1555;
    pub const ARGB4444: Self = define(
        PixelType::PACKED16,
        PixelOrder::PACKED_ARGB,
        PixelLayout::L4444,
        16,
        2,
    );
    pub const RGBA4444: Self = define(
        PixelType::PACKED16,
        PixelOrder::PACKED_RGBA,
        PixelLayout::L4444,
        16,
        2,
    );
    pub const ABGR4444: Self = define(
        PixelType::PACKED16,
        PixelOrder::PACKED_ABGR,
        PixelLayout::L4444,
        16,
        2,
    );
    pub const BGRA4444: Self = define(
        PixelType::PACKED16,
        PixelOrder::PACKED_BGRA,
        PixelLayout::L4444,
        16,
        2,
    );
    pub const ARGB1555: Self = define(
        PixelType::PACKED16,
        PixelOrder::PACKED_ARGB,
        PixelLayout::L1555,
        16,
        2,
    );
    pub const RGBA5551: Self = define(
        PixelType::PACKED16,
        PixelOrder::PACKED_RGBA,
        PixelLayout::L5551,
        16,
        2,
    );
    pub const ABGR1555: Self = define(
        PixelType::PACKED16,
        PixelOrder::PACKED_ABGR,
        PixelLayout::L1555,
        16,
        2,
    );
    pub const BGRA5551: Self = define(
        PixelType::PACKED16,
        PixelOrder::PACKED_BGRA,
        PixelLayout::L5551,
        16,
        2,
    );
    pub const RGB565: Self = define(
        PixelType::PACKED16,
        PixelOrder::PACKED_XRGB,
        PixelLayout::L565,
        16,
        2,
    );
    pub const BGR565: Self = define(
        PixelType::PACKED16,
        PixelOrder::PACKED_XBGR,
        PixelLayout::L565,
        16,
        2,
    );
    pub const RGB24: Self = define(
        PixelType::ARRAYU8,
        PixelOrder::ARRAY_RGB,
        PixelLayout::NONE,
        24,
        3,
    );
    pub const BGR24: Self = define(
        PixelType::ARRAYU8,
        PixelOrder::ARRAY_BGR,
        PixelLayout::NONE,
        24,
        3,
    );
    pub const XRGB8888: Self = define(
        PixelType::PACKED32,
        PixelOrder::PACKED_XRGB,
        PixelLayout::L8888,
        24,
        4,
    );
    pub const RGB888: Self = Self::XRGB8888;
    pub const RGBX8888: Self = define(
        PixelType::PACKED32,
        PixelOrder::PACKED_RGBX,
        PixelLayout::L8888,
        24,
        4,
    );
    pub const XBGR8888: Self = define(
        PixelType::PACKED32,
        PixelOrder::PACKED_XBGR,
        PixelLayout::L8888,
        24,
        4,
    );
    pub const BGR888: Self = Self::XBGR8888;
    pub const BGRX8888: Self = define(
        PixelType::PACKED32,
        PixelOrder::PACKED_BGRX,
        PixelLayout::L8888,
        24,
        4,
    );
    pub const ARGB8888: Self = define(
        PixelType::PACKED32,
        PixelOrder::PACKED_ARGB,
        PixelLayout::L8888,
        32,
        4,
    );
    pub const RGBA8888: Self = define(
        PixelType::PACKED32,
        PixelOrder::PACKED_RGBA,
        PixelLayout::L8888,
        32,
        4,
    );
    pub const ABGR8888: Self = define(
        PixelType::PACKED32,
        PixelOrder::PACKED_ABGR,
        PixelLayout::L8888,
        32,
        4,
    );
    pub const BGRA8888: Self = define(
        PixelType::PACKED32,
        PixelOrder::PACKED_BGRA,
        PixelLayout::L8888,
        32,
        4,
    );
    pub const ARGB2101010: Self = define(
        PixelType::PACKED32,
        PixelOrder::PACKED_ARGB,
        PixelLayout::L2101010,
        32,
        4,
    );

    /// Byte order aliases, matching the channel order of the bytes in memory.
    #[cfg(target_endian = "little")]
    pub const RGBA32: Self = Self::ABGR8888;
    #[cfg(target_endian = "little")]
    pub const ARGB32: Self = Self::BGRA8888;
    #[cfg(target_endian = "little")]
    pub const BGRA32: Self = Self::ARGB8888;
    #[cfg(target_endian = "little")]
    pub const ABGR32: Self = Self::RGBA8888;
    #[cfg(target_endian = "big")]
    pub const RGBA32: Self = Self::RGBA8888;
    #[cfg(target_endian = "big")]
    pub const ARGB32: Self = Self::ARGB8888;
    #[cfg(target_endian = "big")]
    pub const BGRA32: Self = Self::BGRA8888;
    #[cfg(target_endian = "big")]
    pub const ABGR32: Self = Self::ABGR8888;

    /// Planar mode: Y + V + U (3 planes)
    pub const YV12: Self = fourcc(b"YV12");
    /// Planar mode: Y + U + V (3 planes)
    pub const IYUV: Self = fourcc(b"IYUV");
    /// Packed mode: Y0+U0+Y1+V0 (1 plane)
    pub const YUY2: Self = fourcc(b"YUY2");
    /// Packed mode: U0+Y0+V0+Y1 (1 plane)
    pub const UYVY: Self = fourcc(b"UYVY");
    /// Packed mode: Y0+V0+Y1+U0 (1 plane)
    pub const YVYU: Self = fourcc(b"YVYU");
    /// Planar mode: Y + U/V interleaved (2 planes)
    pub const NV12: Self = fourcc(b"NV12");
    /// Planar mode: Y + V/U interleaved (2 planes)
    pub const NV21: Self = fourcc(b"NV21");
    /// Android video texture format
    pub const EXTERNAL_OES: Self = fourcc(b"OES ");

    #[inline]
    pub const fn pixel_flag(self) -> u32 {
        (self.0 >> 28) & 0x0F
    }

    #[inline]
    pub const fn pixel_type(self) -> PixelType {
        PixelType((self.0 >> 24) & 0x0F)
    }

    #[inline]
    pub const fn pixel_order(self) -> PixelOrder {
        PixelOrder((self.0 >> 20) & 0x0F)
    }

    #[inline]
    pub const fn pixel_layout(self) -> PixelLayout {
        PixelLayout((self.0 >> 16) & 0x0F)
    }

    #[inline]
    pub const fn bits_per_pixel(self) -> u32 {
        (self.0 >> 8) & 0xFF
    }

    pub const fn bytes_per_pixel(self) -> u32 {
        if self.is_fourcc() {
            if self.0 == Self::YUY2.0 || self.0 == Self::UYVY.0 || self.0 == Self::YVYU.0 {
                2
            } else {
                1
            }
        } else {
            self.0 & 0xFF
        }
    }

    /// Four character codes describe YUV and other non-RGB layouts.
    #[inline]
    pub const fn is_fourcc(self) -> bool {
        self.0 != 0 && self.pixel_flag() != 1
    }

    pub const fn is_indexed(self) -> bool {
        !self.is_fourcc()
            && matches!(
                self.pixel_type(),
                PixelType::INDEX1 | PixelType::INDEX4 | PixelType::INDEX8
            )
    }

    pub const fn is_packed(self) -> bool {
        !self.is_fourcc()
            && matches!(
                self.pixel_type(),
                PixelType::PACKED8 | PixelType::PACKED16 | PixelType::PACKED32
            )
    }

    pub const fn is_array(self) -> bool {
        !self.is_fourcc()
            && matches!(
                self.pixel_type(),
                PixelType::ARRAYU8
                    | PixelType::ARRAYU16
                    | PixelType::ARRAYU32
                    | PixelType::ARRAYF16
                    | PixelType::ARRAYF32
            )
    }

    pub const fn is_alpha(self) -> bool {
        (self.is_packed()
            && matches!(
                self.pixel_order(),
                PixelOrder::PACKED_ARGB
                    | PixelOrder::PACKED_RGBA
                    | PixelOrder::PACKED_ABGR
                    | PixelOrder::PACKED_BGRA
            ))
            || (self.is_array()
                && matches!(
                    self.pixel_order(),
                    PixelOrder::ARRAY_ARGB
                        | PixelOrder::ARRAY_RGBA
                        | PixelOrder::ARRAY_ABGR
                        | PixelOrder::ARRAY_BGRA
                ))
    }

    /// The SDL constant name, e.g. `SDL_PIXELFORMAT_ARGB8888`.
    pub fn name(self) -> String {
        if !sdl::is_loaded() {
            return format!("{:#010x}", self.0);
        }
        unsafe { string_from_ptr(sdl::SDL_GetPixelFormatName(self.0)) }.unwrap_or_default()
    }
}

/// One colour channel of a pixel format.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Channel {
    mask: u32,
    shift: u8,
    /// Bits dropped from an 8-bit value. Negative for channels wider than 8
    /// bits.
    loss: i8,
}

impl Channel {
    const fn from_mask(mask: u32) -> Self {
        if mask == 0 {
            return Self {
                mask,
                shift: 0,
                loss: 8,
            };
        }
        let shift = mask.trailing_zeros();
        let bits = (mask >> shift).trailing_ones();
        Self {
            mask,
            shift: shift as u8,
            loss: 8 - bits as i8,
        }
    }

    #[inline]
    fn expand(self, pixel: u32) -> u8 {
        let value = (pixel & self.mask) >> self.shift;
        if self.loss >= 0 {
            (value << self.loss) as u8
        } else {
            (value >> -self.loss) as u8
        }
    }

    #[inline]
    fn collapse(self, value: u8) -> u32 {
        let value = value as u32;
        let value = if self.loss >= 0 {
            value >> self.loss
        } else {
            value << -self.loss
        };
        (value << self.shift) & self.mask
    }
}

/// Snapshot of a native pixel format descriptor, used to read and write
/// individual pixels.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PixelFormat {
    format: PixelFormatEnum,
    bits_per_pixel: u8,
    bytes_per_pixel: u8,
    r: Channel,
    g: Channel,
    b: Channel,
    a: Channel,
    palette: Vec<Color>,
}

impl PixelFormat {
    /// Describes a truecolor format from its channel masks. The pixel size
    /// comes from `format` when it encodes one.
    pub fn from_masks(
        format: PixelFormatEnum,
        bits_per_pixel: u8,
        r_mask: u32,
        g_mask: u32,
        b_mask: u32,
        a_mask: u32,
    ) -> Self {
        Self {
            format,
            bits_per_pixel,
            bytes_per_pixel: match format.bytes_per_pixel() {
                0 => bits_per_pixel.div_ceil(8),
                bytes => bytes as u8,
            },
            r: Channel::from_mask(r_mask),
            g: Channel::from_mask(g_mask),
            b: Channel::from_mask(b_mask),
            a: Channel::from_mask(a_mask),
            palette: Vec::new(),
        }
    }

    /// Describes an indexed format with the given palette.
    pub fn indexed(format: PixelFormatEnum, palette: &[Color]) -> Self {
        let bits_per_pixel = format.bits_per_pixel() as u8;
        let mut pixel_format = Self::from_masks(format, bits_per_pixel, 0, 0, 0, 0);
        pixel_format.palette = palette.to_vec();
        pixel_format
    }

    /// Copies a native descriptor.
    ///
    /// # Safety
    ///
    /// `raw.palette` must be null or point to a valid palette.
    pub unsafe fn from_raw(raw: &sdl::PixelFormat) -> Self {
        let channel = |mask: u32, shift: u8, loss: u8| Channel {
            mask,
            shift,
            // SDL stores the loss of channels wider than 8 bits wrapped around.
            loss: loss as i8,
        };

        let palette: Vec<Color> = unsafe { raw.palette.as_ref() }
            .filter(|palette| !palette.colors.is_null() && palette.ncolors > 0)
            .map(|palette| unsafe {
                std::slice::from_raw_parts(palette.colors, palette.ncolors as usize)
                    .iter()
                    .map(|&color| color.into())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            format: PixelFormatEnum(raw.format),
            bits_per_pixel: raw.bits_per_pixel,
            bytes_per_pixel: raw.bytes_per_pixel,
            r: channel(raw.r_mask, raw.r_shift, raw.r_loss),
            g: channel(raw.g_mask, raw.g_shift, raw.g_loss),
            b: channel(raw.b_mask, raw.b_shift, raw.b_loss),
            a: channel(raw.a_mask, raw.a_shift, raw.a_loss),
            palette,
        }
    }

    pub fn format(&self) -> PixelFormatEnum {
        self.format
    }

    pub fn bits_per_pixel(&self) -> u8 {
        self.bits_per_pixel
    }

    pub fn bytes_per_pixel(&self) -> u8 {
        self.bytes_per_pixel
    }

    pub fn masks(&self) -> [u32; 4] {
        [self.r.mask, self.g.mask, self.b.mask, self.a.mask]
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Fails for the formats individual pixels can't be addressed in.
    pub fn check_access(&self) -> Result<()> {
        let format = self.format;
        let supported = if format.is_fourcc() {
            false
        } else if format.is_indexed() {
            format.pixel_type() == PixelType::INDEX8
        } else {
            (1..=4).contains(&self.bytes_per_pixel)
        };
        if supported {
            Ok(())
        } else {
            Err(Error::UnsupportedPixelFormat(format.0))
        }
    }

    /// Splits a pixel value into its colour. Formats without an alpha channel
    /// decode as opaque.
    pub fn decode(&self, pixel: u32) -> Color {
        if self.format.is_indexed() {
            return self
                .palette
                .get(pixel as usize)
                .copied()
                .unwrap_or_default();
        }
        Color {
            r: self.r.expand(pixel),
            g: self.g.expand(pixel),
            b: self.b.expand(pixel),
            a: if self.a.mask == 0 {
                255
            } else {
                self.a.expand(pixel)
            },
        }
    }

    /// Packs a colour into a pixel value. Indexed formats pick the closest
    /// palette entry.
    pub fn encode(&self, color: Color) -> u32 {
        if self.format.is_indexed() {
            return self.nearest_index(color);
        }
        let mut pixel = self.r.collapse(color.r) | self.g.collapse(color.g) | self.b.collapse(color.b);
        if self.a.mask != 0 {
            pixel |= self.a.collapse(color.a);
        }
        pixel
    }

    fn nearest_index(&self, color: Color) -> u32 {
        let distance = |entry: &Color| {
            let d = |a: u8, b: u8| (a as i32 - b as i32).pow(2) as u32;
            d(entry.r, color.r) + d(entry.g, color.g) + d(entry.b, color.b) + d(entry.a, color.a)
        };
        self.palette
            .iter()
            .enumerate()
            .min_by_key(|(index, entry)| (distance(entry), *index))
            .map_or(0, |(index, _)| index as u32)
    }

    /// Reads one pixel from its bytes in memory.
    pub fn read(&self, bytes: &[u8]) -> Result<Color> {
        self.check_access()?;
        let len = self.bytes_per_pixel as usize;
        let bytes = bytes.get(..len).ok_or(Error::UnsupportedPixelFormat(self.format.0))?;
        let mut value = [0; 4];
        value[value_range(len)].copy_from_slice(bytes);
        Ok(self.decode(u32::from_ne_bytes(value)))
    }

    /// Writes one pixel, touching only its own bytes.
    pub fn write(&self, bytes: &mut [u8], color: Color) -> Result<()> {
        self.check_access()?;
        let len = self.bytes_per_pixel as usize;
        let bytes = bytes
            .get_mut(..len)
            .ok_or(Error::UnsupportedPixelFormat(self.format.0))?;
        let value = self.encode(color).to_ne_bytes();
        bytes.copy_from_slice(&value[value_range(len)]);
        Ok(())
    }
}

/// Where the bytes of a `len` byte pixel live in a native-endian `u32`.
#[inline]
fn value_range(len: usize) -> std::ops::Range<usize> {
    if cfg!(target_endian = "little") {
        0..len
    } else {
        4 - len..4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argb8888() -> PixelFormat {
        PixelFormat::from_masks(
            PixelFormatEnum::ARGB8888,
            32,
            0x00FF_0000,
            0x0000_FF00,
            0x0000_00FF,
            0xFF00_0000,
        )
    }

    fn rgb565() -> PixelFormat {
        PixelFormat::from_masks(PixelFormatEnum::RGB565, 16, 0xF800, 0x07E0, 0x001F, 0)
    }

    #[test]
    fn format_values() {
        assert_eq!(PixelFormatEnum::ARGB8888.0, 0x1636_2004);
        assert_eq!(PixelFormatEnum::RGBA8888.0, 0x1646_2004);
        assert_eq!(PixelFormatEnum::ABGR8888.0, 0x1676_2004);
        assert_eq!(PixelFormatEnum::BGRA8888.0, 0x1686_2004);
        assert_eq!(PixelFormatEnum::RGB888.0, 0x1616_1804);
        assert_eq!(PixelFormatEnum::RGB24.0, 0x1710_1803);
        assert_eq!(PixelFormatEnum::RGB565.0, 0x1515_1002);
        assert_eq!(PixelFormatEnum::INDEX8.0, 0x1300_0801);
        assert_eq!(PixelFormatEnum::INDEX1LSB.0, 0x1110_0100);
        assert_eq!(PixelFormatEnum::YV12.0, 0x3231_5659);
        assert_eq!(PixelFormatEnum::IYUV.0, 0x5655_5949);
    }

    #[test]
    fn format_decoders() {
        let argb = PixelFormatEnum::ARGB8888;
        assert_eq!(argb.pixel_flag(), 1);
        assert_eq!(argb.pixel_type(), PixelType::PACKED32);
        assert_eq!(argb.pixel_order(), PixelOrder::PACKED_ARGB);
        assert_eq!(argb.pixel_layout(), PixelLayout::L8888);
        assert_eq!(argb.bits_per_pixel(), 32);
        assert_eq!(argb.bytes_per_pixel(), 4);
        assert!(argb.is_alpha());
        assert!(!argb.is_indexed());
        assert!(!argb.is_fourcc());

        assert!(!PixelFormatEnum::RGB888.is_alpha());
        assert!(!PixelFormatEnum::RGB24.is_alpha());
        assert!(PixelFormatEnum::RGB24.is_array());
        assert!(PixelFormatEnum::INDEX4MSB.is_indexed());
        assert_eq!(PixelFormatEnum::INDEX4MSB.bits_per_pixel(), 4);

        assert!(PixelFormatEnum::YV12.is_fourcc());
        assert!(!PixelFormatEnum::YV12.is_indexed());
        assert_eq!(PixelFormatEnum::YV12.bytes_per_pixel(), 1);
        assert_eq!(PixelFormatEnum::YUY2.bytes_per_pixel(), 2);
        assert!(!PixelFormatEnum::UNKNOWN.is_fourcc());
        assert_eq!(PixelFormatEnum::UNKNOWN.pixel_type(), PixelType::UNKNOWN);
    }

    #[test]
    fn channel_shift_and_loss() {
        assert_eq!(
            Channel::from_mask(0x07E0),
            Channel {
                mask: 0x07E0,
                shift: 5,
                loss: 2
            }
        );
        assert_eq!(Channel::from_mask(0).loss, 8);
        assert_eq!(Channel::from_mask(0x3FF0_0000).loss, -2);

        let green = Channel::from_mask(0x07E0);
        assert_eq!(green.expand(0x07E0), 0xFC);
        assert_eq!(green.collapse(0xFF), 0x07E0);
        assert_eq!(green.collapse(0x04), 0x0020);
    }

    #[test]
    fn decode_and_encode_argb() {
        let format = argb8888();
        assert_eq!(format.decode(0x8011_2233), Color::rgba(0x11, 0x22, 0x33, 0x80));
        assert_eq!(format.encode(Color::rgba(0x11, 0x22, 0x33, 0x80)), 0x8011_2233);
    }

    #[test]
    fn missing_alpha_is_opaque() {
        let format = rgb565();
        let color = format.decode(0xFFFF);
        assert_eq!(color, Color::rgba(0xF8, 0xFC, 0xF8, 255));
        assert_eq!(format.encode(Color::rgba(0xFF, 0, 0xFF, 0)), 0xF81F);
    }

    #[test]
    fn read_write_touch_only_their_bytes() {
        let format = rgb565();
        let mut bytes = [0xAA; 4];
        format.write(&mut bytes[1..], Color::rgb(0, 0xFF, 0)).unwrap();
        assert_eq!(bytes[0], 0xAA);
        assert_eq!(bytes[3], 0xAA);
        assert_eq!(u16::from_ne_bytes([bytes[1], bytes[2]]), 0x07E0);
        assert_eq!(format.read(&bytes[1..]).unwrap(), Color::rgb(0, 0xFC, 0));
    }

    #[test]
    fn three_byte_pixels() {
        let (r, b) = if cfg!(target_endian = "little") {
            (0x0000_00FF, 0x00FF_0000)
        } else {
            (0x00FF_0000, 0x0000_00FF)
        };
        let format = PixelFormat::from_masks(PixelFormatEnum::RGB24, 24, r, 0x0000_FF00, b, 0);
        let mut bytes = [0u8; 4];
        format.write(&mut bytes, Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(bytes, [1, 2, 3, 0]);
        assert_eq!(format.read(&bytes).unwrap(), Color::rgb(1, 2, 3));
    }

    #[test]
    fn indexed_palette() {
        let palette = [
            Color::rgb(0, 0, 0),
            Color::rgb(255, 0, 0),
            Color::rgb(0, 0, 255),
        ];
        let format = PixelFormat::indexed(PixelFormatEnum::INDEX8, &palette);
        assert_eq!(format.bytes_per_pixel(), 1);

        let mut bytes = [0u8];
        format.write(&mut bytes, Color::rgb(200, 10, 20)).unwrap();
        assert_eq!(bytes, [1]);
        assert_eq!(format.read(&bytes).unwrap(), Color::rgb(255, 0, 0));

        format.write(&mut bytes, Color::rgb(0, 0, 255)).unwrap();
        assert_eq!(bytes, [2]);

        // Out of range indices read as transparent black.
        assert_eq!(format.read(&[7]).unwrap(), Color::default());
    }

    #[test]
    fn unsupported_formats() {
        let yuv = PixelFormat::from_masks(PixelFormatEnum::YV12, 12, 0, 0, 0, 0);
        assert!(matches!(
            yuv.read(&[0; 4]),
            Err(Error::UnsupportedPixelFormat(format)) if format == PixelFormatEnum::YV12.0
        ));

        let bitmap = PixelFormat::indexed(PixelFormatEnum::INDEX1MSB, &[Color::BLACK, Color::WHITE]);
        assert!(matches!(
            bitmap.write(&mut [0; 4], Color::WHITE),
            Err(Error::UnsupportedPixelFormat(_))
        ));
    }

    #[test]
    fn from_raw_descriptor() {
        let mut colors = [
            sdl::Color {
                r: 1,
                g: 2,
                b: 3,
                a: 4,
            },
            sdl::Color {
                r: 5,
                g: 6,
                b: 7,
                a: 8,
            },
        ];
        let mut palette = sdl::Palette {
            ncolors: 2,
            colors: colors.as_mut_ptr(),
            version: 1,
            refcount: 1,
        };
        let raw = sdl::PixelFormat {
            format: PixelFormatEnum::INDEX8.0,
            palette: &mut palette,
            bits_per_pixel: 8,
            bytes_per_pixel: 1,
            padding: [0; 2],
            r_mask: 0,
            g_mask: 0,
            b_mask: 0,
            a_mask: 0,
            r_loss: 8,
            g_loss: 8,
            b_loss: 8,
            a_loss: 8,
            r_shift: 0,
            g_shift: 0,
            b_shift: 0,
            a_shift: 0,
            refcount: 1,
            next: std::ptr::null_mut(),
        };
        let format = unsafe { PixelFormat::from_raw(&raw) };
        assert_eq!(format.palette(), &[Color::rgba(1, 2, 3, 4), Color::rgba(5, 6, 7, 8)]);
        assert_eq!(format.read(&[1]).unwrap(), Color::rgba(5, 6, 7, 8));
    }
}
