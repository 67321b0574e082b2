//! Image file loading through SDL2_image.
//!
//! Errors are reported through the shared SDL error string, so everything
//! here returns [`sdl::Result`].

use std::{ffi::CString, ops::BitOr, path::Path};

use sdl::{Error, Result, Surface, Version};
use sdl2_image_sys as img;

/// Optional image loaders. BMP, GIF, PNM and friends are always available.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct InitFlags(i32);

impl InitFlags {
    pub const JPG: Self = Self(img::INIT_JPG);
    pub const PNG: Self = Self(img::INIT_PNG);
    pub const TIF: Self = Self(img::INIT_TIF);
    pub const WEBP: Self = Self(img::INIT_WEBP);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_raw(value: i32) -> Self {
        Self(value)
    }

    pub const fn as_raw(self) -> i32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Flags set in `self` but not in `other`.
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl BitOr for InitFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

fn load_library() -> Result<()> {
    sdl::load()?;
    if !img::is_loaded() {
        img::load()?;
        log::debug!(
            "loaded SDL2_image from `{}`",
            img::library_name().unwrap_or_default()
        );
    }
    Ok(())
}

/// Loads the requested dynamic image loaders. Fails when any of them is
/// unavailable, returning the set that was initialized otherwise.
pub fn init(flags: InitFlags) -> Result<InitFlags> {
    load_library()?;
    let initialized = InitFlags::from_raw(unsafe { img::IMG_Init(flags.as_raw()) });
    if !initialized.contains(flags) {
        let missing = flags.difference(initialized);
        log::warn!("image loaders {:#x} are unavailable", missing.as_raw());
        return Err(sdl::get_error());
    }
    Ok(initialized)
}

/// Unloads the dynamic image loaders.
pub fn quit() {
    if img::is_loaded() {
        unsafe { img::IMG_Quit() }
    }
}

/// Version of the SDL2_image library, once it has been loaded.
pub fn linked_version() -> Option<Version> {
    if !img::is_loaded() {
        return None;
    }
    let version = unsafe { img::IMG_Linked_Version().as_ref() }?;
    Some(Version {
        major: version.major,
        minor: version.minor,
        patch: version.patch,
    })
}

/// Loads an image file into a new surface, picking the decoder from the
/// file's contents.
pub fn load(path: impl AsRef<Path>) -> Result<Surface> {
    load_library()?;
    let path = path.as_ref();
    let c_path = path_to_cstring(path)?;
    let surface = unsafe { Surface::from_raw(img::IMG_Load(c_path.as_ptr())) };
    match surface {
        Ok(surface) => {
            log::debug!(
                "loaded `{}` ({}x{})",
                path.display(),
                surface.width(),
                surface.height()
            );
            Ok(surface)
        }
        Err(Error::Sdl(message)) => Err(Error::Sdl(format!("{}: {message}", path.display()))),
        Err(err) => Err(err),
    }
}

#[cfg(unix)]
fn path_to_cstring(path: &Path) -> Result<CString> {
    use std::os::unix::ffi::OsStrExt;
    Ok(CString::new(path.as_os_str().as_bytes())?)
}

#[cfg(not(unix))]
fn path_to_cstring(path: &Path) -> Result<CString> {
    Ok(CString::new(path.to_string_lossy().as_bytes())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_flags() {
        let all = InitFlags::JPG | InitFlags::PNG | InitFlags::TIF | InitFlags::WEBP;
        assert_eq!(all.as_raw(), 0xf);
        assert!(all.contains(InitFlags::PNG));
        assert!(!InitFlags::PNG.contains(all));
        assert_eq!(all.difference(InitFlags::JPG | InitFlags::PNG), InitFlags::TIF | InitFlags::WEBP);
        assert_eq!(InitFlags::default(), InitFlags::empty());
    }

    #[test]
    fn path_with_nul_is_rejected() {
        // Only meaningful when the native libraries are around to get past
        // loading.
        if let Err(err) = load_library() {
            assert!(matches!(err, Error::Load(_)));
            return;
        }
        assert!(matches!(load("bad\0name.png"), Err(Error::Nul(_))));
    }

    #[cfg(unix)]
    #[test]
    fn path_bytes_are_kept() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let path = Path::new(OsStr::from_bytes(b"images/caf\xe9.png"));
        assert_eq!(path_to_cstring(path).unwrap().as_bytes(), b"images/caf\xe9.png");
        assert!(matches!(path_to_cstring(Path::new("bad\0name.png")), Err(Error::Nul(_))));
    }
}
