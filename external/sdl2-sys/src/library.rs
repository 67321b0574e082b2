use std::{
    ffi::{CString, c_char, c_void},
    fmt,
    ptr::NonNull,
};

#[cfg(unix)]
mod libc {
    use std::os::raw::{c_char, c_int, c_void};

    pub const RTLD_NOW: c_int = 0x2;
    pub const RTLD_LOCAL: c_int = 0;

    unsafe extern "C" {
        pub fn dlopen(filename: *const c_char, flag: c_int) -> *mut c_void;
        pub fn dlsym(handle: *mut c_void, symbol: *const c_char) -> *mut c_void;
    }
}

#[cfg(windows)]
mod kernel32 {
    use std::os::raw::{c_char, c_void};

    #[link(name = "kernel32")]
    unsafe extern "system" {
        pub fn LoadLibraryA(filename: *const c_char) -> *mut c_void;
        pub fn GetProcAddress(module: *mut c_void, name: *const c_char) -> *mut c_void;
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LoadError {
    /// None of the candidate shared libraries could be opened.
    Library { tried: Vec<String> },
    /// The library was opened but is missing a required export.
    Symbol { library: String, symbol: &'static str },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Library { tried } => {
                write!(f, "unable to open shared library (tried {})", tried.join(", "))
            }
            LoadError::Symbol { library, symbol } => {
                write!(f, "`{library}` does not export `{symbol}`")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// A shared library opened for the lifetime of the process.
///
/// The handle is never closed: function pointers resolved from it are stored
/// in statics.
pub struct Library {
    name: String,
    handle: NonNull<c_void>,
}

unsafe impl Send for Library {}
unsafe impl Sync for Library {}

impl Library {
    /// Opens the first loadable library, preferring the path named by the
    /// environment variable `env` when it is set.
    pub fn open(env: &str, candidates: &[&str]) -> Result<Library, LoadError> {
        let mut tried = Vec::with_capacity(candidates.len() + 1);

        let from_env = std::env::var(env).ok().filter(|path| !path.is_empty());
        for name in from_env
            .iter()
            .map(String::as_str)
            .chain(candidates.iter().copied())
        {
            tried.push(name.to_owned());
            let Ok(c_name) = CString::new(name) else {
                continue;
            };
            if let Some(handle) = NonNull::new(unsafe { open_raw(c_name.as_ptr()) }) {
                return Ok(Library {
                    name: name.to_owned(),
                    handle,
                });
            }
        }

        Err(LoadError::Library { tried })
    }

    /// The name or path the library was opened from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves `symbol`, which must be nul terminated.
    pub fn symbol(&self, symbol: &'static str) -> Result<*mut c_void, LoadError> {
        debug_assert!(symbol.ends_with('\0'));
        let ptr = unsafe { symbol_raw(self.handle.as_ptr(), symbol.as_ptr() as *const c_char) };
        if ptr.is_null() {
            Err(LoadError::Symbol {
                library: self.name.clone(),
                symbol: symbol.trim_end_matches('\0'),
            })
        } else {
            Ok(ptr)
        }
    }
}

#[cfg(unix)]
unsafe fn open_raw(name: *const c_char) -> *mut c_void {
    unsafe { libc::dlopen(name, libc::RTLD_NOW | libc::RTLD_LOCAL) }
}

#[cfg(unix)]
unsafe fn symbol_raw(handle: *mut c_void, name: *const c_char) -> *mut c_void {
    unsafe { libc::dlsym(handle, name) }
}

#[cfg(windows)]
unsafe fn open_raw(name: *const c_char) -> *mut c_void {
    unsafe { kernel32::LoadLibraryA(name) }
}

#[cfg(windows)]
unsafe fn symbol_raw(handle: *mut c_void, name: *const c_char) -> *mut c_void {
    unsafe { kernel32::GetProcAddress(handle, name) }
}

#[cold]
#[inline(never)]
pub fn not_loaded(library: &str) -> ! {
    panic!("{library} function called before the library was loaded")
}

/// Declares a table of native functions resolved from a shared library at
/// run time, and a free `unsafe fn` with the C signature for each entry.
///
/// Expands to `load()`, `is_loaded()` and `library_name()` in the calling
/// module.
#[macro_export]
macro_rules! dynamic_library {
    (
        name: $library:literal,
        env: $env:literal,
        candidates: [$($candidate:literal),* $(,)?],
        functions: {
            $(pub fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;)*
        }
    ) => {
        #[allow(non_snake_case)]
        struct Functions {
            library_name: ::std::string::String,
            $($name: unsafe extern "C" fn($($ty),*) $(-> $ret)?,)*
        }

        static FUNCTIONS: ::std::sync::OnceLock<Functions> = ::std::sync::OnceLock::new();

        /// Opens the native library and resolves every function. Calling it
        /// again once loaded is free.
        pub fn load() -> ::std::result::Result<(), $crate::LoadError> {
            if FUNCTIONS.get().is_some() {
                return Ok(());
            }
            let library = $crate::Library::open($env, &[$($candidate),*])?;
            let functions = unsafe {
                Functions {
                    library_name: library.name().to_owned(),
                    $($name: ::std::mem::transmute::<
                        *mut ::std::ffi::c_void,
                        unsafe extern "C" fn($($ty),*) $(-> $ret)?,
                    >(library.symbol(concat!(stringify!($name), "\0"))?),)*
                }
            };
            // Losing a race here is fine, both tables point into the same library.
            let _ = FUNCTIONS.set(functions);
            Ok(())
        }

        pub fn is_loaded() -> bool {
            FUNCTIONS.get().is_some()
        }

        /// The name or path the native library was opened from.
        pub fn library_name() -> ::std::option::Option<&'static str> {
            FUNCTIONS.get().map(|functions| functions.library_name.as_str())
        }

        #[inline(always)]
        fn functions() -> &'static Functions {
            match FUNCTIONS.get() {
                Some(functions) => functions,
                None => $crate::not_loaded($library),
            }
        }

        $(
            #[inline]
            #[allow(non_snake_case)]
            pub unsafe fn $name($($arg: $ty),*) $(-> $ret)? {
                unsafe { (functions().$name)($($arg),*) }
            }
        )*
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_library_reports_every_candidate() {
        let err = Library::open(
            "SDL2_SYS_TEST_UNSET_VARIABLE",
            &["libdefinitely-not-here.so.0", "also-missing.so"],
        )
        .err()
        .unwrap();
        assert_eq!(
            err,
            LoadError::Library {
                tried: vec![
                    "libdefinitely-not-here.so.0".to_owned(),
                    "also-missing.so".to_owned()
                ]
            }
        );
        assert!(err.to_string().contains("also-missing.so"));
    }

    #[test]
    fn symbol_error_display() {
        let err = LoadError::Symbol {
            library: "libSDL2.so".to_owned(),
            symbol: "SDL_Init",
        };
        assert_eq!(err.to_string(), "`libSDL2.so` does not export `SDL_Init`");
    }

    #[deny(non_snake_case)]
    mod generated {
        crate::dynamic_library! {
            name: "SDL2_test",
            env: "SDL2_SYS_TEST_UNSET_VARIABLE",
            candidates: ["libdefinitely-not-here.so.0"],
            functions: {
                pub fn SDL_TestValue(value: i32) -> i32;
            }
        }
    }

    #[test]
    fn generated_table_stays_unloaded() {
        assert!(generated::load().is_err());
        assert!(!generated::is_loaded());
        assert_eq!(generated::library_name(), None);
    }

    #[test]
    #[should_panic(expected = "SDL2_test")]
    fn generated_function_requires_load() {
        unsafe { generated::SDL_TestValue(1) };
    }
}
