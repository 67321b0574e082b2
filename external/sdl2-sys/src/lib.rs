#![allow(non_camel_case_types)]
#![allow(clippy::missing_safety_doc)]

mod library;

pub use library::{Library, LoadError, not_loaded};

use std::ffi::{c_char, c_int, c_void};

pub const MAJOR_VERSION: u8 = 2;
pub const MINOR_VERSION: u8 = 24;
pub const PATCH_VERSION: u8 = 2;

#[repr(C)]
pub struct Window {
    _unused: [u8; 0],
}

#[repr(C)]
pub struct Renderer {
    _unused: [u8; 0],
}

#[repr(C)]
pub struct Texture {
    _unused: [u8; 0],
}

#[repr(C)]
pub struct BlitMap {
    _unused: [u8; 0],
}

pub type GLContext = *mut c_void;

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bool {
    False = 0,
    True = 1,
}

pub type JoystickID = i32;
pub type TouchID = i64;
pub type FingerID = i64;
pub type GestureID = i64;

/// `SDL_Scancode`, a USB usage id.
pub type Scancode = i32;
/// `SDL_Keycode`, virtual key code.
pub type Keycode = i32;
/// `SDL_Keymod` as stored in `Keysym`.
pub type Keymod = u16;

pub const RELEASED: u8 = 0;
pub const PRESSED: u8 = 1;

pub const BUTTON_LEFT: u8 = 1;
pub const BUTTON_MIDDLE: u8 = 2;
pub const BUTTON_RIGHT: u8 = 3;
pub const BUTTON_X1: u8 = 4;
pub const BUTTON_X2: u8 = 5;

pub const HAT_CENTERED: u8 = 0x00;
pub const HAT_UP: u8 = 0x01;
pub const HAT_RIGHT: u8 = 0x02;
pub const HAT_DOWN: u8 = 0x04;
pub const HAT_LEFT: u8 = 0x08;

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Rect {
    pub x: c_int,
    pub y: c_int,
    pub w: c_int,
    pub h: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Point {
    pub x: c_int,
    pub y: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[repr(C)]
pub struct Palette {
    pub ncolors: c_int,
    pub colors: *mut Color,
    pub version: u32,
    pub refcount: c_int,
}

#[repr(C)]
pub struct PixelFormat {
    pub format: u32,
    pub palette: *mut Palette,
    pub bits_per_pixel: u8,
    pub bytes_per_pixel: u8,
    pub padding: [u8; 2],
    pub r_mask: u32,
    pub g_mask: u32,
    pub b_mask: u32,
    pub a_mask: u32,
    pub r_loss: u8,
    pub g_loss: u8,
    pub b_loss: u8,
    pub a_loss: u8,
    pub r_shift: u8,
    pub g_shift: u8,
    pub b_shift: u8,
    pub a_shift: u8,
    pub refcount: c_int,
    pub next: *mut PixelFormat,
}

#[repr(C)]
pub struct Surface {
    pub flags: u32,
    pub format: *mut PixelFormat,
    pub w: c_int,
    pub h: c_int,
    pub pitch: c_int,
    pub pixels: *mut c_void,
    pub userdata: *mut c_void,
    pub locked: c_int,
    pub list_blitmap: *mut c_void,
    pub clip_rect: Rect,
    pub map: *mut BlitMap,
    pub refcount: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Keysym {
    pub scancode: Scancode,
    pub sym: Keycode,
    pub modifiers: Keymod,
    pub _unused: u32,
}

/// Event discriminant. Kept as a plain integer since the library may hand
/// out values this binding does not know about.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct EventType(pub u32);

impl EventType {
    pub const FIRSTEVENT: Self = Self(0);
    pub const QUIT: Self = Self(0x100);

    pub const APP_TERMINATING: Self = Self(0x101);
    pub const APP_LOWMEMORY: Self = Self(0x102);
    pub const APP_WILLENTERBACKGROUND: Self = Self(0x103);
    pub const APP_DIDENTERBACKGROUND: Self = Self(0x104);
    pub const APP_WILLENTERFOREGROUND: Self = Self(0x105);
    pub const APP_DIDENTERFOREGROUND: Self = Self(0x106);

    pub const LOCALECHANGED: Self = Self(0x107);

    pub const DISPLAYEVENT: Self = Self(0x150);

    pub const WINDOWEVENT: Self = Self(0x200);
    pub const SYSWMEVENT: Self = Self(0x201);

    pub const KEYDOWN: Self = Self(0x300);
    pub const KEYUP: Self = Self(0x301);
    pub const TEXTEDITING: Self = Self(0x302);
    pub const TEXTINPUT: Self = Self(0x303);
    pub const KEYMAPCHANGED: Self = Self(0x304);

    pub const MOUSEMOTION: Self = Self(0x400);
    pub const MOUSEBUTTONDOWN: Self = Self(0x401);
    pub const MOUSEBUTTONUP: Self = Self(0x402);
    pub const MOUSEWHEEL: Self = Self(0x403);

    pub const JOYAXISMOTION: Self = Self(0x600);
    pub const JOYBALLMOTION: Self = Self(0x601);
    pub const JOYHATMOTION: Self = Self(0x602);
    pub const JOYBUTTONDOWN: Self = Self(0x603);
    pub const JOYBUTTONUP: Self = Self(0x604);
    pub const JOYDEVICEADDED: Self = Self(0x605);
    pub const JOYDEVICEREMOVED: Self = Self(0x606);

    pub const CONTROLLERAXISMOTION: Self = Self(0x650);
    pub const CONTROLLERBUTTONDOWN: Self = Self(0x651);
    pub const CONTROLLERBUTTONUP: Self = Self(0x652);
    pub const CONTROLLERDEVICEADDED: Self = Self(0x653);
    pub const CONTROLLERDEVICEREMOVED: Self = Self(0x654);
    pub const CONTROLLERDEVICEREMAPPED: Self = Self(0x655);
    pub const CONTROLLERTOUCHPADDOWN: Self = Self(0x656);
    pub const CONTROLLERTOUCHPADMOTION: Self = Self(0x657);
    pub const CONTROLLERTOUCHPADUP: Self = Self(0x658);
    pub const CONTROLLERSENSORUPDATE: Self = Self(0x659);

    pub const FINGERDOWN: Self = Self(0x700);
    pub const FINGERUP: Self = Self(0x701);
    pub const FINGERMOTION: Self = Self(0x702);

    pub const DOLLARGESTURE: Self = Self(0x800);
    pub const DOLLARRECORD: Self = Self(0x801);
    pub const MULTIGESTURE: Self = Self(0x802);

    pub const CLIPBOARDUPDATE: Self = Self(0x900);

    pub const DROPFILE: Self = Self(0x1000);
    pub const DROPTEXT: Self = Self(0x1001);
    pub const DROPBEGIN: Self = Self(0x1002);
    pub const DROPCOMPLETE: Self = Self(0x1003);

    pub const AUDIODEVICEADDED: Self = Self(0x1100);
    pub const AUDIODEVICEREMOVED: Self = Self(0x1101);

    pub const SENSORUPDATE: Self = Self(0x1200);

    pub const RENDER_TARGETS_RESET: Self = Self(0x2000);
    pub const RENDER_DEVICE_RESET: Self = Self(0x2001);

    pub const POLLSENTINEL: Self = Self(0x7F00);

    pub const USEREVENT: Self = Self(0x8000);
    pub const LASTEVENT: Self = Self(0xFFFF);
}

#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WindowEventId(pub u8);

impl WindowEventId {
    /// Never used
    pub const NONE: Self = Self(0);
    /// Window has been shown
    pub const SHOWN: Self = Self(1);
    /// Window has been hidden
    pub const HIDDEN: Self = Self(2);
    /// Window has been exposed and should be redrawn
    pub const EXPOSED: Self = Self(3);
    /// Window has been moved to data1, data2
    pub const MOVED: Self = Self(4);
    /// Window has been resized to data1xdata2
    pub const RESIZED: Self = Self(5);
    /// The window size has changed, either as a result of an API call or through the system or user changing the window size.
    pub const SIZE_CHANGED: Self = Self(6);
    /// Window has been minimized
    pub const MINIMIZED: Self = Self(7);
    /// Window has been maximized
    pub const MAXIMIZED: Self = Self(8);
    /// Window has been restored to normal size and position
    pub const RESTORED: Self = Self(9);
    /// Window has gained mouse focus
    pub const ENTER: Self = Self(10);
    /// Window has lost mouse focus
    pub const LEAVE: Self = Self(11);
    /// Window has gained keyboard focus
    pub const FOCUS_GAINED: Self = Self(12);
    /// Window has lost keyboard focus
    pub const FOCUS_LOST: Self = Self(13);
    /// The window manager requests that the window be closed
    pub const CLOSE: Self = Self(14);
    /// Window is being offered a focus (should SetWindowInputFocus() on itself or a subwindow, or ignore)
    pub const TAKE_FOCUS: Self = Self(15);
    /// Window had a hit test that wasn't SDL_HITTEST_NORMAL.
    pub const HIT_TEST: Self = Self(16);
    /// The ICC profile of the window's display has changed.
    pub const ICCPROF_CHANGED: Self = Self(17);
    /// Window has been moved to display data1.
    pub const DISPLAY_CHANGED: Self = Self(18);
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct CommonEvent {
    pub r#type: EventType,
    pub timestamp: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct DisplayEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub display: u32,
    pub event: u8,
    pub _padding1: u8,
    pub _padding2: u8,
    pub _padding3: u8,
    pub data1: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct WindowEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub window_id: u32,
    pub event: WindowEventId,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub data1: i32,
    pub data2: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct KeyboardEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub window_id: u32,
    pub state: u8,
    pub repeat: u8,
    pub _padding2: u8,
    pub _padding3: u8,
    pub keysym: Keysym,
}

pub const TEXTEDITINGEVENT_TEXT_SIZE: usize = 32;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct TextEditingEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub window_id: u32,
    pub text: [c_char; TEXTEDITINGEVENT_TEXT_SIZE],
    pub start: i32,
    pub length: i32,
}

pub const TEXTINPUTEVENT_TEXT_SIZE: usize = 32;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct TextInputEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub window_id: u32,
    pub text: [c_char; TEXTINPUTEVENT_TEXT_SIZE],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct MouseMotionEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub state: u32,
    pub x: i32,
    pub y: i32,
    pub xrel: i32,
    pub yrel: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct MouseButtonEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub button: u8,
    pub state: u8,
    pub clicks: u8,
    pub padding1: u8,
    pub x: i32,
    pub y: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct MouseWheelEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub x: i32,
    pub y: i32,
    pub direction: u32,
    /// Added in 2.0.18, zero on older libraries.
    pub precise_x: f32,
    /// Added in 2.0.18, zero on older libraries.
    pub precise_y: f32,
}

pub const MOUSEWHEEL_NORMAL: u32 = 0;
pub const MOUSEWHEEL_FLIPPED: u32 = 1;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct JoyAxisEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub which: JoystickID,
    pub axis: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub value: i16,
    pub padding4: u16,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct JoyBallEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub which: JoystickID,
    pub ball: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub xrel: i16,
    pub yrel: i16,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct JoyHatEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub which: JoystickID,
    pub hat: u8,
    pub value: u8,
    pub padding1: u8,
    pub padding2: u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct JoyButtonEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub which: JoystickID,
    pub button: u8,
    pub state: u8,
    pub padding1: u8,
    pub padding2: u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct JoyDeviceEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub which: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ControllerAxisEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub which: JoystickID,
    pub axis: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub value: i16,
    pub padding4: u16,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ControllerButtonEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub which: JoystickID,
    pub button: u8,
    pub state: u8,
    pub padding1: u8,
    pub padding2: u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ControllerDeviceEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub which: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ControllerTouchpadEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub which: JoystickID,
    pub touchpad: i32,
    pub finger: i32,
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ControllerSensorEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub which: JoystickID,
    pub sensor: i32,
    pub data: [f32; 3],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct AudioDeviceEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub which: u32,
    pub iscapture: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct TouchFingerEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub touch_id: TouchID,
    pub finger_id: FingerID,
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub pressure: f32,
    pub window_id: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct MultiGestureEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub touch_id: TouchID,
    pub d_theta: f32,
    pub d_dist: f32,
    pub x: f32,
    pub y: f32,
    pub num_fingers: u16,
    pub padding: u16,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct DollarGestureEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub touch_id: TouchID,
    pub gesture_id: GestureID,
    pub num_fingers: u32,
    pub error: f32,
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct DropEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub file: *mut c_char,
    pub window_id: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct SensorEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub which: i32,
    pub data: [f32; 6],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct QuitEvent {
    pub r#type: EventType,
    pub timestamp: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct UserEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub window_id: u32,
    pub code: i32,
    pub data1: *mut c_void,
    pub data2: *mut c_void,
}

#[repr(C)]
pub struct SysWMmsg {
    _unused: [u8; 0],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct SysWMEvent {
    pub r#type: EventType,
    pub timestamp: u32,
    pub msg: *mut SysWMmsg,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union Event {
    pub r#type: EventType,
    pub common: CommonEvent,
    pub display: DisplayEvent,
    pub window: WindowEvent,
    pub key: KeyboardEvent,
    pub edit: TextEditingEvent,
    pub text: TextInputEvent,
    pub motion: MouseMotionEvent,
    pub button: MouseButtonEvent,
    pub wheel: MouseWheelEvent,
    pub jaxis: JoyAxisEvent,
    pub jball: JoyBallEvent,
    pub jhat: JoyHatEvent,
    pub jbutton: JoyButtonEvent,
    pub jdevice: JoyDeviceEvent,
    pub caxis: ControllerAxisEvent,
    pub cbutton: ControllerButtonEvent,
    pub cdevice: ControllerDeviceEvent,
    pub ctouchpad: ControllerTouchpadEvent,
    pub csensor: ControllerSensorEvent,
    pub adevice: AudioDeviceEvent,
    pub sensor: SensorEvent,
    pub quit: QuitEvent,
    pub user: UserEvent,
    pub syswm: SysWMEvent,
    pub tfinger: TouchFingerEvent,
    pub mgesture: MultiGestureEvent,
    pub dgesture: DollarGestureEvent,
    pub r#drop: DropEvent,
    /// Forces the union to the size of the C definition.
    pub padding: [u8; 56],
}

impl Event {
    /// An event with every byte zeroed, used as the out parameter for polling.
    pub const fn zeroed() -> Self {
        Self { padding: [0; 56] }
    }
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl Version {
    pub const fn current() -> Self {
        Self {
            major: MAJOR_VERSION,
            minor: MINOR_VERSION,
            patch: PATCH_VERSION,
        }
    }
}

pub const INIT_TIMER: u32 = 0x0000_0001;
pub const INIT_AUDIO: u32 = 0x0000_0010;
pub const INIT_VIDEO: u32 = 0x0000_0020;
pub const INIT_JOYSTICK: u32 = 0x0000_0200;
pub const INIT_HAPTIC: u32 = 0x0000_1000;
pub const INIT_GAMECONTROLLER: u32 = 0x0000_2000;
pub const INIT_EVENTS: u32 = 0x0000_4000;
pub const INIT_SENSOR: u32 = 0x0000_8000;
pub const INIT_NOPARACHUTE: u32 = 0x0010_0000;

pub const WINDOW_FULLSCREEN: u32 = 0x0000_0001;
pub const WINDOW_OPENGL: u32 = 0x0000_0002;
pub const WINDOW_SHOWN: u32 = 0x0000_0004;
pub const WINDOW_HIDDEN: u32 = 0x0000_0008;
pub const WINDOW_BORDERLESS: u32 = 0x0000_0010;
pub const WINDOW_RESIZABLE: u32 = 0x0000_0020;
pub const WINDOW_MINIMIZED: u32 = 0x0000_0040;
pub const WINDOW_MAXIMIZED: u32 = 0x0000_0080;
pub const WINDOW_INPUT_GRABBED: u32 = 0x0000_0100;
pub const WINDOW_INPUT_FOCUS: u32 = 0x0000_0200;
pub const WINDOW_MOUSE_FOCUS: u32 = 0x0000_0400;
pub const WINDOW_FULLSCREEN_DESKTOP: u32 = WINDOW_FULLSCREEN | 0x0000_1000;
pub const WINDOW_FOREIGN: u32 = 0x0000_0800;
pub const WINDOW_ALLOW_HIGHDPI: u32 = 0x0000_2000;
pub const WINDOW_MOUSE_CAPTURE: u32 = 0x0000_4000;
pub const WINDOW_ALWAYS_ON_TOP: u32 = 0x0000_8000;
pub const WINDOW_SKIP_TASKBAR: u32 = 0x0001_0000;
pub const WINDOW_UTILITY: u32 = 0x0002_0000;
pub const WINDOW_TOOLTIP: u32 = 0x0004_0000;
pub const WINDOW_POPUP_MENU: u32 = 0x0008_0000;
pub const WINDOW_VULKAN: u32 = 0x1000_0000;
pub const WINDOW_METAL: u32 = 0x2000_0000;

pub const WINDOWPOS_UNDEFINED: i32 = 0x1FFF_0000;
pub const WINDOWPOS_CENTERED: i32 = 0x2FFF_0000;

pub const RENDERER_SOFTWARE: u32 = 0x0000_0001;
pub const RENDERER_ACCELERATED: u32 = 0x0000_0002;
pub const RENDERER_PRESENTVSYNC: u32 = 0x0000_0004;
pub const RENDERER_TARGETTEXTURE: u32 = 0x0000_0008;

pub const QUERY: c_int = -1;
pub const IGNORE: c_int = 0;
pub const DISABLE: c_int = 0;
pub const ENABLE: c_int = 1;

crate::dynamic_library! {
    name: "SDL2",
    env: "SDL2_LIBRARY_PATH",
    candidates: [
        "libSDL2-2.0.so.0",
        "libSDL2.so",
        "libSDL2-2.0.0.dylib",
        "libSDL2.dylib",
        "SDL2.dll",
    ],
    functions: {
        pub fn SDL_Init(flags: u32) -> c_int;
        pub fn SDL_InitSubSystem(flags: u32) -> c_int;
        pub fn SDL_QuitSubSystem(flags: u32);
        pub fn SDL_WasInit(flags: u32) -> u32;
        pub fn SDL_Quit();

        pub fn SDL_GetError() -> *const c_char;
        pub fn SDL_ClearError();
        pub fn SDL_GetVersion(version: *mut Version);
        pub fn SDL_GetTicks() -> u32;
        pub fn SDL_Delay(ms: u32);
        pub fn SDL_SetHint(name: *const c_char, value: *const c_char) -> Bool;
        pub fn SDL_GetHint(name: *const c_char) -> *const c_char;
        pub fn SDL_free(mem: *mut c_void);

        pub fn SDL_CreateWindow(
            title: *const c_char,
            x: c_int,
            y: c_int,
            w: c_int,
            h: c_int,
            flags: u32,
        ) -> *mut Window;
        pub fn SDL_DestroyWindow(window: *mut Window);
        pub fn SDL_GetWindowID(window: *mut Window) -> u32;
        pub fn SDL_GetWindowSize(window: *mut Window, w: *mut c_int, h: *mut c_int);
        pub fn SDL_SetWindowSize(window: *mut Window, w: c_int, h: c_int);
        pub fn SDL_GetWindowPosition(window: *mut Window, x: *mut c_int, y: *mut c_int);
        pub fn SDL_SetWindowTitle(window: *mut Window, title: *const c_char);
        pub fn SDL_GetWindowTitle(window: *mut Window) -> *const c_char;
        pub fn SDL_GetWindowFlags(window: *mut Window) -> u32;
        pub fn SDL_ShowWindow(window: *mut Window);
        pub fn SDL_HideWindow(window: *mut Window);
        pub fn SDL_RaiseWindow(window: *mut Window);
        pub fn SDL_SetWindowFullscreen(window: *mut Window, flags: u32) -> c_int;
        pub fn SDL_GetWindowSurface(window: *mut Window) -> *mut Surface;
        pub fn SDL_UpdateWindowSurface(window: *mut Window) -> c_int;

        pub fn SDL_CreateRenderer(window: *mut Window, index: c_int, flags: u32) -> *mut Renderer;
        pub fn SDL_DestroyRenderer(renderer: *mut Renderer);
        pub fn SDL_RenderClear(renderer: *mut Renderer) -> c_int;
        pub fn SDL_RenderPresent(renderer: *mut Renderer);
        pub fn SDL_SetRenderDrawColor(renderer: *mut Renderer, r: u8, g: u8, b: u8, a: u8) -> c_int;
        pub fn SDL_GetRenderDrawColor(
            renderer: *mut Renderer,
            r: *mut u8,
            g: *mut u8,
            b: *mut u8,
            a: *mut u8,
        ) -> c_int;
        pub fn SDL_RenderFillRect(renderer: *mut Renderer, rect: *const Rect) -> c_int;
        pub fn SDL_RenderDrawRect(renderer: *mut Renderer, rect: *const Rect) -> c_int;
        pub fn SDL_RenderDrawLine(
            renderer: *mut Renderer,
            x1: c_int,
            y1: c_int,
            x2: c_int,
            y2: c_int,
        ) -> c_int;
        pub fn SDL_RenderCopy(
            renderer: *mut Renderer,
            texture: *mut Texture,
            src: *const Rect,
            dst: *const Rect,
        ) -> c_int;
        pub fn SDL_GetRendererOutputSize(renderer: *mut Renderer, w: *mut c_int, h: *mut c_int) -> c_int;

        pub fn SDL_CreateTextureFromSurface(renderer: *mut Renderer, surface: *mut Surface) -> *mut Texture;
        pub fn SDL_DestroyTexture(texture: *mut Texture);
        pub fn SDL_QueryTexture(
            texture: *mut Texture,
            format: *mut u32,
            access: *mut c_int,
            w: *mut c_int,
            h: *mut c_int,
        ) -> c_int;

        pub fn SDL_CreateRGBSurfaceWithFormat(
            flags: u32,
            width: c_int,
            height: c_int,
            depth: c_int,
            format: u32,
        ) -> *mut Surface;
        pub fn SDL_FreeSurface(surface: *mut Surface);
        pub fn SDL_LockSurface(surface: *mut Surface) -> c_int;
        pub fn SDL_UnlockSurface(surface: *mut Surface);
        pub fn SDL_FillRect(surface: *mut Surface, rect: *const Rect, color: u32) -> c_int;
        pub fn SDL_MapRGBA(format: *const PixelFormat, r: u8, g: u8, b: u8, a: u8) -> u32;
        pub fn SDL_GetPixelFormatName(format: u32) -> *const c_char;

        pub fn SDL_PollEvent(event: *mut Event) -> c_int;
        pub fn SDL_WaitEvent(event: *mut Event) -> c_int;
        pub fn SDL_WaitEventTimeout(event: *mut Event, timeout: c_int) -> c_int;
        pub fn SDL_HasEvents(min_type: u32, max_type: u32) -> Bool;
        pub fn SDL_PumpEvents();
        pub fn SDL_FlushEvents(min_type: u32, max_type: u32);
        pub fn SDL_RegisterEvents(num_events: c_int) -> u32;
        pub fn SDL_PushEvent(event: *mut Event) -> c_int;

        pub fn SDL_GetScancodeName(scancode: Scancode) -> *const c_char;
        pub fn SDL_GetScancodeFromName(name: *const c_char) -> Scancode;
        pub fn SDL_GetKeyFromScancode(scancode: Scancode) -> Keycode;
        pub fn SDL_GetKeyName(key: Keycode) -> *const c_char;
        pub fn SDL_GetKeyFromName(name: *const c_char) -> Keycode;
        pub fn SDL_GetScancodeFromKey(key: Keycode) -> Scancode;
        pub fn SDL_GetModState() -> c_int;

        pub fn SDL_GetMouseState(x: *mut c_int, y: *mut c_int) -> u32;
        pub fn SDL_ShowCursor(toggle: c_int) -> c_int;

        pub fn SDL_GL_CreateContext(window: *mut Window) -> GLContext;
        pub fn SDL_GL_DeleteContext(context: GLContext);
        pub fn SDL_GL_MakeCurrent(window: *mut Window, context: GLContext) -> c_int;
        pub fn SDL_GL_SwapWindow(window: *mut Window);
        pub fn SDL_GL_SetAttribute(attr: c_int, value: c_int) -> c_int;
        pub fn SDL_GL_GetAttribute(attr: c_int, value: *mut c_int) -> c_int;
        pub fn SDL_GL_GetProcAddress(proc: *const c_char) -> *mut c_void;
        pub fn SDL_GL_SetSwapInterval(interval: c_int) -> c_int;
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    #[test]
    fn event_union_matches_c_size() {
        assert_eq!(size_of::<Event>(), 56);
    }

    #[test]
    fn struct_layouts() {
        assert_eq!(size_of::<Keysym>(), 16);
        assert_eq!(offset_of!(KeyboardEvent, keysym), 16);
        assert_eq!(offset_of!(MouseButtonEvent, x), 20);
        assert_eq!(offset_of!(TouchFingerEvent, touch_id), 8);
        assert_eq!(
            offset_of!(PixelFormat, r_mask),
            offset_of!(PixelFormat, palette) + size_of::<*mut Palette>() + 4
        );
        assert_eq!(size_of::<Rect>(), 16);
        assert_eq!(size_of::<Color>(), 4);
    }

    #[test]
    fn library_name_tracks_load_state() {
        assert_eq!(is_loaded(), library_name().is_some());
    }
}
