//! Typed events converted from the native event union.

use std::ffi::{CStr, c_char, c_void};

use sdl2_sys as sdl;

pub use sdl2_sys::{EventType, WindowEventId};

use crate::{
    Error, HatPosition, JoystickId, KeySym, MouseButton, MouseState, Result, get_error,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CommonEvent {
    pub event_type: EventType,
    pub timestamp: u32,
}

/// Application lifecycle changes, mostly relevant on mobile platforms.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AppEvent {
    pub event_type: EventType,
    pub timestamp: u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DisplayEvent {
    pub timestamp: u32,
    pub display: u32,
    pub event: u8,
    pub data1: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WindowEvent {
    pub timestamp: u32,
    pub window_id: u32,
    pub event: WindowEventId,
    pub data1: i32,
    pub data2: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SysWmEvent {
    pub timestamp: u32,
    pub msg: *mut sdl::SysWMmsg,
}

/// Key press or release, `KEYDOWN` or `KEYUP`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct KeyboardEvent {
    pub event_type: EventType,
    pub timestamp: u32,
    pub window_id: u32,
    pub pressed: bool,
    pub repeat: bool,
    pub keysym: KeySym,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TextEditingEvent {
    pub timestamp: u32,
    pub window_id: u32,
    pub text: String,
    pub start: i32,
    pub length: i32,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TextInputEvent {
    pub timestamp: u32,
    pub window_id: u32,
    pub text: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MouseMotionEvent {
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub state: MouseState,
    pub x: i32,
    pub y: i32,
    pub xrel: i32,
    pub yrel: i32,
}

/// `MOUSEBUTTONDOWN` or `MOUSEBUTTONUP`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MouseButtonEvent {
    pub event_type: EventType,
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub button: MouseButton,
    pub pressed: bool,
    pub clicks: u8,
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MouseWheelEvent {
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub x: i32,
    pub y: i32,
    /// The values in `x` and `y` are inverted.
    pub flipped: bool,
    pub precise_x: f32,
    pub precise_y: f32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct JoyAxisEvent {
    pub timestamp: u32,
    pub which: JoystickId,
    pub axis: u8,
    pub value: i16,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct JoyBallEvent {
    pub timestamp: u32,
    pub which: JoystickId,
    pub ball: u8,
    pub xrel: i16,
    pub yrel: i16,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct JoyHatEvent {
    pub timestamp: u32,
    pub which: JoystickId,
    pub hat: u8,
    pub value: HatPosition,
}

/// `JOYBUTTONDOWN` or `JOYBUTTONUP`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct JoyButtonEvent {
    pub event_type: EventType,
    pub timestamp: u32,
    pub which: JoystickId,
    pub button: u8,
    pub pressed: bool,
}

/// `JOYDEVICEADDED` carries a device index, `JOYDEVICEREMOVED` an instance id.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct JoyDeviceEvent {
    pub event_type: EventType,
    pub timestamp: u32,
    pub which: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ControllerAxisEvent {
    pub timestamp: u32,
    pub which: JoystickId,
    pub axis: u8,
    pub value: i16,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ControllerButtonEvent {
    pub event_type: EventType,
    pub timestamp: u32,
    pub which: JoystickId,
    pub button: u8,
    pub pressed: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ControllerDeviceEvent {
    pub event_type: EventType,
    pub timestamp: u32,
    pub which: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AudioDeviceEvent {
    pub event_type: EventType,
    pub timestamp: u32,
    pub which: u32,
    pub is_capture: bool,
}

/// `FINGERDOWN`, `FINGERUP` or `FINGERMOTION`. Coordinates are normalized.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TouchFingerEvent {
    pub event_type: EventType,
    pub timestamp: u32,
    pub touch_id: i64,
    pub finger_id: i64,
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub pressure: f32,
    pub window_id: u32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MultiGestureEvent {
    pub timestamp: u32,
    pub touch_id: i64,
    pub d_theta: f32,
    pub d_dist: f32,
    pub x: f32,
    pub y: f32,
    pub num_fingers: u16,
}

/// `DOLLARGESTURE` or `DOLLARRECORD`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DollarGestureEvent {
    pub event_type: EventType,
    pub timestamp: u32,
    pub touch_id: i64,
    pub gesture_id: i64,
    pub num_fingers: u32,
    pub error: f32,
    pub x: f32,
    pub y: f32,
}

/// `DROPFILE`, `DROPTEXT`, `DROPBEGIN` or `DROPCOMPLETE`. Only the first two
/// carry a file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DropEvent {
    pub event_type: EventType,
    pub timestamp: u32,
    pub file: Option<String>,
    pub window_id: u32,
}

/// An application defined event, type at or above `USEREVENT`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UserEvent {
    pub event_type: EventType,
    pub timestamp: u32,
    pub window_id: u32,
    pub code: i32,
    pub data1: *mut c_void,
    pub data2: *mut c_void,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Event {
    Quit(CommonEvent),
    App(AppEvent),
    Display(DisplayEvent),
    Window(WindowEvent),
    SysWm(SysWmEvent),
    Keyboard(KeyboardEvent),
    TextEditing(TextEditingEvent),
    TextInput(TextInputEvent),
    KeymapChanged(CommonEvent),
    MouseMotion(MouseMotionEvent),
    MouseButton(MouseButtonEvent),
    MouseWheel(MouseWheelEvent),
    JoyAxis(JoyAxisEvent),
    JoyBall(JoyBallEvent),
    JoyHat(JoyHatEvent),
    JoyButton(JoyButtonEvent),
    JoyDevice(JoyDeviceEvent),
    ControllerAxis(ControllerAxisEvent),
    ControllerButton(ControllerButtonEvent),
    ControllerDevice(ControllerDeviceEvent),
    AudioDevice(AudioDeviceEvent),
    TouchFinger(TouchFingerEvent),
    MultiGesture(MultiGestureEvent),
    DollarGesture(DollarGestureEvent),
    ClipboardUpdate(CommonEvent),
    Drop(DropEvent),
    RenderReset(CommonEvent),
    User(UserEvent),
    /// Anything without a dedicated variant.
    Common(CommonEvent),
}

fn is_user_event(event_type: EventType) -> bool {
    (EventType::USEREVENT.0..EventType::LASTEVENT.0).contains(&event_type.0)
}

fn text_from_raw(text: &[c_char]) -> String {
    let bytes: Vec<u8> = text.iter().map(|&c| c as u8).collect();
    match CStr::from_bytes_until_nul(&bytes) {
        Ok(text) => text.to_string_lossy().into_owned(),
        Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
    }
}

impl Event {
    /// Converts a native event. Event types without a dedicated variant become
    /// [`Event::Common`].
    ///
    /// # Safety
    ///
    /// `raw` must be initialized for its event type. For drop events the file
    /// pointer must be null or a valid C string; it is copied, not freed.
    pub unsafe fn from_raw(raw: &sdl::Event) -> Event {
        let event_type = unsafe { raw.r#type };
        let common = unsafe { raw.common };
        let common = CommonEvent {
            event_type,
            timestamp: common.timestamp,
        };

        unsafe {
            match event_type {
                EventType::QUIT => Event::Quit(common),
                EventType::APP_TERMINATING
                | EventType::APP_LOWMEMORY
                | EventType::APP_WILLENTERBACKGROUND
                | EventType::APP_DIDENTERBACKGROUND
                | EventType::APP_WILLENTERFOREGROUND
                | EventType::APP_DIDENTERFOREGROUND => Event::App(AppEvent {
                    event_type,
                    timestamp: common.timestamp,
                }),
                EventType::DISPLAYEVENT => {
                    let e = raw.display;
                    Event::Display(DisplayEvent {
                        timestamp: e.timestamp,
                        display: e.display,
                        event: e.event,
                        data1: e.data1,
                    })
                }
                EventType::WINDOWEVENT => {
                    let e = raw.window;
                    Event::Window(WindowEvent {
                        timestamp: e.timestamp,
                        window_id: e.window_id,
                        event: e.event,
                        data1: e.data1,
                        data2: e.data2,
                    })
                }
                EventType::SYSWMEVENT => {
                    let e = raw.syswm;
                    Event::SysWm(SysWmEvent {
                        timestamp: e.timestamp,
                        msg: e.msg,
                    })
                }
                EventType::KEYDOWN | EventType::KEYUP => {
                    let e = raw.key;
                    Event::Keyboard(KeyboardEvent {
                        event_type,
                        timestamp: e.timestamp,
                        window_id: e.window_id,
                        pressed: e.state == sdl::PRESSED,
                        repeat: e.repeat != 0,
                        keysym: e.keysym.into(),
                    })
                }
                EventType::TEXTEDITING => {
                    let e = raw.edit;
                    Event::TextEditing(TextEditingEvent {
                        timestamp: e.timestamp,
                        window_id: e.window_id,
                        text: text_from_raw(&e.text),
                        start: e.start,
                        length: e.length,
                    })
                }
                EventType::TEXTINPUT => {
                    let e = raw.text;
                    Event::TextInput(TextInputEvent {
                        timestamp: e.timestamp,
                        window_id: e.window_id,
                        text: text_from_raw(&e.text),
                    })
                }
                EventType::KEYMAPCHANGED => Event::KeymapChanged(common),
                EventType::MOUSEMOTION => {
                    let e = raw.motion;
                    Event::MouseMotion(MouseMotionEvent {
                        timestamp: e.timestamp,
                        window_id: e.window_id,
                        which: e.which,
                        state: MouseState::from_raw(e.state),
                        x: e.x,
                        y: e.y,
                        xrel: e.xrel,
                        yrel: e.yrel,
                    })
                }
                EventType::MOUSEBUTTONDOWN | EventType::MOUSEBUTTONUP => {
                    let e = raw.button;
                    Event::MouseButton(MouseButtonEvent {
                        event_type,
                        timestamp: e.timestamp,
                        window_id: e.window_id,
                        which: e.which,
                        button: MouseButton(e.button),
                        pressed: e.state == sdl::PRESSED,
                        clicks: e.clicks,
                        x: e.x,
                        y: e.y,
                    })
                }
                EventType::MOUSEWHEEL => {
                    let e = raw.wheel;
                    Event::MouseWheel(MouseWheelEvent {
                        timestamp: e.timestamp,
                        window_id: e.window_id,
                        which: e.which,
                        x: e.x,
                        y: e.y,
                        flipped: e.direction == sdl::MOUSEWHEEL_FLIPPED,
                        precise_x: e.precise_x,
                        precise_y: e.precise_y,
                    })
                }
                EventType::JOYAXISMOTION => {
                    let e = raw.jaxis;
                    Event::JoyAxis(JoyAxisEvent {
                        timestamp: e.timestamp,
                        which: JoystickId(e.which),
                        axis: e.axis,
                        value: e.value,
                    })
                }
                EventType::JOYBALLMOTION => {
                    let e = raw.jball;
                    Event::JoyBall(JoyBallEvent {
                        timestamp: e.timestamp,
                        which: JoystickId(e.which),
                        ball: e.ball,
                        xrel: e.xrel,
                        yrel: e.yrel,
                    })
                }
                EventType::JOYHATMOTION => {
                    let e = raw.jhat;
                    Event::JoyHat(JoyHatEvent {
                        timestamp: e.timestamp,
                        which: JoystickId(e.which),
                        hat: e.hat,
                        value: HatPosition(e.value),
                    })
                }
                EventType::JOYBUTTONDOWN | EventType::JOYBUTTONUP => {
                    let e = raw.jbutton;
                    Event::JoyButton(JoyButtonEvent {
                        event_type,
                        timestamp: e.timestamp,
                        which: JoystickId(e.which),
                        button: e.button,
                        pressed: e.state == sdl::PRESSED,
                    })
                }
                EventType::JOYDEVICEADDED | EventType::JOYDEVICEREMOVED => {
                    let e = raw.jdevice;
                    Event::JoyDevice(JoyDeviceEvent {
                        event_type,
                        timestamp: e.timestamp,
                        which: e.which,
                    })
                }
                EventType::CONTROLLERAXISMOTION => {
                    let e = raw.caxis;
                    Event::ControllerAxis(ControllerAxisEvent {
                        timestamp: e.timestamp,
                        which: JoystickId(e.which),
                        axis: e.axis,
                        value: e.value,
                    })
                }
                EventType::CONTROLLERBUTTONDOWN | EventType::CONTROLLERBUTTONUP => {
                    let e = raw.cbutton;
                    Event::ControllerButton(ControllerButtonEvent {
                        event_type,
                        timestamp: e.timestamp,
                        which: JoystickId(e.which),
                        button: e.button,
                        pressed: e.state == sdl::PRESSED,
                    })
                }
                EventType::CONTROLLERDEVICEADDED
                | EventType::CONTROLLERDEVICEREMOVED
                | EventType::CONTROLLERDEVICEREMAPPED => {
                    let e = raw.cdevice;
                    Event::ControllerDevice(ControllerDeviceEvent {
                        event_type,
                        timestamp: e.timestamp,
                        which: e.which,
                    })
                }
                EventType::AUDIODEVICEADDED | EventType::AUDIODEVICEREMOVED => {
                    let e = raw.adevice;
                    Event::AudioDevice(AudioDeviceEvent {
                        event_type,
                        timestamp: e.timestamp,
                        which: e.which,
                        is_capture: e.iscapture != 0,
                    })
                }
                EventType::FINGERDOWN | EventType::FINGERUP | EventType::FINGERMOTION => {
                    let e = raw.tfinger;
                    Event::TouchFinger(TouchFingerEvent {
                        event_type,
                        timestamp: e.timestamp,
                        touch_id: e.touch_id,
                        finger_id: e.finger_id,
                        x: e.x,
                        y: e.y,
                        dx: e.dx,
                        dy: e.dy,
                        pressure: e.pressure,
                        window_id: e.window_id,
                    })
                }
                EventType::MULTIGESTURE => {
                    let e = raw.mgesture;
                    Event::MultiGesture(MultiGestureEvent {
                        timestamp: e.timestamp,
                        touch_id: e.touch_id,
                        d_theta: e.d_theta,
                        d_dist: e.d_dist,
                        x: e.x,
                        y: e.y,
                        num_fingers: e.num_fingers,
                    })
                }
                EventType::DOLLARGESTURE | EventType::DOLLARRECORD => {
                    let e = raw.dgesture;
                    Event::DollarGesture(DollarGestureEvent {
                        event_type,
                        timestamp: e.timestamp,
                        touch_id: e.touch_id,
                        gesture_id: e.gesture_id,
                        num_fingers: e.num_fingers,
                        error: e.error,
                        x: e.x,
                        y: e.y,
                    })
                }
                EventType::CLIPBOARDUPDATE => Event::ClipboardUpdate(common),
                EventType::DROPFILE
                | EventType::DROPTEXT
                | EventType::DROPBEGIN
                | EventType::DROPCOMPLETE => {
                    let e = raw.r#drop;
                    let file = if e.file.is_null() {
                        None
                    } else {
                        Some(CStr::from_ptr(e.file).to_string_lossy().into_owned())
                    };
                    Event::Drop(DropEvent {
                        event_type,
                        timestamp: e.timestamp,
                        file,
                        window_id: e.window_id,
                    })
                }
                EventType::RENDER_TARGETS_RESET | EventType::RENDER_DEVICE_RESET => {
                    Event::RenderReset(common)
                }
                event_type if is_user_event(event_type) => {
                    let e = raw.user;
                    Event::User(UserEvent {
                        event_type,
                        timestamp: e.timestamp,
                        window_id: e.window_id,
                        code: e.code,
                        data1: e.data1,
                        data2: e.data2,
                    })
                }
                _ => {
                    log::debug!("unhandled event type {:#x}", event_type.0);
                    Event::Common(common)
                }
            }
        }
    }

    pub fn event_type(&self) -> EventType {
        match self {
            Event::Quit(_) => EventType::QUIT,
            Event::Display(_) => EventType::DISPLAYEVENT,
            Event::Window(_) => EventType::WINDOWEVENT,
            Event::SysWm(_) => EventType::SYSWMEVENT,
            Event::TextEditing(_) => EventType::TEXTEDITING,
            Event::TextInput(_) => EventType::TEXTINPUT,
            Event::MouseMotion(_) => EventType::MOUSEMOTION,
            Event::MouseWheel(_) => EventType::MOUSEWHEEL,
            Event::JoyAxis(_) => EventType::JOYAXISMOTION,
            Event::JoyBall(_) => EventType::JOYBALLMOTION,
            Event::JoyHat(_) => EventType::JOYHATMOTION,
            Event::ControllerAxis(_) => EventType::CONTROLLERAXISMOTION,
            Event::MultiGesture(_) => EventType::MULTIGESTURE,
            Event::App(e) => e.event_type,
            Event::Keyboard(e) => e.event_type,
            Event::MouseButton(e) => e.event_type,
            Event::JoyButton(e) => e.event_type,
            Event::JoyDevice(e) => e.event_type,
            Event::ControllerButton(e) => e.event_type,
            Event::ControllerDevice(e) => e.event_type,
            Event::AudioDevice(e) => e.event_type,
            Event::TouchFinger(e) => e.event_type,
            Event::DollarGesture(e) => e.event_type,
            Event::Drop(e) => e.event_type,
            Event::User(e) => e.event_type,
            Event::KeymapChanged(e)
            | Event::ClipboardUpdate(e)
            | Event::RenderReset(e)
            | Event::Common(e) => e.event_type,
        }
    }

    /// Milliseconds since SDL was initialized when the event was queued.
    pub fn timestamp(&self) -> u32 {
        match self {
            Event::Quit(e)
            | Event::KeymapChanged(e)
            | Event::ClipboardUpdate(e)
            | Event::RenderReset(e)
            | Event::Common(e) => e.timestamp,
            Event::App(e) => e.timestamp,
            Event::Display(e) => e.timestamp,
            Event::Window(e) => e.timestamp,
            Event::SysWm(e) => e.timestamp,
            Event::Keyboard(e) => e.timestamp,
            Event::TextEditing(e) => e.timestamp,
            Event::TextInput(e) => e.timestamp,
            Event::MouseMotion(e) => e.timestamp,
            Event::MouseButton(e) => e.timestamp,
            Event::MouseWheel(e) => e.timestamp,
            Event::JoyAxis(e) => e.timestamp,
            Event::JoyBall(e) => e.timestamp,
            Event::JoyHat(e) => e.timestamp,
            Event::JoyButton(e) => e.timestamp,
            Event::JoyDevice(e) => e.timestamp,
            Event::ControllerAxis(e) => e.timestamp,
            Event::ControllerButton(e) => e.timestamp,
            Event::ControllerDevice(e) => e.timestamp,
            Event::AudioDevice(e) => e.timestamp,
            Event::TouchFinger(e) => e.timestamp,
            Event::MultiGesture(e) => e.timestamp,
            Event::DollarGesture(e) => e.timestamp,
            Event::Drop(e) => e.timestamp,
            Event::User(e) => e.timestamp,
        }
    }
}

/// Converts a freshly dequeued event and releases what SDL handed over.
fn take_event(raw: &sdl::Event) -> Event {
    let event = unsafe { Event::from_raw(raw) };
    if matches!(event, Event::Drop(_)) {
        let file = unsafe { raw.r#drop.file };
        if !file.is_null() {
            unsafe { sdl::SDL_free(file as *mut c_void) };
        }
    }
    event
}

/// Takes the next pending event, if any.
pub fn poll_event() -> Option<Event> {
    let mut raw = sdl::Event::zeroed();
    if unsafe { sdl::SDL_PollEvent(&mut raw) } == 0 {
        return None;
    }
    Some(take_event(&raw))
}

/// Blocks until an event arrives.
pub fn wait_event() -> Result<Event> {
    let mut raw = sdl::Event::zeroed();
    if unsafe { sdl::SDL_WaitEvent(&mut raw) } == 0 {
        return Err(get_error());
    }
    Ok(take_event(&raw))
}

/// Blocks for at most `timeout` milliseconds. `None` on timeout.
pub fn wait_event_timeout(timeout: i32) -> Option<Event> {
    let mut raw = sdl::Event::zeroed();
    if unsafe { sdl::SDL_WaitEventTimeout(&mut raw, timeout) } == 0 {
        return None;
    }
    Some(take_event(&raw))
}

pub fn has_event(event_type: EventType) -> bool {
    has_events(event_type, event_type)
}

/// Whether any event with a type in `min..=max` is queued.
pub fn has_events(min: EventType, max: EventType) -> bool {
    unsafe { sdl::SDL_HasEvents(min.0, max.0) == sdl::Bool::True }
}

/// Gathers pending input from devices into the queue. Polling and waiting do
/// this implicitly.
pub fn pump_events() {
    unsafe { sdl::SDL_PumpEvents() }
}

/// Drops queued events with a type in `min..=max`.
pub fn flush_events(min: EventType, max: EventType) {
    unsafe { sdl::SDL_FlushEvents(min.0, max.0) }
}

/// Reserves `count` consecutive user event types and returns the first.
pub fn register_events(count: i32) -> Option<EventType> {
    match unsafe { sdl::SDL_RegisterEvents(count) } {
        u32::MAX => None,
        first => Some(EventType(first)),
    }
}

/// Queues a user event. Returns `false` when an event filter dropped it.
///
/// The type must be in `USEREVENT..LASTEVENT`, anything else would be read
/// back with the wrong layout.
pub fn push_user_event(event: &UserEvent) -> Result<bool> {
    if !is_user_event(event.event_type) {
        return Err(Error::NotUserEvent(event.event_type.0));
    }
    let mut raw = sdl::Event::zeroed();
    raw.user = sdl::UserEvent {
        r#type: event.event_type,
        timestamp: event.timestamp,
        window_id: event.window_id,
        code: event.code,
        data1: event.data1,
        data2: event.data2,
    };
    match unsafe { sdl::SDL_PushEvent(&mut raw) } {
        ret if ret < 0 => Err(get_error()),
        ret => Ok(ret > 0),
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::CString;

    use super::*;
    use crate::keys::{Code, Mod, Scancode};

    fn text<const N: usize>(s: &str) -> [c_char; N] {
        let mut text = [0; N];
        for (dst, src) in text.iter_mut().zip(s.bytes()) {
            *dst = src as c_char;
        }
        text
    }

    #[test]
    fn quit() {
        let mut raw = sdl::Event::zeroed();
        raw.quit = sdl::QuitEvent {
            r#type: EventType::QUIT,
            timestamp: 1234,
        };
        let event = unsafe { Event::from_raw(&raw) };
        assert_eq!(
            event,
            Event::Quit(CommonEvent {
                event_type: EventType::QUIT,
                timestamp: 1234
            })
        );
        assert_eq!(event.event_type(), EventType::QUIT);
        assert_eq!(event.timestamp(), 1234);
    }

    #[test]
    fn keyboard() {
        let mut raw = sdl::Event::zeroed();
        raw.key = sdl::KeyboardEvent {
            r#type: EventType::KEYUP,
            timestamp: 99,
            window_id: 2,
            state: sdl::RELEASED,
            repeat: 1,
            _padding2: 0,
            _padding3: 0,
            keysym: sdl::Keysym {
                scancode: Scancode::LEFT.0,
                sym: Code::LEFT.0,
                modifiers: Mod::RSHIFT.as_raw(),
                _unused: 0,
            },
        };
        let Event::Keyboard(event) = (unsafe { Event::from_raw(&raw) }) else {
            panic!("expected a keyboard event");
        };
        assert_eq!(event.event_type, EventType::KEYUP);
        assert!(!event.pressed);
        assert!(event.repeat);
        assert_eq!(event.window_id, 2);
        assert_eq!(event.keysym.scancode, Scancode::LEFT);
        assert_eq!(event.keysym.code, Code::LEFT);
        assert!(event.keysym.modifiers.has_shift());
    }

    #[test]
    fn window() {
        let mut raw = sdl::Event::zeroed();
        raw.window = sdl::WindowEvent {
            r#type: EventType::WINDOWEVENT,
            timestamp: 5,
            window_id: 1,
            event: WindowEventId::RESIZED,
            padding1: 0,
            padding2: 0,
            padding3: 0,
            data1: 800,
            data2: 600,
        };
        assert_eq!(
            unsafe { Event::from_raw(&raw) },
            Event::Window(WindowEvent {
                timestamp: 5,
                window_id: 1,
                event: WindowEventId::RESIZED,
                data1: 800,
                data2: 600,
            })
        );
    }

    #[test]
    fn mouse_button() {
        let mut raw = sdl::Event::zeroed();
        raw.button = sdl::MouseButtonEvent {
            r#type: EventType::MOUSEBUTTONDOWN,
            timestamp: 7,
            window_id: 1,
            which: 0,
            button: sdl::BUTTON_RIGHT,
            state: sdl::PRESSED,
            clicks: 2,
            padding1: 0,
            x: 10,
            y: 20,
        };
        let event = unsafe { Event::from_raw(&raw) };
        let Event::MouseButton(button) = &event else {
            panic!("expected a mouse button event");
        };
        assert_eq!(button.button, MouseButton::RIGHT);
        assert!(button.pressed);
        assert_eq!((button.clicks, button.x, button.y), (2, 10, 20));
        assert_eq!(event.event_type(), EventType::MOUSEBUTTONDOWN);
    }

    #[test]
    fn text_input_stops_at_nul() {
        let mut raw = sdl::Event::zeroed();
        raw.text = sdl::TextInputEvent {
            r#type: EventType::TEXTINPUT,
            timestamp: 3,
            window_id: 1,
            text: text("héllo"),
        };
        let Event::TextInput(event) = (unsafe { Event::from_raw(&raw) }) else {
            panic!("expected a text input event");
        };
        assert_eq!(event.text, "héllo");

        // A full buffer without a terminator is still read.
        raw.text.text = text(&"x".repeat(sdl::TEXTINPUTEVENT_TEXT_SIZE));
        let Event::TextInput(event) = (unsafe { Event::from_raw(&raw) }) else {
            panic!("expected a text input event");
        };
        assert_eq!(event.text.len(), sdl::TEXTINPUTEVENT_TEXT_SIZE);
    }

    #[test]
    fn drop_file_is_copied() {
        let path = CString::new("/tmp/picture.png").unwrap();
        let mut raw = sdl::Event::zeroed();
        raw.r#drop = sdl::DropEvent {
            r#type: EventType::DROPFILE,
            timestamp: 11,
            file: path.as_ptr() as *mut c_char,
            window_id: 4,
        };
        let event = unsafe { Event::from_raw(&raw) };
        assert_eq!(
            event,
            Event::Drop(DropEvent {
                event_type: EventType::DROPFILE,
                timestamp: 11,
                file: Some("/tmp/picture.png".to_owned()),
                window_id: 4,
            })
        );

        raw.r#drop.r#type = EventType::DROPCOMPLETE;
        raw.r#drop.file = std::ptr::null_mut();
        let Event::Drop(event) = (unsafe { Event::from_raw(&raw) }) else {
            panic!("expected a drop event");
        };
        assert_eq!(event.file, None);
    }

    #[test]
    fn user_range() {
        let mut raw = sdl::Event::zeroed();
        raw.user = sdl::UserEvent {
            r#type: EventType(EventType::USEREVENT.0 + 3),
            timestamp: 8,
            window_id: 0,
            code: 42,
            data1: std::ptr::null_mut(),
            data2: std::ptr::null_mut(),
        };
        let Event::User(event) = (unsafe { Event::from_raw(&raw) }) else {
            panic!("expected a user event");
        };
        assert_eq!(event.code, 42);
        assert_eq!(event.event_type.0, 0x8003);
    }

    #[test]
    fn unknown_types_fall_back_to_common() {
        for event_type in [EventType::LOCALECHANGED, EventType(0x0123), EventType::LASTEVENT] {
            let mut raw = sdl::Event::zeroed();
            raw.common = sdl::CommonEvent {
                r#type: event_type,
                timestamp: 77,
            };
            let event = unsafe { Event::from_raw(&raw) };
            assert_eq!(
                event,
                Event::Common(CommonEvent {
                    event_type,
                    timestamp: 77
                })
            );
        }
    }

    #[test]
    fn grouped_types() {
        let cases = [
            (EventType::APP_LOWMEMORY, "App"),
            (EventType::KEYMAPCHANGED, "KeymapChanged"),
            (EventType::CLIPBOARDUPDATE, "ClipboardUpdate"),
            (EventType::RENDER_DEVICE_RESET, "RenderReset"),
            (EventType::JOYDEVICEREMOVED, "JoyDevice"),
            (EventType::CONTROLLERDEVICEREMAPPED, "ControllerDevice"),
            (EventType::FINGERMOTION, "TouchFinger"),
            (EventType::DOLLARRECORD, "DollarGesture"),
            (EventType::AUDIODEVICEADDED, "AudioDevice"),
        ];
        for (event_type, variant) in cases {
            let mut raw = sdl::Event::zeroed();
            raw.common = sdl::CommonEvent {
                r#type: event_type,
                timestamp: 1,
            };
            let event = unsafe { Event::from_raw(&raw) };
            assert!(
                format!("{event:?}").starts_with(variant),
                "{event_type:?} decoded as {event:?}"
            );
            assert_eq!(event.event_type(), event_type);
            assert_eq!(event.timestamp(), 1);
        }
    }

    #[test]
    fn only_user_events_are_pushed() {
        let mut event = UserEvent {
            event_type: EventType::DROPFILE,
            timestamp: 0,
            window_id: 1,
            code: 2,
            data1: std::ptr::null_mut(),
            data2: std::ptr::null_mut(),
        };
        for event_type in [EventType::DROPFILE, EventType::QUIT, EventType::LASTEVENT] {
            event.event_type = event_type;
            assert!(matches!(
                push_user_event(&event),
                Err(Error::NotUserEvent(ty)) if ty == event_type.0
            ));
        }
    }
}
