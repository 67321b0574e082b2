use sdl::{
    Event, MouseButton, MouseState,
    event::{EventType, MouseMotionEvent, WindowEventId},
    keys::{Code, Mod, Scancode},
};
use sdl2_sys as sys;

fn decode(raw: &sys::Event) -> Event {
    unsafe { Event::from_raw(raw) }
}

#[test]
fn showimage_style_dispatch() {
    let mut raw = sys::Event::zeroed();
    raw.key = sys::KeyboardEvent {
        r#type: EventType::KEYDOWN,
        timestamp: 10,
        window_id: 1,
        state: sys::PRESSED,
        repeat: 0,
        _padding2: 0,
        _padding3: 0,
        keysym: sys::Keysym {
            scancode: Scancode::ESCAPE.0,
            sym: Code::ESCAPE.0,
            modifiers: (Mod::LCTRL | Mod::NUM).as_raw(),
            _unused: 0,
        },
    };

    let quit = match decode(&raw) {
        Event::Quit(_) => true,
        Event::Keyboard(key) if key.pressed => key.keysym.code == Code::ESCAPE,
        _ => false,
    };
    assert!(quit);

    let Event::Keyboard(key) = decode(&raw) else {
        unreachable!()
    };
    assert!(key.keysym.modifiers.has_ctrl());
    assert!(!key.keysym.modifiers.has_shift());
    assert_eq!(key.keysym.modifiers.to_string(), "LCtrl|Num");
}

#[test]
fn motion_carries_button_state() {
    let mut raw = sys::Event::zeroed();
    raw.motion = sys::MouseMotionEvent {
        r#type: EventType::MOUSEMOTION,
        timestamp: 3,
        window_id: 1,
        which: 0,
        state: (MouseButton::LEFT.mask() | MouseButton::X2.mask()).as_raw(),
        x: 100,
        y: 50,
        xrel: -4,
        yrel: 2,
    };

    let event = decode(&raw);
    assert_eq!(event.event_type(), EventType::MOUSEMOTION);
    let Event::MouseMotion(MouseMotionEvent { state, x, y, .. }) = event else {
        panic!("expected mouse motion, got {event:?}");
    };
    assert_eq!((x, y), (100, 50));
    assert!(state.is_pressed(MouseButton::LEFT));
    assert!(state.is_pressed(MouseButton::X2));
    assert!(!state.is_pressed(MouseButton::MIDDLE));
    assert_eq!(state, MouseState::LEFT | MouseState::X2);
}

#[test]
fn window_resize_and_close() {
    let mut raw = sys::Event::zeroed();
    raw.window = sys::WindowEvent {
        r#type: EventType::WINDOWEVENT,
        timestamp: 20,
        window_id: 9,
        event: WindowEventId::CLOSE,
        padding1: 0,
        padding2: 0,
        padding3: 0,
        data1: 0,
        data2: 0,
    };
    let Event::Window(window) = decode(&raw) else {
        panic!("expected a window event");
    };
    assert_eq!(window.event, WindowEventId::CLOSE);
    assert_eq!(window.window_id, 9);
}

#[test]
fn every_event_reports_its_type() {
    let types = [
        EventType::QUIT,
        EventType::APP_TERMINATING,
        EventType::DISPLAYEVENT,
        EventType::WINDOWEVENT,
        EventType::SYSWMEVENT,
        EventType::KEYDOWN,
        EventType::KEYUP,
        EventType::TEXTEDITING,
        EventType::TEXTINPUT,
        EventType::KEYMAPCHANGED,
        EventType::MOUSEMOTION,
        EventType::MOUSEBUTTONUP,
        EventType::MOUSEWHEEL,
        EventType::JOYAXISMOTION,
        EventType::JOYBALLMOTION,
        EventType::JOYHATMOTION,
        EventType::JOYBUTTONDOWN,
        EventType::JOYDEVICEADDED,
        EventType::CONTROLLERAXISMOTION,
        EventType::CONTROLLERBUTTONUP,
        EventType::CONTROLLERDEVICEADDED,
        EventType::AUDIODEVICEREMOVED,
        EventType::FINGERDOWN,
        EventType::MULTIGESTURE,
        EventType::DOLLARGESTURE,
        EventType::CLIPBOARDUPDATE,
        EventType::DROPBEGIN,
        EventType::RENDER_TARGETS_RESET,
        EventType::USEREVENT,
        EventType::SENSORUPDATE,
    ];
    for event_type in types {
        let mut raw = sys::Event::zeroed();
        raw.common = sys::CommonEvent {
            r#type: event_type,
            timestamp: 500,
        };
        let event = decode(&raw);
        assert_eq!(event.event_type(), event_type, "{event:?}");
        assert_eq!(event.timestamp(), 500, "{event:?}");
    }
}
