use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// Distance in pixels a held pointer must travel before a press becomes a drag
pub const DRAG_SLOP: i32 = 8;

/// Discrete input delivered to screens once per frame
///
/// Pointer input is already reduced to gestures: a press and release that
/// did not move is a `Tap`; a press that moved is a series of `Drag`s ended
/// by `DragComplete`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuInput {
    // === Gestures ===
    Tap { x: i32, y: i32 },
    Drag { delta_x: f32 },
    DragComplete,

    // === Buttons ===
    Back,
    Up,
    Down,
    Accept,
}

/// Everything gathered from one poll of the event pump
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrameInput {
    pub events: Vec<MenuInput>,
    pub quit: bool,
}

/// Left button press being tracked for tap/drag recognition
#[derive(Debug, Clone, Copy)]
struct Press {
    start_x: i32,
    start_y: i32,
    last_x: i32,
    dragging: bool,
}

/// InputSystem turns SDL2 events into [`MenuInput`]s
///
/// Mouse coordinates arrive in logical (canvas) coordinates because the
/// canvas has a logical size set.
pub struct InputSystem {
    press: Option<Press>,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem { press: None }
    }

    /// Drains the event pump
    pub fn poll_events(&mut self, event_pump: &mut EventPump) -> FrameInput {
        let mut frame = FrameInput::default();

        for event in event_pump.poll_iter() {
            self.translate(&event, &mut frame);
        }

        frame
    }

    fn translate(&mut self, event: &Event, frame: &mut FrameInput) {
        match *event {
            Event::Quit { .. } => {
                frame.quit = true;
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(input) = Self::map_key(key) {
                    frame.events.push(input);
                }
            }
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                self.press(x, y);
            }
            Event::MouseMotion { x, y, .. } => {
                self.motion(x, y, &mut frame.events);
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                self.release(x, y, &mut frame.events);
            }
            _ => {
                // Other event types are not used by the menus
            }
        }
    }

    fn map_key(key: Keycode) -> Option<MenuInput> {
        match key {
            Keycode::Escape | Keycode::Backspace | Keycode::AcBack => Some(MenuInput::Back),
            Keycode::Up | Keycode::W => Some(MenuInput::Up),
            Keycode::Down | Keycode::S => Some(MenuInput::Down),
            Keycode::Return | Keycode::KpEnter | Keycode::Space => Some(MenuInput::Accept),
            _ => None,
        }
    }

    fn press(&mut self, x: i32, y: i32) {
        self.press = Some(Press {
            start_x: x,
            start_y: y,
            last_x: x,
            dragging: false,
        });
    }

    fn motion(&mut self, x: i32, y: i32, events: &mut Vec<MenuInput>) {
        let Some(press) = self.press.as_mut() else {
            return;
        };

        if !press.dragging {
            let moved = (x - press.start_x).abs().max((y - press.start_y).abs());
            if moved <= DRAG_SLOP {
                return;
            }
            press.dragging = true;
        }

        let delta_x = x - press.last_x;
        press.last_x = x;
        if delta_x != 0 {
            events.push(MenuInput::Drag {
                delta_x: delta_x as f32,
            });
        }
    }

    fn release(&mut self, x: i32, y: i32, events: &mut Vec<MenuInput>) {
        match self.press.take() {
            Some(press) if press.dragging => events.push(MenuInput::DragComplete),
            Some(_) => events.push(MenuInput::Tap { x, y }),
            None => {}
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
