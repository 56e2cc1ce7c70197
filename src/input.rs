use minifb::Key;

/// Logical controls the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    MoveLeft,
    MoveRight,
    Fire,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Control),
    Released(Control),
    /// The window manager asked the window to close
    Close,
}

/// Fixed key bindings. Every other key is ignored.
pub fn control_for_key(key: Key) -> Option<Control> {
    match key {
        Key::Left => Some(Control::MoveLeft),
        Key::Right => Some(Control::MoveRight),
        Key::Space => Some(Control::Fire),
        Key::Q => Some(Control::Quit),
        _ => None,
    }
}
