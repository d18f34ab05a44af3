/// Named input actions delivered by the transport. Key parsing happens there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Backspace,
    Char(char),
    CtrlS,
    Quit,
    Resize { width: u16, height: u16 },
    Tick,
}
