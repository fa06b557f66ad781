use winit::event::VirtualKeyCode;

use crate::hand::Hand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Choose(Hand),
    /// Enter: next round.
    Advance,
    /// Escape: pause, leave a screen.
    Back,
}

pub fn key_command(key: VirtualKeyCode) -> Option<KeyCommand> {
    Some(match key {
        VirtualKeyCode::Q => KeyCommand::Choose(Hand::Rock),
        VirtualKeyCode::W => KeyCommand::Choose(Hand::Paper),
        VirtualKeyCode::E => KeyCommand::Choose(Hand::Scissors),
        VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter => KeyCommand::Advance,
        VirtualKeyCode::Escape => KeyCommand::Back,
        _ => return None,
    })
}
