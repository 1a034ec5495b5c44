use super::actions::Action;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// A piece of the screen that turns input into [`Action`]s and draws itself.
pub trait Component {
    /// Map a key press to an intent. `Action::None` lets the caller try the next handler.
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn handle_mouse_event(&mut self, _mouse: MouseEvent) -> Action {
        Action::None
    }

    /// React to an action and pass it (or a follow-up) on to the next component.
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    /// True while the component wants every key, global shortcuts included.
    fn captures_input(&self) -> bool {
        false
    }

    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}
