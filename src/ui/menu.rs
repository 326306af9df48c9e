//! Menu navigation state machine.
//!
//! Owns the selection cursor and the current [`View`]. All transitions
//! happen in [`MenuState::handle`]; rendering reads the state but never
//! mutates it.

use crate::ui::{ButtonEvent, View};

/// Sensor categories shown in the menu, in display order.
pub const MENU_ITEMS: [&str; 7] = [
    "Temperature",
    "Pressure",
    "Humidity",
    "Light",
    "Proximity",
    "Orientation",
    "Motion",
];

/// Move selection cursor one item up, wrapping past the first item.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    (selected + item_count - 1) % item_count
}

/// Move selection cursor one item down, wrapping past the last item.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    (selected + 1) % item_count
}

/// Navigation state: selection cursor plus the active view.
///
/// The cursor is always a valid index into [`MENU_ITEMS`]; both wrap
/// helpers keep it in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuState {
    selected: usize,
    view: View,
}

impl MenuState {
    /// Start at the first item, menu view.
    pub const fn new() -> Self {
        Self {
            selected: 0,
            view: View::Menu,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Apply one debounced button event.
    ///
    /// In the menu, SELECT captures the name under the cursor; the name
    /// stays fixed for the lifetime of the readout view. BACK is reserved
    /// in the menu and does nothing.
    pub fn handle(&mut self, event: ButtonEvent) {
        match self.view {
            View::Menu => match event {
                ButtonEvent::Up => {
                    self.selected = select_prev(self.selected, MENU_ITEMS.len());
                }
                ButtonEvent::Down => {
                    self.selected = select_next(self.selected, MENU_ITEMS.len());
                }
                ButtonEvent::Select => {
                    self.view = View::Sensor(MENU_ITEMS[self.selected]);
                }
                ButtonEvent::Back => {}
            },
            View::Sensor(_) => {
                if event == ButtonEvent::Back {
                    self.view = View::Menu;
                }
            }
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}
