#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::components::sheet::SheetSide;

/// Page-level UI state. The sheet primitives read this but never own it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub sheet_open: bool,
    pub sheet_side: SheetSide,
}

impl UiState {
    pub fn open_sheet(&mut self) {
        self.sheet_open = true;
    }

    pub fn close_sheet(&mut self) {
        self.sheet_open = false;
    }

    /// Move the sheet to another edge without changing whether it is open.
    pub fn set_sheet_side(&mut self, side: SheetSide) {
        self.sheet_side = side;
    }
}
