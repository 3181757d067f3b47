//! Sheet host: owns and ticks every visible sheet
//!
//! Sheets are independent; showing several at once simply means several
//! controllers live in the host at the same time. A sheet whose close has
//! completed is swept out on the next tick, after its `on_closed` callback
//! has fired.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::controller::SheetController;

new_key_type! {
    /// Stable handle for a hosted sheet
    pub struct SheetKey;
}

/// Owns the controllers for every currently-presented sheet
#[derive(Default)]
pub struct SheetHost {
    sheets: SlotMap<SheetKey, SheetController>,
}

impl SheetHost {
    pub fn new() -> Self {
        Self {
            sheets: SlotMap::with_key(),
        }
    }

    /// Present a sheet: the controller is opened and hosted until closed
    pub fn show(&mut self, mut controller: SheetController) -> SheetKey {
        controller.open();
        self.sheets.insert(controller)
    }

    pub fn get(&self, key: SheetKey) -> Option<&SheetController> {
        self.sheets.get(key)
    }

    pub fn get_mut(&mut self, key: SheetKey) -> Option<&mut SheetController> {
        self.sheets.get_mut(key)
    }

    /// Begin closing a sheet. It is removed once the close completes.
    pub fn dismiss(&mut self, key: SheetKey) {
        if let Some(sheet) = self.sheets.get_mut(key) {
            sheet.close();
        }
    }

    /// Remove a sheet immediately, without the close animation
    pub fn remove(&mut self, key: SheetKey) -> Option<SheetController> {
        self.sheets.remove(key)
    }

    /// Number of hosted sheets
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Tick every sheet and sweep the ones whose close has completed
    pub fn tick(&mut self, dt: f32) {
        let mut done: SmallVec<[SheetKey; 4]> = SmallVec::new();

        for (key, sheet) in self.sheets.iter_mut() {
            sheet.tick(dt);
            if sheet.is_closed() {
                done.push(key);
            }
        }

        for key in done {
            tracing::debug!(?key, "sweeping closed sheet");
            self.sheets.remove(key);
        }
    }

    /// True while any hosted sheet is settling or closing
    pub fn has_active_animations(&self) -> bool {
        self.sheets
            .iter()
            .any(|(_, sheet)| sheet.is_settling() || sheet.is_closing())
    }

    /// Iterate over hosted sheets (immutable)
    pub fn iter(&self) -> impl Iterator<Item = (SheetKey, &SheetController)> {
        self.sheets.iter()
    }
}
