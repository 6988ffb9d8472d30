//! Headless render pane that records what would be on screen.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::RenderPane;
use crate::error::{GridError, Result};
use crate::types::CellContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FragmentId(u64);

/// An attached fragment as the pane sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFragment {
    pub cells: Vec<CellContent>,
    pub translation: f64,
}

/// Operation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PaneStats {
    pub built: u64,
    pub appended: u64,
    pub removed: u64,
    pub translated: u64,
}

#[derive(Debug, Default)]
pub struct RecordingPane {
    next_id: u64,
    detached: HashMap<FragmentId, Vec<CellContent>>,
    attached: BTreeMap<FragmentId, RecordedFragment>,
    stats: PaneStats,
}

impl RecordingPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fragments currently attached.
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    pub fn get(&self, id: FragmentId) -> Option<&RecordedFragment> {
        self.attached.get(&id)
    }

    pub fn contains(&self, id: FragmentId) -> bool {
        self.attached.contains_key(&id)
    }

    pub fn fragments(&self) -> impl Iterator<Item = (&FragmentId, &RecordedFragment)> {
        self.attached.iter()
    }

    pub fn stats(&self) -> PaneStats {
        self.stats
    }
}

impl RenderPane for RecordingPane {
    type Fragment = FragmentId;

    fn build_fragment(&mut self, cells: &[CellContent]) -> Result<FragmentId> {
        let id = FragmentId(self.next_id);
        self.next_id += 1;
        self.detached.insert(id, cells.to_vec());
        self.stats.built += 1;
        Ok(id)
    }

    fn append(&mut self, fragment: &FragmentId) -> Result<()> {
        let cells = self
            .detached
            .remove(fragment)
            .ok_or_else(|| GridError::Render(format!("fragment {fragment:?} is not detached")))?;
        self.attached.insert(
            *fragment,
            RecordedFragment {
                cells,
                translation: 0.0,
            },
        );
        self.stats.appended += 1;
        Ok(())
    }

    fn remove(&mut self, fragment: &FragmentId) -> Result<()> {
        self.attached
            .remove(fragment)
            .ok_or_else(|| GridError::Render(format!("fragment {fragment:?} is not attached")))?;
        self.stats.removed += 1;
        Ok(())
    }

    fn set_translation(&mut self, fragment: &FragmentId, offset: f64) -> Result<()> {
        let entry = self
            .attached
            .get_mut(fragment)
            .ok_or_else(|| GridError::Render(format!("fragment {fragment:?} is not attached")))?;
        entry.translation = offset;
        self.stats.translated += 1;
        Ok(())
    }
}
