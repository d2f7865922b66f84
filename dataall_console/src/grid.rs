//! Row-level edit state for inline-editable grids (connection editor,
//! consumption-role editor, table data-filter editor).

use std::collections::HashMap;
use std::hash::Hash;

use dataall_gql::types::{ConsumptionRole, RedshiftConnection, TableDataFilter};

/// Implemented by records shown in an editable grid.
pub trait GridRow: Clone {
    type Id: Eq + Hash + Clone;

    /// Stable identity of the row. For rows added locally this is a
    /// caller-chosen placeholder until the server assigns the real one.
    fn id(&self) -> Self::Id;
}

/// Edit state of one row. Rows absent from the state map are in view mode.
#[derive(Debug, Clone, PartialEq)]
pub enum RowState<R> {
    /// Existing row being edited; `pristine` restores it on cancel.
    Editing { pristine: R },
    /// Row added locally and not yet saved; cancel removes it entirely.
    New,
}

/// Grid of rows in server order with per-row edit modes keyed by row id.
///
/// The row itself doubles as the draft while in edit mode: callers mutate it
/// through [`draft_mut`](EditGrid::draft_mut), and cancel rolls it back to
/// the pristine copy held in the state map.
pub struct EditGrid<R: GridRow> {
    rows: Vec<R>,
    states: HashMap<R::Id, RowState<R>>,
}

impl<R: GridRow> Default for EditGrid<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: GridRow> EditGrid<R> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            states: HashMap::new(),
        }
    }

    /// Replaces all rows with a fresh authoritative list, dropping any edit
    /// state.
    pub fn reset(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.states.clear();
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn row(&self, id: &R::Id) -> Option<&R> {
        self.rows.iter().find(|r| &r.id() == id)
    }

    /// A row renders editable cells iff it has an entry here.
    pub fn is_editing(&self, id: &R::Id) -> bool {
        self.states.contains_key(id)
    }

    /// Whether the row was added locally and never saved.
    pub fn is_new(&self, id: &R::Id) -> bool {
        matches!(self.states.get(id), Some(RowState::New))
    }

    /// Puts an existing row into edit mode. Returns false when the row is
    /// missing or already editing.
    pub fn begin_edit(&mut self, id: &R::Id) -> bool {
        if self.states.contains_key(id) {
            return false;
        }
        let Some(row) = self.rows.iter().find(|r| &r.id() == id) else {
            return false;
        };
        self.states.insert(
            id.clone(),
            RowState::Editing {
                pristine: row.clone(),
            },
        );
        true
    }

    /// Appends a locally-added row, already in edit mode.
    pub fn add_row(&mut self, row: R) {
        self.states.insert(row.id(), RowState::New);
        self.rows.push(row);
    }

    /// Mutable access to a row's draft while it is in edit mode.
    pub fn draft_mut(&mut self, id: &R::Id) -> Option<&mut R> {
        if !self.states.contains_key(id) {
            return None;
        }
        self.rows.iter_mut().find(|r| &r.id() == id)
    }

    /// Leaves edit mode without saving. A locally-added row is removed from
    /// the collection; an existing row gets its pre-edit values back.
    pub fn cancel(&mut self, id: &R::Id) {
        match self.states.remove(id) {
            Some(RowState::New) => {
                self.rows.retain(|r| &r.id() != id);
            }
            Some(RowState::Editing { pristine }) => {
                if let Some(row) = self.rows.iter_mut().find(|r| &r.id() == id) {
                    *row = pristine;
                }
            }
            None => {}
        }
    }

    /// Installs the server's authoritative value after a successful save and
    /// returns the row to view mode. For saved new rows the id may differ
    /// from the local placeholder.
    pub fn save_succeeded(&mut self, id: &R::Id, authoritative: R) {
        self.states.remove(id);
        if let Some(row) = self.rows.iter_mut().find(|r| &r.id() == id) {
            *row = authoritative;
        }
    }

    /// A failed save leaves the row in edit mode with its draft intact; the
    /// error itself is surfaced on the error channel by the caller.
    pub fn save_failed(&self, id: &R::Id) -> bool {
        self.states.contains_key(id)
    }
}

impl GridRow for ConsumptionRole {
    type Id = String;
    fn id(&self) -> String {
        self.consumption_role_uri.clone()
    }
}

impl GridRow for RedshiftConnection {
    type Id = String;
    fn id(&self) -> String {
        self.connection_uri.clone()
    }
}

impl GridRow for TableDataFilter {
    type Id = String;
    fn id(&self) -> String {
        self.filter_uri.clone()
    }
}
