//! In-memory change set held by a repository until the unit of work flushes it.

use entity::AuditedModel;
use uuid::Uuid;

/// A pending mutation of a single row.
///
/// `Update` never writes `created_at` or the soft-delete columns. `Lifecycle` is the update
/// staged by a soft delete or restore and writes the soft-delete columns as well.
#[derive(Debug, Clone)]
pub(crate) enum StagedChange<M> {
    Insert(M),
    Update(M),
    Lifecycle(M),
    Delete(Uuid),
}

impl<M: AuditedModel> StagedChange<M> {
    pub fn id(&self) -> Uuid {
        match self {
            Self::Insert(model) | Self::Update(model) | Self::Lifecycle(model) => model.id(),
            Self::Delete(id) => *id,
        }
    }
}

/// Ordered change set with at most one pending change per row id.
///
/// Later stages are folded into earlier ones: updating a row staged for insert rewrites the
/// insert, and removing it drops the insert entirely, so a flush never touches a row twice.
#[derive(Debug)]
pub(crate) struct ChangeSet<M> {
    changes: Vec<StagedChange<M>>,
}

impl<M: AuditedModel + Clone> ChangeSet<M> {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn clear(&mut self) {
        self.changes.clear();
    }

    pub fn snapshot(&self) -> Vec<StagedChange<M>> {
        self.changes.clone()
    }

    /// Returns the model staged for `id`, if an insert or update is pending for it.
    pub fn pending_model(&self, id: Uuid) -> Option<&M> {
        self.changes.iter().find_map(|change| match change {
            StagedChange::Insert(model)
            | StagedChange::Update(model)
            | StagedChange::Lifecycle(model)
                if model.id() == id =>
            {
                Some(model)
            }
            _ => None,
        })
    }

    pub fn is_pending_delete(&self, id: Uuid) -> bool {
        self.changes
            .iter()
            .any(|change| matches!(change, StagedChange::Delete(pending) if *pending == id))
    }

    pub fn insert(&mut self, model: M) {
        let id = model.id();
        match self.position(id) {
            Some(index) => self.changes[index] = StagedChange::Insert(model),
            None => self.changes.push(StagedChange::Insert(model)),
        }
    }

    pub fn update(&mut self, model: M) {
        let id = model.id();
        match self.position(id) {
            Some(index) => {
                self.changes[index] = match self.changes[index] {
                    StagedChange::Insert(_) => StagedChange::Insert(model),
                    StagedChange::Lifecycle(_) => StagedChange::Lifecycle(model),
                    _ => StagedChange::Update(model),
                };
            }
            None => self.changes.push(StagedChange::Update(model)),
        }
    }

    /// Stages an update that also rewrites the soft-delete columns.
    pub fn update_lifecycle(&mut self, model: M) {
        let id = model.id();
        match self.position(id) {
            Some(index) => {
                self.changes[index] = match self.changes[index] {
                    StagedChange::Insert(_) => StagedChange::Insert(model),
                    _ => StagedChange::Lifecycle(model),
                };
            }
            None => self.changes.push(StagedChange::Lifecycle(model)),
        }
    }

    pub fn delete(&mut self, id: Uuid) {
        match self.position(id) {
            Some(index) => {
                if matches!(self.changes[index], StagedChange::Insert(_)) {
                    // Never reached storage, nothing to delete.
                    self.changes.remove(index);
                } else {
                    self.changes[index] = StagedChange::Delete(id);
                }
            }
            None => self.changes.push(StagedChange::Delete(id)),
        }
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.changes.iter().position(|change| change.id() == id)
    }
}
