/// Opaque stable identifier for a row.
///
/// Assigned once at row creation from a per-section monotonic counter and
/// never recomputed from the row's value or display position. It is the join
/// key between a row's value and any per-row state held outside the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// One element of a repeated section.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    id: RowId,
    value: T,
}

impl<T> Row<T> {
    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

/// Ordered collection of rows with stable identities.
///
/// Insertion order is the display and validation order. Removal shifts the
/// positions of later rows but never their ids; ids are not reused while a
/// live row still holds one.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatedSection<T> {
    rows: Vec<Row<T>>,
    next_id: u64,
}

impl<T> Default for RepeatedSection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RepeatedSection<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends a row with the given initial value and returns its fresh id.
    pub fn append(&mut self, initial: T) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(Row { id, value: initial });
        id
    }

    /// Removes the row at the given display position.
    ///
    /// A stale or out-of-bounds index is a silent no-op: it must never
    /// touch an unrelated row.
    pub fn remove(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Overwrites the value at the given display position, preserving the
    /// row's id. Out-of-bounds indices are a silent no-op.
    pub fn update(&mut self, index: usize, value: T) {
        if let Some(row) = self.rows.get_mut(index) {
            row.value = value;
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index).map(|row| &row.value)
    }

    pub fn row_id(&self, index: usize) -> Option<RowId> {
        self.rows.get(index).map(|row| row.id)
    }

    /// Ordered read view for rendering and validation.
    pub fn iter(&self) -> impl Iterator<Item = (RowId, &T)> {
        self.rows.iter().map(|row| (row.id, &row.value))
    }

    /// Row values in display order, without ids.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|row| &row.value)
    }
}
