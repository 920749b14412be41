//! Borrowed input rows.
//!
//! A [`Row`] is one instance as handed to `RowBlockContainer::push`; a
//! [`UnitRow`] is one row of an auxiliary namespace (or the input to
//! `UnitBlockContainer::push`). Both only borrow their slices, and the
//! same types are produced when iterating over a block view.

use smallvec::SmallVec;

use crate::element::{Element, Index, Real};
use crate::error::BlockError;

/// One sparse row of an auxiliary feature namespace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitRow<'a, I, V = Real> {
    /// Feature indices of the row's entries.
    pub index: &'a [I],
    /// Entry values; `None` means every entry has an implicit value of one.
    pub value: Option<&'a [V]>,
}

impl<'a, I: Index, V: Element> UnitRow<'a, I, V> {
    /// A row with explicit values.
    pub fn new(index: &'a [I], value: &'a [V]) -> Self {
        Self {
            index,
            value: Some(value),
        }
    }

    /// A row whose entries carry no values.
    pub fn indices_only(index: &'a [I]) -> Self {
        Self { index, value: None }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the row has no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Check that the value slice, if any, matches the index length.
    pub fn validate(&self) -> Result<(), BlockError> {
        check_parallel("value", self.index.len(), self.value.map(<[V]>::len))
    }
}

/// One instance: labels, optional weight and session id, and its entries.
#[derive(Clone, Debug, PartialEq)]
pub struct Row<'a, I, V = Real> {
    /// Exactly `label_width` labels.
    pub label: &'a [V],
    /// Instance weight; `None` reads as 1.0.
    pub weight: Option<Real>,
    /// Session/query id; `None` reads as 0.
    pub qid: Option<u64>,
    /// Per-entry field ids, parallel to `index`.
    pub field: Option<&'a [I]>,
    /// Feature indices of the row's entries.
    pub index: &'a [I],
    /// Entry values; `None` means every entry has an implicit value of one.
    pub value: Option<&'a [V]>,
    /// One sub-row per auxiliary namespace, in configuration order.
    pub extra: SmallVec<[UnitRow<'a, I, V>; 2]>,
}

impl<'a, I: Index, V: Element> Row<'a, I, V> {
    /// A row with labels, indices and values and nothing else.
    pub fn new(label: &'a [V], index: &'a [I], value: &'a [V]) -> Self {
        Self {
            label,
            weight: None,
            qid: None,
            field: None,
            index,
            value: Some(value),
            extra: SmallVec::new(),
        }
    }

    /// A row whose entries carry no values.
    pub fn indices_only(label: &'a [V], index: &'a [I]) -> Self {
        Self {
            label,
            weight: None,
            qid: None,
            field: None,
            index,
            value: None,
            extra: SmallVec::new(),
        }
    }

    /// Set the instance weight.
    pub fn with_weight(mut self, weight: Real) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the session/query id.
    pub fn with_qid(mut self, qid: u64) -> Self {
        self.qid = Some(qid);
        self
    }

    /// Attach per-entry field ids.
    pub fn with_field(mut self, field: &'a [I]) -> Self {
        self.field = Some(field);
        self
    }

    /// Append an auxiliary sub-row for the next configured namespace.
    pub fn with_extra(mut self, extra: UnitRow<'a, I, V>) -> Self {
        self.extra.push(extra);
        self
    }

    /// Weight with the implicit default applied.
    pub fn get_weight(&self) -> Real {
        self.weight.unwrap_or(1.0)
    }

    /// Session id with the implicit default applied.
    pub fn get_qid(&self) -> u64 {
        self.qid.unwrap_or(0)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the row has no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Check per-entry array lengths and every auxiliary sub-row.
    ///
    /// Label width and extra count depend on the receiving container and
    /// are checked there.
    pub fn validate(&self) -> Result<(), BlockError> {
        let n = self.index.len();
        check_parallel("value", n, self.value.map(<[V]>::len))?;
        check_parallel("field", n, self.field.map(<[I]>::len))?;
        self.extra.iter().try_for_each(UnitRow::validate)
    }
}

fn check_parallel(array: &'static str, expected: usize, found: Option<usize>) -> Result<(), BlockError> {
    match found {
        Some(found) if found != expected => Err(BlockError::LengthMismatch {
            array,
            expected,
            found,
        }),
        _ => Ok(()),
    }
}
