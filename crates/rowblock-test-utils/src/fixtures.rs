//! Owned row fixtures and a seeded row generator.
//!
//! - [`OwnedRow`] / [`OwnedUnitRow`]: owned arrays that borrow out as rows.
//! - [`sample_unit_rows`]: the three-row block used across unit tests.
//! - [`RowGenerator`]: deterministic random rows via ChaCha8.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rowblock_core::{Index, Real, Row, UnitRow};

/// Owned backing storage for a [`UnitRow`].
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedUnitRow<I = u32> {
    pub index: Vec<I>,
    pub value: Option<Vec<Real>>,
}

impl<I: Index> OwnedUnitRow<I> {
    pub fn as_unit_row(&self) -> UnitRow<'_, I> {
        match &self.value {
            Some(value) => UnitRow::new(&self.index, value),
            None => UnitRow::indices_only(&self.index),
        }
    }
}

/// Owned backing storage for a [`Row`].
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedRow<I = u32> {
    pub label: Vec<Real>,
    pub weight: Option<Real>,
    pub qid: Option<u64>,
    pub field: Option<Vec<I>>,
    pub index: Vec<I>,
    pub value: Option<Vec<Real>>,
    pub extra: Vec<OwnedUnitRow<I>>,
}

impl<I: Index> OwnedRow<I> {
    /// A single-label row with values and nothing else.
    pub fn simple(label: Real, index: Vec<I>, value: Vec<Real>) -> Self {
        Self {
            label: vec![label],
            weight: None,
            qid: None,
            field: None,
            index,
            value: Some(value),
            extra: Vec::new(),
        }
    }

    /// Borrow as a [`Row`] suitable for `push`.
    pub fn as_row(&self) -> Row<'_, I> {
        let mut row = match &self.value {
            Some(value) => Row::new(&self.label, &self.index, value),
            None => Row::indices_only(&self.label, &self.index),
        };
        if let Some(weight) = self.weight {
            row = row.with_weight(weight);
        }
        if let Some(qid) = self.qid {
            row = row.with_qid(qid);
        }
        if let Some(field) = &self.field {
            row = row.with_field(field);
        }
        for extra in &self.extra {
            row = row.with_extra(extra.as_unit_row());
        }
        row
    }
}

/// Rows `[1,3]/[1,1]`, `[2]/[2]`, `[0,4,5]/[3,3,3]`.
///
/// Pushed in order they give offsets `[0, 2, 3, 6]` and max index 5.
pub fn sample_unit_rows() -> Vec<OwnedUnitRow<u32>> {
    vec![
        OwnedUnitRow {
            index: vec![1, 3],
            value: Some(vec![1.0, 1.0]),
        },
        OwnedUnitRow {
            index: vec![2],
            value: Some(vec![2.0]),
        },
        OwnedUnitRow {
            index: vec![0, 4, 5],
            value: Some(vec![3.0, 3.0, 3.0]),
        },
    ]
}

/// Deterministic generator of random rows.
///
/// Every row from one generator shares the same shape: label width,
/// presence of values and field ids, and number of extras. That keeps
/// the output pushable into a single container.
pub struct RowGenerator {
    rng: ChaCha8Rng,
    pub label_width: usize,
    pub max_len: usize,
    pub max_index: u32,
    pub max_field: u32,
    pub with_values: bool,
    pub with_fields: bool,
    pub extras: usize,
}

impl RowGenerator {
    /// Single-label rows with values, up to 8 entries, indices below 1000.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            label_width: 1,
            max_len: 8,
            max_index: 999,
            max_field: 0,
            with_values: true,
            with_fields: false,
            extras: 0,
        }
    }

    pub fn with_label_width(mut self, label_width: usize) -> Self {
        self.label_width = label_width;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn with_max_index(mut self, max_index: u32) -> Self {
        self.max_index = max_index;
        self
    }

    /// Attach field ids in `0..=max_field` to every entry.
    pub fn with_fields(mut self, max_field: u32) -> Self {
        self.with_fields = true;
        self.max_field = max_field;
        self
    }

    pub fn without_values(mut self) -> Self {
        self.with_values = false;
        self
    }

    pub fn with_extras(mut self, extras: usize) -> Self {
        self.extras = extras;
        self
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.rng.next_u64() % bound
    }

    fn unit_float(&mut self) -> Real {
        (self.rng.next_u32() >> 8) as Real / (1u32 << 24) as Real
    }

    fn ids(&mut self, len: usize, max: u32) -> Vec<u32> {
        (0..len)
            .map(|_| self.below(u64::from(max) + 1) as u32)
            .collect()
    }

    fn values(&mut self, len: usize) -> Option<Vec<Real>> {
        self.with_values
            .then(|| (0..len).map(|_| self.unit_float()).collect())
    }

    pub fn next_unit_row(&mut self) -> OwnedUnitRow<u32> {
        let len = self.below(self.max_len as u64 + 1) as usize;
        OwnedUnitRow {
            index: self.ids(len, self.max_index),
            value: self.values(len),
        }
    }

    pub fn next_row(&mut self) -> OwnedRow<u32> {
        let len = self.below(self.max_len as u64 + 1) as usize;
        let label = (0..self.label_width).map(|_| self.unit_float()).collect();
        let weight = (self.below(2) == 0).then(|| self.unit_float());
        let qid = (self.below(2) == 0).then(|| self.below(16));
        let field = self.with_fields.then(|| self.ids(len, self.max_field));
        let index = self.ids(len, self.max_index);
        let value = self.values(len);
        let extra = (0..self.extras).map(|_| self.next_unit_row()).collect();
        OwnedRow {
            label,
            weight,
            qid,
            field,
            index,
            value,
            extra,
        }
    }

    pub fn rows(&mut self, n: usize) -> Vec<OwnedRow<u32>> {
        (0..n).map(|_| self.next_row()).collect()
    }
}
