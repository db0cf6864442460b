//! Per-descriptor value columns
//!
//! Values of different fields belong together only by position: slot `i` of
//! every column describes record `i`. Extractors push exactly one slot per
//! record per column (`None` for a skipped field) so a gap never shifts the
//! records after it.

use std::ops::Range;

use super::decoder::FieldValue;
use super::descriptor::{FieldDescriptor, FieldKind};

/// Values of one descriptor, one slot per record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldColumn {
    pub descriptor: &'static FieldDescriptor,
    pub values: Vec<Option<FieldValue>>,
}

impl FieldColumn {
    #[must_use]
    pub fn new(descriptor: &'static FieldDescriptor) -> Self {
        Self {
            descriptor,
            values: Vec::new(),
        }
    }

    /// Number of slots that hold a value.
    #[must_use]
    pub fn present(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

/// Record spans plus one column per descriptor of an extraction pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldColumns {
    /// Byte span of each record, in discovery order.
    pub spans: Vec<Range<usize>>,
    pub columns: Vec<FieldColumn>,
}

impl FieldColumns {
    #[must_use]
    pub fn new(descriptors: impl IntoIterator<Item = &'static FieldDescriptor>) -> Self {
        Self {
            spans: Vec::new(),
            columns: descriptors.into_iter().map(FieldColumn::new).collect(),
        }
    }

    /// Number of records discovered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    #[must_use]
    pub fn column(&self, kind: FieldKind) -> Option<&FieldColumn> {
        self.columns.iter().find(|c| c.descriptor.kind == kind)
    }

    /// The value of `kind` for record `index`, if it was decoded.
    #[must_use]
    pub fn value(&self, kind: FieldKind, index: usize) -> Option<&FieldValue> {
        self.column(kind)?.values.get(index)?.as_ref()
    }

    /// Columns whose length differs from the record count.
    pub fn misaligned(&self) -> impl Iterator<Item = &FieldColumn> {
        let expected = self.len();
        self.columns.iter().filter(move |c| c.values.len() != expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::graph::descriptor::{FieldScope, fields_in};

    #[test]
    fn test_value_lookup() {
        let mut cols = FieldColumns::new(fields_in(FieldScope::Edge));
        cols.spans.push(0..12);
        cols.columns[0].values.push(Some(FieldValue::Raw(vec![1, 0])));
        cols.columns[1].values.push(None);
        cols.columns[2].values.push(Some(FieldValue::Raw(vec![7])));

        assert_eq!(cols.len(), 1);
        assert_eq!(
            cols.value(FieldKind::GraphEdge1, 0).and_then(FieldValue::to_le_uint),
            Some(1)
        );
        assert!(cols.value(FieldKind::GraphEdge2, 0).is_none());
        assert!(cols.value(FieldKind::NodeId, 0).is_none());
        assert_eq!(cols.misaligned().count(), 0);
        assert_eq!(cols.column(FieldKind::GraphEdge2).map(FieldColumn::present), Some(0));
    }

    #[test]
    fn test_misaligned() {
        let mut cols = FieldColumns::new(fields_in(FieldScope::Edge));
        cols.spans.push(0..12);
        cols.columns[0].values.push(None);
        let names: Vec<_> = cols.misaligned().map(|c| c.descriptor.name).collect();
        assert_eq!(names, vec!["Graph Edge2", "Graph EdgeType"]);
    }
}
