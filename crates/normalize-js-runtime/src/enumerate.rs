//! `for…in` key enumeration.

use crate::value::Value;
use std::iter::FusedIterator;
use std::ops::Range;

/// Keys yielded by [`enumerate_keys`].
///
/// The key set is snapshotted when the iterator is created, so later
/// mutation of the source container does not affect a traversal in flight.
#[derive(Debug, Clone)]
pub struct ForInKeys {
    source: KeySource,
}

#[derive(Debug, Clone)]
enum KeySource {
    Named(std::vec::IntoIter<String>),
    Indices(std::vec::IntoIter<usize>),
    Span(Range<usize>),
}

impl Iterator for ForInKeys {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match &mut self.source {
            KeySource::Named(keys) => keys.next(),
            KeySource::Indices(indices) => indices.next().map(|i| i.to_string()),
            KeySource::Span(range) => range.next().map(|i| i.to_string()),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            KeySource::Named(keys) => keys.size_hint(),
            KeySource::Indices(indices) => indices.size_hint(),
            KeySource::Span(range) => range.size_hint(),
        }
    }
}

impl ExactSizeIterator for ForInKeys {}
impl FusedIterator for ForInKeys {}

/// `for (key in v)`.
///
/// Objects yield keys in insertion order; arrays yield the indices of
/// occupied slots, skipping holes; strings yield every UTF-16 index. Any
/// other value yields nothing. Call again to restart.
pub fn enumerate_keys(v: &Value) -> ForInKeys {
    let source = match v {
        Value::Object(obj) => KeySource::Named(obj.keys().into_iter()),
        Value::Array(arr) => {
            let occupied: Vec<usize> = arr
                .read()
                .iter()
                .enumerate()
                .filter(|(_, slot)| !slot.is_undefined())
                .map(|(i, _)| i)
                .collect();
            KeySource::Indices(occupied.into_iter())
        }
        Value::String(s) => KeySource::Span(0..s.encode_utf16().count()),
        _ => KeySource::Span(0..0),
    };
    ForInKeys { source }
}
