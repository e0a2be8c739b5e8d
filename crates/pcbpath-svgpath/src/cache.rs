use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use pcbpath_core::{precision, Point};
use pcbpath_geometry::BoundingBox;
use pcbpath_parser::{Command, CommandKind, PathGrammar};

use crate::digest::ContentHash;
use crate::dimensions::bounding_box;
use crate::error::PathError;
use crate::relative::to_relative;
use crate::SvgPath;

/// Everything derived from an original path string before any transform.
#[derive(Debug, Clone, PartialEq)]
pub struct PathRecord {
    pub relative: String,
    pub relative_commands: Vec<Command>,
    pub first_point: Point,
    pub bbox: BoundingBox,
    pub width: f64,
    pub height: f64,
}

impl PathRecord {
    pub fn build(grammar: &PathGrammar, original: &str) -> Result<Self, PathError> {
        let commands = grammar.parse(original)?;
        if commands.is_empty() {
            return Err(PathError::Empty);
        }
        let relative = to_relative(&commands);
        let relative_commands = grammar.parse(&relative)?;
        let first_point = match relative_commands.first().map(|c| &c.kind) {
            Some(CommandKind::MoveTo(pts)) => pts.first().copied().map(Point::from),
            _ => None,
        }
        .ok_or(PathError::Empty)?;
        let bbox = bounding_box(&relative_commands)?;
        Ok(Self {
            width: bbox.width(),
            height: bbox.height(),
            relative,
            relative_commands,
            first_point,
            bbox,
        })
    }
}

/// Parsed-path records for one board-build session, keyed by content.
///
/// Single-threaded: records are shared through `Rc` and the map sits in a
/// `RefCell`. Nothing is evicted.
#[derive(Debug, Default)]
pub struct PathCache {
    grammar: PathGrammar,
    records: RefCell<HashMap<ContentHash, Rc<PathRecord>>>,
}

impl PathCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn grammar(&self) -> &PathGrammar {
        &self.grammar
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Build an [`SvgPath`] backed by this cache.
    pub fn path(&self, original: &str) -> Result<SvgPath, PathError> {
        SvgPath::new(self, original)
    }

    /// Fetch the record for `original`, computing it on first use.
    ///
    /// The key includes the coordinate precision, since rounding changes
    /// the derived values.
    pub fn record(&self, original: &str) -> Result<Rc<PathRecord>, PathError> {
        let key = ContentHash::of(&format!("{}\u{1f}{original}", precision::significant_digits()));
        if let Some(record) = self.records.borrow().get(&key) {
            tracing::trace!(%key, "path cache hit");
            return Ok(Rc::clone(record));
        }

        let record = Rc::new(PathRecord::build(&self.grammar, original)?);
        tracing::debug!(
            %key,
            width = record.width,
            height = record.height,
            "path cache miss"
        );
        self.records.borrow_mut().insert(key, Rc::clone(&record));
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_text_shares_one_record() {
        let cache = PathCache::new();
        let a = cache.record("M5,8 6,8 2-2z").unwrap();
        let b = cache.record("M5,8 6,8 2-2z").unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn different_text_gets_its_own_record() {
        let cache = PathCache::new();
        cache.record("M 1 2").unwrap();
        cache.record("M 1 2 3 4").unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn failures_are_not_cached() {
        let cache = PathCache::new();
        assert!(cache.record("F9 9 9").is_err());
        assert!(matches!(cache.record(""), Err(PathError::Empty)));
        assert!(cache.is_empty());
    }

    #[test]
    fn record_fields() {
        let cache = PathCache::new();
        let r = cache.record("M5,8 6,8 2-2z").unwrap();
        assert_eq!(r.relative, "m 5.0,8.0 1.0,0.0 -4.0,-10.0 z ");
        assert_eq!(r.first_point, Point::new(5.0, 8.0));
        assert_eq!(r.relative_commands.len(), 2);
        assert_eq!(r.width, 4.0);
        assert_eq!(r.height, 10.0);
    }
}
