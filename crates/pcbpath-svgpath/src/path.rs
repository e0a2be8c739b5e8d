use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use pcbpath_core::Point;
use pcbpath_geometry::BoundingBox;
use pcbpath_parser::{Command, PathGrammar};

use crate::cache::{PathCache, PathRecord};
use crate::digest::ContentHash;
use crate::error::PathError;
use crate::flatten::coordinate_runs;
use crate::transform::{transform, TransformParams, TransformRecord};

/// An SVG path with its relative form, dimensions and transform results.
#[derive(Debug)]
pub struct SvgPath {
    original: String,
    record: Rc<PathRecord>,
    grammar: PathGrammar,
    transforms: RefCell<HashMap<ContentHash, Rc<TransformRecord>>>,
}

impl SvgPath {
    /// Parse `original`, reusing `cache` when the same text was seen before.
    pub fn new(cache: &PathCache, original: &str) -> Result<Self, PathError> {
        let record = cache.record(original)?;
        Ok(Self {
            original: original.to_string(),
            record,
            grammar: *cache.grammar(),
            transforms: RefCell::default(),
        })
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn relative(&self) -> &str {
        &self.record.relative
    }

    #[must_use]
    pub fn relative_commands(&self) -> &[Command] {
        &self.record.relative_commands
    }

    #[must_use]
    pub fn first_point(&self) -> Point {
        self.record.first_point
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.record.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.record.height
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.record.bbox
    }

    /// Number of subpaths.
    #[must_use]
    pub fn number_of_segments(&self) -> usize {
        self.record
            .relative_commands
            .iter()
            .filter(|c| c.is_moveto())
            .count()
    }

    /// Apply `params`, memoized per instance.
    ///
    /// Repeating a call with the same parameters returns the same `Rc`.
    pub fn transform(&self, params: &TransformParams) -> Result<Rc<TransformRecord>, PathError> {
        let key = params.cache_key(&self.record.relative);
        if let Some(hit) = self.transforms.borrow().get(&key) {
            return Ok(Rc::clone(hit));
        }

        let record = Rc::new(transform(
            &self.grammar,
            &self.record.relative_commands,
            self.record.first_point,
            &self.record.bbox,
            params,
        )?);
        tracing::debug!(
            %key,
            scale = params.scale,
            angle = params.rotate_angle,
            mirror = params.mirror,
            "transformed path"
        );
        self.transforms.borrow_mut().insert(key, Rc::clone(&record));
        Ok(record)
    }

    /// Flatten into point runs, one per subpath. See
    /// [`crate::flatten::coordinate_runs`].
    pub fn coordinate_list(&self, steps: usize, length: f64) -> Result<Vec<Vec<Point>>, PathError> {
        coordinate_runs(&self.record.relative_commands, steps, length)
    }
}
