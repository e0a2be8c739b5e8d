use std::path::Path;

use anyhow::{Context, Result};
use pcbpath_core::{Point, Settings};
use pcbpath_geometry::BoundingBox;
use pcbpath_parser::PathGrammar;
use pcbpath_shapes::{
    circle_diameter_to_path, create_meandering_path, drill_path, placement_marker_path,
    ring_diameters_to_path, width_and_height_to_path, CornerRadii, MeanderParams,
};
use pcbpath_svgpath::{relative_form, PathCache, TransformParams};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::CliError;

/// Read a settings file, YAML unless the extension says JSON.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read settings {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let settings = if is_json {
        Settings::from_json_str(&raw)
    } else {
        Settings::from_yaml_str(&raw)
    };
    settings.with_context(|| format!("Invalid settings in {}", path.display()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn run_relative(grammar: &PathGrammar, path: &str, commands: bool) -> Result<String, CliError> {
    let relative = relative_form(grammar, path)?;
    if !commands {
        return Ok(relative);
    }
    let parsed = grammar.parse(&relative)?;
    let groups: Vec<Value> = parsed
        .iter()
        .map(|c| json!([c.letter().to_string(), c.coordinate_groups()]))
        .collect();
    to_json(&groups)
}

#[derive(Debug, Serialize)]
struct BboxReport {
    width: f64,
    height: f64,
    bbox: BoundingBox,
    first_point: Point,
    segments: usize,
}

pub fn run_bbox(cache: &PathCache, path: &str) -> Result<String, CliError> {
    let p = cache.path(path)?;
    to_json(&BboxReport {
        width: p.width(),
        height: p.height(),
        bbox: p.bounding_box(),
        first_point: p.first_point(),
        segments: p.number_of_segments(),
    })
}

pub fn run_transform(
    cache: &PathCache,
    path: &str,
    params: &TransformParams,
) -> Result<String, CliError> {
    let record = cache.path(path)?.transform(params)?;
    to_json(&*record)
}

pub fn run_points(
    cache: &PathCache,
    path: &str,
    steps: usize,
    length: f64,
) -> Result<String, CliError> {
    let runs = cache.path(path)?.coordinate_list(steps, length)?;
    to_json(&runs)
}

pub enum ShapeRequest {
    Rect {
        width: f64,
        height: f64,
        radius: Option<f64>,
        radii: Option<String>,
    },
    Circle {
        diameter: f64,
    },
    Ring {
        d1: f64,
        d2: f64,
    },
    Drill {
        diameter: f64,
    },
    Marker,
    Meander(MeanderParams),
}

fn parse_radii(text: &str) -> Result<CornerRadii, CliError> {
    serde_yaml::from_str(text).map_err(CliError::Radii)
}

pub fn run_shape(cache: &PathCache, request: ShapeRequest) -> Result<String, CliError> {
    let path = match request {
        ShapeRequest::Rect {
            width,
            height,
            radius,
            radii,
        } => {
            let radii = match (radius, radii) {
                (Some(_), Some(_)) => {
                    return Err(CliError::Conflict("--radius and --radii cannot be combined"));
                }
                (Some(r), None) => Some(CornerRadii::uniform(r)),
                (None, Some(text)) => Some(parse_radii(&text)?),
                (None, None) => None,
            };
            width_and_height_to_path(width, height, radii.as_ref())?
        }
        ShapeRequest::Circle { diameter } => circle_diameter_to_path(diameter, Point::ORIGIN)?,
        ShapeRequest::Ring { d1, d2 } => ring_diameters_to_path(d1, d2)?,
        ShapeRequest::Drill { diameter } => drill_path(diameter)?,
        ShapeRequest::Marker => placement_marker_path(),
        ShapeRequest::Meander(params) => {
            return to_json(&create_meandering_path(cache, &params)?);
        }
    };
    Ok(path)
}
