// Copyright 2025 Lars Brubaker
// WASM bindings for gpc-rust

use gpc_rust::{ClipError, ClipOption, Clipper, Operation, Polygon, Vertex};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

fn js_err(e: ClipError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn ring(flat: &[f64]) -> Vec<Vertex> {
    flat.chunks_exact(2).map(|p| Vertex::new(p[0], p[1])).collect()
}

/// A polygon that can be built up from flat coordinate arrays and clipped.
#[wasm_bindgen]
pub struct PolygonJs {
    inner: Polygon,
}

#[wasm_bindgen]
impl PolygonJs {
    /// Empty polygon.
    #[wasm_bindgen(constructor)]
    pub fn new() -> PolygonJs {
        PolygonJs { inner: Polygon::empty() }
    }

    /// Outer boundary from a flat [x0,y0, x1,y1, ...] Float64Array.
    pub fn from_points(vertices: &[f64]) -> Result<PolygonJs, JsValue> {
        let inner = Polygon::from_points(ring(vertices)).map_err(js_err)?;
        Ok(PolygonJs { inner })
    }

    /// Add another outer boundary (unioned in).
    pub fn add_contour(&mut self, vertices: &[f64]) -> Result<(), JsValue> {
        let other = Polygon::from_points(ring(vertices)).map_err(js_err)?;
        self.inner = self.inner.union(&other).map_err(js_err)?;
        Ok(())
    }

    /// Cut a hole (subtracted).
    pub fn add_hole(&mut self, vertices: &[f64]) -> Result<(), JsValue> {
        let other = Polygon::from_points(ring(vertices)).map_err(js_err)?;
        self.inner = self.inner.difference(&other).map_err(js_err)?;
        Ok(())
    }

    /// op: 0=Union 1=Intersection 2=Difference 3=Xor
    pub fn clip(&self, op: u32, other: &PolygonJs, orient: bool) -> Result<PolygonJs, JsValue> {
        let mut clipper = Clipper::new();
        clipper.set_option(ClipOption::OrientContours, orient);
        let inner = clipper.execute(operation(op), &self.inner, &other.inner).map_err(js_err)?;
        Ok(PolygonJs { inner })
    }

    pub fn union(&self, other: &PolygonJs) -> Result<PolygonJs, JsValue> {
        self.clip(0, other, false)
    }

    pub fn intersection(&self, other: &PolygonJs) -> Result<PolygonJs, JsValue> {
        self.clip(1, other, false)
    }

    pub fn difference(&self, other: &PolygonJs) -> Result<PolygonJs, JsValue> {
        self.clip(2, other, false)
    }

    pub fn xor(&self, other: &PolygonJs) -> Result<PolygonJs, JsValue> {
        self.clip(3, other, false)
    }

    pub fn contour_count(&self) -> u32 {
        self.inner.contours().len() as u32
    }

    pub fn vertex_count(&self) -> u32 {
        self.inner.num_points() as u32
    }

    pub fn area(&self) -> f64 {
        self.inner.area()
    }

    /// Flat vertex positions of contour `index`, empty when out of range.
    pub fn get_contour(&self, index: u32) -> Vec<f64> {
        self.inner
            .contours()
            .get(index as usize)
            .map(|c| c.vertices.iter().flat_map(|v| [v.x, v.y]).collect())
            .unwrap_or_default()
    }

    /// Per-contour vertex counts, for slicing `get_vertices`.
    pub fn get_contour_lengths(&self) -> Vec<u32> {
        self.inner.contours().iter().map(|c| c.len() as u32).collect()
    }

    /// Flat vertex positions [x0,y0, x1,y1, ...] of every contour in order.
    pub fn get_vertices(&self) -> Vec<f64> {
        self.inner.iter_vertices().flat_map(|v| [v.x, v.y]).collect()
    }

    /// One flag per contour, true for holes.
    pub fn get_hole_flags(&self) -> Vec<u8> {
        self.inner.contours().iter().map(|c| c.hole as u8).collect()
    }

    pub fn to_json(&self) -> Result<String, JsValue> {
        self.inner.to_json().map_err(js_err)
    }
}

impl Default for PolygonJs {
    fn default() -> Self {
        Self::new()
    }
}

fn operation(op: u32) -> Operation {
    match op {
        0 => Operation::Union,
        1 => Operation::Intersection,
        2 => Operation::Difference,
        3 => Operation::Xor,
        _ => Operation::Union,
    }
}

/// Convenience: clip two single-contour polygons and return the flat vertices
/// of the result (use a PolygonJs for contour boundaries).
#[wasm_bindgen]
pub fn clip_polygons(subject: &[f64], clip: &[f64], op: u32) -> Result<Vec<f64>, JsValue> {
    let a = PolygonJs::from_points(subject)?;
    let b = PolygonJs::from_points(clip)?;
    Ok(a.clip(op, &b, false)?.get_vertices())
}
