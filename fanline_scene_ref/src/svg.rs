// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export of the recorded display list.

use alloc::string::String;
use core::fmt::Write as _;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{BezPath, PathEl, Point, Vec2};
use peniko::Color;

use crate::{RecordedShape, RecordingScene};

impl RecordingScene {
    /// Exports the visible entries as an SVG document.
    ///
    /// `width`/`height` are the size of the view in pixels. The `viewBox` is
    /// placed so that the scene's view center lands in the middle of the
    /// document, which makes the export show exactly what the view shows.
    /// Hidden entries are skipped; alpha becomes `fill-opacity` and
    /// `stroke-opacity`. Coordinates are rounded to three decimals.
    #[must_use]
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let origin = self.view_center() - Vec2::new(f64::from(width), f64::from(height)) / 2.0;

        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"{} {} {width} {height}\">",
            num(origin.x),
            num(origin.y),
        );
        for shape in self.shapes().filter(|shape| shape.visible()) {
            match shape {
                RecordedShape::Marker(marker) => {
                    out.push_str("<path d=\"");
                    write_path(&mut out, &marker.to_path());
                    out.push('"');
                    write_paint(&mut out, "fill", marker.effective_fill());
                    write_paint(&mut out, "stroke", marker.effective_outline());
                    let _ = write!(out, " stroke-width=\"{}\"/>", num(marker.outline_width));
                }
                RecordedShape::Curve(curve) => {
                    out.push_str("<path d=\"");
                    write_path(&mut out, &curve.to_path());
                    out.push_str("\" fill=\"none\"");
                    write_paint(&mut out, "stroke", curve.effective_color());
                    let _ = write!(out, " stroke-width=\"{}\"/>", num(curve.stroke_width));
                }
            }
        }
        out.push_str("</svg>");
        out
    }
}

/// Writes `attr="#rrggbb"`, plus `attr-opacity` when translucent.
fn write_paint(out: &mut String, attr: &str, color: Color) {
    let rgba = color.to_rgba8();
    let _ = write!(out, " {attr}=\"#{:02x}{:02x}{:02x}\"", rgba.r, rgba.g, rgba.b);
    if rgba.a < u8::MAX {
        let _ = write!(out, " {attr}-opacity=\"{}\"", num(f64::from(rgba.a) / 255.0));
    }
}

fn write_path(out: &mut String, path: &BezPath) {
    for el in path.iter() {
        match el {
            PathEl::MoveTo(p) => write_command(out, 'M', &[p]),
            PathEl::LineTo(p) => write_command(out, 'L', &[p]),
            PathEl::QuadTo(p1, p2) => write_command(out, 'Q', &[p1, p2]),
            PathEl::CurveTo(p1, p2, p3) => write_command(out, 'C', &[p1, p2, p3]),
            PathEl::ClosePath => out.push('Z'),
        }
    }
}

fn write_command(out: &mut String, command: char, points: &[Point]) {
    out.push(command);
    for (i, p) in points.iter().enumerate() {
        let sep = if i == 0 { "" } else { " " };
        let _ = write!(out, "{sep}{} {}", num(p.x), num(p.y));
    }
}

/// Rounds to three decimals; `Display` then drops trailing zeros.
fn num(v: f64) -> f64 {
    // Adding zero turns `-0.0` into `0.0`.
    (v * 1000.0).round() / 1000.0 + 0.0
}
