//! SVG export and import of placed circles.
//!
//! Export writes a self-contained document: a background rectangle, an
//! optional dashed guide marking the edge margin, then one `<circle>` per
//! placed circle. Import reads such a document back with quick-xml so a
//! saved file can be checked or re-rendered without regenerating.
//!
//! Coordinates are written with Rust's shortest round-trip float formatting,
//! so an export followed by an import reproduces the exact values.

use std::fmt::Write as _;

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use thiserror::Error;

use crate::geometry::{Canvas, PlacedCircle};

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("SVG parse error: {0}")]
    Parse(String),

    #[error("SVG has no usable width/height or viewBox")]
    MissingCanvas,

    #[error("<{element}> is missing required attribute {attribute}")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("invalid {attribute} value '{value}' on <{element}>")]
    InvalidAttribute {
        element: &'static str,
        attribute: String,
        value: String,
    },
}

/// Visual styling for exported documents.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    pub background: String,
    pub fill_opacity: f64,
    /// Outline color; `None` strokes each circle in its own fill color.
    pub stroke: Option<String>,
    pub stroke_width: f64,
    /// Draw a dashed guide this far inside the canvas edge.
    pub margin_guide: Option<f64>,
    /// Centered text drawn when there are no circles.
    pub empty_label: Option<String>,
}

impl Default for SvgStyle {
    /// Download/export look: translucent fill, thin dark outline, no guide.
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            fill_opacity: 0.8,
            stroke: Some("#333".to_string()),
            stroke_width: 0.5,
            margin_guide: None,
            empty_label: None,
        }
    }
}

impl SvgStyle {
    /// On-screen preview look: solid circles outlined in their own color,
    /// with the margin guide drawn and a "No circles" note on an empty canvas.
    pub fn preview(edge_margin: f64) -> Self {
        Self {
            background: "#ffffff".to_string(),
            fill_opacity: 1.0,
            stroke: None,
            stroke_width: 2.0,
            margin_guide: Some(edge_margin),
            empty_label: Some("No circles".to_string()),
        }
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }
}

/// Render placed circles as an SVG document.
pub fn layout_to_svg(canvas: Canvas, circles: &[PlacedCircle], style: &SvgStyle) -> String {
    let (w, h) = (canvas.width, canvas.height);
    let mut svg = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="{w}" height="{h}" fill="{}"/>"#,
        escape(style.background.as_str())
    );

    if let Some(m) = style.margin_guide {
        let _ = writeln!(
            svg,
            r##"  <rect x="{m}" y="{m}" width="{}" height="{}" fill="none" stroke="#e0e0e0" stroke-width="1" stroke-dasharray="5,5" opacity="0.3"/>"##,
            (w - 2.0 * m).max(0.0),
            (h - 2.0 * m).max(0.0)
        );
    }

    for c in circles {
        let fill = escape(c.color.as_str());
        let stroke = match &style.stroke {
            Some(s) => escape(s.as_str()),
            None => fill.clone(),
        };
        let _ = writeln!(
            svg,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}"/>"#,
            c.x, c.y, c.radius, fill, style.fill_opacity, stroke, style.stroke_width
        );
    }

    if let Some(label) = style.empty_label.as_ref().filter(|_| circles.is_empty()) {
        let _ = writeln!(
            svg,
            r##"  <text x="{}" y="{}" text-anchor="middle" fill="#999" font-size="16">{}</text>"##,
            w / 2.0,
            h / 2.0,
            escape(label.as_str())
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Read the canvas and circles back out of an SVG document.
///
/// Canvas size comes from the root `width`/`height` (a `px` suffix is
/// accepted), falling back to the `viewBox`. Every `<circle>` becomes a
/// placed circle and must carry `cx`, `cy` and `r`; a missing `fill` reads
/// as black.
pub fn read_svg_layout(svg: &str) -> Result<(Canvas, Vec<PlacedCircle>), SvgError> {
    let mut reader = Reader::from_str(svg);
    reader.config_mut().trim_text(true);

    let mut canvas: Option<Canvas> = None;
    let mut circles = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"svg" if canvas.is_none() => canvas = Some(read_canvas(e)?),
                b"circle" => circles.push(read_circle(e)?),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SvgError::Parse(format!(
                    "at position {}: {}",
                    reader.error_position(),
                    e
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    let canvas = canvas.ok_or(SvgError::MissingCanvas)?;
    Ok((canvas, circles))
}

/// Collect an element's attributes as unescaped (name, value) pairs.
fn attributes(e: &BytesStart<'_>) -> Result<Vec<(String, String)>, SvgError> {
    e.attributes()
        .map(|attr| {
            let attr = attr.map_err(|err| SvgError::Parse(err.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|err| SvgError::Parse(err.to_string()))?
                .into_owned();
            Ok((key, value))
        })
        .collect()
}

fn parse_number(element: &'static str, attribute: &str, value: &str) -> Result<f64, SvgError> {
    value
        .trim()
        .trim_end_matches("px")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SvgError::InvalidAttribute {
            element,
            attribute: attribute.to_string(),
            value: value.to_string(),
        })
}

fn read_canvas(e: &BytesStart<'_>) -> Result<Canvas, SvgError> {
    let mut width = None;
    let mut height = None;
    let mut view_box = None;

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "width" => width = parse_number("svg", &key, &value).ok(),
            "height" => height = parse_number("svg", &key, &value).ok(),
            "viewBox" | "viewbox" => view_box = parse_view_box(&value),
            _ => {}
        }
    }

    match (width, height, view_box) {
        (Some(w), Some(h), _) => Ok(Canvas::new(w, h)),
        (_, _, Some((w, h))) => Ok(Canvas::new(w, h)),
        _ => Err(SvgError::MissingCanvas),
    }
}

/// Width and height from a `min-x min-y width height` viewBox.
fn parse_view_box(value: &str) -> Option<(f64, f64)> {
    let parts: Vec<f64> = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().ok())
        .collect::<Option<_>>()?;
    match parts.as_slice() {
        [_, _, w, h] => Some((*w, *h)),
        _ => None,
    }
}

fn read_circle(e: &BytesStart<'_>) -> Result<PlacedCircle, SvgError> {
    let mut x = None;
    let mut y = None;
    let mut r = None;
    let mut color = "#000".to_string();

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "cx" => x = Some(parse_number("circle", &key, &value)?),
            "cy" => y = Some(parse_number("circle", &key, &value)?),
            "r" => r = Some(parse_number("circle", &key, &value)?),
            "fill" => color = value,
            _ => {}
        }
    }

    let require = |value: Option<f64>, attribute: &'static str| {
        value.ok_or(SvgError::MissingAttribute {
            element: "circle",
            attribute,
        })
    };
    Ok(PlacedCircle::new(require(x, "cx")?, require(y, "cy")?, require(r, "r")?, color))
}
