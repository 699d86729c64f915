//! Draw targets.
//!
//! Charts never look up their surface by a global id: each render call gets
//! the target it owns as `&mut dyn DrawTarget`. [`SvgCanvas`] keeps the marks
//! in memory and serializes them to an SVG document on demand.

use crate::viewport::Viewport;

/// Paint attributes shared by shape marks. `None` means "not set".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
}

impl Style {
    pub fn fill(color: impl Into<String>) -> Self {
        Style {
            fill: Some(color.into()),
            ..Style::default()
        }
    }

    pub fn stroke(color: impl Into<String>, width: f64) -> Self {
        Style {
            fill: Some("none".to_string()),
            stroke: Some(color.into()),
            stroke_width: Some(width),
            ..Style::default()
        }
    }

    pub fn with_stroke(mut self, color: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(color.into());
        self.stroke_width = Some(width);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_svg(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Pixels
    pub size: f64,
    pub anchor: Anchor,
    pub bold: bool,
    /// Rotation in degrees around the origin; `x`/`y` are in the rotated frame.
    pub rotate: Option<f64>,
}

impl TextStyle {
    pub fn new(size: f64, anchor: Anchor) -> Self {
        TextStyle {
            size,
            anchor,
            bold: false,
            rotate: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }
}

/// One drawn primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: Style,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        style: Style,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: Style,
    },
    /// Open path through `points`.
    Polyline { points: Vec<(f64, f64)>, style: Style },
    /// Closed area.
    Polygon { points: Vec<(f64, f64)>, style: Style },
    Text {
        x: f64,
        y: f64,
        content: String,
        style: TextStyle,
    },
    /// Horizontal gradient definition, referenced as `url(#id)`.
    LinearGradient { id: String, stops: Vec<(f64, String)> },
}

/// A vector surface a chart exclusively owns and rewrites.
pub trait DrawTarget {
    /// Identifier of the surface. Charts sharing a page need distinct ids,
    /// see [`crate::host::instance_id`].
    fn id(&self) -> &str;
    /// Discard everything drawn so far.
    fn clear(&mut self);
    fn draw(&mut self, mark: Mark);
    fn marks(&self) -> &[Mark];
}

/// In-memory draw target that serializes to SVG.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SvgCanvas {
    id: String,
    marks: Vec<Mark>,
}

impl SvgCanvas {
    pub fn new(id: impl Into<String>) -> Self {
        SvgCanvas {
            id: id.into(),
            marks: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Serialize to a standalone `<svg>` element of the given size.
    pub fn to_svg(&self, size: Viewport) -> String {
        let mut svg = format!(
            r#"<svg id="{}" xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" font-family="sans-serif">"#,
            escape(&self.id),
            size.width,
            size.height,
            size.width,
            size.height
        );
        svg.push('\n');
        for mark in &self.marks {
            svg.push_str("  ");
            svg.push_str(&mark_to_svg(mark));
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl DrawTarget for SvgCanvas {
    fn id(&self) -> &str {
        &self.id
    }

    fn clear(&mut self) {
        self.marks.clear();
    }

    fn draw(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    fn marks(&self) -> &[Mark] {
        &self.marks
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn style_attrs(style: &Style) -> String {
    let mut out = String::new();
    if let Some(fill) = &style.fill {
        out.push_str(&format!(r#" fill="{}""#, escape(fill)));
    }
    if let Some(stroke) = &style.stroke {
        out.push_str(&format!(r#" stroke="{}""#, escape(stroke)));
    }
    if let Some(width) = style.stroke_width {
        out.push_str(&format!(r#" stroke-width="{}""#, width));
    }
    if let Some(opacity) = style.opacity {
        out.push_str(&format!(r#" opacity="{}""#, opacity));
    }
    out
}

fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn mark_to_svg(mark: &Mark) -> String {
    match mark {
        Mark::Rect {
            x,
            y,
            width,
            height,
            style,
        } => format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"{}/>"#,
            x,
            y,
            width,
            height,
            style_attrs(style)
        ),
        Mark::Circle { cx, cy, r, style } => format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}"{}/>"#,
            cx,
            cy,
            r,
            style_attrs(style)
        ),
        Mark::Line {
            x1,
            y1,
            x2,
            y2,
            style,
        } => format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"{}/>"#,
            x1,
            y1,
            x2,
            y2,
            style_attrs(style)
        ),
        Mark::Polyline { points, style } => format!(
            r#"<polyline points="{}"{}/>"#,
            points_attr(points),
            style_attrs(style)
        ),
        Mark::Polygon { points, style } => format!(
            r#"<polygon points="{}"{}/>"#,
            points_attr(points),
            style_attrs(style)
        ),
        Mark::Text {
            x,
            y,
            content,
            style,
        } => {
            let transform = style
                .rotate
                .map(|deg| format!(r#" transform="rotate({})""#, deg))
                .unwrap_or_default();
            let weight = if style.bold { r#" font-weight="bold""# } else { "" };
            format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="{}" text-anchor="{}"{}{}>{}</text>"#,
                x,
                y,
                style.size,
                style.anchor.as_svg(),
                weight,
                transform,
                escape(content)
            )
        }
        Mark::LinearGradient { id, stops } => {
            let stops: String = stops
                .iter()
                .map(|(offset, color)| {
                    format!(
                        r#"<stop offset="{}%" stop-color="{}"/>"#,
                        (offset * 100.0).round(),
                        escape(color)
                    )
                })
                .collect();
            format!(
                r#"<defs><linearGradient id="{}" x1="0%" x2="100%" y1="0%" y2="0%">{}</linearGradient></defs>"#,
                escape(id),
                stops
            )
        }
    }
}
