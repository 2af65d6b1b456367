//! Trace construction for deck figures.
//!
//! A [`PlotTrace`] pairs a renderer trace body with a coarse type tag
//! ("scatter", "scatter3d", or a caller-chosen tag for pass-through traces).
//! The tag is fixed at construction and drives compatibility checks inside the
//! deck; the styling fields stay open until the deck consumes the trace and
//! fills in generated colors and symbols where the caller left them unset.

use std::fmt;
use std::str::FromStr;

use plotly::common::Mode;
use plotly::{Scatter, Scatter3D, Trace};
use serde::Serialize;
use serde_json::Value;

use crate::error::{PlotDeckError, PlotDeckResult};
use crate::style::{LineStyle, MarkerStyle};

/// Type tag of 2-D scatter traces.
pub const SCATTER_TAG: &str = "scatter";
/// Type tag of 3-D scatter traces.
pub const SCATTER_3D_TAG: &str = "scatter3d";

/// Display mode of a scatter trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceMode {
    /// Connect the points with a line.
    Lines,
    /// Draw a marker at each point.
    Markers,
    /// Draw both lines and markers.
    LinesMarkers,
}

impl TraceMode {
    /// Whether this mode draws markers.
    pub fn includes_markers(self) -> bool {
        matches!(self, TraceMode::Markers | TraceMode::LinesMarkers)
    }

    /// Whether this mode draws connecting lines.
    pub fn includes_lines(self) -> bool {
        matches!(self, TraceMode::Lines | TraceMode::LinesMarkers)
    }

    pub(crate) fn to_plotly_mode(self) -> Mode {
        match self {
            TraceMode::Lines => Mode::Lines,
            TraceMode::Markers => Mode::Markers,
            TraceMode::LinesMarkers => Mode::LinesMarkers,
        }
    }
}

impl FromStr for TraceMode {
    type Err = PlotDeckError;

    /// Parses the mode selector accepted by the 2-D entry point.
    ///
    /// Exactly "lines", "markers" and "both" are accepted; "both" selects the
    /// renderer's combined lines+markers mode.
    fn from_str(s: &str) -> PlotDeckResult<Self> {
        match s {
            "lines" => Ok(TraceMode::Lines),
            "markers" => Ok(TraceMode::Markers),
            "both" => Ok(TraceMode::LinesMarkers),
            other => Err(PlotDeckError::InvalidArgument(format!(
                "Display mode must be one of 'lines', 'markers' or 'both', got '{other}'."
            ))),
        }
    }
}

impl fmt::Display for TraceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TraceMode::Lines => "lines",
            TraceMode::Markers => "markers",
            TraceMode::LinesMarkers => "lines+markers",
        };
        write!(f, "{text}")
    }
}

/// Extra renderer attributes settable on scatter traces.
///
/// Attribute names arrive as strings and are checked against this enumerated
/// set at construction; anything outside it is rejected instead of being
/// silently dropped.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TraceAttr {
    Name(String),
    Opacity(f64),
    ShowLegend(bool),
    LegendGroup(String),
    Text(Vec<String>),
}

fn parse_attr(tag: &str, name: &str, value: &Value) -> PlotDeckResult<TraceAttr> {
    let ill_typed = |expected: &str| {
        PlotDeckError::InvalidArgument(format!(
            "Attribute '{name}' on {tag} traces expects {expected}."
        ))
    };
    match name {
        "name" => value
            .as_str()
            .map(|s| TraceAttr::Name(s.to_string()))
            .ok_or_else(|| ill_typed("a string")),
        "opacity" => value
            .as_f64()
            .map(TraceAttr::Opacity)
            .ok_or_else(|| ill_typed("a number")),
        "showlegend" => value
            .as_bool()
            .map(TraceAttr::ShowLegend)
            .ok_or_else(|| ill_typed("a boolean")),
        "legendgroup" => value
            .as_str()
            .map(|s| TraceAttr::LegendGroup(s.to_string()))
            .ok_or_else(|| ill_typed("a string")),
        "text" => value
            .as_array()
            .and_then(|items| {
                items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
            })
            .map(TraceAttr::Text)
            .ok_or_else(|| ill_typed("an array of strings")),
        _ => Err(PlotDeckError::InvalidArgument(format!(
            "'{name}' is not a settable attribute on {tag} traces."
        ))),
    }
}

/// Optional styling supplied to the trace entry points.
///
/// Marker and line styles are typed; anything else goes through [`with_attr`]
/// as a (name, JSON value) pair and is validated against the enumerated
/// attribute set of the trace kind being built.
///
/// [`with_attr`]: TraceStyling::with_attr
#[derive(Debug, Clone, Default)]
pub struct TraceStyling {
    marker: Option<MarkerStyle>,
    line: Option<LineStyle>,
    mode: Option<TraceMode>,
    attrs: Vec<(String, Value)>,
}

impl TraceStyling {
    /// Creates an empty styling bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies an explicit marker style, forwarded to the figure untouched.
    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Supplies an explicit line style, forwarded to the figure untouched.
    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the display mode of a 3-D trace.
    ///
    /// 2-D traces take their mode from the entry point's mode selector and
    /// reject this field.
    pub fn with_mode(mut self, mode: TraceMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Adds an extra renderer attribute by name.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    fn parse_attrs(&self, tag: &str) -> PlotDeckResult<Vec<TraceAttr>> {
        self.attrs
            .iter()
            .map(|(name, value)| parse_attr(tag, name, value))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ScatterData {
    x: Vec<f64>,
    y: Vec<f64>,
    mode: TraceMode,
    marker: Option<MarkerStyle>,
    line: Option<LineStyle>,
    attrs: Vec<TraceAttr>,
}

#[derive(Debug, Clone, PartialEq)]
struct Scatter3dData {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    mode: Option<TraceMode>,
    marker: Option<MarkerStyle>,
    line: Option<LineStyle>,
    attrs: Vec<TraceAttr>,
}

#[derive(Debug, Clone, PartialEq)]
enum TraceBody {
    Scatter(ScatterData),
    Scatter3d(Scatter3dData),
    Custom(Value),
}

/// One data series plus the type tag used for compatibility checks.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotTrace {
    tag: String,
    body: TraceBody,
}

impl PlotTrace {
    /// Builds a 2-D scatter trace from x/y coordinates and a mode selector.
    ///
    /// The selector must be "lines", "markers" or "both"; anything else fails
    /// with [`PlotDeckError::InvalidArgument`] and produces no trace.
    pub fn scatter(
        x: Vec<f64>,
        y: Vec<f64>,
        mode: &str,
        styling: TraceStyling,
    ) -> PlotDeckResult<Self> {
        let mode = TraceMode::from_str(mode)?;
        if styling.mode.is_some() {
            return Err(PlotDeckError::InvalidArgument(
                "The display mode of a scatter trace is set by its mode selector, \
                 not a styling attribute."
                    .to_string(),
            ));
        }
        let attrs = styling.parse_attrs(SCATTER_TAG)?;
        Ok(Self {
            tag: SCATTER_TAG.to_string(),
            body: TraceBody::Scatter(ScatterData {
                x,
                y,
                mode,
                marker: styling.marker,
                line: styling.line,
                attrs,
            }),
        })
    }

    /// Builds a 2-D scatter trace from y values alone, indexing x as 0..n.
    pub fn scatter_y(y: Vec<f64>, mode: &str, styling: TraceStyling) -> PlotDeckResult<Self> {
        let x = (0..y.len()).map(|i| i as f64).collect();
        Self::scatter(x, y, mode, styling)
    }

    /// Builds a 3-D scatter trace from x/y/z coordinates.
    ///
    /// The display mode is left to the renderer default unless the styling
    /// bundle sets one.
    pub fn scatter3d(
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f64>,
        styling: TraceStyling,
    ) -> PlotDeckResult<Self> {
        let attrs = styling.parse_attrs(SCATTER_3D_TAG)?;
        Ok(Self {
            tag: SCATTER_3D_TAG.to_string(),
            body: TraceBody::Scatter3d(Scatter3dData {
                x,
                y,
                z,
                mode: styling.mode,
                marker: styling.marker,
                line: styling.line,
                attrs,
            }),
        })
    }

    /// Wraps an already-built renderer trace under a caller-chosen tag.
    ///
    /// The trace is serialized immediately and passed through to the figure
    /// document untouched. Automatic styling skips such traces, though they
    /// still advance the deck's styling counters like any other trace.
    pub fn custom(tag: impl Into<String>, trace: &impl Serialize) -> PlotDeckResult<Self> {
        Ok(Self {
            tag: tag.into(),
            body: TraceBody::Custom(serde_json::to_value(trace)?),
        })
    }

    /// The trace's type tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether the tag classifies this trace as 3-D.
    pub fn is_3d(&self) -> bool {
        self.tag.contains("3d")
    }

    /// The trace's display mode, when its body carries one.
    pub fn mode(&self) -> Option<TraceMode> {
        match &self.body {
            TraceBody::Scatter(data) => Some(data.mode),
            TraceBody::Scatter3d(data) => data.mode,
            TraceBody::Custom(_) => None,
        }
    }

    /// The trace's marker style, if any.
    pub fn marker(&self) -> Option<&MarkerStyle> {
        match &self.body {
            TraceBody::Scatter(data) => data.marker.as_ref(),
            TraceBody::Scatter3d(data) => data.marker.as_ref(),
            TraceBody::Custom(_) => None,
        }
    }

    /// The trace's line style, if any.
    pub fn line(&self) -> Option<&LineStyle> {
        match &self.body {
            TraceBody::Scatter(data) => data.line.as_ref(),
            TraceBody::Scatter3d(data) => data.line.as_ref(),
            TraceBody::Custom(_) => None,
        }
    }

    /// Replaces the marker style. Pass-through traces are left untouched.
    pub fn set_marker(&mut self, marker: MarkerStyle) {
        match &mut self.body {
            TraceBody::Scatter(data) => data.marker = Some(marker),
            TraceBody::Scatter3d(data) => data.marker = Some(marker),
            TraceBody::Custom(_) => {}
        }
    }

    /// Replaces the line style. Pass-through traces are left untouched.
    pub fn set_line(&mut self, line: LineStyle) {
        match &mut self.body {
            TraceBody::Scatter(data) => data.line = Some(line),
            TraceBody::Scatter3d(data) => data.line = Some(line),
            TraceBody::Custom(_) => {}
        }
    }

    /// True when the marker carries an explicit color.
    pub(crate) fn marker_color_is_set(&self) -> bool {
        self.marker().is_some_and(|m| m.color.is_some())
    }

    /// True when the line carries an explicit color.
    pub(crate) fn line_color_is_set(&self) -> bool {
        self.line().is_some_and(|l| l.color.is_some())
    }

    /// Builds the renderer trace object for the figure document.
    pub(crate) fn to_renderer_trace(&self) -> Box<dyn Trace> {
        match &self.body {
            TraceBody::Scatter(data) => {
                let mut trace = Scatter::new(data.x.clone(), data.y.clone())
                    .mode(data.mode.to_plotly_mode());
                if let Some(ref marker) = data.marker {
                    trace = trace.marker(marker.to_plotly_marker());
                }
                if let Some(ref line) = data.line {
                    trace = trace.line(line.to_plotly_line());
                }
                for attr in &data.attrs {
                    trace = match attr {
                        TraceAttr::Name(name) => trace.name(name),
                        TraceAttr::Opacity(opacity) => trace.opacity(*opacity),
                        TraceAttr::ShowLegend(show) => trace.show_legend(*show),
                        TraceAttr::LegendGroup(group) => trace.legend_group(group),
                        TraceAttr::Text(items) => trace.text_array(items.clone()),
                    };
                }
                trace
            }
            TraceBody::Scatter3d(data) => {
                let mut trace = Scatter3D::new(data.x.clone(), data.y.clone(), data.z.clone());
                if let Some(mode) = data.mode {
                    trace = trace.mode(mode.to_plotly_mode());
                }
                if let Some(ref marker) = data.marker {
                    trace = trace.marker(marker.to_plotly_marker());
                }
                if let Some(ref line) = data.line {
                    trace = trace.line(line.to_plotly_line());
                }
                for attr in &data.attrs {
                    trace = match attr {
                        TraceAttr::Name(name) => trace.name(name),
                        TraceAttr::Opacity(opacity) => trace.opacity(*opacity),
                        TraceAttr::ShowLegend(show) => trace.show_legend(*show),
                        TraceAttr::LegendGroup(group) => trace.legend_group(group),
                        TraceAttr::Text(items) => trace.text_array(items.clone()),
                    };
                }
                trace
            }
            TraceBody::Custom(value) => Box::new(RawTrace(value.clone())),
        }
    }
}

/// Pass-through wrapper giving an opaque JSON trace a renderer identity.
#[derive(Clone, Serialize)]
#[serde(transparent)]
struct RawTrace(Value);

impl Trace for RawTrace {
    fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}
