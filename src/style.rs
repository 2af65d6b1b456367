//! Styling configuration for deck figures.
//!
//! This module defines the immutable [`Theme`] a [`PlotDeck`](crate::PlotDeck)
//! is constructed with, plus the typed marker/line style values that traces
//! carry until the deck consumes them. Automatic per-trace styling draws from
//! the theme's color palette and symbol tables with 1-based cyclic selection.

use plotly::common::{DashType, Line, Marker, MarkerSymbol};

/// Marker shapes available to generated and caller-supplied markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    /// Filled circle.
    Circle,
    /// Filled square.
    Square,
    /// Filled diamond.
    Diamond,
    /// Diagonal cross.
    X,
    /// Upright cross.
    Cross,
}

impl MarkerShape {
    /// Renderer symbol for this shape.
    pub fn to_plotly_symbol(self) -> MarkerSymbol {
        match self {
            MarkerShape::Circle => MarkerSymbol::Circle,
            MarkerShape::Square => MarkerSymbol::Square,
            MarkerShape::Diamond => MarkerSymbol::Diamond,
            MarkerShape::X => MarkerSymbol::X,
            MarkerShape::Cross => MarkerSymbol::Cross,
        }
    }
}

/// Dash patterns available to generated and caller-supplied lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashPattern {
    /// Continuous line.
    Solid,
    /// Dashed line.
    Dash,
    /// Dotted line.
    Dot,
    /// Alternating dash-dot line.
    DashDot,
}

impl DashPattern {
    /// Renderer dash type for this pattern.
    pub fn to_plotly_dash(self) -> DashType {
        match self {
            DashPattern::Solid => DashType::Solid,
            DashPattern::Dash => DashType::Dash,
            DashPattern::Dot => DashType::Dot,
            DashPattern::DashDot => DashType::DashDot,
        }
    }
}

/// Marker outline drawn around generated markers.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerOutline {
    /// Outline color (CSS color string).
    pub color: String,
    /// Outline width in pixels.
    pub width: f64,
}

/// Style configuration for a trace's markers.
///
/// All fields are optional; unset fields are omitted from the figure document
/// so the viewer falls back to its own defaults. A trace whose marker color is
/// unset is eligible for automatic styling when the deck consumes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerStyle {
    /// Marker fill color (CSS color string).
    pub color: Option<String>,
    /// Marker size in pixels.
    pub size: Option<usize>,
    /// Marker shape.
    pub symbol: Option<MarkerShape>,
    /// Outline around each marker.
    pub outline: Option<MarkerOutline>,
}

impl MarkerStyle {
    /// Creates an empty marker style with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the marker color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the marker size in pixels.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the marker shape.
    pub fn with_symbol(mut self, symbol: MarkerShape) -> Self {
        self.symbol = Some(symbol);
        self
    }

    /// Sets the outline drawn around each marker.
    pub fn with_outline(mut self, color: impl Into<String>, width: f64) -> Self {
        self.outline = Some(MarkerOutline {
            color: color.into(),
            width,
        });
        self
    }

    /// Renderer marker carrying only the fields that are set.
    pub fn to_plotly_marker(&self) -> Marker {
        let mut marker = Marker::new();
        if let Some(ref color) = self.color {
            marker = marker.color(color.clone());
        }
        if let Some(size) = self.size {
            marker = marker.size(size);
        }
        if let Some(symbol) = self.symbol {
            marker = marker.symbol(symbol.to_plotly_symbol());
        }
        if let Some(ref outline) = self.outline {
            marker = marker.line(Line::new().color(outline.color.clone()).width(outline.width));
        }
        marker
    }
}

/// Style configuration for a trace's connecting line.
///
/// All fields are optional; a trace whose line color is unset is eligible for
/// automatic styling when the deck consumes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineStyle {
    /// Line color (CSS color string).
    pub color: Option<String>,
    /// Line width in pixels.
    pub width: Option<f64>,
    /// Dash pattern.
    pub dash: Option<DashPattern>,
}

impl LineStyle {
    /// Creates an empty line style with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the line width in pixels.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the dash pattern.
    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }

    /// Renderer line carrying only the fields that are set.
    pub fn to_plotly_line(&self) -> Line {
        let mut line = Line::new();
        if let Some(ref color) = self.color {
            line = line.color(color.clone());
        }
        if let Some(width) = self.width {
            line = line.width(width);
        }
        if let Some(dash) = self.dash {
            line = line.dash(dash.to_plotly_dash());
        }
        line
    }
}

/// Immutable styling configuration for a deck.
///
/// Covers the academic figure look: fonts, axis chrome, backgrounds, fixed
/// figure dimensions, the color-blind-safe palette and the symbol/dash tables
/// used for automatic trace styling. Passed to the deck at construction and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Font family applied to all figure text.
    pub font_family: String,
    /// Default text color.
    pub font_color: String,
    /// Base font size.
    pub font_size: f64,
    /// Axis tick label font size.
    pub tick_font_size: f64,
    /// Axis title font size.
    pub axis_title_font_size: f64,
    /// Axis line color.
    pub axis_line_color: String,
    /// Axis line width in pixels.
    pub axis_line_width: f64,
    /// Mirror axis lines on the opposite side of the plot area.
    pub mirror_axes: bool,
    /// Show grid lines.
    pub show_grid: bool,
    /// Grid line color.
    pub grid_color: String,
    /// Show zero lines.
    pub zero_lines: bool,
    /// Plot area background color.
    pub plot_background: String,
    /// Paper background color for 2-D figures.
    pub paper_background: String,
    /// Fixed figure width in pixels.
    pub width: usize,
    /// Fixed figure height in pixels.
    pub height: usize,
    /// Color palette for automatic trace styling, selected 1-based cyclically.
    pub palette: Vec<String>,
    /// Marker shape table for automatic styling, selected 1-based cyclically.
    pub marker_shapes: Vec<MarkerShape>,
    /// Dash pattern table for automatic styling, selected 1-based cyclically.
    pub dash_patterns: Vec<DashPattern>,
    /// Size of generated markers in pixels.
    pub marker_size: usize,
    /// Outline color of generated markers.
    pub marker_outline_color: String,
    /// Outline width of generated markers in pixels.
    pub marker_outline_width: f64,
    /// Width of generated lines in pixels.
    pub line_width: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self::academic()
    }
}

impl Theme {
    /// The academic publication look: Helvetica, black axis chrome on a
    /// transparent plot area, no grid, fixed 521 x 318 figures and the
    /// color-blind-safe palette.
    pub fn academic() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            font_color: "black".to_string(),
            font_size: 16.0,
            tick_font_size: 16.0,
            axis_title_font_size: 18.0,
            axis_line_color: "rgba(0, 0, 0, 1)".to_string(),
            axis_line_width: 2.0,
            mirror_axes: true,
            show_grid: false,
            grid_color: "black".to_string(),
            zero_lines: false,
            plot_background: "rgba(0, 0, 0, 0)".to_string(),
            paper_background: "rgba(255,255,255, 1)".to_string(),
            width: 521,
            height: 318,
            palette: vec![
                "rgb(136, 204, 238)".to_string(), // cyan
                "rgb(68, 170, 153)".to_string(),  // teal
                "rgb(17, 119, 51)".to_string(),   // green
                "rgb(153, 153, 51)".to_string(),  // olive
                "rgb(221, 204, 119)".to_string(), // sand
                "rgb(204, 102, 119)".to_string(), // rose
                "rgb(136, 34, 85)".to_string(),   // wine
                "rgb(170, 68, 153)".to_string(),  // purple
            ],
            marker_shapes: vec![
                MarkerShape::Circle,
                MarkerShape::Square,
                MarkerShape::Diamond,
                MarkerShape::X,
                MarkerShape::Cross,
            ],
            dash_patterns: vec![
                DashPattern::Solid,
                DashPattern::Dash,
                DashPattern::Dot,
                DashPattern::DashDot,
            ],
            marker_size: 8,
            marker_outline_color: "DarkSlateGrey".to_string(),
            marker_outline_width: 2.0,
            line_width: 2.0,
        }
    }

    /// Palette color for a 1-based trace index, cycling past the palette end.
    ///
    /// Indices map 1..len onto the palette entries and wrap so that an exact
    /// multiple of the palette length selects the last entry, never entry zero.
    pub fn color(&self, index: usize) -> String {
        self.palette[index.saturating_sub(1) % self.palette.len()].clone()
    }

    /// Whether a 1-based color index has walked past the palette end.
    pub fn cycles_palette(&self, index: usize) -> bool {
        index > self.palette.len()
    }

    /// Marker shape for a 1-based trace index, cycling over the shape table.
    pub fn marker_shape(&self, index: usize) -> MarkerShape {
        self.marker_shapes[index.saturating_sub(1) % self.marker_shapes.len()]
    }

    /// Dash pattern for a 1-based trace index, cycling over the pattern table.
    pub fn dash_pattern(&self, index: usize) -> DashPattern {
        self.dash_patterns[index.saturating_sub(1) % self.dash_patterns.len()]
    }

    /// Generated marker for a trace that needs automatic styling.
    pub fn generated_marker(&self, color_index: usize, symbol_index: usize) -> MarkerStyle {
        MarkerStyle {
            color: Some(self.color(color_index)),
            size: Some(self.marker_size),
            symbol: Some(self.marker_shape(symbol_index)),
            outline: Some(MarkerOutline {
                color: self.marker_outline_color.clone(),
                width: self.marker_outline_width,
            }),
        }
    }

    /// Generated line for a trace that needs automatic styling.
    pub fn generated_line(&self, color_index: usize, symbol_index: usize) -> LineStyle {
        LineStyle {
            color: Some(self.color(color_index)),
            width: Some(self.line_width),
            dash: Some(self.dash_pattern(symbol_index)),
        }
    }
}
