//! The plot collection manager.
//!
//! [`PlotDeck`] owns an ordered registry of named figures plus the two special
//! entry kinds (problem definition, interactive design points), validates and
//! styles submitted trace sets, and persists the whole registry as one
//! pretty-printed JSON document with the fixed `.plots` extension.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use plotly::layout::Layout;
use plotly::{Plot, Trace};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{PlotDeckError, PlotDeckResult};
use crate::record::{
    DEFAULT_DESCRIPTION, DeckEntry, DesignConstraints, DesignPoint, FigureRecord, ObjectiveSpec,
    PROBLEM_DEFINITION_KEY, problem_definition_payload,
};
use crate::style::Theme;
use crate::trace::{PlotTrace, SCATTER_3D_TAG, SCATTER_TAG, TraceMode};

/// File extension of persisted deck documents.
pub const DECK_FILE_EXTENSION: &str = "plots";

/// Trace type tags the deck currently accepts.
pub const SUPPORTED_TRACE_TYPES: [&str; 2] = [SCATTER_TAG, SCATTER_3D_TAG];

/// Per-figure options for [`PlotDeck::add_new_plot`].
#[derive(Debug, Clone, Default)]
pub struct FigureOptions {
    description: Option<String>,
    closeable: bool,
    layout: Option<Layout>,
}

impl FigureOptions {
    /// Creates the default options: not closeable, placeholder description,
    /// default layout by dimensionality.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the figure description shown by the viewer.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Lets the viewer close this figure's window.
    pub fn with_closeable(mut self, closeable: bool) -> Self {
        self.closeable = closeable;
        self
    }

    /// Overrides the deck's default layout with an explicit one.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }
}

/// Outcome of one styling pass over a trace list.
struct StyledTraces {
    plot_type: String,
    palette_cycled: bool,
}

/// Ordered registry of figures with automatic styling and persistence.
#[derive(Debug)]
pub struct PlotDeck {
    entries: IndexMap<String, DeckEntry>,
    next_design_index: u32,
    theme: Theme,
    layout_2d: Layout,
    layout_3d: Layout,
}

impl Default for PlotDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotDeck {
    /// Creates an empty deck with the academic theme.
    pub fn new() -> Self {
        Self::with_theme(Theme::academic())
    }

    /// Creates an empty deck, precomputing both default layouts from `theme`.
    pub fn with_theme(theme: Theme) -> Self {
        let layout_2d = theme.to_2d_layout();
        let layout_3d = theme.to_3d_layout();
        Self {
            entries: IndexMap::new(),
            next_design_index: 0,
            theme,
            layout_2d,
            layout_3d,
        }
    }

    /// The styling configuration this deck was constructed with.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Number of registry entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The entry stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&DeckEntry> {
        self.entries.get(key)
    }

    /// Registry entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &DeckEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Removes and returns the entry stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<DeckEntry> {
        self.entries.shift_remove(key)
    }

    /// The index the next interactive design point will receive.
    pub fn next_design_index(&self) -> u32 {
        self.next_design_index
    }

    /// Checks that a trace list can form one figure.
    ///
    /// Enforced in order: every trace carries a type tag, all traces are
    /// uniformly 2-D or uniformly 3-D (a tag containing "3d" counts as 3-D),
    /// and every tag is in [`SUPPORTED_TRACE_TYPES`]. Pure; the add-figure
    /// path converts a failure into [`PlotDeckError::Validation`].
    pub fn validate_traces(&self, traces: &[PlotTrace]) -> PlotDeckResult<()> {
        for (position, trace) in traces.iter().enumerate() {
            if trace.tag().is_empty() {
                return Err(PlotDeckError::InvalidTrace(format!(
                    "Trace at position {position} carries no type tag."
                )));
            }
        }
        let any_3d = traces.iter().any(PlotTrace::is_3d);
        let any_2d = traces.iter().any(|trace| !trace.is_3d());
        if any_2d && any_3d {
            return Err(PlotDeckError::DimensionMismatch(
                "Can not combine 2D and 3D traces on the same plot.".to_string(),
            ));
        }
        for trace in traces {
            if !SUPPORTED_TRACE_TYPES.contains(&trace.tag()) {
                return Err(PlotDeckError::UnsupportedType(format!(
                    "'{}' traces are not currently supported.",
                    trace.tag()
                )));
            }
        }
        Ok(())
    }

    fn note_palette_cycle(&self, color_index: usize, cycled: &mut bool) {
        if self.theme.cycles_palette(color_index) && !*cycled {
            warn!(
                "Figure has more traces than the {}-color palette; colors now repeat.",
                self.theme.palette.len()
            );
            *cycled = true;
        }
    }

    /// Fills generated styles into traces whose colors the caller left unset.
    ///
    /// Both the color counter and the symbol counter start at 1 and advance
    /// once per trace whether or not that trace needed styling. When both
    /// colors are unset the display mode picks the branch, markers first; a
    /// combined-mode trace therefore only ever receives the generated marker.
    fn style_traces(&self, traces: &mut [PlotTrace]) -> StyledTraces {
        let mut plot_types: Vec<String> = Vec::new();
        let mut color_index = 1;
        let mut symbol_index = 1;
        let mut cycled = false;

        for trace in traces.iter_mut() {
            if !plot_types.iter().any(|tag| tag == trace.tag()) {
                plot_types.push(trace.tag().to_string());
            }

            let marker_color_set = trace.marker_color_is_set();
            let line_color_set = trace.line_color_is_set();
            let mode = trace.mode();

            if !marker_color_set && !line_color_set {
                if mode.is_some_and(TraceMode::includes_markers) {
                    self.note_palette_cycle(color_index, &mut cycled);
                    trace.set_marker(self.theme.generated_marker(color_index, symbol_index));
                } else if mode.is_some_and(TraceMode::includes_lines) {
                    self.note_palette_cycle(color_index, &mut cycled);
                    trace.set_line(self.theme.generated_line(color_index, symbol_index));
                }
            } else if !marker_color_set {
                self.note_palette_cycle(color_index, &mut cycled);
                trace.set_marker(self.theme.generated_marker(color_index, symbol_index));
            } else if !line_color_set {
                self.note_palette_cycle(color_index, &mut cycled);
                trace.set_line(self.theme.generated_line(color_index, symbol_index));
            }

            color_index += 1;
            symbol_index += 1;
        }

        StyledTraces {
            plot_type: plot_types.join("+"),
            palette_cycled: cycled,
        }
    }

    /// Styles a validated trace list and extracts what the figure needs:
    /// renderer trace objects, the default layout for the combined
    /// dimensionality, and the combined plot-type string.
    fn read_traces(&self, traces: &mut [PlotTrace]) -> (Vec<Box<dyn Trace>>, &Layout, String) {
        let styled = self.style_traces(traces);
        let rendered = traces.iter().map(PlotTrace::to_renderer_trace).collect();
        let layout = if styled.plot_type.contains("3d") {
            &self.layout_3d
        } else {
            &self.layout_2d
        };
        (rendered, layout, styled.plot_type)
    }

    /// Validates, styles and stores a figure under `window_title`.
    ///
    /// An invalid trace set fails with [`PlotDeckError::Validation`] wrapping
    /// the validation message and leaves the registry untouched. On success
    /// the styled traces and the layout (the caller's, or the default for the
    /// figure's dimensionality) are combined into a renderer figure document
    /// and stored as a [`FigureRecord`]. An existing record under the same
    /// title is overwritten silently.
    pub fn add_new_plot(
        &mut self,
        traces: Vec<PlotTrace>,
        window_title: &str,
        options: FigureOptions,
    ) -> PlotDeckResult<()> {
        self.validate_traces(&traces)
            .map_err(|source| PlotDeckError::Validation(source.to_string()))?;

        let mut traces = traces;
        let (rendered, default_layout, plot_type) = self.read_traces(&mut traces);
        let layout = match options.layout {
            Some(layout) => layout,
            None => default_layout.clone(),
        };

        let mut plot = Plot::new();
        for trace in rendered {
            plot.add_trace(trace);
        }
        plot.set_layout(layout);
        let data = serde_json::to_string(&plot)?;

        let record = FigureRecord {
            title: window_title.to_string(),
            closeable: options.closeable,
            description: options
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            settings_bar: plot_type,
            data,
        };
        self.entries
            .insert(window_title.to_string(), DeckEntry::Figure(record));
        Ok(())
    }

    /// Stores the flattened problem definition under its reserved key.
    ///
    /// No validation; any prior problem definition is overwritten.
    pub fn add_problem_definition(
        &mut self,
        objective: &ObjectiveSpec,
        constraints: &DesignConstraints,
    ) {
        let payload = problem_definition_payload(objective, constraints);
        self.entries.insert(
            PROBLEM_DEFINITION_KEY.to_string(),
            DeckEntry::ProblemDefinition(payload),
        );
    }

    /// Stores one interactive design point under the next auto-numbered key.
    ///
    /// Returns the generated key. A fresh deck produces
    /// `INTERACTIVE_DESIGN_0`, then `_1`, and so on; loading a saved deck
    /// resumes the sequence.
    pub fn store_interactive_points(&mut self, values: Map<String, Value>) -> String {
        let point = DesignPoint {
            index: self.next_design_index,
            values,
        };
        let key = point.key();
        self.next_design_index = self.next_design_index.saturating_add(1);
        self.entries.insert(key.clone(), DeckEntry::DesignPoint(point));
        key
    }

    /// The whole registry as one pretty-printed JSON document.
    pub fn to_json(&self) -> PlotDeckResult<String> {
        let mut document = Map::new();
        for (key, entry) in &self.entries {
            document.insert(key.clone(), entry.to_value()?);
        }
        Ok(serde_json::to_string_pretty(&Value::Object(document))?)
    }

    /// Writes the registry document to `<directory>/<basename>.plots`.
    ///
    /// Plain write; there is no atomic-rename safeguard, so a crash mid-write
    /// can leave a truncated document behind.
    pub fn save_to_file(&self, directory: impl AsRef<Path>, basename: &str) -> PlotDeckResult<()> {
        let path = directory
            .as_ref()
            .join(format!("{basename}.{DECK_FILE_EXTENSION}"));
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Replaces the registry with the entries of a parsed deck document.
    ///
    /// Entries are classified by key: the reserved problem-definition key, the
    /// `INTERACTIVE_DESIGN_<n>` pattern (numeric suffix becomes the point's
    /// index), and everything else as a figure record. The next design index
    /// resumes after the last design key in document order; a document without
    /// design keys resets numbering to zero. On failure the registry keeps its
    /// previous contents.
    pub fn load_from_json(&mut self, document: &str) -> PlotDeckResult<()> {
        let document: Value = serde_json::from_str(document)?;
        let Value::Object(document) = document else {
            return Err(PlotDeckError::MalformedDocument(
                "The top-level value must be an object mapping titles to entries.".to_string(),
            ));
        };

        let mut entries = IndexMap::with_capacity(document.len());
        let mut next_index = 0;
        for (key, value) in document {
            let entry = if key == PROBLEM_DEFINITION_KEY {
                DeckEntry::ProblemDefinition(into_object(&key, value)?)
            } else if let Some(index) = DesignPoint::index_from_key(&key) {
                next_index = index.saturating_add(1);
                DeckEntry::DesignPoint(DesignPoint {
                    index,
                    values: into_object(&key, value)?,
                })
            } else {
                let record: FigureRecord = serde_json::from_value(value).map_err(|source| {
                    PlotDeckError::MalformedDocument(format!(
                        "Entry '{key}' is not a figure record: {source}"
                    ))
                })?;
                DeckEntry::Figure(record)
            };
            entries.insert(key, entry);
        }

        self.entries = entries;
        self.next_design_index = next_index;
        Ok(())
    }

    /// Reads and loads a deck document from `path`.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> PlotDeckResult<()> {
        let contents = fs::read_to_string(path)?;
        self.load_from_json(&contents)
    }
}

fn into_object(key: &str, value: Value) -> PlotDeckResult<Map<String, Value>> {
    match value {
        Value::Object(values) => Ok(values),
        _ => Err(PlotDeckError::MalformedDocument(format!(
            "Entry '{key}' must be an object."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{DashPattern, LineStyle, MarkerShape, MarkerStyle};
    use crate::trace::TraceStyling;
    use serde_json::json;

    fn lines_trace() -> PlotTrace {
        PlotTrace::scatter(
            vec![0.0, 1.0, 2.0],
            vec![1.0, 4.0, 9.0],
            "lines",
            TraceStyling::new(),
        )
        .unwrap()
    }

    fn markers_trace() -> PlotTrace {
        PlotTrace::scatter(
            vec![0.0, 1.0, 2.0],
            vec![1.0, 4.0, 9.0],
            "markers",
            TraceStyling::new(),
        )
        .unwrap()
    }

    fn spatial_trace() -> PlotTrace {
        PlotTrace::scatter3d(
            vec![0.0, 1.0],
            vec![1.0, 2.0],
            vec![2.0, 3.0],
            TraceStyling::new(),
        )
        .unwrap()
    }

    fn figure_data(deck: &PlotDeck, title: &str) -> Value {
        let record = deck.get(title).unwrap().as_figure().unwrap();
        serde_json::from_str(&record.data).unwrap()
    }

    #[test]
    fn test_add_new_plot_stores_figure_record() {
        let mut deck = PlotDeck::new();
        deck.add_new_plot(vec![lines_trace()], "Convergence", FigureOptions::new())
            .unwrap();

        assert_eq!(deck.len(), 1);
        let record = deck.get("Convergence").unwrap().as_figure().unwrap();
        assert_eq!(record.title, "Convergence");
        assert!(!record.closeable);
        assert_eq!(record.description, "No plot description provided.");
        assert_eq!(record.settings_bar, "scatter");

        let data = figure_data(&deck, "Convergence");
        assert_eq!(data["data"][0]["type"], "scatter");
        assert_eq!(data["layout"]["width"], 521);
        assert_eq!(data["layout"]["height"], 318);
    }

    #[test]
    fn test_add_new_plot_honors_options() {
        let mut deck = PlotDeck::new();
        let options = FigureOptions::new()
            .with_description("Edge-length sweep")
            .with_closeable(true);
        deck.add_new_plot(vec![lines_trace()], "Sweep", options)
            .unwrap();

        let record = deck.get("Sweep").unwrap().as_figure().unwrap();
        assert!(record.closeable);
        assert_eq!(record.description, "Edge-length sweep");
    }

    #[test]
    fn test_custom_layout_overrides_default() {
        let mut deck = PlotDeck::new();
        let layout = Layout::new().width(900).height(600);
        deck.add_new_plot(
            vec![lines_trace()],
            "Wide",
            FigureOptions::new().with_layout(layout),
        )
        .unwrap();

        let data = figure_data(&deck, "Wide");
        assert_eq!(data["layout"]["width"], 900);
        assert_eq!(data["layout"]["height"], 600);
    }

    #[test]
    fn test_validate_rejects_traces_without_tags() {
        let deck = PlotDeck::new();
        let traces = vec![
            lines_trace(),
            PlotTrace::custom("", &json!({"y": [1.0]})).unwrap(),
        ];
        match deck.validate_traces(&traces) {
            Err(PlotDeckError::InvalidTrace(message)) => {
                assert!(message.contains("position 1"));
            }
            other => panic!("expected InvalidTrace, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_mixed_dimensions_in_either_order() {
        let deck = PlotDeck::new();
        for traces in [
            vec![lines_trace(), spatial_trace()],
            vec![spatial_trace(), lines_trace()],
        ] {
            match deck.validate_traces(&traces) {
                Err(PlotDeckError::DimensionMismatch(message)) => {
                    assert_eq!(message, "Can not combine 2D and 3D traces on the same plot.");
                }
                other => panic!("expected DimensionMismatch, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_validate_rejects_unsupported_types() {
        let deck = PlotDeck::new();
        let traces = vec![PlotTrace::custom("bar", &json!({"y": [1.0]})).unwrap()];
        match deck.validate_traces(&traces) {
            Err(PlotDeckError::UnsupportedType(message)) => {
                assert!(message.contains("bar"));
            }
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
    }

    #[test]
    fn test_add_new_plot_wraps_validation_failure() {
        let mut deck = PlotDeck::new();
        let result = deck.add_new_plot(
            vec![lines_trace(), spatial_trace()],
            "Mixed",
            FigureOptions::new(),
        );
        match result {
            Err(PlotDeckError::Validation(message)) => {
                assert!(message.contains("2D and 3D"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
        assert!(deck.is_empty());
    }

    #[test]
    fn test_lines_trace_receives_generated_line_only() {
        let deck = PlotDeck::new();
        let mut traces = vec![lines_trace()];
        deck.style_traces(&mut traces);

        let line = traces[0].line().unwrap();
        assert_eq!(line.color.as_deref(), Some("rgb(136, 204, 238)"));
        assert_eq!(line.width, Some(2.0));
        assert_eq!(line.dash, Some(DashPattern::Solid));
        assert!(traces[0].marker().is_none());
    }

    #[test]
    fn test_markers_trace_receives_generated_marker_only() {
        let deck = PlotDeck::new();
        let mut traces = vec![markers_trace()];
        deck.style_traces(&mut traces);

        let marker = traces[0].marker().unwrap();
        assert_eq!(marker.color.as_deref(), Some("rgb(136, 204, 238)"));
        assert_eq!(marker.size, Some(8));
        assert_eq!(marker.symbol, Some(MarkerShape::Circle));
        let outline = marker.outline.as_ref().unwrap();
        assert_eq!(outline.color, "DarkSlateGrey");
        assert_eq!(outline.width, 2.0);
        assert!(traces[0].line().is_none());
    }

    #[test]
    fn test_combined_mode_takes_the_marker_branch_only() {
        let deck = PlotDeck::new();
        let mut traces = vec![
            PlotTrace::scatter(vec![0.0, 1.0], vec![1.0, 2.0], "both", TraceStyling::new())
                .unwrap(),
        ];
        deck.style_traces(&mut traces);

        assert!(traces[0].marker().is_some());
        assert!(traces[0].line().is_none());
    }

    #[test]
    fn test_partially_styled_traces_get_the_missing_side() {
        let deck = PlotDeck::new();

        // Marker color set, line color unset: line branch fires regardless of
        // mode.
        let styled_marker = PlotTrace::scatter(
            vec![0.0, 1.0],
            vec![1.0, 2.0],
            "markers",
            TraceStyling::new().with_marker(MarkerStyle::new().with_color("black")),
        )
        .unwrap();
        let mut traces = vec![styled_marker];
        deck.style_traces(&mut traces);
        assert_eq!(traces[0].marker().unwrap().color.as_deref(), Some("black"));
        assert!(traces[0].line().is_some());

        // Line color set, marker color unset: marker branch fires.
        let styled_line = PlotTrace::scatter(
            vec![0.0, 1.0],
            vec![1.0, 2.0],
            "lines",
            TraceStyling::new().with_line(LineStyle::new().with_color("black")),
        )
        .unwrap();
        let mut traces = vec![styled_line];
        deck.style_traces(&mut traces);
        assert_eq!(traces[0].line().unwrap().color.as_deref(), Some("black"));
        assert!(traces[0].marker().is_some());
    }

    #[test]
    fn test_styling_counters_advance_once_per_trace() {
        let deck = PlotDeck::new();
        let already_styled = PlotTrace::scatter(
            vec![0.0, 1.0],
            vec![1.0, 2.0],
            "both",
            TraceStyling::new()
                .with_marker(MarkerStyle::new().with_color("black"))
                .with_line(LineStyle::new().with_color("black")),
        )
        .unwrap();
        let mut traces = vec![lines_trace(), already_styled, markers_trace()];
        deck.style_traces(&mut traces);

        // Trace 2 needed nothing, but the third trace still draws index 3.
        let marker = traces[2].marker().unwrap();
        assert_eq!(marker.color.as_deref(), Some("rgb(17, 119, 51)"));
        assert_eq!(marker.symbol, Some(MarkerShape::Diamond));
    }

    #[test]
    fn test_plot_type_string_dedups_in_first_seen_order() {
        let deck = PlotDeck::new();
        let mut traces = vec![lines_trace(), lines_trace(), spatial_trace()];
        let styled = deck.style_traces(&mut traces);
        assert_eq!(styled.plot_type, "scatter+scatter3d");
    }

    #[test]
    fn test_palette_cycles_only_past_eight_traces() {
        let deck = PlotDeck::new();

        let mut eight: Vec<PlotTrace> = (0..8).map(|_| lines_trace()).collect();
        assert!(!deck.style_traces(&mut eight).palette_cycled);

        let mut nine: Vec<PlotTrace> = (0..9).map(|_| lines_trace()).collect();
        assert!(deck.style_traces(&mut nine).palette_cycled);

        // Color 9 wraps to the first palette entry, color 16 to the last.
        assert_eq!(nine[8].line().unwrap().color.as_deref(), Some("rgb(136, 204, 238)"));
        let mut sixteen: Vec<PlotTrace> = (0..16).map(|_| lines_trace()).collect();
        deck.style_traces(&mut sixteen);
        assert_eq!(
            sixteen[15].line().unwrap().color.as_deref(),
            Some("rgb(170, 68, 153)")
        );
    }

    #[test]
    fn test_fully_styled_ninth_trace_does_not_cycle() {
        let deck = PlotDeck::new();
        let mut traces: Vec<PlotTrace> = (0..8).map(|_| lines_trace()).collect();
        traces.push(
            PlotTrace::scatter(
                vec![0.0],
                vec![1.0],
                "both",
                TraceStyling::new()
                    .with_marker(MarkerStyle::new().with_color("black"))
                    .with_line(LineStyle::new().with_color("black")),
            )
            .unwrap(),
        );
        assert!(!deck.style_traces(&mut traces).palette_cycled);
    }

    #[test]
    fn test_3d_figures_use_the_scene_layout() {
        let mut deck = PlotDeck::new();
        deck.add_new_plot(vec![spatial_trace()], "Lattice", FigureOptions::new())
            .unwrap();

        let record = deck.get("Lattice").unwrap().as_figure().unwrap();
        assert_eq!(record.settings_bar, "scatter3d");
        let data = figure_data(&deck, "Lattice");
        assert_eq!(data["data"][0]["type"], "scatter3d");
        assert_eq!(data["layout"]["scene"]["xaxis"]["title"]["text"], "X");
        assert!(data["layout"].get("width").is_none());
    }

    #[test]
    fn test_empty_trace_list_makes_an_empty_figure() {
        let mut deck = PlotDeck::new();
        deck.add_new_plot(Vec::new(), "Blank", FigureOptions::new())
            .unwrap();
        let record = deck.get("Blank").unwrap().as_figure().unwrap();
        assert_eq!(record.settings_bar, "");
    }

    #[test]
    fn test_add_new_plot_overwrites_same_title() {
        let mut deck = PlotDeck::new();
        deck.add_new_plot(vec![lines_trace()], "Window", FigureOptions::new())
            .unwrap();
        deck.add_new_plot(
            vec![spatial_trace()],
            "Window",
            FigureOptions::new().with_description("second"),
        )
        .unwrap();

        assert_eq!(deck.len(), 1);
        let record = deck.get("Window").unwrap().as_figure().unwrap();
        assert_eq!(record.settings_bar, "scatter3d");
        assert_eq!(record.description, "second");
    }

    #[test]
    fn test_store_interactive_points_numbers_from_zero() {
        let mut deck = PlotDeck::new();
        let mut values = Map::new();
        values.insert("edge_length".to_string(), json!(7.5));

        assert_eq!(deck.store_interactive_points(values.clone()), "INTERACTIVE_DESIGN_0");
        assert_eq!(deck.store_interactive_points(values.clone()), "INTERACTIVE_DESIGN_1");
        assert_eq!(deck.store_interactive_points(values), "INTERACTIVE_DESIGN_2");

        let keys: Vec<&str> = deck.entries().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec![
                "INTERACTIVE_DESIGN_0",
                "INTERACTIVE_DESIGN_1",
                "INTERACTIVE_DESIGN_2"
            ]
        );
    }

    #[test]
    fn test_problem_definition_overwrites_prior_entry() {
        let mut deck = PlotDeck::new();
        let constraints = DesignConstraints::new(5.0, 20.0, 30.0, 7249);
        deck.add_problem_definition(&ObjectiveSpec::new("first"), &constraints);
        deck.add_problem_definition(&ObjectiveSpec::new("second"), &constraints);

        assert_eq!(deck.len(), 1);
        let payload = deck
            .get(PROBLEM_DEFINITION_KEY)
            .unwrap()
            .as_problem_definition()
            .unwrap();
        assert_eq!(payload["objective_name"], "second");
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut deck = PlotDeck::new();
        deck.add_new_plot(vec![lines_trace()], "Convergence", FigureOptions::new())
            .unwrap();
        deck.add_problem_definition(
            &ObjectiveSpec::new("free_energy").with_constant("temperature", 310.15),
            &DesignConstraints::new(5.0, 20.0, 30.0, 7249),
        );
        let mut values = Map::new();
        values.insert("edge_length".to_string(), json!(7.5));
        deck.store_interactive_points(values.clone());
        deck.store_interactive_points(values);

        deck.save_to_file("/tmp", "plotdeck_round_trip").unwrap();

        let mut loaded = PlotDeck::new();
        loaded
            .load_from_file("/tmp/plotdeck_round_trip.plots")
            .unwrap();
        let _ = fs::remove_file("/tmp/plotdeck_round_trip.plots");

        assert_eq!(loaded.len(), deck.len());
        for ((key_a, entry_a), (key_b, entry_b)) in deck.entries().zip(loaded.entries()) {
            assert_eq!(key_a, key_b);
            assert_eq!(entry_a, entry_b);
        }
        assert_eq!(loaded.next_design_index(), 2);
        assert_eq!(
            loaded.store_interactive_points(Map::new()),
            "INTERACTIVE_DESIGN_2"
        );
    }

    #[test]
    fn test_counter_restore_takes_the_last_design_key_in_order() {
        let document = json!({
            "INTERACTIVE_DESIGN_5": {"edge_length": 9.0},
            "INTERACTIVE_DESIGN_2": {"edge_length": 7.0},
        })
        .to_string();

        let mut deck = PlotDeck::new();
        deck.load_from_json(&document).unwrap();

        // Document order wins over the numeric maximum.
        assert_eq!(deck.next_design_index(), 3);
        assert_eq!(deck.store_interactive_points(Map::new()), "INTERACTIVE_DESIGN_3");
    }

    #[test]
    fn test_load_without_design_keys_resets_numbering() {
        let mut deck = PlotDeck::new();
        deck.store_interactive_points(Map::new());
        deck.store_interactive_points(Map::new());

        deck.load_from_json("{}").unwrap();
        assert!(deck.is_empty());
        assert_eq!(deck.next_design_index(), 0);
        assert_eq!(deck.store_interactive_points(Map::new()), "INTERACTIVE_DESIGN_0");
    }

    #[test]
    fn test_load_replaces_the_whole_registry() {
        let mut deck = PlotDeck::new();
        deck.add_new_plot(vec![lines_trace()], "Old figure", FigureOptions::new())
            .unwrap();

        let record = FigureRecord {
            title: "New figure".to_string(),
            closeable: false,
            description: "loaded".to_string(),
            settings_bar: "scatter".to_string(),
            data: "{}".to_string(),
        };
        let document = serde_json::to_string(&json!({"New figure": record})).unwrap();
        deck.load_from_json(&document).unwrap();

        assert_eq!(deck.len(), 1);
        assert!(!deck.contains("Old figure"));
        assert!(deck.contains("New figure"));
    }

    #[test]
    fn test_malformed_documents_are_rejected() {
        let mut deck = PlotDeck::new();
        assert!(matches!(
            deck.load_from_json("[1, 2, 3]"),
            Err(PlotDeckError::MalformedDocument(_))
        ));
        assert!(matches!(
            deck.load_from_json(r#"{"Window": {"_title": "Window"}}"#),
            Err(PlotDeckError::MalformedDocument(_))
        ));
        // A failed load keeps the previous registry.
        assert!(deck.is_empty());
    }

    #[test]
    fn test_registry_document_is_pretty_printed() {
        let mut deck = PlotDeck::new();
        deck.store_interactive_points(Map::new());
        let document = deck.to_json().unwrap();
        assert!(document.contains("\n  \"INTERACTIVE_DESIGN_0\""));
    }
}
