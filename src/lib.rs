// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::large_stack_arrays)] // Helps avoid stack overflows
#![warn(clippy::box_collection)] // Warns on boxed `Vec`, `String`, etc.
#![warn(clippy::vec_box)] // Avoids using `Vec<Box<T>>` when unnecessary
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::let_unit_value)] // Avoids binding `()` to variables
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_safety_doc)] // Docs for `unsafe` functions
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![deny(missing_docs)] // Documentation is a must for release

//! # PlotDeck
//!
//! A convenience layer for producing styled, ready-to-render chart definitions for interactive plot viewers, built on [plotly.rs](https://docs.rs/plotly).
//!
//! ## Overview
//!
//! Scientific tools that hand figures to an external viewer need more than a
//! renderer: trace sets have to be validated, traces the caller never styled
//! need consistent colors and symbols, and whole figure collections have to
//! be written to disk and picked up again later. PlotDeck covers that middle
//! layer. A [`PlotDeck`] keeps an ordered registry of named figures, fills in
//! an academic styling theme (a colorblind-safe eight-color palette with
//! cycling marker shapes and dash patterns), carries a problem definition and
//! auto-numbered interactive design points alongside the figures, and saves
//! the lot as one pretty-printed `.plots` JSON document.
//!
//! ## Installation
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! plotdeck = "0.1.0"
//! ```
//!
//! or more easily with:
//! ```bash
//! cargo add plotdeck
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`PlotDeckResult`], with one error
//! variant per failure class:
//!
//! ```rust
//! use plotdeck::{PlotDeckError, PlotDeckResult};
//!
//! let result: PlotDeckResult<()> = Err(PlotDeckError::UnsupportedType(
//!     "'bar' traces are not currently supported.".to_string(),
//! ));
//!
//! match result {
//!     Ok(()) => {}
//!     Err(PlotDeckError::Validation(message)) => eprintln!("Rejected trace set: {message}"),
//!     Err(other) => eprintln!("Error: {other}"),
//! }
//! ```
//!
//! ## Quick Start
//!
//! ### Building a Figure
//!
//! ```rust
//! use plotdeck::{FigureOptions, PlotDeck, PlotTrace, TraceStyling};
//!
//! let trace = PlotTrace::scatter(
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![1.0, 2.0, 4.0, 8.0],
//!     "lines",
//!     TraceStyling::new(),
//! )
//! .unwrap();
//!
//! let mut deck = PlotDeck::new();
//! deck.add_new_plot(vec![trace], "Growth curve", FigureOptions::new())
//!     .unwrap();
//! assert!(deck.contains("Growth curve"));
//! ```
//!
//! The trace above carries no colors, so the deck assigns the first palette
//! color and dash pattern before the figure is serialized. Traces you style
//! yourself are left alone.
//!
//! ### Styling Traces
//!
//! ```rust
//! use plotdeck::{MarkerShape, MarkerStyle, PlotTrace, TraceStyling};
//!
//! let styling = TraceStyling::new()
//!     .with_marker(
//!         MarkerStyle::new()
//!             .with_color("firebrick")
//!             .with_size(10)
//!             .with_symbol(MarkerShape::Diamond),
//!     )
//!     .with_attr("opacity", 0.75);
//!
//! let trace = PlotTrace::scatter_y(vec![3.1, 2.7, 2.2], "markers", styling).unwrap();
//! assert_eq!(trace.tag(), "scatter");
//! ```
//!
//! Attribute names are checked at construction time; a typo such as
//! `with_attr("opactiy", ...)` fails with [`PlotDeckError::InvalidArgument`]
//! instead of silently producing a figure the viewer ignores.
//!
//! ### 3-D Figures
//!
//! ```rust
//! use plotdeck::{FigureOptions, PlotDeck, PlotTrace, TraceStyling};
//!
//! let t: Vec<f64> = (0..50).map(|i| i as f64 * 0.2).collect();
//! let x: Vec<f64> = t.iter().map(|t| t.cos()).collect();
//! let y: Vec<f64> = t.iter().map(|t| t.sin()).collect();
//!
//! let trace = PlotTrace::scatter3d(x, y, t, TraceStyling::new()).unwrap();
//! let mut deck = PlotDeck::new();
//! deck.add_new_plot(vec![trace], "Helix", FigureOptions::new())
//!     .unwrap();
//! ```
//!
//! 3-D figures automatically receive the scene layout (invisible axes, zero
//! margins). 2-D and 3-D traces can never share a figure.
//!
//! ### Problem Definitions and Design Points
//!
//! ```rust
//! use plotdeck::{DesignConstraints, ObjectiveSpec, PlotDeck};
//! use serde_json::{Map, json};
//!
//! let mut deck = PlotDeck::new();
//! deck.add_problem_definition(
//!     &ObjectiveSpec::new("free_energy").with_constant("temperature", 310.15),
//!     &DesignConstraints::new(5.0, 20.0, 30.0, 7249),
//! );
//!
//! let mut point = Map::new();
//! point.insert("edge_length".to_string(), json!(7.5));
//! assert_eq!(deck.store_interactive_points(point), "INTERACTIVE_DESIGN_0");
//! ```
//!
//! ### Saving and Loading
//!
//! ```rust,no_run
//! use plotdeck::{FigureOptions, PlotDeck, PlotTrace, TraceStyling};
//!
//! let mut deck = PlotDeck::new();
//! let trace = PlotTrace::scatter_y(vec![1.0, 0.4, 0.2], "lines", TraceStyling::new()).unwrap();
//! deck.add_new_plot(vec![trace], "Energy", FigureOptions::new())
//!     .unwrap();
//! deck.save_to_file("results", "run_01").unwrap();
//!
//! let mut restored = PlotDeck::new();
//! restored.load_from_file("results/run_01.plots").unwrap();
//! assert_eq!(restored.len(), 1);
//! ```
//!
//! Loading replaces the whole registry and resumes design-point numbering
//! where the document left off.
//!
//! ## Documentation
//!
//! Full API documentation is available at [docs.rs/plotdeck](https://docs.rs/plotdeck).
//!
//! ## License
//!
//! MIT License

mod deck;
mod error;
mod layout;
mod record;
mod style;
mod trace;

pub use crate::deck::{DECK_FILE_EXTENSION, FigureOptions, PlotDeck, SUPPORTED_TRACE_TYPES};
pub use crate::error::{PlotDeckError, PlotDeckResult};
pub use crate::record::{
    CustomConstraint, DEFAULT_DESCRIPTION, DESIGN_POINT_PREFIX, DeckEntry, DesignConstraints,
    DesignPoint, FigureRecord, ObjectiveSpec, PROBLEM_DEFINITION_KEY,
};
pub use crate::style::{DashPattern, LineStyle, MarkerOutline, MarkerShape, MarkerStyle, Theme};
pub use crate::trace::{PlotTrace, SCATTER_3D_TAG, SCATTER_TAG, TraceMode, TraceStyling};

pub use plotly::layout::Layout; // Re-export the layout type accepted by FigureOptions::with_layout
