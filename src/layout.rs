//! Precomputed default figure stylesheets.
//!
//! A deck owns one 2-D and one 3-D default layout, both derived from its
//! [`Theme`] at construction time. The 2-D stylesheet draws mirrored axis
//! lines with no grid on a transparent plot area; the 3-D stylesheet hides
//! the axis chrome entirely and collapses the margins so the scene fills the
//! figure. Figures submitted with an explicit layout bypass both.

use plotly::common::{Font, Title};
use plotly::layout::{Axis, Layout, LayoutScene, Margin};

use crate::style::Theme;

impl Theme {
    fn themed_font(&self, size: f64) -> Font {
        Font::new()
            .family(&self.font_family)
            .size(size as usize)
            .color(self.font_color.clone())
    }

    fn planar_axis(&self) -> Axis {
        Axis::new()
            .line_color(self.axis_line_color.clone())
            .line_width(self.axis_line_width as usize)
            .mirror(self.mirror_axes)
            .tick_font(self.themed_font(self.tick_font_size))
            .show_grid(self.show_grid)
            .grid_color(self.grid_color.clone())
            .zero_line(self.zero_lines)
    }

    fn spatial_axis(&self, title: &str) -> Axis {
        Axis::new()
            .title(Title::with_text(title).font(self.themed_font(self.axis_title_font_size)))
            .visible(false)
            .tick_font(self.themed_font(self.tick_font_size))
            .show_tick_labels(false)
            .show_grid(self.show_grid)
            .grid_color(self.grid_color.clone())
            .zero_line(false)
    }

    /// Default stylesheet for figures made of 2-D traces.
    pub fn to_2d_layout(&self) -> Layout {
        Layout::new()
            .x_axis(self.planar_axis())
            .y_axis(self.planar_axis())
            .plot_background_color(self.plot_background.clone())
            .paper_background_color(self.paper_background.clone())
            .auto_size(false)
            .width(self.width)
            .height(self.height)
            .font(self.themed_font(self.font_size))
    }

    /// Default stylesheet for figures made of 3-D traces.
    ///
    /// The scene axes are titled X/Y/Z but kept invisible; backgrounds are
    /// transparent and the margins are zeroed so the scene uses the whole
    /// figure area.
    pub fn to_3d_layout(&self) -> Layout {
        Layout::new()
            .scene(
                LayoutScene::new()
                    .x_axis(self.spatial_axis("X"))
                    .y_axis(self.spatial_axis("Y"))
                    .z_axis(self.spatial_axis("Z")),
            )
            .plot_background_color(self.plot_background.clone())
            .paper_background_color(self.plot_background.clone())
            .margin(Margin::new().left(0).right(0).bottom(0).top(0))
            .font(self.themed_font(self.font_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2d_layout_academic_constants() {
        let layout = Theme::academic().to_2d_layout();
        let value = serde_json::to_value(&layout).unwrap();

        assert_eq!(value["width"], 521);
        assert_eq!(value["height"], 318);
        assert_eq!(value["autosize"], false);
        assert_eq!(value["plot_bgcolor"], "rgba(0, 0, 0, 0)");
        assert_eq!(value["paper_bgcolor"], "rgba(255,255,255, 1)");
        assert_eq!(value["font"]["family"], "Helvetica");
        assert_eq!(value["font"]["size"], 16);
        assert_eq!(value["font"]["color"], "black");
    }

    #[test]
    fn test_2d_layout_axis_chrome() {
        let layout = Theme::academic().to_2d_layout();
        let value = serde_json::to_value(&layout).unwrap();

        for axis in ["xaxis", "yaxis"] {
            assert_eq!(value[axis]["linecolor"], "rgba(0, 0, 0, 1)");
            assert_eq!(value[axis]["linewidth"], 2);
            assert_eq!(value[axis]["mirror"], true);
            assert_eq!(value[axis]["showgrid"], false);
            assert_eq!(value[axis]["gridcolor"], "black");
            assert_eq!(value[axis]["zeroline"], false);
            assert_eq!(value[axis]["tickfont"]["size"], 16);
        }
    }

    #[test]
    fn test_3d_layout_hides_axes_and_margins() {
        let layout = Theme::academic().to_3d_layout();
        let value = serde_json::to_value(&layout).unwrap();

        for (axis, title) in [("xaxis", "X"), ("yaxis", "Y"), ("zaxis", "Z")] {
            let axis = &value["scene"][axis];
            assert_eq!(axis["title"]["text"], title);
            assert_eq!(axis["title"]["font"]["size"], 18);
            assert_eq!(axis["visible"], false);
            assert_eq!(axis["showticklabels"], false);
            assert_eq!(axis["showgrid"], false);
        }
        for side in ["l", "r", "b", "t"] {
            assert_eq!(value["margin"][side], 0);
        }
        assert_eq!(value["paper_bgcolor"], "rgba(0, 0, 0, 0)");
    }
}
