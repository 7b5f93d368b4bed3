//! Row styling.
//!
//! Rows are painted with their own background color; the floating ghost uses
//! a fixed neutral background so it reads as "lifted" over any row.

use crate::model::RowColor;
use ratatui::style::{Color, Modifier, Style};

/// Background of the floating ghost row.
pub const GHOST_BACKGROUND: Color = Color::Rgb(0xF2, 0xF2, 0xF2);

/// Luma above which labels switch to dark text.
const LIGHT_BACKGROUND_LUMA: u8 = 140;

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled when the `NO_COLOR` environment variable is set
/// (any value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Read `NO_COLOR` from the environment.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("NO_COLOR").is_none())
    }

    /// Explicit setting.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== RowStyles =====

/// Styles for the parts of the list.
#[derive(Debug, Clone, Copy)]
pub struct RowStyles {
    colors: ColorConfig,
}

impl RowStyles {
    /// Styles honoring `colors`.
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    /// A resting row filled with `color`.
    pub fn row(&self, color: Option<RowColor>) -> Style {
        match (self.colors.colors_enabled(), color) {
            (true, Some(color)) => Style::default()
                .bg(Color::Rgb(color.r, color.g, color.b))
                .fg(label_color(color)),
            _ => Style::default(),
        }
    }

    /// The handle strip of a resting row.
    pub fn handle(&self, color: Option<RowColor>) -> Style {
        self.row(color).add_modifier(Modifier::BOLD)
    }

    /// The lifted row's floating copy.
    pub fn ghost(&self) -> Style {
        if self.colors.colors_enabled() {
            Style::default()
                .bg(GHOST_BACKGROUND)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        }
    }

    /// The slot the lifted row left behind.
    pub fn placeholder(&self) -> Style {
        Style::default()
    }

    /// Title and status bars.
    pub fn bar(&self) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(Color::Gray)
        } else {
            Style::default()
        }
    }
}

impl Default for RowStyles {
    fn default() -> Self {
        Self::new(ColorConfig::from_env())
    }
}

fn label_color(background: RowColor) -> Color {
    if background.luma() > LIGHT_BACKGROUND_LUMA {
        Color::Black
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_style_uses_row_color_as_background() {
        let styles = RowStyles::new(ColorConfig::new(true));
        let style = styles.row(Some(RowColor::new(10, 20, 30)));
        assert_eq!(style.bg, Some(Color::Rgb(10, 20, 30)));
        assert_eq!(style.fg, Some(Color::White), "Dark rows get light labels");
    }

    #[test]
    fn light_rows_get_dark_labels() {
        let styles = RowStyles::new(ColorConfig::new(true));
        let style = styles.row(Some(RowColor::new(250, 250, 250)));
        assert_eq!(style.fg, Some(Color::Black));
    }

    #[test]
    fn ghost_uses_neutral_background() {
        let styles = RowStyles::new(ColorConfig::new(true));
        assert_eq!(styles.ghost().bg, Some(GHOST_BACKGROUND));
    }

    #[test]
    fn disabled_colors_produce_plain_rows() {
        let styles = RowStyles::new(ColorConfig::new(false));
        assert_eq!(styles.row(Some(RowColor::new(10, 20, 30))), Style::default());
        assert_eq!(styles.ghost().bg, None);
    }

    #[test]
    fn unknown_row_color_is_plain() {
        let styles = RowStyles::new(ColorConfig::new(true));
        assert_eq!(styles.row(None), Style::default());
    }
}
