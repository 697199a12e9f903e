//! Color palettes: the default cyber theme and the CRT monochrome variant.

use crate::view::colorize::TagColor;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub green: Color,
    pub blue: Color,
    pub red: Color,
    pub purple: Color,
    pub border: Color,
}

impl Theme {
    pub fn cyber() -> Self {
        Self {
            bg: Color::Rgb(8, 10, 8),
            fg: Color::Rgb(220, 230, 220),
            dim: Color::Rgb(120, 130, 120),
            green: Color::Rgb(0, 255, 65),
            blue: Color::Rgb(0, 170, 255),
            red: Color::Rgb(255, 60, 60),
            purple: Color::Rgb(190, 120, 255),
            border: Color::Rgb(40, 70, 40),
        }
    }

    /// Everything green, like a tired phosphor tube.
    pub fn crt() -> Self {
        Self {
            bg: Color::Rgb(4, 12, 4),
            fg: Color::Rgb(120, 255, 120),
            dim: Color::Rgb(40, 120, 40),
            green: Color::Rgb(0, 255, 65),
            blue: Color::Rgb(80, 220, 80),
            red: Color::Rgb(180, 255, 180),
            purple: Color::Rgb(80, 220, 80),
            border: Color::Rgb(30, 90, 30),
        }
    }

    pub fn for_crt_mode(crt: bool) -> Self {
        if crt {
            Self::crt()
        } else {
            Self::cyber()
        }
    }

    pub fn tag_color(&self, tag: TagColor) -> Color {
        match tag {
            TagColor::Green => self.green,
            TagColor::Blue => self.blue,
            TagColor::Red => self.red,
            TagColor::Purple => self.purple,
            TagColor::Default => self.dim,
        }
    }
}
