use clap::ValueEnum;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameTheme {
    Classic,
    Monokai,
    Dracula,
    Nord,
    HighContrast,
}

pub struct ThemeColors {
    pub background: Color,
    pub border: Color,
    pub text: Color,
    pub accent: Color,
    /// Selected menu entry.
    pub highlight: Color,
    pub paddle: Color,
    pub ball: Color,
}

impl GameTheme {
    pub fn colors(&self) -> ThemeColors {
        match self {
            GameTheme::Classic => ThemeColors {
                background: Color::Black,
                border: Color::Gray,
                text: Color::White,
                accent: Color::Gray,
                highlight: Color::Red,
                paddle: Color::White,
                ball: Color::White,
            },
            GameTheme::Monokai => ThemeColors {
                background: Color::Reset,
                border: Color::Rgb(249, 38, 114), // pink
                text: Color::Rgb(248, 248, 242),
                accent: Color::Rgb(166, 226, 46), // green
                highlight: Color::Rgb(230, 219, 116),
                paddle: Color::Rgb(102, 217, 239), // cyan
                ball: Color::Rgb(255, 95, 135),
            },
            GameTheme::Dracula => ThemeColors {
                background: Color::Reset,
                border: Color::Rgb(255, 121, 198),
                text: Color::Rgb(248, 248, 242),
                accent: Color::Rgb(189, 147, 249), // purple
                highlight: Color::Rgb(241, 250, 140),
                paddle: Color::Rgb(80, 250, 123),
                ball: Color::Rgb(255, 85, 85),
            },
            GameTheme::Nord => ThemeColors {
                background: Color::Reset,
                border: Color::Rgb(136, 192, 208),
                text: Color::Rgb(216, 222, 233),
                accent: Color::Rgb(143, 188, 187),
                highlight: Color::Rgb(235, 203, 139),
                paddle: Color::Rgb(94, 129, 172),
                ball: Color::Rgb(191, 97, 106),
            },
            GameTheme::HighContrast => ThemeColors {
                background: Color::Black,
                border: Color::White,
                text: Color::White,
                accent: Color::Yellow,
                highlight: Color::Yellow,
                paddle: Color::Rgb(0, 255, 255),
                ball: Color::Rgb(255, 0, 0),
            },
        }
    }
}
