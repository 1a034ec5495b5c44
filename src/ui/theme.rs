use ratatui::style::{Color, Modifier, Style};

/// Color palette for the TUI, one per light/dark mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub selection_bg: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub purple: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            dark: false,
            background: Color::Rgb(0xFA, 0xFA, 0xFA),
            text: Color::Rgb(0x33, 0x33, 0x33),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            dim: Color::Rgb(0x88, 0x88, 0x88),
            border: Color::Rgb(0xBB, 0xBB, 0xBB),
            accent: Color::Rgb(0x19, 0x76, 0xD2),
            selection_bg: Color::Rgb(0xE3, 0xF2, 0xFD),
            red: Color::Rgb(0xD3, 0x2F, 0x2F),
            green: Color::Rgb(0x38, 0x8E, 0x3C),
            yellow: Color::Rgb(0xF5, 0x7C, 0x00),
            blue: Color::Rgb(0x19, 0x76, 0xD2),
            purple: Color::Rgb(0x7B, 0x1F, 0xA2),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            dark: true,
            background: Color::Rgb(0x12, 0x12, 0x12),
            text: Color::Rgb(0xE0, 0xE0, 0xE0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x75, 0x75, 0x75),
            border: Color::Rgb(0x42, 0x42, 0x42),
            accent: Color::Rgb(0x90, 0xCA, 0xF9),
            selection_bg: Color::Rgb(0x2C, 0x3E, 0x50),
            red: Color::Rgb(0xEF, 0x53, 0x50),
            green: Color::Rgb(0x66, 0xBB, 0x6A),
            yellow: Color::Rgb(0xFF, 0xCA, 0x28),
            blue: Color::Rgb(0x42, 0xA5, 0xF5),
            purple: Color::Rgb(0xCE, 0x93, 0xD8),
        }
    }

    #[must_use]
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Base style painted under every pane
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default().bg(self.selection_bg).add_modifier(Modifier::BOLD)
    }
}
