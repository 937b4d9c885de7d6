use cube4_engine::{Cell, Player};
use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

use crate::view::widgets::{player_style, style};

/// One grid cell drawn as a centred symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        3
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_cell(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Self::new(style::EMPTY, "·"),
            Cell::Occupied(player) => Self::new(player_style(player), "●"),
        }
    }

    pub fn falling(player: Player) -> Self {
        Self::new(player_style(player).add_modifier(style::FALLING), "◉")
    }

    /// Where the falling piece will come to rest.
    pub fn ghost() -> Self {
        Self::new(style::GHOST, "○")
    }

    pub fn background(self, color: Color) -> Self {
        Self {
            style: self.style.bg(color),
            ..self
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Fill the whole area so highlighted backgrounds cover the padding too
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
