use cube4_engine::{BoardSize, Player};
use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{cell_display::*, key_binding_display::*, layer_display::*, session_display::*};

mod cell_display;
mod key_binding_display;
mod layer_display;
mod session_display;

mod color {
    use ratatui::style::Color;

    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const NAVY: Color = Color::Rgb(0, 0, 96);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use crate::view::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = fg_bg(color::GRAY, color::BLACK);
    pub const PLAYER_ONE: Style = fg_bg(color::RED, color::BLACK);
    pub const PLAYER_TWO: Style = fg_bg(color::YELLOW, color::BLACK);
    pub const GHOST: Style = fg_bg(color::WHITE, color::BLACK);
    pub const LAYER_BORDER: Style = Style::new().fg(color::BLUE);

    /// Background under the claw.
    pub const CLAW_BG: Color = color::NAVY;
    /// Background of a completed line.
    pub const WIN_BG: Color = color::GREEN;
    pub const FALLING: Modifier = Modifier::BOLD;
}

pub(crate) fn player_style(player: Player) -> ratatui::style::Style {
    match player {
        Player::One => style::PLAYER_ONE,
        Player::Two => style::PLAYER_TWO,
    }
}

/// Board extent in terminal cells. Board sizes are capped well below `u16::MAX`.
#[expect(clippy::cast_possible_truncation)]
fn board_extent(size: BoardSize) -> u16 {
    size.get() as u16
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
