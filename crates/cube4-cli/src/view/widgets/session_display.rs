use std::iter;

use cube4_engine::{Coord, GameOutcome, GameSession, Player};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::view::widgets::{LayerDisplay, color, player_style, style};

const LAYER_SPACING: u16 = 1;

/// Status panel above every layer of the cube, top layer first.
///
/// Layers are laid out left to right and wrap onto further rows when the
/// terminal is too narrow to show them all side by side.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
    falling_piece: Option<(Coord, Player)>,
    ghost: Option<Coord>,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            falling_piece: None,
            ghost: None,
        }
    }

    pub fn falling_piece(self, coord: Coord, player: Player) -> Self {
        Self {
            falling_piece: Some((coord, player)),
            ..self
        }
    }

    pub fn ghost(self, coord: Coord) -> Self {
        Self {
            ghost: Some(coord),
            ..self
        }
    }

    fn status_style(&self) -> Style {
        match self.session.outcome() {
            Some(GameOutcome::Winner(player)) => {
                player_style(player).add_modifier(Modifier::BOLD)
            }
            Some(GameOutcome::Draw) => style::DEFAULT.add_modifier(Modifier::BOLD),
            None => player_style(self.session.current_player()),
        }
    }

    fn layer(&self, y: usize) -> LayerDisplay<'a> {
        let block = Block::bordered()
            .title(Line::from(format!("y={y}")).centered())
            .border_style(style::LAYER_BORDER)
            .style(style::DEFAULT);
        let mut layer = LayerDisplay::new(self.session.grid(), y).block(block);
        if !self.session.is_game_over() {
            layer = layer.claw(self.session.claw_position());
        }
        if let Some((coord, player)) = self.falling_piece {
            layer = layer.falling_piece(coord, player);
        }
        if let Some(coord) = self.ghost {
            layer = layer.ghost(coord);
        }
        if let Some(line) = self.session.winning_line() {
            layer = layer.winning_line(line);
        }
        layer
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.session.is_game_over() {
            color::GREEN
        } else if self.session.accepts_input() {
            color::WHITE
        } else {
            color::GRAY
        };
        let n = self.session.size();
        let line = Line::from(vec![
            Span::styled(self.session.status_message(), self.status_style()),
            Span::styled(
                format!("   claw {}", self.session.claw_position()),
                style::DEFAULT,
            ),
            Span::styled(format!("   {n}×{n}×{n}"), style::EMPTY),
        ])
        .centered();
        Paragraph::new(line)
            .block(
                Block::bordered()
                    .title(Line::from(" 3D FOUR IN A ROW ").centered())
                    .border_style(border_color)
                    .style(style::DEFAULT),
            )
            .render(area, buf);
    }

    fn render_layers(&self, area: Rect, buf: &mut Buffer) {
        let n = self.session.size().get();
        let (width, height) = {
            let sample = self.layer(0);
            (sample.width(), sample.height())
        };
        let per_row = usize::from((area.width / (width + LAYER_SPACING)).max(1));

        let layers = (0..n).rev().collect::<Vec<_>>();
        let rows = layers.chunks(per_row);
        let vertical = Layout::vertical(iter::repeat_n(Constraint::Length(height), rows.len()));

        for (row_area, ys) in iter::zip(vertical.split(area).iter(), rows) {
            let horizontal =
                Layout::horizontal(iter::repeat_n(Constraint::Length(width), ys.len()))
                    .flex(Flex::Center)
                    .spacing(LAYER_SPACING);
            for (layer_area, &y) in iter::zip(horizontal.split(*row_area).iter(), ys) {
                self.layer(y).render(*layer_area, buf);
            }
        }
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [status_area, cube_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
        self.render_status(status_area, buf);
        self.render_layers(cube_area, buf);
    }
}
