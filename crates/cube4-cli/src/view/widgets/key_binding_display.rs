use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Keys that trigger an action, and a short description of it.
pub type KeyBinding<'a> = (&'a [&'a str], &'a str);

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);
const DESCRIPTION_STYLE: Style = Style::new().fg(Color::White);

/// Single help line such as `←/→ Move | Space Drop`.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding<'a>],
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self { bindings }
    }

    pub fn line(&self) -> Line<'a> {
        let mut spans = vec![];
        for (i, &(keys, description)) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", SEPARATOR_STYLE));
            }
            let keys = keys.iter().map(|&key| Span::styled(key, KEY_STYLE));
            spans.extend(join_spans(keys, Span::styled("/", SEPARATOR_STYLE)));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(description, DESCRIPTION_STYLE));
        }
        Line::from(spans).centered()
    }
}

fn join_spans<'a>(
    items: impl Iterator<Item = Span<'a>>,
    separator: Span<'a>,
) -> Vec<Span<'a>> {
    let mut joined = vec![];
    for (i, item) in items.enumerate() {
        if i > 0 {
            joined.push(separator.clone());
        }
        joined.push(item);
    }
    joined
}

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.line().render(area, buf);
    }
}
