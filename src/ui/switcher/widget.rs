use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::i18n::Translator;
use crate::ui::switcher::state::SwitcherState;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, ACTIVE_LANGUAGE, BUTTON_TEXT, GLOBAL_BORDER, HEADER_TEXT};

/// Languages offered by the switcher: every catalog language except the
/// active one, in catalog order.
pub fn switcher_options(translator: &Translator) -> Vec<String> {
    translator
        .languages()
        .into_iter()
        .filter(|code| *code != translator.language())
        .map(str::to_string)
        .collect()
}

fn label_key(code: &str) -> String {
    format!("LanguageSwitcher.{code}")
}

pub struct LanguageSwitcher<'a> {
    translator: &'a Translator,
    state: SwitcherState,
}

impl<'a> LanguageSwitcher<'a> {
    pub fn new(translator: &'a Translator, state: SwitcherState) -> Self {
        Self { translator, state }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let t = self.translator;
        let active_key = label_key(t.language());
        let text_style = Style::default().fg(HEADER_TEXT);

        let status = Line::from(vec![
            Span::styled(t.t("LanguageSwitcher.used").to_string(), text_style),
            Span::styled(" ", text_style),
            Span::styled(
                t.t(&active_key).to_string(),
                Style::default()
                    .fg(ACTIVE_LANGUAGE)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let mut buttons = Vec::new();
        for (idx, code) in switcher_options(t).iter().enumerate() {
            if idx > 0 {
                buttons.push(Span::raw("  "));
            }
            let key = label_key(code);
            let style = if idx == self.state.focused {
                Style::default()
                    .fg(BUTTON_TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(BUTTON_TEXT)
            };
            buttons.push(Span::styled(
                format!("[{}] {}", idx + 1, t.t(&key)),
                style,
            ));
        }

        vec![status, Line::from(""), Line::from(buttons)]
    }
}

impl Widget for LanguageSwitcher<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .render(area, buf);
    }
}
