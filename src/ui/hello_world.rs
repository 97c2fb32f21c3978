//! The "Hello World" screen: logo, greeting, language switcher, footer.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::i18n::Translator;
use crate::ui::layout::{header_columns, layout_regions};
use crate::ui::logo::{logo_width, LOGO};
use crate::ui::switcher::{LanguageSwitcher, SwitcherState};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, LOGO_COLOR, SUBTITLE_TEXT};

pub struct HelloWorld<'a> {
    translator: &'a Translator,
    switcher: SwitcherState,
}

impl<'a> HelloWorld<'a> {
    pub fn new(translator: &'a Translator, switcher: SwitcherState) -> Self {
        Self {
            translator,
            switcher,
        }
    }

    fn logo(&self) -> Paragraph<'static> {
        let style = Style::default().fg(LOGO_COLOR);
        let lines: Vec<Line> = LOGO
            .iter()
            .map(|line| Line::from(Span::styled(*line, style)))
            .collect();
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    fn titles(&self) -> Paragraph<'static> {
        let t = self.translator;
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                t.t("Application.title").to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                t.t("Application.subTitle").to_string(),
                Style::default().fg(SUBTITLE_TEXT),
            )),
        ];
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    fn footer(&self) -> Paragraph<'static> {
        let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        Paragraph::new(Line::from(Span::styled(
            self.translator.t("Application.footer").to_string(),
            style,
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Widget for HelloWorld<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (header, body, footer) = layout_regions(area);
        let (logo_area, title_area) = header_columns(header, logo_width());

        self.logo().render(logo_area, buf);
        self.titles().render(title_area, buf);
        LanguageSwitcher::new(self.translator, self.switcher).render(body, buf);
        self.footer().render(footer, buf);
    }
}
