use crate::app::state::AppState;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Placeholder body for the active destination. The real screens live in
/// the web application; the shell only tracks where the user navigated.
pub struct ViewPanel<'a> {
    pub app_state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for ViewPanel<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let title = self
            .app_state
            .current_view_title()
            .unwrap_or("Unknown view")
            .to_uppercase();

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(title.clone(), self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(format!(" {title} "), self.theme.header_logo)),
            Line::from(""),
            Line::from(Span::styled(
                self.app_state.current_view.clone(),
                self.theme.dimmed,
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled(
                    format!(" {} ", self.app_state.keymap.toggle_label()),
                    self.theme.footer_segment_key,
                ),
                Span::raw(" to search destinations and actions"),
            ]),
        ];

        let height = lines.len() as u16;
        let centered = Rect {
            x: inner.x,
            y: (inner.y + inner.height / 2).saturating_sub(height / 2),
            width: inner.width,
            height: height.min(inner.height),
        };

        if centered.width > 0 && centered.height > 0 {
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(centered, buf);
        }
    }
}
