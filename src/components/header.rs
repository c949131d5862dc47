use crate::app::state::AppState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SEP_RIGHT: &str = "\u{e0b0}";

pub struct Header<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Segment background colors for separator transitions
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let view_bg = self.theme.header_view.bg.unwrap_or(Color::Reset);
        let path_bg = self.theme.header_path.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let title = self.state.current_view_title().unwrap_or("Unknown view");

        let spans = vec![
            Span::styled(" STAFFDESK ", self.theme.header_logo),
            Span::styled(SEP_RIGHT, Style::default().fg(logo_bg).bg(view_bg)),
            Span::styled(format!(" {title} "), self.theme.header_view),
            Span::styled(SEP_RIGHT, Style::default().fg(view_bg).bg(path_bg)),
            Span::styled(format!(" {} ", self.state.current_view), self.theme.header_path),
            Span::styled(SEP_RIGHT, Style::default().fg(path_bg).bg(base_bg)),
            Span::styled(" ".repeat(area.width as usize), self.theme.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
