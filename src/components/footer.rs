use crate::app::state::AppState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const HINT_DESC: &str = " Command palette ";

/// Cells covered by the palette hint at the right edge of the footer.
pub fn palette_hint_area(area: Rect, toggle_label: &str) -> Rect {
    let width = (hint_spans(toggle_label)
        .iter()
        .map(Span::width)
        .sum::<usize>() as u16)
        .min(area.width);
    Rect::new(area.right().saturating_sub(width), area.y, width, area.height.min(1))
}

fn hint_spans(toggle_label: &str) -> [Span<'static>; 2] {
    [
        Span::raw(format!(" {toggle_label} ")),
        Span::raw(HINT_DESC),
    ]
}

pub struct Footer<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let status_span = if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let toggle_label = state.keymap.toggle_label();
        let hint_area = palette_hint_area(area, &toggle_label);
        let left_area = Rect {
            width: area.width - hint_area.width,
            ..area
        };

        let recent = state.palette.recency().len();
        let counts = Span::styled(
            format!(" {} entries · {recent} recent ", state.palette.catalog().len()),
            theme.footer_segment_val,
        );
        let mut spans = vec![status_span];
        // The counts go first when space runs out; the hint keeps its cells.
        if spans[0].width() + 1 + counts.width() <= left_area.width as usize {
            spans.push(Span::raw(" "));
            spans.push(counts);
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(left_area, buf);

        let [key, desc] = hint_spans(&toggle_label);
        Paragraph::new(Line::from(vec![
            key.style(theme.footer_segment_key),
            desc.style(theme.footer_segment_val),
        ]))
        .style(theme.footer)
        .render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_area_hugs_right_edge() {
        let area = Rect::new(0, 23, 80, 1);
        let hint = palette_hint_area(area, "Ctrl+K");
        assert_eq!(hint.right(), 80);
        assert_eq!(hint.width as usize, " Ctrl+K ".len() + HINT_DESC.len());
        assert_eq!(hint.y, 23);
    }

    fn row_text(buf: &Buffer, area: Rect) -> String {
        (area.left()..area.right())
            .map(|x| buf[(x, area.y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_narrow_footer_keeps_hint_under_its_click_area() {
        let state = AppState::default();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        Footer {
            state: &state,
            theme: &Theme::default(),
        }
        .render(area, &mut buf);

        let hint = palette_hint_area(area, &state.keymap.toggle_label());
        assert_eq!(row_text(&buf, hint), " Ctrl+K  Command palette ");
        let left = row_text(&buf, Rect::new(0, 0, hint.x, 1));
        assert!(left.contains("READY"));
        assert!(!left.contains("entries"));
    }

    #[test]
    fn test_wide_footer_shows_counts() {
        let state = AppState::default();
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        Footer {
            state: &state,
            theme: &Theme::default(),
        }
        .render(area, &mut buf);
        assert!(row_text(&buf, area).contains("0 entries · 0 recent"));
    }
}
