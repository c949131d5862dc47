use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Command Palette",
        &[
            (" ↑ / ↓", "Move the highlight (wraps around)"),
            (" Home / End", "Jump to first / last result"),
            (" Enter", "Open the highlighted entry"),
            (" Backspace", "Delete the last query character"),
            (" Esc", "Close the palette"),
        ],
    ),
    (
        "General",
        &[
            (" :", "Open the command palette"),
            (" t", "Switch theme"),
            (" ?", "Show this help"),
            (" q", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
    pub toggle_label: &'a str,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(60, 60, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.group_label;

        let mut rows = vec![
            Row::new(vec![
                Cell::from(Span::styled("Anywhere", category_style)),
                Cell::from(""),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(format!(" {}", self.toggle_label), key_style)),
                Cell::from(Span::styled("Open / close the command palette", desc_style)),
            ]),
        ];

        for (category, bindings) in SECTIONS {
            rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*category, category_style)),
                Cell::from(""),
            ]));
            for (key, desc) in *bindings {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*key, key_style)),
                    Cell::from(Span::styled(*desc, desc_style)),
                ]));
            }
        }

        let table = Table::new(
            rows,
            [Constraint::Percentage(30), Constraint::Percentage(70)],
        )
        .block(block);

        table.render(help_area, buf);
    }
}
