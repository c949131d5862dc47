use crate::app::palette::PaletteState;
use crate::domain::catalog::EntryKind;
use crate::domain::query::{ResultGroup, ResultItem};
use crate::domain::recency::relative_label;
use crate::theme::Theme;
use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect, contains, draw_drop_shadow};

const WIDTH_PERCENT: u16 = 60;
const HEIGHT_PERCENT: u16 = 60;

/// One rendered row of the results area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteLine {
    Header(&'static str),
    Entry(usize), // Flattened result index
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub modal: Rect,
    pub query: Rect,
    pub separator: Rect,
    pub results: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteHit {
    Outside,
    Inside,
    Entry(usize),
}

pub fn palette_layout(area: Rect) -> PaletteLayout {
    let modal = centered_rect(WIDTH_PERCENT, HEIGHT_PERCENT, area);
    let inner = Block::default().borders(Borders::ALL).inner(modal);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Query input
            Constraint::Length(1), // Separator
            Constraint::Min(0),    // Results
        ])
        .split(inner);

    PaletteLayout {
        modal,
        query: rows[0],
        separator: rows[1],
        results: rows[2],
    }
}

pub fn result_lines(groups: &[ResultGroup]) -> Vec<PaletteLine> {
    let mut lines = Vec::new();
    let mut index = 0;
    for group in groups {
        lines.push(PaletteLine::Header(group.label));
        for _ in &group.entries {
            lines.push(PaletteLine::Entry(index));
            index += 1;
        }
    }
    lines
}

/// First visible line given the previous one. The view only moves when the
/// active entry would fall outside it.
pub fn scroll_offset(lines: &[PaletteLine], active: usize, height: usize, current: usize) -> usize {
    if height == 0 {
        return 0;
    }
    let Some(active_line) = lines.iter().position(|l| *l == PaletteLine::Entry(active)) else {
        return 0;
    };
    let current = current.min(lines.len().saturating_sub(height));

    if active_line < current {
        // Bring the group header into view along with its first entry.
        match active_line.checked_sub(1).map(|i| lines[i]) {
            Some(PaletteLine::Header(_)) => active_line - 1,
            _ => active_line,
        }
    } else if active_line >= current + height {
        active_line + 1 - height
    } else {
        current
    }
}

/// Stores the offset for the upcoming frame so rendering and mouse hit
/// tests agree on what is under each row.
pub fn sync_scroll(state: &mut PaletteState, area: Rect) {
    let height = palette_layout(area).results.height as usize;
    let lines = result_lines(state.groups());
    let offset = scroll_offset(&lines, state.active_index(), height, state.scroll_offset());
    state.set_scroll_offset(offset);
}

/// Maps a terminal cell to what the palette shows there.
pub fn hit_test(state: &PaletteState, area: Rect, column: u16, row: u16) -> PaletteHit {
    let layout = palette_layout(area);
    if !contains(layout.modal, column, row) {
        return PaletteHit::Outside;
    }
    if !contains(layout.results, column, row) {
        return PaletteHit::Inside;
    }

    let lines = result_lines(state.groups());
    let height = layout.results.height as usize;
    let offset = scroll_offset(&lines, state.active_index(), height, state.scroll_offset());
    let line = offset + (row - layout.results.y) as usize;

    match lines.get(line) {
        Some(PaletteLine::Entry(idx)) => PaletteHit::Entry(*idx),
        _ => PaletteHit::Inside,
    }
}

fn icon_glyph(item: &ResultItem) -> &'static str {
    match item.entry.icon.as_deref() {
        Some("home") => "⌂",
        Some("briefcase") => "▤",
        Some("person") | Some("people") => "☺",
        Some("money") => "$",
        Some("chart") => "▲",
        Some("clock") => "◷",
        Some("star") => "★",
        Some("shield") => "◈",
        Some("plus") => "+",
        Some("power") => "⏻",
        _ => match item.entry.kind {
            EntryKind::Navigation { .. } => "→",
            EntryKind::Action { .. } => "»",
        },
    }
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a PaletteState,
}

impl CommandPaletteModal<'_> {
    fn entry_line(&self, item: &ResultItem, selected: bool, width: u16) -> Line<'static> {
        let style = if selected {
            self.theme.list_selected
        } else {
            self.theme.list_item
        };
        let prefix = if selected { "> " } else { "  " };

        let mut spans = vec![
            Span::styled(prefix, style),
            Span::styled(format!("{} ", icon_glyph(item)), self.theme.icon),
            Span::styled(format!("{:<22}", item.entry.title), style),
        ];
        if let Some(subtitle) = &item.entry.subtitle {
            spans.push(Span::styled(
                format!(" {subtitle}"),
                self.theme.list_item.add_modifier(Modifier::DIM),
            ));
        }

        if let Some(at) = item.selected_at {
            let badge = format!(" {} ", relative_label(at, Local::now()));
            let used: usize = spans.iter().map(Span::width).sum();
            let pad = (width as usize).saturating_sub(used + badge.len() + 1);
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(badge, self.theme.recent_badge));
        }

        Line::from(spans)
    }
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = palette_layout(area);
        if layout.modal.width == 0 || layout.modal.height == 0 {
            return;
        }

        draw_drop_shadow(buf, layout.modal, area);
        Clear.render(layout.modal, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMAND PALETTE ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("↑/↓", self.theme.footer_segment_key),
                Span::raw(" move "),
                Span::styled("Enter", self.theme.footer_segment_key),
                Span::raw(" open "),
                Span::styled("Esc", self.theme.footer_segment_key),
                Span::raw(" close "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        block.render(layout.modal, buf);

        let query_line = Line::from(vec![
            Span::styled(" > ", self.theme.footer_segment_key),
            Span::styled(self.state.query(), self.theme.footer_segment_val),
            Span::styled(
                "_",
                self.theme
                    .footer_segment_val
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]);
        buf.set_line(layout.query.x, layout.query.y, &query_line, layout.query.width);

        let separator = "─".repeat(layout.separator.width as usize);
        buf.set_string(
            layout.separator.x,
            layout.separator.y,
            separator,
            self.theme.border_focus,
        );

        let results = layout.results;
        if results.height == 0 {
            return;
        }

        if self.state.is_empty() {
            let no_results = Line::from(Span::styled(
                "  No results found.",
                self.theme.list_item.add_modifier(Modifier::DIM),
            ));
            buf.set_line(results.x, results.y, &no_results, results.width);
            return;
        }

        let lines = result_lines(self.state.groups());
        let active = self.state.active_index();
        let offset = scroll_offset(
            &lines,
            active,
            results.height as usize,
            self.state.scroll_offset(),
        );
        let flat = crate::domain::query::flatten(self.state.groups());

        for (row, line) in lines
            .iter()
            .skip(offset)
            .take(results.height as usize)
            .enumerate()
        {
            let y = results.y + row as u16;
            let rendered = match line {
                PaletteLine::Header(label) => Line::from(Span::styled(
                    format!(" {} ", label.to_uppercase()),
                    self.theme.group_label,
                )),
                PaletteLine::Entry(idx) => match flat.get(*idx) {
                    Some(item) => self.entry_line(item, *idx == active, results.width),
                    None => continue,
                },
            };
            buf.set_line(results.x, y, &rendered, results.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Catalog, CatalogEntry};
    use std::sync::Arc;

    fn palette(n: usize) -> PaletteState {
        let entries = (0..n).map(|i| CatalogEntry::navigation(format!("e{i}"), format!("Entry {i}"), format!("/{i}")));
        let mut state = PaletteState::new(Arc::new(Catalog::new(entries).unwrap()));
        state.open();
        state
    }

    #[test]
    fn test_result_lines_put_headers_before_entries() {
        let state = palette(2);
        assert_eq!(
            result_lines(state.groups()),
            vec![
                PaletteLine::Header("Navigation"),
                PaletteLine::Entry(0),
                PaletteLine::Entry(1),
            ]
        );
    }

    #[test]
    fn test_scroll_keeps_active_visible() {
        let state = palette(10);
        let lines = result_lines(state.groups());
        assert_eq!(scroll_offset(&lines, 0, 4, 0), 0);
        // Entry 5 sits on line 6; with 4 rows the view starts at line 3.
        assert_eq!(scroll_offset(&lines, 5, 4, 0), 3);
        assert_eq!(scroll_offset(&lines, 5, 0, 0), 0);
        // Already visible: the view stays put.
        assert_eq!(scroll_offset(&lines, 3, 4, 3), 3);
        // Scrolling back to the first entry also shows its header.
        assert_eq!(scroll_offset(&lines, 0, 4, 5), 0);
    }

    #[test]
    fn test_hover_in_scrolled_list_keeps_view() {
        let mut state = palette(30);
        let area = Rect::new(0, 0, 100, 30);
        let results = palette_layout(area).results;
        let x = results.x + 2;

        state.handle_key(crate::app::palette::PaletteKey::End);
        sync_scroll(&mut state, area);
        let top = match hit_test(&state, area, x, results.y) {
            PaletteHit::Entry(idx) => idx,
            other => panic!("expected an entry on the first row, got {other:?}"),
        };
        assert!(top > 0);

        state.hover(top);
        sync_scroll(&mut state, area);
        assert_eq!(state.active_index(), top);
        assert_eq!(hit_test(&state, area, x, results.y), PaletteHit::Entry(top));
    }

    #[test]
    fn test_hit_test_maps_rows_to_entries() {
        let state = palette(3);
        let area = Rect::new(0, 0, 100, 40);
        let layout = palette_layout(area);
        let x = layout.results.x + 2;

        assert_eq!(hit_test(&state, area, 0, 0), PaletteHit::Outside);
        assert_eq!(hit_test(&state, area, x, layout.query.y), PaletteHit::Inside);
        assert_eq!(hit_test(&state, area, x, layout.results.y), PaletteHit::Inside);
        assert_eq!(
            hit_test(&state, area, x, layout.results.y + 1),
            PaletteHit::Entry(0)
        );
        assert_eq!(
            hit_test(&state, area, x, layout.results.y + 3),
            PaletteHit::Entry(2)
        );
        assert_eq!(
            hit_test(&state, area, x, layout.results.y + 4),
            PaletteHit::Inside
        );
    }

    #[test]
    fn test_renders_no_results_message() {
        let mut state = palette(3);
        state.set_query("zzz");
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        CommandPaletteModal {
            theme: &Theme::default(),
            state: &state,
        }
        .render(area, &mut buf);

        let layout = palette_layout(area);
        let row: String = (layout.results.x..layout.results.right())
            .map(|x| buf[(x, layout.results.y)].symbol().to_string())
            .collect();
        assert!(row.contains("No results found."));
    }
}
