//! 选择列表组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use ui_marker_core::FieldKind;

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染一个字段的选项列表
///
/// 光标行高亮，字段当前值前面标 `●`。
pub fn render(app: &App, frame: &mut Frame, area: Rect, kind: FieldKind) {
    let c = colors();
    let field = app.field(kind);
    let is_focused = app.focus.field() == kind;

    let mut title = vec![Span::styled(format!(" {kind} "), Styles::title())];
    if app.is_loading(kind) {
        title.push(Span::styled("loading… ", Style::default().fg(c.warning)));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            Styles::border_focused()
        } else {
            Styles::border()
        });

    let items: Vec<ListItem> = field
        .options()
        .iter()
        .map(|option| {
            let current = option.value == field.value();
            let marker = if current && field.is_selected() { "● " } else { "  " };
            let style = if option.is_sentinel() {
                Style::default().fg(c.muted)
            } else if current {
                Style::default().fg(c.success)
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(option.label.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(if is_focused {
        Styles::cursor()
    } else {
        Style::default()
    });

    let mut state = ListState::default().with_selected(Some(app.cursor(kind).index));
    frame.render_stateful_widget(list, area, &mut state);
}
