//! Ratatui widget that renders the demo list with a checkbox per row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::app::list::ListModel;
use crate::core::{RowIndex, Stroke, StrokeMode};

use super::theme::Theme;

/// Created fresh each frame.
pub struct ListWidget<'a> {
    list: &'a ListModel,
    stroke: Option<&'a Stroke>,
    block: Option<Block<'a>>,
}

impl<'a> ListWidget<'a> {
    pub fn new(list: &'a ListModel) -> Self {
        Self {
            list,
            stroke: None,
            block: None,
        }
    }

    /// Active stroke, used to mark its anchor row.
    pub fn stroke(mut self, stroke: Option<&'a Stroke>) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for ListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };

        let anchor = self.stroke.map(Stroke::anchor_row);
        let visible = self
            .list
            .items()
            .iter()
            .enumerate()
            .skip(self.list.offset())
            .take(inner.height as usize);

        for (i, (row, item)) in visible.enumerate() {
            let y = inner.y + i as u16;
            let checked = self.list.is_row_selected(row);

            let (checkbox, checkbox_style) = if checked {
                ("[x] ", Theme::checked_style())
            } else {
                ("[ ] ", Theme::checkbox_style())
            };
            let row_style = if checked {
                Theme::selected_row_style()
            } else {
                Theme::row_style()
            };

            let mut spans = vec![
                Span::styled(checkbox, checkbox_style),
                Span::styled(item.label.clone(), row_style),
            ];
            if anchor == Some(RowIndex(row)) {
                spans.push(Span::styled(" ◆", Theme::anchor_style()));
            }

            buf.set_line(inner.x, y, &Line::from(spans), inner.width);
        }
    }
}

/// Short description of the selector state for the status bar.
pub fn stroke_label(stroke: Option<&Stroke>, auto_scrolling: bool) -> String {
    match stroke {
        None => "idle".into(),
        Some(stroke) => {
            let verb = match stroke.mode() {
                StrokeMode::Select => "selecting",
                StrokeMode::Deselect => "deselecting",
            };
            let scrolling = if auto_scrolling { ", auto-scroll" } else { "" };
            format!(
                "{verb} from {} ({} rows{scrolling})",
                stroke.anchor_row(),
                stroke.commands()
            )
        }
    }
}
