use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Block, Clear, Widget};
use unicode_display_width::width as display_width;

use crate::select::Select;

const CLEAR_ICON: &str = "×";
const OPEN_ICON: &str = "▲";
const CLOSED_ICON: &str = "▼";

/// Height of the control box, borders included
pub const CONTROL_HEIGHT: u16 = 3;

/// What a click on a rendered region does
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// The control box: open or close the list
    Control,
    /// The clear-all affordance
    ClearAll,
    /// The remove mark of a selected chip
    Remove(String),
    /// An option row
    Option(String),
}

/// A rectangle of the last render and the operation a click on it triggers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HitRegion {
    /// Area on screen
    pub area: Rect,
    /// Operation
    pub target: HitTarget,
}

/// Result of rendering a select widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectRender {
    /// Where the terminal cursor belongs (end of the input text)
    pub cursor: Position,
    /// Rows used, dropdown list included
    pub height: u16,
}

fn str_width(s: &str) -> u16 {
    u16::try_from(display_width(s)).unwrap_or(u16::MAX)
}

impl Select {
    /// Renders the control box and, when open, the option list below it
    ///
    /// Hit regions are recorded for [`Select::handle_mouse`].
    pub fn render_select(&mut self, area: Rect, buf: &mut Buffer) -> SelectRender {
        self.hits.clear();
        if area.height < CONTROL_HEIGHT || area.width < 6 {
            return SelectRender::default();
        }
        let theme = self.theme;
        let control = Rect::new(area.x, area.y, area.width, CONTROL_HEIGHT);
        let block = Block::bordered().border_style(theme.border);
        let inner = block.inner(control);
        Widget::render(Clear, control, buf);
        block.render(control, buf);

        // indicators on the right
        let arrow_x = inner.right() - 1;
        buf.set_string(
            arrow_x,
            inner.y,
            if self.open { OPEN_ICON } else { CLOSED_ICON },
            theme.indicator,
        );
        let mut content_width = inner.width.saturating_sub(2);
        if self.show_clear() && inner.width > 4 {
            let clear_x = arrow_x - 2;
            buf.set_string(clear_x, inner.y, CLEAR_ICON, theme.indicator);
            self.hits.push(HitRegion {
                area: Rect::new(clear_x, inner.y, 1, 1),
                target: HitTarget::ClearAll,
            });
            content_width = inner.width.saturating_sub(4);
        }

        // chips, then the input
        let mut x = inner.x;
        let end = inner.x + content_width;
        if self.options.multi {
            for opt in self.selection.iter() {
                let chip = format!("{} {}", opt.label, CLEAR_ICON);
                let width = str_width(&chip);
                if width > end.saturating_sub(x) {
                    break;
                }
                buf.set_string(x, inner.y, &chip, theme.chip);
                self.hits.push(HitRegion {
                    area: Rect::new(x + width - 1, inner.y, 1, 1),
                    target: HitTarget::Remove(opt.value.clone()),
                });
                x = x.saturating_add(width + 1);
            }
        }
        let value = self.display_value();
        let (text, style) = match self.placeholder() {
            Some(placeholder) if value.is_empty() => (placeholder, theme.placeholder),
            _ => (value, theme.query),
        };
        let room = usize::from(end.saturating_sub(x));
        let (text_end, _) = buf.set_stringn(x, inner.y, text, room, style);
        let cursor_x = if text == value { text_end } else { x };
        let cursor = Position::new(cursor_x.min(end), inner.y);

        let mut height = CONTROL_HEIGHT;
        if self.open {
            height += self.render_list(area, buf);
        }
        self.hits.push(HitRegion {
            area: control,
            target: HitTarget::Control,
        });
        trace!("rendered select, {} hit regions", self.hits.len());
        SelectRender { cursor, height }
    }

    fn render_list(&mut self, area: Rect, buf: &mut Buffer) -> u16 {
        let theme = self.theme;
        let available = area.height.saturating_sub(CONTROL_HEIGHT + 2);
        if available == 0 {
            return 0;
        }
        let filtered = self.filtered_options();
        let rows = u16::try_from(filtered.len()).unwrap_or(u16::MAX).clamp(1, available);
        let list_area = Rect::new(area.x, area.y + CONTROL_HEIGHT, area.width, rows + 2);
        let block = Block::bordered().border_style(theme.border);
        let inner = block.inner(list_area);
        Widget::render(Clear, list_area, buf);
        block.render(list_area, buf);

        if filtered.is_empty() {
            let msg = &self.options.no_results_message;
            let x = inner.x + inner.width.saturating_sub(str_width(msg)) / 2;
            buf.set_stringn(x, inner.y, msg, usize::from(inner.width), theme.no_results);
            return list_area.height;
        }

        let focused = self.focused();
        let offset = focused.saturating_sub(usize::from(rows) - 1);
        let mut regions = Vec::new();
        for (row, (idx, opt)) in filtered.iter().enumerate().skip(offset).take(usize::from(rows)).enumerate() {
            let y = inner.y + row as u16;
            let row_area = Rect::new(inner.x, y, inner.width, 1);
            let mut style = if opt.disabled { theme.disabled } else { theme.normal };
            if idx == focused {
                style = style.patch(theme.focused);
                buf.set_style(row_area, style);
            }
            buf.set_stringn(inner.x, y, &opt.label, usize::from(inner.width), style);
            regions.push(HitRegion {
                area: row_area,
                target: HitTarget::Option(opt.value.clone()),
            });
        }
        self.hits.extend(regions);
        list_area.height
    }

    /// Maps a mouse event onto the regions of the last render
    ///
    /// Left clicks trigger the operation of the region under the pointer; the wheel
    /// moves the focus.
    pub fn handle_mouse(&mut self, mouse: &MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(target) = self.hits.iter().find(|h| h.area.contains(pos)).map(|h| h.target.clone())
                else {
                    return;
                };
                debug!("click on {target:?}");
                match target {
                    HitTarget::Control => self.toggle_open(),
                    HitTarget::ClearAll => self.clear_all(),
                    HitTarget::Remove(value) => {
                        if let Some(opt) = self.selection.get(&value).cloned() {
                            self.remove_selected(&opt);
                        }
                    }
                    HitTarget::Option(value) => self.select_value(&value),
                }
            }
            MouseEventKind::ScrollUp => self.focus_previous(),
            MouseEventKind::ScrollDown => self.focus_next(),
            _ => (),
        }
    }
}

impl Widget for &mut Select {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_select(area, buf);
    }
}
