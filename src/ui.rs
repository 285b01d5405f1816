use std::fmt::Display;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Widget, Wrap},
    Frame,
};

use crate::app::{App, Tab};
use crate::braille::BrailleCanvas;
use crate::dropdown::Dropdown;
use crate::map::{ColorScale, DisplaySettings, MapLayers};

const HEADER_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;
const LEGEND_HEIGHT: u16 = 1;
const SELECTOR_WIDTH: u16 = 32;

/// Header, body and status bar
fn layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Map block and legend row inside the body
fn map_areas(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(LEGEND_HEIGHT)])
        .split(body);
    (chunks[0], chunks[1])
}

fn map_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " FIFA World Cup Wins by Country ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
}

/// Cell area the braille map is drawn into, for a given terminal size.
/// Mouse handling uses this to convert cells to map pixels.
pub fn map_inner_area(area: Rect) -> Rect {
    let (_, body, _) = layout(area);
    let (map, _) = map_areas(body);
    map_block().inner(map)
}

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let (header, body, status) = layout(frame.area());

    render_header(frame, app, header);
    match app.tab {
        Tab::Map => render_map(frame, app, body),
        Tab::CountryWins => render_selector(
            frame,
            body,
            "Select a country:",
            "Select a country",
            &app.country_select,
            app.country_output.as_deref(),
        ),
        Tab::YearResult => render_selector(
            frame,
            body,
            "Select a year:",
            "Select a year",
            &app.year_select,
            app.year_output.as_deref(),
        ),
    }
    render_status_bar(frame, app, status);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " FIFA World Cup Finals Dashboard ",
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ))
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}

fn render_map(frame: &mut Frame, app: &App, body: Rect) {
    let (map_area, legend_area) = map_areas(body);
    let block = map_block();
    let inner = block.inner(map_area);
    frame.render_widget(block, map_area);

    // Braille gives 2x4 resolution per character
    let mut viewport = app.viewport.clone();
    viewport.width = inner.width as usize * 2;
    viewport.height = inner.height as usize * 4;

    let layers = app
        .map_renderer
        .render(inner.width as usize, inner.height as usize, &viewport, &app.shading);

    let cursor_pos = app.mouse_pixel.and_then(|(px, py)| {
        let cx = (px / 2) as u16;
        let cy = (py / 4) as u16;
        (cx < inner.width && cy < inner.height).then_some((cx, cy))
    });

    frame.render_widget(MapWidget { layers, cursor_pos }, inner);
    render_legend(frame, &app.shading.scale, legend_area);
}

/// Braille map with colored fills and labels overlaid
struct MapWidget {
    layers: MapLayers,
    cursor_pos: Option<(u16, u16)>,
}

impl MapWidget {
    fn render_layer(canvas: &BrailleCanvas, color: Color, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                if let Some(ch) = canvas.glyph(col as usize, row as usize) {
                    buf[(area.x + col, area.y + row)].set_char(ch).set_fg(color);
                }
            }
        }
    }
}

impl Widget for MapWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Self::render_layer(&self.layers.outlines, Color::DarkGray, area, buf);
        for (color, canvas) in &self.layers.fills {
            Self::render_layer(canvas, *color, area, buf);
        }

        let label_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        for (lx, ly, text) in &self.layers.labels {
            if *ly >= area.height || *lx >= area.width {
                continue;
            }
            let max_len = (area.width - *lx) as usize;
            for (i, ch) in text.chars().take(max_len).enumerate() {
                buf[(area.x + *lx + i as u16, area.y + *ly)].set_char(ch).set_style(label_style);
            }
        }

        if let Some((cx, cy)) = self.cursor_pos {
            buf[(area.x + cx, area.y + cy)].set_char('╋').set_fg(Color::Cyan);
        }
    }
}

fn render_legend(frame: &mut Frame, scale: &ColorScale, area: Rect) {
    let mut spans = vec![Span::styled(" Wins ", Style::default().fg(Color::DarkGray))];
    for tick in scale.ticks() {
        spans.push(Span::styled("███", Style::default().fg(scale.color(tick as f64))));
        spans.push(Span::styled(format!(" {tick}  "), Style::default().fg(Color::Gray)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_selector<T: Display>(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    placeholder: &str,
    select: &Dropdown<T>,
    output: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SELECTOR_WIDTH), Constraint::Min(10)])
        .split(area);

    let current = select
        .value()
        .map(|v| v.to_string())
        .unwrap_or_else(|| placeholder.to_string());
    let search = if select.filter().is_empty() {
        Line::from(Span::styled(current, Style::default().fg(Color::Yellow)))
    } else {
        Line::from(vec![
            Span::styled("/", Style::default().fg(Color::DarkGray)),
            Span::styled(select.filter().to_string(), Style::default().fg(Color::White)),
            Span::styled("▏", Style::default().fg(Color::DarkGray)),
        ])
    };

    let selector_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(format!(" {label} "), Style::default().fg(Color::Cyan)));
    let selector_inner = selector_block.inner(chunks[0]);
    frame.render_widget(selector_block, chunks[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(selector_inner);
    frame.render_widget(Paragraph::new(search), rows[0]);

    let items: Vec<ListItem> = select
        .visible()
        .into_iter()
        .map(|idx| {
            let marker = if select.selected_index() == Some(idx) { "● " } else { "  " };
            ListItem::new(format!("{marker}{}", select.options()[idx]))
        })
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("›");
    let mut state = ListState::default().with_selected(Some(select.cursor()));
    frame.render_stateful_widget(list, rows[1], &mut state);

    let text = output.unwrap_or("");
    let output_widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(output_widget, chunks[1]);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hint = Style::default().fg(Color::DarkGray);
    let status = match app.tab {
        Tab::Map => {
            let mut spans = vec![
                Span::styled(" Zoom: ", hint),
                Span::styled(app.zoom_level(), Style::default().fg(Color::Yellow)),
                Span::raw(" "),
            ];
            spans.extend(layer_toggles(&app.map_renderer.settings));
            spans.extend([
                Span::styled("| ", hint),
                Span::styled(
                    app.hover_text().unwrap_or_else(|| app.center_coords()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(" | hjkl:pan +/-:zoom r:fit tab:next q:quit", hint),
            ]);
            Line::from(spans)
        }
        Tab::CountryWins | Tab::YearResult => Line::from(Span::styled(
            " type:search ↑↓:move enter:select del:clear tab:next esc:quit",
            hint,
        )),
    };

    frame.render_widget(Paragraph::new(status), area);
}

/// Layer toggles with their keys; green when the layer is on.
/// Labels use `L` only, since `l` pans.
fn layer_toggles(settings: &DisplaySettings) -> [Span<'static>; 3] {
    let toggle = |on: bool, text: &'static str| {
        Span::styled(
            text,
            Style::default().fg(if on { Color::Green } else { Color::DarkGray }),
        )
    };
    [
        toggle(settings.show_borders, "[B]order "),
        toggle(settings.show_coastlines, "[C]oast "),
        toggle(settings.show_labels, "[L]abels "),
    ]
}
