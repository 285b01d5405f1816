use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use crate::dropdown::Dropdown;
use crate::map::{ColorScale, MapRenderer, Shading, Viewport};
use crate::query::QueryService;
use crate::results::ResultsStore;
use crate::ui;

/// Dashboard tabs, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Map,
    CountryWins,
    YearResult,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Map, Tab::CountryWins, Tab::YearResult];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Map => "Choropleth Map",
            Tab::CountryWins => "Country Wins",
            Tab::YearResult => "Yearly Final Result",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Application state
pub struct App<'a> {
    pub queries: QueryService<'a>,
    pub tab: Tab,
    pub viewport: Viewport,
    pub map_renderer: MapRenderer,
    pub shading: Shading,
    pub country_select: Dropdown<String>,
    pub year_select: Dropdown<i32>,
    /// Last sentence shown under each selector; kept on NoUpdate
    pub country_output: Option<String>,
    pub year_output: Option<String>,
    pub should_quit: bool,
    /// Last mouse position for drag tracking
    pub last_mouse: Option<(u16, u16)>,
    /// Current mouse position, in map pixels
    pub mouse_pixel: Option<(i32, i32)>,
    screen: Rect,
}

impl<'a> App<'a> {
    /// Dashboard over `store`, sized for a `width` x `height` terminal
    pub fn new(store: &'a ResultsStore, map_renderer: MapRenderer, width: u16, height: u16) -> Self {
        let screen = Rect::new(0, 0, width, height);
        // Braille gives 2x4 resolution per character
        let inner = ui::map_inner_area(screen);

        let mut app = Self {
            queries: QueryService::new(store),
            tab: Tab::Map,
            viewport: Viewport::world(inner.width as usize * 2, inner.height as usize * 4),
            map_renderer,
            shading: Shading {
                values: store.country_wins().clone(),
                scale: ColorScale::wins(),
            },
            country_select: Dropdown::new(store.all_countries()),
            year_select: Dropdown::new(store.all_years()),
            country_output: None,
            year_output: None,
            should_quit: false,
            last_mouse: None,
            mouse_pixel: None,
            screen,
        };

        app.fit_to_winners();
        // Selectors start on their first option, so both outputs are filled
        app.refresh_country();
        app.refresh_year();
        app
    }

    /// Update viewport size when terminal resizes
    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen = Rect::new(0, 0, width, height);
        let inner = ui::map_inner_area(self.screen);
        self.viewport.width = inner.width as usize * 2;
        self.viewport.height = inner.height as usize * 4;
    }

    /// Zoom the map onto the countries that have won a final
    pub fn fit_to_winners(&mut self) {
        let names = self.shading.values.keys().map(String::as_str);
        match self.map_renderer.bounds_of(names) {
            Some((min_lon, min_lat, max_lon, max_lat)) => {
                self.viewport.fit_bounds(min_lon, min_lat, max_lon, max_lat);
            }
            None => {
                self.viewport = Viewport::world(self.viewport.width, self.viewport.height);
            }
        }
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Re-run the wins lookup for the committed country
    fn refresh_country(&mut self) {
        let refresh = self
            .queries
            .on_country_selected(self.country_select.value().map(String::as_str));
        if !refresh.apply(&mut self.country_output) {
            debug!("country selection cleared, output kept");
        }
    }

    /// Re-run the final lookup for the committed year
    fn refresh_year(&mut self) {
        let refresh = self.queries.on_year_selected(self.year_select.value().copied());
        if !refresh.apply(&mut self.year_output) {
            debug!("year selection cleared, output kept");
        }
    }

    /// Handle a key press; global keys first, then the active tab's keys
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::BackTab => self.tab = self.tab.prev(),
            _ => match self.tab {
                Tab::Map => self.on_map_key(key.code),
                Tab::CountryWins => {
                    if on_selector_key(&mut self.country_select, key.code, &mut self.should_quit) {
                        self.refresh_country();
                    }
                }
                Tab::YearResult => {
                    if on_selector_key(&mut self.year_select, key.code, &mut self.should_quit) {
                        self.refresh_year();
                    }
                }
            },
        }
    }

    /// Map tab keys: navigation, layer toggles, quit
    fn on_map_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            // Jump to tab
            KeyCode::Char('1') => self.tab = Tab::Map,
            KeyCode::Char('2') => self.tab = Tab::CountryWins,
            KeyCode::Char('3') => self.tab = Tab::YearResult,

            // Pan with hjkl or arrow keys
            KeyCode::Left | KeyCode::Char('h') => self.viewport.pan(-10, 0),
            KeyCode::Right | KeyCode::Char('l') => self.viewport.pan(10, 0),
            KeyCode::Up | KeyCode::Char('k') => self.viewport.pan(0, -6),
            KeyCode::Down | KeyCode::Char('j') => self.viewport.pan(0, 6),

            // Zoom
            KeyCode::Char('+') | KeyCode::Char('=') => self.viewport.zoom_in(),
            KeyCode::Char('-') | KeyCode::Char('_') => self.viewport.zoom_out(),

            // Layer toggles
            KeyCode::Char('b') | KeyCode::Char('B') => self.map_renderer.toggle_borders(),
            KeyCode::Char('c') | KeyCode::Char('C') => self.map_renderer.toggle_coastlines(),
            KeyCode::Char('L') => self.map_renderer.toggle_labels(),

            // Reset view
            KeyCode::Char('r') | KeyCode::Char('0') => self.fit_to_winners(),
            _ => {}
        }
    }

    /// Handle mouse events for panning, zooming and hover
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if self.tab != Tab::Map {
            return;
        }

        self.mouse_pixel = self.to_map_pixel(mouse.column, mouse.row);
        let Some((px, py)) = self.mouse_pixel else {
            self.last_mouse = None;
            return;
        };

        match mouse.kind {
            // Scroll wheel zooms towards the cursor
            MouseEventKind::ScrollUp => self.viewport.zoom_in_at(px, py),
            MouseEventKind::ScrollDown => self.viewport.zoom_out_at(px, py),
            // Horizontal scroll for panning (trackpad two-finger swipe)
            MouseEventKind::ScrollLeft => self.viewport.pan(-15, 0),
            MouseEventKind::ScrollRight => self.viewport.pan(15, 0),
            // Click and drag to pan
            MouseEventKind::Down(MouseButton::Left) => {
                self.last_mouse = Some((mouse.column, mouse.row));
            }
            MouseEventKind::Drag(MouseButton::Left) => self.handle_drag(mouse.column, mouse.row),
            MouseEventKind::Up(MouseButton::Left) => self.last_mouse = None,
            _ => {}
        }
    }

    /// Pan by the distance moved since the last drag event
    fn handle_drag(&mut self, x: u16, y: u16) {
        if let Some((last_x, last_y)) = self.last_mouse {
            let dx = last_x as i32 - x as i32;
            let dy = last_y as i32 - y as i32;
            // Less sensitive when zoomed out
            let scale = if self.viewport.zoom < 2.0 {
                2
            } else if self.viewport.zoom < 4.0 {
                3
            } else {
                4
            };
            self.viewport.pan(dx * scale, dy * scale);
        }
        self.last_mouse = Some((x, y));
    }

    /// Terminal cell -> braille pixel inside the map, if the cell is on the map
    fn to_map_pixel(&self, col: u16, row: u16) -> Option<(i32, i32)> {
        let inner = ui::map_inner_area(self.screen);
        let inside = col >= inner.x
            && col < inner.x + inner.width
            && row >= inner.y
            && row < inner.y + inner.height;
        inside.then(|| ((col - inner.x) as i32 * 2, (row - inner.y) as i32 * 4))
    }

    /// Country under the cursor and its record
    pub fn hover_text(&self) -> Option<String> {
        let (px, py) = self.mouse_pixel?;
        let (lon, lat) = self.viewport.unproject(px, py);
        let country = self.map_renderer.country_at(lon, lat)?;
        let store = self.queries.store();
        let finals = store.appearances(country);
        let finals_text = format!("{finals} final{}", plural(finals as u32));
        Some(match self.queries.wins_for(country) {
            Ok(wins) => format!("{country}: {wins} win{} in {finals_text}", plural(wins)),
            Err(_) if finals > 0 => format!("{country}: no wins in {finals_text}"),
            Err(_) => format!("{country}: no finals"),
        })
    }

    /// Get current zoom level as a string
    pub fn zoom_level(&self) -> String {
        format!("{:.1}x", self.viewport.zoom)
    }

    /// Get current center coordinates as a string
    pub fn center_coords(&self) -> String {
        format!(
            "{:.1}°{}, {:.1}°{}",
            self.viewport.center_lat.abs(),
            if self.viewport.center_lat >= 0.0 { "N" } else { "S" },
            self.viewport.center_lon.abs(),
            if self.viewport.center_lon >= 0.0 { "E" } else { "W" }
        )
    }
}

fn plural(count: u32) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Keys shared by both selectors. Returns true when the selection changed.
fn on_selector_key<T: std::fmt::Display>(select: &mut Dropdown<T>, code: KeyCode, quit: &mut bool) -> bool {
    match code {
        KeyCode::Esc if !select.filter().is_empty() => {
            select.clear_filter();
            false
        }
        KeyCode::Esc => {
            *quit = true;
            false
        }
        KeyCode::Up => {
            select.move_up();
            false
        }
        KeyCode::Down => {
            select.move_down();
            false
        }
        KeyCode::Enter => select.commit(),
        KeyCode::Delete => select.clear(),
        KeyCode::Backspace if select.filter().is_empty() => select.clear(),
        KeyCode::Backspace => {
            select.pop_char();
            false
        }
        KeyCode::Char(ch) => {
            select.push_char(ch);
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(store: &ResultsStore) -> App<'_> {
        let mut renderer = MapRenderer::new();
        data::generate_simple_world(&mut renderer);
        App::new(store, renderer, 120, 40)
    }

    #[test]
    fn test_outputs_filled_on_start() {
        let store = ResultsStore::load().unwrap();
        let app = app(&store);
        assert_eq!(
            app.country_output.as_deref(),
            Some("Argentina has won the FIFA World Cup 3 times.")
        );
        assert_eq!(
            app.year_output.as_deref(),
            Some("In 1930, the winner was Uruguay and the runner-up was Argentina.")
        );
    }

    #[test]
    fn test_tab_cycles() {
        let store = ResultsStore::load().unwrap();
        let mut app = app(&store);
        app.on_key(key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::CountryWins);
        app.on_key(key(KeyCode::Tab));
        app.on_key(key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Map);
        app.on_key(key(KeyCode::BackTab));
        assert_eq!(app.tab, Tab::YearResult);
    }

    #[test]
    fn test_search_and_select_country() {
        let store = ResultsStore::load().unwrap();
        let mut app = app(&store);
        app.tab = Tab::CountryWins;
        for ch in "spa".chars() {
            app.on_key(key(KeyCode::Char(ch)));
        }
        app.on_key(key(KeyCode::Enter));
        assert_eq!(
            app.country_output.as_deref(),
            Some("Spain has won the FIFA World Cup 1 time.")
        );
    }

    #[test]
    fn test_clearing_selection_keeps_output() {
        let store = ResultsStore::load().unwrap();
        let mut app = app(&store);
        app.tab = Tab::YearResult;
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Enter));
        let shown = app.year_output.clone();
        assert_eq!(
            shown.as_deref(),
            Some("In 1934, the winner was Italy and the runner-up was Czech Republic.")
        );

        app.on_key(key(KeyCode::Delete));
        assert!(app.year_select.value().is_none());
        assert_eq!(app.year_output, shown);
    }

    #[test]
    fn test_quit_keys() {
        let store = ResultsStore::load().unwrap();
        let mut app = app(&store);
        app.tab = Tab::CountryWins;
        app.on_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit, "q is search input on selector tabs");
        app.on_key(key(KeyCode::Esc));
        assert!(!app.should_quit, "first Esc clears the search");
        app.on_key(key(KeyCode::Esc));
        assert!(app.should_quit);

        let mut app2 = self::app(&store);
        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        ctrl_c.kind = KeyEventKind::Press;
        app2.on_key(ctrl_c);
        assert!(app2.should_quit);
    }

    #[test]
    fn test_hover_over_brazil() {
        let store = ResultsStore::load().unwrap();
        let mut app = app(&store);
        let (px, py) = app.viewport.project(-47.9, -15.8);
        app.mouse_pixel = Some((px, py));
        assert_eq!(app.hover_text().as_deref(), Some("Brazil: 5 wins in 7 finals"));
    }

    #[test]
    fn test_hover_single_final_is_singular() {
        let store = ResultsStore::load().unwrap();
        let mut app = app(&store);
        app.mouse_pixel = Some(app.viewport.project(-3.7, 40.4));
        assert_eq!(app.hover_text().as_deref(), Some("Spain: 1 win in 1 final"));

        app.mouse_pixel = Some(app.viewport.project(-1.5, 52.5));
        assert_eq!(app.hover_text().as_deref(), Some("United Kingdom: 1 win in 1 final"));
    }

    #[test]
    fn test_fit_to_winners_zooms_in() {
        let store = ResultsStore::load().unwrap();
        let mut app = app(&store);
        app.viewport.zoom = 0.5;
        app.on_key(key(KeyCode::Char('r')));
        assert!(app.viewport.zoom > 0.5);
    }
}
