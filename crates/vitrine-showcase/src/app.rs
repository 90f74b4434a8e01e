#![forbid(unsafe_code)]

//! Top-level application model: screen navigation, global keys, and
//! event routing into the active screen's accordion.

use crate::chrome::{self, ChromeLayout};
use crate::screens::{Screen, ScreenId};
use crate::settings::SettingsStore;
use crate::theme::ChromeStyles;
use vitrine_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use vitrine_core::geometry::Rect;
use vitrine_render::{Buffer, Cell};
use vitrine_widgets::accordion::{Accordion, AccordionKeyResult};
use vitrine_widgets::sidebar::SidebarState;
use vitrine_widgets::{Direction, StatefulWidget, draw_text};

/// The showcase application.
pub struct App {
    store: SettingsStore,
    screens: Vec<Screen>,
    sidebar: SidebarState,
    quit: bool,
    // Regions from the last render, for mouse routing.
    last_layout: ChromeLayout,
    last_accordion_area: Rect,
}

impl App {
    /// Create the app with all screens mounted.
    ///
    /// `start_screen` is 1-indexed; out-of-range values fall back to
    /// the first screen.
    #[must_use]
    pub fn new(store: SettingsStore, start_screen: usize) -> Self {
        let screens: Vec<Screen> = ScreenId::ALL.iter().map(|&id| Screen::mount(id)).collect();
        let selected = start_screen
            .checked_sub(1)
            .filter(|&i| i < screens.len())
            .unwrap_or(0);
        Self {
            store,
            screens,
            sidebar: SidebarState { selected },
            quit: false,
            last_layout: ChromeLayout::default(),
            last_accordion_area: Rect::default(),
        }
    }

    /// Whether the user asked to quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    /// The active screen.
    #[must_use]
    pub fn current(&self) -> &Screen {
        &self.screens[self.sidebar.selected]
    }

    fn current_mut(&mut self) -> &mut Screen {
        &mut self.screens[self.sidebar.selected]
    }

    /// Handle one input event.
    pub fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.on_key(key),
            Event::Mouse(mouse) => self.on_mouse(mouse),
            Event::Resize { .. } | Event::Focus(_) => {}
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if !key.is_press() {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Escape => {
                self.quit = true;
                return;
            }
            KeyCode::Char('d') => {
                self.store.toggle_dark_mode();
                return;
            }
            KeyCode::Char('r') => {
                self.store.toggle_rtl();
                return;
            }
            KeyCode::Tab => {
                self.sidebar.select_next(self.screens.len());
                return;
            }
            KeyCode::BackTab => {
                self.sidebar.select_previous();
                return;
            }
            KeyCode::Char(c) => {
                if let Some(i) = ScreenId::ALL.iter().position(|id| id.hotkey() == c) {
                    self.sidebar.select(i, self.screens.len());
                    return;
                }
            }
            _ => {}
        }

        // Everything else goes to the active accordion.
        let screen = self.current_mut();
        match screen.state.handle_key(key, screen.focused) {
            AccordionKeyResult::FocusMoved(next) => screen.focused = next,
            AccordionKeyResult::Toggled(index) => {
                tracing::debug!(screen = screen.id.label(), index, "toggled item");
            }
            AccordionKeyResult::Ignored => {}
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (x, y) = mouse.position();

        if self.last_layout.sidebar.contains(x, y) {
            // Sidebar rows: title + blank, then one row per entry.
            let first_entry_row = self.last_layout.sidebar.y + 2;
            if y >= first_entry_row {
                let index = (y - first_entry_row) as usize;
                self.sidebar.select(index, self.screens.len());
            }
            return;
        }

        if self.last_accordion_area.contains(x, y) {
            let area = self.last_accordion_area;
            let direction = self.direction();
            let screen = self.current_mut();
            let widget = Accordion::new(&screen.items)
                .mode(screen.id.mode())
                .direction(direction);
            if let Some(index) = widget.header_at(area, &screen.state, x, y) {
                screen.focused = index;
                screen.state.toggle(index);
            }
        }
    }

    fn direction(&self) -> Direction {
        if self.store.settings.rtl {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// Render a full frame.
    pub fn render(&mut self, buf: &mut Buffer) {
        let styles = ChromeStyles::resolve(self.store.settings.dark_mode);
        let chrome = chrome::layout(buf.area());
        self.last_layout = chrome;

        buf.fill(buf.area(), {
            let mut cell = Cell::default();
            cell.apply_style(styles.base);
            cell
        });

        chrome::render_sidebar(buf, chrome.sidebar, &mut self.sidebar, &styles);
        chrome::render_status(buf, chrome.status, self.store.settings, &styles);

        let content = chrome.content;
        if content.is_empty() {
            self.last_accordion_area = Rect::default();
            return;
        }

        let direction = self.direction();
        let headline = self.current().id.headline();

        if direction.is_rtl() {
            let end = content.right();
            let width = headline.chars().count() as u16;
            let x = end.saturating_sub(width).max(content.x);
            draw_text(buf, x, content.y, headline, styles.headline, end);
        } else {
            draw_text(
                buf,
                content.x,
                content.y,
                headline,
                styles.headline,
                content.right(),
            );
        }

        let accordion_area = Rect::new(
            content.x,
            content.y + 2,
            content.width,
            content.height.saturating_sub(2),
        );
        self.last_accordion_area = accordion_area;

        let screen = &mut self.screens[self.sidebar.selected];
        Accordion::new(&screen.items)
            .mode(screen.id.mode())
            .direction(direction)
            .focused(Some(screen.focused))
            .header_style(styles.header)
            .body_style(styles.body)
            .border_style(styles.border)
            .focus_style(styles.focus)
            .render(accordion_area, buf, &mut screen.state);
    }
}
