use std::sync::Arc;
use std::time::Duration;

use rentride_core::catalog::{
    Addon, Catalog, FaqEntry, FaqQuery, InboxMessage, InboxQuery, Vehicle, VehicleQuery,
};
use rentride_core::pricing::{PriceBreakdown, PriceCalculator};
use rentride_core::AppConfig;

use crate::scroll::{
    AnimatedTabBar, ScrollConfigExt, ScrollPublisher, ScrollSubscription, ScrollVisibilityContext,
    Visibility,
};

/// Bottom tab bar destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Explore,
    Trips,
    Inbox,
    Help,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Explore, Tab::Trips, Tab::Inbox, Tab::Help];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Explore => "Explore",
            Tab::Trips => "Trips",
            Tab::Inbox => "Inbox",
            Tab::Help => "Help",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Explore => "⌕",
            Tab::Trips => "⛟",
            Tab::Inbox => "✉",
            Tab::Help => "?",
        }
    }

    fn index(&self) -> usize {
        match self {
            Tab::Explore => 0,
            Tab::Trips => 1,
            Tab::Inbox => 2,
            Tab::Help => 3,
        }
    }

    fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    fn prev(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Application mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Typing a filter for the active list
    Search(String),
}

/// Booking being assembled on the Trips tab
#[derive(Debug, Clone)]
pub struct TripDraft {
    pub vehicle_id: String,
    pub days: u32,
    pub addon_ids: Vec<String>,
    pub coupon: Option<String>,
}

impl TripDraft {
    fn new(vehicle_id: &str) -> Self {
        Self {
            vehicle_id: vehicle_id.to_string(),
            days: 1,
            addon_ids: Vec::new(),
            coupon: None,
        }
    }
}

/// One row of the active list
pub enum Row<'a> {
    Vehicle(&'a Vehicle),
    Addon { addon: &'a Addon, selected: bool },
    Message(&'a InboxMessage),
    Faq(&'a FaqEntry),
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Sample catalog
    pub catalog: Catalog,
    /// Active tab
    pub tab: Tab,
    /// Current application mode
    pub mode: Mode,
    /// Filter applied to the active list
    pub search_query: String,
    /// Selected row per tab
    selected: [usize; 4],
    /// Booking draft shown on the Trips tab
    pub trip: Option<TripDraft>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Auto-hiding tab bar
    pub tab_bar: AnimatedTabBar,
    scroll_publisher: ScrollPublisher,
    scroll_subscription: ScrollSubscription,
}

impl App {
    pub fn new(config: Arc<AppConfig>, catalog: Catalog) -> Self {
        let (context, mut scroll_publisher) =
            ScrollVisibilityContext::with_publisher(config.ui.scroll.clone());
        let scroll_subscription = context.subscribe();
        let tab_bar = AnimatedTabBar::new(
            config.ui.tab_bar.clone(),
            config.ui.scroll.reveal_threshold,
        );

        scroll_publisher.on_scroll(0.0);

        let trip = catalog.vehicles.first().map(|v| TripDraft::new(&v.id));

        Self {
            config,
            catalog,
            tab: Tab::Explore,
            mode: Mode::Normal,
            search_query: String::new(),
            selected: [0; 4],
            trip,
            should_quit: false,
            status_message: None,
            pending_key: None,
            tab_bar,
            scroll_publisher,
            scroll_subscription,
        }
    }

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, Mode::Search(_))
    }

    /// Rows of the active tab after filtering
    pub fn rows(&self) -> Vec<Row<'_>> {
        let text = (!self.search_query.is_empty()).then(|| self.search_query.clone());
        match self.tab {
            Tab::Explore => VehicleQuery {
                text,
                ..Default::default()
            }
            .apply(&self.catalog.vehicles)
            .into_iter()
            .map(Row::Vehicle)
            .collect(),
            Tab::Trips => self
                .catalog
                .addons
                .iter()
                .filter(|a| {
                    text.as_deref()
                        .map_or(true, |t| a.name.to_lowercase().contains(&t.to_lowercase()))
                })
                .map(|addon| Row::Addon {
                    addon,
                    selected: self
                        .trip
                        .as_ref()
                        .is_some_and(|t| t.addon_ids.contains(&addon.id)),
                })
                .collect(),
            Tab::Inbox => InboxQuery {
                unread_only: false,
                text,
            }
            .apply(&self.catalog.messages)
            .into_iter()
            .map(Row::Message)
            .collect(),
            Tab::Help => FaqQuery { text, topic: None }
                .apply(&self.catalog.faqs)
                .into_iter()
                .map(Row::Faq)
                .collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    pub fn selected(&self) -> usize {
        self.selected[self.tab.index()]
    }

    /// Move the selection to `row`, clamped to the list, and report the
    /// resulting scroll offset
    fn select_row(&mut self, row: usize) {
        let count = self.row_count();
        let row = if count == 0 { 0 } else { row.min(count - 1) };
        self.selected[self.tab.index()] = row;
        let offset = self.config.ui.scroll.offset_for_row(row);
        self.scroll_publisher.on_scroll(offset);
    }

    pub fn move_down(&mut self, rows: usize) {
        self.select_row(self.selected().saturating_add(rows));
    }

    pub fn move_up(&mut self, rows: usize) {
        self.select_row(self.selected().saturating_sub(rows));
    }

    pub fn jump_to_top(&mut self) {
        self.select_row(0);
    }

    pub fn jump_to_bottom(&mut self) {
        self.select_row(self.row_count().saturating_sub(1));
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        self.tab = tab;
        self.search_query.clear();
        self.mode = Mode::Normal;
        // new scroll surface: start from its own position
        self.scroll_publisher.reset();
        self.select_row(self.selected());
    }

    pub fn next_tab(&mut self) {
        self.switch_tab(self.tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.switch_tab(self.tab.prev());
    }

    pub fn start_search(&mut self) {
        self.mode = Mode::Search(self.search_query.clone());
    }

    pub fn search_input(&mut self, c: char) {
        if let Mode::Search(query) = &mut self.mode {
            query.push(c);
        }
    }

    pub fn search_backspace(&mut self) {
        if let Mode::Search(query) = &mut self.mode {
            query.pop();
        }
    }

    pub fn confirm_search(&mut self) {
        if let Mode::Search(query) = std::mem::replace(&mut self.mode, Mode::Normal) {
            self.search_query = query;
            self.status_message = Some(format!("{} match(es)", self.row_count()));
            self.jump_to_top();
        }
    }

    pub fn cancel_search(&mut self) {
        self.mode = Mode::Normal;
    }

    pub fn clear_filter(&mut self) {
        if !self.search_query.is_empty() {
            self.search_query.clear();
            self.jump_to_top();
        }
        self.status_message = None;
    }

    /// Enter on a row: book a vehicle, toggle an add-on, mark a message read
    pub fn select(&mut self) {
        let row = self.selected();
        match self.tab {
            Tab::Explore => {
                let id = match self.rows().get(row) {
                    Some(Row::Vehicle(v)) => v.id.clone(),
                    _ => return,
                };
                self.trip = Some(TripDraft::new(&id));
                self.status_message = Some(format!("Booking {}", id));
                self.switch_tab(Tab::Trips);
            }
            Tab::Trips => self.toggle_addon(),
            Tab::Inbox => {
                let id = match self.rows().get(row) {
                    Some(Row::Message(m)) => m.id,
                    _ => return,
                };
                if let Some(message) = self.catalog.messages.iter_mut().find(|m| m.id == id) {
                    message.unread = false;
                }
            }
            Tab::Help => {}
        }
    }

    pub fn toggle_addon(&mut self) {
        let addon_id = match self.rows().get(self.selected()) {
            Some(Row::Addon { addon, .. }) => addon.id.clone(),
            _ => return,
        };
        if let Some(trip) = self.trip.as_mut() {
            if let Some(pos) = trip.addon_ids.iter().position(|id| *id == addon_id) {
                trip.addon_ids.remove(pos);
            } else {
                trip.addon_ids.push(addon_id);
            }
        }
    }

    pub fn change_days(&mut self, delta: i32) {
        if let Some(trip) = self.trip.as_mut() {
            trip.days = trip.days.saturating_add_signed(delta).min(90);
        }
    }

    /// Cycle through no coupon and each catalog coupon
    pub fn cycle_coupon(&mut self) {
        let codes: Vec<String> = self.catalog.coupons.iter().map(|c| c.code.clone()).collect();
        if let Some(trip) = self.trip.as_mut() {
            trip.coupon = match &trip.coupon {
                None => codes.first().cloned(),
                Some(current) => codes
                    .iter()
                    .position(|c| c == current)
                    .and_then(|i| codes.get(i + 1))
                    .cloned(),
            };
        }
    }

    /// Price the current trip draft
    pub fn quote(&self) -> Option<rentride_core::Result<PriceBreakdown>> {
        let trip = self.trip.as_ref()?;
        let calculator = PriceCalculator::new(&self.catalog, &self.config.pricing);
        Some(calculator.quote(&rentride_core::pricing::QuoteRequest {
            vehicle_id: trip.vehicle_id.clone(),
            days: trip.days,
            addon_ids: trip.addon_ids.clone(),
            coupon: trip.coupon.clone(),
        }))
    }

    /// Advance per-frame state: deliver the latest scroll signal and offset
    /// to the tab bar and move its animation forward by `dt`
    pub fn on_frame(&mut self, dt: Duration) -> Option<Visibility> {
        if let Some(signal) = self.scroll_subscription.take_changed() {
            self.tab_bar.on_signal(signal);
        }
        if let Some(offset) = self.scroll_subscription.take_offset() {
            self.tab_bar.on_offset(offset);
        }
        self.tab_bar.tick(dt)
    }

    /// Whether the event loop should poll at animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.tab_bar.is_animating()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
        self.tab_bar.unmount();
    }
}
