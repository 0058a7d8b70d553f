// src/app/state.rs

use crate::{
    app::{RefreshTimer, route::PageRoute},
    config::LIST_REFRESH_INTERVAL,
    models::{AssetSummary, DetailBundle},
    ui::CardMode,
};

/// Per-page load lifecycle. List pages never reach `Failed`: their fetch
/// failures are swallowed into an empty `Loaded`.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Shared state of the two list pages (overview and watchlist).
#[derive(Clone)]
pub(crate) struct ListState {
    pub(crate) mode: CardMode,
    pub(crate) phase: LoadPhase,
    pub(crate) assets: Vec<AssetSummary>,
    pub(crate) refresh: RefreshTimer,
    pub(crate) last_updated: Option<String>,
}

impl ListState {
    pub(crate) fn new(mode: CardMode) -> Self {
        Self {
            mode,
            phase: LoadPhase::Idle,
            assets: Vec::new(),
            refresh: RefreshTimer::new(LIST_REFRESH_INTERVAL),
            last_updated: None,
        }
    }

    /// True until the first result lands; used to show the initial spinner.
    pub(crate) fn awaiting_first_load(&self) -> bool {
        self.last_updated.is_none()
    }
}

#[derive(Clone)]
pub(crate) struct OverviewState {
    pub(crate) list: ListState,
}

impl Default for OverviewState {
    fn default() -> Self {
        Self {
            list: ListState::new(CardMode::Overview),
        }
    }
}

#[derive(Clone)]
pub(crate) struct WatchlistState {
    pub(crate) list: ListState,
}

impl Default for WatchlistState {
    fn default() -> Self {
        Self {
            list: ListState::new(CardMode::Watchlist),
        }
    }
}

#[derive(Clone)]
pub(crate) struct DetailState {
    pub(crate) coin_id: Option<String>,
    pub(crate) phase: LoadPhase,
    pub(crate) bundle: Option<DetailBundle>,
}

impl DetailState {
    pub(crate) fn new(coin_id: Option<String>) -> Self {
        Self {
            coin_id,
            phase: LoadPhase::Idle,
            bundle: None,
        }
    }
}

pub(crate) enum AppState {
    Overview(OverviewState),
    Watchlist(WatchlistState),
    Detail(DetailState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Overview(OverviewState::default())
    }
}

impl AppState {
    pub(crate) fn for_route(route: PageRoute) -> Self {
        match route {
            PageRoute::Overview => AppState::Overview(OverviewState::default()),
            PageRoute::Watchlist => AppState::Watchlist(WatchlistState::default()),
            PageRoute::Detail { coin_id } => AppState::Detail(DetailState::new(coin_id)),
        }
    }
}
