use {
    chrono::Local,
    eframe::{
        Frame,
        egui::{Align, CentralPanel, Context, Layout, RichText, TopBottomPanel, Visuals},
    },
    std::{
        mem,
        sync::{Arc, mpsc, mpsc::Receiver},
    },
    tokio::runtime::Runtime,
};

use crate::{
    Cli,
    app::{
        pages::PageView,
        route::{PageRoute, StartPage},
        state::{AppState, DetailState, ListState, LoadPhase, OverviewState, WatchlistState},
    },
    config::{GECKO, PERSISTENCE, REPAINT_POLL},
    data::{AddOutcome, GeckoClient, JsonFileWatchlist, MarketDataClient, WatchlistStore},
    models::{AssetSummary, DetailBundle},
    ui::{
        CardEvent, CardMode, UI_CONFIG, UI_TEXT, WatchAction, build_list_view, render_cards,
        render_detail_info, render_price_chart,
    },
    utils::clock_label,
};

pub struct App {
    pub(crate) client: Arc<dyn MarketDataClient>,
    pub(crate) store: Arc<dyn WatchlistStore>,
    state: AppState,
    list_rx: Option<Receiver<Vec<AssetSummary>>>,
    detail_rx: Option<Receiver<Result<DetailBundle, String>>>,
    notice: Option<String>,
    rt: Runtime,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        // Coin icons arrive as remote images; the http loader handles them.
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let rt = Runtime::new().expect("Failed to create runtime");
        let client: Arc<dyn MarketDataClient> =
            Arc::new(GeckoClient::new().expect("Failed to build HTTP client"));
        let store: Arc<dyn WatchlistStore> =
            Arc::new(JsonFileWatchlist::new(PERSISTENCE.watchlist_path));

        Self {
            client,
            store,
            state: AppState::for_route(PageRoute::from_cli(&args)),
            list_rx: None,
            detail_rx: None,
            notice: None,
            rt,
        }
    }

    // ---- List pages (overview + watchlist) ----

    pub(crate) fn tick_overview_page(
        &mut self,
        ctx: &Context,
        state: &mut OverviewState,
    ) -> AppState {
        self.advance_list_fetch(&mut state.list);

        if let Some(route) = self.render_nav(ctx, Some(StartPage::Overview)) {
            state.list.refresh.cancel();
            return self.switch_page(route);
        }
        self.render_status_bar(ctx, state.list.last_updated.as_deref());

        let event = self.render_list_body(ctx, &state.list);
        if let Some(next) = self.apply_card_event(event, &mut state.list) {
            return next;
        }

        ctx.request_repaint_after(REPAINT_POLL);
        AppState::Overview(state.clone())
    }

    pub(crate) fn tick_watchlist_page(
        &mut self,
        ctx: &Context,
        state: &mut WatchlistState,
    ) -> AppState {
        self.advance_list_fetch(&mut state.list);

        if let Some(route) = self.render_nav(ctx, Some(StartPage::Watchlist)) {
            state.list.refresh.cancel();
            return self.switch_page(route);
        }
        self.render_status_bar(ctx, state.list.last_updated.as_deref());

        let event = self.render_list_body(ctx, &state.list);
        if let Some(next) = self.apply_card_event(event, &mut state.list) {
            return next;
        }

        ctx.request_repaint_after(REPAINT_POLL);
        AppState::Watchlist(state.clone())
    }

    fn advance_list_fetch(&mut self, list: &mut ListState) {
        match list.phase {
            LoadPhase::Idle => {
                self.spawn_list_fetch(list.mode);
                list.phase = LoadPhase::Loading;
            }
            LoadPhase::Loading => {
                if let Some(rx) = &self.list_rx {
                    if let Ok(assets) = rx.try_recv() {
                        // Full replace: a failed cycle arrives as an empty
                        // vec and wipes stale data.
                        list.assets = assets;
                        list.phase = LoadPhase::Loaded;
                        list.last_updated = Some(clock_label(&Local::now()));
                        list.refresh.arm();
                    }
                }
            }
            LoadPhase::Loaded => {
                if list.refresh.due() {
                    self.spawn_list_fetch(list.mode);
                    list.phase = LoadPhase::Loading;
                }
            }
            // List fetches swallow failures upstream; nothing routes here.
            LoadPhase::Failed => {}
        }
    }

    fn spawn_list_fetch(&mut self, mode: CardMode) {
        let (tx, rx) = mpsc::channel();
        // Replacing the receiver strands any in-flight older request, so a
        // late reply can never clobber newer data.
        self.list_rx = Some(rx);
        let client = Arc::clone(&self.client);

        match mode {
            CardMode::Overview => {
                self.rt.spawn(async move {
                    let assets = client.fetch_top(GECKO.query.top_count).await;
                    let _ = tx.send(assets);
                });
            }
            CardMode::Watchlist => {
                // Re-read the persisted ids every cycle so outside mutations
                // are picked up.
                let ids = self.store.ids();
                self.rt.spawn(async move {
                    let assets = client.fetch_by_ids(&ids).await;
                    let _ = tx.send(assets);
                });
            }
        }
    }

    fn render_list_body(&self, ctx: &Context, list: &ListState) -> Option<CardEvent> {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                if list.awaiting_first_load() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.spinner();
                        ui.label(RichText::new(UI_TEXT.loading_list).color(UI_CONFIG.colors.muted));
                    });
                    return None;
                }
                render_cards(ui, &build_list_view(&list.assets, list.mode))
            })
            .inner
    }

    fn apply_card_event(
        &mut self,
        event: Option<CardEvent>,
        list: &mut ListState,
    ) -> Option<AppState> {
        match event? {
            CardEvent::ShowDetail(id) => {
                list.refresh.cancel();
                Some(self.switch_page(PageRoute::Detail { coin_id: Some(id) }))
            }
            CardEvent::Watch(WatchAction::Add, id) => {
                match self.store.add(&id) {
                    Ok(AddOutcome::Added) => self.notice = Some(UI_TEXT.msg_added.to_string()),
                    Ok(AddOutcome::AlreadyPresent) => {
                        self.notice = Some(UI_TEXT.msg_already_present.to_string());
                    }
                    Err(e) => log::error!("Failed to update watchlist: {e:#}"),
                }
                None
            }
            CardEvent::Watch(WatchAction::Remove, id) => {
                if let Err(e) = self.store.remove(&id) {
                    log::error!("Failed to update watchlist: {e:#}");
                }
                // Reload the visible list right away so the card disappears.
                self.spawn_list_fetch(list.mode);
                list.phase = LoadPhase::Loading;
                None
            }
        }
    }

    // ---- Detail page ----

    pub(crate) fn tick_detail_page(&mut self, ctx: &Context, state: &mut DetailState) -> AppState {
        self.advance_detail_fetch(state);

        if let Some(route) = self.render_nav(ctx, None) {
            return self.switch_page(route);
        }

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| match (&state.coin_id, &state.phase) {
                (None, _) => {
                    ui.heading(RichText::new(UI_TEXT.not_found).color(UI_CONFIG.colors.heading));
                }
                (Some(id), LoadPhase::Idle | LoadPhase::Loading) => {
                    ui.heading(
                        RichText::new(format!("Loading {id}...")).color(UI_CONFIG.colors.heading),
                    );
                    ui.spinner();
                }
                (Some(_), LoadPhase::Loaded) => {
                    if let Some(bundle) = &state.bundle {
                        ui.heading(
                            RichText::new(format!(
                                "{} ({})",
                                bundle.detail.name, bundle.detail.symbol
                            ))
                            .color(UI_CONFIG.colors.heading),
                        );
                        ui.add_space(8.0);
                        render_price_chart(ui, &bundle.series);
                        ui.add_space(8.0);
                        render_detail_info(ui, &bundle.detail);
                    }
                }
                (Some(_), LoadPhase::Failed) => {
                    ui.heading(RichText::new(UI_TEXT.error_title).color(UI_CONFIG.colors.heading));
                    ui.label(RichText::new(UI_TEXT.error_body).color(UI_CONFIG.colors.loss));
                }
            });

        if matches!(state.phase, LoadPhase::Idle | LoadPhase::Loading) {
            ctx.request_repaint_after(REPAINT_POLL);
        }
        AppState::Detail(state.clone())
    }

    fn advance_detail_fetch(&mut self, state: &mut DetailState) {
        // No id means no network activity at all.
        let Some(coin_id) = state.coin_id.clone() else {
            return;
        };
        match state.phase {
            LoadPhase::Idle => {
                self.spawn_detail_fetch(&coin_id);
                state.phase = LoadPhase::Loading;
            }
            LoadPhase::Loading => {
                if let Some(rx) = &self.detail_rx {
                    match rx.try_recv() {
                        Ok(Ok(bundle)) => {
                            state.bundle = Some(bundle);
                            state.phase = LoadPhase::Loaded;
                        }
                        Ok(Err(message)) => {
                            log::error!("Error loading coin details: {message}");
                            state.phase = LoadPhase::Failed;
                        }
                        Err(_) => {}
                    }
                }
            }
            LoadPhase::Loaded | LoadPhase::Failed => {}
        }
    }

    fn spawn_detail_fetch(&mut self, coin_id: &str) {
        let (tx, rx) = mpsc::channel();
        self.detail_rx = Some(rx);
        let client = Arc::clone(&self.client);
        let id = coin_id.to_string();
        self.rt.spawn(async move {
            let outcome = client.fetch_detail(&id).await.map_err(|e| format!("{e:#}"));
            let _ = tx.send(outcome);
        });
    }

    // ---- Shared chrome ----

    fn render_nav(&mut self, ctx: &Context, active: Option<StartPage>) -> Option<PageRoute> {
        let mut target = None;
        TopBottomPanel::top("nav")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(UI_TEXT.app_title)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();
                    if ui
                        .selectable_label(active == Some(StartPage::Overview), UI_TEXT.nav_overview)
                        .clicked()
                    {
                        target = Some(PageRoute::Overview);
                    }
                    if ui
                        .selectable_label(
                            active == Some(StartPage::Watchlist),
                            UI_TEXT.nav_watchlist,
                        )
                        .clicked()
                    {
                        target = Some(PageRoute::Watchlist);
                    }
                });
            });
        target
    }

    fn render_status_bar(&self, ctx: &Context, last_updated: Option<&str>) {
        TopBottomPanel::bottom("status")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(timestamp) = last_updated {
                        ui.label(
                            RichText::new(format!("{} {}", UI_TEXT.last_updated_prefix, timestamp))
                                .color(UI_CONFIG.colors.muted),
                        );
                    }
                    if let Some(notice) = &self.notice {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(RichText::new(notice).color(UI_CONFIG.colors.accent));
                        });
                    }
                });
            });
    }

    fn switch_page(&mut self, route: PageRoute) -> AppState {
        // Strand any in-flight results from the page being left behind.
        self.list_rx = None;
        self.detail_rx = None;
        self.notice = None;
        AppState::for_route(route)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Overview(mut s) => s.tick(self, ctx),
            AppState::Watchlist(mut s) => s.tick(self, ctx),
            AppState::Detail(mut s) => s.tick(self, ctx),
        };
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}
