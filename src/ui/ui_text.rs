/// Every user-facing string in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub nav_overview: &'static str,
    pub nav_watchlist: &'static str,

    pub loading_list: &'static str,
    pub no_data: &'static str,
    pub not_found: &'static str,
    pub error_title: &'static str,
    pub error_body: &'static str,

    pub msg_added: &'static str,
    pub msg_already_present: &'static str,
    pub last_updated_prefix: &'static str,

    pub view_details: &'static str,
    pub add_to_watchlist: &'static str,
    pub remove_from_watchlist: &'static str,
    pub change_suffix: &'static str,

    pub label_current_price: &'static str,
    pub label_market_cap: &'static str,
    pub label_high_24h: &'static str,
    pub label_low_24h: &'static str,
    pub label_total_volume: &'static str,
    pub label_rank: &'static str,
    pub label_homepage: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Coin Deck",
    nav_overview: "Market",
    nav_watchlist: "Watchlist",

    loading_list: "Loading market data...",
    no_data: "No data available.",
    not_found: "Coin not found.",
    error_title: "Error loading data.",
    error_body: "Unable to fetch data. Please try again later.",

    msg_added: "Added to Watchlist!",
    msg_already_present: "Already in Watchlist!",
    last_updated_prefix: "Last updated:",

    view_details: "📊 View Details",
    add_to_watchlist: "+ Add to Watchlist",
    remove_from_watchlist: "✖ Remove",
    change_suffix: "% (24h)",

    label_current_price: "Current Price:",
    label_market_cap: "Market Cap:",
    label_high_24h: "24h High:",
    label_low_24h: "24h Low:",
    label_total_volume: "Total Volume:",
    label_rank: "Coin Rank:",
    label_homepage: "Homepage:",
};
