/// Query defaults sent on every market-data request.
pub struct GeckoQueryDefaults {
    pub vs_currency: &'static str,
    pub top_count: u32,
    pub chart_days: u32,
    pub chart_interval: &'static str,
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
}

pub struct GeckoConfig {
    pub base_url: &'static str,
    pub query: GeckoQueryDefaults,
    pub client: ClientDefaults,
}

pub const GECKO: GeckoConfig = GeckoConfig {
    base_url: "https://api.coingecko.com/api/v3",
    query: GeckoQueryDefaults {
        vs_currency: "usd",
        top_count: 10,
        chart_days: 7,
        chart_interval: "daily",
    },
    client: ClientDefaults { timeout_ms: 10_000 },
};
