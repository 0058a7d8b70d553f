use clap::ValueEnum;

use crate::Cli;

/// CLI-facing page name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StartPage {
    Overview,
    Watchlist,
    Detail,
}

/// Which page controller runs. Resolved exactly once at startup; navigation
/// afterwards swaps the variant directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageRoute {
    Overview,
    Watchlist,
    Detail { coin_id: Option<String> },
}

impl PageRoute {
    pub fn from_cli(cli: &Cli) -> Self {
        match (cli.page, &cli.coin) {
            (StartPage::Detail, coin) => PageRoute::Detail {
                coin_id: coin.clone(),
            },
            // A bare --coin implies the detail page.
            (_, Some(coin)) => PageRoute::Detail {
                coin_id: Some(coin.clone()),
            },
            (StartPage::Overview, None) => PageRoute::Overview,
            (StartPage::Watchlist, None) => PageRoute::Watchlist,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(page: StartPage, coin: Option<&str>) -> Cli {
        Cli {
            page,
            coin: coin.map(str::to_string),
        }
    }

    #[test]
    fn default_page_is_the_overview() {
        assert_eq!(
            PageRoute::from_cli(&cli(StartPage::Overview, None)),
            PageRoute::Overview
        );
    }

    #[test]
    fn watchlist_page_resolves() {
        assert_eq!(
            PageRoute::from_cli(&cli(StartPage::Watchlist, None)),
            PageRoute::Watchlist
        );
    }

    #[test]
    fn detail_without_a_coin_keeps_the_missing_id() {
        assert_eq!(
            PageRoute::from_cli(&cli(StartPage::Detail, None)),
            PageRoute::Detail { coin_id: None }
        );
    }

    #[test]
    fn a_bare_coin_argument_implies_the_detail_page() {
        assert_eq!(
            PageRoute::from_cli(&cli(StartPage::Overview, Some("bitcoin"))),
            PageRoute::Detail {
                coin_id: Some("bitcoin".to_string())
            }
        );
    }
}
