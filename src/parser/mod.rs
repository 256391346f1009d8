pub mod block;
pub mod extract;
pub mod table;
pub mod text;

use clap::ValueEnum;
use scraper::Html;

use crate::model::ServerRecord;

/// The two extraction strategies are divergent guesses about unknown site
/// markup; they sit behind one interface and Auto tries them in sequence,
/// first non-empty result winning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    Auto,
    Table,
    Block,
}

/// One page → records, under the chosen strategy.
pub fn parse_page(html: &str, category: &str, strategy: Strategy) -> Vec<ServerRecord> {
    let document = Html::parse_document(html);
    match strategy {
        Strategy::Table => table::extract_page(&document, category),
        Strategy::Block => block::extract_page(&document, category),
        Strategy::Auto => {
            let servers = table::extract_page(&document, category);
            if servers.is_empty() {
                block::extract_page(&document, category)
            } else {
                servers
            }
        }
    }
}
