use crate::api::RedmineClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(help = "Search query")]
    query: String,
    #[arg(short, long, default_value_t = 0, help = "Offset from first result")]
    offset: usize,
    #[arg(short, long, default_value_t = 5, help = "Limit of given search results")]
    limit: usize,
}

pub async fn cmd(args: SearchArgs) -> Result<()> {
    let client = RedmineClient::new(&Config::read()?)?;

    let (results, total_count) = client
        .search(&args.query, args.offset, args.limit)
        .await
        .map_err(|err| msg_error_anyhow!(Message::SearchFailed(err.to_string())))?;

    if results.is_empty() {
        msg_print!(Message::NoSearchResults);
        return Ok(());
    }

    msg_print!(Message::SearchSummary(total_count, args.offset + 1, args.offset + results.len()));
    View::search_results(&results)
}
