use std::sync::Arc;

use anyhow::Context;
use colored::*;
use tokio::io::{AsyncBufReadExt, BufReader};

use glass_harborline_core::infrastructure::{init_logging, ClientConfig};
use glass_harborline_core::shared::constants::{APP_LOGO_URL, APP_NAME};
use glass_harborline_core::{
    AppMetadata, Eip1193BridgeProvider, HarborlineCore, Panel, QueryResult, WalletResult,
};

const HELP: &[&str] = &[
    "connect          connect the wallet on the active network",
    "block            read the latest block",
    "balance <addr>   read the native balance of an address",
    "toggle           switch between Base Sepolia and Base Mainnet",
    "status           show the active network and wallet session",
    "help             show this list",
    "quit             exit",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env().context("loading configuration")?;
    init_logging(&config.log_level);

    let app = AppMetadata {
        name: APP_NAME.to_string(),
        logo_url: APP_LOGO_URL.to_string(),
    };
    let provider = Eip1193BridgeProvider::new(config.wallet_bridge_url.clone(), app)?;
    let core = HarborlineCore::with_defaults(Arc::new(provider));

    log::info!("Wallet bridge at {}", config.wallet_bridge_url);
    println!("{}", APP_NAME.bold());
    println!("{}", Panel::ready(core.current().await.network_label).render().green());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        match command {
            "connect" => show(core.connect().await),
            "block" => show(core.read_latest_block().await),
            "balance" => match words.next() {
                Some(address) => show(core.read_balance(address).await),
                None => println!("{}", "usage: balance <addr>".yellow()),
            },
            "toggle" => {
                let network = core.toggle_network();
                println!("{}", Panel::switched(&network).render().yellow());
            }
            "status" => println!("{}", Panel::status(&core.current().await)),
            "help" => HELP.iter().for_each(|h| println!("  {}", h)),
            "quit" | "exit" => break,
            other => println!("{} {:?}, try `help`", "unknown command".yellow(), other),
        }
    }

    Ok(())
}

fn show(result: WalletResult<QueryResult>) {
    match result {
        Ok(result) => println!("{}", Panel::from(&result)),
        Err(e) => println!("{}", Panel::failure(&e).render().red()),
    }
}
