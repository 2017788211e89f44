use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;

use yieldscope::application::AdvisorService;
use yieldscope::infrastructure::providers::{HeliusWalletProvider, RaydiumDataProvider};
use yieldscope::report::{OpportunitiesReport, PortfolioReport, StrategyReport};
use yieldscope::shared::config::EngineConfig;
use yieldscope::shared::types::{PoolQuery, RiskProfile};

#[derive(Parser, Debug)]
#[command(version, about = "DeFi yield and portfolio advisor for Solana liquidity pools")]
struct Args {
    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank yield opportunities for a set of token mints
    Opportunities {
        /// Token mint addresses (comma-separated)
        #[arg(long)]
        tokens: String,

        /// Investor risk profile (low|medium|high)
        #[arg(long, default_value = "medium")]
        risk_profile: RiskProfile,

        /// Maximum number of results
        #[arg(long, default_value_t = 5)]
        limit: usize,

        /// DEX allow-list (comma-separated)
        #[arg(long)]
        dexes: Option<String>,

        /// Upstream listing page
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Upstream listing page size
        #[arg(long, default_value_t = 10)]
        page_size: u32,
    },

    /// Analyze the composition of a wallet's portfolio
    Portfolio {
        /// Wallet address
        #[arg(long)]
        wallet: String,
    },

    /// Build a target allocation strategy for an investment amount
    Strategy {
        /// Investor risk profile (low|medium|high)
        #[arg(long, default_value = "medium")]
        risk_profile: RiskProfile,

        /// Investment amount in USD
        #[arg(long)]
        amount: f64,
    },

    /// Inspect a single pool by address
    Pool {
        /// Pool address
        #[arg(long)]
        address: String,
    },
}

fn parse_mints(raw: &str) -> Result<Vec<Pubkey>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().with_context(|| format!("invalid token mint: {s}")))
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    let data_provider = Arc::new(RaydiumDataProvider::new(config.providers.raydium_url.clone()));
    let wallet_provider = Arc::new(HeliusWalletProvider::new(
        config.providers.helius_url.clone(),
        config.providers.helius_api_key.clone(),
    ));
    let service = AdvisorService::new(data_provider, wallet_provider, &config);

    match args.command {
        Commands::Opportunities {
            tokens,
            risk_profile,
            limit,
            dexes,
            page,
            page_size,
        } => {
            let mints = parse_mints(&tokens)?;
            let query = PoolQuery {
                page,
                limit: page_size,
                dexes: dexes.map(|d| d.split(',').map(|s| s.trim().to_string()).collect()),
            };

            let opportunities = service
                .rank_opportunities(&mints, risk_profile, limit, &query)
                .await?;
            let report = OpportunitiesReport::new(risk_profile, &mints, &opportunities);
            println!("{}", report.to_json()?);
        }

        Commands::Portfolio { wallet } => {
            let analysis = service.analyze_portfolio(&wallet).await?;
            let report = PortfolioReport::new(&wallet, analysis);
            println!("{}", report.to_json()?);
        }

        Commands::Strategy {
            risk_profile,
            amount,
        } => {
            let allocations = service.build_allocation_strategy(risk_profile, amount)?;
            let report = StrategyReport::new(risk_profile, amount, allocations);
            println!("{}", report.to_json()?);
        }

        Commands::Pool { address } => {
            let pool_address: Pubkey = address
                .trim()
                .parse()
                .with_context(|| format!("invalid pool address: {address}"))?;
            let pool = service.lookup_pool(&pool_address).await?;
            println!("{}", serde_json::to_string_pretty(&pool)?);
        }
    }

    Ok(())
}
