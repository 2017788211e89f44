//! Upstream provider clients

mod helius;
mod raydium;
mod traits;

pub use helius::HeliusWalletProvider;
pub use raydium::RaydiumDataProvider;
pub use traits::{DefiDataProvider, WalletProvider};
