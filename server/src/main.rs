//! mycolookup HTTP server
//!
//! Resolves mushroom taxon descriptions, vernacular names and name
//! suggestions from public biodiversity sources.
//!
//! Usage:
//!   mycolookup-server --port 3000
//!
//! The laji.fi access token is read from `--laji-token` or `LAJI_FI_TOKEN`.
//! Without it the laji.fi provider is not used.

use std::{net::SocketAddr, sync::Arc};
use anyhow::{Context, Result};
use clap::Parser;
use mycolookup_providers::{HttpConfig, LajiConfig};
use mycolookup_resolve::{
    CacheConfig, ProviderTable, ProvidersConfig, Resolver, ResolverConfig, TtlCache,
};
use mycolookup_server::{build_router, wait_for_shutdown};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mycolookup-server")]
#[command(about = "Mushroom taxon lookup service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Address to bind
    #[arg(long, env = "BIND", default_value = "0.0.0.0")]
    bind: String,

    /// laji.fi API access token
    #[arg(long, env = "LAJI_FI_TOKEN", hide_env_values = true)]
    laji_token: Option<String>,

    /// Per-request timeout for upstream sources (seconds)
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value = "8")]
    timeout_secs: u64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("mycolookup starting...");

    let providers = ProvidersConfig {
        http: HttpConfig {
            timeout_secs: args.timeout_secs,
            ..Default::default()
        },
        laji: LajiConfig {
            access_token: args.laji_token.filter(|token| !token.trim().is_empty()),
            ..Default::default()
        },
        ..Default::default()
    };
    let table = ProviderTable::standard(&providers).context("failed to build provider table")?;
    let resolver = Arc::new(Resolver::new(
        table,
        TtlCache::new(CacheConfig::default()),
        ResolverConfig::default(),
    ));

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.bind, args.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("HTTP API listening on {}", addr);

    axum::serve(listener, build_router(resolver))
        .with_graceful_shutdown(wait_for_shutdown(tokio::signal::ctrl_c()))
        .await
        .context("HTTP server failed")?;

    info!("mycolookup stopped");
    Ok(())
}
