//! HostWallet: interactive console for driving a hosted-custody wallet
//! session through the standard provider surface.

use std::io::{self, Write};

use eyre::WrapErr;
use serde_json::{json, Value};

use hostwallet_binding_adapters::{BindingAdapterConfig, WalletModule};
use hostwallet_binding_core::{ChainDescriptor, ProviderEventKind, PublicProvider};

fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let api_key = std::env::var("HOSTWALLET_API_KEY").wrap_err("HOSTWALLET_API_KEY must be set")?;
    let chains = configured_chains()?;

    let module = WalletModule::with_config(api_key, BindingAdapterConfig::from_env());
    tracing::info!(label = module.label(), "starting wallet session");
    let session = module
        .interface(chains)
        .wrap_err("failed to initialize the provider binding")?;

    session
        .provider
        .on(ProviderEventKind::ChainChanged, |event| {
            println!("chainChanged -> {}", event.value);
        })?;

    repl(&session.provider)
}

fn configured_chains() -> eyre::Result<Vec<ChainDescriptor>> {
    match std::env::var("HOSTWALLET_CHAINS") {
        Ok(raw) if !raw.is_empty() => serde_json::from_str(&raw)
            .wrap_err("HOSTWALLET_CHAINS must be a JSON list of {id, rpcUrl} entries"),
        _ => Ok(vec![ChainDescriptor::new("1")]),
    }
}

fn repl(provider: &PublicProvider) -> eyre::Result<()> {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let mut parts = line.trim().split_whitespace();
        let Some(command) = parts.next() else { continue };

        let outcome = match command {
            "accounts" => provider.request("eth_requestAccounts", json!([])),
            "balance" => provider.request("eth_getBalance", json!([])),
            "chain" => provider.request("eth_chainId", json!([])),
            "switch" => match parts.next() {
                Some(id) => {
                    provider.request("wallet_switchEthereumChain", json!([{ "chainId": id }]))
                }
                None => {
                    println!("usage: switch <chain-id>");
                    continue;
                }
            },
            "rpc" => match parts.next() {
                Some(method) => {
                    let rest = parts.collect::<Vec<_>>().join(" ");
                    let params: Value = if rest.is_empty() {
                        json!([])
                    } else {
                        match serde_json::from_str(&rest) {
                            Ok(value) => value,
                            Err(e) => {
                                println!("invalid params: {e}");
                                continue;
                            }
                        }
                    };
                    provider.request(method, params)
                }
                None => {
                    println!("usage: rpc <method> [json-params]");
                    continue;
                }
            },
            "disconnect" => provider.disconnect().map(|_| Value::Null),
            "quit" | "exit" => return Ok(()),
            other => {
                println!("unknown command: {other}");
                continue;
            }
        };

        match outcome {
            Ok(value) => println!("{value}"),
            Err(error) => println!("error {}: {}", error.code, error.message),
        }
    }
}
