// SPDX-License-Identifier: CC0-1.0

//! Prints the selected network's chain parameters.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chainparams::hashes::hex::ToHex;
use chainparams::{params, select_params_from_args, Base58Type, BoolArgs};

/// Show the chain parameters a node would run with
#[derive(Debug, Parser)]
#[command(name = "chainparams-info", version)]
struct Cli {
    /// Use the test network
    #[arg(long)]
    testnet: bool,
}

impl BoolArgs for Cli {
    fn get_bool_arg(&self, name: &str, default: bool) -> bool {
        match name {
            "-testnet" => self.testnet,
            _ => default,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    select_params_from_args(&cli);
    let chain = params();

    println!("network:        {}", chain.network_id());
    println!("magic:          {}", chain.message_start[..].to_hex());
    println!("p2p port:       {}", chain.default_port);
    println!("rpc port:       {}", chain.rpc_port);
    println!("data dir:       {:?}", chain.data_dir);
    println!("genesis hash:   {}", chain.genesis_hash);
    println!("merkle root:    {}", chain.genesis.header.merkle_root);
    println!("genesis time:   {}", chain.genesis.header.time);
    println!("genesis nonce:  {}", chain.genesis.header.nonce);
    println!("genesis bits:   0x{:08x}", chain.genesis.header.bits);
    println!("last pow block: {}", chain.consensus.last_pow_block);
    println!("alert key:      {}", chain.alert_key()[..].to_hex());
    for ty in Base58Type::ALL.iter() {
        println!("prefix {:?}: {}", ty, chain.base58_prefix(*ty).to_hex());
    }
    for seed in &chain.dns_seeds {
        println!("dns seed:       {}", seed);
    }
    for seed in &chain.fixed_seeds {
        println!("fixed seed:     {} (last seen {})", seed.address, seed.time);
    }
}
