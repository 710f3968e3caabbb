// SPDX-License-Identifier: CC0-1.0

//! Active network selection
//!
//! Both parameter sets live for the whole process. Startup code picks one,
//! usually from the command line, and everything else reads it through
//! [`params`]. Selection is expected to happen once, before networking or
//! validation threads start; later calls are allowed and simply switch the
//! pointer, no state is carried over from the previous selection.
//!

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::info;

use crate::chain::{ChainParams, ParamsOverrides};
use crate::network::constants::Network;

lazy_static! {
    static ref MAIN_PARAMS: ChainParams = ChainParams::main();
    static ref TESTNET_PARAMS: ChainParams = MAIN_PARAMS.derive(&ParamsOverrides::TESTNET);
    static ref CURRENT: RwLock<Network> = RwLock::new(Network::Main);
}

/// Boolean command-line flag lookup.
pub trait BoolArgs {
    /// The value of flag `name` (spelled with its leading dash, e.g.
    /// `"-testnet"`), or `default` when it was not given.
    fn get_bool_arg(&self, name: &str, default: bool) -> bool;
}

/// Parsed `-name=value` arguments, keyed by `-name`.
///
/// A flag given without a value counts as set; otherwise any value that
/// reads as a non-zero integer does.
impl BoolArgs for HashMap<String, String> {
    fn get_bool_arg(&self, name: &str, default: bool) -> bool {
        match self.get(name) {
            None => default,
            Some(value) if value.is_empty() => true,
            Some(value) => value.trim().parse::<i64>().map(|v| v != 0).unwrap_or(false),
        }
    }
}

/// The parameters of `network`, built on first use.
pub fn params_for(network: Network) -> &'static ChainParams {
    match network {
        Network::Main => &*MAIN_PARAMS,
        Network::Testnet => &*TESTNET_PARAMS,
    }
}

/// The currently selected parameters. Main until something else is selected.
pub fn params() -> &'static ChainParams {
    params_for(selected_network())
}

/// The currently selected network.
pub fn selected_network() -> Network {
    *CURRENT.read()
}

/// Makes `network` the active network.
///
/// Both parameter sets are built here if they were not already, so a genesis
/// integrity failure stops the process at startup rather than on first use.
pub fn select_params(network: Network) {
    lazy_static::initialize(&MAIN_PARAMS);
    lazy_static::initialize(&TESTNET_PARAMS);
    *CURRENT.write() = network;
    info!(%network, "selected chain parameters");
}

/// Selects the test network if `-testnet` is set, the main network otherwise.
pub fn select_params_from_args<A: BoolArgs + ?Sized>(args: &A) -> bool {
    if args.get_bool_arg("-testnet", false) {
        select_params(Network::Testnet);
    } else {
        select_params(Network::Main);
    }
    true
}
