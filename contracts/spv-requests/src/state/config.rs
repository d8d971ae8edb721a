use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

use super::TopKey;

#[cw_serde]
pub struct Config {
    /// The only address allowed to close and reopen requests and to change the config
    pub manager: Addr,
}

pub const CONFIG: Item<Config> = Item::new(TopKey::Config.as_str());
