// Testing utils. See tests folder for actual tests.

use cosmwasm_std::{Addr, Attribute, Empty};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

/// Gets the value of the first attribute with the given key
pub fn first_attr(data: impl AsRef<[Attribute]>, search_key: &str) -> Option<String> {
    data.as_ref().iter().find_map(|a| {
        if a.key == search_key {
            Some(a.value.clone())
        } else {
            None
        }
    })
}

pub fn spv_requests_code() -> Box<dyn Contract<Empty>> {
    let code = ContractWrapper::new(
        spv_requests::contract::execute,
        spv_requests::contract::instantiate,
        spv_requests::contract::query,
    )
    .with_migrate(spv_requests::contract::migrate);
    Box::new(code)
}

/// Stores and instantiates an spv-requests contract managed by `manager`
pub fn instantiate_spv_requests(app: &mut App, owner: &Addr, manager: &Addr) -> Addr {
    let code_id = app.store_code(spv_requests_code());
    app.instantiate_contract(
        code_id,
        owner.clone(),
        &spv_requests::msg::InstantiateMsg {
            manager: manager.to_string(),
        },
        &[],
        "SPV requests",
        Some(manager.to_string()),
    )
    .unwrap()
}
