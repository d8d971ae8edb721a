#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    ensure_eq, to_json_binary, Deps, DepsMut, Empty, Env, HexBinary, MessageInfo,
    QueryResponse, Response, StdError, StdResult,
};

use crate::attributes::{ATTR_ACTION, ATTR_ACTIVE, ATTR_REQUEST_ID};
use crate::error::ContractError;
use crate::msg::{
    CheckRequestResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, NextRequestIdResponse,
    QueryMsg, RequestResponse, RequestsResponse,
};
use crate::registry::{CreationReceipt, NewRequest, RequestRegistry};
use crate::request_params::{validate_action, validate_origin, validate_pays, validate_spends};
use crate::state::{Config, RequestId, CONFIG, REQUEST_ID_SEQUENCE};
use crate::validator::{ProofValidator, TxCandidate};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const REGISTRY: RequestRegistry = RequestRegistry::new(REQUEST_ID_SEQUENCE);
const VALIDATOR: ProofValidator = ProofValidator::new(REGISTRY);

/// Page size of the requests query
const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let manager = deps.api.addr_validate(&msg.manager)?;
    CONFIG.save(
        deps.storage,
        &Config {
            manager: manager.clone(),
        },
    )?;
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "instantiate")
        .add_attribute("manager", manager))
}

// No state changes expected.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: Empty) -> StdResult<Response> {
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::NewRequest {
            spends,
            pays,
            pays_value,
            num_confs,
            origin,
            action,
        } => execute_new_request(
            deps,
            NewRequest {
                spends,
                pays,
                pays_value,
                num_confs,
                origin,
                action,
            },
        ),
        ExecuteMsg::SetRequestState { id, active } => {
            execute_set_request_state(deps, info, id, active)
        }
        ExecuteMsg::SetConfig { manager } => execute_set_config(deps, info, manager),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::Request { id } => to_json_binary(&query_request(deps, id)?)?,
        QueryMsg::Requests { start_after, limit } => {
            to_json_binary(&query_requests(deps, start_after, limit)?)?
        }
        QueryMsg::NextRequestId {} => to_json_binary(&query_next_request_id(deps)?)?,
        QueryMsg::CheckRequest {
            input_index,
            output_index,
            vin,
            vout,
            id,
        } => to_json_binary(&query_check_request(
            deps,
            input_index,
            output_index,
            vin,
            vout,
            id,
        )?)?,
    };
    Ok(response)
}

fn execute_new_request(
    deps: DepsMut,
    new_request: NewRequest,
) -> Result<Response, ContractError> {
    validate_spends(&new_request.spends)?;
    validate_pays(&new_request.pays)?;
    validate_origin(&new_request.origin)?;
    validate_action(&new_request.action)?;

    let CreationReceipt { id, event } = REGISTRY.create(deps.storage, new_request)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "new_request")
        .add_attribute(ATTR_REQUEST_ID, id.to_string())
        .add_event(event))
}

fn execute_set_request_state(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
    active: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.manager, ContractError::Unauthorized);

    let id = RequestId::new(id);
    REGISTRY.set_active(deps.storage, id, active)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "set_request_state")
        .add_attribute(ATTR_REQUEST_ID, id.to_string())
        .add_attribute(ATTR_ACTIVE, active.to_string()))
}

fn execute_set_config(
    deps: DepsMut,
    info: MessageInfo,
    manager: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.manager, ContractError::Unauthorized);

    let manager = match manager {
        Some(ma) => deps.api.addr_validate(&ma)?,
        None => config.manager,
    };
    CONFIG.save(deps.storage, &Config { manager })?;

    Ok(Response::new().add_attribute(ATTR_ACTION, "set_config"))
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config)
}

fn query_request(deps: Deps, id: u64) -> StdResult<RequestResponse> {
    let request = REGISTRY
        .get(deps.storage, RequestId::new(id))
        .map_err(into_std_error)?;
    Ok(RequestResponse { id, request })
}

fn query_requests(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<RequestsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let requests = REGISTRY
        .list(deps.storage, start_after.map(RequestId::new), limit)
        .map_err(into_std_error)?
        .into_iter()
        .map(|(id, request)| RequestResponse {
            id: id.u64(),
            request,
        })
        .collect();
    Ok(RequestsResponse { requests })
}

fn query_next_request_id(deps: Deps) -> StdResult<NextRequestIdResponse> {
    let id = REGISTRY.next_id(deps.storage).map_err(into_std_error)?;
    Ok(NextRequestIdResponse { id: id.u64() })
}

/// Rejections are part of the response. Only a corrupted store makes the query fail.
fn query_check_request(
    deps: Deps,
    input_index: u32,
    output_index: u32,
    vin: HexBinary,
    vout: HexBinary,
    id: u64,
) -> StdResult<CheckRequestResponse> {
    let candidate = TxCandidate {
        input_index,
        output_index,
        vin: &vin,
        vout: &vout,
    };
    match VALIDATOR.check(deps.storage, &candidate, RequestId::new(id)) {
        Ok(()) => Ok(CheckRequestResponse {
            valid: true,
            error: None,
        }),
        Err(err) if err.is_store_fault() => Err(into_std_error(err)),
        Err(err) => Ok(CheckRequestResponse {
            valid: false,
            error: Some(err.to_string()),
        }),
    }
}

fn into_std_error(err: ContractError) -> StdError {
    match err {
        ContractError::Std(err) => err,
        err => StdError::generic_err(err.to_string()),
    }
}

/// Checks raw transaction data against request `id` without going through a query
pub fn check_request(
    deps: Deps,
    input_index: u32,
    output_index: u32,
    vin: &[u8],
    vout: &[u8],
    id: u64,
) -> Result<(), ContractError> {
    let candidate = TxCandidate {
        input_index,
        output_index,
        vin,
        vout,
    };
    VALIDATOR.check(deps.storage, &candidate, RequestId::new(id))
}
