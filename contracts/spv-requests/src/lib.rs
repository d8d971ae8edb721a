pub mod attributes;
pub mod contract;
pub mod error;
pub mod msg;
pub mod registry;
mod request_params;
pub mod state;
pub mod validator;

pub use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
