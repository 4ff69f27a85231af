// src/external/bean.rs
//! Minimal bean balance contract
//!
//! Balances are decimal strings stored under the account address in the
//! bank's own namespace.

use tracing::debug;

use super::ContractInvoker;
use crate::consts::DEFAULT_TRANSFER_FUNCTION;
use crate::error::InvokeError;
use crate::state::LedgerState;

pub struct BeanBank<S> {
    contract_id: String,
    function: String,
    state: S,
}

impl<S: LedgerState> BeanBank<S> {
    pub fn new(contract_id: impl Into<String>, state: S) -> Self {
        Self {
            contract_id: contract_id.into(),
            function: DEFAULT_TRANSFER_FUNCTION.into(),
            state,
        }
    }

    /// Serve transfers under `function` instead of `transferBean`
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = function.into();
        self
    }

    pub fn balance(&self, addr: &str) -> Result<u64, InvokeError> {
        let raw = self
            .state
            .get_state(addr)
            .map_err(|e| InvokeError(e.to_string()))?;
        match raw {
            None => Ok(0),
            Some(bytes) => String::from_utf8_lossy(&bytes)
                .parse()
                .map_err(|_| InvokeError(format!("corrupt balance for {addr}"))),
        }
    }

    pub fn mint(&mut self, addr: &str, amount: u64) -> Result<u64, InvokeError> {
        let balance = self
            .balance(addr)?
            .checked_add(amount)
            .ok_or_else(|| InvokeError(format!("balance overflow for {addr}")))?;
        self.set_balance(addr, balance)?;
        Ok(balance)
    }

    pub fn transfer(&mut self, from: &str, to: &str, amount: u64) -> Result<(), InvokeError> {
        let from_balance = self.balance(from)?;
        if from_balance < amount {
            return Err(InvokeError(format!(
                "insufficient beans: {from} has {from_balance}, needs {amount}"
            )));
        }
        if from == to {
            return Ok(());
        }
        let to_balance = self
            .balance(to)?
            .checked_add(amount)
            .ok_or_else(|| InvokeError(format!("balance overflow for {to}")))?;
        self.set_balance(from, from_balance - amount)?;
        self.set_balance(to, to_balance)?;
        debug!(from, to, amount, "beans transferred");
        Ok(())
    }

    fn set_balance(&mut self, addr: &str, balance: u64) -> Result<(), InvokeError> {
        self.state
            .put_state(addr, balance.to_string().as_bytes())
            .map_err(|e| InvokeError(e.to_string()))
    }
}

impl<S: LedgerState> ContractInvoker for BeanBank<S> {
    fn invoke_contract(
        &mut self,
        contract: &str,
        function: &str,
        args: &[&str],
    ) -> Result<Vec<u8>, InvokeError> {
        if contract != self.contract_id {
            return Err(InvokeError(format!("unknown contract {contract}")));
        }
        if function != self.function {
            return Err(InvokeError(format!(
                "Received unknown function invocation: {function}"
            )));
        }
        let [from, to, amount] = args else {
            return Err(InvokeError(
                "Incorrect number of arguments. Expecting 3".into(),
            ));
        };
        let amount: u64 = amount
            .parse()
            .map_err(|_| InvokeError(format!("invalid bean amount '{amount}'")))?;
        self.transfer(from, to, amount)?;
        Ok(Vec::new())
    }
}
