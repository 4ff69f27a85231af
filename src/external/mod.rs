// src/external/mod.rs
//! Cross-contract calls
//!
//! The transfer path moves beans by calling another contract through
//! [`ContractInvoker`]. The runtime supplies the real implementation;
//! [`BeanBank`] is an in-process stand-in for hosts without one.

mod bean;

pub use bean::BeanBank;

use crate::error::InvokeError;

/// Calls `function` on the contract named `contract` with positional args
pub trait ContractInvoker {
    fn invoke_contract(
        &mut self,
        contract: &str,
        function: &str,
        args: &[&str],
    ) -> Result<Vec<u8>, InvokeError>;
}

impl<C: ContractInvoker + ?Sized> ContractInvoker for &mut C {
    fn invoke_contract(
        &mut self,
        contract: &str,
        function: &str,
        args: &[&str],
    ) -> Result<Vec<u8>, InvokeError> {
        (**self).invoke_contract(contract, function, args)
    }
}
