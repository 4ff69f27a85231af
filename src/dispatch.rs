// src/dispatch.rs
//! Name-based routing of runtime calls to typed operations
//!
//! Each protocol variant has a `const` route table. [`Router::for_variant`]
//! turns it into a lookup map once, at startup, and refuses tables with
//! empty or duplicate names.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::config::Config;
use crate::core::{
    define_listing, get_key, init_secret, read, set_ccid, write, Result, TransferOrchestrator,
};
use crate::enums::{InvocationKind, ProtocolVariant};
use crate::error::LedgerError;
use crate::external::ContractInvoker;
use crate::state::LedgerState;

/// Every operation the contract can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Init,
    Write,
    SetCcid,
    DefineListing,
    /// Full transfer (current protocol)
    Process,
    /// Decrypt-only `process` (legacy protocol)
    Decrypt,
    Read,
    GetKey,
}

impl Operation {
    /// Exact number of arguments the operation takes
    pub const fn arity(self) -> usize {
        match self {
            Operation::Init | Operation::SetCcid | Operation::Read | Operation::GetKey => 1,
            Operation::Write => 2,
            Operation::DefineListing | Operation::Process | Operation::Decrypt => 3,
        }
    }

    pub const fn kind(self) -> InvocationKind {
        match self {
            Operation::Read | Operation::GetKey | Operation::Decrypt => InvocationKind::Query,
            _ => InvocationKind::Invoke,
        }
    }
}

type Route = (&'static str, Operation);

const CURRENT_ROUTES: &[Route] = &[
    ("init", Operation::Init),
    ("write", Operation::Write),
    ("setCCID", Operation::SetCcid),
    ("setprice", Operation::DefineListing),
    ("setPrice", Operation::DefineListing),
    ("process", Operation::Process),
    ("read", Operation::Read),
    ("getkey", Operation::GetKey),
];

const LEGACY_ROUTES: &[Route] = &[
    ("init", Operation::Init),
    ("write", Operation::Write),
    ("setCCID", Operation::SetCcid),
    ("setPrice", Operation::DefineListing),
    ("process", Operation::Decrypt),
    ("read", Operation::Read),
];

/// Validated name → operation map
#[derive(Debug, Clone)]
pub struct Router {
    routes: BTreeMap<&'static str, Operation>,
}

impl Router {
    pub fn for_variant(variant: ProtocolVariant) -> Result<Self> {
        match variant {
            ProtocolVariant::Current => Self::from_table(CURRENT_ROUTES),
            ProtocolVariant::Legacy => Self::from_table(LEGACY_ROUTES),
        }
    }

    pub fn from_table(table: &[Route]) -> Result<Self> {
        let mut routes = BTreeMap::new();
        for &(name, op) in table {
            if name.is_empty() {
                return Err(LedgerError::Config("route with empty name".into()));
            }
            if routes.insert(name, op).is_some() {
                return Err(LedgerError::Config(format!("duplicate route '{name}'")));
            }
        }
        Ok(Self { routes })
    }

    /// Case-sensitive lookup
    pub fn resolve(&self, name: &str) -> Option<Operation> {
        self.routes.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }
}

/// The contract: a router plus the transfer machinery, configured once
pub struct Chaincode {
    variant: ProtocolVariant,
    router: Router,
    transfer: TransferOrchestrator,
}

impl Chaincode {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            variant: config.variant(),
            router: Router::for_variant(config.variant())?,
            transfer: TransferOrchestrator::from_config(config)?,
        })
    }

    pub fn variant(&self) -> ProtocolVariant {
        self.variant
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Entry point for state-changing calls
    pub fn invoke<S, C, A>(
        &self,
        state: &mut S,
        contracts: &mut C,
        function: &str,
        args: &[A],
    ) -> Result<Option<Vec<u8>>>
    where
        S: LedgerState + ?Sized,
        C: ContractInvoker + ?Sized,
        A: AsRef<str>,
    {
        info!("invoke is running {function}");
        let op = self.route(function, Some(InvocationKind::Invoke))?;
        self.run(op, state, contracts, args)
    }

    /// Entry point for read-only calls
    pub fn query<S, C, A>(
        &self,
        state: &mut S,
        contracts: &mut C,
        function: &str,
        args: &[A],
    ) -> Result<Option<Vec<u8>>>
    where
        S: LedgerState + ?Sized,
        C: ContractInvoker + ?Sized,
        A: AsRef<str>,
    {
        info!("query is running {function}");
        let op = self.route(function, Some(InvocationKind::Query))?;
        self.run(op, state, contracts, args)
    }

    /// Route by name alone, whatever the operation's kind
    pub fn dispatch<S, C, A>(
        &self,
        state: &mut S,
        contracts: &mut C,
        function: &str,
        args: &[A],
    ) -> Result<Option<Vec<u8>>>
    where
        S: LedgerState + ?Sized,
        C: ContractInvoker + ?Sized,
        A: AsRef<str>,
    {
        info!("dispatch is running {function}");
        let op = self.route(function, None)?;
        self.run(op, state, contracts, args)
    }

    fn route(&self, function: &str, kind: Option<InvocationKind>) -> Result<Operation> {
        let reported = kind.unwrap_or(InvocationKind::Invoke);
        match self.router.resolve(function) {
            Some(op) if kind.map_or(true, |k| k == op.kind()) => Ok(op),
            _ => {
                warn!("{reported} did not find func: {function}");
                Err(LedgerError::UnknownFunction {
                    kind: reported,
                    name: function.to_owned(),
                })
            }
        }
    }

    fn run<S, C, A>(
        &self,
        op: Operation,
        state: &mut S,
        contracts: &mut C,
        args: &[A],
    ) -> Result<Option<Vec<u8>>>
    where
        S: LedgerState + ?Sized,
        C: ContractInvoker + ?Sized,
        A: AsRef<str>,
    {
        if args.len() != op.arity() {
            return Err(LedgerError::ArgumentCount {
                expected: op.arity(),
                got: args.len(),
            });
        }
        let arg = move |i: usize| args[i].as_ref();

        match op {
            Operation::Init => init_secret(state, arg(0)).map(|_| None),
            Operation::Write => write(state, arg(0), arg(1).as_bytes()).map(|_| None),
            Operation::SetCcid => set_ccid(state, arg(0)).map(|_| None),
            Operation::DefineListing => {
                define_listing(state, arg(0), arg(1), arg(2)).map(|_| None)
            }
            Operation::Process => self
                .transfer
                .process(state, contracts, arg(0), arg(1), arg(2))
                .map(Some),
            Operation::Decrypt => self
                .transfer
                .decrypt_payload(arg(0))
                .map(|plaintext| Some(plaintext.expose_secret().to_vec())),
            Operation::Read => read(state, arg(0)).map(Some),
            Operation::GetKey => get_key(state, arg(0)).map(Some),
        }
    }
}
