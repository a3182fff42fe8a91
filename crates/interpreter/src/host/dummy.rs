//! An in-memory [`Host`] used by unit tests and examples.

use crate::{
    access::AccessTracker,
    host::{Host, SStoreResult, SelfDestructResult},
    instructions::instruction_table,
    interpreter::{Contract, Interpreter},
    interpreter_action::{CallInputs, CallOutcome, CreateInputs, CreateOutcome, CreateScheme},
    Gas, InstructionResult,
};
use primitives::{
    hardfork::SpecId, keccak256, Address, Bytes, HashMap, HashSet, B256, U256, CALL_STACK_LIMIT,
    KECCAK_EMPTY,
};

/// One storage slot: the value at transaction start and the current value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StorageSlot {
    /// Value when the transaction started.
    pub original_value: U256,
    /// Current value.
    pub present_value: U256,
}

/// An in-memory account.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DummyAccount {
    /// Account balance.
    pub balance: U256,
    /// Account nonce.
    pub nonce: u64,
    /// Account code.
    pub code: Bytes,
    /// Account storage.
    pub storage: HashMap<U256, StorageSlot>,
}

impl DummyAccount {
    /// An account holding only a balance.
    pub fn with_balance(balance: U256) -> Self {
        Self {
            balance,
            ..Default::default()
        }
    }

    /// An account holding only code.
    pub fn with_code(code: Bytes) -> Self {
        Self {
            code,
            ..Default::default()
        }
    }

    fn is_empty(&self) -> bool {
        self.balance.is_zero() && self.nonce == 0 && self.code.is_empty()
    }
}

/// A self-contained [`Host`]: owns the account map and the transaction's
/// [`AccessTracker`], and executes sub-frames recursively against itself so
/// that warmth crosses real frame boundaries. Creations install the new
/// account without running its init code.
#[derive(Clone, Debug, Default)]
pub struct DummyHost {
    /// Account state.
    pub accounts: HashMap<Address, DummyAccount>,
    /// Transaction-scoped access tracker.
    pub access: AccessTracker,
    /// The active fork.
    pub spec: SpecId,
    /// Accounts scheduled for destruction in this transaction.
    pub destroyed: HashSet<Address>,
    depth: usize,
}

impl DummyHost {
    /// Creates an empty host for the given fork.
    pub fn new(spec: SpecId) -> Self {
        Self {
            spec,
            ..Default::default()
        }
    }

    /// Inserts an account.
    pub fn insert_account(&mut self, address: Address, account: DummyAccount) {
        self.accounts.insert(address, account);
    }

    /// Inserts a storage slot whose original and present value are `value`.
    pub fn insert_storage(&mut self, address: Address, key: U256, value: U256) {
        self.accounts.entry(address).or_default().storage.insert(
            key,
            StorageSlot {
                original_value: value,
                present_value: value,
            },
        );
    }

    fn account(&mut self, address: Address) -> &mut DummyAccount {
        self.accounts.entry(address).or_default()
    }
}

impl Host for DummyHost {
    fn access_mut(&mut self) -> &mut AccessTracker {
        &mut self.access
    }

    fn balance(&mut self, address: Address) -> Option<U256> {
        Some(
            self.accounts
                .get(&address)
                .map(|account| account.balance)
                .unwrap_or_default(),
        )
    }

    fn code(&mut self, address: Address) -> Option<Bytes> {
        Some(
            self.accounts
                .get(&address)
                .map(|account| account.code.clone())
                .unwrap_or_default(),
        )
    }

    fn code_hash(&mut self, address: Address) -> Option<B256> {
        let hash = match self.accounts.get(&address) {
            Some(account) if !account.code.is_empty() => keccak256(&account.code),
            _ => KECCAK_EMPTY,
        };
        Some(hash)
    }

    fn account_is_empty(&mut self, address: Address) -> Option<bool> {
        Some(
            self.accounts
                .get(&address)
                .map(|account| account.is_empty())
                .unwrap_or(true),
        )
    }

    fn sload(&mut self, address: Address, key: U256) -> Option<U256> {
        Some(
            self.accounts
                .get(&address)
                .and_then(|account| account.storage.get(&key))
                .map(|slot| slot.present_value)
                .unwrap_or_default(),
        )
    }

    fn sstore(&mut self, address: Address, key: U256, value: U256) -> Option<SStoreResult> {
        let slot = self.account(address).storage.entry(key).or_default();
        let result = SStoreResult {
            original_value: slot.original_value,
            present_value: slot.present_value,
            new_value: value,
        };
        slot.present_value = value;
        Some(result)
    }

    fn selfdestruct(&mut self, address: Address, target: Address) -> Option<SelfDestructResult> {
        let balance = self
            .accounts
            .get(&address)
            .map(|account| account.balance)
            .unwrap_or_default();
        let target_exists = self
            .accounts
            .get(&target)
            .map(|account| !account.is_empty())
            .unwrap_or(false);
        self.account(address).balance = U256::ZERO;
        self.account(target).balance += balance;
        Some(SelfDestructResult {
            had_value: !balance.is_zero(),
            target_exists,
            previously_destroyed: !self.destroyed.insert(address),
        })
    }

    fn create_address(
        &mut self,
        caller: Address,
        scheme: CreateScheme,
        init_code: &Bytes,
    ) -> Address {
        match scheme {
            CreateScheme::Create => {
                let nonce = self
                    .accounts
                    .get(&caller)
                    .map(|account| account.nonce)
                    .unwrap_or_default();
                caller.create(nonce)
            }
            CreateScheme::Create2 { salt } => caller.create2_from_code(B256::from(salt), init_code),
        }
    }

    fn call(&mut self, inputs: CallInputs) -> CallOutcome {
        if self.depth >= CALL_STACK_LIMIT {
            return CallOutcome {
                result: InstructionResult::CallTooDeep,
                gas: Gas::new(inputs.gas_limit),
                output: Bytes::new(),
            };
        }

        if let Some(value) = inputs.value.transfer() {
            if !value.is_zero() {
                if self.account(inputs.caller).balance < value {
                    return CallOutcome {
                        result: InstructionResult::OutOfFund,
                        gas: Gas::new(inputs.gas_limit),
                        output: Bytes::new(),
                    };
                }
                self.account(inputs.caller).balance -= value;
                self.account(inputs.target_address).balance += value;
            }
        }

        let contract = Contract::new(
            inputs.target_address,
            inputs.caller,
            inputs.code,
            inputs.input,
            inputs.value.get(),
        );
        let mut frame = Interpreter::new(contract, inputs.gas_limit, self.spec, inputs.is_static);
        let table = instruction_table::<Self>(self.spec);

        self.depth += 1;
        let result = frame.run(&table, self);
        self.depth -= 1;

        CallOutcome {
            result,
            gas: frame.gas,
            output: frame.return_data,
        }
    }

    fn create(&mut self, inputs: CreateInputs) -> CreateOutcome {
        let address = self.create_address(inputs.caller, inputs.scheme, &inputs.init_code);
        self.account(inputs.caller).nonce += 1;

        if self.account(inputs.caller).balance < inputs.value {
            return CreateOutcome {
                result: InstructionResult::OutOfFund,
                address: None,
                gas: Gas::new(inputs.gas_limit),
                output: Bytes::new(),
            };
        }
        self.account(inputs.caller).balance -= inputs.value;
        let created = self.account(address);
        created.balance += inputs.value;
        created.nonce = 1;

        CreateOutcome {
            result: InstructionResult::Stop,
            address: Some(address),
            gas: Gas::new(inputs.gas_limit),
            output: Bytes::new(),
        }
    }
}
