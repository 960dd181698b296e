#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, symbol_short, token,
    Address, Env, Symbol,
};

use rentora_lib::validation;


#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Token,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
    InsufficientCapital = 4,
}

#[contract]
pub struct LendingService;

#[contractimpl]
impl LendingService {
    /// One-time setup. The deploying landlord starts as owner and is
    /// expected to hand control to the rental agreement before tenants
    /// enter it.
    pub fn initialize(env: Env, owner: Address, token: Address) {
        if env.storage().instance().has(&DataKey::Owner) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        owner.require_auth();
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Token, &token);

        env.events().publish((symbol_short!("init"),), owner);
    }

    /// The single principal authorized to direct this service.
    pub fn owner(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized))
    }

    /// Hands control to `new_owner`. The previous owner loses control the
    /// instant this commits; there is no unowned intermediate state.
    pub fn transfer_ownership(env: Env, new_owner: Address) {
        let previous = Self::owner(env.clone());
        previous.require_auth();

        env.storage().instance().set(&DataKey::Owner, &new_owner);

        env.events().publish(
            (Symbol::new(&env, "ownership_transferred"),),
            (previous, new_owner),
        );
    }

    /// Supply deposit capital to the service.
    pub fn fund(env: Env, from: Address, amount: i128) {
        from.require_auth();

        if amount <= 0 || !validation::valid_amount(amount) {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let token_client = token::Client::new(&env, &Self::token_address(&env));
        token_client.transfer(&from, &env.current_contract_address(), &amount);

        env.events().publish((Symbol::new(&env, "funded"),), (from, amount));
    }

    /// Release held capital. Only the current owner may direct this.
    pub fn lend_out(env: Env, to: Address, amount: i128) {
        let owner = Self::owner(env.clone());
        owner.require_auth();

        if amount <= 0 || !validation::valid_amount(amount) {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let token_client = token::Client::new(&env, &Self::token_address(&env));
        if token_client.balance(&env.current_contract_address()) < amount {
            panic_with_error!(&env, Error::InsufficientCapital);
        }
        token_client.transfer(&env.current_contract_address(), &to, &amount);

        env.events().publish((Symbol::new(&env, "lent"),), (to, amount));
    }

    /// Deposit capital currently held by the service.
    pub fn capital(env: Env) -> i128 {
        let token_client = token::Client::new(&env, &Self::token_address(&env));
        token_client.balance(&env.current_contract_address())
    }

    fn token_address(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
    }
}
