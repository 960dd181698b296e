#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, symbol_short, token, vec, Address,
    Env, Symbol,
};

use rentora_lib::{validation, AgreementState, AgreementTerms, RENT_PERIOD_SECONDS};

mod storage;

use storage::*;


#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    AlreadyEntered = 3,
    TermsMismatch = 4,
    NotTenant = 5,
    InvalidAmount = 6,
    AmountOverflow = 7,
    InsufficientBalance = 8,
    InsufficientAllowance = 9,
    UnauthorizedOwnershipState = 10,
}

#[contract]
pub struct RentalAgreement;

#[contractimpl]
impl RentalAgreement {
    /// One-time setup with the proposed terms. The landlord proposes; no
    /// funds move until the named tenant enters. Ownership of the lending
    /// service must be handed to this contract before entry is possible.
    pub fn initialize(
        env: Env,
        rent: i128,
        landlord: Address,
        tenant: Address,
        rent_deposit: i128,
        security_deposit: i128,
        lending_service: Address,
        token: Address,
    ) {
        if get_state(&env).is_some() {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        landlord.require_auth();

        if !validation::valid_amount(rent)
            || !validation::valid_amount(rent_deposit)
            || !validation::valid_amount(security_deposit)
        {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        set_terms(
            &env,
            &AgreementTerms {
                rent,
                landlord: landlord.clone(),
                rent_deposit,
                security_deposit,
            },
        );
        set_tenant(&env, &tenant);
        set_lending_service(&env, &lending_service);
        set_token(&env, &token);
        set_state(&env, &AgreementState::Proposed);

        env.events().publish((symbol_short!("init"),), (landlord, tenant));
    }

    /// Tenant accepts the agreement, restating every term. Pulls rent plus
    /// both deposits from the tenant in a single allowance-based transfer
    /// and starts the rent-period clock. Succeeds at most once.
    pub fn enter_agreement_as_tenant(
        env: Env,
        tenant: Address,
        rent: i128,
        landlord: Address,
        rent_deposit: i128,
        security_deposit: i128,
    ) {
        tenant.require_auth();

        match get_state(&env) {
            None => panic_with_error!(&env, Error::NotInitialized),
            Some(AgreementState::Active) => panic_with_error!(&env, Error::AlreadyEntered),
            Some(AgreementState::Proposed) => {}
        }

        if tenant != get_tenant(&env) {
            panic_with_error!(&env, Error::NotTenant);
        }

        // The stored terms stay authoritative; the restated ones must
        // match field for field.
        let terms = get_terms(&env);
        if rent != terms.rent
            || landlord != terms.landlord
            || rent_deposit != terms.rent_deposit
            || security_deposit != terms.security_deposit
        {
            panic_with_error!(&env, Error::TermsMismatch);
        }

        let agreement = env.current_contract_address();

        // Deposit capital must already be under this contract's control.
        let service_owner: Address = env.invoke_contract(
            &get_lending_service(&env),
            &Symbol::new(&env, "owner"),
            vec![&env],
        );
        if service_owner != agreement {
            panic_with_error!(&env, Error::UnauthorizedOwnershipState);
        }

        let total_up_front =
            match validation::total_up_front(rent, rent_deposit, security_deposit) {
                Some(total) => total,
                None => panic_with_error!(&env, Error::AmountOverflow),
            };

        let token_client = token::Client::new(&env, &get_token(&env));
        if token_client.balance(&tenant) < total_up_front {
            panic_with_error!(&env, Error::InsufficientBalance);
        }
        if token_client.allowance(&tenant, &agreement) < total_up_front {
            panic_with_error!(&env, Error::InsufficientAllowance);
        }
        token_client.transfer_from(&agreement, &tenant, &agreement, &total_up_front);

        let next_timestamp = env.ledger().timestamp() + RENT_PERIOD_SECONDS;
        set_next_timestamp(&env, next_timestamp);
        set_state(&env, &AgreementState::Active);

        env.events().publish(
            (Symbol::new(&env, "agreement_entered"),),
            (tenant, total_up_front, next_timestamp),
        );
    }

    /// Deadline for the current rent period. Zero until the tenant enters.
    pub fn next_timestamp(env: Env) -> u64 {
        get_next_timestamp(&env)
    }

    pub fn get_terms(env: Env) -> AgreementTerms {
        get_terms(&env)
    }

    /// Tenant of record. Entry is restricted to this identity.
    pub fn get_tenant(env: Env) -> Address {
        get_tenant(&env)
    }

    pub fn get_lending_service(env: Env) -> Address {
        get_lending_service(&env)
    }

    pub fn get_token(env: Env) -> Address {
        get_token(&env)
    }

    pub fn get_state(env: Env) -> AgreementState {
        match get_state(&env) {
            Some(state) => state,
            None => panic_with_error!(&env, Error::NotInitialized),
        }
    }

    pub fn is_entered(env: Env) -> bool {
        matches!(get_state(&env), Some(AgreementState::Active))
    }
}
