use soroban_sdk::{contracttype, Address, Env};

use rentora_lib::{AgreementState, AgreementTerms};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Terms,
    Tenant,
    LendingService,
    Token,
    State,
    NextTimestamp,
}

/* ---------------- TERMS ---------------- */

pub fn set_terms(env: &Env, terms: &AgreementTerms) {
    env.storage().instance().set(&DataKey::Terms, terms);
}

pub fn get_terms(env: &Env) -> AgreementTerms {
    env.storage().instance().get(&DataKey::Terms).unwrap()
}

/* ---------------- PARTIES ---------------- */

pub fn set_tenant(env: &Env, tenant: &Address) {
    env.storage().instance().set(&DataKey::Tenant, tenant);
}

pub fn get_tenant(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Tenant).unwrap()
}

/* ---------------- COLLABORATORS ---------------- */

pub fn set_lending_service(env: &Env, service: &Address) {
    env.storage().instance().set(&DataKey::LendingService, service);
}

pub fn get_lending_service(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::LendingService).unwrap()
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Token).unwrap()
}

/* ---------------- STATE ---------------- */

pub fn set_state(env: &Env, state: &AgreementState) {
    env.storage().instance().set(&DataKey::State, state);
}

/// None until `initialize` has run.
pub fn get_state(env: &Env) -> Option<AgreementState> {
    env.storage().instance().get(&DataKey::State)
}

pub fn set_next_timestamp(env: &Env, timestamp: u64) {
    env.storage().instance().set(&DataKey::NextTimestamp, &timestamp);
}

pub fn get_next_timestamp(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::NextTimestamp).unwrap_or(0)
}
