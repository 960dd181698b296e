use soroban_sdk::{contracttype, Address};

/// The term tuple fixed when the landlord proposes the agreement. The
/// tenant must restate every field on entry; the stored copy stays
/// authoritative.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AgreementTerms {
    pub rent: i128,
    pub landlord: Address,
    pub rent_deposit: i128,
    pub security_deposit: i128,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
#[repr(u32)]
pub enum AgreementState {
    Proposed = 0,
    Active = 1,
}
