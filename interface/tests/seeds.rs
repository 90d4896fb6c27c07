use quotient_interface::{
    error::InterfaceError,
    seeds::{
        create_address_with_seed,
        find_app_account_address,
        APP_ACCOUNT_SEED,
    },
};
use sha2::{
    Digest,
    Sha256,
};
use solana_sdk::pubkey::Pubkey;

#[test]
fn derivation_is_deterministic() {
    let payer = Pubkey::new_unique();
    let program = Pubkey::new_unique();

    let first = find_app_account_address(&payer, &program).unwrap();
    let second = find_app_account_address(&payer, &program).unwrap();
    assert_eq!(first, second);
}

#[test]
fn derivation_matches_sha256_of_base_seed_owner() {
    let payer = Pubkey::new_unique();
    let program = Pubkey::new_unique();

    let mut hasher = Sha256::new();
    hasher.update(payer.as_ref());
    hasher.update(APP_ACCOUNT_SEED.as_bytes());
    hasher.update(program.as_ref());
    let expected: [u8; 32] = hasher.finalize().into();

    let derived = find_app_account_address(&payer, &program).unwrap();
    assert_eq!(derived.to_bytes(), expected);
}

#[test]
fn changing_any_input_changes_the_address() {
    let payer = Pubkey::new_unique();
    let program = Pubkey::new_unique();
    let baseline = create_address_with_seed(&payer, APP_ACCOUNT_SEED, &program).unwrap();

    let other_payer = create_address_with_seed(&Pubkey::new_unique(), "app", &program).unwrap();
    let other_seed = create_address_with_seed(&payer, "apq", &program).unwrap();
    let other_program = create_address_with_seed(&payer, "app", &Pubkey::new_unique()).unwrap();

    assert_ne!(baseline, other_payer);
    assert_ne!(baseline, other_seed);
    assert_ne!(baseline, other_program);
}

#[test]
fn overlong_seeds_are_rejected() {
    let payer = Pubkey::new_unique();
    let program = Pubkey::new_unique();
    let seed = "a".repeat(33);

    assert_eq!(
        create_address_with_seed(&payer, &seed, &program),
        Err(InterfaceError::InvalidSeed)
    );
}
