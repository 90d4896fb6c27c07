use quotient_client::{
    error::{
        ErrorKind,
        QuotientError,
    },
    pipeline::{
        check_program_deployed,
        ensure_app_account,
        read_program_id,
    },
    test_accounts::{
        PAYER,
        PROGRAM,
    },
    test_helpers::{
        mock_rent_exemption,
        MockRpc,
    },
    SYSTEM_PROGRAM_ID,
};
use quotient_interface::{
    seeds::find_app_account_address,
    state::AccountData,
};
use solana_account::Account;
use solana_keypair::write_keypair_file;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signer,
    },
};

const FUND_AMOUNT: u64 = 10_000_000_000;

fn funded_cluster(payer: &Keypair, program_id: Pubkey) -> MockRpc {
    MockRpc::new()
        .with_balance(payer.pubkey(), FUND_AMOUNT)
        .with_program(program_id)
}

#[tokio::test]
async fn provisioning_twice_creates_the_account_once() {
    let payer = &*PAYER;
    let program_id = PROGRAM.pubkey();
    let rpc = funded_cluster(payer, program_id);

    let first = ensure_app_account(&rpc, payer, &program_id)
        .await
        .unwrap();
    assert!(first.created);
    assert_eq!(
        first.address,
        find_app_account_address(&payer.pubkey(), &program_id).unwrap()
    );

    let account = rpc.get_account(&first.address).unwrap();
    assert_eq!(account.owner, program_id);
    assert_eq!(account.data.len(), AccountData::LEN);
    assert_eq!(account.lamports, mock_rent_exemption(AccountData::LEN));
    assert_eq!(rpc.transactions().len(), 1);

    let second = ensure_app_account(&rpc, payer, &program_id)
        .await
        .unwrap();
    assert!(!second.created);
    assert_eq!(second.address, first.address);
    assert_eq!(rpc.transactions().len(), 1);
}

#[tokio::test]
async fn failed_creation_is_a_submission_error() {
    let payer = &*PAYER;
    let program_id = PROGRAM.pubkey();
    let rpc = funded_cluster(payer, program_id).rejecting_transactions();

    let error = ensure_app_account(&rpc, payer, &program_id)
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Submission);

    let address = find_app_account_address(&payer.pubkey(), &program_id).unwrap();
    assert!(rpc.get_account(&address).is_none());
}

#[tokio::test]
async fn app_account_owned_by_another_program_is_rejected() {
    let payer = &*PAYER;
    let program_id = PROGRAM.pubkey();
    let address = find_app_account_address(&payer.pubkey(), &program_id).unwrap();
    let rpc = funded_cluster(payer, program_id)
        .with_account(address, Account::new(1_000_000, 0, &SYSTEM_PROGRAM_ID));

    let error = ensure_app_account(&rpc, payer, &program_id)
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Deployment);
    assert!(matches!(error, QuotientError::AppAccountOwner { .. }));
    assert!(rpc.transactions().is_empty());
}

#[test]
fn program_id_comes_from_the_keypair_file() {
    let dir = tempfile::tempdir().unwrap();
    let program = Keypair::new();
    let keypair_path = dir.path().join("quotient-keypair.json");
    let so_path = dir.path().join("quotient.so");
    write_keypair_file(&program, &keypair_path).unwrap();

    assert_eq!(
        read_program_id(&keypair_path, &so_path).unwrap(),
        program.pubkey()
    );

    let missing = read_program_id(&dir.path().join("missing.json"), &so_path).unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::Configuration);
    assert!(missing.to_string().contains("solana program deploy"));

    std::fs::write(dir.path().join("garbage.json"), "not a keypair").unwrap();
    let garbage = read_program_id(&dir.path().join("garbage.json"), &so_path).unwrap_err();
    assert_eq!(garbage.kind(), ErrorKind::Configuration);
}

#[tokio::test]
async fn missing_program_guidance_depends_on_the_build_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let so_path = dir.path().join("quotient.so");
    let program_id = Pubkey::new_unique();
    let rpc = MockRpc::new();

    let not_built = check_program_deployed(&rpc, &program_id, &so_path)
        .await
        .unwrap_err();
    assert_eq!(not_built.kind(), ErrorKind::Deployment);
    assert!(matches!(not_built, QuotientError::ProgramNotBuilt { .. }));

    std::fs::write(&so_path, b"\x7fELF").unwrap();
    let not_deployed = check_program_deployed(&rpc, &program_id, &so_path)
        .await
        .unwrap_err();
    assert_eq!(not_deployed.kind(), ErrorKind::Deployment);
    assert!(matches!(
        not_deployed,
        QuotientError::ProgramNotDeployed { .. }
    ));
}

#[tokio::test]
async fn program_must_be_executable() {
    let dir = tempfile::tempdir().unwrap();
    let so_path = dir.path().join("quotient.so");
    let program_id = Pubkey::new_unique();

    let data_account =
        MockRpc::new().with_account(program_id, Account::new(1, 0, &Pubkey::new_unique()));
    let error = check_program_deployed(&data_account, &program_id, &so_path)
        .await
        .unwrap_err();
    assert!(matches!(error, QuotientError::ProgramNotExecutable { .. }));

    let deployed = MockRpc::new().with_program(program_id);
    check_program_deployed(&deployed, &program_id, &so_path)
        .await
        .unwrap();
}
