use quotient_client::{
    context::AppContext,
    error::{
        ErrorKind,
        QuotientError,
    },
    pipeline::{
        check_result,
        ensure_app_account,
        run_program,
    },
    test_helpers::MockRpc,
};
use quotient_interface::state::AccountData;
use solana_account::Account;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signer,
    },
};

#[tokio::test]
async fn reads_what_the_program_wrote() {
    let payer = Keypair::new();
    let program_id = Pubkey::new_unique();
    let rpc = MockRpc::new()
        .with_balance(payer.pubkey(), 10_000_000_000)
        .with_program(program_id);

    let app_account = ensure_app_account(&rpc, &payer, &program_id)
        .await
        .unwrap();
    let ctx = AppContext {
        rpc: &rpc,
        payer: &payer,
        program_id,
        app_account: app_account.address,
    };

    assert_eq!(check_result(&ctx).await.unwrap(), AccountData { result: 0 });

    run_program(&ctx, 2060, 2).await.unwrap();
    assert_eq!(
        check_result(&ctx).await.unwrap(),
        AccountData { result: 1030 }
    );

    let transactions = rpc.transactions();
    let run = &transactions.last().unwrap()[0];
    assert_eq!(run.program_id, program_id);
    assert_eq!(run.data, vec![0u8, 0, 8, 12, 0, 0, 0, 2]);
}

#[tokio::test]
async fn missing_account_is_not_found() {
    let payer = Keypair::new();
    let rpc = MockRpc::new();
    let ctx = AppContext {
        rpc: &rpc,
        payer: &payer,
        program_id: Pubkey::new_unique(),
        app_account: Pubkey::new_unique(),
    };

    let error = check_result(&ctx).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn wrong_length_is_a_decode_error() {
    let payer = Keypair::new();
    let program_id = Pubkey::new_unique();
    let app_account = Pubkey::new_unique();
    let mut account = Account::new(1_000_000, 5, &program_id);
    account.data = vec![42, 0, 0, 0, 0];
    let rpc = MockRpc::new().with_account(app_account, account);
    let ctx = AppContext {
        rpc: &rpc,
        payer: &payer,
        program_id,
        app_account,
    };

    let error = check_result(&ctx).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Decode);
    assert!(matches!(
        error,
        QuotientError::Decode {
            expected: 4,
            actual: 5,
            ..
        }
    ));
}
