//! Deterministic keypairs for tests.

use std::sync::LazyLock;

use solana_sdk::signature::Keypair;

/// Pubkey: 1118YLQaVU9DUhQjwphJukpKDSNMAiJSdvZfv8KY5Yi
pub static PAYER: LazyLock<Keypair> = LazyLock::new(|| {
    Keypair::from_base58_string(
        "65ZPkM5c2CuLcvozaVw5CRgKs9C8yHSociK85kUezr7oFCfhsK4CsFXGznEbvtn51NWdx6M33Q4o4fMBT8px6mDQ",
    )
});

/// Pubkey: 222bXXFW4c2UFBRncmEvkGLmQqLGwWBFBNJPx373Kc87
pub static PROGRAM: LazyLock<Keypair> = LazyLock::new(|| {
    Keypair::from_base58_string(
        "wuDnL8tvfZdoxUS3fSyuQ9CLrYjuGAAef1FYVYJumeBXnspD3193PWUVubSgB3nNo9LUbv3MzcdeGTykkq6RKBV",
    )
});

#[test]
fn check_test_keys() {
    use solana_sdk::signer::Signer;

    assert_eq!(
        PAYER.pubkey().to_string(),
        "1118YLQaVU9DUhQjwphJukpKDSNMAiJSdvZfv8KY5Yi"
    );
    assert_eq!(
        PROGRAM.pubkey().to_string(),
        "222bXXFW4c2UFBRncmEvkGLmQqLGwWBFBNJPx373Kc87"
    );
}
