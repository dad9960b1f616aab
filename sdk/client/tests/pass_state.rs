//! Pass-client state machine tests: configuration and signer requirements
//! must fail before any transport call is attempted. The provider below
//! points at a closed port, so any accidental network round trip would
//! surface as a chain-call error instead of the expected variant.

use ethers::types::Address;
use serde_json::{Value, json};
use zkpass_client::{
    Availability, BalancePass, IdentityPass, PassConfig, PassError, ProviderSource, ZkPass,
    ZkPassConfig,
};

fn offline_source() -> Option<ProviderSource> {
    Some(ProviderSource::Url("http://127.0.0.1:9".into()))
}

fn contract_address() -> Address {
    Address::from_low_u64_be(0xbeef)
}

fn sample_proof() -> Value {
    json!({
        "pi_a": ["1", "2", "1"],
        "pi_b": [["1", "2"], ["3", "4"], ["1", "0"]],
        "pi_c": ["5", "6", "1"],
    })
}

fn configured_balance_pass() -> BalancePass {
    BalancePass::new(PassConfig {
        chain_id: 31337,
        provider: offline_source(),
        address: Some(contract_address()),
    })
    .unwrap()
}

#[tokio::test]
async fn write_without_signer_fails_with_signer_required() {
    let pass = configured_balance_pass();

    let err = pass
        .submit_proof(None, &sample_proof(), &json!(["1", "2"]))
        .await
        .unwrap_err();

    assert!(matches!(err, PassError::SignerRequired));
}

#[tokio::test]
async fn unconfigured_address_fails_with_config_error() {
    let pass = BalancePass::new(PassConfig {
        chain_id: 31337,
        provider: offline_source(),
        address: None,
    })
    .unwrap();

    let err = pass.get_root().await.unwrap_err();
    assert!(matches!(err, PassError::Config(_)));

    // Address is checked before the signer on the write path.
    let err = pass
        .submit_proof(None, &sample_proof(), &json!(["1", "2"]))
        .await
        .unwrap_err();
    assert!(matches!(err, PassError::Config(_)));

    let err = pass.on_access_granted(|_| {}).unwrap_err();
    assert!(matches!(err, PassError::Config(_)));
}

#[tokio::test]
async fn malformed_hex_argument_fails_with_format_error() {
    let pass = configured_balance_pass();

    let err = pass.has_nullifier_been_used("abc").await.unwrap_err();
    assert!(matches!(err, PassError::Format(_)));
}

#[tokio::test]
async fn wrong_signal_count_fails_before_submission() {
    let pass = configured_balance_pass();
    let wallet: ethers::signers::LocalWallet =
        "0000000000000000000000000000000000000000000000000000000000000001"
            .parse()
            .unwrap();

    let err = pass
        .submit_proof(Some(&wallet), &sample_proof(), &json!(["1", "2", "3"]))
        .await
        .unwrap_err();

    assert!(matches!(err, PassError::Format(_)));
}

#[tokio::test]
async fn identity_stub_rejects_everything() {
    let pass = IdentityPass::not_yet_available();

    assert_eq!(pass.availability(), Availability::NotYetAvailable);
    assert!(matches!(
        pass.get_current_root("0x01").await,
        Err(PassError::NotImplemented(_))
    ));
    assert!(matches!(
        pass.is_nullifier_used("0x01").await,
        Err(PassError::NotImplemented(_))
    ));
    assert!(matches!(
        pass.submit_proof(None, &sample_proof(), &json!(["1", "2", "3"]))
            .await,
        Err(PassError::NotImplemented(_))
    ));
    assert!(pass.on_identity_pass_used(|_| {}).is_err());
}

#[tokio::test]
async fn facade_validates_config() {
    let err = ZkPass::new(ZkPassConfig {
        chain_id: 0,
        provider: offline_source(),
        balance_pass_address: Some(contract_address()),
    })
    .unwrap_err();
    assert!(matches!(err, PassError::Config(_)));

    let err = ZkPass::new(ZkPassConfig {
        chain_id: 31337,
        provider: None,
        balance_pass_address: Some(contract_address()),
    })
    .unwrap_err();
    assert!(matches!(err, PassError::Provider(_)));
}

#[tokio::test]
async fn facade_builds_shared_clients() {
    let client = ZkPass::new(ZkPassConfig {
        chain_id: 31337,
        provider: offline_source(),
        balance_pass_address: Some(contract_address()),
    })
    .unwrap();

    assert_eq!(client.chain_id(), 31337);
    assert_eq!(client.balance_pass().address(), Some(contract_address()));
    assert_eq!(
        client.balance_pass().availability(),
        Availability::Implemented
    );

    let identity = client.identity_pass(Address::from_low_u64_be(0xcafe)).unwrap();
    assert_eq!(identity.availability(), Availability::Implemented);

    let reputation = client.reputation_pass();
    assert_eq!(reputation.availability(), Availability::NotYetAvailable);
}
