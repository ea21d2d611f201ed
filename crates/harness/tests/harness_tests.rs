//! Harness determinism tests.
//!
//! The RPC-facing tests need a local Hardhat or Anvil node on
//! `http://localhost:8545` and are `#[ignore]`d so the default suite stays
//! hermetic. Run them with `cargo test -p solpipe-harness -- --ignored`.

use alloy_primitives::{address, Address, Bytes, U256};
use alloy_provider::{Provider, ProviderBuilder};
use solpipe_common::{logging, Artifact, ArtifactStore, ContractId, Error, FsArtifactStore};
use solpipe_harness::{days_to_seconds, LedgerHarness, TokenSlots};
use tracing::info;

const LOCAL_RPC: &str = "http://localhost:8545";

fn test_address() -> Address {
    address!("00000000000000000000000000000000000000aa")
}

#[test]
fn fastforward_seconds_math() {
    assert_eq!(days_to_seconds(1.0), 86_400);
    assert_eq!(days_to_seconds(0.5), 43_200);
    assert_eq!(days_to_seconds(1.5), 129_600);
    assert_eq!(days_to_seconds(0.0), 0);
    // Sub-second fractions round to the nearest whole second.
    assert_eq!(days_to_seconds(1.0 / 86_400.0), 1);
}

#[tokio::test]
async fn set_token_balance_refuses_unknown_token() {
    logging::ensure_test_logging(None);
    // The slot lookup fails before any RPC is issued, so a dead endpoint is
    // fine here.
    let provider = ProviderBuilder::new().connect_http(LOCAL_RPC.parse().unwrap());
    let harness = LedgerHarness::new(provider, TokenSlots::new());

    let err = harness
        .set_token_balance(test_address(), test_address(), U256::from(1))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::LedgerState(_)));
    assert!(err.to_string().contains("balance-mapping slot"));
}

#[tokio::test]
async fn set_code_requires_existing_artifact() {
    logging::ensure_test_logging(None);
    let dir = tempfile::tempdir().unwrap();
    let store = FsArtifactStore::new(dir.path());
    let provider = ProviderBuilder::new().connect_http(LOCAL_RPC.parse().unwrap());
    let harness = LedgerHarness::new(provider, TokenSlots::new());

    let err = harness
        .set_code(test_address(), &ContractId::new("contracts/Gone.sol", "Gone"), &store)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ArtifactNotFound(_)));
}

#[tokio::test]
#[ignore = "requires a local hardhat/anvil node on :8545"]
async fn set_eth_balance_is_exact() {
    logging::ensure_test_logging(None);
    let provider = ProviderBuilder::new().connect(LOCAL_RPC).await.unwrap();
    let harness =
        LedgerHarness::new(ProviderBuilder::new().connect(LOCAL_RPC).await.unwrap(), TokenSlots::new());

    let target = U256::from(123_456_789_000_000_000u64);
    harness.set_eth_balance(test_address(), target).await.unwrap();

    let balance = provider.get_balance(test_address()).await.unwrap();
    assert_eq!(balance, target);
}

#[tokio::test]
#[ignore = "requires a local hardhat/anvil node on :8545"]
async fn set_code_installs_deployed_bytecode() {
    logging::ensure_test_logging(None);
    let dir = tempfile::tempdir().unwrap();
    let store = FsArtifactStore::new(dir.path());
    let id = ContractId::new("contracts/Stub.sol", "Stub");
    let deployed = Bytes::from(vec![0x60, 0x0a, 0x60, 0x0c]);
    store
        .write(
            &id,
            &Artifact {
                contract_name: "Stub".to_string(),
                source_name: "contracts/Stub.sol".to_string(),
                abi: Default::default(),
                bytecode: Bytes::new(),
                deployed_bytecode: deployed.clone(),
                storage_layout: None,
                extra: Default::default(),
            },
        )
        .unwrap();

    let provider = ProviderBuilder::new().connect(LOCAL_RPC).await.unwrap();
    let harness =
        LedgerHarness::new(ProviderBuilder::new().connect(LOCAL_RPC).await.unwrap(), TokenSlots::new());
    let installed = harness.set_code(test_address(), &id, &store).await.unwrap();
    assert_eq!(installed, deployed);

    let on_chain = provider.get_code_at(test_address()).await.unwrap();
    assert_eq!(on_chain, deployed);
}

#[tokio::test]
#[ignore = "requires a local hardhat/anvil node on :8545"]
async fn fastforward_advances_one_day() {
    logging::ensure_test_logging(None);
    let harness =
        LedgerHarness::new(ProviderBuilder::new().connect(LOCAL_RPC).await.unwrap(), TokenSlots::new());

    let applied = harness.fastforward(1.0).await.unwrap();
    assert_eq!(applied, 86_400);
    info!(applied, "clock advanced");
}
