use std::sync::Mutex;

use alloy::{
    dyn_abi::DynSolValue,
    json_abi::JsonAbi,
    primitives::{Address, Bytes, TxHash},
};
use async_trait::async_trait;
use scripts::{
    constants::DEFAULT_GAS_LIMIT,
    deploy::{run, ContractDeployer, ContractFactory, DeployedContract},
    errors::ScriptError,
};

/// What the deployer was asked to do, in order
#[derive(Debug, Clone, PartialEq)]
enum Event {
    Compile,
    GetFactory(String),
    Deploy {
        name: String,
        args: Vec<DynSolValue>,
        gas_limit: u128,
    },
    Call {
        contract: Address,
        name: String,
    },
}

/// Step the recording deployer fails on
#[derive(Debug, Clone, Copy, PartialEq)]
enum FailAt {
    Nothing,
    Compile,
    Deploy(&'static str),
    Call,
}

struct RecordingDeployer {
    fail_at: FailAt,
    events: Mutex<Vec<Event>>,
    deployed: Mutex<u8>,
}

impl RecordingDeployer {
    fn new(fail_at: FailAt) -> Self {
        RecordingDeployer {
            fail_at,
            events: Mutex::new(Vec::new()),
            deployed: Mutex::new(0),
        }
    }

    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn deploys(&self) -> Vec<(String, Vec<DynSolValue>)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Deploy { name, args, .. } => Some((name, args)),
                _ => None,
            })
            .collect()
    }

    fn calls(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, Event::Call { .. }))
            .count()
    }
}

#[async_trait]
impl ContractDeployer for RecordingDeployer {
    async fn compile(&self) -> Result<(), ScriptError> {
        self.record(Event::Compile);
        if self.fail_at == FailAt::Compile {
            return Err(ScriptError::ContractCompilation(String::from("syntax error")));
        }
        Ok(())
    }

    async fn get_factory(&self, name: &str) -> Result<ContractFactory, ScriptError> {
        self.record(Event::GetFactory(name.to_string()));
        Ok(ContractFactory {
            name: name.to_string(),
            abi: JsonAbi::default(),
            bytecode: Bytes::from_static(&[0x60, 0x80, 0x60, 0x40]),
        })
    }

    async fn deploy(
        &self,
        factory: &ContractFactory,
        args: Vec<DynSolValue>,
        gas_limit: u128,
    ) -> Result<DeployedContract, ScriptError> {
        self.record(Event::Deploy {
            name: factory.name.clone(),
            args,
            gas_limit,
        });
        if matches!(self.fail_at, FailAt::Deploy(name) if name == factory.name) {
            return Err(ScriptError::ContractDeployment(String::from("reverted")));
        }

        let mut deployed = self.deployed.lock().unwrap();
        *deployed += 1;
        Ok(DeployedContract {
            name: factory.name.clone(),
            address: Address::with_last_byte(0xa0 + *deployed),
            abi: factory.abi.clone(),
            transaction_hash: TxHash::with_last_byte(*deployed),
        })
    }

    async fn call_entry_point(
        &self,
        contract: &DeployedContract,
        name: &str,
        _args: Vec<DynSolValue>,
    ) -> Result<TxHash, ScriptError> {
        self.record(Event::Call {
            contract: contract.address,
            name: name.to_string(),
        });
        if self.fail_at == FailAt::Call {
            return Err(ScriptError::ContractInteraction(String::from("reverted")));
        }
        Ok(TxHash::with_last_byte(0xff))
    }
}

#[tokio::test]
async fn deploys_in_order() {
    let deployer = RecordingDeployer::new(FailAt::Nothing);

    run(&deployer, DEFAULT_GAS_LIMIT).await.unwrap();

    let vault = Address::with_last_byte(0xa1);
    assert_eq!(
        deployer.events(),
        vec![
            Event::Compile,
            Event::GetFactory(String::from("Vault")),
            Event::Deploy {
                name: String::from("Vault"),
                args: vec![],
                gas_limit: 5_000_000,
            },
            Event::Call {
                contract: vault,
                name: String::from("initializeLock"),
            },
            Event::GetFactory(String::from("Factory")),
            Event::Deploy {
                name: String::from("Factory"),
                args: vec![DynSolValue::Address(vault)],
                gas_limit: 5_000_000,
            },
        ]
    );
}

#[tokio::test]
async fn factory_gets_the_vault_address() {
    let deployer = RecordingDeployer::new(FailAt::Nothing);

    let summary = run(&deployer, DEFAULT_GAS_LIMIT).await.unwrap();

    let deploys = deployer.deploys();
    assert_eq!(deploys.len(), 2);
    assert_eq!(deploys[1].0, "Factory");
    assert_eq!(deploys[1].1, vec![DynSolValue::Address(summary.vault)]);
}

#[tokio::test]
async fn success_reports_two_distinct_addresses() {
    let deployer = RecordingDeployer::new(FailAt::Nothing);

    let summary = run(&deployer, DEFAULT_GAS_LIMIT).await.unwrap();

    assert_ne!(summary.vault, summary.factory);
    assert_eq!(summary.init_transaction, TxHash::with_last_byte(0xff));
}

#[tokio::test]
async fn compile_failure_deploys_nothing() {
    let deployer = RecordingDeployer::new(FailAt::Compile);

    let err = run(&deployer, DEFAULT_GAS_LIMIT).await.unwrap_err();

    assert!(matches!(err, ScriptError::ContractCompilation(_)));
    assert_eq!(deployer.events(), vec![Event::Compile]);
}

#[tokio::test]
async fn vault_failure_stops_the_run() {
    let deployer = RecordingDeployer::new(FailAt::Deploy("Vault"));

    let err = run(&deployer, DEFAULT_GAS_LIMIT).await.unwrap_err();

    assert!(matches!(err, ScriptError::ContractDeployment(_)));
    assert_eq!(deployer.calls(), 0);
    assert_eq!(deployer.deploys().len(), 1);
    assert!(!deployer
        .events()
        .contains(&Event::GetFactory(String::from("Factory"))));
}

#[tokio::test]
async fn init_failure_skips_factory() {
    let deployer = RecordingDeployer::new(FailAt::Call);

    let err = run(&deployer, DEFAULT_GAS_LIMIT).await.unwrap_err();

    assert!(matches!(err, ScriptError::ContractInteraction(_)));
    assert_eq!(deployer.deploys().len(), 1);
    assert!(!deployer
        .events()
        .contains(&Event::GetFactory(String::from("Factory"))));
}

#[tokio::test]
async fn factory_failure_keeps_the_vault() {
    let deployer = RecordingDeployer::new(FailAt::Deploy("Factory"));

    let err = run(&deployer, DEFAULT_GAS_LIMIT).await.unwrap_err();

    assert!(matches!(err, ScriptError::ContractDeployment(_)));
    assert_eq!(deployer.calls(), 1);
    // Nothing undoes the vault deployment
    let names: Vec<String> = deployer.deploys().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Vault", "Factory"]);
    assert_eq!(*deployer.deployed.lock().unwrap(), 1);
}
