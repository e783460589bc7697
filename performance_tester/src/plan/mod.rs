//!
//! The operation plan.
//!

pub mod argument;
pub mod step;
pub mod swap;

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::environment::Environment;
use crate::error::Error;
use crate::invoker::call::Call;
use crate::invoker::input::Input;
use crate::invoker::Invoker;
use crate::runner::Runner;

use self::argument::Argument;
use self::step::Step;

///
/// The operation plan.
///
/// The steps are run strictly one after another, and a step may only consume the
/// outputs of the steps run before it.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// The contracts the plan needs, in the deploy order.
    pub contracts: Vec<String>,
    /// The ordered steps.
    pub steps: Vec<Step>,
}

impl Plan {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(contracts: Vec<String>, steps: Vec<Step>) -> Self {
        Self { contracts, steps }
    }

    ///
    /// Checks the plan before anything is resolved.
    ///
    /// Account indexes are only checked at run time, when the accounts are known.
    ///
    pub fn validate(&self) -> Result<(), Error> {
        if self.steps.is_empty() {
            return Err(Error::configuration("the plan has no steps"));
        }

        let contracts: BTreeSet<&str> = self
            .contracts
            .iter()
            .map(|contract| contract.as_str())
            .collect();
        for (index, step) in self.steps.iter().enumerate() {
            if !contracts.contains(step.target.as_str()) {
                return Err(Error::configuration(format!(
                    "step #{index} `{}` targets `{}`, which is not in the plan contracts",
                    step.name, step.target
                )));
            }

            for argument in step.arguments.iter() {
                match argument {
                    Argument::Output { step: source, .. } if *source >= index => {
                        return Err(Error::dependency(format!(
                            "step #{index} `{}` references the output of step #{source}, which is not run before it",
                            step.name
                        )));
                    }
                    Argument::Address(name) if !contracts.contains(name.as_str()) => {
                        return Err(Error::configuration(format!(
                            "step #{index} `{}` references the address of `{name}`, which is not in the plan contracts",
                            step.name
                        )));
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    ///
    /// Checks the plan against the resolved environment before anything is sent.
    ///
    /// Every target, caller, account, and address must be resolved, and every method
    /// must be in the target ABI with the matching number of parameters.
    ///
    pub fn check(&self, environment: &Environment) -> Result<(), Error> {
        for (index, step) in self.steps.iter().enumerate() {
            let instance = environment.instance(step.target.as_str())?;
            if let Some(caller) = step.caller {
                environment.account(caller)?;
            }

            let function = instance.abi.function(step.name.as_str()).map_err(|error| {
                Error::configuration(format!(
                    "step #{index} `{}`: contract `{}`: {error}",
                    step.name, step.target
                ))
            })?;
            if function.inputs.len() != step.arguments.len() {
                return Err(Error::configuration(format!(
                    "step #{index} `{}` has {} arguments, but `{}.{}` expects {}",
                    step.name,
                    step.arguments.len(),
                    step.target,
                    step.name,
                    function.inputs.len()
                )));
            }

            for argument in step.arguments.iter() {
                match argument {
                    Argument::Account(account) => {
                        environment.account(*account)?;
                    }
                    Argument::Address(name) => {
                        environment.instance(name.as_str())?;
                    }
                    Argument::Literal(_) | Argument::Output { .. } => {}
                }
            }
        }

        Ok(())
    }

    ///
    /// Runs the steps in order, stopping at the first failure.
    ///
    /// Returns the output of every step, which is `None` for transactions.
    ///
    pub async fn execute<I>(
        &self,
        environment: &Environment,
        runner: &mut Runner<'_, I>,
    ) -> anyhow::Result<Vec<Option<Vec<web3::ethabi::Token>>>>
    where
        I: Invoker,
    {
        let mut outputs: Vec<Option<Vec<web3::ethabi::Token>>> =
            Vec::with_capacity(self.steps.len());

        for (index, step) in self.steps.iter().enumerate() {
            let instance = environment.instance(step.target.as_str())?;
            let inputs = step
                .arguments
                .iter()
                .map(|argument| argument.resolve(index, environment, outputs.as_slice()))
                .collect::<Result<Vec<Input>, Error>>()?;
            let caller = match step.caller {
                Some(caller) => Some(environment.account(caller)?),
                None => environment.default_caller(),
            };

            let call = Call::new(step.name.as_str(), instance, inputs, caller, step.kind);
            let label = step.to_string();
            let completion = runner.run(call, Some(label.as_str())).await?;
            outputs.push(completion.output);
        }

        Ok(outputs)
    }
}

impl TryFrom<&Path> for Plan {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let file = std::fs::File::open(path)
            .map_err(|error| Error::configuration(format!("plan file {path:?} opening: {error}")))?;
        let reader = std::io::BufReader::new(file);
        let plan: Self = serde_json::from_reader(reader)
            .map_err(|error| Error::configuration(format!("plan file {path:?} parsing: {error}")))?;
        Ok(plan)
    }
}

impl Default for Plan {
    fn default() -> Self {
        self::swap::plan()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::argument::Argument;
    use super::step::Step;
    use super::Plan;
    use crate::environment::instance::Instance;
    use crate::environment::target::Target;
    use crate::environment::Environment;
    use crate::error::Error;

    fn plan(steps: Vec<Step>) -> Plan {
        Plan::new(vec!["Pool".to_owned()], steps)
    }

    #[test]
    fn empty() {
        assert!(matches!(
            plan(vec![]).validate(),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn forward_reference() {
        let steps = vec![
            Step::transaction(
                "deposit",
                "Pool",
                vec![Argument::Output {
                    step: 1,
                    position: 0,
                }],
            ),
            Step::query("shares", "Pool", vec![]),
        ];
        assert!(matches!(
            plan(steps).validate(),
            Err(Error::Dependency(_))
        ));
    }

    #[test]
    fn self_reference() {
        let steps = vec![Step::transaction(
            "deposit",
            "Pool",
            vec![Argument::Output {
                step: 0,
                position: 0,
            }],
        )];
        assert!(matches!(
            plan(steps).validate(),
            Err(Error::Dependency(_))
        ));
    }

    #[test]
    fn unknown_target() {
        let steps = vec![Step::query("balanceOf", "Token", vec![])];
        assert!(matches!(
            plan(steps).validate(),
            Err(Error::Configuration(_))
        ));

        let steps = vec![Step::transaction(
            "approve",
            "Pool",
            vec![Argument::address("Token")],
        )];
        assert!(matches!(
            plan(steps).validate(),
            Err(Error::Configuration(_))
        ));
    }

    fn environment(accounts: usize) -> Environment {
        let abi = web3::ethabi::Contract::load(
            r#"[
                {
                    "type": "function",
                    "name": "deposit",
                    "inputs": [ { "name": "amount", "type": "uint256" } ],
                    "outputs": [],
                    "stateMutability": "nonpayable"
                },
                {
                    "type": "function",
                    "name": "shares",
                    "inputs": [ { "name": "account", "type": "address" } ],
                    "outputs": [ { "name": "", "type": "uint256" } ],
                    "stateMutability": "view"
                }
            ]"#
            .as_bytes(),
        )
        .expect("Always valid");
        let mut instances = BTreeMap::new();
        instances.insert(
            "Pool".to_owned(),
            Instance::new("Pool".to_owned(), web3::types::Address::repeat_byte(0x44), abi),
        );
        Environment::new(
            Target::Development,
            (1..=accounts as u64)
                .map(web3::types::Address::from_low_u64_be)
                .collect(),
            instances,
        )
    }

    #[test]
    fn check() {
        let steps = vec![
            Step::transaction("deposit", "Pool", vec![Argument::literal(100)]).with_caller(1),
            Step::query("shares", "Pool", vec![Argument::Account(1)]),
        ];
        plan(steps).check(&environment(2)).expect("Always valid");
    }

    #[test]
    fn check_caller_out_of_range() {
        let steps = vec![
            Step::transaction("deposit", "Pool", vec![Argument::literal(100)]),
            Step::transaction("deposit", "Pool", vec![Argument::literal(100)]).with_caller(2),
        ];
        assert!(matches!(
            plan(steps).check(&environment(2)),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn check_account_out_of_range() {
        let steps = vec![Step::query("shares", "Pool", vec![Argument::Account(2)])];
        assert!(matches!(
            plan(steps).check(&environment(2)),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn check_unknown_method() {
        let steps = vec![Step::transaction("withdraw", "Pool", vec![])];
        assert!(matches!(
            plan(steps).check(&environment(1)),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn check_arity() {
        let steps = vec![Step::transaction("deposit", "Pool", vec![])];
        let error = plan(steps).check(&environment(1)).expect_err("Must fail");
        assert!(matches!(error, Error::Configuration(_)));
        assert!(error.to_string().contains("expects 1"));
    }

    #[test]
    fn load() {
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");
        let path = directory.path().join("plan.json");
        std::fs::write(
            path.as_path(),
            r#"{
                "contracts": ["Pool"],
                "steps": [
                    { "name": "shares", "target": "Pool", "kind": "query", "arguments": [{ "account": 0 }] },
                    { "name": "withdraw", "target": "Pool", "arguments": [{ "output": { "step": 0 } }], "caller": 1 }
                ]
            }"#,
        )
        .expect("Plan writing failed");

        let loaded = Plan::try_from(path.as_path()).expect("Plan loading failed");
        let expected = plan(vec![
            Step::query("shares", "Pool", vec![Argument::Account(0)]),
            Step::transaction(
                "withdraw",
                "Pool",
                vec![Argument::Output {
                    step: 0,
                    position: 0,
                }],
            )
            .with_caller(1),
        ]);
        assert_eq!(loaded, expected);
        loaded.validate().expect("Always valid");
    }

    #[test]
    fn load_missing() {
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");
        let error = Plan::try_from(directory.path().join("missing.json").as_path())
            .expect_err("Must fail");
        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::Configuration(_))
        ));
    }
}
