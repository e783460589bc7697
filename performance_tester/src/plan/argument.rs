//!
//! The step argument.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::environment::Environment;
use crate::error::Error;
use crate::invoker::input::Input;

///
/// The step argument.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Argument {
    /// A literal tokenized against the ABI parameter type.
    Literal(String),
    /// The caller account with the specified index.
    Account(usize),
    /// The address of the named contract instance.
    Address(String),
    /// A value returned by an earlier step.
    Output {
        /// The index of the step which has produced the value.
        step: usize,
        /// The position of the value in the step output.
        #[serde(default)]
        position: usize,
    },
}

impl Argument {
    ///
    /// A shortcut constructor.
    ///
    pub fn literal<S>(value: S) -> Self
    where
        S: ToString,
    {
        Self::Literal(value.to_string())
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn address(instance: &str) -> Self {
        Self::Address(instance.to_owned())
    }

    ///
    /// Resolves the argument of step `index` into an invocation input.
    ///
    /// `outputs` holds the outputs of the steps run before `index`, in order.
    ///
    pub fn resolve(
        &self,
        index: usize,
        environment: &Environment,
        outputs: &[Option<Vec<web3::ethabi::Token>>],
    ) -> Result<Input, Error> {
        match self {
            Self::Literal(value) => Ok(Input::Literal(value.to_owned())),
            Self::Account(account) => Ok(Input::Token(web3::ethabi::Token::Address(
                environment.account(*account)?,
            ))),
            Self::Address(name) => Ok(Input::Token(web3::ethabi::Token::Address(
                environment.instance(name.as_str())?.address,
            ))),
            Self::Output { step, position } => {
                if *step >= index {
                    return Err(Error::dependency(format!(
                        "step #{index} references the output of step #{step}, which is not run before it"
                    )));
                }
                let output = outputs
                    .get(*step)
                    .and_then(|output| output.as_ref())
                    .ok_or_else(|| {
                        Error::dependency(format!(
                            "step #{index} references the output of step #{step}, which has produced none"
                        ))
                    })?;
                let value = output.get(*position).ok_or_else(|| {
                    Error::dependency(format!(
                        "step #{index} references value #{position} of step #{step}, which has produced only {}",
                        output.len()
                    ))
                })?;
                Ok(Input::Token(value.to_owned()))
            }
        }
    }
}

impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Account(index) => write!(f, "account #{index}"),
            Self::Address(name) => write!(f, "{name}.address"),
            Self::Output { step, position } => write!(f, "step #{step} output #{position}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use web3::ethabi::Token;

    use super::Argument;
    use crate::environment::instance::Instance;
    use crate::environment::target::Target;
    use crate::environment::Environment;
    use crate::error::Error;
    use crate::invoker::input::Input;

    fn environment() -> Environment {
        let abi = web3::ethabi::Contract::load("[]".as_bytes()).expect("Always valid");
        let mut instances = BTreeMap::new();
        instances.insert(
            "Swap".to_owned(),
            Instance::new(
                "Swap".to_owned(),
                web3::types::Address::repeat_byte(0x33),
                abi,
            ),
        );
        Environment::new(
            Target::Development,
            vec![
                web3::types::Address::repeat_byte(0x01),
                web3::types::Address::repeat_byte(0x02),
            ],
            instances,
        )
    }

    #[test]
    fn deserialize() {
        let arguments: Vec<Argument> = serde_json::from_str(
            r#"[
                { "literal": "100" },
                { "account": 1 },
                { "address": "Swap" },
                { "output": { "step": 13 } }
            ]"#,
        )
        .expect("Always valid");
        assert_eq!(
            arguments,
            vec![
                Argument::literal(100),
                Argument::Account(1),
                Argument::address("Swap"),
                Argument::Output {
                    step: 13,
                    position: 0
                },
            ]
        );
    }

    #[test]
    fn resolve_environment() {
        let environment = environment();
        assert_eq!(
            Argument::Account(1)
                .resolve(0, &environment, &[])
                .expect("Always valid"),
            Input::Token(Token::Address(web3::types::Address::repeat_byte(0x02)))
        );
        assert_eq!(
            Argument::address("Swap")
                .resolve(0, &environment, &[])
                .expect("Always valid"),
            Input::Token(Token::Address(web3::types::Address::repeat_byte(0x33)))
        );
        assert!(matches!(
            Argument::Account(2).resolve(0, &environment, &[]),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn resolve_output() {
        let environment = environment();
        let value = Token::Uint(web3::types::U256::from(42));
        let outputs = vec![None, Some(vec![value.clone()])];

        let argument = Argument::Output {
            step: 1,
            position: 0,
        };
        assert_eq!(
            argument.resolve(2, &environment, outputs.as_slice()).expect("Always valid"),
            Input::Token(value)
        );
        assert!(matches!(
            argument.resolve(1, &environment, outputs.as_slice()),
            Err(Error::Dependency(_))
        ));
    }

    #[test]
    fn resolve_output_missing() {
        let environment = environment();
        let outputs = vec![None, Some(vec![Token::Bool(true)])];

        let no_output = Argument::Output {
            step: 0,
            position: 0,
        };
        assert!(matches!(
            no_output.resolve(2, &environment, outputs.as_slice()),
            Err(Error::Dependency(_))
        ));

        let too_few = Argument::Output {
            step: 1,
            position: 1,
        };
        assert!(matches!(
            too_few.resolve(2, &environment, outputs.as_slice()),
            Err(Error::Dependency(_))
        ));
    }
}
