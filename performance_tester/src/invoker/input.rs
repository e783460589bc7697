//!
//! The invocation input.
//!

use web3::ethabi::token::LenientTokenizer;
use web3::ethabi::token::Tokenizer;

///
/// The invocation input.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A textual literal, tokenized against the ABI parameter type.
    Literal(String),
    /// An already typed value, such as an address or an earlier output.
    Token(web3::ethabi::Token),
}

impl Input {
    ///
    /// Converts the input into a token of the specified ABI type.
    ///
    pub fn tokenize(&self, kind: &web3::ethabi::ParamType) -> anyhow::Result<web3::ethabi::Token> {
        match self {
            Self::Literal(literal) if matches!(kind, web3::ethabi::ParamType::Address) => {
                crate::utils::parse_address(literal.as_str()).map(web3::ethabi::Token::Address)
            }
            Self::Literal(literal) => LenientTokenizer::tokenize(kind, literal.as_str())
                .map_err(|error| anyhow::anyhow!("Literal `{literal}` as `{kind}`: {error}")),
            Self::Token(token) if token.type_check(kind) => Ok(token.to_owned()),
            Self::Token(token) => anyhow::bail!("Value `{token}` is not of type `{kind}`"),
        }
    }

    ///
    /// Tokenizes the inputs against the parameter list.
    ///
    pub fn tokenize_all(
        inputs: &[Self],
        params: &[web3::ethabi::Param],
    ) -> anyhow::Result<Vec<web3::ethabi::Token>> {
        if inputs.len() != params.len() {
            anyhow::bail!(
                "Expected {} arguments, found {}",
                params.len(),
                inputs.len()
            );
        }

        inputs
            .iter()
            .zip(params.iter())
            .enumerate()
            .map(|(index, (input, param))| {
                input
                    .tokenize(&param.kind)
                    .map_err(|error| anyhow::anyhow!("Argument #{index} `{}`: {error}", param.name))
            })
            .collect()
    }
}
