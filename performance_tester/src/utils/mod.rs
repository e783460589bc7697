//!
//! The performance tester utils.
//!

pub mod timer;

use std::str::FromStr;

///
/// Parses an address, with or without the `0x` prefix.
///
pub fn parse_address(value: &str) -> anyhow::Result<web3::types::Address> {
    let value = value.trim();
    let stripped = value.strip_prefix("0x").unwrap_or(value);
    if stripped.len() != 2 * web3::types::Address::len_bytes() {
        anyhow::bail!("Address `{value}` must consist of 40 hexadecimal digits");
    }
    web3::types::Address::from_str(stripped)
        .map_err(|error| anyhow::anyhow!("Address `{value}` parsing: {error}"))
}

///
/// Overrides the default formatting for `Address`, which replaces the middle with an ellipsis.
///
pub fn address_as_string(value: &web3::types::Address) -> String {
    format!("0x{}", hex::encode(value.as_bytes()))
}

///
/// Overrides the default formatting for `H256`, which replaces the middle with an ellipsis.
///
pub fn h256_as_string(value: &web3::types::H256) -> String {
    format!("0x{}", hex::encode(value.as_bytes()))
}

///
/// Replaces every `${NAME}` placeholder in `template` with the value returned by `resolve`.
///
/// # Errors
///
/// If a placeholder is not closed or `resolve` knows nothing about its name.
///
pub fn substitute<F>(template: &str, resolve: F) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let regex = regex::Regex::new(r"\$\{([^}]*)\}").expect("Always valid");

    let mut result = String::with_capacity(template.len());
    let mut last = 0;
    for captures in regex.captures_iter(template) {
        let placeholder = captures.get(0).expect("Always exists");
        let name = captures.get(1).expect("Always exists").as_str();
        let value = resolve(name)
            .ok_or_else(|| anyhow::anyhow!("Placeholder `${{{name}}}` cannot be resolved"))?;
        result.push_str(&template[last..placeholder.start()]);
        result.push_str(value.as_str());
        last = placeholder.end();
    }

    let rest = &template[last..];
    if rest.contains("${") {
        anyhow::bail!("Unclosed placeholder in `{template}`");
    }
    result.push_str(rest);

    Ok(result)
}
