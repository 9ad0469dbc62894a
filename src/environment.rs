use std::env;
use std::str::FromStr;
use tracing::warn;

/// Retrieves an environment variable, treating unset and blank values the same.
pub fn get_env_var(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Retrieves an environment variable or returns `default` when it is unset or blank.
pub fn get_env_var_or(var: &str, default: &str) -> String {
    get_env_var(var).unwrap_or_else(|| default.to_string())
}

/// Parses an environment variable, falling back to `default` when it is unset or invalid.
///
/// # Arguments
/// - `var`: The name of the environment variable.
/// - `default`: Value used when the variable is missing or does not parse.
pub fn get_env_parsed<T: FromStr>(var: &str, default: T) -> T {
    match get_env_var(var) {
        Some(raw) => parse_or_default(var, &raw, default),
        None => default,
    }
}

fn parse_or_default<T: FromStr>(var: &str, raw: &str, default: T) -> T {
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("Ignoring invalid value {:?} for {}, using default", raw, var);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default("LLM_MAX_TOKENS", "250", 500u32), 250);
        assert_eq!(parse_or_default("LLM_MAX_TOKENS", "lots", 500u32), 500);
        assert_eq!(parse_or_default("LLM_TEMPERATURE", "0.2", 0.7f32), 0.2);
    }

    #[test]
    fn test_missing_var_uses_default() {
        let var = "POSTSMITH_TEST_SURELY_UNSET_VARIABLE";
        assert_eq!(get_env_var(var), None);
        assert_eq!(get_env_var_or(var, "fallback"), "fallback");
        assert_eq!(get_env_parsed(var, 42u16), 42);
    }
}
