//! Environment variable name derivation.
//!
//! A service named `service-1` with a credential `api-key` is exposed as
//! `SERVICE_1_API_KEY`. The service name becomes a prefix so that two
//! services sharing a credential name do not collide.

/// Convert an arbitrary name into environment variable form.
///
/// ASCII letters are uppercased and `-` becomes `_`. Every other character,
/// including `_`, digits and non-ASCII text, passes through unchanged.
pub fn to_env_name(name: &str) -> String {
    name.chars()
        .map(|c| if c == '-' { '_' } else { c.to_ascii_uppercase() })
        .collect()
}

/// Prefix under which a service's credentials are namespaced (`NAME_`).
pub fn service_env_prefix(service_name: &str) -> String {
    let mut prefix = to_env_name(service_name);
    prefix.push('_');
    prefix
}

/// Full variable name for one credential of a service.
pub fn credential_env_name(prefix: &str, credential_key: &str) -> String {
    format!("{prefix}{}", to_env_name(credential_key))
}
