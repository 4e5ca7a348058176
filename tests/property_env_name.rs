use proptest::prelude::*;
use vcap_env::domain::models::{credential_env_name, service_env_prefix};
use vcap_env::{to_env_name, Binder, InMemoryEnv, VCAP_SERVICES_ENV};

proptest! {
    /// Property: deriving a name twice changes nothing
    #[test]
    fn prop_to_env_name_is_idempotent(name in "\\PC{0,32}") {
        let once = to_env_name(&name);
        prop_assert_eq!(to_env_name(&once), once);
    }

    /// Property: output never contains lowercase ASCII or hyphens, and every
    /// other character is kept in place
    #[test]
    fn prop_to_env_name_only_touches_ascii_lowercase_and_hyphens(name in "\\PC{0,32}") {
        let derived = to_env_name(&name);

        prop_assert_eq!(derived.chars().count(), name.chars().count());
        prop_assert!(!derived.chars().any(|c| c.is_ascii_lowercase() || c == '-'));

        for (original, converted) in name.chars().zip(derived.chars()) {
            if original != '-' && !original.is_ascii_lowercase() {
                prop_assert_eq!(original, converted);
            }
        }
    }

    /// Property: a credential name is its service prefix plus the derived key
    #[test]
    fn prop_credential_name_is_prefixed(service in "[a-z0-9-]{1,12}", key in "[a-zA-Z0-9_-]{1,12}") {
        let prefix = service_env_prefix(&service);
        let name = credential_env_name(&prefix, &key);

        prop_assert!(name.starts_with(&prefix));
        prop_assert_eq!(&name[prefix.len()..], to_env_name(&key));
    }

    /// Property: a second bind never writes anything
    #[test]
    fn prop_bind_is_idempotent(
        credentials in prop::collection::btree_map("[a-z-]{1,8}", "[a-zA-Z0-9 ]{0,8}", 0..6)
    ) {
        let raw = serde_json::json!({"svc": [{"name": "svc", "credentials": credentials}]})
            .to_string();
        let env = InMemoryEnv::from_pairs([(VCAP_SERVICES_ENV, raw)]);
        let binder = Binder::new(&env);

        binder.bind().map_err(|e| TestCaseError::fail(e.to_string()))?;
        let after_first = env.snapshot();

        let second = binder.bind().map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(second.bound.is_empty());
        prop_assert_eq!(env.snapshot(), after_first);
    }
}
