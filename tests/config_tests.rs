// tests/config_tests.rs
use std::collections::HashMap;
use std::path::PathBuf;

use encrypted_storage::config::{load_from, load_with, Config};
use encrypted_storage::consts::{ENV_ALGORITHM, ENV_CONFIG_PATH, ENV_STORAGE_ROOT};
use encrypted_storage::error::ConfigError;
use encrypted_storage::{EncryptedStorage, EncryptionAlgorithm, StorageRoot};
use tempfile::tempdir;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults_when_sections_missing() {
    let conf = Config::from_toml_str("").unwrap();
    assert_eq!(conf, Config::default());
    assert_eq!(conf.cipher.algorithm, EncryptionAlgorithm::Aes);
    assert_eq!(conf.storage.root, None);
}

#[test]
fn test_parse_full_config() {
    let conf = Config::from_toml_str(
        r#"
        [storage]
        root = "/var/lib/secrets"

        [cipher]
        algorithm = "tripledes"
        "#,
    )
    .unwrap();

    assert_eq!(conf.storage.root, Some(PathBuf::from("/var/lib/secrets")));
    assert_eq!(conf.cipher.algorithm, EncryptionAlgorithm::TripleDes);
}

#[test]
fn test_parse_algorithm_aliases() {
    let conf = Config::from_toml_str("[cipher]\nalgorithm = \"3des\"").unwrap();
    assert_eq!(conf.cipher.algorithm, EncryptionAlgorithm::TripleDes);

    let conf = Config::from_toml_str("[cipher]\nalgorithm = \"cast5\"").unwrap();
    assert_eq!(conf.cipher.algorithm, EncryptionAlgorithm::Cast);

    let conf = Config::from_toml_str("[cipher]\nalgorithm = \"aes128\"").unwrap();
    assert_eq!(conf.cipher.algorithm, EncryptionAlgorithm::Aes);
}

#[test]
fn test_file_and_env_accept_the_same_algorithm_names() {
    for name in ["aes", "aes128", "blowfish", "des", "tripledes", "3des", "cast", "cast5", "rc4"] {
        let from_file = Config::from_toml_str(&format!("[cipher]\nalgorithm = \"{name}\""))
            .unwrap()
            .cipher
            .algorithm;
        let from_env: EncryptionAlgorithm = name.parse().unwrap();
        assert_eq!(from_file, from_env, "{name}");
    }
}

#[test]
fn test_unknown_algorithm_in_file_is_a_parse_error() {
    let result = Config::from_toml_str("[cipher]\nalgorithm = \"rot13\"");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_env_overrides_win() {
    let mut conf = Config::default();
    conf.apply_overrides(lookup(&[
        (ENV_STORAGE_ROOT, "/tmp/override"),
        (ENV_ALGORITHM, "Blowfish"),
    ]))
    .unwrap();

    assert_eq!(conf.storage.root, Some(PathBuf::from("/tmp/override")));
    assert_eq!(conf.cipher.algorithm, EncryptionAlgorithm::Blowfish);
}

#[test]
fn test_env_override_rejects_unknown_algorithm() {
    let mut conf = Config::default();
    let result = conf.apply_overrides(lookup(&[(ENV_ALGORITHM, "idea")]));

    assert!(matches!(result, Err(ConfigError::UnknownAlgorithm(name)) if name == "idea"));
    assert_eq!(conf.cipher.algorithm, EncryptionAlgorithm::Aes);
}

#[test]
fn test_load_from_file_and_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("encrypted-storage.toml");
    std::fs::write(&path, "[cipher]\nalgorithm = \"rc4\"\n").unwrap();

    assert_eq!(load_from(&path).unwrap().cipher.algorithm, EncryptionAlgorithm::Rc4);
    assert!(matches!(
        load_from(dir.path().join("missing.toml")),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn test_engine_from_config_uses_configured_root_and_algorithm() {
    let dir = tempdir().unwrap();
    let mut conf = Config::default();
    conf.storage.root = Some(dir.path().to_path_buf());
    conf.cipher.algorithm = EncryptionAlgorithm::Des;

    let storage = EncryptedStorage::from_config(&conf).unwrap();
    assert_eq!(storage.root().base(), dir.path());
    assert_eq!(storage.crypto().algorithm(), EncryptionAlgorithm::Des);
}

#[test]
fn test_algorithm_names_roundtrip_through_display() {
    for algorithm in EncryptionAlgorithm::ALL {
        let parsed: EncryptionAlgorithm = algorithm.to_string().parse().unwrap();
        assert_eq!(parsed, algorithm);
    }
}

#[test]
fn test_load_with_reads_file_then_applies_env() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("encrypted-storage.toml");
    std::fs::write(&path, "[storage]\nroot = \"/srv/a\"\n[cipher]\nalgorithm = \"blowfish\"\n")
        .unwrap();
    let path = path.to_str().unwrap();

    let conf = load_with(lookup(&[(ENV_CONFIG_PATH, path)])).unwrap();
    assert_eq!(conf.cipher.algorithm, EncryptionAlgorithm::Blowfish);
    assert_eq!(conf.storage.root, Some(PathBuf::from("/srv/a")));

    let conf = load_with(lookup(&[(ENV_CONFIG_PATH, path), (ENV_ALGORITHM, "cast")])).unwrap();
    assert_eq!(conf.cipher.algorithm, EncryptionAlgorithm::Cast);
    assert_eq!(conf.storage.root, Some(PathBuf::from("/srv/a")));
}

#[test]
fn test_load_with_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let conf = load_with(lookup(&[(ENV_CONFIG_PATH, missing.to_str().unwrap())])).unwrap();
    assert_eq!(conf, Config::default());
}

#[test]
fn test_load_with_invalid_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("encrypted-storage.toml");
    std::fs::write(&path, "[storage]\nroot = 5\n[cipher]\nalgorithm = \"blowfish\"\n").unwrap();

    let result = load_with(lookup(&[(ENV_CONFIG_PATH, path.to_str().unwrap())]));
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_load_with_bad_env_algorithm_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("encrypted-storage.toml");
    std::fs::write(&path, "[cipher]\nalgorithm = \"blowfish\"\n").unwrap();

    let result = load_with(lookup(&[
        (ENV_CONFIG_PATH, path.to_str().unwrap()),
        (ENV_ALGORITHM, "blowfsh"),
    ]));
    assert!(matches!(result, Err(ConfigError::UnknownAlgorithm(name)) if name == "blowfsh"));
}

#[test]
fn test_engine_from_config_without_root_uses_platform_default() {
    let conf = Config::default();

    match StorageRoot::platform_default() {
        Some(root) => {
            let storage = EncryptedStorage::from_config(&conf).unwrap();
            assert_eq!(storage.root().base(), root.base());
            assert_eq!(storage.crypto().algorithm(), EncryptionAlgorithm::Aes);
        }
        None => assert!(matches!(
            EncryptedStorage::from_config(&conf),
            Err(ConfigError::NoStorageRoot)
        )),
    }
}
