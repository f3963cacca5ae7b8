use rtfeat_domain::ExecutionEngine;
use rtfeat_domain::config::{DynamicCodeConfig, RegistryConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let cfg = RegistryConfig::default();
    assert!(cfg.dynamic_code.enabled);
    assert_eq!(cfg.dynamic_code.engine, ExecutionEngine::Auto);
}

#[test]
fn registry_config_deserializes() {
    let raw = json!({ "dynamic_code": { "enabled": false, "engine": "interpreter" } });

    let cfg: RegistryConfig = serde_json::from_value(raw).expect("config deserialize");
    assert!(!cfg.dynamic_code.enabled);
    assert_eq!(cfg.dynamic_code.engine, ExecutionEngine::Interpreter);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let cfg: RegistryConfig = serde_json::from_value(json!({})).expect("empty config");
    assert_eq!(cfg, RegistryConfig::default());

    let partial: DynamicCodeConfig =
        serde_json::from_value(json!({ "engine": "jit" })).expect("partial config");
    assert!(partial.enabled);
    assert_eq!(partial.engine, ExecutionEngine::Jit);
}

#[test]
fn unknown_engine_is_rejected() {
    let raw = json!({ "dynamic_code": { "engine": "aot" } });
    assert!(serde_json::from_value::<RegistryConfig>(raw).is_err());
}
