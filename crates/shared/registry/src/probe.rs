//! Startup probing for dynamic code.
//!
//! A runtime can run generated code through the JIT or through the
//! interpreter. Dynamic code is supported if either is usable and compiled
//! only when the JIT is.

use rtfeat_domain::config::DynamicCodeConfig;
use rtfeat_domain::{DynamicCode, ExecutionEngine};
use tracing::{debug, warn};

/// Whether the target allows mapping writable pages as executable.
///
/// WebAssembly and Apple's mobile platforms forbid it, leaving the
/// interpreter as the only engine.
#[must_use]
pub const fn platform_allows_jit() -> bool {
    !cfg!(any(
        target_arch = "wasm32",
        target_os = "ios",
        target_os = "tvos",
        target_os = "watchos",
        target_os = "visionos",
    ))
}

/// Resolves the dynamic-code mode for this process.
#[must_use]
pub fn probe_dynamic_code(config: &DynamicCodeConfig) -> DynamicCode {
    resolve(config, platform_allows_jit())
}

/// Resolves the dynamic-code mode against an explicit platform capability.
#[must_use]
pub fn resolve(config: &DynamicCodeConfig, jit_allowed: bool) -> DynamicCode {
    if !config.enabled {
        debug!("Dynamic code disabled by configuration");
        return DynamicCode::Unsupported;
    }

    let mode = match config.engine {
        ExecutionEngine::None => DynamicCode::Unsupported,
        ExecutionEngine::Interpreter => DynamicCode::Interpreted,
        ExecutionEngine::Auto if jit_allowed => DynamicCode::Compiled,
        ExecutionEngine::Auto => DynamicCode::Interpreted,
        ExecutionEngine::Jit if jit_allowed => DynamicCode::Compiled,
        ExecutionEngine::Jit => {
            warn!("JIT requested but not permitted on this platform, falling back to interpreter");
            DynamicCode::Interpreted
        },
    };

    debug!(engine = %config.engine, jit_allowed, mode = %mode, "Dynamic code probed");
    mode
}
