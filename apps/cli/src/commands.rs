//! Subcommand handlers. Each writes to the given sink so tests can capture output.

use anyhow::{Result, bail};
use rtfeat::FeatureRegistry;
use rtfeat::names::{IS_DYNAMIC_CODE_COMPILED, IS_DYNAMIC_CODE_SUPPORTED};
use std::io::Write;

/// Wide enough for the longest known flag name.
const NAME_WIDTH: usize = 36;

pub(crate) fn check(
    registry: &FeatureRegistry,
    names: &[String],
    require: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut missing = Vec::new();
    for name in names {
        let supported = registry.is_supported(name);
        writeln!(out, "{name}\t{supported}")?;
        if !supported {
            missing.push(name.as_str());
        }
    }

    if require && !missing.is_empty() {
        bail!("unsupported features: {}", missing.join(", "));
    }
    Ok(())
}

pub(crate) fn list(registry: &FeatureRegistry, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, registry)?;
        writeln!(out)?;
        return Ok(());
    }

    for flag in registry.flags() {
        writeln!(
            out,
            "{:<width$} {:<5} {}",
            flag.name,
            flag.is_supported,
            flag.kind(),
            width = NAME_WIDTH
        )?;
    }
    Ok(())
}

pub(crate) fn probe(registry: &FeatureRegistry, out: &mut impl Write) -> Result<()> {
    writeln!(out, "dynamic code: {}", registry.dynamic_code())?;
    writeln!(out, "{IS_DYNAMIC_CODE_SUPPORTED}: {}", registry.is_dynamic_code_supported())?;
    writeln!(out, "{IS_DYNAMIC_CODE_COMPILED}: {}", registry.is_dynamic_code_compiled())?;
    Ok(())
}
