//! Demo CLI: reads a request JSON document from stdin and a policy YAML
//! path from `argv[1]`, evaluates it, and prints the response to stdout.
//! The only place in the workspace that touches the filesystem (spec.md
//! §1: the core itself receives already-loaded byte blobs).

use anyhow::{Context as _, Result};
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let policy_path = std::env::args()
        .nth(1)
        .context("usage: policy-eval <policies.yaml> < request.json")?;
    let policy_bytes = std::fs::read(&policy_path)
        .with_context(|| format!("reading policy file '{policy_path}'"))?;
    let policy_set = policy_core::PolicySet::load_yaml(&policy_bytes)
        .with_context(|| format!("parsing policy file '{policy_path}'"))?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading request JSON from stdin")?;
    let request: policy_core::Request =
        serde_json::from_str(&input).context("decoding request JSON")?;

    let debug = request.debug;
    let response = policy_core::evaluate(&policy_set, None, request);
    println!("{}", serde_json::to_string_pretty(&response.to_wire_json(debug))?);

    Ok(())
}
