use std::collections::HashMap;

use anyhow::{anyhow, Result};
use optional::{Maybe, Optional};

type Layer = HashMap<&'static str, &'static str>;

/// Looks a key up in the session overrides, then the user config, then the defaults.
fn resolve(key: &str, session: &Layer, user: &Layer, defaults: &Layer) -> Optional<&'static str> {
    Optional::of(session.get(key).copied())
        .or(|| Optional::of(user.get(key).copied()))
        .or(|| Optional::of(defaults.get(key).copied()))
        .filter(|v| !v.trim().is_empty())
}

fn main() -> Result<()> {
    let session: Layer = HashMap::from([("theme", "  ")]);
    let user: Layer = HashMap::from([("threads", "8"), ("theme", "dark")]);
    let defaults: Layer = HashMap::from([("threads", "1"), ("timeout", "30")]);

    let threads = resolve("threads", &session, &user, &defaults)
        .map_nullable(|v| v.parse::<usize>().ok())
        .or_else(1);
    println!("threads: {threads}");

    // A blank session override does not fall through; it filters to absent.
    resolve("theme", &session, &user, &defaults)
        .if_present_or_else(|t| println!("theme: {t}"), || println!("theme: <unset>"));

    let timeout = resolve("timeout", &session, &user, &defaults)
        .or_else_throw(|| anyhow!("timeout is not configured"))?
        .peek(|v| println!("timeout (raw): {v}"))
        .get()?;
    println!("timeout: {timeout}s");

    Ok(())
}
