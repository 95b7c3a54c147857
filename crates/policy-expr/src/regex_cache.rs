//! Process-lifetime cache of compiled `MATCHES` patterns.
//!
//! Spec.md §5/§9: "regex compilation results for `MATCHES` ... *should* be
//! cached (compile once, use many); the cache is a simple mapping from
//! pattern string to compiled matcher, populated on first use, never
//! evicted in normal operation."

use crate::error::EvalError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

static CACHE: Lazy<Mutex<HashMap<String, Arc<Regex>>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// `MATCHES` is a full-string match, so the cached pattern is anchored with
/// `^(?:...)$` around whatever the author wrote.
pub fn get_or_compile(pattern: &str) -> Result<Arc<Regex>, EvalError> {
    if let Some(re) = CACHE.lock().unwrap().get(pattern) {
        return Ok(Arc::clone(re));
    }
    let anchored = format!("^(?:{pattern})$");
    let re = Regex::new(&anchored)
        .map_err(|e| EvalError::InvalidRegex(pattern.to_string(), e.to_string()))?;
    let re = Arc::new(re);
    CACHE
        .lock()
        .unwrap()
        .insert(pattern.to_string(), Arc::clone(&re));
    Ok(re)
}
