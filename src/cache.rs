//! Tokenized pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::pattern;
use crate::pattern::tokens::Token;

/// Global cache for tokenized display patterns.
static CACHE: Mutex<Option<LruCache<String, Vec<Token>>>> = Mutex::new(None);

const CACHE_SIZE: usize = 100;

/// Get or tokenize a display pattern, using the cache.
pub fn get_or_tokenize(pattern: &str) -> Vec<Token> {
    let mut cache_guard = CACHE.lock().unwrap();

    let cache =
        cache_guard.get_or_insert_with(|| LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap()));

    if let Some(tokens) = cache.get(pattern) {
        return tokens.clone();
    }

    let tokens = pattern::tokenize(pattern);
    cache.put(pattern.to_string(), tokens.clone());
    tokens
}
