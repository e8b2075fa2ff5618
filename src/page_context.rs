use std::collections::HashMap;

/// The browser globals the pipeline touches (address bar, local storage),
/// behind a seam so everything runs and tests without a real browser.
pub trait PageContext {
    /// Reads a persisted value (local storage in the browser).
    fn read(&self, key: &str) -> Option<String>;

    /// Persists a value.
    fn write(&mut self, key: &str, value: &str);

    /// Replaces the current address without pushing a history entry.
    fn replace(&mut self, url: &str);

    /// The current address: path plus optional `?query`.
    fn location(&self) -> String;
}

/// In-memory context used by tests and the demo binary.
pub struct MemoryContext {
    location: String,
    storage: HashMap<String, String>,
}

impl MemoryContext {
    pub fn new(location: &str) -> Self {
        MemoryContext {
            location: location.to_string(),
            storage: HashMap::new(),
        }
    }
}

impl PageContext for MemoryContext {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.storage.insert(key.to_string(), value.to_string());
    }

    fn replace(&mut self, url: &str) {
        self.location = url.to_string();
    }

    fn location(&self) -> String {
        self.location.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_round_trip() {
        let mut ctx = MemoryContext::new("/");
        assert_eq!(ctx.read("language"), None);
        ctx.write("language", "fr");
        assert_eq!(ctx.read("language"), Some("fr".to_string()));
    }

    #[test]
    fn test_replace_swaps_location() {
        let mut ctx = MemoryContext::new("/posts");
        ctx.replace("/posts?q=water");
        assert_eq!(ctx.location(), "/posts?q=water");
    }
}
