//! Key/value providers consumed by the resolver

use std::collections::{BTreeMap, HashMap};

/// Abstract provider of optional build-identity strings.
///
/// `None` means the key is unset. A present key with an empty value is
/// returned as `Some(String::new())`; callers must not treat it as unset.
pub trait MetadataSource {
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: MetadataSource + ?Sized> MetadataSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl MetadataSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl MetadataSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

/// The process environment. Non-UTF-8 values are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl MetadataSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

/// Ordered stack of sources; the first layer holding a key wins, even when
/// its value is empty.
#[derive(Default)]
pub struct LayeredSource<'a> {
    layers: Vec<&'a dyn MetadataSource>,
}

impl<'a> LayeredSource<'a> {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Append a layer with lower precedence than every existing one
    pub fn with_layer(mut self, layer: &'a dyn MetadataSource) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl MetadataSource for LayeredSource<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| layer.get(key))
    }
}
