use std::collections::HashMap;
use std::sync::OnceLock;

use super::Codec;
use crate::error::{BintextError, Result};
use crate::types::CodecMeta;

macro_rules! register_codecs {
    ($($module:ident :: $codec:ident),* $(,)?) => {
        fn build_registry() -> Registry {
            let codecs: Vec<Box<dyn Codec>> = vec![
                $(Box::new(super::$module::$codec)),*
            ];

            let mut name_map = HashMap::new();
            for (idx, codec) in codecs.iter().enumerate() {
                name_map.insert(codec.name(), idx);
                for alias in codec.meta().aliases {
                    name_map.insert(*alias, idx);
                }
            }

            Registry { codecs, name_map }
        }

        pub fn expected_codec_names() -> Vec<&'static str> {
            vec![
                $(super::$module::$codec.name(),)*
            ]
        }
    };
}

register_codecs! {
    hex::HexLower,
    hex::HexUpper,
    base32::Base32,
    base45::Base45,
    base64::Base64,
    base64url::Base64Url,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Name and alias lookup over every codec. Built once, read-only afterwards.
pub struct Registry {
    codecs: Vec<Box<dyn Codec>>,
    name_map: HashMap<&'static str, usize>,
}

impl Registry {
    fn new() -> Self {
        build_registry()
    }

    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(Registry::new)
    }

    pub fn get(&self, name: &str) -> Result<&dyn Codec> {
        self.name_map
            .get(name)
            .or_else(|| self.name_map.get(name.to_lowercase().as_str()))
            .map(|&idx| self.codecs[idx].as_ref())
            .ok_or_else(|| {
                log::debug!("no codec registered under '{}'", name);
                BintextError::unsupported_codec(name)
            })
    }

    pub fn list(&self) -> Vec<CodecMeta> {
        self.codecs.iter().map(|c| c.meta()).collect()
    }
}
