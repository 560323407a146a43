use crate::inventory::domain::ComponentRegistry;
use crate::ports::outbound::InventoryFormatter;
use crate::shared::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Indentation used for pretty output
const INDENT: &[u8] = b"    ";

/// JsonFormatter adapter rendering the registry as a `hash -> component` object
///
/// Pretty output uses a 4-space indent; compact output is a single line.
#[derive(Debug, Clone, Copy)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryFormatter for JsonFormatter {
    fn format(&self, registry: &ComponentRegistry) -> Result<String> {
        if !self.pretty {
            return serde_json::to_string(registry).map_err(Into::into);
        }

        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
        registry.serialize(&mut serializer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
