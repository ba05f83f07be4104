use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::ui::component::Props;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    /// Opaque value handed to every mounted component as props.
    #[serde(default)]
    pub props: Props,
}

/// Host settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll / redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Components to mount, left to right (default: class, function).
    #[serde(default = "default_variants")]
    pub variants: Vec<Variant>,
}

/// Which component style to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Class,
    Function,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Class => "class",
            Variant::Function => "function",
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_variants() -> Vec<Variant> {
    vec![Variant::Class, Variant::Function]
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            variants: default_variants(),
        }
    }
}
