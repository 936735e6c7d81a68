// Runtime site configuration.
//
// Defaults describe the stock page. A page may embed a JSON document to
// override any subset of fields; anything missing or empty keeps its default.

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_ROLES: [&str; 5] = [
    "ECE Student",
    "Embedded Systems Developer",
    "IoT Enthusiast",
    "Digital Content Creator",
    "Electronics Engineer",
];

pub const DEFAULT_NAME_PALETTE: [&str; 9] = [
    "#00CED1", // teal
    "#4169E1", // royal blue
    "#9370DB", // medium purple
    "#48D1CC", // medium turquoise
    "#FFB347", // pastel orange
    "#40E0D0", // turquoise
    "#6495ED", // cornflower blue
    "#F4D03F", // meteor gold
    "#E8F4F8", // starlight white
];

pub const DEFAULT_PARTICLE_COLORS: [&str; 5] =
    ["#ff6bcb", "#00d4ff", "#ffd700", "#a855f7", "#ffcb05"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmailJsConfig {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
    pub to_name: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            public_key: "AKHejFytl6avf3Lqs".to_string(),
            service_id: "service_yulvvxm".to_string(),
            template_id: "template_5r2n46l".to_string(),
            to_name: "Omm Prakasha Maharana".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub roles: Vec<String>,
    pub name_palette: Vec<String>,
    pub particle_colors: Vec<String>,
    pub emailjs: EmailJsConfig,
    pub sound_enabled: bool,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            roles: owned(&DEFAULT_ROLES),
            name_palette: owned(&DEFAULT_NAME_PALETTE),
            particle_colors: owned(&DEFAULT_PARTICLE_COLORS),
            emailjs: EmailJsConfig::default(),
            sound_enabled: true,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut cfg: SiteConfig = serde_json::from_str(raw)?;
        cfg.sanitize();
        Ok(cfg)
    }

    // Colors must be non-blank; empty lists fall back to the stock values.
    fn sanitize(&mut self) {
        let defaults = SiteConfig::default();
        self.name_palette = clean(std::mem::take(&mut self.name_palette));
        self.particle_colors = clean(std::mem::take(&mut self.particle_colors));
        if self.roles.is_empty() {
            self.roles = defaults.roles;
        }
        if self.name_palette.is_empty() {
            self.name_palette = defaults.name_palette;
        }
        if self.particle_colors.is_empty() {
            self.particle_colors = defaults.particle_colors;
        }
    }
}

fn clean(colors: Vec<String>) -> Vec<String> {
    colors
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}
