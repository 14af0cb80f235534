use block_properties_engine::{DisplayMode, InlineStyle, Property};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("No template at index {index} (have {len})")]
    NoSuchTemplate { index: usize, len: usize },
}

/// A reusable, named set of properties offered when inserting a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTemplate {
    pub name: String,
    pub properties: Vec<Property>,
}

impl PropertyTemplate {
    /// One-line description, e.g. `status: todo, assignee: (empty)`.
    pub fn describe(&self) -> String {
        self.properties
            .iter()
            .map(|p| {
                let value = if p.value.is_empty() { "(empty)" } else { p.value.as_str() };
                format!("{}: {value}", p.key)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display_mode: DisplayMode,
    pub property_color: String,
    pub opacity: f32,
    pub auto_expand_presets: bool,
    pub templates: Vec<PropertyTemplate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Inline,
            property_color: InlineStyle::DEFAULT_COLOR.to_string(),
            opacity: InlineStyle::DEFAULT_OPACITY,
            auto_expand_presets: true,
            templates: vec![PropertyTemplate {
                name: "task".to_string(),
                properties: vec![
                    Property::new("status", "todo"),
                    Property::new("priority", "medium"),
                    Property::new("assignee", ""),
                ],
            }],
        }
    }
}

impl Settings {
    pub const MIN_OPACITY: f32 = 0.1;
    pub const MAX_OPACITY: f32 = 1.0;

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut settings: Settings =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        settings.normalize();

        Ok(Some(settings))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        log::info!("Settings saved to {}", config_path.display());
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/block-properties");
        PathBuf::from(config_dir.as_ref()).join("settings.toml")
    }

    /// Applies the same rules as the store setters to hand-edited values.
    fn normalize(&mut self) {
        self.property_color = normalized_color(&self.property_color);
        self.opacity = clamped_opacity(self.opacity);
    }

    /// Passive style for inline marks.
    pub fn inline_style(&self) -> InlineStyle {
        InlineStyle {
            color: self.property_color.clone(),
            opacity: self.opacity,
        }
    }
}

/// Trimmed colour, or the default when empty.
fn normalized_color(color: &str) -> String {
    let color = color.trim();
    if color.is_empty() {
        InlineStyle::DEFAULT_COLOR.to_string()
    } else {
        color.to_string()
    }
}

fn clamped_opacity(opacity: f32) -> f32 {
    let clamped = opacity.clamp(Settings::MIN_OPACITY, Settings::MAX_OPACITY);
    if clamped != opacity {
        log::debug!("opacity {opacity} clamped to {clamped}");
    }
    clamped
}

/// Which group of settings a change touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    /// Overlays must be rebuilt in the new mode.
    DisplayMode,
    /// Colour or opacity; only inline styling is affected.
    Style,
    Templates,
    Behaviour,
}

type Listener = Box<dyn FnMut(&Settings, SettingsChange)>;

/// Owns the settings, persists every change and tells listeners about it.
pub struct SettingsStore {
    settings: Settings,
    path: Option<PathBuf>,
    listeners: Vec<Listener>,
}

impl SettingsStore {
    /// A store that never touches the filesystem.
    pub fn in_memory(settings: Settings) -> Self {
        Self {
            settings,
            path: None,
            listeners: Vec::new(),
        }
    }

    /// Opens the store backed by `path`, starting from defaults if the file
    /// does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let settings = Settings::load_from_path(&path)?.unwrap_or_default();
        Ok(Self {
            settings,
            path: Some(path),
            listeners: Vec::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Registers `listener` to run after every committed change.
    pub fn on_change(&mut self, listener: impl FnMut(&Settings, SettingsChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) -> anyhow::Result<()> {
        self.settings.display_mode = mode;
        self.commit(SettingsChange::DisplayMode)
    }

    /// Sets the property colour; an empty value restores the default.
    pub fn set_property_color(&mut self, color: &str) -> anyhow::Result<()> {
        self.settings.property_color = normalized_color(color);
        self.commit(SettingsChange::Style)
    }

    /// Sets the opacity, clamped to `0.1..=1.0`.
    pub fn set_opacity(&mut self, opacity: f32) -> anyhow::Result<()> {
        self.settings.opacity = clamped_opacity(opacity);
        self.commit(SettingsChange::Style)
    }

    pub fn set_auto_expand_presets(&mut self, enabled: bool) -> anyhow::Result<()> {
        self.settings.auto_expand_presets = enabled;
        self.commit(SettingsChange::Behaviour)
    }

    pub fn add_template(&mut self, template: PropertyTemplate) -> anyhow::Result<()> {
        self.settings.templates.push(template);
        self.commit(SettingsChange::Templates)
    }

    pub fn update_template(
        &mut self,
        index: usize,
        template: PropertyTemplate,
    ) -> anyhow::Result<()> {
        let len = self.settings.templates.len();
        let slot = self
            .settings
            .templates
            .get_mut(index)
            .ok_or(ConfigError::NoSuchTemplate { index, len })?;
        *slot = template;
        self.commit(SettingsChange::Templates)
    }

    pub fn remove_template(&mut self, index: usize) -> anyhow::Result<PropertyTemplate> {
        let len = self.settings.templates.len();
        if index >= len {
            return Err(ConfigError::NoSuchTemplate { index, len }.into());
        }
        let removed = self.settings.templates.remove(index);
        self.commit(SettingsChange::Templates)?;
        Ok(removed)
    }

    fn commit(&mut self, change: SettingsChange) -> anyhow::Result<()> {
        if let Some(path) = &self.path {
            self.settings.save_to_path(path)?;
        }
        for listener in &mut self.listeners {
            listener(&self.settings, change);
        }
        Ok(())
    }
}
