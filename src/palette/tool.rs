use tracing::{debug, info, warn};

use super::color::{color_key, ColorEntry};
use super::presets::PresetId;
use super::roles::{Role, RoleAssignments, DERIVED_FOREGROUNDS};
use super::style::StyleSurface;

/// One entry of the available-color set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub key: String,
    pub color: ColorEntry,
    pub is_custom: bool,
}

/// Role assignment state plus the surface it is applied to.
///
/// Every operation that can change a resolved role value re-applies the
/// whole theme to the surface before returning.
#[derive(Debug)]
pub struct ThemeTool<S: StyleSurface> {
    open: bool,
    preset: PresetId,
    custom: Vec<(String, ColorEntry)>,
    assignments: RoleAssignments,
    surface: S,
}

impl<S: StyleSurface> ThemeTool<S> {
    /// Creates the tool with default state and applies it once
    pub fn mount(surface: S) -> Self {
        let mut tool = Self {
            open: false,
            preset: PresetId::default(),
            custom: Vec::new(),
            assignments: RoleAssignments::default(),
            surface,
        };
        tool.apply();
        tool
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn preset(&self) -> PresetId {
        self.preset
    }

    pub fn assignments(&self) -> &RoleAssignments {
        &self.assignments
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub fn custom_colors(&self) -> impl Iterator<Item = (&str, &ColorEntry)> {
        self.custom.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn is_custom(&self, key: &str) -> bool {
        self.custom.iter().any(|(k, _)| k == key)
    }

    /// Preset swatches overlaid by custom colors. A custom color sharing a
    /// preset key takes that preset slot; other custom colors follow in
    /// insertion order.
    pub fn available_colors(&self) -> Vec<Swatch> {
        let mut swatches: Vec<Swatch> = self
            .preset
            .colors()
            .into_iter()
            .map(|(key, color)| Swatch {
                key: key.to_string(),
                color,
                is_custom: false,
            })
            .collect();

        for (key, color) in &self.custom {
            match swatches.iter_mut().find(|s| &s.key == key) {
                Some(slot) => {
                    slot.color = color.clone();
                    slot.is_custom = true;
                }
                None => swatches.push(Swatch {
                    key: key.clone(),
                    color: color.clone(),
                    is_custom: true,
                }),
            }
        }
        swatches
    }

    /// Looks up a key in the available-color set
    pub fn lookup(&self, key: &str) -> Option<ColorEntry> {
        if let Some((_, c)) = self.custom.iter().find(|(k, _)| k == key) {
            return Some(c.clone());
        }
        self.preset
            .colors()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, c)| c)
    }

    /// Resolved color for a role, or `None` if its key is not available
    pub fn resolve(&self, role: Role) -> Option<ColorEntry> {
        self.lookup(self.assignments.get(role))
    }

    pub fn select_preset(&mut self, preset: PresetId) {
        if self.preset != preset {
            info!(preset = %preset, "preset selected");
        }
        self.preset = preset;
        self.apply();
    }

    pub fn assign_role(&mut self, role: Role, key: &str) {
        debug!(role = %role, key, "role assigned");
        self.assignments.set(role, key);
        self.apply();
    }

    /// Adds or overwrites a custom color. Returns the derived key, or `None`
    /// when the name or value is blank and nothing was added.
    pub fn add_custom_color(&mut self, name: &str, value: &str) -> Option<String> {
        let display = name.trim();
        if display.is_empty() || value.trim().is_empty() {
            return None;
        }
        let key = color_key(name);
        let entry = ColorEntry::new(display, value);

        match self.custom.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = entry,
            None => self.custom.push((key.clone(), entry)),
        }
        info!(key = %key, value, "custom color added");
        self.apply();
        Some(key)
    }

    /// Removes a custom color and resets any role that pointed at it.
    /// Returns the roles that were reset.
    pub fn remove_custom_color(&mut self, key: &str) -> Vec<Role> {
        let before = self.custom.len();
        self.custom.retain(|(k, _)| k != key);
        let reset = self.assignments.reset_references(key);
        if before != self.custom.len() {
            info!(key, reset = reset.len(), "custom color removed");
        }
        self.apply();
        reset
    }

    pub fn reset_to_defaults(&mut self) {
        self.assignments = RoleAssignments::default();
        info!("role assignments reset");
        self.apply();
    }

    /// Writes every resolvable role, then the derived foreground variables.
    /// Unresolved roles are skipped and the surface keeps its previous value.
    pub fn apply(&mut self) {
        let resolved: Vec<(Role, Option<ColorEntry>)> =
            Role::ALL.into_iter().map(|r| (r, self.resolve(r))).collect();

        for (role, color) in &resolved {
            match color {
                Some(c) => self.surface.set_property(role.css_var(), &c.value),
                None => warn!(
                    role = %role,
                    key = self.assignments.get(*role),
                    preset = %self.preset,
                    "role key not in available colors"
                ),
            }
        }

        for (var, source) in DERIVED_FOREGROUNDS {
            if let Some((_, Some(c))) = resolved.iter().find(|(r, _)| *r == source) {
                self.surface.set_property(var, &c.value);
            }
        }
        debug!(preset = %self.preset, "theme applied");
    }
}
