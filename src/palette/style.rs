use std::collections::HashMap;

use super::roles::{Role, DERIVED_FOREGROUNDS};

/// Write-only target for resolved theme variables
pub trait StyleSurface {
    fn set_property(&mut self, name: &str, value: &str);
}

/// In-memory document root style: variable name → value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootStyle {
    vars: HashMap<String, String>,
}

impl RootStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn role(&self, role: Role) -> Option<&str> {
        self.get(role.css_var())
    }

    /// All known theme variables that have been set, in a stable order
    pub fn declarations(&self) -> Vec<(&'static str, &str)> {
        Role::ALL
            .iter()
            .map(|r| r.css_var())
            .chain(DERIVED_FOREGROUNDS.iter().map(|(var, _)| *var))
            .filter_map(|name| self.get(name).map(|v| (name, v)))
            .collect()
    }
}

impl StyleSurface for RootStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declarations_follow_role_order() {
        let mut style = RootStyle::new();
        style.set_property("--muted-foreground", "#000");
        style.set_property("--primary", "#111");
        style.set_property("--unrelated", "#222");
        assert_eq!(
            style.declarations(),
            vec![("--primary", "#111"), ("--muted-foreground", "#000")]
        );
    }
}
