use std::fmt;

/// Semantic color roles, in display and export order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Muted,
    Background,
    Foreground,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Primary,
        Role::Secondary,
        Role::Accent,
        Role::Muted,
        Role::Background,
        Role::Foreground,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Accent => "accent",
            Role::Muted => "muted",
            Role::Background => "background",
            Role::Foreground => "foreground",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Primary => "Primary",
            Role::Secondary => "Secondary",
            Role::Accent => "Accent",
            Role::Muted => "Muted",
            Role::Background => "Background",
            Role::Foreground => "Foreground",
        }
    }

    /// Style variable written for this role, e.g. `--primary`
    pub fn css_var(self) -> &'static str {
        match self {
            Role::Primary => "--primary",
            Role::Secondary => "--secondary",
            Role::Accent => "--accent",
            Role::Muted => "--muted",
            Role::Background => "--background",
            Role::Foreground => "--foreground",
        }
    }

    pub fn default_key(self) -> &'static str {
        match self {
            Role::Primary => "darkGreen",
            Role::Secondary => "mediumGreen",
            Role::Accent => "lightGreen",
            Role::Muted => "cream",
            Role::Background => "cream",
            Role::Foreground => "darkGreen",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derived contrast variables: `(variable, role whose value it copies)`.
/// Two-tone only: no contrast ratio is computed.
pub const DERIVED_FOREGROUNDS: [(&str, Role); 4] = [
    ("--primary-foreground", Role::Background),
    ("--secondary-foreground", Role::Background),
    ("--accent-foreground", Role::Foreground),
    ("--muted-foreground", Role::Foreground),
];

/// Role → color key mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignments {
    keys: [String; 6],
}

impl Default for RoleAssignments {
    fn default() -> Self {
        Self {
            keys: Role::ALL.map(|r| r.default_key().to_string()),
        }
    }
}

impl RoleAssignments {
    pub fn get(&self, role: Role) -> &str {
        &self.keys[role.index()]
    }

    pub fn set(&mut self, role: Role, key: impl Into<String>) {
        self.keys[role.index()] = key.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &str)> {
        Role::ALL.into_iter().map(move |r| (r, self.get(r)))
    }

    /// Resets every role pointing at `key` to its default. Returns the roles touched.
    pub fn reset_references(&mut self, key: &str) -> Vec<Role> {
        let touched: Vec<Role> = Role::ALL.into_iter().filter(|&r| self.get(r) == key).collect();
        for &role in &touched {
            self.set(role, role.default_key());
        }
        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assignments() {
        let a = RoleAssignments::default();
        let pairs: Vec<_> = a.iter().map(|(r, k)| (r.name(), k.to_string())).collect();
        assert_eq!(
            pairs,
            vec![
                ("primary", "darkGreen".to_string()),
                ("secondary", "mediumGreen".to_string()),
                ("accent", "lightGreen".to_string()),
                ("muted", "cream".to_string()),
                ("background", "cream".to_string()),
                ("foreground", "darkGreen".to_string()),
            ]
        );
    }

    #[test]
    fn test_reset_references_only_touches_matching_roles() {
        let mut a = RoleAssignments::default();
        a.set(Role::Accent, "olive");
        a.set(Role::Muted, "olive");
        a.set(Role::Primary, "sand");

        let touched = a.reset_references("olive");
        assert_eq!(touched, vec![Role::Accent, Role::Muted]);
        assert_eq!(a.get(Role::Accent), "lightGreen");
        assert_eq!(a.get(Role::Muted), "cream");
        assert_eq!(a.get(Role::Primary), "sand");
    }
}
