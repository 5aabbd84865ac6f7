//! Role - canonical lane roles for build queries

use serde::{Deserialize, Serialize};

/// One of the five canonical roles the build service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Top,
    Jungle,
    Middle,
    DuoCarry,
    DuoSupport,
}

impl Role {
    /// The role identifier the upstream build service expects.
    pub fn as_upstream(&self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JUNGLE",
            Role::Middle => "MIDDLE",
            Role::DuoCarry => "DUO_CARRY",
            Role::DuoSupport => "DUO_SUPPORT",
        }
    }

    /// Short human label used in replies.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Top => "Top",
            Role::Jungle => "Jungle",
            Role::Middle => "Mid",
            Role::DuoCarry => "ADC",
            Role::DuoSupport => "Support",
        }
    }

    /// Normalize a free-text role token through the alias table.
    ///
    /// Returns `None` when the token is not a recognized role; callers use
    /// that to re-interpret the token as a champion name instead.
    pub fn from_alias(token: &str) -> Option<Role> {
        match token.to_lowercase().as_str() {
            "top" | "t" => Some(Role::Top),
            "j" | "jun" | "jung" | "jungl" | "jungle" => Some(Role::Jungle),
            "m" | "mid" | "middle" => Some(Role::Middle),
            "a" | "c" | "adc" | "duo_carry" => Some(Role::DuoCarry),
            "s" | "sup" | "supp" | "support" | "duo_support" => Some(Role::DuoSupport),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
