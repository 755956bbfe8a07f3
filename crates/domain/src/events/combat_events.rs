//! Combat-related domain events
//!
//! These enums communicate what happened when a combatant's health or
//! progression was modified, allowing callers to react appropriately.

/// Outcome of applying damage to a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Amount was zero or negative, no effect
    Ignored,
    /// Combatant was already at zero health, no effect
    AlreadyDefeated,
    /// Combatant took damage but still has health left
    Wounded {
        damage_dealt: i32,
        remaining_health: i32,
    },
    /// This damage brought the combatant to zero health
    Defeated { damage_dealt: i32 },
}

impl DamageOutcome {
    /// Returns true if this damage is what brought the combatant down.
    pub fn is_defeat(&self) -> bool {
        matches!(self, Self::Defeated { .. })
    }

    /// Health actually removed (never more than the health that was left).
    pub fn damage_dealt(&self) -> i32 {
        match self {
            Self::Wounded { damage_dealt, .. } | Self::Defeated { damage_dealt } => *damage_dealt,
            Self::Ignored | Self::AlreadyDefeated => 0,
        }
    }
}

/// Outcome of granting experience to a hero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceOutcome {
    /// Amount was zero or negative, no effect
    Ignored,
    /// Experience banked without reaching the next level
    Gained { experience: i32 },
    /// One or more levels were gained; `experience` is what remains banked
    LeveledUp {
        from_level: i32,
        to_level: i32,
        experience: i32,
    },
}

impl ExperienceOutcome {
    /// Number of levels gained by the grant.
    pub fn levels_gained(&self) -> i32 {
        match self {
            Self::LeveledUp {
                from_level,
                to_level,
                ..
            } => to_level - from_level,
            Self::Ignored | Self::Gained { .. } => 0,
        }
    }
}
