//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Player form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Humanoid form: slower, can jump.
    #[default]
    Hero,
    /// Ground vehicle form: fast, cannot jump.
    Vehicle,
}

impl Mode {
    pub fn opposite(self) -> Self {
        match self {
            Mode::Hero => Mode::Vehicle,
            Mode::Vehicle => Mode::Hero,
        }
    }
}

/// Horizontal facing / travel direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for Left, +1.0 for Right.
    pub fn sign(self) -> f64 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Direction pointing from `from` toward `to` (Right on a tie).
    pub fn toward(from: f64, to: f64) -> Self {
        if to < from {
            Facing::Left
        } else {
            Facing::Right
        }
    }
}

/// Enemy behavioural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Slow crawler, turns at walls and ledges.
    Snail,
    /// Crawler that leaves sticky goo behind.
    Caterpillar,
    /// Skittering dasher with a tail sting.
    Scorpion,
    /// Armoured dasher with a heavy blast.
    Beetle,
    /// Leaping ninja that throws blades.
    Mantis,
    /// Static contact hazard.
    Spider,
    /// Hovering flyer that drops honey.
    Bee,
}

impl EnemyArchetype {
    pub const ALL: [EnemyArchetype; 7] = [
        EnemyArchetype::Snail,
        EnemyArchetype::Caterpillar,
        EnemyArchetype::Scorpion,
        EnemyArchetype::Beetle,
        EnemyArchetype::Mantis,
        EnemyArchetype::Spider,
        EnemyArchetype::Bee,
    ];
}

/// Attack signal an enemy raises for the orchestrator to realise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyAttack {
    /// Lay a sticky trail hazard under the enemy.
    StickyTrail,
    /// Horizontal tail sting.
    Sting,
    /// Slow, heavy horizontal blast.
    HeavyBlast,
    /// Honey drop falling straight down.
    Honey,
    /// Fast horizontal blade.
    Blade,
}

/// Boss fight phase. Only ever advances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BossPhase {
    /// Web fan.
    #[default]
    One,
    /// Random energy burst.
    Two,
    /// Aimed rapid fire.
    Three,
}

impl BossPhase {
    pub fn number(self) -> u8 {
        match self {
            BossPhase::One => 1,
            BossPhase::Two => 2,
            BossPhase::Three => 3,
        }
    }
}

/// Who fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
    Hostile,
}

/// Visual / behavioural kind of a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Player weapon shot.
    Bolt,
    Sting,
    HeavyBlast,
    Honey,
    Blade,
    /// Boss phase 1 slowing web.
    Web,
    /// Boss phase 2 energy shot.
    Energy,
    /// Boss phase 3 aimed shot.
    Aimed,
}

/// Collectible type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerupKind {
    Weapon,
    Health,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    /// Transformation sequence running; the world is frozen.
    Transforming,
    Paused,
    LevelComplete,
    GameOver,
    /// Final level cleared.
    MissionComplete,
}
