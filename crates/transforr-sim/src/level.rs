//! Level ingestion and the scrolling camera.
//!
//! A level is an ordered list of equal-length strings; every character is
//! one 64×64 cell. Parsing never fails on bad cells: they become empty and
//! are reported as diagnostics.

use tracing::warn;

use transforr_core::components::{Platform, PlatformKind};
use transforr_core::constants::*;
use transforr_core::enums::{EnemyArchetype, Facing, PowerupKind};
use transforr_core::error::{LevelDiagnostic, LevelError};
use transforr_core::types::Aabb;

/// What a single grid character stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Solid,
    Breakable,
    Enemy(EnemyArchetype),
    Powerup(PowerupKind),
    Boss,
}

/// Map a glyph to its cell, or None if it is not part of the vocabulary.
pub fn classify(glyph: char) -> Option<Cell> {
    let cell = match glyph {
        '.' | ' ' => Cell::Empty,
        'X' | 'P' => Cell::Solid,
        'R' => Cell::Breakable,
        'S' => Cell::Enemy(EnemyArchetype::Spider),
        'M' => Cell::Enemy(EnemyArchetype::Mantis),
        'C' => Cell::Enemy(EnemyArchetype::Caterpillar),
        'N' => Cell::Enemy(EnemyArchetype::Snail),
        'O' => Cell::Enemy(EnemyArchetype::Scorpion),
        'K' => Cell::Enemy(EnemyArchetype::Beetle),
        'B' => Cell::Enemy(EnemyArchetype::Bee),
        'W' => Cell::Powerup(PowerupKind::Weapon),
        'H' => Cell::Powerup(PowerupKind::Health),
        'D' => Cell::Boss,
        _ => return None,
    };
    Some(cell)
}

/// Something placed into the world when a level is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Spawn {
    /// Top-left of the enemy box.
    Enemy { archetype: EnemyArchetype, x: f64, y: f64 },
    /// Top-left of the power-up box.
    Powerup { kind: PowerupKind, x: f64, y: f64 },
    /// Top-left of the boss box.
    Boss { x: f64, y: f64 },
}

/// Result of parsing one level grid.
#[derive(Debug, Clone, Default)]
pub struct LevelLayout {
    pub platforms: Vec<Platform>,
    pub spawns: Vec<Spawn>,
    pub diagnostics: Vec<LevelDiagnostic>,
}

impl LevelLayout {
    pub fn has_boss(&self) -> bool {
        self.spawns.iter().any(|s| matches!(s, Spawn::Boss { .. }))
    }
}

/// Parse a level grid. Only an empty grid is an error.
pub fn parse_grid<S: AsRef<str>>(rows: &[S]) -> Result<LevelLayout, LevelError> {
    let expected = match rows.first() {
        Some(first) if !first.as_ref().is_empty() => first.as_ref().chars().count(),
        _ => return Err(LevelError::EmptyGrid),
    };

    let mut layout = LevelLayout::default();
    let mut boss_placed = false;

    for (row, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        let len = line.chars().count();
        if len != expected {
            layout
                .diagnostics
                .push(LevelDiagnostic::RaggedRow { row, len, expected });
        }

        for (column, glyph) in line.chars().enumerate() {
            let x = column as f64 * TILE_SIZE;
            let y = row as f64 * TILE_SIZE;

            let Some(cell) = classify(glyph) else {
                layout
                    .diagnostics
                    .push(LevelDiagnostic::UnknownGlyph { glyph, row, column });
                continue;
            };

            match cell {
                Cell::Empty => {}
                Cell::Solid => layout.platforms.push(Platform {
                    rect: Aabb::new(x, y, TILE_SIZE, TILE_SIZE),
                    kind: PlatformKind::Ground,
                }),
                Cell::Breakable => layout.platforms.push(Platform {
                    rect: Aabb::new(x, y, TILE_SIZE, TILE_SIZE),
                    kind: PlatformKind::Breakable {
                        hits_remaining: BREAKABLE_HITS,
                    },
                }),
                Cell::Enemy(archetype) => layout.spawns.push(Spawn::Enemy { archetype, x, y }),
                Cell::Powerup(kind) => layout.spawns.push(Spawn::Powerup {
                    kind,
                    x: x + POWERUP_INSET,
                    y: y + POWERUP_INSET,
                }),
                Cell::Boss if boss_placed => layout
                    .diagnostics
                    .push(LevelDiagnostic::DuplicateBoss { row, column }),
                Cell::Boss => {
                    boss_placed = true;
                    layout.spawns.push(Spawn::Boss {
                        x: x - BOSS_ANCHOR_OFFSET_X,
                        y: y - BOSS_ANCHOR_OFFSET_Y,
                    });
                }
            }
        }
    }

    for diagnostic in &layout.diagnostics {
        warn!(%diagnostic, "level grid problem");
    }

    Ok(layout)
}

/// Build the full layout for level `index`: the parsed grid plus the moving
/// platforms every level after the first carries.
pub fn build<S: AsRef<str>>(index: usize, rows: &[S]) -> Result<LevelLayout, LevelError> {
    let mut layout = parse_grid(rows)?;
    if index >= 1 {
        layout.platforms.extend(moving_platforms());
    }
    Ok(layout)
}

fn moving_platforms() -> impl Iterator<Item = Platform> {
    (0..MOVING_PLATFORM_COUNT).map(|i| {
        let x = MOVING_PLATFORM_FIRST_X + i as f64 * MOVING_PLATFORM_SPACING;
        let y = MOVING_PLATFORM_FIRST_Y - i as f64 * MOVING_PLATFORM_STEP_Y;
        Platform {
            rect: Aabb::new(x, y, TILE_SIZE, TILE_SIZE),
            kind: PlatformKind::Moving {
                start_x: x,
                range: MOVING_PLATFORM_RANGE,
                speed: MOVING_PLATFORM_SPEED,
                direction: Facing::Right,
            },
        }
    })
}

/// Goal line of every level.
pub fn goal_x() -> f64 {
    WORLD_WIDTH - GOAL_MARGIN
}

/// Horizontal scroll that eases toward the player.
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    pub scroll_x: f64,
}

impl Camera {
    pub const MAX_SCROLL: f64 = WORLD_WIDTH - SCREEN_WIDTH;

    /// Scroll that would centre the player, limited to the world.
    pub fn target(player_center_x: f64) -> f64 {
        (player_center_x - SCREEN_WIDTH / 2.0).clamp(0.0, Self::MAX_SCROLL)
    }

    /// Ease one tick toward the target. Both endpoints lie inside the
    /// world, so the result does too.
    pub fn follow(&mut self, player_center_x: f64) {
        let target = Self::target(player_center_x);
        self.scroll_x += (target - self.scroll_x) * CAMERA_SMOOTHING;
        self.scroll_x = self.scroll_x.clamp(0.0, Self::MAX_SCROLL);
    }
}
