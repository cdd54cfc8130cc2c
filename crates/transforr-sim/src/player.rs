//! The player character: movement, jumping, shooting, damage and power-ups.
//!
//! The player is not an ECS entity. The engine owns exactly one and it
//! outlives the level content it collides with.

use glam::DVec2;
use tracing::warn;

use transforr_core::commands::InputFrame;
use transforr_core::components::Projectile;
use transforr_core::constants::*;
use transforr_core::enums::{Facing, Mode, PowerupKind, ProjectileKind, ProjectileOwner};
use transforr_core::types::{Aabb, Body};

use crate::physics;

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub mode: Mode,
    pub health: i32,
    pub max_health: i32,
    pub has_weapon: bool,
    /// 1 normally, 2 while a weapon power-up is active.
    pub weapon_power: u8,
    pub weapon_cooldown: u32,
    pub invincible_timer: u32,
    pub transform_cooldown: u32,
    pub powerup_timer: u32,
    pub facing: Facing,
    pub animation_timer: u32,
    pub frame: u32,
    /// Fell out of the play field.
    pub dead: bool,
    pub jump_buffer: u32,
    pub coyote_timer: u32,
    /// Goo or web contact; scales the next tick's horizontal speed.
    pub slowed: bool,
}

impl Player {
    /// A fresh hero with its top-left corner at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            body: Body::new(x, y, HERO_WIDTH, HERO_HEIGHT),
            mode: Mode::Hero,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            has_weapon: false,
            weapon_power: 1,
            weapon_cooldown: 0,
            invincible_timer: 0,
            transform_cooldown: 0,
            powerup_timer: 0,
            facing: Facing::Right,
            animation_timer: 0,
            frame: 0,
            dead: false,
            jump_buffer: 0,
            coyote_timer: 0,
            slowed: false,
        }
    }

    pub fn rect(&self) -> &Aabb {
        &self.body.rect
    }

    pub fn speed(&self) -> f64 {
        match self.mode {
            Mode::Hero => HERO_SPEED,
            Mode::Vehicle => VEHICLE_SPEED,
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_timer > 0
    }

    /// Advance the player by one tick.
    ///
    /// `scroll_x` is the camera offset; the player is kept inside the
    /// visible window.
    pub fn update(&mut self, input: &InputFrame, solids: &[Aabb], scroll_x: f64) {
        self.handle_input(input);

        physics::apply_gravity(&mut self.body);

        if self.body.on_ground {
            self.coyote_timer = COYOTE_TICKS;
        } else {
            self.coyote_timer = self.coyote_timer.saturating_sub(1);
        }
        self.jump_buffer = self.jump_buffer.saturating_sub(1);

        physics::move_horizontal(&mut self.body, solids);
        physics::move_vertical(&mut self.body, solids);

        self.animate();
        self.tick_timers();

        let rect = &mut self.body.rect;
        if rect.left() < scroll_x {
            rect.set_left(scroll_x);
        }
        if rect.right() > scroll_x + SCREEN_WIDTH {
            rect.set_right(scroll_x + SCREEN_WIDTH);
        }

        if self.body.rect.top() > SCREEN_HEIGHT {
            self.dead = true;
        }
    }

    fn handle_input(&mut self, input: &InputFrame) {
        let speed = self.speed();

        self.body.vel.x = 0.0;
        if input.left {
            self.body.vel.x = -speed;
            self.facing = Facing::Left;
        }
        if input.right {
            self.body.vel.x = speed;
            self.facing = Facing::Right;
        }
        if self.slowed {
            self.body.vel.x *= SLOW_FACTOR;
            self.slowed = false;
        }

        if input.jump {
            self.jump_buffer = JUMP_BUFFER_TICKS;
        }

        let can_jump = self.body.on_ground || self.coyote_timer > 0;
        if self.jump_buffer > 0 && can_jump && self.mode == Mode::Hero {
            self.body.vel.y = JUMP_IMPULSE;
            self.jump_buffer = 0;
            self.coyote_timer = 0;
        }
    }

    fn animate(&mut self) {
        self.animation_timer += 1;
        if self.body.vel.x.abs() > 0.5 {
            if self.animation_timer % PLAYER_ANIMATION_INTERVAL == 0 {
                self.frame = (self.frame + 1) % PLAYER_FRAME_COUNT;
            }
        } else if self.body.on_ground {
            self.frame = 0;
        }
    }

    fn tick_timers(&mut self) {
        self.weapon_cooldown = self.weapon_cooldown.saturating_sub(1);
        self.invincible_timer = self.invincible_timer.saturating_sub(1);
        self.transform_cooldown = self.transform_cooldown.saturating_sub(1);
        if self.powerup_timer > 0 {
            self.powerup_timer -= 1;
            if self.powerup_timer == 0 {
                self.weapon_power = 1;
            }
        }
    }

    /// Fire if armed and off cooldown. Returns the new shot's body and payload.
    pub fn shoot(&mut self) -> Option<(Body, Projectile)> {
        if !self.has_weapon || self.weapon_cooldown > 0 {
            return None;
        }

        self.weapon_cooldown = if self.weapon_power >= 2 {
            WEAPON_COOLDOWN_BOOSTED_TICKS
        } else {
            WEAPON_COOLDOWN_TICKS
        };

        let rect = &self.body.rect;
        let muzzle = DVec2::new(
            rect.center_x() + PLAYER_MUZZLE_OFFSET * self.facing.sign(),
            rect.center_y() - 4.0,
        );
        let mut body = Body::new(0.0, 0.0, PLAYER_SHOT_WIDTH, PLAYER_SHOT_HEIGHT)
            .with_velocity(DVec2::new(self.facing.sign() * PLAYER_SHOT_SPEED, 0.0));
        body.rect.x = muzzle.x - PLAYER_SHOT_WIDTH / 2.0;
        body.rect.y = muzzle.y - PLAYER_SHOT_HEIGHT / 2.0;

        let projectile = Projectile {
            owner: ProjectileOwner::Player,
            kind: ProjectileKind::Bolt,
            damage: i32::from(self.weapon_power),
            slow_effect: false,
        };
        Some((body, projectile))
    }

    /// Apply damage unless invincible. Returns true if the hit landed.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.is_invincible() {
            return false;
        }
        self.health -= amount;
        if self.health < 0 {
            warn!(health = self.health, "player health below zero, clamping");
            self.health = 0;
        }
        self.invincible_timer = PLAYER_INVINCIBILITY_TICKS;
        true
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn add_powerup(&mut self, kind: PowerupKind) {
        match kind {
            PowerupKind::Weapon => {
                self.has_weapon = true;
                self.weapon_power = 2;
                self.powerup_timer = POWERUP_DURATION_TICKS;
            }
            PowerupKind::Health => self.heal(HEALTH_POWERUP_AMOUNT),
        }
    }

    /// Switch form, resizing the box around its bottom-centre anchor, if the
    /// new box fits among `solids`. A box that grew into a wall is slid clear
    /// of it. Returns false and leaves the player untouched otherwise.
    pub fn refit_within(&mut self, mode: Mode, solids: &[Aabb]) -> bool {
        match self.fitted_rect(mode, solids) {
            Some(rect) => {
                self.apply_form(mode, rect);
                true
            }
            None => false,
        }
    }

    /// Where the box for `mode` would land, if it fits.
    pub fn fitted_rect(&self, mode: Mode, solids: &[Aabb]) -> Option<Aabb> {
        let rect = self.anchored_rect(mode);
        // Only the width it gained on each side may be given back.
        let grown = ((rect.w - self.body.rect.w) / 2.0).max(0.0);
        physics::fit_sideways(rect, solids, grown)
    }

    fn anchored_rect(&self, mode: Mode) -> Aabb {
        let (w, h) = match mode {
            Mode::Hero => (HERO_WIDTH, HERO_HEIGHT),
            Mode::Vehicle => (VEHICLE_WIDTH, VEHICLE_HEIGHT),
        };
        let mut rect = Aabb::new(0.0, 0.0, w, h);
        rect.set_bottom(self.body.rect.bottom());
        rect.set_center_x(self.body.rect.center_x());
        rect
    }

    fn apply_form(&mut self, mode: Mode, rect: Aabb) {
        self.mode = mode;
        self.body.rect = rect;
        self.frame = 0;
    }
}
