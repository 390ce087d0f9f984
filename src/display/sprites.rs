/// How each entity looks.  Tank Battle draws armour, Fox Adventure draws
/// a fox and its foes; `Variant` picks the style.
use super::{
    Rgb, Surface, BLACK, BLUE, BROWN, DARK_GREEN, GRAY, GREEN, ORANGE, RED, WHITE, YELLOW,
};
use crate::camera::Camera;
use crate::config::Variant;
use crate::entities::{
    Collectible, CollectibleKind, Enemy, EnemyKind, Facing, Owner, Player, Projectile, Rect,
};

const SKIN: Rgb = Rgb(255, 220, 177);
const DARK_ORANGE: Rgb = Rgb(255, 140, 0);

pub trait Sprite {
    fn draw(&self, surface: &mut dyn Surface, camera: &Camera, variant: Variant);
}

// ── Player ────────────────────────────────────────────────────────────────────

impl Sprite for Player {
    fn draw(&self, surface: &mut dyn Surface, camera: &Camera, variant: Variant) {
        if !self.alive {
            return;
        }
        let r = camera.apply(&self.rect);
        match variant {
            Variant::TankBattle => {
                surface.fill_rect(r, DARK_GREEN);
                surface.stroke_rect(r, BLACK, 2.0);
                surface.fill_rect(Rect::new(r.right(), r.center_y() - 2.0, 20.0, 4.0), GRAY);
                surface.fill_rect(Rect::new(r.x, r.bottom() - 8.0, r.w, 8.0), BLACK);
            }
            Variant::FoxAdventure => {
                // Flicker while invulnerable
                let color = if self.invulnerable % 10 < 5 { ORANGE } else { DARK_ORANGE };
                let right = self.facing == Facing::Right;
                surface.fill_ellipse(Rect::new(r.x, r.y + 20.0, r.w, 25.0), color);
                surface.fill_ellipse(Rect::new(r.x + 5.0, r.y, 30.0, 25.0), color);
                let ear_x = if right { r.x + 8.0 } else { r.x + 22.0 };
                surface.fill_polygon(
                    &[(ear_x, r.y), (ear_x + 8.0, r.y), (ear_x + 4.0, r.y - 10.0)],
                    color,
                );
                let tail_x = if right { r.x - 15.0 } else { r.right() + 5.0 };
                surface.fill_ellipse(Rect::new(tail_x, r.y + 15.0, 20.0, 15.0), color);
            }
        }
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

fn health_bar(surface: &mut dyn Surface, x: f32, y: f32, width: f32, ratio: f32) {
    surface.fill_rect(Rect::new(x, y, width, 4.0), RED);
    surface.fill_rect(Rect::new(x, y, width * ratio.clamp(0.0, 1.0), 4.0), GREEN);
}

impl Sprite for Enemy {
    fn draw(&self, surface: &mut dyn Surface, camera: &Camera, variant: Variant) {
        if !self.alive {
            return;
        }
        let r = camera.apply(&self.rect);
        match variant {
            Variant::TankBattle => {
                let hull = match self.kind {
                    EnemyKind::Heavy => Rgb(150, 0, 0),
                    EnemyKind::Boss => Rgb(100, 0, 0),
                    _ => RED,
                };
                surface.fill_rect(r, hull);
                surface.stroke_rect(r, BLACK, 2.0);
                let barrel_x = match self.direction {
                    Facing::Right => r.right() - 5.0,
                    Facing::Left => r.x - 10.0,
                };
                surface.fill_rect(Rect::new(barrel_x, r.center_y() - 3.0, 15.0, 6.0), GRAY);
                health_bar(surface, r.center_x() - 20.0, r.y - 10.0, 40.0, self.health_ratio());
            }
            Variant::FoxAdventure => {
                let mid = r.x + r.w / 2.0;
                if self.kind == EnemyKind::Boss {
                    surface.fill_rect(r, GRAY);
                    surface.fill_circle(mid, r.y - 15.0, 15.0, BLACK);
                } else {
                    surface.fill_rect(r, BROWN);
                    surface.fill_circle(mid, r.y - 10.0, 12.0, SKIN);
                    let gun_x = match self.direction {
                        Facing::Right => mid,
                        Facing::Left => mid - 20.0,
                    };
                    surface.fill_rect(Rect::new(gun_x, r.y + 15.0, 20.0, 3.0), BLACK);
                }
                if self.health < self.max_health {
                    health_bar(surface, r.x, r.y - 20.0, 30.0, self.health_ratio());
                }
            }
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

impl Sprite for Projectile {
    fn draw(&self, surface: &mut dyn Surface, camera: &Camera, variant: Variant) {
        let r = camera.apply(&self.rect);
        match variant {
            Variant::TankBattle => {
                let color = match self.owner {
                    Owner::Player => YELLOW,
                    Owner::Enemy => RED,
                };
                surface.fill_rect(r, color);
            }
            Variant::FoxAdventure => surface.fill_ellipse(r, YELLOW),
        }
    }
}

// ── Collectibles ──────────────────────────────────────────────────────────────

impl Sprite for Collectible {
    fn draw(&self, surface: &mut dyn Surface, camera: &Camera, variant: Variant) {
        if self.collected {
            return;
        }
        let r = camera.apply(&self.rect).translated(0.0, self.bob_offset());
        let (cx, cy) = (r.center_x(), r.center_y());
        match (variant, self.kind) {
            (Variant::TankBattle, CollectibleKind::Health) => {
                surface.fill_rect(Rect::new(r.x + 7.0, r.y + 2.0, 6.0, 16.0), GREEN);
                surface.fill_rect(Rect::new(r.x + 2.0, r.y + 7.0, 16.0, 6.0), GREEN);
            }
            (Variant::TankBattle, CollectibleKind::ExtraLife) => {
                surface.fill_polygon(
                    &[(cx, r.y), (r.right(), cy), (cx, r.bottom()), (r.x, cy)],
                    BLUE,
                );
            }
            (Variant::FoxAdventure, CollectibleKind::Health) => {
                surface.fill_rect(r, RED);
                surface.fill_rect(Rect::new(r.x + 6.0, r.y + 2.0, 8.0, 16.0), WHITE);
                surface.fill_rect(Rect::new(r.x + 2.0, r.y + 6.0, 16.0, 8.0), WHITE);
            }
            (Variant::FoxAdventure, CollectibleKind::ExtraLife) => {
                surface.fill_circle(cx, cy, 10.0, GREEN);
                surface.fill_circle(cx, cy, 6.0, WHITE);
            }
            (Variant::TankBattle, CollectibleKind::Score) => {
                surface.fill_circle(cx, cy, 8.0, YELLOW)
            }
            (Variant::FoxAdventure, CollectibleKind::Score) => {
                surface.fill_circle(cx, cy, 10.0, YELLOW)
            }
        }
    }
}
