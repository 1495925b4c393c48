//! Authored show: four dimmable RGB fixtures and their scenes.
//!
//! Each scene pairs a "wash" color (fixtures 1 and 3) with a "stage" color
//! (fixtures 2 and 4). Scene 0 is blackout.

use crate::color::{
    BLUE, BRIGHTNESS_FULL, CYAN, GREEN, MAGENTA, ORANGE, PURPLE, RED, Rgb, WHITE, YELLOW,
};
use crate::error::AuthoringError;
use crate::fixture::{FixtureLook, FixturePatch, look_row, off_row, patch_slots, slot_count};
use crate::resolver::{ResolverConfig, SceneResolver};
use crate::scene::{SceneRow, SceneTable};
use crate::slot::SlotTable;

pub const RIG_FIXTURES: usize = 4;
pub const RIG_SCENE_COUNT: usize = 19;

/// Fixture wiring: brightness, R, G, B on consecutive channels
pub const RIG_PATCH: [FixturePatch; RIG_FIXTURES] = [
    FixturePatch::dimmable_rgb(1),
    FixturePatch::dimmable_rgb(10),
    FixturePatch::dimmable_rgb(20),
    FixturePatch::dimmable_rgb(30),
];

pub const RIG_SLOTS: usize = slot_count(&RIG_PATCH);

pub static RIG_SLOT_TABLE: SlotTable<RIG_SLOTS> = patch_slots(&RIG_PATCH);

const fn wash_stage(wash: Rgb, stage: Rgb) -> SceneRow<RIG_SLOTS> {
    let wash = FixtureLook::dimmable_rgb(BRIGHTNESS_FULL, wash);
    let stage = FixtureLook::dimmable_rgb(BRIGHTNESS_FULL, stage);
    look_row(&RIG_PATCH, &[wash, stage, wash, stage])
}

pub static RIG_SCENES: [SceneRow<RIG_SLOTS>; RIG_SCENE_COUNT] = [
    off_row(&RIG_PATCH),
    wash_stage(ORANGE, BLUE),
    wash_stage(BLUE, ORANGE),
    wash_stage(BLUE, GREEN),
    wash_stage(RED, BLUE),
    wash_stage(WHITE, GREEN),
    wash_stage(MAGENTA, CYAN),
    wash_stage(YELLOW, GREEN),
    wash_stage(CYAN, RED),
    wash_stage(GREEN, BLUE),
    wash_stage(GREEN, RED),
    wash_stage(RED, PURPLE),
    wash_stage(PURPLE, RED),
    wash_stage(WHITE, RED),
    wash_stage(GREEN, PURPLE),
    wash_stage(BLUE, BLUE),
    wash_stage(RED, RED),
    wash_stage(GREEN, GREEN),
    wash_stage(WHITE, WHITE),
];

/// Resolver over the authored show
pub fn rig_resolver(
    config: &ResolverConfig,
) -> Result<SceneResolver<'static, RIG_SLOTS>, AuthoringError> {
    SceneResolver::new(&RIG_SLOT_TABLE, SceneTable::new(&RIG_SCENES), config)
}
