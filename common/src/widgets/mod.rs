//! Widget components for the headcount dashboard display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod cards;
mod controls;
mod footer;
mod header;
mod primitives;
mod schedule_panel;

pub use cards::{Badge, CARD_SPECS, CardSpec, CardView, card_slots, draw_stat_card, draw_stats};
pub use controls::{SCHEDULE_BUTTON_LABEL, draw_control_bar};
pub use footer::draw_footer;
pub use header::{HEADER_TITLE, draw_header};
pub use primitives::{draw_card_background, draw_chip, draw_trend_arrow, fill_rect};
pub use schedule_panel::draw_schedule_panel;
