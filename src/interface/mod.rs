pub mod prompts;
pub mod render;

pub use prompts::{collect_meal_targets, parse_amount, prompt_meal_target};
pub use render::display_report;
