pub mod prompts;
pub mod render;

pub use prompts::{
    PlanAction, collect_plan_request, prompt_body_profile, prompt_cheat_meals, prompt_goal,
    prompt_path, prompt_plan_action, prompt_preferences, prompt_yes_no,
};
pub use render::{display_food_list, display_plan};
