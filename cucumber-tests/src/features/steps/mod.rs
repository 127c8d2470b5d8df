pub mod inference_steps;
pub mod template_steps;
