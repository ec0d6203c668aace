pub mod ai_parser;
pub mod ai_prompt;
pub mod nutrition_chat;
pub mod plan_editor;
pub mod plan_generator;
pub mod plan_projection;
pub mod quantity_matcher;
pub mod safety;
pub mod unit_conversion;
pub mod unit_rewriter;
pub mod validation;
