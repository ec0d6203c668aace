pub mod completion;
pub mod gemini;
pub mod models;
pub mod store;
pub mod supabase;
