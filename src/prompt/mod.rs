mod templates;


pub use templates::build_prompt;
