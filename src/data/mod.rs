mod loader;

pub use loader::{
    load_questions_from_json, load_questions_from_str, LoadError, DEFAULT_QUESTIONS_PATH,
};
