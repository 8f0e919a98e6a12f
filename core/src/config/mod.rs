// Kit configuration, loaded from JSON (embedded default or a user file)
pub mod settings;
