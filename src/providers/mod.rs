pub mod fs;
pub mod http;
pub mod player_reader;
pub mod player_writer;
pub mod settings_reader;
