pub mod client;
pub mod player_reader;
pub mod player_writer;
