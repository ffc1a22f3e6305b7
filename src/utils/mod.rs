pub mod user_io;
