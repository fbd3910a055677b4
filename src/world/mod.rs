pub mod io;
pub mod position;
