//! Reading and writing region files.

pub mod region;
pub mod regionfile;
