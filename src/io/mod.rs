// Purpose - external interfaces: the platform audio output

pub mod output;

pub use output::CpalOutput;
