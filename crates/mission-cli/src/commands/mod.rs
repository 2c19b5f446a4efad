pub mod artifacts;
pub mod events;
pub mod run;

/// Exit status when no malware events were found.
pub const EXIT_NO_OBSERVABLES: u8 = 1;
