// Constants for the move solver

/// Smallest puzzle the solver accepts
pub const MIN_DISKS: u8 = 1;

/// Largest puzzle the solver accepts
/// This is a usability cap (255 moves fit on screen), not a limit of the algorithm
pub const MAX_DISKS: u8 = 8;

/// Disk count preselected by the setup dialog
pub const DEFAULT_DISKS: u8 = 3;
