pub mod record_file;
pub mod router;
pub mod seed;
pub mod settings_file;
pub mod theme;

pub const APP_NAME: &str = "Pacman Remastered";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
