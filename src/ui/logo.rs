//! Logo asset shown in the screen header.

pub const LOGO: &[&str] = &[
    r"   .--.   .--.   ",
    r"  /    \ /    \  ",
    r" |  ----(o)---- | ",
    r"  \    / \    /  ",
    r"   '--'   '--'   ",
];

/// Width in columns of the widest logo line.
pub fn logo_width() -> u16 {
    LOGO.iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u16
}

pub fn logo_height() -> u16 {
    LOGO.len() as u16
}
