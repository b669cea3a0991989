//! Hard input limits. Generous enough that no legitimate request trips them.

pub const MAX_NAME_LEN: usize = 128;
pub const MAX_PURPOSE_LEN: usize = 512;
pub const MAX_RESERVATIONS: usize = 10_000;
