/// Highest rank tracked by the bucket tables. Entries ranked lower are
/// excluded from ranking and traffic totals but stay visible in filtered
/// views.
pub const MAX_TRACKED_RANK: u32 = 20;

/// Assumed click-through rate by ranking position, 1-indexed at offset 0.
///
/// Positions 1-10 come from published CTR measurements; 11-20 follow an
/// estimated decay model. These are configuration data, not something the
/// engine derives. Values are strictly decreasing.
pub const CTR_BY_POSITION: [f64; MAX_TRACKED_RANK as usize] = [
    0.398, 0.187, 0.102, 0.072, 0.051, 0.044, 0.030, 0.021, 0.019, 0.016, 0.014, 0.012, 0.010,
    0.009, 0.008, 0.007, 0.006, 0.005, 0.004, 0.003,
];

/// CTR fraction for a 1-based rank; `None` outside the tracked range.
pub fn ctr_for_rank(rank: u32) -> Option<f64> {
    if rank == 0 || rank > MAX_TRACKED_RANK {
        return None;
    }
    Some(CTR_BY_POSITION[(rank - 1) as usize])
}
