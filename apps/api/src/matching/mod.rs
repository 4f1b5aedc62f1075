// Job matching: fetch listings from the external feed, score them against a
// profile's technical skills, rank them.

pub mod feed;
pub mod handlers;
pub mod matcher;
