pub mod posting;

pub use posting::JobPosting;
