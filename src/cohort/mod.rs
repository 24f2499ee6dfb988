mod presets;


pub use presets::{COHORT_A, COHORT_B, Cohort, CohortPresets};
