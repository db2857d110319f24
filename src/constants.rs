// Experiment defaults
pub const DEFAULT_NUM_GENES: u32 = 10;
pub const DEFAULT_REPLICATES: u32 = 100;
// One year per generation, ten generations to prevail
pub const DEFAULT_MUTATION_TIME_YEARS: f64 = 10.0;

// Genome encoding
pub const DIGIT_BASE: u64 = 10;
pub const MAX_JOINT_GENES: u32 = 19; // 10^19 - 1 still fits in a u64

// Above this width a joint replicate takes minutes or longer
pub const SLOW_JOINT_GENES: u32 = 7;
