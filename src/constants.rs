/// Cleaning level given to a task whose room has no prior occurrence to carry forward
pub const DEFAULT_LEVEL_RANK: &str = "L1";

/// Number of distinct workers drawn for a harvest-shift task unless configured otherwise
pub const DEFAULT_HARVEST_CREW_SIZE: usize = 1;

/// SQLite database file used when neither the config file nor DATABASE_PATH names one
pub const DEFAULT_DATABASE_PATH: &str = "rotaclean.db";

/// Role tag of workers that may be scheduled
pub const ROLE_WORKER: &str = "worker";

/// Role tag of administrators; never scheduled
pub const ROLE_ADMIN: &str = "admin";

/// Attempts a status transition makes on its compare-and-set before giving up
pub const STATUS_CAS_ATTEMPTS: usize = 3;

/// Bound on checking a connection out of the pool
pub const POOL_CONNECTION_TIMEOUT_SECS: u64 = 5;
