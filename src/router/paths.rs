pub const LANDING: &str = "/";
pub const LOGIN: &str = "/login";
pub const DASHBOARD: &str = "/dashboard";
pub const ANIMALS: &str = "/animals";
pub const VACCINATION: &str = "/vaccination";
pub const WEIGHTS: &str = "/weights";
pub const REPRODUCTION: &str = "/reproduction";
pub const PASTURES: &str = "/pastures";
pub const REPORTS: &str = "/reports";
pub const SETTINGS: &str = "/settings";
pub const UNAUTHORIZED: &str = "/unauthorized";

/// Where the public-only guard and a successful login send the user.
pub const DEFAULT_AUTHENTICATED: &str = DASHBOARD;

/// Where logout sends the user.
pub const DEFAULT_PUBLIC: &str = LANDING;
