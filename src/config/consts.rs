// src/config/consts.rs

// Portal
pub const PORTAL_URL: &str = "https://fmis.telangana.gov.in/MDM/Reports/DistManVillage.aspx";
pub const USER_AGENT: &str = concat!("ts_locations/", env!("CARGO_PKG_VERSION"));
pub const DISTRICT_SELECT: &str = "ddlDistrict";
pub const MANDAL_SELECT: &str = "ddlMandal";
pub const VILLAGE_SELECT: &str = "ddlVillage";
pub const REQUEST_PAUSE_MS: u64 = 1000; // be polite
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Documents
pub const DEFAULT_REGION: &str = "Telangana";
pub const DEFAULT_STRUCTURE_FILE: &str = "src/constants/telangana_structure.json";
pub const DEFAULT_SCRAPE_FILE: &str = "telangana_structure.json";

// Supervisor SQL
pub const DEFAULT_SQL_FILE: &str = "insert_supervisors.sql";
pub const SUPERVISOR_CONTACT_NAME: &str = "Mandal Supervisor";

/// Supervisor numbers, assigned to locations by position after sorting the
/// locations by name.
pub const SUPERVISOR_NUMBERS: &[&str] = &[
    "8101001", "8101002", "8101003", "8101004", "8101005", "8101006", "8101007", "8101008", "8101009", "8101010", "8101011", "8101012",
    "8102001", "8102002", "8102003", "8102004", "8102005", "8102006", "8102007", "8102008", "8102009", "8102010", "8102011", "8102012", "8102013", "8102014", "8102015", "8102016", "8102017", "8102018", "8102019", "8102020", "8102021", "8102022", "8102023",
    "8108001", "8108002", "8108003", "8108004", "8108005", "8108006", "8108007", "8108008", "8108009", "8108010", "8108011",
    "8108001", "8108002", "8108003", "8108004", "8108005", "8108006", "8108007", "8108008", "8108009", "8108010",
    "8111001", "8111002", "8111003", "8111004", "8111005", "8111006", "8111007", "8111008", "8111009", "8111010", "8111011", "8111012",
    "8113001", "8113002", "8113003", "8113004", "8113005", "8113006", "8113007", "8113008", "8113009", "8113010", "8113011",
    "8113001", "8113002", "8113003", "8113004", "8113005", "8113006", "8113007", "8113008", "8113009", "8113010", "8113011", "8113012", "8113013", "8113014", "8113015", "8113016",
    "8113001", "8113002", "8113003", "8113004", "8113005", "8113006", "8113007", "8113008", "8113009", "8113010", "8113011", "8113012", "8113013", "8113014", "8113015", "8113016",
    "8113001", "8113002", "8113003", "8113004", "8113005", "8113006", "8113007", "8113008", "8113009", "8113010", "8113011", "8113012", "8113013", "8113014", "8113015", "8113016",
    "8113001", "8113002", "8113003", "8113004", "8113005", "8113006", "8113007", "8113008", "8113009", "8113010",
    "8113001", "8113002", "8113003", "8113004", "8113005", "8113006", "8113007", "8113008", "8113009", "8113010", "8113011", "8113012", "8113013", "8113014",
    "8113001", "8113002", "8113003", "8113004", "8113005", "8113006", "8113007", "8113008", "8113009",
    "8114001", "8114002", "8114003", "8114004", "8114005", "8114006", "8114007", "8114008",
    "8114001", "8114002", "8114003", "8114004", "8114005", "8114006", "8114007", "8114008", "8114009", "8114010",
];
