pub const ROOT_NAME: &str = "root";
pub const DEFAULT_DELIMITER: u8 = b',';
pub const RULE_IF: &str = "IF";
pub const RULE_AND: &str = "AND";
pub const RULE_IS: &str = "IS";
pub const RULE_THEN: &str = "THAN";
