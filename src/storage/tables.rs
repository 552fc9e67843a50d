use redb::TableDefinition;

/// Submission records: id -> Submission (msgpack)
pub const SUBMISSIONS: TableDefinition<&str, &[u8]> = TableDefinition::new("submissions");

/// User records: id -> User (msgpack)
pub const USERS: TableDefinition<&str, &[u8]> = TableDefinition::new("users");
