//! `avatar_seed` column on the `users` table.

use super::{Edit, Patch};

pub const DEFAULT_TARGET: &str = "api/index.php";

const USERS_TABLE: &str = r#"      user_id BIGINT UNSIGNED PRIMARY KEY AUTO_INCREMENT,
      username VARCHAR(64) NOT NULL UNIQUE,
      password_hash VARCHAR(255) NOT NULL,
      created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE utf8mb4_unicode_ci;
  ");"#;

const USERS_TABLE_WITH_AVATAR: &str = r#"      user_id BIGINT UNSIGNED PRIMARY KEY AUTO_INCREMENT,
      username VARCHAR(64) NOT NULL UNIQUE,
      password_hash VARCHAR(255) NOT NULL,
      avatar_seed VARCHAR(64) DEFAULT NULL,
      created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE utf8mb4_unicode_ci;
  ");

  execIgnore($pdo, "ALTER TABLE users ADD COLUMN avatar_seed VARCHAR(64) DEFAULT NULL");"#;

pub const AVATAR_COLUMN: &str = "avatar_seed VARCHAR(64) DEFAULT NULL,";
pub const AVATAR_MIGRATION: &str =
    r#"execIgnore($pdo, "ALTER TABLE users ADD COLUMN avatar_seed VARCHAR(64) DEFAULT NULL");"#;

pub const PATCHES: &[Patch] = &[Patch {
    name: "users.avatar_seed",
    edit: Edit::Replace {
        anchor: USERS_TABLE,
        replacement: USERS_TABLE_WITH_AVATAR,
    },
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacement_carries_column_and_migration() {
        assert_eq!(USERS_TABLE_WITH_AVATAR.matches(AVATAR_COLUMN).count(), 1);
        assert_eq!(USERS_TABLE_WITH_AVATAR.matches(AVATAR_MIGRATION).count(), 1);
        assert!(!USERS_TABLE_WITH_AVATAR.contains(USERS_TABLE));
    }
}
