//! Avatar support in the `/me`, `/login` and `/profile` routes.

use super::{Edit, Patch};

pub const DEFAULT_TARGET: &str = "api/index.php";

const ME_RESPONSE: &str = r#"    respond(200, [
      "ok" => true,
      "logged_in" => true,
      "user" => [
        "id" => $uid,
        "name" => $_SESSION['username'],
        "created_questions_count" => (int) $count
      ]
    ]);"#;

const ME_RESPONSE_WITH_AVATAR: &str = r#"    // Get user details
    $stmtUser = $pdo->prepare("SELECT username, avatar_seed FROM users WHERE user_id = :uid");
    $stmtUser->execute([':uid' => $uid]);
    $u = $stmtUser->fetch();

    respond(200, [
      "ok" => true,
      "logged_in" => true,
      "user" => [
        "id" => $uid,
        "name" => $u['username'],
        "avatar_seed" => $u['avatar_seed'],
        "created_questions_count" => (int) $count
      ]
    ]);"#;

const LOGIN_USER: &str = r#""user" => ["id" => $user['user_id'], "name" => $user['username']]]);"#;

const LOGIN_USER_WITH_AVATAR: &str = r#""user" => ["id" => $user['user_id'], "name" => $user['username'], "avatar_seed" => $user['avatar_seed'] ?? null]]);"#;

// End of the logged-out branch of `/me`.
const ME_LOGGED_OUT: &str = r#"  } else {
    respond(200, ["ok" => true, "logged_in" => false]);
  }
}"#;

pub const PROFILE_ROUTE_MARKER: &str = "if ($route === '/profile' && $method === 'POST') {";

const PROFILE_ROUTE: &str = r#"

if ($route === '/profile' && $method === 'POST') {
  ensureSchema($pdo);
  $uid = requireLogin();
  $raw = file_get_contents('php://input');
  $req = json_decode($raw, true);

  if (isset($req['avatar_seed'])) {
    $seed = substr((string)$req['avatar_seed'], 0, 64);
    $stmt = $pdo->prepare("UPDATE users SET avatar_seed = :seed WHERE user_id = :uid");
    $stmt->execute([':seed' => $seed, ':uid' => $uid]);
    respond(200, ["ok" => true, "message" => "Avatar updated"]);
  }
  respond(400, ["ok" => false, "error" => "No valid fields to update"]);
}"#;

pub const PATCHES: &[Patch] = &[
    Patch {
        name: "/me",
        edit: Edit::Replace {
            anchor: ME_RESPONSE,
            replacement: ME_RESPONSE_WITH_AVATAR,
        },
    },
    Patch {
        name: "/login",
        edit: Edit::Replace {
            anchor: LOGIN_USER,
            replacement: LOGIN_USER_WITH_AVATAR,
        },
    },
    Patch {
        name: "/profile",
        edit: Edit::InsertAfter {
            anchor: ME_LOGGED_OUT,
            block: PROFILE_ROUTE,
            marker: PROFILE_ROUTE_MARKER,
        },
    },
];
